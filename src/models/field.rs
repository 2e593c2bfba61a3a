use std::collections::HashMap;
use std::fmt;

/// The four fields the income entry form exposes to the calculator,
/// addressed by their stable identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ProductSubtotal,
    Discount,
    ShippingCost,
    Total,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::ProductSubtotal,
        FieldId::Discount,
        FieldId::ShippingCost,
        FieldId::Total,
    ];

    /// The three fields that feed the total formula.
    pub const OPERANDS: [FieldId; 3] = [
        FieldId::ProductSubtotal,
        FieldId::Discount,
        FieldId::ShippingCost,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FieldId::ProductSubtotal => "id_product_subtotal",
            FieldId::Discount => "id_discount",
            FieldId::ShippingCost => "id_shipping_cost",
            FieldId::Total => "id_total",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "id_product_subtotal" => Some(FieldId::ProductSubtotal),
            "id_discount" => Some(FieldId::Discount),
            "id_shipping_cost" => Some(FieldId::ShippingCost),
            "id_total" => Some(FieldId::Total),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::ProductSubtotal => "Product subtotal",
            FieldId::Discount => "Discount",
            FieldId::ShippingCost => "Shipping cost",
            FieldId::Total => "Total",
        }
    }

    pub fn is_operand(&self) -> bool {
        !matches!(self, FieldId::Total)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The events an operand field can emit. All three trigger the same
/// recomputation; redundant firings for a single keystroke are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Value changed while typing.
    Input,
    /// Value committed.
    Change,
    /// Focus left the field.
    Blur,
}

/// The form's field store. Fields are registered explicitly by the caller;
/// a form may be missing any subset of them, and reads of unregistered
/// fields yield `None` rather than an error.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: HashMap<FieldId, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, field: FieldId, initial: impl Into<String>) {
        self.values.insert(field, initial.into());
    }

    /// Builder-style registration, convenient in tests.
    pub fn with_field(mut self, field: FieldId, initial: impl Into<String>) -> Self {
        self.register(field, initial);
        self
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.values.contains_key(&field)
    }

    /// True when all four required fields are registered.
    pub fn complete(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.contains(*field))
    }

    pub fn value(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Updates a field's stored text. Returns false when the field is not
    /// registered, leaving the store untouched.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        match self.values.get_mut(&field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Numeric view of a field, with unparseable or missing text coerced
    /// to zero.
    pub fn amount(&self, field: FieldId) -> f64 {
        parse_amount(self.value(field).unwrap_or(""))
    }
}

/// Lenient numeric parse used across the form: surrounding whitespace is
/// ignored and the longest leading numeric prefix (sign, integer digits,
/// optional fraction, optional exponent) is honored, so "12abc" reads as
/// 12 and "2.5e2" as 250. Anything with no usable prefix, including the
/// empty string, coerces to 0.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'+' | b'-' if i == 0 => {}
            b'.' if !seen_dot => seen_dot = true,
            b'0'..=b'9' => seen_digit = true,
            _ => break,
        }
        end = i + 1;
    }

    if !seen_digit {
        return 0.0;
    }

    // An exponent suffix counts only when complete: "1e3" is 1000 but a
    // dangling "1e" or "1e+" falls back to the mantissa alone.
    if let Some(len) = exponent_len(&bytes[end..]) {
        end += len;
    }

    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

fn exponent_len(rest: &[u8]) -> Option<usize> {
    if !matches!(rest.first(), Some(b'e' | b'E')) {
        return None;
    }
    let mut len = 1;
    if matches!(rest.get(len), Some(b'+' | b'-')) {
        len += 1;
    }
    let digits = rest[len..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    Some(len + digits)
}
