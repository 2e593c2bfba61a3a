use tracing::debug;

use crate::models::field::{parse_amount, FieldId, FormFields};

/// Tone pair for a valid, positive total.
pub const POSITIVE_BACKGROUND: &str = "#e8f5e8";
pub const POSITIVE_TEXT: &str = "#2e7d32";

/// Tone pair for a zero or negative total.
pub const NEGATIVE_BACKGROUND: &str = "#ffebee";
pub const NEGATIVE_TEXT: &str = "#c62828";

/// The literal message shown when the submit guard rejects the total.
pub const BLOCKED_TOTAL_MESSAGE: &str =
    "Error: El total debe ser mayor que 0. Verifique el subtotal, descuento y costo de envío.";

/// The result of one recomputation: the total formatted to two decimals
/// plus the tone pair matching its sign. The calculator never touches a
/// UI itself; an adapter applies this to the real total field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalRender {
    pub value: String,
    pub background: &'static str,
    pub text_color: &'static str,
}

impl TotalRender {
    fn for_total(total: f64) -> Self {
        // Avoid a "-0.00" display when the operands cancel out exactly.
        let total = if total == 0.0 { 0.0 } else { total };

        let (background, text_color) = if total > 0.0 {
            (POSITIVE_BACKGROUND, POSITIVE_TEXT)
        } else {
            (NEGATIVE_BACKGROUND, NEGATIVE_TEXT)
        };

        Self {
            value: format!("{:.2}", total),
            background,
            text_color,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.background == POSITIVE_BACKGROUND
    }
}

/// Outcome of the submit guard over the total field's current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Allow,
    Block { message: &'static str },
}

/// The form total calculator. Construction succeeds only when every field
/// it depends on is registered; an incomplete form leaves the whole
/// component inert rather than raising an error.
#[derive(Debug)]
pub struct Calculator {
    _private: (),
}

impl Calculator {
    pub fn initialize(fields: &FormFields) -> Option<Self> {
        if fields.complete() {
            Some(Self { _private: () })
        } else {
            debug!("income form is missing required fields, calculator left inert");
            None
        }
    }

    /// Recomputes `subtotal - discount + shipping` from the current operand
    /// text, coercing unparseable values to zero. Pure: no mutation, no I/O.
    pub fn recompute(&self, fields: &FormFields) -> TotalRender {
        let subtotal = fields.amount(FieldId::ProductSubtotal);
        let discount = fields.amount(FieldId::Discount);
        let shipping = fields.amount(FieldId::ShippingCost);

        let total = subtotal - discount + shipping;
        debug!(subtotal, discount, shipping, total, "recomputed form total");

        TotalRender::for_total(total)
    }
}

/// Checks the total field's *currently displayed* text, not a recomputed
/// value, so a manual edit of the total is what gets gated. Independent of
/// `Calculator` because the guard still runs on forms whose operand fields
/// are missing.
pub fn guard_submit(current_total_text: &str) -> SubmitDecision {
    let total = parse_amount(current_total_text);
    if total <= 0.0 {
        SubmitDecision::Block {
            message: BLOCKED_TOTAL_MESSAGE,
        }
    } else {
        SubmitDecision::Allow
    }
}
