use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Currencies the income form accepts, by ISO 4217 code.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ars,
    Usd,
    Eur,
    Brl,
    Clp,
    Uyu,
    Pen,
    Cop,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::Ars,
        Currency::Usd,
        Currency::Eur,
        Currency::Brl,
        Currency::Clp,
        Currency::Uyu,
        Currency::Pen,
        Currency::Cop,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ars => "ARS",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Brl => "BRL",
            Currency::Clp => "CLP",
            Currency::Uyu => "UYU",
            Currency::Pen => "PEN",
            Currency::Cop => "COP",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Ars => "Peso Argentino",
            Currency::Usd => "Dólar Estadounidense",
            Currency::Eur => "Euro",
            Currency::Brl => "Real Brasileño",
            Currency::Clp => "Peso Chileno",
            Currency::Uyu => "Peso Uruguayo",
            Currency::Pen => "Sol Peruano",
            Currency::Cop => "Peso Colombiano",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Ars
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// request dto
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct StoreIncomeRequest {
    #[validate(length(max = 30, message = "Order number must be at most 30 characters"))]
    pub order_number: Option<String>,

    pub currency: Currency,

    pub product_subtotal: f64,

    pub discount: f64,

    pub shipping_cost: f64,

    pub total: f64,
}

// custom error
#[derive(Debug, thiserror::Error)]
pub enum IncomeDraftError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Total must be greater than 0")]
    NonPositiveTotal,
}

/// A finished income entry as the operator confirmed it, ready for export.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IncomeDraft {
    pub id: Uuid,
    pub order_number: Option<String>,
    pub date: NaiveDate,
    pub currency: Currency,
    pub product_subtotal: f64,
    pub discount: f64,
    pub shipping_cost: f64,
    pub total: f64,
}

impl IncomeDraft {
    /// Builds a draft from a confirmed request. Mirrors the submit guard at
    /// the model level: a non-positive total is rejected here too.
    pub fn new(request: StoreIncomeRequest) -> Result<Self, IncomeDraftError> {
        request.validate()?;

        if request.total <= 0.0 {
            return Err(IncomeDraftError::NonPositiveTotal);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            order_number: request
                .order_number
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            date: Local::now().date_naive(),
            currency: request.currency,
            product_subtotal: request.product_subtotal,
            discount: request.discount,
            shipping_cost: request.shipping_cost,
            total: request.total,
        })
    }
}
