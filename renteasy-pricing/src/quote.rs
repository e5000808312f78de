use serde::{Deserialize, Serialize};

/// Priced breakdown for a stay. Recomputed from scratch on every input
/// change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingQuote {
    pub nights: i64,
    /// Effective nightly rate after any dynamic-pricing blend
    pub price_per_night: f64,
    pub subtotal: f64,
    pub cleaning_fee: f64,
    pub service_fee: f64,
    pub taxes: f64,
    pub total: f64,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl BookingQuote {
    /// Safe all-zero quote returned whenever pricing cannot proceed. The UI
    /// always has a renderable breakdown, just not a bookable one.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            nights: 0,
            price_per_night: 0.0,
            subtotal: 0.0,
            cleaning_fee: 0.0,
            service_fee: 0.0,
            taxes: 0.0,
            total: 0.0,
            is_valid: false,
            errors: vec![error.into()],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Invalid date range")]
    InvalidDateRange,

    #[error("Malformed rate data: {0}")]
    MalformedRates(String),
}

impl QuoteError {
    /// Quote failures are never transient: the same inputs will fail again.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// User-facing recovery hint surfaced next to the error message.
    pub fn suggestion(&self) -> &'static str {
        match self {
            QuoteError::InvalidDateRange => "reselect your dates",
            QuoteError::MalformedRates(_) => "refresh the page and try again",
        }
    }
}
