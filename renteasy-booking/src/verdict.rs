use renteasy_core::guest::GuestSelection;
use renteasy_pricing::BookingQuote;
use serde::{Deserialize, Serialize};

/// Stays longer than this are allowed but get a heads-up warning.
pub const LONG_STAY_NIGHTS: i64 = 14;

/// The single verdict the UI gates submission on. Exactly two states:
/// valid (submit enabled) or invalid (submit blocked, reasons listed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Merge independently computed date, guest and pricing errors into one
/// verdict. Warnings are advisory and never block submission.
pub fn aggregate(
    date_errors: Vec<String>,
    guest_errors: Vec<String>,
    quote: &BookingQuote,
    guests: &GuestSelection,
    capacity: i32,
) -> BookingValidation {
    let mut errors = date_errors;
    errors.extend(guest_errors);
    errors.extend(quote.errors.iter().cloned());

    let mut warnings = Vec::new();
    if quote.nights > LONG_STAY_NIGHTS {
        warnings.push(format!(
            "Long stay: contact the host for stays over {LONG_STAY_NIGHTS} nights"
        ));
    }
    if guests.occupancy() == capacity {
        warnings.push("You are at the maximum guest capacity for this property".to_string());
    }

    BookingValidation {
        is_valid: errors.is_empty() && quote.is_valid,
        errors,
        warnings,
    }
}
