use renteasy_core::guest::GuestSelection;
use renteasy_core::property::Property;
use renteasy_core::stay::StayDates;
use renteasy_pricing::BookingQuote;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire payload handed to the external booking-creation API. Dates go out
/// as ISO-8601 calendar dates; the guest breakdown is kept alongside the
/// flattened count for auditing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub property_id: Uuid,
    pub check_in_date: String,
    pub check_out_date: String,
    /// Adults + children; infants ride along in `guest_details` only
    pub number_of_guests: i32,
    pub guest_details: GuestSelection,
    pub total_price: f64,
    pub currency: String,
    /// Opaque pass-through fields (special requests, promo codes, ...)
    #[serde(default)]
    pub extras: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("booking request assembled without a complete date range")]
    IncompleteDates,
}

impl BookingRequest {
    /// Map validated inputs into the wire shape. Missing dates here mean the
    /// caller skipped validation; gate this behind `BookingValidation::is_valid`.
    pub fn assemble(
        property: &Property,
        stay: &StayDates,
        guests: &GuestSelection,
        quote: &BookingQuote,
        extras: serde_json::Value,
    ) -> Result<Self, AssembleError> {
        let (Some(check_in), Some(check_out)) = (stay.check_in, stay.check_out) else {
            return Err(AssembleError::IncompleteDates);
        };

        Ok(Self {
            property_id: property.id,
            check_in_date: check_in.format("%Y-%m-%d").to_string(),
            check_out_date: check_out.format("%Y-%m-%d").to_string(),
            number_of_guests: guests.occupancy(),
            guest_details: *guests,
            total_price: quote.total,
            currency: property.currency.clone(),
            extras,
        })
    }
}
