use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// Rate card and capacity for a bookable property. Supplied by the property
/// data source and treated as read-only input; monetary values are plain
/// floats rounded only at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub price_per_night: f64,
    #[serde(default)]
    pub cleaning_fee: f64,
    #[serde(default)]
    pub service_fee: f64,
    /// Maximum occupancy. Listings without one fall back to the configured
    /// default capacity during validation.
    #[serde(default)]
    pub max_guests: Option<i32>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Property {
    pub fn new(name: impl Into<String>, price_per_night: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price_per_night,
            cleaning_fee: 0.0,
            service_fee: 0.0,
            max_guests: None,
            currency: default_currency(),
        }
    }

    /// Reject rate data the pricing engine cannot safely compute with.
    pub fn validate_rates(&self) -> CoreResult<()> {
        for (field, value) in [
            ("price_per_night", self.price_per_night),
            ("cleaning_fee", self.cleaning_fee),
            ("service_fee", self.service_fee),
        ] {
            if !value.is_finite() {
                return Err(CoreError::PropertyDataError(format!(
                    "{field} is not a finite number"
                )));
            }
            if value < 0.0 {
                return Err(CoreError::PropertyDataError(format!(
                    "{field} is negative ({value})"
                )));
            }
        }
        if let Some(max_guests) = self.max_guests {
            if max_guests < 1 {
                return Err(CoreError::PropertyDataError(format!(
                    "max_guests must be at least 1 (got {max_guests})"
                )));
            }
        }
        Ok(())
    }
}
