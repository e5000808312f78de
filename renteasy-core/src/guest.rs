use serde::{Deserialize, Serialize};

/// Guest counts for a booking. Counts are signed so that out-of-range input
/// from the UI layer can be rejected by validation instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestSelection {
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
}

impl GuestSelection {
    pub fn new(adults: i32, children: i32, infants: i32) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    /// Guests counted against property capacity. Infants stay on a lap and
    /// never occupy a berth.
    pub fn occupancy(&self) -> i32 {
        self.adults + self.children
    }

    pub fn total(&self) -> i32 {
        self.adults + self.children + self.infants
    }
}

impl Default for GuestSelection {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}
