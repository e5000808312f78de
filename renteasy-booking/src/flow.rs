use chrono::NaiveDate;
use renteasy_core::guest::GuestSelection;
use renteasy_core::property::Property;
use renteasy_core::stay::StayDates;
use renteasy_pricing::{BookingQuote, PricingConfig, PricingEngine};
use uuid::Uuid;

use crate::validation::{self, ValidationLimits};
use crate::verdict::{self, BookingValidation};

/// Quote plus verdict for one snapshot of booking inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingAssessment {
    pub quote: BookingQuote,
    pub validation: BookingValidation,
}

/// Inputs that feed a single assessment, used as the memo key. Rates are
/// compared through their bit patterns so NaN never defeats the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AssessmentKey {
    property_id: Uuid,
    rate_bits: [u64; 3],
    max_guests: Option<i32>,
    stay: StayDates,
    guests: GuestSelection,
    today: NaiveDate,
}

impl AssessmentKey {
    fn of(property: &Property, stay: &StayDates, guests: &GuestSelection, today: NaiveDate) -> Self {
        Self {
            property_id: property.id,
            rate_bits: [
                property.price_per_night.to_bits(),
                property.cleaning_fee.to_bits(),
                property.service_fee.to_bits(),
            ],
            max_guests: property.max_guests,
            stay: *stay,
            guests: *guests,
            today,
        }
    }
}

/// Orchestrates one booking form's calculation pipeline: price the stay,
/// validate dates and guests against the same input snapshot, then merge
/// everything into a single verdict.
pub struct BookingFlow {
    engine: PricingEngine,
    limits: ValidationLimits,
    memo: Option<(AssessmentKey, BookingAssessment)>,
}

impl BookingFlow {
    pub fn new(pricing: PricingConfig, limits: ValidationLimits) -> Self {
        Self {
            engine: PricingEngine::new(pricing),
            limits,
            memo: None,
        }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Assess the current inputs. The last result is memoized by input
    /// identity; recomputing unconditionally yields the identical value, the
    /// memo only saves work between keystrokes.
    pub fn evaluate(
        &mut self,
        property: &Property,
        stay: &StayDates,
        guests: &GuestSelection,
        today: NaiveDate,
    ) -> BookingAssessment {
        let key = AssessmentKey::of(property, stay, guests, today);
        if let Some((cached_key, cached)) = &self.memo {
            if *cached_key == key {
                tracing::debug!(property_id = %property.id, "assessment memo hit");
                return cached.clone();
            }
        }

        let assessment = self.assess(property, stay, guests, today);
        if !assessment.validation.is_valid {
            tracing::warn!(
                property_id = %property.id,
                errors = ?assessment.validation.errors,
                "booking inputs rejected"
            );
        }

        self.memo = Some((key, assessment.clone()));
        assessment
    }

    fn assess(
        &self,
        property: &Property,
        stay: &StayDates,
        guests: &GuestSelection,
        today: NaiveDate,
    ) -> BookingAssessment {
        let quote = self.engine.quote(property, stay);
        let date_errors = validation::validate_stay(stay, &self.limits, today);
        let guest_errors = validation::validate_guests(guests, property.max_guests, &self.limits);

        let capacity = property.max_guests.unwrap_or(self.limits.fallback_max_guests);
        let validation = verdict::aggregate(date_errors, guest_errors, &quote, guests, capacity);

        BookingAssessment { quote, validation }
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new(PricingConfig::default(), ValidationLimits::default())
    }
}
