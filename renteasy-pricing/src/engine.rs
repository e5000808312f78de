use renteasy_core::property::Property;
use renteasy_core::stay::StayDates;

use crate::config::PricingConfig;
use crate::quote::{BookingQuote, QuoteError};

/// Nightly-rate and quote computation. Pure and synchronous: identical
/// inputs always produce identical quotes.
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Nightly rate for the stay. Flat base rate unless dynamic pricing is
    /// on, in which case weekend nights are blended in at the configured
    /// multiplier. Zero-night stays are a caller bug: validation rejects
    /// them before pricing runs.
    pub fn effective_nightly_rate(&self, base_rate: f64, stay: &StayDates) -> f64 {
        if !self.config.enable_dynamic_pricing {
            return base_rate;
        }

        let nights = stay.nights();
        debug_assert!(nights > 0, "effective_nightly_rate needs a positive-night stay");

        let weekend_nights = stay.weekend_nights() as f64;
        let weekday_nights = stay.weekday_nights() as f64;
        let weekend_rate = base_rate * self.config.weekend_multiplier;

        (weekday_nights * base_rate + weekend_nights * weekend_rate) / nights as f64
    }

    /// Fallible quote path. Callers that need to distinguish failure causes
    /// use this; `quote` wraps it with the safe fallback.
    pub fn try_quote(
        &self,
        property: &Property,
        stay: &StayDates,
    ) -> Result<BookingQuote, QuoteError> {
        let nights = stay.nights();
        if nights <= 0 {
            return Err(QuoteError::InvalidDateRange);
        }

        property
            .validate_rates()
            .map_err(|err| QuoteError::MalformedRates(err.to_string()))?;

        let price_per_night = self.effective_nightly_rate(property.price_per_night, stay);
        let subtotal = nights as f64 * price_per_night;
        let taxes = if self.config.include_taxes {
            (subtotal + property.cleaning_fee + property.service_fee) * self.config.tax_rate
        } else {
            0.0
        };
        let total = subtotal + property.cleaning_fee + property.service_fee + taxes;

        Ok(BookingQuote {
            nights,
            price_per_night,
            subtotal,
            cleaning_fee: property.cleaning_fee,
            service_fee: property.service_fee,
            taxes,
            total,
            is_valid: true,
            errors: Vec::new(),
        })
    }

    /// Infallible quote: a pricing failure degrades to the all-zero invalid
    /// quote so the rendering layer never crashes on bad rate data.
    pub fn quote(&self, property: &Property, stay: &StayDates) -> BookingQuote {
        match self.try_quote(property, stay) {
            Ok(quote) => quote,
            Err(QuoteError::InvalidDateRange) => BookingQuote::invalid("Invalid date range"),
            Err(err) => {
                tracing::warn!(
                    property_id = %property.id,
                    error = %err,
                    "price calculation failed, returning zero quote"
                );
                BookingQuote::invalid(format!("Price calculation failed: {}", err.suggestion()))
            }
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn property(price_per_night: f64) -> Property {
        let mut property = Property::new("Seaside Cottage", price_per_night);
        property.cleaning_fee = 50.0;
        property.service_fee = 20.0;
        property
    }

    #[test]
    fn test_flat_rate_when_dynamic_pricing_disabled() {
        let engine = PricingEngine::default();
        // Fri -> Sun is half weekend nights, still flat
        let stay = StayDates::new(date(2024, 6, 7), date(2024, 6, 9));
        assert_eq!(engine.effective_nightly_rate(100.0, &stay), 100.0);
    }

    #[test]
    fn test_weekend_blended_rate() {
        let engine = PricingEngine::new(PricingConfig {
            enable_dynamic_pricing: true,
            weekend_multiplier: 1.2,
            ..PricingConfig::default()
        });
        // Fri night at 100, Sat night at 120, blended over 2 nights
        let stay = StayDates::new(date(2024, 6, 7), date(2024, 6, 9));
        let rate = engine.effective_nightly_rate(100.0, &stay);
        assert!((rate - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_quote_totals() {
        let engine = PricingEngine::default();
        let stay = StayDates::new(date(2024, 6, 3), date(2024, 6, 6));
        let quote = engine.quote(&property(100.0), &stay);

        assert!(quote.is_valid);
        assert_eq!(quote.nights, 3);
        assert!((quote.subtotal - 300.0).abs() < 1e-9);
        assert!((quote.taxes - 44.4).abs() < 1e-9);
        assert!((quote.total - 414.4).abs() < 1e-9);
    }

    #[test]
    fn test_quote_without_taxes() {
        let engine = PricingEngine::new(PricingConfig {
            include_taxes: false,
            ..PricingConfig::default()
        });
        let stay = StayDates::new(date(2024, 6, 3), date(2024, 6, 6));
        let quote = engine.quote(&property(100.0), &stay);

        assert_eq!(quote.taxes, 0.0);
        assert!((quote.total - 370.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_range_degrades_to_zero_quote() {
        let engine = PricingEngine::default();
        let stay = StayDates::new(date(2024, 6, 6), date(2024, 6, 3));
        let quote = engine.quote(&property(100.0), &stay);

        assert!(!quote.is_valid);
        assert_eq!(quote.total, 0.0);
        assert_eq!(quote.errors, vec!["Invalid date range".to_string()]);
    }

    #[test]
    fn test_malformed_rates_degrade_to_zero_quote() {
        let engine = PricingEngine::default();
        let stay = StayDates::new(date(2024, 6, 3), date(2024, 6, 6));
        let quote = engine.quote(&property(-100.0), &stay);

        assert!(!quote.is_valid);
        assert_eq!(quote.total, 0.0);
        assert!(quote.errors[0].contains("refresh"));
    }

    #[test]
    fn test_try_quote_reports_malformed_rates() {
        let engine = PricingEngine::default();
        let stay = StayDates::new(date(2024, 6, 3), date(2024, 6, 6));
        let err = engine.try_quote(&property(f64::NAN), &stay).unwrap_err();

        assert!(matches!(err, QuoteError::MalformedRates(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_quote_is_deterministic() {
        let engine = PricingEngine::new(PricingConfig {
            enable_dynamic_pricing: true,
            ..PricingConfig::default()
        });
        let stay = StayDates::new(date(2024, 6, 5), date(2024, 6, 12));
        let property = property(137.5);

        let first = engine.quote(&property, &stay);
        let second = engine.quote(&property, &stay);
        assert_eq!(first, second);
    }
}
