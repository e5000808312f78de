use chrono::{Duration, NaiveDate};
use renteasy_core::guest::GuestSelection;
use renteasy_core::stay::StayDates;
use serde::{Deserialize, Serialize};

/// Bounds a requested stay must satisfy before it can be priced and
/// submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationLimits {
    pub min_nights: i64,
    pub max_nights: i64,
    /// How far ahead of `today` a check-in may be
    pub advance_booking_days: i64,
    /// Capacity used when a listing does not state its own max_guests
    pub fallback_max_guests: i32,
    pub max_adults: i32,
    pub max_children: i32,
    pub max_infants: i32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_nights: 1,
            max_nights: 30,
            advance_booking_days: 365,
            fallback_max_guests: 16,
            max_adults: 12,
            max_children: 8,
            max_infants: 4,
        }
    }
}

/// Date-range checks. `today` is injected by the caller and captured once
/// per validation pass so a single assessment never reads the clock twice.
pub fn validate_stay(stay: &StayDates, limits: &ValidationLimits, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();

    if stay.check_in.is_none() {
        errors.push("Check-in date is required".to_string());
    }
    if stay.check_out.is_none() {
        errors.push("Check-out date is required".to_string());
    }

    if let Some(check_in) = stay.check_in {
        if check_in < today {
            errors.push("Check-in date cannot be in the past".to_string());
        }
        if check_in > today + Duration::days(limits.advance_booking_days) {
            errors.push(format!(
                "Bookings can be made at most {} days in advance",
                limits.advance_booking_days
            ));
        }
    }

    if let (Some(check_in), Some(check_out)) = (stay.check_in, stay.check_out) {
        if check_out <= check_in {
            errors.push("Check-out date must be after check-in date".to_string());
        } else {
            let nights = stay.nights();
            if nights < limits.min_nights {
                errors.push(format!("Minimum stay is {} night(s)", limits.min_nights));
            }
            if nights > limits.max_nights {
                errors.push(format!("Maximum stay is {} nights", limits.max_nights));
            }
        }
    }

    errors
}

/// Guest-count checks. Every violated rule is reported, not just the first.
/// Infants never count toward capacity but are still capped.
pub fn validate_guests(
    guests: &GuestSelection,
    property_max_guests: Option<i32>,
    limits: &ValidationLimits,
) -> Vec<String> {
    let mut errors = Vec::new();
    let capacity = property_max_guests.unwrap_or(limits.fallback_max_guests);

    if guests.adults < 1 {
        errors.push("At least one adult is required".to_string());
    }
    if guests.occupancy() > capacity {
        errors.push(format!("Maximum {capacity} guests allowed"));
    }
    if guests.adults < 0 || guests.children < 0 || guests.infants < 0 {
        errors.push("Guest counts cannot be negative".to_string());
    }
    if guests.adults > limits.max_adults {
        errors.push(format!("Maximum {} adults allowed", limits.max_adults));
    }
    if guests.children > limits.max_children {
        errors.push(format!("Maximum {} children allowed", limits.max_children));
    }
    if guests.infants > limits.max_infants {
        errors.push(format!("Maximum {} infants allowed", limits.max_infants));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    #[test]
    fn test_valid_stay_passes() {
        let stay = StayDates::new(date(2024, 6, 3), date(2024, 6, 6));
        let errors = validate_stay(&stay, &ValidationLimits::default(), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_dates_reported_separately() {
        let errors = validate_stay(&StayDates::default(), &ValidationLimits::default(), today());
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Check-in"));
        assert!(errors[1].contains("Check-out"));
    }

    #[test]
    fn test_past_check_in_rejected() {
        let stay = StayDates::new(date(2024, 5, 30), date(2024, 6, 3));
        let errors = validate_stay(&stay, &ValidationLimits::default(), today());
        assert_eq!(errors, vec!["Check-in date cannot be in the past".to_string()]);
    }

    #[test]
    fn test_inverted_range_reports_only_order_error() {
        let stay = StayDates::new(date(2024, 6, 6), date(2024, 6, 3));
        let errors = validate_stay(&stay, &ValidationLimits::default(), today());
        // nights clamp to zero, so no min/max-stay noise on top
        assert_eq!(
            errors,
            vec!["Check-out date must be after check-in date".to_string()]
        );
    }

    #[test]
    fn test_zero_night_stay_rejected() {
        let stay = StayDates::new(date(2024, 6, 3), date(2024, 6, 3));
        let errors = validate_stay(&stay, &ValidationLimits::default(), today());
        assert_eq!(
            errors,
            vec!["Check-out date must be after check-in date".to_string()]
        );
    }

    #[test]
    fn test_stay_longer_than_maximum_rejected() {
        let stay = StayDates::new(date(2024, 6, 3), date(2024, 7, 10));
        let errors = validate_stay(&stay, &ValidationLimits::default(), today());
        assert_eq!(errors, vec!["Maximum stay is 30 nights".to_string()]);
    }

    #[test]
    fn test_check_in_beyond_horizon_rejected() {
        let stay = StayDates::new(date(2025, 6, 10), date(2025, 6, 14));
        let errors = validate_stay(&stay, &ValidationLimits::default(), today());
        assert_eq!(
            errors,
            vec!["Bookings can be made at most 365 days in advance".to_string()]
        );
    }

    #[test]
    fn test_adults_floor() {
        let guests = GuestSelection::new(0, 2, 0);
        let errors = validate_guests(&guests, Some(4), &ValidationLimits::default());
        assert!(errors.contains(&"At least one adult is required".to_string()));
    }

    #[test]
    fn test_capacity_uses_property_limit() {
        let guests = GuestSelection::new(3, 1, 0);
        let errors = validate_guests(&guests, Some(3), &ValidationLimits::default());
        assert_eq!(errors, vec!["Maximum 3 guests allowed".to_string()]);
    }

    #[test]
    fn test_capacity_falls_back_when_unspecified() {
        let guests = GuestSelection::new(12, 5, 0);
        let errors = validate_guests(&guests, None, &ValidationLimits::default());
        assert!(errors.contains(&"Maximum 16 guests allowed".to_string()));
    }

    #[test]
    fn test_infants_excluded_from_capacity() {
        let guests = GuestSelection::new(2, 0, 2);
        let errors = validate_guests(&guests, Some(2), &ValidationLimits::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_negative_counts_rejected() {
        let guests = GuestSelection::new(1, -1, 0);
        let errors = validate_guests(&guests, Some(4), &ValidationLimits::default());
        assert!(errors.contains(&"Guest counts cannot be negative".to_string()));
    }

    #[test]
    fn test_category_cap_applies_even_under_capacity() {
        let guests = GuestSelection::new(13, 0, 0);
        let errors = validate_guests(&guests, Some(20), &ValidationLimits::default());
        assert!(errors.contains(&"Maximum 12 adults allowed".to_string()));
    }

    #[test]
    fn test_all_violations_reported() {
        let guests = GuestSelection::new(0, 9, 5);
        let errors = validate_guests(&guests, Some(4), &ValidationLimits::default());
        assert_eq!(errors.len(), 4);
    }
}
