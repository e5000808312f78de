use renteasy_pricing::PricingConfig;
use serde::Deserialize;
use std::env;

use crate::validation::ValidationLimits;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub booking_rules: BookingRules,
}

/// Tunable booking policy, loaded from config files and environment.
#[derive(Debug, Deserialize, Clone)]
pub struct BookingRules {
    pub tax_rate: f64,
    #[serde(default = "default_include_taxes")]
    pub include_taxes: bool,
    #[serde(default)]
    pub enable_dynamic_pricing: bool,
    #[serde(default = "default_weekend_multiplier")]
    pub weekend_multiplier: f64,
    pub min_nights: i64,
    pub max_nights: i64,
    pub advance_booking_days: i64,
    #[serde(default = "default_fallback_max_guests")]
    pub fallback_max_guests: i32,
    #[serde(default = "default_max_adults")]
    pub max_adults: i32,
    #[serde(default = "default_max_children")]
    pub max_children: i32,
    #[serde(default = "default_max_infants")]
    pub max_infants: i32,
}

fn default_include_taxes() -> bool {
    true
}
fn default_weekend_multiplier() -> f64 {
    1.2
}
fn default_fallback_max_guests() -> i32 {
    16
}
fn default_max_adults() -> i32 {
    12
}
fn default_max_children() -> i32 {
    8
}
fn default_max_infants() -> i32 {
    4
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of RENTEASY)
            // Eg.. `RENTEASY_DEBUG=1` would set the `debug` key
            .add_source(config::Environment::with_prefix("RENTEASY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

impl BookingRules {
    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            tax_rate: self.tax_rate,
            include_taxes: self.include_taxes,
            enable_dynamic_pricing: self.enable_dynamic_pricing,
            weekend_multiplier: self.weekend_multiplier,
        }
    }

    pub fn validation_limits(&self) -> ValidationLimits {
        ValidationLimits {
            min_nights: self.min_nights,
            max_nights: self.max_nights,
            advance_booking_days: self.advance_booking_days,
            fallback_max_guests: self.fallback_max_guests,
            max_adults: self.max_adults,
            max_children: self.max_children,
            max_infants: self.max_infants,
        }
    }
}
