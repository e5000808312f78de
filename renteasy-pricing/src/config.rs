use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat tax rate applied to subtotal plus fees
    pub tax_rate: f64,

    /// Skip tax computation entirely (quotes for tax-exempt channels)
    pub include_taxes: bool,

    /// Blend weekend nights into the nightly rate at `weekend_multiplier`
    pub enable_dynamic_pricing: bool,

    /// Rate multiplier for Saturday and Sunday nights
    pub weekend_multiplier: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.12,
            include_taxes: true,
            enable_dynamic_pricing: false,
            weekend_multiplier: 1.2,
        }
    }
}
