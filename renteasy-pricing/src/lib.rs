pub mod config;
pub mod engine;
pub mod quote;

pub use config::PricingConfig;
pub use engine::PricingEngine;
pub use quote::{BookingQuote, QuoteError};
