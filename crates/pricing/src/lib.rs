//! Pricing composition: shipping strategies and the price-modifier chain.
//!
//! Everything here is pure and deterministic. Shipping quotes and modifier
//! resolution use checked decimal arithmetic and return a [`PricingResult`], so
//! callers decide how to recover when a price cannot be computed.

pub mod chain;
pub mod error;
pub mod modifier;
pub mod shipping;

pub use chain::{ModifierSpec, build_chain};
pub use error::{PricingError, PricingResult};
pub use modifier::{
    BaseAmount, DEFAULT_DISCOUNT_PERCENT, DEFAULT_SURCHARGE, FlatSurcharge, PercentDiscount,
    PriceModifier,
};
pub use shipping::{
    ExpressShipping, ShippingRates, ShippingStrategy, ShippingTier, StandardShipping,
};
