//! Shipping strategies.
//!
//! Every tier charges `base_rate + per_km_rate * distance`. Distances are not
//! validated: a negative distance yields a reduced (possibly negative) fee.
//! Quotes only fail when the fee leaves the `Decimal` range.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use flexorder_core::{DomainError, Money, ValueObject};

use crate::error::{PricingError, PricingResult};

/// Fee constants of a shipping tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRates {
    pub base_rate: Money,
    pub per_km_rate: Money,
}

impl ValueObject for ShippingRates {}

impl ShippingRates {
    pub fn new(base_rate: Money, per_km_rate: Money) -> Self {
        Self {
            base_rate,
            per_km_rate,
        }
    }

    /// 10.0 flat + 0.5 per km.
    pub fn standard() -> Self {
        Self::new(Decimal::new(100, 1), Decimal::new(5, 1))
    }

    /// 20.0 flat + 1.2 per km.
    pub fn express() -> Self {
        Self::new(Decimal::new(200, 1), Decimal::new(12, 1))
    }

    pub fn fee_for(&self, distance_km: Money) -> PricingResult<Money> {
        self.per_km_rate
            .checked_mul(distance_km)
            .and_then(|distance_fee| self.base_rate.checked_add(distance_fee))
            .ok_or(PricingError::Overflow { stage: "shipping" })
    }
}

/// Maps a distance (km) to a shipping cost.
///
/// Implementations must be stateless and pure; new tiers are added by
/// implementing this trait, without touching `Order`.
pub trait ShippingStrategy: core::fmt::Debug {
    /// Stable tier name used in logs.
    fn name(&self) -> &'static str;

    fn rates(&self) -> ShippingRates;

    fn quote(&self, distance_km: Money) -> PricingResult<Money> {
        self.rates().fee_for(distance_km)
    }
}

impl<S: ShippingStrategy + ?Sized> ShippingStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn rates(&self) -> ShippingRates {
        (**self).rates()
    }

    fn quote(&self, distance_km: Money) -> PricingResult<Money> {
        (**self).quote(distance_km)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardShipping;

impl ShippingStrategy for StandardShipping {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn rates(&self) -> ShippingRates {
        ShippingRates::standard()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpressShipping;

impl ShippingStrategy for ExpressShipping {
    fn name(&self) -> &'static str {
        "express"
    }

    fn rates(&self) -> ShippingRates {
        ShippingRates::express()
    }
}

/// Built-in shipping tiers, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingTier {
    Standard,
    Express,
}

impl ShippingTier {
    pub fn strategy(self) -> Box<dyn ShippingStrategy> {
        match self {
            ShippingTier::Standard => Box::new(StandardShipping),
            ShippingTier::Express => Box::new(ExpressShipping),
        }
    }
}

impl FromStr for ShippingTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "normal" => Ok(ShippingTier::Standard),
            "express" => Ok(ShippingTier::Express),
            other => Err(DomainError::unknown("shipping tier", other)),
        }
    }
}
