//! Price-modifier chain.
//!
//! A chain is built inside-out: a [`BaseAmount`] at the core, each modifier
//! wrapping the stage before it. Resolution evaluates the innermost stage first,
//! so the nesting order is the application order and is chosen by the caller:
//!
//! ```ignore
//! // (234.4 * 0.95) + 10
//! let chain = FlatSurcharge::new(PercentDiscount::new(BaseAmount::new(dec!(234.4))));
//! assert_eq!(chain.resolve()?, dec!(232.68));
//! ```
//!
//! Stages own their inner stage, so a chain cannot contain itself. Resolution
//! never mutates a chain.

use rust_decimal::Decimal;

use flexorder_core::Money;

use crate::error::{PricingError, PricingResult};

/// Discount applied by [`PercentDiscount::new`] (5%).
pub const DEFAULT_DISCOUNT_PERCENT: Money = Decimal::from_parts(5, 0, 0, false, 2);

/// Surcharge added by [`FlatSurcharge::new`] (10.0).
pub const DEFAULT_SURCHARGE: Money = Decimal::from_parts(100, 0, 0, false, 1);

/// One stage of a price-modifier chain.
pub trait PriceModifier: core::fmt::Debug {
    /// Compute this stage's value from the stages it wraps.
    fn resolve(&self) -> PricingResult<Money>;

    /// Human-readable rendering of this stage and everything it wraps,
    /// outermost first.
    fn describe(&self) -> String;
}

impl<M: PriceModifier + ?Sized> PriceModifier for Box<M> {
    fn resolve(&self) -> PricingResult<Money> {
        (**self).resolve()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Terminal stage: yields a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseAmount {
    value: Money,
}

impl BaseAmount {
    pub fn new(value: Money) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Money {
        self.value
    }
}

impl PriceModifier for BaseAmount {
    fn resolve(&self) -> PricingResult<Money> {
        Ok(self.value)
    }

    fn describe(&self) -> String {
        format!("base({})", self.value)
    }
}

/// Subtracts `percent` of the wrapped value.
///
/// `percent` is a fraction (`0.05` = 5%). It is applied as given: a percent above
/// one drives the value negative, a negative percent raises it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentDiscount<M> {
    inner: M,
    percent: Money,
}

impl<M: PriceModifier> PercentDiscount<M> {
    /// Wrap `inner` with the default 5% discount.
    pub fn new(inner: M) -> Self {
        Self::with_percent(inner, DEFAULT_DISCOUNT_PERCENT)
    }

    pub fn with_percent(inner: M, percent: Money) -> Self {
        Self { inner, percent }
    }

    pub fn percent(&self) -> Money {
        self.percent
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: PriceModifier> PriceModifier for PercentDiscount<M> {
    fn resolve(&self) -> PricingResult<Money> {
        let base = self.inner.resolve()?;
        base.checked_mul(self.percent)
            .and_then(|discount| base.checked_sub(discount))
            .ok_or(PricingError::Overflow {
                stage: "percent_discount",
            })
    }

    fn describe(&self) -> String {
        format!("percent_discount({}) > {}", self.percent, self.inner.describe())
    }
}

/// Adds a flat `amount` to the wrapped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatSurcharge<M> {
    inner: M,
    amount: Money,
}

impl<M: PriceModifier> FlatSurcharge<M> {
    /// Wrap `inner` with the default 10.0 surcharge.
    pub fn new(inner: M) -> Self {
        Self::with_amount(inner, DEFAULT_SURCHARGE)
    }

    pub fn with_amount(inner: M, amount: Money) -> Self {
        Self { inner, amount }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: PriceModifier> PriceModifier for FlatSurcharge<M> {
    fn resolve(&self) -> PricingResult<Money> {
        self.inner
            .resolve()?
            .checked_add(self.amount)
            .ok_or(PricingError::Overflow {
                stage: "flat_surcharge",
            })
    }

    fn describe(&self) -> String {
        format!("flat_surcharge({}) > {}", self.amount, self.inner.describe())
    }
}
