//! Monetary values.
//!
//! Amounts are exact base-10 decimals; there is no currency conversion, the
//! currency symbol is only a display prefix.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Monetary amount (also used for distances and rates).
pub type Money = Decimal;

/// Display prefix for monetary amounts (e.g. `R$`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencySymbol(String);

impl CurrencySymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencySymbol {
    fn default() -> Self {
        Self::new("R$")
    }
}

impl core::fmt::Display for CurrencySymbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render `amount` as `<symbol><amount>` with exactly two decimal places
/// (half away from zero).
pub fn format_money(symbol: &CurrencySymbol, amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{symbol}{rounded:.2}")
}
