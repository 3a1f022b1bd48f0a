//! Declarative modifier chains.
//!
//! A `Vec<ModifierSpec>` lists stages innermost first, so
//! `[percent_discount, flat_surcharge]` means "discount, then add the surcharge".

use serde::{Deserialize, Serialize};

use flexorder_core::{Money, ValueObject};

use crate::modifier::{
    BaseAmount, DEFAULT_DISCOUNT_PERCENT, DEFAULT_SURCHARGE, FlatSurcharge, PercentDiscount,
    PriceModifier,
};

/// One configured modifier stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModifierSpec {
    PercentDiscount {
        #[serde(default = "default_percent")]
        percent: Money,
    },
    FlatSurcharge {
        #[serde(default = "default_surcharge")]
        amount: Money,
    },
}

impl ValueObject for ModifierSpec {}

fn default_percent() -> Money {
    DEFAULT_DISCOUNT_PERCENT
}

fn default_surcharge() -> Money {
    DEFAULT_SURCHARGE
}

impl ModifierSpec {
    /// 5% discount followed by a 10.0 surcharge.
    pub fn default_chain() -> Vec<ModifierSpec> {
        vec![
            ModifierSpec::PercentDiscount {
                percent: DEFAULT_DISCOUNT_PERCENT,
            },
            ModifierSpec::FlatSurcharge {
                amount: DEFAULT_SURCHARGE,
            },
        ]
    }

    fn wrap(&self, inner: Box<dyn PriceModifier>) -> Box<dyn PriceModifier> {
        match self {
            ModifierSpec::PercentDiscount { percent } => {
                Box::new(PercentDiscount::with_percent(inner, *percent))
            }
            ModifierSpec::FlatSurcharge { amount } => {
                Box::new(FlatSurcharge::with_amount(inner, *amount))
            }
        }
    }
}

/// Build a chain over `base`, wrapping `stages` in order (first = innermost).
pub fn build_chain(base: Money, stages: &[ModifierSpec]) -> Box<dyn PriceModifier> {
    let chain = stages
        .iter()
        .fold(Box::new(BaseAmount::new(base)) as Box<dyn PriceModifier>, |inner, stage| {
            stage.wrap(inner)
        });

    tracing::debug!(chain = %chain.describe(), "modifier chain built");
    chain
}
