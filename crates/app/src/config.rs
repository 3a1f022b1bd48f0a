//! Environment configuration.
//!
//! | variable | default |
//! |---|---|
//! | `FLEXORDER_BASE_VALUE` | `200.0` |
//! | `FLEXORDER_DISTANCE_KM` | `12` |
//! | `FLEXORDER_PAYMENT` | `pix` |
//! | `FLEXORDER_SHIPPING` | `express` |
//! | `FLEXORDER_MODIFIERS` | 5% discount, then 10.0 surcharge |
//! | `FLEXORDER_CURRENCY` | `R$` |
//!
//! Unset variables take their default; set but unparsable variables are errors.

use core::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Serialize;

use flexorder_core::{CurrencySymbol, Money};
use flexorder_payments::PaymentKind;
use flexorder_pricing::{ModifierSpec, ShippingTier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub base_value: Money,
    pub distance_km: Money,
    pub payment: PaymentKind,
    pub shipping: ShippingTier,
    /// Modifier stages, innermost first.
    pub modifiers: Vec<ModifierSpec>,
    pub currency: CurrencySymbol,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_value: Decimal::new(2000, 1),
            distance_km: Decimal::new(12, 0),
            payment: PaymentKind::Pix,
            shipping: ShippingTier::Express,
            modifiers: ModifierSpec::default_chain(),
            currency: CurrencySymbol::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (variable name -> value).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let config = Self {
            base_value: parse_var(&lookup, "FLEXORDER_BASE_VALUE", defaults.base_value)?,
            distance_km: parse_var(&lookup, "FLEXORDER_DISTANCE_KM", defaults.distance_km)?,
            payment: parse_var(&lookup, "FLEXORDER_PAYMENT", defaults.payment)?,
            shipping: parse_var(&lookup, "FLEXORDER_SHIPPING", defaults.shipping)?,
            modifiers: match lookup("FLEXORDER_MODIFIERS") {
                Some(raw) => serde_json::from_str(&raw)
                    .with_context(|| format!("FLEXORDER_MODIFIERS is not a modifier list: {raw}"))?,
                None => defaults.modifiers,
            },
            currency: lookup("FLEXORDER_CURRENCY")
                .map(CurrencySymbol::new)
                .unwrap_or(defaults.currency),
        };

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.base_value, dec!(200.0));
        assert_eq!(config.distance_km, dec!(12));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FLEXORDER_BASE_VALUE", "99.90"),
            ("FLEXORDER_DISTANCE_KM", " 3.5 "),
            ("FLEXORDER_PAYMENT", "credit"),
            ("FLEXORDER_SHIPPING", "standard"),
            ("FLEXORDER_MODIFIERS", r#"[{"kind":"flat_surcharge","amount":"4"}]"#),
            ("FLEXORDER_CURRENCY", "$"),
        ]))
        .unwrap();

        assert_eq!(config.base_value, dec!(99.90));
        assert_eq!(config.distance_km, dec!(3.5));
        assert_eq!(config.payment, PaymentKind::Credit);
        assert_eq!(config.shipping, ShippingTier::Standard);
        assert_eq!(config.modifiers, vec![ModifierSpec::FlatSurcharge { amount: dec!(4) }]);
        assert_eq!(config.currency, CurrencySymbol::new("$"));
    }

    #[test]
    fn invalid_number_is_an_error_naming_the_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[("FLEXORDER_DISTANCE_KM", "far")]))
            .unwrap_err();
        assert!(err.to_string().contains("FLEXORDER_DISTANCE_KM"));
    }

    #[test]
    fn unknown_shipping_tier_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("FLEXORDER_SHIPPING", "drone")]))
            .unwrap_err();
        assert!(err.to_string().contains("FLEXORDER_SHIPPING"));
    }

    #[test]
    fn malformed_modifier_json_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("FLEXORDER_MODIFIERS", "{")]))
            .unwrap_err();
        assert!(err.to_string().contains("FLEXORDER_MODIFIERS"));
    }
}
