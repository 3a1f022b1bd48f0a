//! End-to-end checkout runs through the public application API.

use flexorder_app::{AppConfig, run};
use flexorder_checkout::{CheckoutStage, PricingSource};
use flexorder_payments::PaymentKind;
use flexorder_pricing::{ModifierSpec, ShippingTier};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn default_configuration_reproduces_reference_checkout() {
    let report = run(&AppConfig::default()).unwrap();

    // 200.0 + 20.0 + 1.2 * 12
    assert_eq!(report.total_with_shipping, dec!(234.4));
    assert_eq!(report.paid, dec!(234.4));
    // 234.4 * 0.95 + 10
    assert_eq!(report.outcome.final_value, dec!(232.68));
    assert_eq!(report.outcome.pricing, PricingSource::Resolved);
    assert_eq!(report.outcome.stage, CheckoutStage::Completed);
    assert_eq!(
        report.chain,
        "flat_surcharge(10.0) > percent_discount(0.05) > base(234.4)"
    );
    assert_eq!(report.invoices.len(), 1);
    assert_eq!(report.invoices[0].amount, Some(dec!(232.68)));
}

#[test]
fn unresolvable_modifiers_invoice_the_base_value() {
    let config = AppConfig {
        modifiers: vec![
            ModifierSpec::PercentDiscount { percent: dec!(0.05) },
            ModifierSpec::FlatSurcharge { amount: Decimal::MAX },
        ],
        ..AppConfig::default()
    };

    let report = run(&config).unwrap();

    // Payment still covers base + shipping; the invoice falls back to base only.
    assert_eq!(report.paid, dec!(234.4));
    assert_eq!(report.outcome.final_value, dec!(200.0));
    assert!(report.outcome.pricing.is_fallback());
    assert_eq!(report.invoices[0].amount, Some(dec!(200.0)));
}

#[test]
fn discount_above_one_is_applied_not_rejected() {
    let config = AppConfig {
        modifiers: vec![ModifierSpec::PercentDiscount { percent: dec!(1.5) }],
        ..AppConfig::default()
    };

    let report = run(&config).unwrap();

    // 234.4 - 234.4 * 1.5
    assert_eq!(report.outcome.final_value, dec!(-117.2));
    assert_eq!(report.outcome.pricing, PricingSource::Resolved);
}

#[test]
fn overflowing_distance_is_an_error() {
    let config = AppConfig {
        distance_km: Decimal::MAX,
        ..AppConfig::default()
    };

    assert!(run(&config).is_err());
}

#[test]
fn reversed_modifier_order_changes_the_final_value() {
    let mut modifiers = ModifierSpec::default_chain();
    modifiers.reverse();
    let config = AppConfig {
        modifiers,
        ..AppConfig::default()
    };

    let report = run(&config).unwrap();

    // (234.4 + 10) * 0.95
    assert_eq!(report.outcome.final_value, dec!(232.18));
}

#[test]
fn standard_credit_checkout() {
    let config = AppConfig {
        base_value: dec!(50),
        distance_km: dec!(4),
        payment: PaymentKind::Credit,
        shipping: ShippingTier::Standard,
        modifiers: vec![ModifierSpec::FlatSurcharge { amount: dec!(2.5) }],
        ..AppConfig::default()
    };

    let report = run(&config).unwrap();

    // 50 + 10.0 + 0.5 * 4
    assert_eq!(report.total_with_shipping, dec!(62.0));
    assert_eq!(report.outcome.final_value, dec!(64.5));
}

#[test]
fn report_serializes_to_json() {
    let report = run(&AppConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let final_value: Decimal = json["outcome"]["final_value"].as_str().unwrap().parse().unwrap();
    assert_eq!(final_value, dec!(232.68));
    assert_eq!(json["outcome"]["pricing"]["source"], "resolved");
    assert_eq!(json["outcome"]["stage"], "completed");
}
