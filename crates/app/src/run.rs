//! One end-to-end checkout: price the order, pay it, run the workflow.

use anyhow::Context;
use serde::Serialize;

use flexorder_checkout::{CheckoutOutcome, CheckoutWorkflow};
use flexorder_core::{Money, OrderId, format_money};
use flexorder_inventory::TracingInventory;
use flexorder_invoicing::{InvoiceRecord, TracingInvoiceGenerator};
use flexorder_payments::TracingPaymentGateway;
use flexorder_pricing::build_chain;
use flexorder_sales::Order;

use crate::config::AppConfig;

/// What a checkout run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReport {
    /// Base value plus shipping.
    pub total_with_shipping: Money,
    /// Amount reported to the payment gateway.
    pub paid: Money,
    pub chain: String,
    pub outcome: CheckoutOutcome,
    pub invoices: Vec<InvoiceRecord>,
}

pub fn run(config: &AppConfig) -> anyhow::Result<CheckoutReport> {
    let order = Order::from_boxed(
        OrderId::new(),
        config.base_value,
        config.payment.method(),
        config.shipping.strategy(),
    )
    .context("failed to place order")?;

    let total_with_shipping = order
        .total(config.distance_km)
        .with_context(|| format!("failed to price order at {} km", config.distance_km))?;
    tracing::info!(
        order_id = %order.id_typed(),
        "Total (base + shipping): {}",
        format_money(&config.currency, total_with_shipping)
    );

    let chain = build_chain(total_with_shipping, &config.modifiers);
    if let Ok(value) = chain.resolve() {
        tracing::info!(
            order_id = %order.id_typed(),
            "Final total (modifiers applied): {}",
            format_money(&config.currency, value)
        );
    }

    let mut gateway = TracingPaymentGateway::new(config.currency.clone());
    let paid = order
        .settle(config.distance_km, &mut gateway)
        .context("failed to settle order")?;

    let mut checkout = CheckoutWorkflow::in_memory(
        TracingInventory::new(),
        TracingInvoiceGenerator::new(config.currency.clone()),
    );
    let outcome = checkout.complete(&order, &chain);

    Ok(CheckoutReport {
        total_with_shipping,
        paid,
        chain: chain.describe(),
        outcome,
        invoices: checkout.invoices().issued().to_vec(),
    })
}
