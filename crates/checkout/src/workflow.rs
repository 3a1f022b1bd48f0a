//! Checkout workflow state machine.
//!
//! ```text
//! InventoryPending -> PricingResolution -> InvoiceEmission -> Completed
//! ```
//!
//! Transitions are driven by the events the workflow records, the same way a
//! saga's state is advanced by applying its own events.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use flexorder_core::{Money, OrderId};
use flexorder_events::{EventSink, InMemoryEventLog};
use flexorder_inventory::InventorySystem;
use flexorder_invoicing::InvoiceGenerator;
use flexorder_pricing::PriceModifier;
use flexorder_sales::Order;

use crate::events::{
    CheckoutCompleted, CheckoutEvent, InventoryUpdated, InvoiceEmitted, PriceResolved,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    #[default]
    InventoryPending,
    PricingResolution,
    InvoiceEmission,
    Completed,
}

impl CheckoutStage {
    /// Advance the stage for a recorded event.
    pub fn apply(&mut self, event: &CheckoutEvent) {
        *self = match event {
            CheckoutEvent::InventoryUpdated(_) => CheckoutStage::PricingResolution,
            CheckoutEvent::PriceResolved(_) => CheckoutStage::InvoiceEmission,
            CheckoutEvent::InvoiceEmitted(_) | CheckoutEvent::CheckoutCompleted(_) => {
                CheckoutStage::Completed
            }
        };
    }
}

/// Where the final value of a checkout came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PricingSource {
    /// The modifier chain resolved.
    Resolved,
    /// The chain failed; the order's base value (without shipping) was used.
    FallbackToBase { reason: String },
}

impl PricingSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, PricingSource::FallbackToBase { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    pub order_id: OrderId,
    pub final_value: Money,
    pub pricing: PricingSource,
    pub stage: CheckoutStage,
}

/// Resolve `chain`, substituting `order.base_value()` if resolution fails.
///
/// The fallback deliberately drops the shipping cost: it is the base value, not
/// `order.total(..)`.
pub fn resolve_final_value(order: &Order, chain: &dyn PriceModifier) -> (Money, PricingSource) {
    match chain.resolve() {
        Ok(value) => (value, PricingSource::Resolved),
        Err(err) => {
            tracing::warn!(
                order_id = %order.id_typed(),
                chain = %chain.describe(),
                error = %err,
                base_value = %order.base_value(),
                "modifier chain unresolvable; falling back to base value"
            );
            (
                order.base_value(),
                PricingSource::FallbackToBase {
                    reason: err.to_string(),
                },
            )
        }
    }
}

/// Sequences inventory update, pricing, invoicing and confirmation for one order.
#[derive(Debug)]
pub struct CheckoutWorkflow<I, G, S = InMemoryEventLog<CheckoutEvent>> {
    inventory: I,
    invoices: G,
    events: S,
}

impl<I, G> CheckoutWorkflow<I, G>
where
    I: InventorySystem,
    G: InvoiceGenerator,
{
    /// Workflow recording its events in memory.
    pub fn in_memory(inventory: I, invoices: G) -> Self {
        Self::new(inventory, invoices, InMemoryEventLog::new())
    }
}

impl<I, G, S> CheckoutWorkflow<I, G, S>
where
    I: InventorySystem,
    G: InvoiceGenerator,
    S: EventSink<CheckoutEvent>,
{
    pub fn new(inventory: I, invoices: G, events: S) -> Self {
        Self {
            inventory,
            invoices,
            events,
        }
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    pub fn invoices(&self) -> &G {
        &self.invoices
    }

    pub fn events(&self) -> &S {
        &self.events
    }

    /// Run the whole workflow for `order`, pricing it with `chain`.
    pub fn complete(&mut self, order: &Order, chain: &dyn PriceModifier) -> CheckoutOutcome {
        let order_id = order.id_typed();
        let mut stage = CheckoutStage::default();
        tracing::info!(%order_id, "checkout started");

        // InventoryPending
        self.inventory.decrement_stock();
        self.record(
            &mut stage,
            CheckoutEvent::InventoryUpdated(InventoryUpdated {
                order_id,
                occurred_at: Utc::now(),
            }),
        );

        // PricingResolution
        let (final_value, pricing) = resolve_final_value(order, chain);
        self.record(
            &mut stage,
            CheckoutEvent::PriceResolved(PriceResolved {
                order_id,
                final_value,
                fell_back: pricing.is_fallback(),
                occurred_at: Utc::now(),
            }),
        );

        // InvoiceEmission
        self.invoices.emit(Some(final_value));
        self.record(
            &mut stage,
            CheckoutEvent::InvoiceEmitted(InvoiceEmitted {
                order_id,
                amount: final_value,
                occurred_at: Utc::now(),
            }),
        );

        // Completed
        self.record(
            &mut stage,
            CheckoutEvent::CheckoutCompleted(CheckoutCompleted {
                order_id,
                final_value,
                occurred_at: Utc::now(),
            }),
        );
        tracing::info!(%order_id, %final_value, "Checkout completed successfully.");

        CheckoutOutcome {
            order_id,
            final_value,
            pricing,
            stage,
        }
    }

    fn record(&mut self, stage: &mut CheckoutStage, event: CheckoutEvent) {
        stage.apply(&event);
        self.events.publish(event);
    }
}
