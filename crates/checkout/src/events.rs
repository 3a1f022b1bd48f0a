use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flexorder_core::{Money, OrderId};
use flexorder_events::Event;

/// Event: InventoryUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdated {
    pub order_id: OrderId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PriceResolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResolved {
    pub order_id: OrderId,
    pub final_value: Money,
    /// The chain could not be resolved and the base value was used instead.
    pub fell_back: bool,
    pub occurred_at: DateTime<Utc>,
}

/// Event: InvoiceEmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceEmitted {
    pub order_id: OrderId,
    pub amount: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CheckoutCompleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutCompleted {
    pub order_id: OrderId,
    pub final_value: Money,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckoutEvent {
    InventoryUpdated(InventoryUpdated),
    PriceResolved(PriceResolved),
    InvoiceEmitted(InvoiceEmitted),
    CheckoutCompleted(CheckoutCompleted),
}

impl Event for CheckoutEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CheckoutEvent::InventoryUpdated(_) => "checkout.inventory.updated",
            CheckoutEvent::PriceResolved(_) => "checkout.price.resolved",
            CheckoutEvent::InvoiceEmitted(_) => "checkout.invoice.emitted",
            CheckoutEvent::CheckoutCompleted(_) => "checkout.completed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn order_id(&self) -> OrderId {
        match self {
            CheckoutEvent::InventoryUpdated(e) => e.order_id,
            CheckoutEvent::PriceResolved(e) => e.order_id,
            CheckoutEvent::InvoiceEmitted(e) => e.order_id,
            CheckoutEvent::CheckoutCompleted(e) => e.order_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CheckoutEvent::InventoryUpdated(e) => e.occurred_at,
            CheckoutEvent::PriceResolved(e) => e.occurred_at,
            CheckoutEvent::InvoiceEmitted(e) => e.occurred_at,
            CheckoutEvent::CheckoutCompleted(e) => e.occurred_at,
        }
    }
}
