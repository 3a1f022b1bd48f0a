use chrono::{DateTime, Utc};

use flexorder_core::OrderId;

/// A fact recorded while an order moves through checkout.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - **correlated** to the order they describe
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "checkout.invoice.emitted").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// Order this event belongs to.
    fn order_id(&self) -> OrderId;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
