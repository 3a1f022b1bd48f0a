//! Event sinks.
//!
//! Checkout runs single-threaded and synchronously, so sinks take `&mut self`
//! and never fail.

use crate::Event;

/// Destination for events emitted by a workflow.
pub trait EventSink<E: Event> {
    fn publish(&mut self, event: E);
}

/// Append-only in-memory event log for tests/dev.
#[derive(Debug, Clone)]
pub struct InMemoryEventLog<E> {
    events: Vec<E>,
}

impl<E> InMemoryEventLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in publication order.
    pub fn events(&self) -> &[E] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }
}

impl<E: Event> InMemoryEventLog<E> {
    /// Event type identifiers in publication order.
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.iter().map(Event::event_type).collect()
    }
}

impl<E> Default for InMemoryEventLog<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E: Event> EventSink<E> for InMemoryEventLog<E> {
    fn publish(&mut self, event: E) {
        tracing::debug!(
            event_type = event.event_type(),
            order_id = %event.order_id(),
            "event recorded"
        );
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use flexorder_core::OrderId;

    #[derive(Debug, Clone, PartialEq)]
    struct Pinged {
        order_id: OrderId,
        occurred_at: DateTime<Utc>,
    }

    impl Event for Pinged {
        fn event_type(&self) -> &'static str {
            "test.pinged"
        }

        fn version(&self) -> u32 {
            1
        }

        fn order_id(&self) -> OrderId {
            self.order_id
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.occurred_at
        }
    }

    fn pinged() -> Pinged {
        Pinged {
            order_id: OrderId::new(),
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn publish_preserves_order() {
        let mut log = InMemoryEventLog::new();
        let first = pinged();
        let second = pinged();
        log.publish(first.clone());
        log.publish(second.clone());

        assert_eq!(log.events(), &[first, second]);
        assert_eq!(log.event_types(), vec!["test.pinged", "test.pinged"]);
    }

    #[test]
    fn drain_empties_the_log() {
        let mut log = InMemoryEventLog::new();
        log.publish(pinged());

        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
    }
}
