//! Checkout events and the sinks they are published to.

pub mod event;
pub mod log;

pub use event::Event;
pub use log::{EventSink, InMemoryEventLog};
