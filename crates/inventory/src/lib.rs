//! Inventory collaborator.
//!
//! Checkout only signals that stock should be decremented: there is no
//! stock-level check, reservation or rollback.

pub mod stock;

pub use stock::{InventorySystem, TracingInventory};
