//! Checkout orchestration.
//!
//! Drives an order through a fixed, linear workflow:
//! 1. inventory update (fire-and-forget)
//! 2. final value resolution from the modifier chain, falling back to the
//!    order's base value when the chain cannot be resolved
//! 3. invoice emission
//! 4. confirmation
//!
//! No step is retried and no step fails the checkout.

pub mod events;
pub mod workflow;

pub use events::{
    CheckoutCompleted, CheckoutEvent, InventoryUpdated, InvoiceEmitted, PriceResolved,
};
pub use workflow::{
    CheckoutOutcome, CheckoutStage, CheckoutWorkflow, PricingSource, resolve_final_value,
};
