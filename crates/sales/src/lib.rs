//! Purchase orders.
//!
//! An [`Order`] is the pricing input of a checkout: a base value plus the
//! payment method and shipping strategy chosen when it was placed.

pub mod order;

pub use order::Order;
