//! `flexorder-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the pricing,
//! payment and checkout crates (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{InvoiceId, OrderId};
pub use money::{CurrencySymbol, Money, format_money};
pub use value_object::ValueObject;
