//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An [`crate::OrderId`] identifies an order for log correlation even though
/// orders are never persisted.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
