//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: shipping rates,
/// invoice records and modifier descriptions are value objects, an order is
/// not (it carries an [`crate::OrderId`]).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ShippingRates {
///     base_rate: Money,
///     per_km_rate: Money,
/// }
///
/// impl ValueObject for ShippingRates {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
