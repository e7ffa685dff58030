//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (two prices of `74900` are the same price)
/// - **Entity**: has identity (two products with the same id are the same product)
///
/// Value objects are immutable; to "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(100), Price(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
