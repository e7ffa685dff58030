//! Catalog prices.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Non-negative price in the catalog's currency units.
///
/// The unit (whole units or cents) is a catalog-wide convention; arithmetic here
/// never mixes units. Formatting for display is left to the presentation layer.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units. Saturates instead of overflowing.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Price {}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn times_and_sum() {
        let lines = [Price::new(100).times(2), Price::new(250).times(1)];
        assert_eq!(lines.into_iter().sum::<Price>(), Price::new(450));
    }

    #[test]
    fn times_saturates() {
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
    }

    #[test]
    fn negative_price_is_not_deserializable() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert_eq!(serde_json::from_str::<Price>("4499").unwrap(), Price::new(4499));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for values that do not overflow, `times` is plain multiplication.
        #[test]
        fn times_matches_multiplication(amount in 0u64..10_000_000, qty in 0u32..10_000) {
            prop_assert_eq!(Price::new(amount).times(qty).amount(), amount * u64::from(qty));
        }
    }
}
