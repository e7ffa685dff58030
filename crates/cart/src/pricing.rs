//! Cart totals resolved against the catalog.
//!
//! Entries whose id does not resolve in the catalog contribute nothing and are
//! skipped in line views.

use luxor_catalog::{Catalog, Product};
use luxor_core::Price;

use crate::cart::Cart;

/// A cart line joined with its product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub line_total: Price,
}

/// `Σ price × quantity` over lines that resolve in `catalog`.
pub fn subtotal(catalog: &Catalog, cart: &Cart) -> Price {
    cart.quantities()
        .iter()
        .filter_map(|(id, &qty)| catalog.price_of(id).map(|price| price.times(qty)))
        .sum()
}

/// `Σ quantity` over every line, resolved or not.
pub fn item_count(cart: &Cart) -> u64 {
    cart.item_count()
}

/// Resolved lines in cart order.
pub fn cart_lines<'a>(catalog: &'a Catalog, cart: &Cart) -> Vec<CartLineView<'a>> {
    cart.quantities()
        .iter()
        .filter_map(|(id, &quantity)| {
            catalog.get(id).map(|product| CartLineView {
                product,
                quantity,
                line_total: product.price().times(quantity),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxor_catalog::{ProductDraft, demo_catalog};
    use luxor_core::{ProductId, SessionId};
    use proptest::prelude::*;

    fn ab_catalog() -> Catalog {
        let draft = |id: &str, price: i64| ProductDraft {
            id: id.to_string(),
            name: id.to_uppercase(),
            brand: "Test".to_string(),
            price,
            image: String::new(),
            tags: Vec::new(),
        };
        Catalog::from_drafts(vec![draft("a", 100), draft("b", 250)]).unwrap()
    }

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn scenario_subtotal_and_count() {
        let catalog = ab_catalog();
        let mut cart = Cart::empty(SessionId::new());
        cart.add_to_cart(&id("a"));
        cart.add_to_cart(&id("a"));
        cart.add_to_cart(&id("b"));

        assert_eq!(item_count(&cart), 3);
        assert_eq!(subtotal(&catalog, &cart), Price::new(450));

        cart.remove_from_cart(&id("a"));
        cart.remove_from_cart(&id("a"));
        assert_eq!(subtotal(&catalog, &cart), Price::new(250));
        assert_eq!(item_count(&cart), 1);
    }

    #[test]
    fn unknown_ids_contribute_zero() {
        let catalog = ab_catalog();
        let mut cart = Cart::empty(SessionId::new());
        cart.add_to_cart(&id("ghost"));
        cart.add_to_cart(&id("b"));

        assert_eq!(subtotal(&catalog, &cart), Price::new(250));
        assert_eq!(item_count(&cart), 2);

        let lines = cart_lines(&catalog, &cart);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.id_typed(), &id("b"));
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let catalog = demo_catalog();
        let cart = Cart::empty(SessionId::new());
        assert_eq!(subtotal(&catalog, &cart), Price::ZERO);
        assert_eq!(item_count(&cart), 0);
        assert!(cart_lines(&catalog, &cart).is_empty());
    }

    #[test]
    fn line_totals_against_demo_catalog() {
        let catalog = demo_catalog();
        let mut cart = Cart::empty(SessionId::new());
        cart.add_to_cart(&id("tissot-prx"));
        cart.add_to_cart(&id("rolex-sub"));
        cart.add_to_cart(&id("tissot-prx"));

        let lines = cart_lines(&catalog, &cart);
        assert_eq!(lines[0].product.id_typed(), &id("tissot-prx"));
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].line_total, Price::new(8_998));
        assert_eq!(lines[1].line_total, Price::new(74_900));
        assert_eq!(subtotal(&catalog, &cart), Price::new(83_898));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: subtotal equals Σ price(id) × quantity(id) and equals the sum of line totals.
        #[test]
        fn subtotal_is_sum_of_line_totals(picks in prop::collection::vec(0usize..6, 0..40)) {
            let catalog = demo_catalog();
            let mut cart = Cart::empty(SessionId::new());
            for i in &picks {
                cart.add_to_cart(catalog.products()[*i].id_typed());
            }

            let expected: u64 = cart
                .quantities()
                .iter()
                .map(|(id, &q)| catalog.price_of(id).unwrap().amount() * u64::from(q))
                .sum();
            prop_assert_eq!(subtotal(&catalog, &cart).amount(), expected);

            let from_lines: Price = cart_lines(&catalog, &cart).iter().map(|l| l.line_total).sum();
            prop_assert_eq!(from_lines.amount(), expected);
            prop_assert_eq!(item_count(&cart), picks.len() as u64);
        }
    }
}
