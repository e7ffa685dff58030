use std::sync::Arc;

use luxor_cart::Cart;
use luxor_catalog::{Catalog, CatalogError, demo_catalog};
use luxor_core::{Price, ProductId};
use luxor_storefront::console::Console;
use luxor_storefront::{
    CheckoutGateway, CheckoutOutcome, PlaceholderNewsletter, StoreConfig, StorefrontSession,
    WhatsAppCheckout, format_price,
};
use proptest::prelude::*;

const TWO_PRODUCT_CATALOG: &str = r#"{
    "products": [
        { "id": "a", "name": "Alpha", "brand": "Acme", "price": 100, "tags": ["steel"] },
        { "id": "b", "name": "Beta", "brand": "Bolt", "price": 250, "tags": ["gold"] }
    ]
}"#;

fn pid(s: &str) -> ProductId {
    ProductId::new(s)
}

fn two_product_session() -> StorefrontSession {
    let catalog = Catalog::from_json_str(TWO_PRODUCT_CATALOG).unwrap();
    StorefrontSession::new(Arc::new(catalog))
}

#[test]
fn add_remove_scenario_from_json_catalog() {
    let mut s = two_product_session();
    s.add_to_cart(&pid("a"));
    s.add_to_cart(&pid("a"));
    s.add_to_cart(&pid("b"));

    let quantities: Vec<(&str, u32)> = s
        .cart()
        .quantities()
        .iter()
        .map(|(id, q)| (id.as_str(), *q))
        .collect();
    assert_eq!(quantities, [("a", 2), ("b", 1)]);
    assert_eq!(s.item_count(), 3);
    assert_eq!(s.subtotal(), Price::new(450));

    s.remove_from_cart(&pid("a"));
    s.remove_from_cart(&pid("a"));
    assert!(!s.cart().contains(&pid("a")));
    assert_eq!(s.cart().quantity(&pid("b")), Some(1));
    assert_eq!(s.item_count(), 1);
    assert_eq!(s.subtotal(), Price::new(250));
}

#[test]
fn demo_catalog_searches() {
    let mut s = StorefrontSession::new(Arc::new(demo_catalog()));

    s.set_search("submariner");
    let ids: Vec<&str> = s.visible_products().iter().map(|p| p.id_typed().as_str()).collect();
    assert_eq!(ids, ["rolex-sub"]);

    s.set_search("AUTOMATIC");
    let ids: Vec<&str> = s.visible_products().iter().map(|p| p.id_typed().as_str()).collect();
    assert_eq!(ids, ["pp-nautilus", "tag-carrera"]);

    s.set_search("   ");
    assert_eq!(s.visible_products().len(), 6);
}

#[test]
fn malformed_catalogs_are_rejected() {
    let negative = r#"{ "products": [ { "id": "x", "name": "X", "brand": "Y", "price": -5 } ] }"#;
    assert!(matches!(
        Catalog::from_json_str(negative),
        Err(CatalogError::Invalid { index: 0, .. })
    ));

    let duplicate = r#"{ "products": [
        { "id": "x", "name": "X", "brand": "Y", "price": 1 },
        { "id": "x", "name": "X2", "brand": "Y", "price": 2 }
    ] }"#;
    assert!(matches!(
        Catalog::from_json_str(duplicate),
        Err(CatalogError::DuplicateId(_))
    ));
}

#[test]
fn replaying_history_rebuilds_the_cart() {
    let mut s = StorefrontSession::new(Arc::new(demo_catalog()));
    for id in ["omega-speedmaster", "tissot-prx", "omega-speedmaster"] {
        s.add_to_cart(&pid(id));
    }
    s.remove_from_cart(&pid("tissot-prx"));
    s.remove_from_cart(&pid("not-there"));

    let replayed = Cart::from_events(s.id(), s.history().iter().map(|env| env.payload()));
    assert_eq!(&replayed, s.cart());

    let summary = s.replay_summary().unwrap();
    assert_eq!(summary.item_count(), s.item_count());
    assert_eq!(summary.badge(), s.cart_badge());
}

#[test]
fn whatsapp_checkout_carries_the_order() {
    let config = StoreConfig::default();
    let mut s = StorefrontSession::new(Arc::new(demo_catalog()));
    s.add_to_cart(&pid("rolex-sub"));
    s.add_to_cart(&pid("rolex-sub"));

    let request = s.checkout_request(&config.currency_code).unwrap();
    assert_eq!(format_price(request.subtotal, &config), "R$ 149.800,00");

    match WhatsAppCheckout::new(config).begin_checkout(&request).unwrap() {
        CheckoutOutcome::Redirect { url } => {
            assert_eq!(url.host_str(), Some("wa.me"));
            let text = url
                .query_pairs()
                .find(|(k, _)| k == "text")
                .map(|(_, v)| v.into_owned())
                .unwrap();
            assert!(text.contains("2x Rolex Submariner Date Black"));
        }
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[test]
fn console_drives_a_whole_visit() {
    let session = StorefrontSession::new(Arc::new(demo_catalog()));
    let config = StoreConfig::default();
    let checkout = WhatsAppCheckout::new(config.clone());
    let mut console = Console::new(session, config, checkout, PlaceholderNewsletter);

    let script = "search omega\nadd omega-speedmaster\ncart\ncheckout\nreset\ncart\nquit\n";
    let mut out = Vec::new();
    console.run(script.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Speedmaster Moonwatch"));
    assert!(out.contains("Subtotal: R$ 38.900,00"));
    assert!(out.contains("Continue at https://wa.me/5598999999999?text="));
    assert!(out.contains("Your cart is empty."));
    assert!(console.session().cart().is_empty());
}

fn op() -> impl Strategy<Value = (bool, usize)> {
    (any::<bool>(), 0usize..3)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, ..ProptestConfig::default() })]

    #[test]
    fn session_totals_follow_quantities(ops in prop::collection::vec(op(), 0..40)) {
        let ids = ["a", "b", "ghost"];
        let mut s = two_product_session();
        for (add, i) in ops {
            if add {
                s.add_to_cart(&pid(ids[i]));
            } else {
                s.remove_from_cart(&pid(ids[i]));
            }
        }

        let qa = u64::from(s.cart().quantity(&pid("a")).unwrap_or(0));
        let qb = u64::from(s.cart().quantity(&pid("b")).unwrap_or(0));
        let qg = u64::from(s.cart().quantity(&pid("ghost")).unwrap_or(0));
        prop_assert!(s.cart().quantities().values().all(|q| *q >= 1));
        prop_assert_eq!(s.item_count(), qa + qb + qg);
        prop_assert_eq!(s.subtotal(), Price::new(qa * 100 + qb * 250));
        prop_assert_eq!(s.replay_summary().unwrap().item_count(), s.item_count());
    }
}
