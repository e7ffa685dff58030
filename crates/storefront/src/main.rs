use std::io;
use std::sync::Arc;

use anyhow::Context;
use luxor_catalog::{Catalog, demo_catalog};
use luxor_storefront::console::Console;
use luxor_storefront::{
    CheckoutGateway, PlaceholderCheckout, PlaceholderNewsletter, StoreConfig, StorefrontSession,
    WhatsAppCheckout,
};

fn main() -> anyhow::Result<()> {
    luxor_observability::init();

    let config = match std::env::var("LUXOR_CONFIG") {
        Ok(path) => StoreConfig::from_json_file(&path)
            .with_context(|| format!("failed to load store config from {path}"))?,
        Err(_) => StoreConfig::from_env().context("invalid store configuration")?,
    };

    let catalog = match std::env::var("LUXOR_CATALOG") {
        Ok(path) => Catalog::from_json_file(&path)
            .with_context(|| format!("failed to load catalog from {path}"))?,
        Err(_) => {
            tracing::info!("LUXOR_CATALOG not set; using demo catalog");
            demo_catalog()
        }
    };

    tracing::info!(
        store = %config.store_name,
        products = catalog.len(),
        currency = %config.currency_code,
        "storefront ready"
    );

    let session = StorefrontSession::new(Arc::new(catalog));

    // LUXOR_CHECKOUT=whatsapp hands orders off to the sales WhatsApp number.
    match std::env::var("LUXOR_CHECKOUT").as_deref() {
        Ok("whatsapp") => {
            let checkout = WhatsAppCheckout::new(config.clone());
            serve(session, config, checkout)
        }
        _ => serve(session, config, PlaceholderCheckout),
    }
}

fn serve(
    session: StorefrontSession,
    config: StoreConfig,
    checkout: impl CheckoutGateway,
) -> anyhow::Result<()> {
    let mut console = Console::new(session, config, checkout, PlaceholderNewsletter);
    let stdin = io::stdin();
    console.run(stdin.lock(), &mut io::stdout())?;
    Ok(())
}
