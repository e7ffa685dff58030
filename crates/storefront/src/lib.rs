//! Storefront session layer: the state a single shopper's page owns, plus the
//! configuration and collaborator seams the presentation layer needs.

pub mod checkout;
pub mod config;
pub mod console;
pub mod contact;
pub mod error;
pub mod format;
pub mod newsletter;
pub mod session;

pub use checkout::{
    CheckoutGateway, CheckoutLine, CheckoutOutcome, CheckoutRequest, PlaceholderCheckout,
    WhatsAppCheckout,
};
pub use config::StoreConfig;
pub use contact::ContactLinks;
pub use error::{StorefrontError, StorefrontResult};
pub use format::format_price;
pub use newsletter::{NewsletterGateway, PlaceholderNewsletter, SubscriptionStatus};
pub use session::{SessionSnapshot, StorefrontSession};
