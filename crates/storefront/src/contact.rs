//! Outbound contact links (WhatsApp, Instagram, email).

use url::Url;

use luxor_catalog::Product;

use crate::config::StoreConfig;
use crate::error::StorefrontResult;

pub const GENERAL_PURCHASE_MESSAGE: &str = "Hi, I want to buy a watch";

/// Link builder bound to a store's contact settings.
#[derive(Debug, Clone)]
pub struct ContactLinks {
    support_phone: String,
    instagram_handle: String,
    sales_email: String,
}

impl ContactLinks {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            support_phone: config.support_phone.clone(),
            instagram_handle: config.instagram_handle.clone(),
            sales_email: config.sales_email.clone(),
        }
    }

    /// `https://wa.me/<phone>` with no message.
    pub fn whatsapp_chat(&self) -> StorefrontResult<Url> {
        Ok(Url::parse(&format!("https://wa.me/{}", self.support_phone))?)
    }

    /// WhatsApp chat link with `message` prefilled.
    pub fn whatsapp_message(&self, message: &str) -> StorefrontResult<Url> {
        let mut url = self.whatsapp_chat()?;
        url.query_pairs_mut().append_pair("text", message);
        Ok(url)
    }

    /// Prefilled "I want to buy a watch" link.
    pub fn whatsapp_purchase(&self) -> StorefrontResult<Url> {
        self.whatsapp_message(GENERAL_PURCHASE_MESSAGE)
    }

    /// Prefilled inquiry about one product.
    pub fn whatsapp_inquiry(&self, product: &Product) -> StorefrontResult<Url> {
        self.whatsapp_message(&inquiry_message(product))
    }

    pub fn instagram(&self) -> StorefrontResult<Url> {
        Ok(Url::parse(&format!(
            "https://instagram.com/{}",
            self.instagram_handle
        ))?)
    }

    pub fn email(&self) -> StorefrontResult<Url> {
        Ok(Url::parse(&format!("mailto:{}", self.sales_email))?)
    }
}

pub fn inquiry_message(product: &Product) -> String {
    format!("Hi, I'm interested in {}", product.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxor_catalog::demo_catalog;

    fn links() -> ContactLinks {
        ContactLinks::new(&StoreConfig::default())
    }

    #[test]
    fn plain_chat_link() {
        assert_eq!(
            links().whatsapp_chat().unwrap().as_str(),
            "https://wa.me/5598999999999"
        );
    }

    #[test]
    fn purchase_link_is_encoded() {
        let url = links().whatsapp_purchase().unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        let text: Vec<_> = url.query_pairs().collect();
        assert_eq!(text.len(), 1);
        assert_eq!(text[0].0, "text");
        assert_eq!(text[0].1, GENERAL_PURCHASE_MESSAGE);
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn inquiry_mentions_brand_and_model() {
        let catalog = demo_catalog();
        let product = catalog.get(&"ap-royal-oak".into()).unwrap();
        assert_eq!(
            inquiry_message(product),
            "Hi, I'm interested in Audemars Piguet Royal Oak 41 Silver"
        );
        let url = links().whatsapp_inquiry(product).unwrap();
        let (_, text) = url.query_pairs().next().unwrap();
        assert_eq!(text, inquiry_message(product));
    }

    #[test]
    fn social_and_email_links() {
        assert_eq!(
            links().instagram().unwrap().as_str(),
            "https://instagram.com/yourstore"
        );
        assert_eq!(links().email().unwrap().as_str(), "mailto:sales@luxorslz.com");
    }
}
