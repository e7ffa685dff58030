//! Checkout seam.
//!
//! Payment is not processed here. A [`CheckoutGateway`] receives a snapshot of the
//! cart and decides what happens next; the bundled gateways either explain how to
//! connect a provider or hand the order off to WhatsApp.

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use luxor_cart::CartLineView;
use luxor_core::{Price, ProductId, SessionId};

use crate::config::StoreConfig;
use crate::contact::ContactLinks;
use crate::error::StorefrontResult;
use crate::format::format_price;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLine {
    pub product_id: ProductId,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

impl From<&CartLineView<'_>> for CheckoutLine {
    fn from(view: &CartLineView<'_>) -> Self {
        Self {
            product_id: view.product.id_typed().clone(),
            description: view.product.display_name(),
            quantity: view.quantity,
            unit_price: view.product.price(),
            line_total: view.line_total,
        }
    }
}

/// What a gateway sees: resolved, non-empty cart contents and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub session_id: SessionId,
    pub lines: Vec<CheckoutLine>,
    pub subtotal: Price,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// No payment provider is connected; show these steps to the operator.
    NotConfigured { instructions: Vec<String> },
    /// Continue the order at an external URL.
    Redirect { url: Url },
}

pub trait CheckoutGateway {
    fn begin_checkout(&self, request: &CheckoutRequest) -> StorefrontResult<CheckoutOutcome>;
}

/// Demo checkout: explains how to wire up a real provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCheckout;

impl CheckoutGateway for PlaceholderCheckout {
    fn begin_checkout(&self, request: &CheckoutRequest) -> StorefrontResult<CheckoutOutcome> {
        info!(
            session_id = %request.session_id,
            lines = request.lines.len(),
            "checkout requested but no payment provider is connected"
        );
        Ok(CheckoutOutcome::NotConfigured {
            instructions: vec![
                "Connect your payment provider (Pix/Stripe/Mercado Pago) to enable real checkout."
                    .to_string(),
                "For Pix, generate a QR code at checkout.".to_string(),
                "For cards, integrate with Stripe or Mercado Pago.".to_string(),
                "For WhatsApp orders, redirect with a prefilled message.".to_string(),
            ],
        })
    }
}

/// Sends the order to the store's WhatsApp with the cart written out as a message.
#[derive(Debug, Clone)]
pub struct WhatsAppCheckout {
    config: StoreConfig,
}

impl WhatsAppCheckout {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn order_message(&self, request: &CheckoutRequest) -> String {
        let mut message = String::from("Hi, I'd like to order:");
        for line in &request.lines {
            message.push_str(&format!(
                "\n- {}x {} ({})",
                line.quantity,
                line.description,
                format_price(line.line_total, &self.config)
            ));
        }
        message.push_str(&format!(
            "\nSubtotal: {}",
            format_price(request.subtotal, &self.config)
        ));
        message
    }
}

impl CheckoutGateway for WhatsAppCheckout {
    fn begin_checkout(&self, request: &CheckoutRequest) -> StorefrontResult<CheckoutOutcome> {
        let url = ContactLinks::new(&self.config).whatsapp_message(&self.order_message(request))?;
        info!(session_id = %request.session_id, "checkout handed off to WhatsApp");
        Ok(CheckoutOutcome::Redirect { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            session_id: SessionId::new(),
            lines: vec![
                CheckoutLine {
                    product_id: ProductId::new("tissot-prx"),
                    description: "Tissot PRX Powermatic 80".to_string(),
                    quantity: 2,
                    unit_price: Price::new(4_499),
                    line_total: Price::new(8_998),
                },
                CheckoutLine {
                    product_id: ProductId::new("rolex-sub"),
                    description: "Rolex Submariner Date Black".to_string(),
                    quantity: 1,
                    unit_price: Price::new(74_900),
                    line_total: Price::new(74_900),
                },
            ],
            subtotal: Price::new(83_898),
            currency_code: "BRL".to_string(),
        }
    }

    #[test]
    fn placeholder_returns_instructions() {
        match PlaceholderCheckout.begin_checkout(&request()).unwrap() {
            CheckoutOutcome::NotConfigured { instructions } => {
                assert!(instructions.iter().any(|i| i.contains("Pix")));
                assert!(instructions.iter().any(|i| i.contains("Stripe")));
            }
            other => panic!("Expected NotConfigured, got {other:?}"),
        }
    }

    #[test]
    fn whatsapp_order_message_lists_lines() {
        let gateway = WhatsAppCheckout::new(StoreConfig::default());
        assert_eq!(
            gateway.order_message(&request()),
            "Hi, I'd like to order:\n\
             - 2x Tissot PRX Powermatic 80 (R$ 8.998,00)\n\
             - 1x Rolex Submariner Date Black (R$ 74.900,00)\n\
             Subtotal: R$ 83.898,00"
        );
    }

    #[test]
    fn whatsapp_checkout_redirects() {
        let gateway = WhatsAppCheckout::new(StoreConfig::default());
        match gateway.begin_checkout(&request()).unwrap() {
            CheckoutOutcome::Redirect { url } => {
                assert_eq!(url.host_str(), Some("wa.me"));
                assert_eq!(url.path(), "/5598999999999");
                let (_, text) = url.query_pairs().next().unwrap();
                assert!(text.contains("Subtotal: R$ 83.898,00"));
            }
            other => panic!("Expected Redirect, got {other:?}"),
        }
    }
}
