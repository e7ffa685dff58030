//! Per-shopper session state.
//!
//! A [`StorefrontSession`] is the explicit state object behind one storefront page:
//! the search text, the cart, and the history of cart events. Every UI event maps to
//! one method call that runs to completion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use luxor_cart::{CART_STREAM, Cart, CartEvent, CartLineView, CartSummary, cart_lines, subtotal};
use luxor_catalog::{Catalog, Product};
use luxor_core::{AggregateRoot, DomainError, Price, ProductId, SessionId};
use luxor_events::{EventEnvelope, SessionLog, replay};

use crate::checkout::{CheckoutLine, CheckoutRequest};
use crate::error::StorefrontResult;

#[derive(Debug, Clone)]
pub struct StorefrontSession {
    id: SessionId,
    catalog: Arc<Catalog>,
    search: String,
    cart: Cart,
    history: Vec<EventEnvelope<CartEvent>>,
}

/// Serializable copy of a session's mutable state (the catalog is not included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub search: String,
    pub cart: Cart,
    pub history: Vec<EventEnvelope<CartEvent>>,
}

impl StorefrontSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_id(SessionId::new(), catalog)
    }

    pub fn with_id(id: SessionId, catalog: Arc<Catalog>) -> Self {
        debug!(session_id = %id, products = catalog.len(), "session started");
        Self {
            id,
            catalog,
            search: String::new(),
            cart: Cart::empty(id),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // --- search ---

    /// Replace the search text (called on every keystroke).
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Catalog products matching the current search text, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.search(&self.search)
    }

    // --- cart ---

    /// Add one unit of `id`. Returns the quantity now held.
    ///
    /// Ids unknown to the catalog are accepted; they are simply never priced.
    pub fn add_to_cart(&mut self, id: &ProductId) -> u32 {
        if !self.catalog.contains(id) {
            warn!(session_id = %self.id, product_id = %id, "adding product not in catalog");
        }
        let events = self.cart.add_to_cart(id);
        self.record(events);
        let qty = self.cart.quantity(id).unwrap_or(0);
        debug!(session_id = %self.id, product_id = %id, quantity = qty, "added to cart");
        qty
    }

    /// Remove one unit of `id`. Returns the quantity left (`0` means the line is gone).
    pub fn remove_from_cart(&mut self, id: &ProductId) -> u32 {
        let events = self.cart.remove_from_cart(id);
        if events.is_empty() {
            debug!(session_id = %self.id, product_id = %id, "remove ignored: not in cart");
        }
        self.record(events);
        self.cart.quantity(id).unwrap_or(0)
    }

    /// Empty the cart and clear the search text.
    pub fn reset(&mut self) {
        let events = self.cart.clear();
        self.record(events);
        self.search.clear();
        debug!(session_id = %self.id, "session reset");
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_lines(&self) -> Vec<CartLineView<'_>> {
        cart_lines(&self.catalog, &self.cart)
    }

    pub fn subtotal(&self) -> Price {
        subtotal(&self.catalog, &self.cart)
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Cart button badge: `None` while the cart is empty.
    pub fn cart_badge(&self) -> Option<u64> {
        if self.cart.is_empty() {
            None
        } else {
            Some(self.item_count())
        }
    }

    // --- history ---

    pub fn history(&self) -> &[EventEnvelope<CartEvent>] {
        &self.history
    }

    /// Summary rebuilt from the event history rather than the live cart.
    pub fn replay_summary(&self) -> StorefrontResult<CartSummary> {
        let summary = replay(self.id, CART_STREAM, CartSummary::new(), &self.history)
            .map_err(|e| DomainError::invariant(e.to_string()))?;
        Ok(summary)
    }

    fn record(&mut self, events: Vec<CartEvent>) {
        for event in events {
            let seq = self.history.len() as u64 + 1;
            self.history.push(EventEnvelope::new(
                Uuid::now_v7(),
                self.id,
                CART_STREAM,
                seq,
                event,
            ));
        }
    }

    // --- checkout ---

    /// Resolved cart contents for a checkout gateway.
    ///
    /// Fails when nothing in the cart resolves to a catalog product.
    pub fn checkout_request(&self, currency_code: &str) -> StorefrontResult<CheckoutRequest> {
        let lines: Vec<CheckoutLine> = self.cart_lines().iter().map(CheckoutLine::from).collect();
        if lines.is_empty() {
            return Err(DomainError::validation("cannot check out an empty cart").into());
        }
        Ok(CheckoutRequest {
            session_id: self.id,
            lines,
            subtotal: self.subtotal(),
            currency_code: currency_code.to_string(),
        })
    }

    // --- snapshots ---

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            search: self.search.clone(),
            cart: self.cart.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a session from a snapshot against `catalog`.
    ///
    /// The history must be this session's dense cart log, and the cart must be
    /// exactly what replaying that log produces.
    pub fn restore(catalog: Arc<Catalog>, snapshot: SessionSnapshot) -> StorefrontResult<Self> {
        if snapshot.cart.id() != &snapshot.session_id {
            return Err(DomainError::invariant("snapshot cart belongs to another session").into());
        }
        SessionLog::verify(snapshot.session_id, CART_STREAM, &snapshot.history)
            .map_err(|e| DomainError::invariant(format!("snapshot history: {e}")))?;
        let replayed = Cart::from_events(
            snapshot.session_id,
            snapshot.history.iter().map(EventEnvelope::payload),
        );
        if replayed != snapshot.cart {
            return Err(DomainError::invariant("snapshot cart does not match its history").into());
        }
        Ok(Self {
            id: snapshot.session_id,
            catalog,
            search: snapshot.search,
            cart: snapshot.cart,
            history: snapshot.history,
        })
    }
}
