//! Cart summary read model (badge count, distinct lines).

use indexmap::IndexMap;

use luxor_core::ProductId;
use luxor_events::{EventEnvelope, Projection};

use crate::cart::CartEvent;

/// Running cart totals rebuilt from a session's event history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSummary {
    quantities: IndexMap<ProductId, u32>,
    events_seen: u64,
}

impl CartSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    pub fn distinct_items(&self) -> usize {
        self.quantities.len()
    }

    pub fn events_seen(&self) -> u64 {
        self.events_seen
    }

    /// Badge text value: `None` for an empty cart, else the total quantity.
    pub fn badge(&self) -> Option<u64> {
        match self.item_count() {
            0 => None,
            n => Some(n),
        }
    }
}

impl Projection for CartSummary {
    type Ev = CartEvent;

    fn apply(&mut self, envelope: &EventEnvelope<Self::Ev>) {
        match envelope.payload() {
            CartEvent::ItemAdded(e) => {
                let qty = self.quantities.entry(e.product_id.clone()).or_insert(0);
                *qty = qty.saturating_add(1);
            }
            CartEvent::ItemRemoved(e) => {
                if let Some(qty) = self.quantities.get(&e.product_id).copied() {
                    if qty > 1 {
                        self.quantities.insert(e.product_id.clone(), qty - 1);
                    } else {
                        self.quantities.shift_remove(&e.product_id);
                    }
                }
            }
            CartEvent::CartCleared(_) => self.quantities.clear(),
        }
        self.events_seen += 1;
    }
}
