use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use luxor_core::{Aggregate, AggregateRoot, DomainError, ProductId, SessionId};
use luxor_events::Event;

/// One product in the cart with the quantity desired (always ≥ 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Aggregate type recorded on cart event envelopes.
pub const CART_STREAM: &str = "cart";

/// Aggregate root: Cart.
///
/// Maps product id to quantity. An entry is removed outright rather than kept at
/// zero, so every stored quantity is at least 1. Lines keep the order in which
/// products were first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CartState", try_from = "CartState")]
pub struct Cart {
    id: SessionId,
    quantities: IndexMap<ProductId, u32>,
    version: u64,
}

impl Cart {
    /// An empty cart owned by `session_id`.
    pub fn empty(session_id: SessionId) -> Self {
        Self {
            id: session_id,
            quantities: IndexMap::new(),
            version: 0,
        }
    }

    /// Rebuild a cart by applying `events` in order.
    pub fn from_events<'a>(
        session_id: SessionId,
        events: impl IntoIterator<Item = &'a CartEvent>,
    ) -> Self {
        let mut cart = Self::empty(session_id);
        for event in events {
            cart.apply(event);
        }
        cart
    }

    pub fn session_id(&self) -> SessionId {
        self.id
    }

    pub fn quantities(&self) -> &IndexMap<ProductId, u32> {
        &self.quantities
    }

    /// Quantity held for `id`; `None` when the product is not in the cart.
    pub fn quantity(&self, id: &ProductId) -> Option<u32> {
        self.quantities.get(id).copied()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.quantities.contains_key(id)
    }

    pub fn lines(&self) -> impl Iterator<Item = CartLine> + '_ {
        self.quantities.iter().map(|(id, &quantity)| CartLine {
            product_id: id.clone(),
            quantity,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Number of distinct products (entry count).
    pub fn distinct_items(&self) -> usize {
        self.quantities.len()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    /// Add one unit of `id` (stamped now). Returns the applied events.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Vec<CartEvent> {
        self.run(CartCommand::AddToCart(AddToCart {
            product_id: id.clone(),
            occurred_at: Utc::now(),
        }))
    }

    /// Remove one unit of `id` (stamped now). A no-op when `id` is absent.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Vec<CartEvent> {
        self.run(CartCommand::RemoveFromCart(RemoveFromCart {
            product_id: id.clone(),
            occurred_at: Utc::now(),
        }))
    }

    /// Drop every line (session reset).
    pub fn clear(&mut self) -> Vec<CartEvent> {
        self.run(CartCommand::ClearCart(ClearCart {
            occurred_at: Utc::now(),
        }))
    }

    fn run(&mut self, command: CartCommand) -> Vec<CartEvent> {
        let Ok(events) = self.execute(&command);
        events
    }
}

impl AggregateRoot for Cart {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Serializable form of a [`Cart`]: the owning session plus its lines in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub session_id: SessionId,
    pub lines: Vec<CartLine>,
    #[serde(default)]
    pub version: u64,
}

impl From<Cart> for CartState {
    fn from(cart: Cart) -> Self {
        Self {
            session_id: cart.id,
            lines: cart
                .quantities
                .into_iter()
                .map(|(product_id, quantity)| CartLine {
                    product_id,
                    quantity,
                })
                .collect(),
            version: cart.version,
        }
    }
}

impl TryFrom<CartState> for Cart {
    type Error = DomainError;

    fn try_from(state: CartState) -> Result<Self, Self::Error> {
        let mut quantities = IndexMap::with_capacity(state.lines.len());
        for line in state.lines {
            if line.quantity == 0 {
                return Err(DomainError::invariant(format!(
                    "cart line `{}` has zero quantity",
                    line.product_id
                )));
            }
            if quantities.insert(line.product_id.clone(), line.quantity).is_some() {
                return Err(DomainError::invariant(format!(
                    "cart line `{}` appears twice",
                    line.product_id
                )));
            }
        }
        Ok(Self {
            id: state.session_id,
            quantities,
            version: state.version,
        })
    }
}

/// Command: AddToCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveFromCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromCart {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddToCart(AddToCart),
    RemoveFromCart(RemoveFromCart),
    ClearCart(ClearCart),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = core::convert::Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                let qty = self.quantities.entry(e.product_id.clone()).or_insert(0);
                *qty = qty.saturating_add(1);
            }
            CartEvent::ItemRemoved(e) => match self.quantity(&e.product_id) {
                Some(qty) if qty > 1 => {
                    self.quantities.insert(e.product_id.clone(), qty - 1);
                }
                // Quantity 1 collapses back to absent; zero is never stored.
                Some(_) => {
                    self.quantities.shift_remove(&e.product_id);
                }
                None => {}
            },
            CartEvent::CartCleared(_) => {
                self.quantities.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = match command {
            // Product existence is the caller's concern. A line already at the
            // quantity cap takes no more units.
            CartCommand::AddToCart(cmd) => {
                if self.quantity(&cmd.product_id) == Some(u32::MAX) {
                    Vec::new()
                } else {
                    vec![CartEvent::ItemAdded(ItemAdded {
                        product_id: cmd.product_id.clone(),
                        occurred_at: cmd.occurred_at,
                    })]
                }
            }
            CartCommand::RemoveFromCart(cmd) => {
                if self.contains(&cmd.product_id) {
                    vec![CartEvent::ItemRemoved(ItemRemoved {
                        product_id: cmd.product_id.clone(),
                        occurred_at: cmd.occurred_at,
                    })]
                } else {
                    Vec::new()
                }
            }
            CartCommand::ClearCart(cmd) => {
                if self.is_empty() {
                    Vec::new()
                } else {
                    vec![CartEvent::CartCleared(CartCleared {
                        occurred_at: cmd.occurred_at,
                    })]
                }
            }
        };
        Ok(events)
    }
}
