//! Shopping cart domain module (event-driven, session-scoped).
//!
//! This crate contains the cart ledger rules, implemented purely as deterministic
//! domain logic (no IO, no rendering, no storage).

pub mod cart;
pub mod pricing;
pub mod summary;

pub use cart::{
    AddToCart, CART_STREAM, Cart, CartCleared, CartCommand, CartEvent, CartLine, CartState,
    ClearCart, ItemAdded, ItemRemoved, RemoveFromCart,
};
pub use pricing::{CartLineView, cart_lines, item_count, subtotal};
pub use summary::CartSummary;
