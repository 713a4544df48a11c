//! Session-related types.
//!
//! The cart itself is stored in the session as a serialized
//! [`paradise_nursery_core::CartState`].

/// Session keys.
pub mod keys {
    /// Key for storing the shopper's cart state.
    pub const CART: &str = "cart";
}
