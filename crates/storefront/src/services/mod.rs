//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Session-scoped cart store (load, dispatch, save)

pub mod cart;
