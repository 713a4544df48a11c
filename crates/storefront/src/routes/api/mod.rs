//! JSON API handlers.
//!
//! The cart endpoints share the session cart with the HTML pages.

pub mod cart;
pub mod products;
