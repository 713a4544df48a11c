//! Core types for Paradise Nursery.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use category::{Category, UnknownCategory};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::Product;
