//! Paradise Nursery Core - Catalog, cart reducer and shared types.
//!
//! This crate provides the domain logic used by every Paradise Nursery
//! component:
//! - `storefront` - Server-rendered shop (landing, product listing, cart)
//! - `cli` - Command-line tools for browsing the catalog and replaying carts
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no session handling. Cart state only changes through [`cart::reduce`],
//! usually via a [`CartStore`].
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices and categories
//! - [`catalog`] - The fixed, read-only product set
//! - [`cart`] - Cart state, actions and the reducer
//! - [`store`] - Owned cart state exposing `dispatch`
//! - [`page`] - The three navigable views

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod page;
pub mod store;
pub mod types;

pub use cart::{CartAction, CartLineItem, CartState, reduce};
pub use catalog::{Catalog, CatalogError, CatalogSection};
pub use page::Page;
pub use store::CartStore;
pub use types::*;
