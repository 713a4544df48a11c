//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing, grouped by category
//!
//! # Cart (form posts redirect with 303)
//! GET  /cart                   - Cart page
//! POST /cart/add               - ADD_TO_CART      -> /products
//! POST /cart/increase          - INCREASE_QUANTITY -> /cart
//! POST /cart/decrease          - DECREASE_QUANTITY -> /cart
//! POST /cart/remove            - REMOVE_FROM_CART  -> /cart
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Cart page with a "coming soon" notice
//!
//! # JSON API
//! GET  /api/products           - Catalog
//! GET  /api/cart               - Cart summary
//! POST /api/cart               - Dispatch a cart action
//! ```

pub mod api;
pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use paradise_nursery_core::{CartState, Page};

use crate::state::AppState;

/// Header display data shared by every page template.
///
/// Derived from the current page and cart on each render; never stored.
#[derive(Clone, Debug)]
pub struct HeaderView {
    pub visible: bool,
    pub cart_count: u64,
}

impl HeaderView {
    /// Header for `page` given the shopper's cart.
    #[must_use]
    pub fn for_page(page: Page, cart: &CartState) -> Self {
        Self {
            visible: page.shows_header(),
            cart_count: cart.total_items(),
        }
    }
}

/// Create the cart action routes router (mounted under `/cart`).
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products::index))
        .route("/cart", get(api::cart::show).post(api::cart::dispatch))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::landing))
        // Product listing
        .route("/products", get(products::index))
        // Cart routes
        .route("/cart", get(cart::show))
        .nest("/cart", cart_routes())
        // Checkout placeholder
        .route("/checkout", get(cart::checkout))
        // JSON API
        .nest("/api", api_routes())
}

#[cfg(test)]
mod tests {
    use paradise_nursery_core::{CartAction, Catalog, ProductId, reduce};

    use super::*;

    #[test]
    fn test_header_hidden_on_landing() {
        let header = HeaderView::for_page(Page::Landing, &CartState::new());
        assert!(!header.visible);
        assert!(HeaderView::for_page(Page::Cart, &CartState::new()).visible);
    }

    #[test]
    fn test_header_badge_counts_quantities() {
        let catalog = Catalog::paradise_nursery();
        let mut cart = CartState::new();
        for id in [1, 1, 3] {
            if let Some(product) = catalog.get(ProductId::new(id)) {
                cart = reduce(&cart, &CartAction::AddToCart(product.clone()));
            }
        }
        let header = HeaderView::for_page(Page::ProductListing, &cart);
        assert_eq!(header.cart_count, 3);
    }
}
