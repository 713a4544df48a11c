//! Integration tests for the Paradise Nursery storefront.
//!
//! Each test spawns the full storefront router on an ephemeral port and
//! drives it over HTTP with a cookie-carrying client, so every test gets its
//! own server and its own session.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paradise-nursery-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_pages` - Landing, listing, cart and checkout pages
//! - `storefront_api` - JSON catalog and cart endpoints
//! - `storefront_middleware` - Health, request IDs and security headers

use std::net::SocketAddr;

use paradise_nursery_storefront::{app, config::StorefrontConfig, state::AppState};
use reqwest::Client;
use serde::Deserialize;

/// A running storefront plus a client bound to one session.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront on `127.0.0.1:0` with the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the client cannot be built.
    #[allow(clippy::expect_used)]
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let router = app(AppState::new(StorefrontConfig::default()));
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetch a page and return its body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the status is not 200.
    #[allow(clippy::expect_used)]
    pub async fn page(&self, path: &str) -> String {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "GET {path}");
        resp.text().await.expect("Failed to read response")
    }

    /// Submit one of the cart forms (`add`, `increase`, `decrease`, `remove`).
    ///
    /// Redirects are followed, so the returned body is the page the form
    /// lands on.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the final status is not 200.
    #[allow(clippy::expect_used)]
    pub async fn post_cart(&self, verb: &str, product_id: i32) -> String {
        let resp = self
            .client
            .post(self.url(&format!("/cart/{verb}")))
            .form(&[("product_id", product_id.to_string())])
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "POST /cart/{verb}");
        resp.text().await.expect("Failed to read response")
    }

    /// Read the session's cart through the JSON API.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not a cart.
    #[allow(clippy::expect_used)]
    pub async fn cart(&self) -> CartSummary {
        self.client
            .get(self.url("/api/cart"))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to decode cart")
    }
}

/// The cart as returned by `/api/cart`.
#[derive(Debug, Deserialize)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub total_items: u64,
    pub total_cost: String,
}

/// One line of [`CartSummary`].
#[derive(Debug, Deserialize)]
pub struct CartLine {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl CartSummary {
    /// Quantity of a product, if it is in the cart.
    #[must_use]
    pub fn quantity_of(&self, product_id: i32) -> Option<u32> {
        self.items
            .iter()
            .find(|line| line.id == product_id)
            .map(|line| line.quantity)
    }
}
