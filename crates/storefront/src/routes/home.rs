//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use paradise_nursery_core::{CartState, Page};
use tracing::instrument;

use super::HeaderView;

/// Welcome copy shown over the landing hero.
const INTRO: &str = "Welcome to Paradise Nursery, where green dreams come true! \
We are passionate about bringing nature closer to you. Our extensive collection of \
houseplants, succulents, and flowering beauties are carefully curated to transform \
your space into a lush paradise. Whether you're a seasoned plant parent or just \
starting your green journey, we have the perfect plant companion waiting for you. \
Let's grow together!";

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct LandingTemplate {
    pub title: &'static str,
    pub header: HeaderView,
    pub intro: &'static str,
    pub get_started_url: &'static str,
}

/// Display the landing page.
///
/// The landing page has no header, so the cart is not read.
#[instrument]
pub async fn landing() -> impl IntoResponse {
    LandingTemplate {
        title: Page::Landing.title(),
        header: HeaderView::for_page(Page::Landing, &CartState::new()),
        intro: INTRO,
        get_started_url: Page::ProductListing.path(),
    }
}
