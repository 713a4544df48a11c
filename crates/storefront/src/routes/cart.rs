//! Cart route handlers.
//!
//! Every cart control on the page is a small form that posts one product id.
//! Each post maps 1:1 to a cart action, dispatched against the session's
//! cart, then redirects (303) back to the page it came from.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use paradise_nursery_core::{CartAction, CartLineItem, CartState, Page, ProductId};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use super::HeaderView;
use crate::error::{AppError, Result};
use crate::services::cart;
use crate::state::AppState;

/// Notice shown when the shopper tries to check out.
pub const CHECKOUT_NOTICE: &str = "Checkout is coming soon.";

/// Cart line display data for templates and the JSON API.
#[derive(Clone, Debug, Serialize)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub category: &'static str,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates and the JSON API.
#[derive(Clone, Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_items: u64,
    pub total_cost: String,
}

impl From<&CartLineItem> for CartItemView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.product.id.as_i32(),
            name: line.product.name.clone(),
            category: line.product.category.name(),
            image: line.product.image.clone(),
            price: line.product.price.display(),
            quantity: line.quantity,
            line_total: line.line_total().display(),
        }
    }
}

impl From<&CartState> for CartView {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total_items: cart.total_items(),
            total_cost: cart.total_cost().display(),
        }
    }
}

/// Form data for every cart control.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: ProductId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub title: &'static str,
    pub header: HeaderView,
    pub cart: CartView,
    pub notice: Option<&'static str>,
    pub continue_shopping_url: &'static str,
}

impl CartShowTemplate {
    fn new(cart: &CartState, notice: Option<&'static str>) -> Self {
        Self {
            title: Page::Cart.title(),
            header: HeaderView::for_page(Page::Cart, cart),
            cart: CartView::from(cart),
            notice,
            continue_shopping_url: Page::ProductListing.path(),
        }
    }
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Display cart page.
///
/// # Errors
///
/// Returns an error if the session's cart cannot be read.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    let cart = cart::load(&session).await?;
    Ok(CartShowTemplate::new(&cart, None))
}

/// Add one of a catalog product to the cart.
///
/// # Errors
///
/// Returns 404 if the product is not in the catalog.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .get(form.product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    cart::dispatch(&session, &CartAction::AddToCart(product)).await?;
    Ok(Redirect::to(Page::ProductListing.path()))
}

/// Add one to a cart line.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn increase(session: Session, Form(form): Form<ProductForm>) -> Result<Redirect> {
    cart::dispatch(&session, &CartAction::IncreaseQuantity(form.product_id)).await?;
    Ok(Redirect::to(Page::Cart.path()))
}

/// Take one from a cart line. A line at quantity 1 stays at 1.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn decrease(session: Session, Form(form): Form<ProductForm>) -> Result<Redirect> {
    cart::dispatch(&session, &CartAction::DecreaseQuantity(form.product_id)).await?;
    Ok(Redirect::to(Page::Cart.path()))
}

/// Remove a line from the cart.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<ProductForm>) -> Result<Redirect> {
    cart::dispatch(&session, &CartAction::RemoveFromCart(form.product_id)).await?;
    Ok(Redirect::to(Page::Cart.path()))
}

/// Get cart count badge fragment.
///
/// # Errors
///
/// Returns an error if the session's cart cannot be read.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = cart::load(&session).await?;
    Ok(CartCountTemplate {
        count: cart.total_items(),
    })
}

/// Checkout is not available yet; show the cart with a notice instead.
///
/// # Errors
///
/// Returns an error if the session's cart cannot be read.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Result<impl IntoResponse> {
    let cart = cart::load(&session).await?;
    tracing::info!(total_items = cart.total_items(), "checkout requested");
    Ok(CartShowTemplate::new(&cart, Some(CHECKOUT_NOTICE)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use paradise_nursery_core::{Catalog, reduce};

    use super::*;

    #[test]
    fn test_cart_view_totals() {
        let catalog = Catalog::paradise_nursery();
        let aloe = catalog.get(ProductId::new(3)).unwrap().clone();
        let mut cart = reduce(&CartState::new(), &CartAction::AddToCart(aloe.clone()));
        cart = reduce(&cart, &CartAction::IncreaseQuantity(aloe.id));

        let view = CartView::from(&cart);
        assert_eq!(view.total_items, 2);
        assert_eq!(view.total_cost, "$39.98");
        assert_eq!(view.items[0].price, "$19.99");
        assert_eq!(view.items[0].line_total, "$39.98");
        assert_eq!(view.items[0].category, "Succulents");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&CartState::new());
        assert!(view.items.is_empty());
        assert_eq!(view.total_items, 0);
        assert_eq!(view.total_cost, "$0.00");
    }

    #[test]
    fn test_cart_template_renders_totals() {
        let catalog = Catalog::paradise_nursery();
        let monstera = catalog.get(ProductId::new(1)).unwrap().clone();
        let cart = reduce(&CartState::new(), &CartAction::AddToCart(monstera));

        let html = CartShowTemplate::new(&cart, None).render().unwrap();
        assert!(html.contains("Monstera Deliciosa"));
        assert!(html.contains("$39.99"));
        assert!(!html.contains("Your cart is empty"));
    }

    #[test]
    fn test_empty_cart_template() {
        let html = CartShowTemplate::new(&CartState::new(), Some(CHECKOUT_NOTICE))
            .render()
            .unwrap();
        assert!(html.contains("Your cart is empty"));
        assert!(html.contains("Continue Shopping"));
        assert!(html.contains(CHECKOUT_NOTICE));
    }
}
