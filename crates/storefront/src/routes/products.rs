//! Product listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use paradise_nursery_core::{CartState, CatalogSection, Page, Product};
use tower_sessions::Session;
use tracing::instrument;

use super::HeaderView;
use crate::error::Result;
use crate::services::cart;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone, Debug)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    /// The card shows a disabled "Added to Cart" button once the product is in the cart.
    pub in_cart: bool,
}

impl ProductView {
    fn new(product: &Product, cart: &CartState) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            in_cart: cart.contains(product.id),
        }
    }
}

/// One category heading and its product cards.
#[derive(Clone, Debug)]
pub struct CategorySectionView {
    pub name: &'static str,
    pub slug: &'static str,
    pub products: Vec<ProductView>,
}

impl CategorySectionView {
    fn new(section: &CatalogSection<'_>, cart: &CartState) -> Self {
        Self {
            name: section.category.name(),
            slug: section.category.slug(),
            products: section
                .products
                .iter()
                .map(|product| ProductView::new(product, cart))
                .collect(),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub title: &'static str,
    pub header: HeaderView,
    pub sections: Vec<CategorySectionView>,
}

/// Display the product listing, grouped by category.
///
/// # Errors
///
/// Returns an error if the session's cart cannot be read.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let cart = cart::load(&session).await?;

    let sections = state
        .catalog()
        .sections()
        .iter()
        .map(|section| CategorySectionView::new(section, &cart))
        .collect();

    Ok(ProductsIndexTemplate {
        title: Page::ProductListing.title(),
        header: HeaderView::for_page(Page::ProductListing, &cart),
        sections,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use paradise_nursery_core::{CartAction, Catalog, ProductId, reduce};

    use super::*;

    #[test]
    fn test_in_cart_flag() {
        let catalog = Catalog::paradise_nursery();
        let snake = catalog.get(ProductId::new(2)).unwrap();
        let cart = reduce(&CartState::new(), &CartAction::AddToCart(snake.clone()));

        let sections: Vec<CategorySectionView> = catalog
            .sections()
            .iter()
            .map(|section| CategorySectionView::new(section, &cart))
            .collect();

        let indoor = &sections[0];
        assert_eq!(indoor.name, "Indoor Plants");
        assert!(!indoor.products[0].in_cart);
        assert!(indoor.products[1].in_cart);
        assert_eq!(indoor.products[1].price, "$24.99");
        assert!(sections[2].products.iter().all(|p| !p.in_cart));
    }
}
