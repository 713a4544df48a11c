//! Catalog listing command.
//!
//! # Usage
//!
//! ```bash
//! # Print every product grouped by category
//! pn-cli catalog
//!
//! # Only succulents, as JSON
//! pn-cli catalog --category succulents --json
//! ```

use std::fmt::Write as _;

use paradise_nursery_core::{Catalog, Category, Product};

/// Render the catalog as text, grouped by category in display order.
///
/// With `only` set, other categories are skipped.
#[must_use]
pub fn render_text(catalog: &Catalog, only: Option<Category>) -> String {
    let mut out = String::new();

    for section in catalog.sections() {
        if only.is_some_and(|category| category != section.category) {
            continue;
        }

        let _ = writeln!(out, "{}", section.category);
        for product in &section.products {
            let _ = writeln!(
                out,
                "  {:>3}  {:<20} {:>8}",
                product.id,
                product.name,
                product.price.display()
            );
        }
    }

    out
}

/// Render the catalog as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(catalog: &Catalog, only: Option<Category>) -> serde_json::Result<String> {
    let products: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|product| only.is_none_or(|category| category == product.category))
        .collect();
    serde_json::to_string_pretty(&products)
}
