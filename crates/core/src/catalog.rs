//! The fixed, read-only product catalog.
//!
//! The catalog is small (tens of items), so lookups are linear scans over a
//! `Vec` kept in catalog order.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{Category, CurrencyCode, Price, Product, ProductId};

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),
    #[error("Product {id} is priced in {found}, catalog currency is {expected}")]
    MixedCurrency {
        id: ProductId,
        expected: &'static str,
        found: &'static str,
    },
}

/// One category heading in the listing, with its products.
#[derive(Debug, Clone)]
pub struct CatalogSection<'a> {
    pub category: Category,
    pub products: Vec<&'a Product>,
}

/// The set of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating the product set.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two products share an id, a price is
    /// negative, or products are priced in different currencies.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        let currency = products.first().map(|p| p.price.currency_code);

        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice(product.id));
            }
            if let Some(expected) = currency
                && product.price.currency_code != expected
            {
                return Err(CatalogError::MixedCurrency {
                    id: product.id,
                    expected: expected.code(),
                    found: product.price.currency_code.code(),
                });
            }
        }

        Ok(Self { products })
    }

    /// The Paradise Nursery plant collection.
    #[must_use]
    pub fn paradise_nursery() -> Self {
        let plant = |id: i32, name: &str, cents: i64, category: Category, photo: &str| {
            Product::new(
                ProductId::new(id),
                name,
                Price::from_cents(cents, CurrencyCode::USD),
                category,
                format!("https://images.unsplash.com/{photo}?w=400&h=400&fit=crop"),
            )
        };

        Self {
            products: vec![
                plant(
                    1,
                    "Monstera Deliciosa",
                    3999,
                    Category::IndoorPlants,
                    "photo-1614594975525-e45190c55d0b",
                ),
                plant(
                    2,
                    "Snake Plant",
                    2499,
                    Category::IndoorPlants,
                    "photo-1593482892290-f54927ae1bb8",
                ),
                plant(
                    3,
                    "Aloe Vera",
                    1999,
                    Category::Succulents,
                    "photo-1509587584298-0f3b3a3a1797",
                ),
                plant(
                    4,
                    "Jade Plant",
                    2999,
                    Category::Succulents,
                    "photo-1459156212016-c812468e2115",
                ),
                plant(
                    5,
                    "Peace Lily",
                    3499,
                    Category::FloweringPlants,
                    "photo-1593691509543-c55fb32d8de5",
                ),
                plant(
                    6,
                    "Orchid",
                    4499,
                    Category::FloweringPlants,
                    "photo-1615811361523-6bd03d7748e7",
                ),
            ],
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Every category in display order with its products.
    ///
    /// Categories without products are still listed, with an empty list.
    #[must_use]
    pub fn sections(&self) -> Vec<CatalogSection<'_>> {
        Category::ALL
            .into_iter()
            .map(|category| CatalogSection {
                category,
                products: self.by_category(category).collect(),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::paradise_nursery()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::paradise_nursery();
        let rebuilt = Catalog::new(builtin.products().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 6);
    }

    #[test]
    fn test_sections_follow_category_order() {
        let catalog = Catalog::paradise_nursery();
        let sections = catalog.sections();

        let names: Vec<&str> = sections.iter().map(|s| s.category.name()).collect();
        assert_eq!(names, vec!["Indoor Plants", "Succulents", "Flowering Plants"]);

        let succulents: Vec<&str> = sections[1].products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(succulents, vec!["Aloe Vera", "Jade Plant"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::paradise_nursery();
        let orchid = catalog.get(ProductId::new(6)).unwrap();
        assert_eq!(orchid.name, "Orchid");
        assert_eq!(orchid.price.display(), "$44.99");
        assert!(orchid.image.starts_with("https://images.unsplash.com/"));
        assert!(catalog.get(ProductId::new(7)).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut products = Catalog::paradise_nursery().products().to_vec();
        products[1].id = ProductId::new(1);
        assert_eq!(
            Catalog::new(products).unwrap_err(),
            CatalogError::DuplicateId(ProductId::new(1))
        );
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut products = Catalog::paradise_nursery().products().to_vec();
        products[2].price = Price::from_cents(-100, CurrencyCode::USD);
        assert_eq!(
            Catalog::new(products).unwrap_err(),
            CatalogError::NegativePrice(ProductId::new(3))
        );
    }

    #[test]
    fn test_rejects_mixed_currency() {
        let mut products = Catalog::paradise_nursery().products().to_vec();
        products[4].price = Price::from_cents(3499, CurrencyCode::EUR);
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::MixedCurrency { found: "EUR", .. })
        ));
    }

    #[test]
    fn test_empty_category_still_listed() {
        let products = Catalog::paradise_nursery()
            .by_category(Category::Succulents)
            .cloned()
            .collect();
        let catalog = Catalog::new(products).unwrap();
        let sections = catalog.sections();
        assert_eq!(sections.len(), 3);
        assert!(sections[0].products.is_empty());
        assert_eq!(sections[1].products.len(), 2);
    }
}
