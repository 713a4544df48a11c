//! The three navigable views.

use serde::{Deserialize, Serialize};

/// Which view is showing.
///
/// Navigation only moves between these through explicit links; there is no
/// history stack and no guard on any transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Landing,
    ProductListing,
    Cart,
}

impl Page {
    /// The route that renders this page.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::ProductListing => "/products",
            Self::Cart => "/cart",
        }
    }

    /// The header is hidden on the landing page and shown everywhere else.
    #[must_use]
    pub const fn shows_header(&self) -> bool {
        !matches!(self, Self::Landing)
    }

    /// Document title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Paradise Nursery",
            Self::ProductListing => "Our Collection | Paradise Nursery",
            Self::Cart => "Shopping Cart | Paradise Nursery",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Page::default().path(), "/");
        assert_eq!(Page::ProductListing.path(), "/products");
        assert_eq!(Page::Cart.path(), "/cart");
    }

    #[test]
    fn test_header_hidden_only_on_landing() {
        assert!(!Page::Landing.shows_header());
        assert!(Page::ProductListing.shows_header());
        assert!(Page::Cart.shows_header());
    }
}
