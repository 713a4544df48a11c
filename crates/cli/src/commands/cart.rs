//! Cart replay command.
//!
//! Runs a list of cart steps through a fresh [`CartStore`] and reports the
//! resulting cart. Useful for checking reducer behavior without a browser.
//!
//! # Usage
//!
//! ```bash
//! pn-cli cart add:1 add:3 increase:3 decrease:1 remove:2
//! ```
//!
//! Steps are `<verb>:<product id>`, where verb is one of `add`, `increase`
//! (`inc`), `decrease` (`dec`) or `remove` (`rm`).

use std::fmt::Write as _;
use std::str::FromStr;

use paradise_nursery_core::{CartAction, CartState, CartStore, Catalog, ProductId};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading or running a cart script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// Step is not of the form `verb:id`.
    #[error("Invalid step '{0}': expected <verb>:<product id>")]
    Malformed(String),

    /// Verb is not recognized.
    #[error("Unknown verb '{0}'. Valid verbs: add, increase, decrease, remove")]
    UnknownVerb(String),

    /// Product id is not an integer.
    #[error("Invalid product id in '{0}'")]
    InvalidId(String),

    /// `add` named a product outside the catalog.
    #[error("No product with id {0} in the catalog")]
    UnknownProduct(ProductId),
}

/// What a step does to its product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    Increase,
    Decrease,
    Remove,
}

/// One parsed `verb:id` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub verb: Verb,
    pub product_id: ProductId,
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, id) = s
            .split_once(':')
            .ok_or_else(|| ScriptError::Malformed(s.to_string()))?;

        let verb = match verb.trim().to_ascii_lowercase().as_str() {
            "add" => Verb::Add,
            "increase" | "inc" => Verb::Increase,
            "decrease" | "dec" => Verb::Decrease,
            "remove" | "rm" => Verb::Remove,
            other => return Err(ScriptError::UnknownVerb(other.to_string())),
        };
        let product_id = id
            .parse::<ProductId>()
            .map_err(|_| ScriptError::InvalidId(s.to_string()))?;

        Ok(Self { verb, product_id })
    }
}

impl Step {
    /// Turn the step into a cart action, looking up `add` products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::UnknownProduct` if an `add` step names a product
    /// outside the catalog.
    pub fn to_action(self, catalog: &Catalog) -> Result<CartAction, ScriptError> {
        Ok(match self.verb {
            Verb::Add => catalog
                .get(self.product_id)
                .cloned()
                .map(CartAction::AddToCart)
                .ok_or(ScriptError::UnknownProduct(self.product_id))?,
            Verb::Increase => CartAction::IncreaseQuantity(self.product_id),
            Verb::Decrease => CartAction::DecreaseQuantity(self.product_id),
            Verb::Remove => CartAction::RemoveFromCart(self.product_id),
        })
    }
}

/// Run the steps against an empty cart.
///
/// All steps are resolved before any is dispatched, so a bad step leaves
/// nothing half-applied.
///
/// # Errors
///
/// Returns the first `ScriptError` encountered.
pub fn replay(catalog: &Catalog, steps: &[Step]) -> Result<CartState, ScriptError> {
    let actions = steps
        .iter()
        .map(|step| step.to_action(catalog))
        .collect::<Result<Vec<_>, _>>()?;

    let mut store = CartStore::new();
    for action in &actions {
        let state = store.dispatch(action);
        debug!(action = action.kind(), total_items = state.total_items(), "step applied");
    }
    Ok(store.into_state())
}

/// JSON shape printed by `pn-cli cart --json`.
#[derive(Debug, Serialize)]
struct CartSummary<'a> {
    items: Vec<LineSummary<'a>>,
    total_items: u64,
    total_cost: String,
}

#[derive(Debug, Serialize)]
struct LineSummary<'a> {
    id: ProductId,
    name: &'a str,
    price: String,
    quantity: u32,
    line_total: String,
}

/// Render the cart as a text table with totals.
#[must_use]
pub fn render_text(cart: &CartState) -> String {
    if cart.is_empty() {
        return "Your cart is empty\n".to_string();
    }

    let mut out = String::new();
    for line in cart.items() {
        let _ = writeln!(
            out,
            "{:<20} {:>8} x {:<3} {:>9}",
            line.product.name,
            line.product.price.display(),
            line.quantity,
            line.line_total().display()
        );
    }
    let _ = writeln!(out, "Total Items: {}", cart.total_items());
    let _ = writeln!(out, "Total Cost: {}", cart.total_cost().display());
    out
}

/// Render the cart as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(cart: &CartState) -> serde_json::Result<String> {
    let summary = CartSummary {
        items: cart
            .items()
            .iter()
            .map(|line| LineSummary {
                id: line.id(),
                name: &line.product.name,
                price: line.product.price.amount_string(),
                quantity: line.quantity,
                line_total: line.line_total().amount_string(),
            })
            .collect(),
        total_items: cart.total_items(),
        total_cost: cart.total_cost().amount_string(),
    };
    serde_json::to_string_pretty(&summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn steps(raw: &[&str]) -> Vec<Step> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(
            "add:1".parse::<Step>().unwrap(),
            Step {
                verb: Verb::Add,
                product_id: ProductId::new(1)
            }
        );
        assert_eq!("DEC:4".parse::<Step>().unwrap().verb, Verb::Decrease);
        assert_eq!("rm:6".parse::<Step>().unwrap().verb, Verb::Remove);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("add".parse::<Step>(), Err(ScriptError::Malformed(_))));
        assert!(matches!(
            "buy:1".parse::<Step>(),
            Err(ScriptError::UnknownVerb(_))
        ));
        assert!(matches!(
            "add:one".parse::<Step>(),
            Err(ScriptError::InvalidId(_))
        ));
    }

    #[test]
    fn test_replay_scenario() {
        let catalog = Catalog::paradise_nursery();
        let cart = replay(
            &catalog,
            &steps(&["add:1", "add:3", "increase:3", "decrease:1", "add:6", "remove:6"]),
        )
        .unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[1].quantity, 2);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_cost().display(), "$79.97");
    }

    #[test]
    fn test_replay_unknown_product() {
        let catalog = Catalog::paradise_nursery();
        let err = replay(&catalog, &steps(&["add:1", "add:99"])).unwrap_err();
        assert_eq!(err, ScriptError::UnknownProduct(ProductId::new(99)));
    }

    #[test]
    fn test_render_text() {
        let catalog = Catalog::paradise_nursery();
        assert_eq!(render_text(&CartState::new()), "Your cart is empty\n");

        let cart = replay(&catalog, &steps(&["add:3", "inc:3"])).unwrap();
        let text = render_text(&cart);
        assert!(text.contains("Aloe Vera"));
        assert!(text.contains("Total Items: 2"));
        assert!(text.contains("Total Cost: $39.98"));
    }

    #[test]
    fn test_render_json() {
        let catalog = Catalog::paradise_nursery();
        let cart = replay(&catalog, &steps(&["add:4", "dec:4"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&render_json(&cart).unwrap()).unwrap();

        assert_eq!(value["total_items"], 1);
        assert_eq!(value["total_cost"], "29.99");
        assert_eq!(value["items"][0]["name"], "Jade Plant");
        assert_eq!(value["items"][0]["quantity"], 1);
    }
}
