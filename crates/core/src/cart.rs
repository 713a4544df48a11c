//! Cart state and the reducer that transitions it.
//!
//! Cart state never changes in place from the outside. Every transition goes
//! through [`reduce`], which takes the current state and a [`CartAction`]
//! and returns the next state.
//!
//! # Quantity rules
//!
//! - A line item's quantity is always at least 1.
//! - `AddToCart` and `IncreaseQuantity` increment by one.
//! - `DecreaseQuantity` only decrements a line whose quantity is above 1.
//!   A line at quantity 1 stays at 1; the action never removes it.
//! - `RemoveFromCart` is the only way a line leaves the cart.

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, Product, ProductId};

/// A product plus a quantity within the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    /// A new line for `product` with quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product ID this line is keyed by.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The contents of one shopper's cart.
///
/// Line items are ordered by first insertion and keyed by product ID; there
/// is at most one line per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CartStateRepr")]
pub struct CartState {
    items: Vec<CartLineItem>,
}

/// Wire shape of [`CartState`], normalized on the way in.
#[derive(Deserialize)]
struct CartStateRepr {
    #[serde(default)]
    items: Vec<CartLineItem>,
}

impl From<CartStateRepr> for CartState {
    fn from(repr: CartStateRepr) -> Self {
        let mut items: Vec<CartLineItem> = Vec::with_capacity(repr.items.len());
        for item in repr.items.into_iter().filter(|item| item.quantity > 0) {
            match items.iter_mut().find(|existing| existing.id() == item.id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => items.push(item),
            }
        }
        Self { items }
    }
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in first-insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line item for a product, if it is in the cart.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Whether the product is in the cart.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price times quantity over all lines.
    ///
    /// Assumes a single-currency cart, which the catalog guarantees. An
    /// empty cart totals zero in the default currency.
    #[must_use]
    pub fn total_cost(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or_else(CurrencyCode::default, |item| item.product.price.currency_code);
        let amount: Decimal = self.items.iter().map(|item| item.line_total().amount).sum();
        Price::new(amount, currency)
    }

    fn map_items(&self, f: impl Fn(&CartLineItem) -> CartLineItem) -> Self {
        Self {
            items: self.items.iter().map(f).collect(),
        }
    }

    fn filter_items(self, keep: impl Fn(&CartLineItem) -> bool) -> Self {
        Self {
            items: self.items.into_iter().filter(|item| keep(item)).collect(),
        }
    }
}

/// A cart transition requested by the shopper.
///
/// Serialized as `{"type": "ADD_TO_CART", "payload": {...}}`. Any tag not
/// listed here deserializes to [`CartAction::Unknown`] whatever its payload,
/// and leaves the cart unchanged. A known tag with a malformed payload is
/// still an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    try_from = "CartActionRepr"
)]
pub enum CartAction {
    /// Add one of a product, creating its line if needed.
    AddToCart(Product),
    /// Add one to an existing line.
    IncreaseQuantity(ProductId),
    /// Take one from an existing line, never going below 1.
    DecreaseQuantity(ProductId),
    /// Drop a line entirely.
    RemoveFromCart(ProductId),
    /// Any action this cart does not understand.
    Unknown,
}

/// Wire tags of the actions the reducer handles.
const KNOWN_TAGS: [&str; 4] = [
    "ADD_TO_CART",
    "INCREASE_QUANTITY",
    "DECREASE_QUANTITY",
    "REMOVE_FROM_CART",
];

/// Wire shape of [`CartAction`]: a recognized action, or any other tag with
/// its payload skipped.
#[derive(Deserialize)]
#[serde(untagged)]
enum CartActionRepr {
    Known(KnownAction),
    Other {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        #[allow(dead_code)]
        payload: IgnoredAny,
    },
}

#[derive(Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
enum KnownAction {
    AddToCart(Product),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    RemoveFromCart(ProductId),
}

impl TryFrom<CartActionRepr> for CartAction {
    type Error = String;

    fn try_from(repr: CartActionRepr) -> Result<Self, Self::Error> {
        match repr {
            CartActionRepr::Known(KnownAction::AddToCart(product)) => Ok(Self::AddToCart(product)),
            CartActionRepr::Known(KnownAction::IncreaseQuantity(id)) => {
                Ok(Self::IncreaseQuantity(id))
            }
            CartActionRepr::Known(KnownAction::DecreaseQuantity(id)) => {
                Ok(Self::DecreaseQuantity(id))
            }
            CartActionRepr::Known(KnownAction::RemoveFromCart(id)) => Ok(Self::RemoveFromCart(id)),
            CartActionRepr::Other { kind, .. } if KNOWN_TAGS.contains(&kind.as_str()) => {
                Err(format!("invalid payload for {kind}"))
            }
            CartActionRepr::Other { .. } => Ok(Self::Unknown),
        }
    }
}

impl CartAction {
    /// The action's wire tag, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "ADD_TO_CART",
            Self::IncreaseQuantity(_) => "INCREASE_QUANTITY",
            Self::DecreaseQuantity(_) => "DECREASE_QUANTITY",
            Self::RemoveFromCart(_) => "REMOVE_FROM_CART",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// The product the action targets, if any.
    #[must_use]
    pub const fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::AddToCart(product) => Some(product.id),
            Self::IncreaseQuantity(id) | Self::DecreaseQuantity(id) | Self::RemoveFromCart(id) => {
                Some(*id)
            }
            Self::Unknown => None,
        }
    }
}

/// Compute the next cart state from the current one and an action.
///
/// Pure: `state` is never modified.
#[must_use]
pub fn reduce(state: &CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::AddToCart(product) => {
            if state.contains(product.id) {
                state.map_items(|item| increment_if(item, product.id))
            } else {
                let mut items = state.items.clone();
                items.push(CartLineItem::new(product.clone()));
                CartState { items }
            }
        }
        CartAction::IncreaseQuantity(id) => state.map_items(|item| increment_if(item, *id)),
        CartAction::DecreaseQuantity(id) => state
            .map_items(|item| {
                if item.id() == *id && item.quantity > 1 {
                    CartLineItem {
                        quantity: item.quantity - 1,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .filter_items(|item| item.quantity > 0),
        CartAction::RemoveFromCart(id) => state.clone().filter_items(|item| item.id() != *id),
        CartAction::Unknown => state.clone(),
    }
}

fn increment_if(item: &CartLineItem, id: ProductId) -> CartLineItem {
    if item.id() == id {
        CartLineItem {
            quantity: item.quantity.saturating_add(1),
            ..item.clone()
        }
    } else {
        item.clone()
    }
}
