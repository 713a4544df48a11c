//! Owned cart state exposing `dispatch`.

use tracing::debug;

use crate::cart::{CartAction, CartState, reduce};

/// Holds one shopper's cart and applies actions to it.
///
/// The store is the only writer of its state: callers read through
/// [`CartStore::state`] and change it through [`CartStore::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// A store holding an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CartState::new(),
        }
    }

    /// The current cart.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply an action and return the resulting cart.
    pub fn dispatch(&mut self, action: &CartAction) -> &CartState {
        self.state = reduce(&self.state, action);
        debug!(
            action = action.kind(),
            product_id = action.product_id().map(|id| id.as_i32()),
            lines = self.state.items().len(),
            total_items = self.state.total_items(),
            "cart action dispatched"
        );
        &self.state
    }

    /// Consume the store, returning its cart.
    #[must_use]
    pub fn into_state(self) -> CartState {
        self.state
    }
}

impl From<CartState> for CartStore {
    fn from(state: CartState) -> Self {
        Self { state }
    }
}

impl From<CartStore> for CartState {
    fn from(store: CartStore) -> Self {
        store.state
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::ProductId;

    #[test]
    fn test_dispatch_sequence() {
        let catalog = Catalog::paradise_nursery();
        let aloe = catalog.get(ProductId::new(3)).cloned().unwrap();
        let mut store = CartStore::new();

        store.dispatch(&CartAction::AddToCart(aloe.clone()));
        store.dispatch(&CartAction::IncreaseQuantity(aloe.id));
        let state = store.dispatch(&CartAction::DecreaseQuantity(aloe.id));

        assert_eq!(state.items()[0].quantity, 1);
        assert_eq!(state.total_cost().display(), "$19.99");
    }

    #[test]
    fn test_hydrate_and_extract() {
        let catalog = Catalog::paradise_nursery();
        let jade = catalog.get(ProductId::new(4)).cloned().unwrap();

        let mut store = CartStore::new();
        store.dispatch(&CartAction::AddToCart(jade));
        let saved = store.into_state();

        let mut restored = CartStore::from(saved.clone());
        assert_eq!(restored.state(), &saved);
        restored.dispatch(&CartAction::Unknown);
        assert_eq!(CartState::from(restored), saved);
    }
}
