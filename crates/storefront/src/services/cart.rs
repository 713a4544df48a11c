//! Session-scoped cart store.
//!
//! Each browser session owns one cart. A mutation loads the session's
//! [`CartState`] into a [`CartStore`], dispatches exactly one action, and
//! writes the result back before the handler responds.

use paradise_nursery_core::{CartAction, CartState, CartStore, Catalog, ProductId};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::session_keys;

/// Read the session's cart, or an empty cart if none is stored yet.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
pub async fn load(session: &Session) -> Result<CartState> {
    Ok(session
        .get::<CartState>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Apply one action to the session's cart and persist the result.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
pub async fn dispatch(session: &Session, action: &CartAction) -> Result<CartState> {
    let mut store = CartStore::from(load(session).await?);
    store.dispatch(action);

    let product_id = action
        .product_id()
        .map(|id| id.to_string())
        .unwrap_or_default();
    add_breadcrumb("cart", action.kind(), Some(&[("product_id", product_id.as_str())]));

    let state = store.into_state();
    session.insert(session_keys::CART, &state).await?;
    Ok(state)
}

/// A cart action as sent to the JSON API.
///
/// `ADD_TO_CART` only needs the product id: `{"type": "ADD_TO_CART",
/// "payload": {"id": 3}}`. A full product record is accepted too, but only
/// its id is read. Every other action uses the [`CartAction`] wire format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ActionRequest {
    AddToCart {
        #[serde(rename = "type")]
        kind: AddToCartTag,
        payload: ProductRef,
    },
    Action(CartAction),
}

/// The `ADD_TO_CART` wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AddToCartTag {
    #[serde(rename = "ADD_TO_CART")]
    AddToCart,
}

/// A product named by id only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ProductRef {
    pub id: ProductId,
}

impl From<CartAction> for ActionRequest {
    fn from(action: CartAction) -> Self {
        Self::Action(action)
    }
}

/// Resolve a request into a cart action against the catalog.
///
/// `ADD_TO_CART` becomes the catalog's record for the named id, so a client
/// cannot set its own name or price. Other actions pass through unchanged.
///
/// # Errors
///
/// Returns `AppError::NotFound` if an `ADD_TO_CART` names an unknown product.
pub fn resolve(catalog: &Catalog, request: ActionRequest) -> Result<CartAction> {
    let id = match request {
        ActionRequest::AddToCart { payload, .. } => payload.id,
        ActionRequest::Action(CartAction::AddToCart(product)) => product.id,
        ActionRequest::Action(other) => return Ok(other),
    };

    catalog
        .get(id)
        .cloned()
        .map(CartAction::AddToCart)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use paradise_nursery_core::{CurrencyCode, Price};

    use super::*;

    #[test]
    fn test_resolve_replaces_client_product() {
        let catalog = Catalog::paradise_nursery();
        let mut forged = catalog.get(ProductId::new(1)).cloned().unwrap();
        forged.price = Price::from_cents(1, CurrencyCode::USD);
        forged.name = "Free Monstera".to_string();

        let resolved = resolve(&catalog, CartAction::AddToCart(forged).into()).unwrap();
        let CartAction::AddToCart(product) = resolved else {
            panic!("expected AddToCart");
        };
        assert_eq!(product.name, "Monstera Deliciosa");
        assert_eq!(product.price.display(), "$39.99");
    }

    #[test]
    fn test_resolve_unknown_product() {
        let catalog = Catalog::paradise_nursery();
        let mut unknown = catalog.get(ProductId::new(1)).cloned().unwrap();
        unknown.id = ProductId::new(404);

        let err = resolve(&catalog, CartAction::AddToCart(unknown).into()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_resolve_passes_other_actions() {
        let catalog = Catalog::paradise_nursery();
        let action = CartAction::RemoveFromCart(ProductId::new(404));
        assert_eq!(resolve(&catalog, action.clone().into()).unwrap(), action);
        assert_eq!(
            resolve(&catalog, CartAction::Unknown.into()).unwrap(),
            CartAction::Unknown
        );
    }

    #[test]
    fn test_add_by_id_only() {
        let catalog = Catalog::paradise_nursery();
        let request: ActionRequest =
            serde_json::from_str(r#"{"type":"ADD_TO_CART","payload":{"id":5}}"#).unwrap();
        assert_eq!(
            request,
            ActionRequest::AddToCart {
                kind: AddToCartTag::AddToCart,
                payload: ProductRef {
                    id: ProductId::new(5)
                },
            }
        );

        let CartAction::AddToCart(product) = resolve(&catalog, request).unwrap() else {
            panic!("expected AddToCart");
        };
        assert_eq!(product.name, "Peace Lily");
    }

    #[test]
    fn test_request_wire_format() {
        let request: ActionRequest =
            serde_json::from_str(r#"{"type":"DECREASE_QUANTITY","payload":2}"#).unwrap();
        assert_eq!(
            request,
            ActionRequest::Action(CartAction::DecreaseQuantity(ProductId::new(2)))
        );

        let request: ActionRequest =
            serde_json::from_str(r#"{"type":"APPLY_COUPON","payload":{"code":"SPRING"}}"#)
                .unwrap();
        assert_eq!(request, ActionRequest::Action(CartAction::Unknown));

        assert!(
            serde_json::from_str::<ActionRequest>(r#"{"type":"ADD_TO_CART","payload":{}}"#)
                .is_err()
        );
    }
}
