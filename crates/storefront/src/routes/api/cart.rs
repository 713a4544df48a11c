//! Cart JSON endpoints.
//!
//! `POST /api/cart` accepts one action in the reducer's wire format:
//!
//! ```json
//! {"type": "INCREASE_QUANTITY", "payload": 3}
//! {"type": "ADD_TO_CART", "payload": {"id": 3}}
//! ```
//!
//! Unrecognized action types leave the cart unchanged, whatever their payload.

use axum::{Json, extract::State};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::routes::cart::CartView;
use crate::services::cart::{self, ActionRequest};
use crate::state::AppState;

/// Return the session's cart.
///
/// # Errors
///
/// Returns an error if the session's cart cannot be read.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = cart::load(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Dispatch one action against the session's cart.
///
/// # Errors
///
/// Returns 404 if an `ADD_TO_CART` names a product outside the catalog.
#[instrument(skip(state, session))]
pub async fn dispatch(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ActionRequest>,
) -> Result<Json<CartView>> {
    let action = cart::resolve(state.catalog(), request)?;
    let cart = cart::dispatch(&session, &action).await?;
    Ok(Json(CartView::from(&cart)))
}
