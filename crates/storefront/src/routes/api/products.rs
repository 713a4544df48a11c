//! Catalog JSON endpoint.

use axum::{Json, extract::State};
use paradise_nursery_core::Product;
use tracing::instrument;

use crate::state::AppState;

/// List every product in catalog order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().products().to_vec())
}
