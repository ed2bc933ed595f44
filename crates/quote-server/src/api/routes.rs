//! REST API routes.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use quote_core::City;
use std::sync::Arc;

use crate::api::{fleet, quote};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/cities", get(list_cities))
        .route("/v1/fleet", get(fleet::list_fleet))
        .route("/v1/fleet/candidates", get(fleet::list_candidates))
        .route("/v1/quote", post(quote::create_quote))
}

async fn list_cities(State(state): State<Arc<AppState>>) -> Json<Vec<City>> {
    Json(state.gazetteer().cities().to_vec())
}
