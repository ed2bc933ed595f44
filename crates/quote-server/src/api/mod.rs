//! API routes for the quote server.

pub mod error;
pub mod fleet;
pub mod quote;
mod routes;

use axum::Router;

pub use error::ApiError;

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}
