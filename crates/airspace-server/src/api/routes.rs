//! REST API routes.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::{flights, reference};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        // Filter change: generate, filter, render
        .route("/v1/flights", get(flights::list_flights))
        // Map click: resolve against a rendered batch
        .route("/v1/flights/:token/:flight_id", get(flights::get_flight_detail))
        // Static layers
        .route("/v1/airports", get(reference::list_airports))
        .route("/v1/airports/:code", get(reference::get_airport))
        .route("/v1/regions", get(reference::list_regions))
        .route("/v1/regions/check", get(reference::check_point))
}
