//! Read-only map layers: airports and airspace regions.

use airspace_core::{Airport, AirspaceRegion};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// Airport marker with its hover text.
#[derive(Debug, Serialize)]
pub struct AirportMarker {
    #[serde(flatten)]
    pub airport: Airport,
    pub label: String,
}

impl From<&Airport> for AirportMarker {
    fn from(airport: &Airport) -> Self {
        Self {
            label: airport.label(),
            airport: airport.clone(),
        }
    }
}

pub async fn list_airports(State(state): State<Arc<AppState>>) -> Json<Vec<AirportMarker>> {
    Json(
        state
            .reference()
            .list_airports()
            .iter()
            .map(AirportMarker::from)
            .collect(),
    )
}

pub async fn get_airport(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<AirportMarker>, StatusCode> {
    state
        .reference()
        .find_airport(&code)
        .map(|airport| Json(AirportMarker::from(airport)))
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn list_regions(State(state): State<Arc<AppState>>) -> Json<Vec<AirspaceRegion>> {
    Json(state.reference().list_regions().to_vec())
}

#[derive(Deserialize)]
pub struct PointCheckQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize)]
pub struct PointCheckResponse {
    pub inside_region: bool,
    pub regions: Vec<String>,
}

/// Check which airspace regions contain a point.
pub async fn check_point(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PointCheckQuery>,
) -> Json<PointCheckResponse> {
    let regions: Vec<String> = state
        .reference()
        .regions_containing(query.lat, query.lon)
        .into_iter()
        .map(|region| region.name.clone())
        .collect();

    Json(PointCheckResponse {
        inside_region: !regions.is_empty(),
        regions,
    })
}
