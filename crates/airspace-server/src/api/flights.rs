//! Flight endpoints: filter changes and click-to-detail.

use airspace_core::{
    Airline, FlightDetail, FlightFilter, FlightRecord, FlightStatus, RouteStyle, Summary,
    TimeWindow,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::state::{AppState, SelectionMiss};

pub const SELECTION_PROMPT: &str =
    "Click on a flight marker on the map to see detailed flight information.";

type ApiError = (StatusCode, Json<serde_json::Value>);

/// Dropdown and slider values; anything missing falls back to the default view.
#[derive(Debug, Deserialize)]
pub struct FlightsQuery {
    pub status: Option<FlightStatus>,
    pub airline: Option<Airline>,
    /// Lower bound of the "minutes ago" slider
    pub from: Option<u32>,
    /// Upper bound of the "minutes ago" slider
    pub to: Option<u32>,
}

impl FlightsQuery {
    fn to_filter(&self) -> Result<FlightFilter, ApiError> {
        let defaults = TimeWindow::default();
        let window = TimeWindow::new(
            self.from.unwrap_or(defaults.lo()),
            self.to.unwrap_or(defaults.hi()),
        )
        .map_err(|err| (StatusCode::BAD_REQUEST, Json(json!({ "error": err.to_string() }))))?;

        Ok(FlightFilter::new(
            self.status.unwrap_or_default(),
            self.airline.unwrap_or_default(),
            window,
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct RenderedFlight {
    #[serde(flatten)]
    pub flight: FlightRecord,
    pub route_style: RouteStyle,
}

#[derive(Debug, Serialize)]
pub struct FlightsResponse {
    /// Pass back with map clicks to resolve this exact batch
    pub token: String,
    pub generated_at: DateTime<Utc>,
    pub filter: FlightFilter,
    pub flights: Vec<RenderedFlight>,
    pub summary: Summary,
}

pub async fn list_flights(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FlightsQuery>,
) -> Result<Json<FlightsResponse>, ApiError> {
    let filter = query.to_filter()?;
    let render = state.render(&filter, Utc::now()).map_err(|err| {
        tracing::error!("Failed to generate flight batch: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to generate flight batch" })),
        )
    })?;

    let flights = render
        .filtered
        .flights
        .into_iter()
        .map(|flight| RenderedFlight {
            route_style: RouteStyle::for_status(flight.status),
            flight,
        })
        .collect();

    Ok(Json(FlightsResponse {
        token: render.token,
        generated_at: render.generated_at,
        filter,
        flights,
        summary: render.filtered.summary,
    }))
}

pub async fn get_flight_detail(
    State(state): State<Arc<AppState>>,
    Path((token, flight_id)): Path<(String, String)>,
) -> Result<Json<FlightDetail>, ApiError> {
    match state.select_flight(&token, &flight_id) {
        Ok(flight) => Ok(Json(FlightDetail::from(&flight))),
        Err(miss) => {
            let error = match miss {
                SelectionMiss::UnknownRender => "Render session not found or expired",
                SelectionMiss::UnknownFlight => "Flight not found in rendered batch",
            };
            tracing::info!(token = %token, flight_id = %flight_id, "{}", error);
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({ "error": error, "prompt": SELECTION_PROMPT })),
            ))
        }
    }
}
