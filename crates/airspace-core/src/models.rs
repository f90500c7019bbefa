//! Core data models for the airspace dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::spatial::route_length_m;

/// A single (lat, lon) vertex of a route polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
}

impl RoutePoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Sentinel used when an endpoint airport cannot be resolved.
    pub const ORIGIN: RoutePoint = RoutePoint::new(0.0, 0.0);
}

/// An airport from the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl Airport {
    /// Hover text shown on the airport marker.
    pub fn label(&self) -> String {
        format!(
            "{} ({}) - {}, {}",
            self.name, self.iata, self.city, self.country
        )
    }

    pub fn position(&self) -> RoutePoint {
        RoutePoint::new(self.lat, self.lon)
    }
}

/// Outline drawn around an airspace region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    pub color: String,
    pub width: u32,
}

/// An illustrative airspace boundary (FIR or traffic zone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirspaceRegion {
    pub name: String,
    /// Polygon vertices as [lat, lon] pairs (closed ring - first == last)
    pub polygon: Vec<[f64; 2]>,
    pub fill_color: String,
    pub border: BorderStyle,
}

impl AirspaceRegion {
    /// Check if a point is inside this region's polygon.
    /// Uses ray casting algorithm.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let n = self.polygon.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let [yi, xi] = self.polygon[i];
            let [yj, xj] = self.polygon[j];

            if ((yi > lat) != (yj > lat)) && (lon < (xj - xi) * (lat - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// Returns list of validation errors (empty = valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // A closed triangle needs 4 vertices
        if self.polygon.len() < 4 {
            errors.push(format!(
                "Region '{}' must have at least 4 vertices (closed ring)",
                self.name
            ));
        }

        if let (Some(first), Some(last)) = (self.polygon.first(), self.polygon.last()) {
            if first != last {
                errors.push(format!(
                    "Region '{}' must be closed (first vertex must equal last)",
                    self.name
                ));
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightStatus {
    #[default]
    OnTime,
    Delayed,
    Rerouted,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 3] = [
        FlightStatus::OnTime,
        FlightStatus::Delayed,
        FlightStatus::Rerouted,
    ];

    /// Sampling weight of each status, same order as [`FlightStatus::ALL`].
    pub const WEIGHTS: [f64; 3] = [0.65, 0.25, 0.10];

    /// Map a uniform draw in [0, 1) onto the weighted status distribution.
    pub fn from_unit(u: f64) -> Self {
        let mut acc = 0.0;
        for (status, weight) in Self::ALL.iter().zip(Self::WEIGHTS) {
            acc += weight;
            if u < acc {
                return *status;
            }
        }
        // Float accumulation can leave a sliver below 1.0
        FlightStatus::Rerouted
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::OnTime => "on-time",
            FlightStatus::Delayed => "delayed",
            FlightStatus::Rerouted => "rerouted",
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for FlightStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown flight status '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Airline {
    #[default]
    #[serde(rename = "AirKenya")]
    AirKenya,
    #[serde(rename = "Ethiopian Airlines")]
    EthiopianAirlines,
    #[serde(rename = "RwandAir")]
    RwandAir,
    #[serde(rename = "Precision Air")]
    PrecisionAir,
}

impl Airline {
    pub const ALL: [Airline; 4] = [
        Airline::AirKenya,
        Airline::EthiopianAirlines,
        Airline::RwandAir,
        Airline::PrecisionAir,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Airline::AirKenya => "AirKenya",
            Airline::EthiopianAirlines => "Ethiopian Airlines",
            Airline::RwandAir => "RwandAir",
            Airline::PrecisionAir => "Precision Air",
        }
    }
}

impl std::fmt::Display for Airline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Airline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|airline| airline.as_str() == s)
            .ok_or_else(|| format!("unknown airline '{s}'"))
    }
}

/// One synthetic flight in a generated batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_id: String,
    /// Simulated marker position, not tied to the route
    pub lat: f64,
    pub lon: f64,
    pub status: FlightStatus,
    pub congestion: f64,
    pub airline: Airline,
    pub minutes_ago: u32,
    pub timestamp: DateTime<Utc>,
    pub origin: String,
    pub destination: String,
    pub estimated_delay_min: u32,
    pub emissions_saved: f64,
    pub route: Vec<RoutePoint>,
}

impl FlightRecord {
    pub fn is_rerouted(&self) -> bool {
        self.status == FlightStatus::Rerouted
    }
}

/// How a route polyline should be drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStyle {
    pub color: String,
    pub width: u32,
    pub opacity: f64,
}

impl RouteStyle {
    pub fn for_status(status: FlightStatus) -> Self {
        match status {
            FlightStatus::Rerouted => Self {
                color: "blue".to_string(),
                width: 2,
                opacity: 0.7,
            },
            FlightStatus::OnTime | FlightStatus::Delayed => Self {
                color: "gray".to_string(),
                width: 1,
                opacity: 0.4,
            },
        }
    }
}

/// Click-to-detail view of a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDetail {
    pub flight_id: String,
    pub status: FlightStatus,
    pub airline: Airline,
    pub origin: String,
    pub destination: String,
    pub estimated_delay_min: u32,
    pub emissions_saved: f64,
    pub congestion: f64,
    pub is_rerouted: bool,
    pub timestamp: String,
    pub route_length_km: f64,
    pub lat: f64,
    pub lon: f64,
}

impl From<&FlightRecord> for FlightDetail {
    fn from(record: &FlightRecord) -> Self {
        Self {
            flight_id: record.flight_id.clone(),
            status: record.status,
            airline: record.airline,
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            estimated_delay_min: record.estimated_delay_min,
            emissions_saved: record.emissions_saved,
            congestion: (record.congestion * 100.0).round() / 100.0,
            is_rerouted: record.is_rerouted(),
            timestamp: record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            route_length_km: route_length_m(&record.route) / 1000.0,
            lat: record.lat,
            lon: record.lon,
        }
    }
}
