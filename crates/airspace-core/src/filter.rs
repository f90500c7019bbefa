//! Status/airline/time-window filtering and dashboard summary tiles.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::MAX_MINUTES_AGO;
use crate::models::{Airline, FlightRecord, FlightStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid time window [{lo}, {hi}]: expected lo <= hi <= {max}", max = MAX_MINUTES_AGO)]
    InvalidTimeWindow { lo: u32, hi: u32 },
}

/// Inclusive window of "minutes ago", e.g. `[0, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    lo: u32,
    hi: u32,
}

impl TimeWindow {
    pub fn new(lo: u32, hi: u32) -> Result<Self, FilterError> {
        if lo > hi || hi > MAX_MINUTES_AGO {
            return Err(FilterError::InvalidTimeWindow { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> u32 {
        self.lo
    }

    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// Inclusive `[earliest, latest]` instants relative to `now`.
    pub fn bounds(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            now - Duration::minutes(i64::from(self.hi)),
            now - Duration::minutes(i64::from(self.lo)),
        )
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            lo: 0,
            hi: MAX_MINUTES_AGO,
        }
    }
}

/// Single-value selections, combined conjunctively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlightFilter {
    pub status: FlightStatus,
    pub airline: Airline,
    pub window: TimeWindow,
}

impl FlightFilter {
    pub fn new(status: FlightStatus, airline: Airline, window: TimeWindow) -> Self {
        Self {
            status,
            airline,
            window,
        }
    }

    pub fn matches(&self, flight: &FlightRecord, now: DateTime<Utc>) -> bool {
        let (earliest, latest) = self.window.bounds(now);
        flight.status == self.status
            && flight.airline == self.airline
            && flight.timestamp >= earliest
            && flight.timestamp <= latest
    }
}

/// Aggregates shown above the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub avg_delay_min: f64,
    pub total_emissions_saved: f64,
    pub avg_congestion: f64,
}

impl Summary {
    pub fn from_flights(flights: &[FlightRecord]) -> Self {
        if flights.is_empty() {
            return Self::default();
        }

        let count = flights.len();
        let n = count as f64;
        let total_delay: f64 = flights.iter().map(|f| f64::from(f.estimated_delay_min)).sum();
        let total_emissions_saved: f64 = flights.iter().map(|f| f.emissions_saved).sum();
        let total_congestion: f64 = flights.iter().map(|f| f.congestion).sum();

        Self {
            count,
            avg_delay_min: total_delay / n,
            total_emissions_saved,
            avg_congestion: total_congestion / n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredBatch {
    pub flights: Vec<FlightRecord>,
    pub summary: Summary,
}

/// Keep the flights matching `filter` and summarize them.
///
/// Flights without a usable congestion value are dropped as well.
pub fn apply(batch: &[FlightRecord], filter: &FlightFilter, now: DateTime<Utc>) -> FilteredBatch {
    let flights: Vec<FlightRecord> = batch
        .iter()
        .filter(|flight| filter.matches(flight, now))
        .filter(|flight| flight.congestion.is_finite())
        .cloned()
        .collect();

    let summary = Summary::from_flights(&flights);
    FilteredBatch { flights, summary }
}
