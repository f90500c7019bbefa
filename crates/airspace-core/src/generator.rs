//! Synthetic flight-state generator.
//!
//! A batch is a pure function of the reference data, the [`GeneratorConfig`]
//! and the reference instant, so the same inputs always reproduce the same
//! records. Attributes are drawn column by column from a single seeded
//! stream, then routes are synthesized in record order from the same stream.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Airline, FlightRecord, FlightStatus};
use crate::reference::ReferenceData;
use crate::routing::synthesize;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_FLIGHT_COUNT: usize = 80;
pub const DEFAULT_ID_PREFIX: &str = "EA";

/// Upper bound (exclusive) of the "minutes ago" offset.
pub const MAX_MINUTES_AGO: u32 = 180;
/// Upper bound (exclusive) of the estimated delay.
pub const MAX_DELAY_MIN: u32 = 60;

const CONGESTION_ALPHA: f64 = 2.0;
const CONGESTION_BETA: f64 = 5.0;
const EMISSIONS_MIN: f64 = 50.0;
const EMISSIONS_MAX: f64 = 300.0;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("cannot generate {count} flights without any airports")]
    NoAirports { count: usize },
    #[error("invalid bounding box: lat [{lat_min}, {lat_max}), lon [{lon_min}, {lon_max})")]
    InvalidBounds {
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    },
    #[error("congestion distribution rejected its parameters: {0}")]
    Distribution(#[from] rand_distr::BetaError),
}

/// Area in which marker positions are scattered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    fn is_valid(&self) -> bool {
        self.lat_min < self.lat_max && self.lon_min < self.lon_max
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            lat_min: -7.0,
            lat_max: 10.0,
            lon_min: 29.0,
            lon_max: 43.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub bounds: BoundingBox,
    pub id_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_FLIGHT_COUNT,
            seed: DEFAULT_SEED,
            bounds: BoundingBox::default(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            ..Self::default()
        }
    }
}

/// Generates batches of synthetic flights against a reference store.
pub struct FlightGenerator<'a> {
    reference: &'a ReferenceData,
    config: GeneratorConfig,
}

impl<'a> FlightGenerator<'a> {
    pub fn new(reference: &'a ReferenceData, config: GeneratorConfig) -> Self {
        Self { reference, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a batch stamped relative to the current time.
    pub fn generate(&self) -> Result<Vec<FlightRecord>, GeneratorError> {
        self.generate_at(Utc::now())
    }

    /// Generate a batch with timestamps relative to `now`.
    pub fn generate_at(&self, now: DateTime<Utc>) -> Result<Vec<FlightRecord>, GeneratorError> {
        let count = self.config.count;
        if count == 0 {
            return Ok(Vec::new());
        }

        let bounds = self.config.bounds;
        if !bounds.is_valid() {
            return Err(GeneratorError::InvalidBounds {
                lat_min: bounds.lat_min,
                lat_max: bounds.lat_max,
                lon_min: bounds.lon_min,
                lon_max: bounds.lon_max,
            });
        }

        let codes = self.reference.airport_codes();
        if codes.is_empty() {
            return Err(GeneratorError::NoAirports { count });
        }

        let congestion = Beta::new(CONGESTION_ALPHA, CONGESTION_BETA)?;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let lats = draw(&mut rng, count, |rng| {
            rng.random_range(bounds.lat_min..bounds.lat_max)
        });
        let lons = draw(&mut rng, count, |rng| {
            rng.random_range(bounds.lon_min..bounds.lon_max)
        });
        let statuses = draw(&mut rng, count, |rng| {
            FlightStatus::from_unit(rng.random::<f64>())
        });
        let congestions = draw(&mut rng, count, |rng| congestion.sample(rng));
        let airlines = draw(&mut rng, count, |rng| {
            Airline::ALL[rng.random_range(0..Airline::ALL.len())]
        });
        let minutes_ago = draw(&mut rng, count, |rng| rng.random_range(0..MAX_MINUTES_AGO));
        let origins = draw(&mut rng, count, |rng| codes[rng.random_range(0..codes.len())]);
        let destinations = draw(&mut rng, count, |rng| codes[rng.random_range(0..codes.len())]);
        let delays = draw(&mut rng, count, |rng| rng.random_range(0..MAX_DELAY_MIN));
        let emissions = draw(&mut rng, count, |rng| {
            round_tenth(rng.random_range(EMISSIONS_MIN..EMISSIONS_MAX))
        });

        let flights: Vec<FlightRecord> = (0..count)
            .map(|i| {
                let origin = origins[i];
                let destination = destinations[i];
                let route = synthesize(
                    self.reference.find_airport(origin),
                    self.reference.find_airport(destination),
                    statuses[i],
                    &mut rng,
                );

                FlightRecord {
                    flight_id: flight_id(&self.config.id_prefix, i + 1),
                    lat: lats[i],
                    lon: lons[i],
                    status: statuses[i],
                    congestion: congestions[i],
                    airline: airlines[i],
                    minutes_ago: minutes_ago[i],
                    timestamp: now - Duration::minutes(i64::from(minutes_ago[i])),
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    estimated_delay_min: delays[i],
                    emissions_saved: emissions[i],
                    route,
                }
            })
            .collect();

        tracing::debug!(
            count = flights.len(),
            seed = self.config.seed,
            "generated synthetic flight batch"
        );

        Ok(flights)
    }
}

/// `<prefix><index:03>`, e.g. `EA007`.
pub fn flight_id(prefix: &str, index: usize) -> String {
    format!("{prefix}{index:03}")
}

fn draw<T, R: Rng>(rng: &mut R, count: usize, mut sample: impl FnMut(&mut R) -> T) -> Vec<T> {
    (0..count).map(|_| sample(rng)).collect()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
