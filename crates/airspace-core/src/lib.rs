//! Synthetic regional air-traffic state for the airspace dashboard.
//!
//! Reference airports and FIR polygons, a seeded flight-state generator,
//! route synthesis and the status/airline/time-window filter.

pub mod filter;
pub mod generator;
pub mod models;
pub mod reference;
pub mod routing;
pub mod spatial;

pub use filter::{apply as apply_filter, FilterError, FilteredBatch, FlightFilter, Summary, TimeWindow};
pub use generator::{BoundingBox, FlightGenerator, GeneratorConfig, GeneratorError};
pub use models::{
    Airline, Airport, AirspaceRegion, BorderStyle, FlightDetail, FlightRecord, FlightStatus,
    RoutePoint, RouteStyle,
};
pub use reference::ReferenceData;
pub use routing::synthesize as synthesize_route;
pub use spatial::{haversine_distance, route_length_m};
