//! Airspace CLI - terminal tools for the airspace dashboard.
//!
//! - flight_snapshot: generate one batch, filter it, print the result

pub mod tiles;

pub use tiles::{format_flight_row, format_summary_tiles};
