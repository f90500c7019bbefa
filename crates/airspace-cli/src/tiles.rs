//! Plain-text rendering of the dashboard summary tiles and flight rows.

use airspace_core::{FlightRecord, Summary};

/// The four summary tiles, one per line.
pub fn format_summary_tiles(summary: &Summary) -> String {
    [
        format!("Flights Displayed:     {}", summary.count),
        format!("Avg Delay (min):       {:.1}", summary.avg_delay_min),
        format!("Total Emissions Saved: {:.1} tons", summary.total_emissions_saved),
        format!("Avg Congestion:        {:.2}", summary.avg_congestion),
    ]
    .join("\n")
}

pub fn format_flight_row(flight: &FlightRecord) -> String {
    format!(
        "{:<7} {:<8} {:<18} {}->{} delay {:>2}m congestion {:.2} route {} pts",
        flight.flight_id,
        flight.status,
        flight.airline,
        flight.origin,
        flight.destination,
        flight.estimated_delay_min,
        flight.congestion,
        flight.route.len(),
    )
}
