//! Properties of generated and filtered batches.

use airspace_core::{
    apply_filter, Airline, FlightFilter, FlightGenerator, FlightStatus, GeneratorConfig,
    ReferenceData, RoutePoint, TimeWindow,
};
use chrono::{DateTime, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 15, 0).unwrap()
}

#[test]
fn same_seed_reproduces_batch() {
    let reference = ReferenceData::builtin();
    let first = FlightGenerator::new(&reference, GeneratorConfig::new(80, 42))
        .generate_at(now())
        .unwrap();
    let second = FlightGenerator::new(&reference, GeneratorConfig::new(80, 42))
        .generate_at(now())
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn batch_has_requested_cardinality() {
    let reference = ReferenceData::builtin();
    for count in [0, 1, 5, 80, 300] {
        let flights = FlightGenerator::new(&reference, GeneratorConfig::new(count, 9))
            .generate_at(now())
            .unwrap();
        assert_eq!(flights.len(), count);
    }
}

#[test]
fn routes_start_and_end_at_airports() {
    let reference = ReferenceData::builtin();
    let flights = FlightGenerator::new(&reference, GeneratorConfig::new(250, 42))
        .generate_at(now())
        .unwrap();

    for flight in &flights {
        let origin = reference.find_airport(&flight.origin).unwrap();
        let destination = reference.find_airport(&flight.destination).unwrap();
        assert_eq!(flight.route.first(), Some(&origin.position()));
        assert_eq!(flight.route.last(), Some(&destination.position()));
    }
}

#[test]
fn rerouted_flights_have_three_point_routes() {
    let reference = ReferenceData::builtin();
    let flights = FlightGenerator::new(&reference, GeneratorConfig::new(250, 42))
        .generate_at(now())
        .unwrap();

    assert!(flights.iter().any(|f| f.is_rerouted()));
    for flight in &flights {
        let expected = if flight.status == FlightStatus::Rerouted { 3 } else { 2 };
        assert_eq!(flight.route.len(), expected, "{}", flight.flight_id);
    }
}

#[test]
fn congestion_stays_in_unit_interval() {
    let reference = ReferenceData::builtin();
    let flights = FlightGenerator::new(&reference, GeneratorConfig::new(500, 5))
        .generate_at(now())
        .unwrap();

    assert!(flights.iter().all(|f| (0.0..=1.0).contains(&f.congestion)));
    let mean = flights.iter().map(|f| f.congestion).sum::<f64>() / flights.len() as f64;
    // Beta(2,5) has mean 2/7
    assert!((mean - 2.0 / 7.0).abs() < 0.03, "mean congestion {mean}");
}

#[test]
fn unknown_airports_get_sentinel_route() {
    let reference = ReferenceData::builtin();
    let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(42);
    let route = airspace_core::synthesize_route(
        reference.find_airport("NBO"),
        reference.find_airport("LHR"),
        FlightStatus::Rerouted,
        &mut rng,
    );
    assert_eq!(route, vec![RoutePoint::new(0.0, 0.0), RoutePoint::new(0.0, 0.0)]);
}

#[test]
fn on_time_air_kenya_scenario() {
    let reference = ReferenceData::builtin();
    let batch = FlightGenerator::new(&reference, GeneratorConfig::new(5, 42))
        .generate_at(now())
        .unwrap();
    let filter = FlightFilter::new(
        FlightStatus::OnTime,
        Airline::AirKenya,
        TimeWindow::new(0, 180).unwrap(),
    );

    let result = apply_filter(&batch, &filter, now());
    assert!(result
        .flights
        .iter()
        .all(|f| f.status == FlightStatus::OnTime && f.airline == Airline::AirKenya));
    assert_eq!(result.summary.count, result.flights.len());

    let expected = batch
        .iter()
        .filter(|f| f.status == FlightStatus::OnTime && f.airline == Airline::AirKenya)
        .count();
    assert_eq!(result.flights.len(), expected);
}

#[test]
fn filter_never_leaks_non_matching_records() {
    let reference = ReferenceData::builtin();
    let batch = FlightGenerator::new(&reference, GeneratorConfig::new(300, 77))
        .generate_at(now())
        .unwrap();

    for status in FlightStatus::ALL {
        for airline in Airline::ALL {
            let window = TimeWindow::new(20, 90).unwrap();
            let result = apply_filter(&batch, &FlightFilter::new(status, airline, window), now());
            for flight in &result.flights {
                assert_eq!(flight.status, status);
                assert_eq!(flight.airline, airline);
                assert!(flight.minutes_ago >= 20 && flight.minutes_ago <= 90);
            }
        }
    }
}
