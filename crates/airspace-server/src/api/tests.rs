use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn setup_app() -> (axum::Router, Arc<AppState>) {
    let mut config = Config::from_env();
    config.seed = 42;
    config.flight_count = 120;
    config.id_prefix = "EA".to_string();
    config.session_max_entries = 16;
    config.session_ttl_s = 600;

    let state = Arc::new(AppState::new(config));
    let app = api::routes().with_state(state.clone());
    (app, state)
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

#[tokio::test]
async fn filter_change_returns_matching_flights_and_summary() {
    let (app, state) = setup_app();

    let response = get(&app, "/v1/flights?status=delayed&airline=RwandAir&from=0&to=180").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;

    let flights = body["flights"].as_array().expect("flights array");
    for flight in flights {
        assert_eq!(flight["status"], "delayed");
        assert_eq!(flight["airline"], "RwandAir");
        assert_eq!(flight["route"].as_array().unwrap().len(), 2);
        assert_eq!(flight["route_style"]["color"], "gray");
    }
    assert_eq!(body["summary"]["count"].as_u64(), Some(flights.len() as u64));
    assert!(body["token"].as_str().is_some());
    assert_eq!(state.session_count(), 1);
}

#[tokio::test]
async fn missing_parameters_use_default_view() {
    let (app, _state) = setup_app();

    let body = read_json(get(&app, "/v1/flights").await).await;
    assert_eq!(body["filter"]["status"], "on-time");
    assert_eq!(body["filter"]["airline"], "AirKenya");
    assert_eq!(body["filter"]["window"]["lo"], 0);
    assert_eq!(body["filter"]["window"]["hi"], 180);
}

#[tokio::test]
async fn rerouted_flights_are_styled_as_reroutes() {
    let (app, _state) = setup_app();

    let uri = "/v1/flights?status=rerouted&airline=Ethiopian%20Airlines";
    let body = read_json(get(&app, uri).await).await;
    for flight in body["flights"].as_array().unwrap() {
        assert_eq!(flight["route"].as_array().unwrap().len(), 3);
        assert_eq!(flight["route_style"]["color"], "blue");
        assert_eq!(flight["route_style"]["width"], 2);
    }
}

#[tokio::test]
async fn inverted_time_window_is_rejected() {
    let (app, state) = setup_app();

    let response = get(&app, "/v1/flights?from=120&to=30").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.session_count(), 0);
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let (app, _state) = setup_app();

    let response = get(&app, "/v1/flights?status=cancelled").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn click_resolves_the_rendered_flight() {
    let (app, _state) = setup_app();

    // Widest view so at least one flight is rendered for some airline
    let mut rendered = None;
    for airline in ["AirKenya", "Ethiopian%20Airlines", "RwandAir", "Precision%20Air"] {
        let uri = format!("/v1/flights?status=on-time&airline={airline}");
        let body = read_json(get(&app, &uri).await).await;
        if let Some(flight) = body["flights"].as_array().and_then(|f| f.first()).cloned() {
            rendered = Some((body["token"].as_str().unwrap().to_string(), flight));
            break;
        }
    }
    let (token, flight) = rendered.expect("120 flights render at least one on-time flight");
    let flight_id = flight["flight_id"].as_str().unwrap();

    let response = get(&app, &format!("/v1/flights/{token}/{flight_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = read_json(response).await;
    assert_eq!(detail["flight_id"], flight["flight_id"]);
    assert_eq!(detail["origin"], flight["origin"]);
    assert_eq!(detail["destination"], flight["destination"]);
    assert_eq!(detail["estimated_delay_min"], flight["estimated_delay_min"]);
    assert_eq!(detail["is_rerouted"], false);
}

#[tokio::test]
async fn click_misses_return_prompt() {
    let (app, _state) = setup_app();

    let response = get(&app, "/v1/flights/not-a-token/EA001").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["prompt"], api::flights::SELECTION_PROMPT);

    let token = read_json(get(&app, "/v1/flights").await).await["token"]
        .as_str()
        .unwrap()
        .to_string();
    let response = get(&app, &format!("/v1/flights/{token}/EA999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reference_layers_are_served() {
    let (app, _state) = setup_app();

    let airports = read_json(get(&app, "/v1/airports").await).await;
    assert_eq!(airports.as_array().unwrap().len(), 18);
    assert_eq!(
        airports[0]["label"],
        "Entebbe International (EBB) - Entebbe, Uganda"
    );

    let response = get(&app, "/v1/airports/JRO").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["city"], "Kilimanjaro");
    assert_eq!(get(&app, "/v1/airports/jro").await.status(), StatusCode::NOT_FOUND);

    let regions = read_json(get(&app, "/v1/regions").await).await;
    assert_eq!(regions.as_array().unwrap().len(), 4);
    assert_eq!(regions[0]["name"], "Kenya FIR");

    let check = read_json(get(&app, "/v1/regions/check?lat=-4.0&lon=37.0").await).await;
    assert_eq!(check["inside_region"], true);
    assert_eq!(check["regions"][0], "Tanzania FIR");
}
