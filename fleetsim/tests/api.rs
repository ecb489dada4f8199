//! API surface tests driven through the router without a socket.

use std::sync::Arc;

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fleetsim::FleetSimulator;
use fleetsim::alerts::Alert;
use fleetsim::api;
use fleetsim::history::HistoryPoint;
use fleetsim::metrics::FleetSummary;
use fleetsim::telemetry::MinerTelemetry;
use fleetsim::telemetry::details::MinerDetails;

fn app() -> axum::Router {
    api::router(Arc::new(FleetSimulator::default()))
}

async fn get_ok(uri: &str) -> Vec<u8> {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn health_responds() {
    let body = get_ok("/api/v0/health").await;
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn fleet_covers_the_default_roster() {
    let body = get_ok("/api/v0/fleet").await;
    let fleet: Vec<MinerTelemetry> = serde_json::from_slice(&body).unwrap();
    assert_eq!(fleet.len(), 12);
    assert_eq!(fleet[0].address, "192.168.1.100");
}

#[tokio::test]
async fn summary_matches_the_fleet() {
    let body = get_ok("/api/v0/fleet/summary").await;
    let summary: FleetSummary = serde_json::from_slice(&body).unwrap();
    assert_eq!(summary.total_miners, 12);
    assert!(summary.online_miners <= summary.total_miners);
}

#[tokio::test]
async fn miner_detail_roundtrips() {
    let body = get_ok("/api/v0/miners/192.168.1.100").await;
    let details: MinerDetails = serde_json::from_slice(&body).unwrap();
    assert_eq!(details.telemetry.address, "192.168.1.100");
    assert_eq!(details.chips.len(), 126);
    assert_eq!(details.chains.len(), 3);
}

#[tokio::test]
async fn unknown_miner_is_a_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v0/miners/10.9.9.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn alerts_come_newest_first() {
    let body = get_ok("/api/v0/alerts").await;
    let alerts: Vec<Alert> = serde_json::from_slice(&body).unwrap();
    for pair in alerts.windows(2) {
        assert!(pair[0].timestamp_ms >= pair[1].timestamp_ms);
    }
}

#[tokio::test]
async fn history_honors_the_hours_query() {
    let body = get_ok("/api/v0/history?hours=6").await;
    let history: Vec<HistoryPoint> = serde_json::from_slice(&body).unwrap();
    assert_eq!(history.len(), 100);
    let span = history.last().unwrap().timestamp_ms - history[0].timestamp_ms;
    // 99 of 100 intervals over a 6 hour window.
    assert!((span - 6 * 3_600_000 * 99 / 100).abs() < 1_000);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let body = get_ok("/api/v0/openapi.json").await;
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/api/v0/fleet"].is_object());
}
