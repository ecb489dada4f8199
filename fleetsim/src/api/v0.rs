//! API v0 endpoints.
//!
//! Version 0 signals an unstable API -- breaking changes are expected
//! while the simulator stands in for real device polling.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::server::SharedState;
use crate::alerts::Alert;
use crate::history::HistoryPoint;
use crate::metrics::FleetSummary;
use crate::pool::{EarningsEntry, PoolStats, ProfitabilityEntry, WorkerStatus};
use crate::telemetry::MinerTelemetry;
use crate::telemetry::details::MinerDetails;

/// Build the v0 API routes with OpenAPI metadata.
pub fn routes() -> OpenApiRouter<SharedState> {
    OpenApiRouter::new()
        .routes(routes!(health))
        .routes(routes!(get_fleet))
        .routes(routes!(get_summary))
        .routes(routes!(get_miner))
        .routes(routes!(get_pool))
        .routes(routes!(get_workers))
        .routes(routes!(get_alerts))
        .routes(routes!(get_profitability))
        .routes(routes!(get_earnings))
        .routes(routes!(get_history))
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = OK, description = "Server is running", body = String),
    ),
)]
async fn health() -> &'static str {
    "OK"
}

/// Return a fresh telemetry snapshot for every machine in the roster.
#[utoipa::path(
    get,
    path = "/fleet",
    tag = "fleet",
    responses(
        (status = OK, description = "Per-machine telemetry, roster order", body = Vec<MinerTelemetry>),
    ),
)]
async fn get_fleet(State(state): State<SharedState>) -> Json<Vec<MinerTelemetry>> {
    Json(state.fleet())
}

/// Return the fleet-level aggregate.
#[utoipa::path(
    get,
    path = "/fleet/summary",
    tag = "fleet",
    responses(
        (status = OK, description = "Fleet summary", body = FleetSummary),
    ),
)]
async fn get_summary(State(state): State<SharedState>) -> Json<FleetSummary> {
    Json(state.summary())
}

/// Return the detail view for one machine, or 404 for an address the
/// roster does not contain.
#[utoipa::path(
    get,
    path = "/miners/{address}",
    tag = "fleet",
    params(
        ("address" = String, Path, description = "Machine network address"),
    ),
    responses(
        (status = OK, description = "Miner details", body = MinerDetails),
        (status = NOT_FOUND, description = "Address not in the roster"),
    ),
)]
async fn get_miner(
    State(state): State<SharedState>,
    Path(address): Path<String>,
) -> Result<Json<MinerDetails>, StatusCode> {
    state
        .miner_details(&address)
        .map(Json)
        .map_err(|_| StatusCode::NOT_FOUND)
}

/// Return the pool's profitability report.
#[utoipa::path(
    get,
    path = "/pool",
    tag = "pool",
    responses(
        (status = OK, description = "Pool statistics", body = PoolStats),
    ),
)]
async fn get_pool(State(state): State<SharedState>) -> Json<PoolStats> {
    Json(state.pool_stats())
}

/// Return the pool-side status of every worker.
#[utoipa::path(
    get,
    path = "/workers",
    tag = "pool",
    responses(
        (status = OK, description = "Worker statuses", body = Vec<WorkerStatus>),
    ),
)]
async fn get_workers(State(state): State<SharedState>) -> Json<Vec<WorkerStatus>> {
    Json(state.workers())
}

/// Return the alert feed, most recent first.
#[utoipa::path(
    get,
    path = "/alerts",
    tag = "alerts",
    responses(
        (status = OK, description = "Alerts, newest first", body = Vec<Alert>),
    ),
)]
async fn get_alerts(State(state): State<SharedState>) -> Json<Vec<Alert>> {
    Json(state.alerts())
}

/// Return the merged-mining profitability table.
#[utoipa::path(
    get,
    path = "/profitability",
    tag = "pool",
    responses(
        (status = OK, description = "Per-coin profitability", body = Vec<ProfitabilityEntry>),
    ),
)]
async fn get_profitability(State(state): State<SharedState>) -> Json<Vec<ProfitabilityEntry>> {
    Json(state.profitability())
}

/// Return the per-coin earnings breakdown.
#[utoipa::path(
    get,
    path = "/earnings",
    tag = "pool",
    responses(
        (status = OK, description = "Earnings by coin", body = Vec<EarningsEntry>),
    ),
)]
async fn get_earnings(State(state): State<SharedState>) -> Json<Vec<EarningsEntry>> {
    Json(state.earnings())
}

#[derive(Deserialize, IntoParams)]
struct HistoryQuery {
    /// Window size in hours; defaults to 24.
    hours: Option<u32>,
}

/// Return the trailing performance series.
#[utoipa::path(
    get,
    path = "/history",
    tag = "fleet",
    params(HistoryQuery),
    responses(
        (status = OK, description = "100 evenly spaced points", body = Vec<HistoryPoint>),
    ),
)]
async fn get_history(
    State(state): State<SharedState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<HistoryPoint>> {
    Json(state.history(query.hours))
}
