//! Alert derivation.
//!
//! Alerts are derived from a snapshot scan on every refresh, never
//! stored: generate, optionally acknowledge in a view-local copy,
//! discard on the next pass. A machine can emit up to three alerts
//! (hot chip, offline, low hashrate), each backdated by a drawn offset
//! so the feed reads like accumulated history.

use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

use crate::config::FleetConfig;
use crate::rng::SeededRng;
use crate::telemetry::{MinerStatus, MinerTelemetry, synthesize_with};

/// Chip temperature above this trips an alert.
pub const HOT_CHIP_C: f64 = 80.0;
/// Chip temperature above this escalates the alert to critical.
pub const CRITICAL_CHIP_C: f64 = 85.0;
/// A hashing machine below this is flagged as underperforming.
pub const LOW_HASHRATE_TH: f64 = 130.0;
/// Nominal per-machine hashrate reported as the expectation.
pub const NOMINAL_HASHRATE_TH: f64 = 140.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub address: Option<String>,
    /// Epoch milliseconds.
    pub timestamp_ms: i64,
    /// Seeded cosmetically at generation; mutable only in a consumer's
    /// transient copy.
    pub acknowledged: bool,
    pub observed_value: Option<f64>,
    pub threshold: Option<f64>,
}

/// Fabricate the alert feed for the configured fleet.
///
/// Runs a fleet pass and keeps drawing from the same stream for the
/// backdates and acknowledgment rolls, so the feed is reproducible for
/// a fixed (roster, seed, now).
pub fn fleet_alerts(config: &FleetConfig, now_ms: i64) -> Vec<Alert> {
    let mut rng = SeededRng::new(config.seed);
    let fleet = synthesize_with(&mut rng, config, now_ms);
    derive_alerts(&fleet, &mut rng, now_ms)
}

/// Scan a snapshot collection and emit alerts for every tripped
/// predicate, sorted descending by timestamp.
pub fn derive_alerts(
    snapshots: &[MinerTelemetry],
    rng: &mut SeededRng,
    now_ms: i64,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for (index, miner) in snapshots.iter().enumerate() {
        if miner.temperatures.chip_c > HOT_CHIP_C {
            let backdate = rng.between(0.0, 3_600_000.0);
            alerts.push(Alert {
                id: format!("alert-temp-{index}"),
                severity: if miner.temperatures.chip_c > CRITICAL_CHIP_C {
                    AlertSeverity::Critical
                } else {
                    AlertSeverity::Warning
                },
                message: format!("High temperature detected on {}", miner.address),
                address: Some(miner.address.clone()),
                timestamp_ms: now_ms - backdate as i64,
                acknowledged: rng.next() > 0.3,
                observed_value: Some(miner.temperatures.chip_c),
                threshold: Some(HOT_CHIP_C),
            });
        }

        if miner.status == MinerStatus::Offline {
            let backdate = rng.between(0.0, 1_800_000.0);
            alerts.push(Alert {
                id: format!("alert-offline-{index}"),
                severity: AlertSeverity::Critical,
                message: format!("Miner {} is offline", miner.address),
                address: Some(miner.address.clone()),
                timestamp_ms: now_ms - backdate as i64,
                acknowledged: false,
                observed_value: None,
                threshold: None,
            });
        }

        if miner.hashrate > 0.0 && miner.hashrate < LOW_HASHRATE_TH {
            let backdate = rng.between(0.0, 7_200_000.0);
            alerts.push(Alert {
                id: format!("alert-hashrate-{index}"),
                severity: AlertSeverity::Warning,
                message: format!("Low hashrate detected on {}", miner.address),
                address: Some(miner.address.clone()),
                timestamp_ms: now_ms - backdate as i64,
                acknowledged: rng.next() > 0.5,
                observed_value: Some(miner.hashrate),
                threshold: Some(NOMINAL_HASHRATE_TH),
            });
        }
    }

    alerts.sort_by_key(|a| std::cmp::Reverse(a.timestamp_ms));
    alerts
}
