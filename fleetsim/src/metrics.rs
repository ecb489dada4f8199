//! Fleet-level aggregation.
//!
//! Pure folds over a snapshot collection. Averages are taken over the
//! online subset only; an all-down fleet yields zeros rather than a
//! division error, because a dashboard tile must never crash.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::telemetry::MinerTelemetry;

/// Placeholder profitability: USD per TH/s per hour. A deliberately
/// simplistic linear model, not a market-priced calculation.
pub(crate) const USD_PER_TH_HOUR: f64 = 0.0025;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct FleetSummary {
    pub total_miners: usize,
    pub online_miners: usize,
    /// Sum over online machines, TH/s.
    pub total_hashrate: f64,
    /// Sum over online machines, watts.
    pub total_power_w: f64,
    /// Mean chip temperature over online machines; 0 if none online.
    pub average_temperature_c: f64,
    /// Mean watts per TH/s over the online fleet; 0 if none online.
    pub average_efficiency_w_per_th: f64,
    /// Linear extrapolation over 24 hours, USD.
    pub estimated_daily_earnings_usd: f64,
    /// Online machines as a percentage of the roster.
    pub uptime_pct: f64,
}

/// Fold a snapshot collection into a fleet summary.
pub fn summarize(snapshots: &[MinerTelemetry]) -> FleetSummary {
    let online: Vec<&MinerTelemetry> = snapshots.iter().filter(|m| m.is_online()).collect();

    let total_hashrate: f64 = online.iter().map(|m| m.hashrate).sum();
    let total_power_w: f64 = online.iter().map(|m| m.power_w).sum();

    let average_temperature_c = if online.is_empty() {
        0.0
    } else {
        online.iter().map(|m| m.temperatures.chip_c).sum::<f64>() / online.len() as f64
    };
    let average_efficiency_w_per_th = if total_hashrate > 0.0 {
        total_power_w / total_hashrate
    } else {
        0.0
    };
    let uptime_pct = if snapshots.is_empty() {
        0.0
    } else {
        online.len() as f64 / snapshots.len() as f64 * 100.0
    };

    FleetSummary {
        total_miners: snapshots.len(),
        online_miners: online.len(),
        total_hashrate,
        total_power_w,
        average_temperature_c,
        average_efficiency_w_per_th,
        estimated_daily_earnings_usd: total_hashrate * USD_PER_TH_HOUR * 24.0,
        uptime_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FleetConfig;
    use crate::telemetry::{MinerStatus, synthesize};

    const NOW_MS: i64 = 1_700_000_000_000;

    fn down(address: &str) -> MinerTelemetry {
        MinerTelemetry {
            id: "miner-0".to_string(),
            address: address.to_string(),
            captured_at_ms: NOW_MS,
            status: MinerStatus::Offline,
            hashrate: 0.0,
            temperatures: crate::telemetry::Temperatures {
                chip_c: 0.0,
                board_c: 0.0,
                water_inlet_c: None,
                water_outlet_c: None,
            },
            power_w: 0.0,
            uptime_secs: 0.0,
            fan_speed_rpm: 0.0,
            accepted_shares: 0,
            rejected_shares: 0,
            efficiency_w_per_th: 0.0,
        }
    }

    #[test]
    fn should_count_online_machines_and_uptime() {
        let config = FleetConfig::default();
        let fleet = synthesize(&config, NOW_MS);
        let summary = summarize(&fleet);

        // Default seed: machines 6 and 11 roll offline.
        assert_eq!(summary.total_miners, 12);
        assert_eq!(summary.online_miners, 10);
        assert!((summary.uptime_pct - 10.0 / 12.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn should_sum_only_the_online_fleet() {
        let config = FleetConfig::default();
        let fleet = synthesize(&config, NOW_MS);
        let summary = summarize(&fleet);

        let expected: f64 = fleet
            .iter()
            .filter(|m| m.is_online())
            .map(|m| m.hashrate)
            .sum();
        assert_eq!(summary.total_hashrate, expected);
        assert!((summary.average_efficiency_w_per_th
            - summary.total_power_w / summary.total_hashrate)
            .abs()
            < 1e-9);
        assert!((summary.estimated_daily_earnings_usd
            - summary.total_hashrate * 0.0025 * 24.0)
            .abs()
            < 1e-9);
    }

    #[test]
    fn should_yield_zero_averages_for_an_all_down_fleet() {
        let fleet = vec![down("10.0.0.1"), down("10.0.0.2")];
        let summary = summarize(&fleet);
        assert_eq!(summary.average_temperature_c, 0.0);
        assert_eq!(summary.average_efficiency_w_per_th, 0.0);
        assert_eq!(summary.total_hashrate, 0.0);
        assert_eq!(summary.uptime_pct, 0.0);
    }

    #[test]
    fn should_yield_zeros_for_an_empty_roster() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_miners, 0);
        assert_eq!(summary.uptime_pct, 0.0);
        assert_eq!(summary.estimated_daily_earnings_usd, 0.0);
    }
}
