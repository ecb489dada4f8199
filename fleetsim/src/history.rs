//! Fabricated performance history.
//!
//! 100 evenly spaced points ending at the current instant, spanning
//! the requested window. The series models the whole fleet, so the
//! base hashrate band sits near twelve machines' worth of TH/s.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::metrics::USD_PER_TH_HOUR;
use crate::rng::SeededRng;

const HISTORY_SEED: u64 = 44444;

pub const HISTORY_POINTS: usize = 100;
pub const DEFAULT_WINDOW_HOURS: u32 = 24;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct HistoryPoint {
    /// Epoch milliseconds.
    pub timestamp_ms: i64,
    /// Fleet hashrate, TH/s.
    pub hashrate: f64,
    /// Fleet power draw, watts.
    pub power_w: f64,
    pub temperature_c: f64,
    /// USD earned per hour at this hashrate.
    pub earnings_usd: f64,
    pub efficiency_w_per_th: f64,
}

/// Fabricate `HISTORY_POINTS` points covering the trailing `hours`.
pub fn performance_history(hours: u32, now_ms: i64) -> Vec<HistoryPoint> {
    let mut rng = SeededRng::new(HISTORY_SEED);
    let interval_ms = hours as f64 * 3_600_000.0 / HISTORY_POINTS as f64;

    (0..HISTORY_POINTS)
        .map(|i| {
            let timestamp_ms =
                now_ms - (((HISTORY_POINTS - 1 - i) as f64) * interval_ms) as i64;
            let base = rng.between(1_600.0, 1_800.0);
            let hashrate = base * rng.between(0.95, 1.05);
            let power_w = hashrate * rng.between(22.0, 26.0);
            HistoryPoint {
                timestamp_ms,
                hashrate,
                power_w,
                temperature_c: rng.between(72.0, 82.0),
                earnings_usd: hashrate * USD_PER_TH_HOUR,
                efficiency_w_per_th: power_w / hashrate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const NOW_MS: i64 = 1_700_000_000_000;

    #[test_case(24 ; "default window")]
    #[test_case(1 ; "one hour")]
    #[test_case(168 ; "one week")]
    fn should_span_the_requested_window(hours: u32) {
        let history = performance_history(hours, NOW_MS);
        assert_eq!(history.len(), HISTORY_POINTS);
        assert_eq!(history.last().unwrap().timestamp_ms, NOW_MS);

        let window_ms = hours as i64 * 3_600_000;
        let first = history.first().unwrap().timestamp_ms;
        // First point sits 99 intervals back.
        let expected = NOW_MS - window_ms / HISTORY_POINTS as i64 * 99;
        assert!((first - expected).abs() <= HISTORY_POINTS as i64);
    }

    #[test]
    fn should_space_points_evenly_and_in_order() {
        let history = performance_history(24, NOW_MS);
        let deltas: Vec<i64> = history
            .windows(2)
            .map(|p| p[1].timestamp_ms - p[0].timestamp_ms)
            .collect();
        assert!(deltas.iter().all(|d| *d > 0));
        let min = deltas.iter().min().unwrap();
        let max = deltas.iter().max().unwrap();
        assert!(max - min <= 1);
    }

    #[test]
    fn should_satisfy_the_efficiency_identity_per_point() {
        for point in performance_history(24, NOW_MS) {
            assert!((point.efficiency_w_per_th - point.power_w / point.hashrate).abs() < 1e-9);
            assert!((point.earnings_usd - point.hashrate * 0.0025).abs() < 1e-9);
        }
    }

    #[test]
    fn should_reproduce_the_series_for_a_fixed_clock() {
        assert_eq!(performance_history(24, NOW_MS), performance_history(24, NOW_MS));
    }
}
