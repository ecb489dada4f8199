//! Pool-side views: pool statistics, per-worker status, coin
//! profitability, and the earnings breakdown.
//!
//! These are parallel fabrications over notionally the same fleet, not
//! joined views -- each owns its seed and draws its own stream, so
//! nothing here is cross-consistent with the telemetry pass except the
//! earnings breakdown, which continues the fleet stream to learn the
//! total hashrate.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::FleetConfig;
use crate::metrics::{USD_PER_TH_HOUR, summarize};
use crate::rng::SeededRng;
use crate::telemetry::synthesize_with;

const POOL_SEED: u64 = 54321;
const WORKER_SEED: u64 = 67890;
const PROFITABILITY_SEED: u64 = 22222;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PoolStats {
    pub algorithm: String,
    /// Current USD per MH/s per day, as the pool reports it.
    pub usd_profitability: f64,
    pub btc_profitability: f64,
    pub max_usd: f64,
    pub max_btc: f64,
    pub percentile_usd: f64,
    pub percentile_btc: f64,
    /// Epoch seconds.
    pub data_timestamp: i64,
    pub server_timestamp: i64,
    pub server_id: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct WorkerEarnings {
    pub daily_usd: f64,
    pub weekly_usd: f64,
    pub monthly_usd: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct WorkerStatus {
    pub worker_id: String,
    pub address: String,
    pub connected: bool,
    /// TH/s as seen from the pool side; zero when disconnected.
    pub hashrate: f64,
    pub shares_accepted: u64,
    pub shares_rejected: u64,
    /// Epoch milliseconds of the last share or keepalive.
    pub last_seen_ms: i64,
    pub earnings: WorkerEarnings,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ProfitabilityEntry {
    pub coin: String,
    pub algorithm: String,
    /// USD per TH/s per day.
    pub profitability: f64,
    pub difficulty: f64,
    pub block_reward: f64,
    pub price_usd: f64,
    pub volume_24h_usd: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EarningsEntry {
    pub coin: String,
    /// Amount in the coin's own unit.
    pub amount: f64,
    pub usd_value: f64,
    /// Share of total earnings. Sampled independently per coin; the
    /// three entries need not sum to exactly 100.
    pub percentage: f64,
    /// TH/s pointed at this coin.
    pub hashrate: f64,
}

/// Fabricate the pool's profitability report.
pub fn pool_stats(now_ms: i64) -> PoolStats {
    let mut rng = SeededRng::new(POOL_SEED);
    PoolStats {
        algorithm: "Scrypt".to_string(),
        usd_profitability: rng.between(0.002, 0.003),
        btc_profitability: rng.between(6e-7, 8e-7),
        max_usd: rng.between(0.004, 0.006),
        max_btc: rng.between(1.2e-6, 1.6e-6),
        percentile_usd: rng.between(0.0022, 0.0028),
        percentile_btc: rng.between(6.2e-7, 7.8e-7),
        data_timestamp: now_ms / 1_000,
        server_timestamp: now_ms / 1_000,
        server_id: 4,
    }
}

/// Fabricate the pool-side status of every worker in the roster.
pub fn worker_statuses(config: &FleetConfig, now_ms: i64) -> Vec<WorkerStatus> {
    let mut rng = SeededRng::new(WORKER_SEED);
    config
        .roster
        .iter()
        .enumerate()
        .map(|(index, address)| {
            let connected = rng.next() > 0.1;
            let hashrate = if connected { rng.between(140.0, 160.0) } else { 0.0 };
            let shares_accepted = if connected {
                rng.between(1_000.0, 5_000.0).floor() as u64
            } else {
                0
            };
            let shares_rejected = if connected {
                rng.between(10.0, 100.0).floor() as u64
            } else {
                0
            };
            // One draw either way: a connected worker was seen within
            // the last five minutes, a disconnected one longer ago.
            let last_seen_ms = now_ms
                - if connected {
                    rng.between(0.0, 300_000.0)
                } else {
                    rng.between(300_000.0, 3_600_000.0)
                } as i64;

            WorkerStatus {
                worker_id: format!("worker{}", index + 1),
                address: address.clone(),
                connected,
                hashrate,
                shares_accepted,
                shares_rejected,
                last_seen_ms,
                earnings: WorkerEarnings {
                    daily_usd: hashrate * USD_PER_TH_HOUR * 24.0,
                    weekly_usd: hashrate * USD_PER_TH_HOUR * 24.0 * 7.0,
                    monthly_usd: hashrate * USD_PER_TH_HOUR * 24.0 * 30.0,
                },
            }
        })
        .collect()
}

/// Fabricate the three-coin merged-mining profitability table.
pub fn profitability() -> Vec<ProfitabilityEntry> {
    let mut rng = SeededRng::new(PROFITABILITY_SEED);
    vec![
        ProfitabilityEntry {
            coin: "Litecoin (LTC)".to_string(),
            algorithm: "Scrypt".to_string(),
            profitability: rng.between(0.0024, 0.0028),
            difficulty: 26_431_840.83787,
            block_reward: 12.5,
            price_usd: rng.between(85.0, 95.0),
            volume_24h_usd: rng.between(800_000_000.0, 1_200_000_000.0),
        },
        ProfitabilityEntry {
            coin: "Dogecoin (DOGE)".to_string(),
            algorithm: "Scrypt".to_string(),
            profitability: rng.between(0.0008, 0.0012),
            difficulty: 9_654_321.12345,
            block_reward: 10_000.0,
            price_usd: rng.between(0.08, 0.12),
            volume_24h_usd: rng.between(400_000_000.0, 600_000_000.0),
        },
        ProfitabilityEntry {
            coin: "DigiByte (DGB)".to_string(),
            algorithm: "Scrypt".to_string(),
            profitability: rng.between(0.0002, 0.0004),
            difficulty: 1_234_567.89012,
            block_reward: 665.0,
            price_usd: rng.between(0.012, 0.018),
            volume_24h_usd: rng.between(5_000_000.0, 15_000_000.0),
        },
    ]
}

/// Fabricate the per-coin earnings breakdown.
///
/// Runs a fleet pass to learn the total hashrate, then keeps drawing
/// from the same stream for the per-coin splits. Percentages are
/// sampled independently and intentionally left unnormalized.
pub fn earnings_breakdown(config: &FleetConfig, now_ms: i64) -> Vec<EarningsEntry> {
    let mut rng = SeededRng::new(config.seed);
    let fleet = synthesize_with(&mut rng, config, now_ms);
    let total_hashrate = summarize(&fleet).total_hashrate;

    vec![
        EarningsEntry {
            coin: "Litecoin (LTC)".to_string(),
            amount: rng.between(0.8, 1.2),
            usd_value: rng.between(70.0, 110.0),
            percentage: rng.between(65.0, 75.0),
            hashrate: total_hashrate * rng.between(0.65, 0.75),
        },
        EarningsEntry {
            coin: "Dogecoin (DOGE)".to_string(),
            amount: rng.between(800.0, 1_200.0),
            usd_value: rng.between(80.0, 120.0),
            percentage: rng.between(20.0, 30.0),
            hashrate: total_hashrate * rng.between(0.20, 0.30),
        },
        EarningsEntry {
            coin: "DigiByte (DGB)".to_string(),
            amount: rng.between(200.0, 400.0),
            usd_value: rng.between(3.0, 7.0),
            percentage: rng.between(3.0, 8.0),
            hashrate: total_hashrate * rng.between(0.03, 0.08),
        },
    ]
}
