//! The fabrication facade.
//!
//! `FleetSimulator` owns a [`FleetConfig`] and exposes every
//! fabrication operation behind plain method calls. Each call reseeds
//! its own generator and returns a fresh, fully populated value; no
//! state survives between calls, which is exactly what lets a caller
//! re-run any view on a timer and replace the previous result
//! wholesale. A real device poller would implement this same surface
//! with asynchronous I/O behind it.

use time::OffsetDateTime;

use crate::alerts::{Alert, fleet_alerts};
use crate::config::FleetConfig;
use crate::error::Result;
use crate::history::{DEFAULT_WINDOW_HOURS, HistoryPoint, performance_history};
use crate::metrics::{FleetSummary, summarize};
use crate::pool::{
    EarningsEntry, PoolStats, ProfitabilityEntry, WorkerStatus, earnings_breakdown, pool_stats,
    worker_statuses,
};
use crate::telemetry::details::{MinerDetails, synthesize_details};
use crate::telemetry::{MinerTelemetry, synthesize};

fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

#[derive(Debug, Clone, Default)]
pub struct FleetSimulator {
    config: FleetConfig,
}

impl FleetSimulator {
    pub fn new(config: FleetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// One telemetry snapshot per roster machine, roster order.
    pub fn fleet(&self) -> Vec<MinerTelemetry> {
        synthesize(&self.config, now_ms())
    }

    /// Detail view for one machine, or `MinerNotFound` for an address
    /// outside the roster.
    pub fn miner_details(&self, address: &str) -> Result<MinerDetails> {
        synthesize_details(&self.config, address, now_ms())
    }

    /// Fleet-level aggregate of a fresh telemetry pass.
    pub fn summary(&self) -> FleetSummary {
        summarize(&self.fleet())
    }

    pub fn pool_stats(&self) -> PoolStats {
        pool_stats(now_ms())
    }

    pub fn workers(&self) -> Vec<WorkerStatus> {
        worker_statuses(&self.config, now_ms())
    }

    /// Alert feed, most recent first.
    pub fn alerts(&self) -> Vec<Alert> {
        fleet_alerts(&self.config, now_ms())
    }

    pub fn profitability(&self) -> Vec<ProfitabilityEntry> {
        crate::pool::profitability()
    }

    pub fn earnings(&self) -> Vec<EarningsEntry> {
        earnings_breakdown(&self.config, now_ms())
    }

    /// Trailing performance series; `None` selects the 24h window.
    pub fn history(&self, hours: Option<u32>) -> Vec<HistoryPoint> {
        performance_history(hours.unwrap_or(DEFAULT_WINDOW_HOURS), now_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serve_every_view_from_the_default_config() {
        let sim = FleetSimulator::default();
        assert_eq!(sim.fleet().len(), 12);
        assert_eq!(sim.summary().total_miners, 12);
        assert_eq!(sim.workers().len(), 12);
        assert_eq!(sim.profitability().len(), 3);
        assert_eq!(sim.earnings().len(), 3);
        assert_eq!(sim.history(None).len(), 100);
        assert!(sim.miner_details("192.168.1.100").is_ok());
        assert!(sim.miner_details("not-a-miner").is_err());
    }
}
