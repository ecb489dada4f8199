//! Synthetic telemetry for a Scrypt mining fleet.
//!
//! Everything this crate serves is fabricated locally by a seeded
//! PRNG: per-machine hashrate, temperature, power, shares, pool
//! statistics, profitability, earnings, history, and alerts. The data
//! is internally consistent (a down machine reports zero across every
//! activity field) and fully reproducible for a fixed (roster, seed,
//! clock) triple. There is no device communication and no persistence;
//! a real poller would slot in behind [`FleetSimulator`]'s surface
//! without touching any downstream consumer.

pub mod alerts;
pub mod api;
pub mod api_client;
pub mod config;
pub mod error;
pub mod history;
pub mod metrics;
pub mod pool;
pub mod rng;
pub mod simulator;
pub mod telemetry;

pub use config::FleetConfig;
pub use error::{Error, Result};
pub use simulator::FleetSimulator;
