//! Per-machine detail synthesis: chip array, chain breakdown, pool
//! configuration.
//!
//! Details are not stored anywhere; a detail request re-runs the fleet
//! pass on the same stream and keeps drawing for the chip and chain
//! fields, so repeat requests for the same address are bit-identical.

use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

use super::{MinerTelemetry, synthesize_with};
use crate::config::FleetConfig;
use crate::error::{Error, Result};
use crate::rng::SeededRng;

pub const CHIPS_PER_MINER: usize = 126;
pub const CHAINS_PER_MINER: usize = 3;
pub const CHIPS_PER_CHAIN: u32 = 42;

/// Per-chip chance of rolling an error while the parent is online.
const CHIP_ERROR_THRESHOLD: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChipStatus {
    Active,
    Inactive,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChainStatus {
    Healthy,
    Degraded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ChipTelemetry {
    pub id: u32,
    /// TH/s contributed by this chip.
    pub hashrate: f64,
    pub temperature_c: f64,
    pub status: ChipStatus,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ChainTelemetry {
    pub id: u32,
    pub chips: u32,
    /// TH/s for the whole chain; the three chains split the parent
    /// hashrate evenly.
    pub hashrate: f64,
    pub temperature_c: f64,
    pub status: ChainStatus,
}

/// Static stratum endpoint attached to every machine.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PoolEndpoint {
    pub url: String,
    pub username: String,
    pub algorithm: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct MinerDetails {
    pub telemetry: MinerTelemetry,
    pub name: String,
    pub model: String,
    pub firmware_version: String,
    pub chips: Vec<ChipTelemetry>,
    pub chains: Vec<ChainTelemetry>,
    pub pool: PoolEndpoint,
}

/// Fabricate the detail view for one roster address.
///
/// Re-synthesizes the fleet and locates the address, failing with
/// [`Error::MinerNotFound`] when the caller asks for a machine the
/// fixed roster does not contain. Chips and chains inherit the parent
/// machine's posture: a down machine reports 126 inactive chips and
/// three failed chains without consuming any further draws.
pub fn synthesize_details(
    config: &FleetConfig,
    address: &str,
    now_ms: i64,
) -> Result<MinerDetails> {
    let mut rng = SeededRng::new(config.seed);
    let fleet = synthesize_with(&mut rng, config, now_ms);

    let (index, telemetry) = fleet
        .into_iter()
        .enumerate()
        .find(|(_, m)| m.address == address)
        .ok_or_else(|| Error::MinerNotFound(address.to_string()))?;

    let online = telemetry.is_online();
    let unit = index + 1;

    let chips = (0..CHIPS_PER_MINER as u32)
        .map(|i| fabricate_chip(&mut rng, i + 1, online))
        .collect();

    let chains = (0..CHAINS_PER_MINER as u32)
        .map(|i| ChainTelemetry {
            id: i,
            chips: CHIPS_PER_CHAIN,
            hashrate: if online {
                telemetry.hashrate / CHAINS_PER_MINER as f64
            } else {
                0.0
            },
            temperature_c: if online { rng.between(72.0, 78.0) } else { 0.0 },
            status: if online {
                ChainStatus::Healthy
            } else {
                ChainStatus::Failed
            },
        })
        .collect();

    Ok(MinerDetails {
        name: format!("Antminer L7 {unit}"),
        model: "Antminer L7".to_string(),
        firmware_version: "1.0.2.8".to_string(),
        chips,
        chains,
        pool: PoolEndpoint {
            url: "stratum+tcp://prohashing.com:3333".to_string(),
            username: format!("worker{unit}"),
            algorithm: "scrypt".to_string(),
        },
        telemetry,
    })
}

fn fabricate_chip(rng: &mut SeededRng, id: u32, online: bool) -> ChipTelemetry {
    if !online {
        return ChipTelemetry {
            id,
            hashrate: 0.0,
            temperature_c: 0.0,
            status: ChipStatus::Inactive,
        };
    }
    ChipTelemetry {
        id,
        hashrate: rng.between(1.1, 1.3),
        temperature_c: rng.between(70.0, 80.0),
        status: if rng.next() > CHIP_ERROR_THRESHOLD {
            ChipStatus::Active
        } else {
            ChipStatus::Error
        },
    }
}
