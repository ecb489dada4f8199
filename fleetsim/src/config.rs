//! Fleet configuration: the machine roster and the base seed.

/// Seed for the fleet telemetry stream. Every view that needs a full
/// fleet pass (summary, alerts, earnings) starts from this value.
pub const DEFAULT_FLEET_SEED: u64 = 12345;

#[derive(Debug, Clone)]
pub struct FleetConfig {
    /// Ordered, fixed roster of machine network addresses. Order is
    /// load-bearing: machines in one fabrication pass share a single
    /// continuing PRNG stream, so reordering the roster changes every
    /// derived value.
    pub roster: Vec<String>,

    /// Base seed for fleet telemetry synthesis.
    pub seed: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            roster: (100..112).map(|n| format!("192.168.1.{n}")).collect(),
            seed: DEFAULT_FLEET_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_has_twelve_machines() {
        let config = FleetConfig::default();
        assert_eq!(config.roster.len(), 12);
        assert_eq!(config.roster[0], "192.168.1.100");
        assert_eq!(config.roster[11], "192.168.1.111");
    }
}
