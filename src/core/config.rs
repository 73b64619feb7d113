use serde::{Serialize, Deserialize};
use std::time::Duration;

/// Workload sizes and pacing for the simulator.
///
/// The binary only ever runs with [`SimulatorConfig::default`]; smaller
/// values exist for tests and benchmarks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulatorConfig {
    /// Busy-loop bound for `work`
    pub work_iterations: u64,
    /// Busy-loop bound for `quick_work`
    pub quick_iterations: u64,
    /// Per-level multiplier for `deep_work` (level `n` spins `unit * n`)
    pub deep_unit_iterations: u64,
    /// Recursion depth the driver loop passes to `deep_work`
    pub deep_depth: u64,
    /// Pause between cycles in milliseconds
    pub pause_ms: u64,
}

impl SimulatorConfig {
    /// Pause between cycles
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Busy-loop bound for the `deep_work` level `n`, saturating at `u64::MAX`
    pub fn deep_level_iterations(&self, n: u64) -> u64 {
        self.deep_unit_iterations.saturating_mul(n)
    }

    /// Total busy-loop increments performed by `deep_work(n)`, including
    /// the terminal `work` call. Saturates at `u64::MAX`.
    pub fn deep_iterations(&self, n: u64) -> u64 {
        // n * (n + 1) / 2 without overflowing the intermediate product
        let levels = if n % 2 == 0 {
            (n / 2).saturating_mul(n.saturating_add(1))
        } else {
            n.saturating_mul(n / 2 + 1)
        };
        self.deep_unit_iterations
            .saturating_mul(levels)
            .saturating_add(self.work_iterations)
    }

    /// Total busy-loop increments performed by one driver cycle
    pub fn cycle_iterations(&self) -> u64 {
        self.quick_iterations
            .saturating_add(self.work_iterations)
            .saturating_add(self.deep_iterations(self.deep_depth))
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            work_iterations: 10_000_000,
            quick_iterations: 100_000,
            deep_unit_iterations: 10_000,
            deep_depth: 100,
            pause_ms: 100,
        }
    }
}
