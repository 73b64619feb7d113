//! The synthetic workload: tagged logging, the three busy-loop routines,
//! and the cycle driver.
//!
//! The free functions below run against standard output with the default
//! workload sizes.

pub mod cycle;
pub mod logger;
pub mod routines;

pub use cycle::{run_forever, run_to_exit, CycleReport};
pub use logger::{parse_line, PidLogger};
pub use routines::Simulator;

use crate::core::config::SimulatorConfig;
use crate::core::error::SimResult;

/// Write `[PID: <id>] <message>` to standard output
pub fn log(message: &str) -> SimResult<()> {
    Simulator::stdout(SimulatorConfig::default()).log(message)
}

/// Run the 10,000,000-iteration routine against standard output
pub fn work() -> SimResult<u64> {
    Simulator::stdout(SimulatorConfig::default()).work()
}

/// Run the 100,000-iteration routine against standard output
pub fn quick_work() -> SimResult<u64> {
    Simulator::stdout(SimulatorConfig::default()).quick_work()
}

/// Recurse `n` levels against standard output, finishing with [`work`]
pub fn deep_work(n: u64) -> SimResult<u64> {
    Simulator::stdout(SimulatorConfig::default()).deep_work(n)
}
