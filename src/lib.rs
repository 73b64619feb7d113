//! Long-running CPU workload fixture.
//!
//! Burns CPU in three recognisable routines, forever, printing
//! `[PID: <id>] <message>` progress lines so process monitors and
//! sampling profilers have a predictable target to attach to.

pub mod core;
pub mod workload;

pub use crate::core::{get_process_id, SimResult, SimulatorConfig, SimulatorError};
pub use crate::workload::{deep_work, log, quick_work, run_forever, run_to_exit, work, Simulator};
