//! Process-level building blocks shared by the workload routines.

pub mod config;
pub mod error;
pub mod identity;

pub use config::SimulatorConfig;
pub use error::{SimResult, SimulatorError};
pub use identity::{get_process_id, OsPid, PidSource, ProcessIdentity};
