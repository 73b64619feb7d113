use std::io::Write;
use std::time::Instant;

use chrono::{DateTime, Utc};
use log::{debug, error};
use serde::{Serialize, Deserialize};

use crate::core::error::SimResult;
use crate::workload::routines::Simulator;

/// Summary of one pass through the three routines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleReport {
    /// Cycle number, starting at 1
    pub cycle: u64,
    /// When the cycle started
    pub started_at: DateTime<Utc>,
    /// Value returned by `quick_work`
    pub quick_result: u64,
    /// Value returned by `work`
    pub work_result: u64,
    /// Value returned by `deep_work`
    pub deep_result: u64,
    /// Busy-loop increments performed during the cycle
    pub iterations: u64,
    /// Wall-clock time spent in the routines, excluding the pause
    pub elapsed_ms: f64,
}

impl<W: Write> Simulator<W> {
    /// Run `quick_work`, `work` and `deep_work` once, in that order
    pub fn run_cycle(&mut self, cycle: u64) -> SimResult<CycleReport> {
        let started_at = Utc::now();
        let start = Instant::now();
        let before = self.iterations();

        let quick_result = self.quick_work()?;
        let work_result = self.work()?;
        let deep_result = self.deep_work(self.config().deep_depth)?;

        Ok(CycleReport {
            cycle,
            started_at,
            quick_result,
            work_result,
            deep_result,
            iterations: self.iterations() - before,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

/// Run cycles forever, pausing between them.
///
/// Only returns on a fatal error: a failed write to the output stream, or a
/// cycle report that could not be serialized for the debug log.
pub async fn run_forever<W: Write>(sim: &mut Simulator<W>) -> SimResult<()> {
    let pause = sim.config().pause();
    let mut cycle = 0u64;
    loop {
        cycle += 1;
        let report = sim.run_cycle(cycle)?;
        if log::log_enabled!(log::Level::Debug) {
            debug!("cycle finished: {}", serde_json::to_string(&report)?);
        }
        tokio::time::sleep(pause).await;
    }
}

/// Run cycles until a fatal error, log it once and hand back the exit status
pub async fn run_to_exit<W: Write>(sim: &mut Simulator<W>) -> i32 {
    match run_forever(sim).await {
        Ok(()) => 0,
        Err(e) => {
            error!("Workload stopped: {}", e);
            1
        }
    }
}
