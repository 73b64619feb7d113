use std::hint::black_box;
use std::io::{self, Write};

use log::trace;

use crate::core::config::SimulatorConfig;
use crate::core::error::SimResult;
use crate::core::identity::get_process_id;
use crate::workload::logger::{
    PidLogger, DONE_QUICK_WORK, DONE_WORK, STARTING_DEEP_WORK, STARTING_QUICK_WORK, STARTING_WORK,
};

/// Synthetic CPU workload
///
/// Runs busy loops of known size and reports progress through a
/// [`PidLogger`]. The running total of busy-loop increments is kept so
/// callers can account for the work done.
#[derive(Debug)]
pub struct Simulator<W> {
    logger: PidLogger<W>,
    config: SimulatorConfig,
    iterations: u64,
}

impl Simulator<io::Stdout> {
    /// Simulator that logs to standard output
    pub fn stdout(config: SimulatorConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> Simulator<W> {
    /// Create a simulator tagging its output with the process-wide PID
    pub fn new(out: W, config: SimulatorConfig) -> Self {
        Self {
            logger: PidLogger::new(out, get_process_id()),
            config,
            iterations: 0,
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Busy-loop increments performed so far
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn into_output(self) -> W {
        self.logger.into_inner()
    }

    pub fn log(&mut self, message: &str) -> SimResult<()> {
        self.logger.log(message)
    }

    /// Spin up to `work_iterations` between a start and a done line
    #[inline(never)]
    pub fn work(&mut self) -> SimResult<u64> {
        self.log(STARTING_WORK)?;
        let i = self.spin(self.config.work_iterations);
        self.log(DONE_WORK)?;
        Ok(i)
    }

    #[inline(never)]
    pub fn quick_work(&mut self) -> SimResult<u64> {
        self.log(STARTING_QUICK_WORK)?;
        let i = self.spin(self.config.quick_iterations);
        self.log(DONE_QUICK_WORK)?;
        Ok(i)
    }

    /// Recurse `n` levels, spinning `deep_unit_iterations * n` at each one,
    /// then finish with [`Simulator::work`].
    ///
    /// Each level is a real stack frame so a sampling profiler sees the
    /// whole chain.
    #[inline(never)]
    pub fn deep_work(&mut self, n: u64) -> SimResult<u64> {
        self.log(STARTING_DEEP_WORK)?;
        if n > 0 {
            let spun = self.spin(self.config.deep_level_iterations(n));
            trace!("deep work level {} spun {} iterations", n, spun);
            return self.deep_work(n - 1);
        }
        self.work()
    }

    #[inline(never)]
    fn spin(&mut self, bound: u64) -> u64 {
        let mut i = 0u64;
        while i < bound {
            i = black_box(i + 1);
        }
        self.iterations += i;
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::logger::parse_line;

    fn small_config() -> SimulatorConfig {
        SimulatorConfig {
            work_iterations: 1_000,
            quick_iterations: 10,
            deep_unit_iterations: 5,
            deep_depth: 4,
            pause_ms: 1,
        }
    }

    fn messages(sim: Simulator<Vec<u8>>) -> Vec<String> {
        let output = String::from_utf8(sim.into_output()).unwrap();
        output
            .lines()
            .map(|line| parse_line(line).unwrap().1.to_string())
            .collect()
    }

    #[test]
    fn test_work_returns_default_bound() {
        let mut sim = Simulator::new(Vec::new(), SimulatorConfig::default());
        assert_eq!(sim.work().unwrap(), 10_000_000);
        assert_eq!(messages(sim), vec![STARTING_WORK, DONE_WORK]);
    }

    #[test]
    fn test_quick_work_returns_default_bound() {
        let mut sim = Simulator::new(Vec::new(), SimulatorConfig::default());
        assert_eq!(sim.quick_work().unwrap(), 100_000);
        assert_eq!(messages(sim), vec![STARTING_QUICK_WORK, DONE_QUICK_WORK]);
    }

    #[test]
    fn test_deep_work_zero_delegates_to_work() {
        let mut sim = Simulator::new(Vec::new(), SimulatorConfig::default());
        assert_eq!(sim.deep_work(0).unwrap(), 10_000_000);
        assert_eq!(messages(sim), vec![STARTING_DEEP_WORK, STARTING_WORK, DONE_WORK]);
    }

    #[test]
    fn test_deep_work_two_levels() {
        let mut sim = Simulator::new(Vec::new(), SimulatorConfig::default());
        assert_eq!(sim.deep_work(2).unwrap(), 10_000_000);
        assert_eq!(
            messages(sim),
            vec![
                STARTING_DEEP_WORK,
                STARTING_DEEP_WORK,
                STARTING_DEEP_WORK,
                STARTING_WORK,
                DONE_WORK,
            ]
        );
    }

    #[test]
    fn test_deep_work_logs_once_per_level() {
        for n in [1u64, 5, 100] {
            let mut sim = Simulator::new(Vec::new(), small_config());
            sim.deep_work(n).unwrap();
            let lines = messages(sim);

            let deep = lines.iter().filter(|m| *m == STARTING_DEEP_WORK).count();
            assert_eq!(deep as u64, n + 1);
            assert_eq!(&lines[lines.len() - 2..], &[STARTING_WORK, DONE_WORK]);
            assert_eq!(lines.len() as u64, n + 3);
        }
    }

    #[test]
    fn test_deep_work_iteration_total() {
        let config = small_config();
        let mut sim = Simulator::new(Vec::new(), config.clone());
        sim.deep_work(100).unwrap();
        // 5 * (1 + ... + 100) + 1_000
        assert_eq!(sim.iterations(), 25_250 + 1_000);
        assert_eq!(sim.iterations(), config.deep_iterations(100));
    }

    #[test]
    fn test_lines_share_process_id() {
        let mut sim = Simulator::new(Vec::new(), small_config());
        sim.quick_work().unwrap();
        sim.work().unwrap();
        sim.deep_work(3).unwrap();

        let output = String::from_utf8(sim.into_output()).unwrap();
        let pids: Vec<u32> = output.lines().map(|line| parse_line(line).unwrap().0).collect();
        assert_eq!(pids.len(), 2 + 2 + 6);
        assert!(pids.iter().all(|pid| *pid == get_process_id()));
    }
}
