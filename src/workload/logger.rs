use std::io::Write;

use crate::core::error::SimResult;

pub const STARTING_WORK: &str = "Starting work";
pub const DONE_WORK: &str = "Done work";
pub const STARTING_QUICK_WORK: &str = "Starting quick work";
pub const DONE_QUICK_WORK: &str = "Done quick work";
pub const STARTING_DEEP_WORK: &str = "Starting deep work";

/// Writes `[PID: <id>] <message>` lines to an output stream.
///
/// Every line is flushed immediately so a reader on the other end of a
/// pipe sees progress as it happens.
#[derive(Debug)]
pub struct PidLogger<W> {
    out: W,
    pid: u32,
}

impl<W: Write> PidLogger<W> {
    pub fn new(out: W, pid: u32) -> Self {
        Self { out, pid }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Write one tagged line
    pub fn log(&mut self, message: &str) -> SimResult<()> {
        writeln!(self.out, "[PID: {}] {}", self.pid, message)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Splits a tagged line back into its PID and message
pub fn parse_line(line: &str) -> Option<(u32, &str)> {
    let rest = line.strip_prefix("[PID: ")?;
    let (pid, message) = rest.split_once("] ")?;
    Some((pid.parse().ok()?, message))
}
