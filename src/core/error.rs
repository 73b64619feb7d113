use std::error::Error;
use std::fmt::Display;

/// Error type for simulator operations
#[derive(Debug)]
pub enum SimulatorError {
    /// Writing a log line to the output stream failed
    Output(std::io::Error),
    /// Serializing a cycle report failed
    Report(serde_json::Error),
}

/// Result alias used throughout the simulator
pub type SimResult<T> = Result<T, SimulatorError>;

impl Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Output(err) => write!(f, "Output error: {}", err),
            SimulatorError::Report(err) => write!(f, "Report error: {}", err),
        }
    }
}

impl Error for SimulatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimulatorError::Output(err) => Some(err),
            SimulatorError::Report(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SimulatorError {
    fn from(err: std::io::Error) -> Self {
        SimulatorError::Output(err)
    }
}

impl From<serde_json::Error> for SimulatorError {
    fn from(err: serde_json::Error) -> Self {
        SimulatorError::Report(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_converts_to_output() {
        let err: SimulatorError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, SimulatorError::Output(_)));
        assert_eq!(err.to_string(), "Output error: pipe closed");
        assert!(err.source().is_some());
    }
}
