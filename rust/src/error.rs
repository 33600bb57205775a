//! Error handling and result types for benchmark runs.
//!
//! Argument errors are reported by clap before a run starts; everything that
//! can go wrong afterwards is a `BenchError`.

use std::path::Path;

/// Error type for a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchError {
    /// An output file could not be opened for writing.
    OutputOpen(String),
    /// Writing to an already opened output failed.
    Io(String),
    /// The harness was asked to reduce zero trials.
    NoTrials,
}

impl BenchError {
    /// Create an OutputOpen error naming the file and what it was for
    pub fn output_open(kind: &str, path: &Path, reason: &std::io::Error) -> Self {
        Self::OutputOpen(format!(
            "Failed to open {} output: {} ({})",
            kind,
            path.display(),
            reason
        ))
    }

    /// Create an Io error with the path being written
    pub fn io(path: &Path, reason: &std::io::Error) -> Self {
        Self::Io(format!("{}: {}", path.display(), reason))
    }
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::OutputOpen(msg) => write!(f, "{}", msg),
            BenchError::Io(msg) => write!(f, "Write failed: {}", msg),
            BenchError::NoTrials => write!(f, "Trial count must be at least 1"),
        }
    }
}

impl std::error::Error for BenchError {}

/// Result type for benchmark operations that may fail
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_output_open_names_path() {
        let reason = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = BenchError::output_open("CSV", Path::new("results/x.csv"), &reason);
        assert!(matches!(err, BenchError::OutputOpen(_)));
        let msg = err.to_string();
        assert!(msg.contains("results/x.csv"), "message was {}", msg);
        assert!(msg.starts_with("Failed to open CSV output"));
    }

    #[test]
    fn test_io_error_names_path() {
        let reason = io::Error::new(io::ErrorKind::Other, "disk full");
        let err = BenchError::io(Path::new("run.log"), &reason);
        assert_eq!(err.to_string(), "Write failed: run.log: disk full");
    }
}
