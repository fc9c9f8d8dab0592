use std::io;
use thiserror::Error;

// =============================================================================
// Configuration errors
// =============================================================================

/// Problems with the command line. These are reported together with the
/// usage line and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required argument <{0}>")]
    MissingArgument(&'static str),

    #[error("invalid value for <{name}>: '{value}' is not a valid number")]
    InvalidNumber { name: &'static str, value: String },

    #[error("number of threads must be positive, got {0}")]
    NonPositiveThreads(i64),

    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("option '{0}' requires a value")]
    MissingFlagValue(&'static str),

    #[error("unexpected extra argument '{0}'")]
    UnexpectedArgument(String),
}

impl ConfigError {
    pub fn invalid_number(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            name,
            value: value.into(),
        }
    }
}

// =============================================================================
// Run errors
// =============================================================================

/// Every way a benchmark run can fail. All of them end the run.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to allocate {what} ({count} elements)")]
    Allocation { what: &'static str, count: usize },

    #[error("failed to create worker thread {index}: {source}")]
    ThreadSpawn {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker thread {index} panicked")]
    WorkerPanicked { index: usize },

    #[error("layouts disagree on the total: {details}")]
    TotalsDisagree { details: String },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl BenchError {
    pub fn allocation(what: &'static str, count: usize) -> Self {
        Self::Allocation { what, count }
    }

    /// Configuration errors get the usage line printed next to them.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
