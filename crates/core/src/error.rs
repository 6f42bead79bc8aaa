use thiserror::Error;

/// Top-level error type used across the entire lab.
#[derive(Debug, Error)]
pub enum LabError {
    /// A caller-supplied value violates an operation's precondition
    /// (e.g. a sequence step of zero).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = LabError> = std::result::Result<T, E>;
