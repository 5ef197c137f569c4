use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the reconciliation runtime.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// An edit sequence did not resolve against the live target's structure.
    /// This means the caller diffed against a stale baseline - it is a
    /// contract violation, not a recoverable condition.
    #[error("desync")]
    Desync(String),

    /// Invalid input.
    #[error("invalid")]
    Invalid(String),
}
