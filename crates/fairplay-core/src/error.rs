//! Error types for the fairness protocol and rule engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FairplayError>;

/// Errors surfaced by the core. None of them are retried or logged here;
/// every variant is fatal for the current round.
#[derive(Debug, Error)]
pub enum FairplayError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Secure random source unavailable: {0}")]
    EntropySource(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid commitment tag: {0}")]
    InvalidTag(String),
}
