//! Fairplay Core Library
//!
//! This crate provides the fairness protocol and rule engine for a
//! provably-fair, two-party rock-paper-scissors game generalized to any odd
//! number of moves:
//! - HMAC-SHA256 commitments the computer publishes before the user chooses
//! - A cyclic dominance engine resolving Win/Lose/Draw for every move pair
//! - A single-round driver tying both together in commit-reveal order

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{
    verify, verify_hex, CommitmentScheme, CommitmentTag, EntropySource, MockEntropy, OsEntropy,
    SecretKey,
};
pub use error::{FairplayError, Result};
pub use games::{outcome, DominanceEngine, Outcome};
pub use protocol::{Round, RoundId, RoundTranscript};
