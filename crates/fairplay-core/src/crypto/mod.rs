//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - SecretKey and CommitmentTag for the HMAC commit-reveal scheme
//! - CommitmentScheme, which holds the key for one round
//! - EntropySource, the injectable secure-random provider

mod commitment;
mod entropy;

pub use commitment::{verify, verify_hex, CommitmentScheme, CommitmentTag, SecretKey, KEY_LEN};
pub use entropy::{random_index, EntropySource, MockEntropy, OsEntropy};
