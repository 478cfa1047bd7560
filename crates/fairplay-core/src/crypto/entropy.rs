//! Secure-random providers.

use crate::error::{FairplayError, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Source of cryptographically secure random bytes.
///
/// Implementations can be:
/// - OsEntropy for production, backed by the operating system CSPRNG
/// - MockEntropy for tests, deterministic from a seed
///
/// A failure must be reported as `FairplayError::EntropySource`; callers never
/// fall back to a weaker generator.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}

/// Operating system CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| FairplayError::EntropySource(e.to_string()))
    }
}

/// Deterministic entropy for testing.
///
/// Output is SHA256(seed || counter) blocks, so two mocks with the same seed
/// produce identical streams.
#[derive(Clone, Debug)]
pub struct MockEntropy {
    seed: [u8; 32],
    counter: u64,
    exhausted: bool,
}

impl MockEntropy {
    /// Create a new mock from a seed
    pub fn new(seed: [u8; 32]) -> Self {
        Self {
            seed,
            counter: 0,
            exhausted: false,
        }
    }

    /// Create a mock whose seed is the given value repeated
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(bytes)
    }

    /// Create a mock that fails every request, simulating an unavailable
    /// random source
    pub fn unavailable() -> Self {
        Self {
            seed: [0u8; 32],
            counter: 0,
            exhausted: true,
        }
    }
}

impl EntropySource for MockEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        if self.exhausted {
            return Err(FairplayError::EntropySource(
                "mock entropy source is unavailable".to_string(),
            ));
        }

        for chunk in dest.chunks_mut(32) {
            let mut hasher = Sha256::new();
            hasher.update(self.seed);
            hasher.update(self.counter.to_le_bytes());
            let block = hasher.finalize();
            chunk.copy_from_slice(&block[..chunk.len()]);
            self.counter += 1;
        }
        Ok(())
    }
}

/// Draw a uniformly distributed index in `0..n`.
///
/// Uses rejection sampling over 64-bit draws so there is no modulo bias.
pub fn random_index(source: &mut impl EntropySource, n: usize) -> Result<usize> {
    if n == 0 {
        return Err(FairplayError::InvalidMoveSet(
            "cannot pick from an empty move set".to_string(),
        ));
    }

    let n = n as u64;
    // 2^64 mod n; draws at or above 2^64 - rem would skew the distribution.
    let rem = (u64::MAX % n + 1) % n;
    loop {
        let mut buf = [0u8; 8];
        source.fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        if rem == 0 || value <= u64::MAX - rem {
            return Ok((value % n) as usize);
        }
    }
}
