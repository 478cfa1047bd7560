//! SecretKey and CommitmentTag for the HMAC commit-reveal scheme.

use super::entropy::{EntropySource, OsEntropy};
use crate::error::{FairplayError, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret HMAC key for one round
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from the given entropy source
    pub fn random(entropy: &mut impl EntropySource) -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        entropy.fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Hex encoding handed to verifiers
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.0).expect("HMAC accepts keys of any length")
    }
}

// Key material stays out of logs and panics.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for SecretKey {
    type Err = FairplayError;

    fn from_str(s: &str) -> Result<Self> {
        decode_32(s)
            .map(Self)
            .map_err(FairplayError::InvalidKey)
    }
}

impl Serialize for SecretKey {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_hex().serialize(s)
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Commitment = HMAC-SHA256(key, move)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitmentTag([u8; 32]);

impl CommitmentTag {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentTag({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for CommitmentTag {
    type Err = FairplayError;

    fn from_str(s: &str) -> Result<Self> {
        decode_32(s)
            .map(Self)
            .map_err(FairplayError::InvalidTag)
    }
}

impl Serialize for CommitmentTag {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        hex::encode(self.0).serialize(s)
    }
}

impl<'de> Deserialize<'de> for CommitmentTag {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

fn decode_32(s: &str) -> std::result::Result<[u8; 32], String> {
    let bytes = hex::decode(s.trim()).map_err(|e| e.to_string())?;
    if bytes.len() != 32 {
        return Err(format!("expected 32 bytes, got {}", bytes.len()));
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

/// Holds the secret key for one round and commits to the computer's move.
///
/// The tag from [`commit`](Self::commit) is published before the user picks a
/// move. [`reveal_key`](Self::reveal_key) must only be called once the
/// committed move has been shown to the user in cleartext; the scheme does not
/// track that itself.
pub struct CommitmentScheme {
    key: SecretKey,
}

impl CommitmentScheme {
    /// Create a scheme with a fresh key from `entropy`
    pub fn new(entropy: &mut impl EntropySource) -> Result<Self> {
        Ok(Self {
            key: SecretKey::random(entropy)?,
        })
    }

    /// Create a scheme keyed from the operating system CSPRNG
    pub fn generate() -> Result<Self> {
        Self::new(&mut OsEntropy)
    }

    /// Compute the commitment tag for `mv`
    pub fn commit(&self, mv: &str) -> CommitmentTag {
        let mut mac = self.key.mac();
        mac.update(mv.as_bytes());
        CommitmentTag(mac.finalize().into_bytes().into())
    }

    /// Give up the key for verification, ending the scheme
    pub fn reveal_key(self) -> SecretKey {
        self.key
    }
}

impl fmt::Debug for CommitmentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitmentScheme").finish_non_exhaustive()
    }
}

/// Check that `tag` opens to `mv` under `key`.
///
/// Needs only published values, so any third party can run it. The
/// comparison is constant time.
pub fn verify(mv: &str, key: &SecretKey, tag: &CommitmentTag) -> bool {
    let mut mac = key.mac();
    mac.update(mv.as_bytes());
    mac.verify_slice(tag.as_bytes()).is_ok()
}

/// [`verify`] over hex strings as printed by the game.
pub fn verify_hex(mv: &str, key_hex: &str, tag_hex: &str) -> Result<bool> {
    let key: SecretKey = key_hex.parse()?;
    let tag: CommitmentTag = tag_hex.parse()?;
    Ok(verify(mv, &key, &tag))
}
