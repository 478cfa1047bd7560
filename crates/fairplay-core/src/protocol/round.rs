//! A single game round.

use super::types::RoundId;
use crate::crypto::{self, random_index, CommitmentScheme, CommitmentTag, EntropySource, SecretKey};
use crate::error::{FairplayError, Result};
use crate::games::{DominanceEngine, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One round against the computer.
///
/// The computer's move is chosen and committed to in [`Round::start`]; the tag
/// from [`Round::commitment`] must be shown to the user before their move is
/// collected. [`Round::play`] consumes the round, so the key can only come out
/// after the outcome is fixed.
pub struct Round {
    id: RoundId,
    engine: DominanceEngine,
    scheme: CommitmentScheme,
    computer_index: usize,
    commitment: CommitmentTag,
}

impl Round {
    /// Generate the round key, pick the computer's move and commit to it
    pub fn start(engine: DominanceEngine, entropy: &mut impl EntropySource) -> Result<Self> {
        let scheme = CommitmentScheme::new(entropy)?;
        let computer_index = random_index(entropy, engine.len())?;
        let commitment = scheme.commit(&engine.all_moves()[computer_index]);
        let id = RoundId::new();

        debug!(round_id = %id, moves = engine.len(), commitment = %commitment, "Round committed");

        Ok(Self {
            id,
            engine,
            scheme,
            computer_index,
            commitment,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Tag to publish before the user chooses
    pub fn commitment(&self) -> &CommitmentTag {
        &self.commitment
    }

    pub fn engine(&self) -> &DominanceEngine {
        &self.engine
    }

    /// Resolve the user's move against the committed one and reveal the key.
    ///
    /// The outcome is from the user's side.
    pub fn play(self, user_index: usize) -> Result<RoundTranscript> {
        let user_move = self
            .engine
            .move_at(user_index)
            .ok_or_else(|| {
                FairplayError::UnknownMove(format!(
                    "index {} out of range for {} moves",
                    user_index,
                    self.engine.len()
                ))
            })?
            .to_string();
        let outcome = self.engine.resolve_index(user_index, self.computer_index)?;
        let computer_move = self.engine.all_moves()[self.computer_index].clone();

        debug!(round_id = %self.id, %user_move, %computer_move, %outcome, "Round resolved");

        let key = self.scheme.reveal_key();

        Ok(RoundTranscript {
            round_id: self.id,
            moves: self.engine.all_moves().to_vec(),
            user_move,
            computer_move,
            outcome,
            commitment: self.commitment,
            key,
        })
    }
}

// The computer's move stays hidden until `play`.
impl fmt::Debug for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Round")
            .field("id", &self.id)
            .field("moves", &self.engine.all_moves())
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// Everything published about a finished round
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundTranscript {
    pub round_id: RoundId,
    pub moves: Vec<String>,
    pub user_move: String,
    pub computer_move: String,
    /// User's result against the computer
    pub outcome: Outcome,
    pub commitment: CommitmentTag,
    pub key: SecretKey,
}

impl RoundTranscript {
    /// Check that the commitment opens to the revealed computer move
    pub fn verify(&self) -> bool {
        crypto::verify(&self.computer_move, &self.key, &self.commitment)
    }

    /// Full third-party check: the commitment opens and the recorded outcome
    /// follows from the move set.
    pub fn audit(&self) -> Result<bool> {
        let engine = DominanceEngine::new(self.moves.iter().cloned())?;
        let outcome = engine.resolve(&self.user_move, &self.computer_move)?;
        Ok(self.verify() && outcome == self.outcome)
    }
}
