//! Cyclic dominance engine for an odd number of moves.

use super::rule::{outcome, Outcome};
use crate::error::{FairplayError, Result};
use std::collections::HashMap;

/// Precomputed outcome relation over an ordered move set.
///
/// Entry `(row, col)` is the row move's result when played against the
/// column move. The move order defines the cycle: every move loses to the
/// moves right after it and beats the moves right before it.
#[derive(Clone, Debug)]
pub struct DominanceEngine {
    moves: Vec<String>,
    index: HashMap<String, usize>,
    /// Row-major n x n table
    table: Vec<Outcome>,
}

impl DominanceEngine {
    /// Build the engine, rejecting sets with fewer than 3 moves, an even
    /// number of moves, or duplicates.
    pub fn new<I, S>(moves: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();
        let n = moves.len();

        if n < 3 {
            return Err(FairplayError::InvalidMoveSet(format!(
                "expected at least 3 moves, got {}",
                n
            )));
        }
        if n % 2 == 0 {
            return Err(FairplayError::InvalidMoveSet(format!(
                "expected an odd number of moves, got {}",
                n
            )));
        }

        let mut index = HashMap::with_capacity(n);
        for (i, mv) in moves.iter().enumerate() {
            if index.insert(mv.clone(), i).is_some() {
                return Err(FairplayError::InvalidMoveSet(format!(
                    "duplicate move: {}",
                    mv
                )));
            }
        }

        let table = (0..n)
            .flat_map(|row| (0..n).map(move |col| outcome(row, col, n)))
            .collect();

        Ok(Self {
            moves,
            index,
            table,
        })
    }

    /// Result of `row` played against `col`
    pub fn resolve(&self, row: &str, col: &str) -> Result<Outcome> {
        let row = self.require(row)?;
        let col = self.require(col)?;
        Ok(self.table[row * self.len() + col])
    }

    /// Result of the move at `row` played against the move at `col`
    pub fn resolve_index(&self, row: usize, col: usize) -> Result<Outcome> {
        let n = self.len();
        for idx in [row, col] {
            if idx >= n {
                return Err(FairplayError::UnknownMove(format!(
                    "index {} out of range for {} moves",
                    idx, n
                )));
            }
        }
        Ok(self.table[row * n + col])
    }

    /// Moves in their configured order
    pub fn all_moves(&self) -> &[String] {
        &self.moves
    }

    /// Position of `name` in the move order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn move_at(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false: construction rejects empty sets
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Each move with its row of outcomes against every move, in order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> + '_ {
        self.moves
            .iter()
            .map(String::as_str)
            .zip(self.table.chunks(self.len()))
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| FairplayError::UnknownMove(name.to_string()))
    }
}
