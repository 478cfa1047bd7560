//! Outcome type and the cyclic dominance rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a row move played against a column move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// The same pairing seen from the other side
    pub fn reverse(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of move `i` against move `j` in a cycle of `n` moves.
///
/// A move loses to the (n - 1) / 2 moves that follow it in cyclic order and
/// beats the (n - 1) / 2 that precede it. `n` must be odd and both indices
/// below `n`.
pub fn outcome(i: usize, j: usize, n: usize) -> Outcome {
    debug_assert!(i < n && j < n);
    let distance = (j + n - i) % n;
    if distance == 0 {
        Outcome::Draw
    } else if distance <= (n - 1) / 2 {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}
