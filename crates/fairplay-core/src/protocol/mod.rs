//! Round protocol: commit, collect the user's move, resolve, reveal.

mod round;
mod types;

pub use round::{Round, RoundTranscript};
pub use types::RoundId;
