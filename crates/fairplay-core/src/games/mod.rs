//! Game rules: outcomes and the cyclic dominance engine.

mod dominance;
mod rule;

pub use dominance::DominanceEngine;
pub use rule::{outcome, Outcome};
