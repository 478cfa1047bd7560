//! Subcommand implementations.

mod play;
mod verify;

pub use play::play;
pub use verify::verify;

use crate::help::help_table;
use anyhow::{anyhow, Result};
use fairplay_core::DominanceEngine;

/// Validate the move list from the command line
fn load_engine(moves: Vec<String>) -> Result<DominanceEngine> {
    DominanceEngine::new(moves).map_err(|e| {
        anyhow!(
            "Expected an odd number (>= 3) of unique strings: {}\n\
             Example: fairplay play Rock Paper Scissors",
            e
        )
    })
}

pub fn table(moves: Vec<String>) -> Result<()> {
    let engine = load_engine(moves)?;
    println!("{}", help_table(&engine));
    Ok(())
}
