//! Fairplay terminal front-end
//!
//! Plays one provably-fair round of N-move rock-paper-scissors against the
//! computer, and verifies commitments from finished rounds.

mod commands;
mod help;
mod menu;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "fairplay")]
#[command(about = "Provably-fair rock-paper-scissors with any odd number of moves")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round against the computer
    Play {
        /// Moves in cyclic order; an odd number (at least 3) of unique names
        #[arg(required = true)]
        moves: Vec<String>,
        /// Also print the round transcript as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the outcome table for a move set
    Table {
        /// Moves in cyclic order
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Check a published commitment against a revealed key
    Verify {
        /// Move the computer claims it committed to
        #[arg(long = "move")]
        mv: String,
        /// Revealed key (hex encoded)
        #[arg(long)]
        key: String,
        /// Commitment published before the round (hex encoded)
        #[arg(long)]
        tag: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the game
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("fairplay={0},fairplay_core={0}", log_level))
    });
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let result = match cli.command {
        Commands::Play { moves, json } => commands::play(moves, json),
        Commands::Table { moves } => commands::table(moves),
        Commands::Verify { mv, key, tag } => commands::verify(&mv, &key, &tag),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["fairplay", "play", "Rock", "Paper", "Scissors", "--json"])
            .unwrap();
        match cli.command {
            Commands::Play { moves, json } => {
                assert_eq!(moves, vec!["Rock", "Paper", "Scissors"]);
                assert!(json);
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "fairplay", "-v", "verify", "--move", "Rock", "--key", "00", "--tag", "11",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Verify { ref mv, .. } if mv == "Rock"));
    }

    #[test]
    fn test_play_requires_moves() {
        assert!(Cli::try_parse_from(["fairplay", "play"]).is_err());
    }
}
