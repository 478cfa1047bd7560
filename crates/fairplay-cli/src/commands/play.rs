use super::load_engine;
use crate::help::help_table;
use crate::menu::{menu_lines, parse_selection, Selection};
use anyhow::{Context, Result};
use dialoguer::Input;
use fairplay_core::{OsEntropy, Round};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::info;

const PROMPT: &str = "Enter your move";

/// Source of the user's menu selections
pub trait Prompt {
    /// Next line typed by the user, or `None` once input is closed
    fn read_selection(&mut self, out: &mut dyn Write) -> Result<Option<String>>;
}

/// Interactive prompt; needs stdin and stderr to be a terminal
struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn read_selection(&mut self, out: &mut dyn Write) -> Result<Option<String>> {
        out.flush()?;
        let input: String = Input::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(input))
    }
}

/// Line-based prompt for piped or redirected input
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn read_selection(&mut self, out: &mut dyn Write) -> Result<Option<String>> {
        write!(out, "{}: ", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

pub fn play(moves: Vec<String>, json: bool) -> Result<()> {
    let engine = load_engine(moves)?;
    let round = Round::start(engine, &mut OsEntropy).context("Could not start round")?;
    info!(round_id = %round.id(), "Round started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        run_round(round, &mut TerminalPrompt, &mut out, json)
    } else {
        let mut prompt = LinePrompt::new(io::stdin().lock());
        run_round(round, &mut prompt, &mut out, json)
    }
}

/// Publish the commitment, then loop on the menu until the user picks a move
/// or exits.
pub fn run_round(
    round: Round,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
    json: bool,
) -> Result<()> {
    writeln!(out, "HMAC: {}", round.commitment())?;

    loop {
        for line in menu_lines(round.engine()) {
            writeln!(out, "{}", line)?;
        }

        let Some(input) = prompt.read_selection(out)? else {
            // Closed input counts as leaving the game
            info!(round_id = %round.id(), "Input closed");
            writeln!(out, "Game over.")?;
            return Ok(());
        };

        match parse_selection(&input, round.engine().len()) {
            Selection::Help => {
                writeln!(out, "{}", help_table(round.engine()))?;
            }
            Selection::Exit => {
                info!(round_id = %round.id(), "Round abandoned");
                writeln!(out, "Game over.")?;
                return Ok(());
            }
            Selection::Invalid => {
                writeln!(out, "Invalid input. Please select again.")?;
            }
            Selection::Move(index) => {
                let transcript = round.play(index)?;

                writeln!(out, "Your move: {}", transcript.user_move)?;
                writeln!(out, "Computer selected: {}", transcript.computer_move)?;
                writeln!(out, "Original computer key: {}", transcript.key)?;
                writeln!(out, "Result: You {}!", transcript.outcome)?;

                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&transcript)?)?;
                }

                info!(round_id = %transcript.round_id, outcome = %transcript.outcome, "Round finished");
                return Ok(());
            }
        }
    }
}
