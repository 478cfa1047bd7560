//! Move menu and selection parsing.

use fairplay_core::DominanceEngine;

/// What the user typed at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Help,
    /// Zero-based move index
    Move(usize),
    Invalid,
}

/// Menu entries are numbered from 1; `0` exits and `?` shows the help table.
pub fn parse_selection(input: &str, move_count: usize) -> Selection {
    match input.trim() {
        "?" => Selection::Help,
        "0" => Selection::Exit,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=move_count).contains(&n) => Selection::Move(n - 1),
            _ => Selection::Invalid,
        },
    }
}

pub fn menu_lines(engine: &DominanceEngine) -> Vec<String> {
    let mut lines = vec!["Choose your move:".to_string()];
    lines.extend(
        engine
            .all_moves()
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("{} - {}", i + 1, mv)),
    );
    lines.push("0 - Exit".to_string());
    lines.push("? - Help".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_selection("1", 3), Selection::Move(0));
        assert_eq!(parse_selection(" 3\n", 3), Selection::Move(2));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_selection("0", 3), Selection::Exit);
        assert_eq!(parse_selection("?", 3), Selection::Help);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_selection("4", 3), Selection::Invalid);
        assert_eq!(parse_selection("-1", 3), Selection::Invalid);
        assert_eq!(parse_selection("rock", 3), Selection::Invalid);
        assert_eq!(parse_selection("", 3), Selection::Invalid);
        assert_eq!(parse_selection("2abc", 3), Selection::Invalid);
    }

    #[test]
    fn test_menu_lines() {
        let engine = DominanceEngine::new(["Rock", "Paper", "Scissors"]).unwrap();
        let lines = menu_lines(&engine);

        assert_eq!(
            lines,
            vec![
                "Choose your move:",
                "1 - Rock",
                "2 - Paper",
                "3 - Scissors",
                "0 - Exit",
                "? - Help",
            ]
        );
    }
}
