//! Help table showing the full outcome relation.

use comfy_table::{presets::UTF8_FULL, Table};
use fairplay_core::DominanceEngine;

/// Rows are the user's move, columns the computer's; cells are the user's
/// result.
pub fn help_table(engine: &DominanceEngine) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["v User \\ PC >".to_string()];
    header.extend(engine.all_moves().iter().cloned());
    table.set_header(header);

    for (mv, row) in engine.rows() {
        let mut cells = vec![mv.to_string()];
        cells.extend(row.iter().map(|outcome| outcome.to_string()));
        table.add_row(cells);
    }

    table
}
