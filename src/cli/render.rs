//! Text rendering of picker views.

use std::fmt::Write;

use colored::Colorize;
use picker_core::SelectedItemIds;
use picker_domain::ViewRow;

const SELECTED_MARK: &str = "[x]";
const UNSELECTED_MARK: &str = "[ ]";

/// Renders view rows one per line: headers as `== Title ==`, items as
/// `  [x] Name (id)` with a `(hidden)` suffix for hidden items.
pub fn render_rows(rows: &[ViewRow], selected: &SelectedItemIds, color: bool) -> String {
    let mut out = String::new();
    for row in rows {
        let line = match row {
            ViewRow::Header { title } => {
                let header = format!("== {} ==", title);
                if color {
                    header.bold().to_string()
                } else {
                    header
                }
            }
            ViewRow::Item(item) => {
                let is_selected = selected.contains(&item.id);
                let mark = if is_selected {
                    SELECTED_MARK
                } else {
                    UNSELECTED_MARK
                };
                let mut line = format!("  {} {} ({})", mark, item.name, item.id);
                if item.hidden {
                    line.push_str(" (hidden)");
                }
                match (color, is_selected, item.hidden) {
                    (false, _, _) => line,
                    (true, true, _) => line.bright_green().to_string(),
                    (true, false, true) => line.dimmed().to_string(),
                    (true, false, false) => line,
                }
            }
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

/// Counts the item rows of a view.
pub fn item_count(rows: &[ViewRow]) -> usize {
    rows.iter().filter(|row| !row.is_header()).count()
}
