//! Color mapping for CLI output.
//!
//! All coloring respects `NO_COLOR` env var automatically via the `colored` crate.

use colored::Colorize;

use crate::domain::models::Field;

/// Returns a colored string for a research field.
pub fn colorize_field(field: Field) -> colored::ColoredString {
    let name = field.as_str();
    match field {
        Field::ComputerScience => name.cyan(),
        Field::Mathematics => name.magenta(),
        Field::Physics => name.blue(),
        Field::Biology => name.green(),
        Field::Finance => name.yellow(),
    }
}

/// Returns a colored paper count; empty categories are dimmed.
pub fn colorize_count(count: usize) -> colored::ColoredString {
    if count == 0 {
        count.to_string().dimmed()
    } else {
        count.to_string().green().bold()
    }
}
