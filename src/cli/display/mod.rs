//! Display framework for CLI output formatting.
//!
//! Shared primitives for colors, tables, and the human/JSON output switch.

pub mod colors;
pub mod table;

use serde::Serialize;

pub use colors::*;
pub use table::*;

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Render a success action result.
pub fn action_success(message: &str) -> String {
    use colored::Colorize;
    format!("{} {}", "\u{2713}".green().bold(), message)
}

/// Render a failure action result.
pub fn action_failure(message: &str) -> String {
    use colored::Colorize;
    format!("{} {}", "\u{2717}".red().bold(), message)
}

/// Truncate a string to at most `max_len` characters, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
