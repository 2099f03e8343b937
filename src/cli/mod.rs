//! Command-line interface.

pub mod commands;
pub mod display;
pub mod types;

use colored::Colorize;

pub use types::{Cli, Commands};

/// Report a failed command and exit with status 1.
///
/// In JSON mode the error goes to stdout as `{"success": false, "error": ...}`
/// so scripts can parse it; otherwise the full cause chain goes to stderr.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{} {}", "Error:".red().bold(), err);
        for cause in err.chain().skip(1) {
            eprintln!("  {} {}", "caused by:".dimmed(), cause);
        }
    }
    std::process::exit(1);
}
