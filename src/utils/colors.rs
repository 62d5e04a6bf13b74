//! ANSI color helper utilities for terminal output.

use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Status color:
/// not started → blue
/// in progress → yellow
/// finished → green
pub fn color_for_status(status: &Status) -> &'static str {
    match status {
        Status::NotStarted => BLUE,
        Status::InProgress { .. } => YELLOW,
        Status::Finished => GREEN,
    }
}

/// Wrap `value` in `color` unless color output is disabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Colors only work when stdout is a terminal and NO_COLOR is unset.
pub fn colors_enabled() -> bool {
    use std::io::IsTerminal;
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
