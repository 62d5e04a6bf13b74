//! Formatting utilities used for CLI output.

/// Width of the label column in the status block.
pub const LABEL_WIDTH: usize = 22;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// "Label:" padded to the label column, followed by the value.
pub fn label_line(label: &str, value: &str) -> String {
    format!("{}{}", pad_right(&format!("{label}:"), LABEL_WIDTH), value)
}

pub fn separator(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Show a raw input value, or a dash placeholder when it is blank.
pub fn raw_or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() { "--" } else { value.trim() }
}
