//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface
//! output across CLI commands, including error messages and the re-prompt
//! hint shown after invalid menu input.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Preamble printed before the hint whenever a prompt response fails to
/// parse.
pub const INVALID_INPUT_PREAMBLE: &str = "Oops! There seems to be a problem.";

/// Build the re-prompt hint listing every menu choice by position:
/// "Please enter 1 for 'Yes' or 2 for 'No'.".
pub fn invalid_choice_hint(labels: &[&str]) -> String {
    if labels.is_empty() {
        return "Input error. Please try again.".to_string();
    }
    let mut message = String::new();
    for (i, label) in labels.iter().enumerate() {
        if i == 0 {
            message.push_str(&format!("Please enter {} for '{}'", i + 1, label));
        } else {
            message.push_str(&format!(" or {} for '{}'", i + 1, label));
        }
    }
    message.push('.');
    message
}
