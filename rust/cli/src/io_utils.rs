//! Input helpers for interactive commands.
//!
//! Reading a prompt response is the only suspension point in the whole
//! program; everything else is synchronous in-memory work.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input and returns `None` on EOF or read
/// errors.
///
/// # Arguments
///
/// * `stdin` - Buffered reader to read from (typically stdin)
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or read error occurred
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}
