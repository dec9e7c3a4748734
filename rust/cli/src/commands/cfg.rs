//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! configuration settings with their sources (default, environment, or
//! configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "packs": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "packs": {
            "value": config.packs,
            "source": sources.packs,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            std::env::remove_var("BLACKJACK_CONFIG");
            std::env::remove_var("BLACKJACK_SEED");
            std::env::remove_var("BLACKJACK_PACKS");
        }
    }

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        clear_env();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let _json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");

        assert!(output.contains("packs"));
        assert!(output.contains("rounds"));
        assert!(output.contains("seed"));
        assert!(output.contains("value"));
        assert!(output.contains("source"));
    }

    #[test]
    #[serial]
    fn test_cfg_reports_env_source() {
        clear_env();
        unsafe {
            std::env::set_var("BLACKJACK_SEED", "17");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_cfg_command(&mut out, &mut err).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("\"env\""));
        assert!(output.contains("17"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cfg_fails_on_invalid_env() {
        clear_env();
        unsafe {
            std::env::set_var("BLACKJACK_PACKS", "0");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        assert!(matches!(result, Err(CliError::Config(_))));
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Invalid configuration"));
        clear_env();
    }
}
