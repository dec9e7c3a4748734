//! # Blackjack CLI Library
//!
//! This library provides the command-line interface for the blackjack
//! engine: an interactive single-player game against a scripted dealer.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["blackjack", "deal", "--seed", "42"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play an interactive session against the dealer
//! - `deal`: Deal one round for inspection without playing it
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["blackjack", "deal", "--seed", "42"];
/// let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = BlackjackCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Blackjack CLI").is_err()
                        || writeln!(err, "Usage: blackjack <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: blackjack --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => exit_from(handle_cfg_command(out, err), err),
            Commands::Deal { seed, packs } => {
                exit_from(handle_deal_command(seed, packs, out), err)
            }
            Commands::Play {
                rounds,
                seed,
                packs,
                log,
            } => {
                // Scripted input hook for tests; real stdin otherwise
                // (supports both TTY and piped stdin)
                if let Ok(script) = std::env::var("BLACKJACK_TEST_INPUT") {
                    let mut cursor = std::io::Cursor::new(script.into_bytes());
                    exit_from(
                        handle_play_command(rounds, seed, packs, log, out, err, &mut cursor),
                        err,
                    )
                } else {
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    exit_from(
                        handle_play_command(rounds, seed, packs, log, out, err, &mut stdin_lock),
                        err,
                    )
                }
            }
        },
    }
}

/// Map a handler result to a process exit code, reporting errors on the way.
fn exit_from(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
