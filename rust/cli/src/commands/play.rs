//! # Play Command
//!
//! The interactive Blackjack session: one shoe, one or more rounds of the
//! human player against the scripted dealer.
//!
//! The command drives the engine's round state machine from the outside:
//! every prompt is a numbered menu, invalid input re-presents the same
//! decision point without touching round state, and the dealer's turn is
//! narrated one step at a time. Domain failures (an exhausted shoe, a
//! malformed hand) are fatal and end the session with an error; they are
//! never retried.

use std::io::{BufRead, Write};

use blackjack_engine::logger::{RoundLogger, RoundRecord};
use blackjack_engine::round::{DealerStep, Outcome, Phase, PlayerChoice, Round};
use blackjack_engine::shoe::Shoe;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_standoff, format_up_card};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_menu_choice};

const PLAY_LABELS: [&str; 2] = ["Yes", "No"];
const TURN_LABELS: [&str; 3] = ["Stand/Stick", "Hit/Twist", "Quit Game"];

/// Handle the play command: an interactive Blackjack session.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play from one shoe (default: config)
/// * `seed` - RNG seed for the shoe shuffle (default: config, else random)
/// * `packs` - Number of 52-card packs in the shoe (default: config)
/// * `log` - Optional JSONL file receiving one record per resolved round
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for menu responses
///
/// # Returns
///
/// * `Ok(())` when the session ran to completion or the user declined/quit
/// * `Err(CliError)` on invalid arguments, configuration failures, I/O
///   errors, or a fatal engine error (e.g. the shoe running out mid-round)
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    packs: Option<u32>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?
        .config;
    let rounds = rounds.unwrap_or(cfg.rounds);
    let packs = packs.unwrap_or(cfg.packs);
    let seed = seed.or(cfg.seed);

    execute_play_command(rounds, seed, packs, log, stdin, out, err)
}

/// Core session loop (module-private helper).
fn execute_play_command(
    rounds: u32,
    seed: Option<u64>,
    packs: u32,
    log: Option<String>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if packs == 0 {
        ui::write_error(err, "packs must be >= 1")?;
        return Err(CliError::InvalidInput("packs must be >= 1".to_string()));
    }

    let seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "play: rounds={} packs={} seed={}", rounds, packs, seed)?;

    match prompt_menu(out, stdin, "Would you like to play Blackjack?", &PLAY_LABELS)? {
        Some(1) => writeln!(out, "\nLet's play Blackjack!")?,
        // declined, or EOF before the session even started
        _ => {
            writeln!(out, "\nGoodbye!")?;
            return Ok(());
        }
    }

    // one shoe for the whole session; it is never reshuffled or refilled
    let mut shoe = Shoe::new(packs, seed)?;
    let mut logger = match &log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut played = 0u32;
    let mut quit_requested = false;

    for i in 1..=rounds {
        if quit_requested {
            break;
        }
        writeln!(out, "\nRound {}", i)?;
        let mut round = Round::deal(&mut shoe)?;

        // the dealer's second card stays concealed until their turn
        writeln!(
            out,
            "\nThe dealer shows they have a:\n{}",
            format_up_card(&round.dealer().cards()[0])
        )?;
        writeln!(out, "\nYour hand is:\n{}", format_hand(round.player()))?;

        if round.phase() == Phase::Resolved(Outcome::PlayerWins) {
            writeln!(out, "\nBlackjack! You win!")?;
        }

        while round.phase() == Phase::PlayerTurn {
            match prompt_menu(out, stdin, "What would you like to do?", &TURN_LABELS)? {
                Some(1) => {
                    round.apply_choice(PlayerChoice::Stand, &mut shoe)?;
                }
                Some(2) => {
                    round.apply_choice(PlayerChoice::Hit, &mut shoe)?;
                    writeln!(out, "\nThe player hits!")?;
                    writeln!(out, "\nYour hand is:\n{}", format_hand(round.player()))?;
                    match round.phase() {
                        Phase::Resolved(Outcome::PlayerWins) => {
                            writeln!(out, "\nBlackjack! You win!")?;
                        }
                        Phase::Resolved(Outcome::PlayerLoses) => {
                            writeln!(out, "\nBust! You lose!")?;
                        }
                        _ => {}
                    }
                }
                // explicit quit, or EOF at the turn prompt
                _ => {
                    round.apply_choice(PlayerChoice::Quit, &mut shoe)?;
                    writeln!(out, "\nGoodbye!")?;
                }
            }
        }

        while round.phase() == Phase::DealerTurn {
            writeln!(
                out,
                "\nThe dealer's hand is:\n{}",
                format_hand(round.dealer())
            )?;
            writeln!(out, "\nYour hand is:\n{}", format_hand(round.player()))?;
            match round.dealer_step(&mut shoe)? {
                DealerStep::Hit => writeln!(out, "\nThe dealer hits!")?,
                DealerStep::Resolved(outcome) => {
                    if round.dealer().is_blackjack() {
                        writeln!(out, "\nBlackjack! You lose!")?;
                    } else if round.dealer().is_bust() {
                        writeln!(out, "\nThe dealer busts! You win!")?;
                    } else {
                        writeln!(out, "\n{}", format_standoff(outcome))?;
                    }
                }
            }
        }

        let outcome = match round.phase() {
            Phase::Resolved(o) => o,
            // both turn loops above run until the round resolves
            _ => unreachable!("round not resolved after turn loops"),
        };
        played += 1;
        if outcome == Outcome::Abandoned {
            quit_requested = true;
        }

        if let Some(lg) = logger.as_mut() {
            let round_id = lg.next_id();
            lg.write(&RoundRecord {
                round_id,
                seed: Some(seed),
                packs,
                player_cards: round.player().ranks(),
                dealer_cards: round.dealer().ranks(),
                player_value: round.player().value(),
                dealer_value: round.dealer().value(),
                outcome,
                ts: None,
            })?;
        }
    }

    writeln!(out, "\nRounds played: {}", played)?;
    Ok(())
}

/// Print a numbered menu and keep re-prompting until the input parses.
///
/// Invalid input re-presents the same decision point with the positional
/// hint; it never counts as a turn. Returns `None` on EOF.
fn prompt_menu(
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
    question: &str,
    labels: &[&str],
) -> Result<Option<usize>, CliError> {
    loop {
        writeln!(out, "\n{}", question)?;
        for (i, label) in labels.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, label)?;
        }
        out.flush()?;
        let Some(input) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_menu_choice(&input, labels) {
            ParseResult::Choice(n) => return Ok(Some(n)),
            ParseResult::Invalid(hint) => {
                writeln!(out, "\n{}\n{}", ui::INVALID_INPUT_PREAMBLE, hint)?;
            }
        }
    }
}
