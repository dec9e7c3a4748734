//! Deal command handler for single-round dealing and display.
//!
//! This module provides the `deal` command which deals one round from a
//! fresh shoe and shows both hands without playing the round out. The
//! command supports optional seeding for deterministic dealing.

use std::io::Write;

use blackjack_engine::round::{Outcome, Phase, Round};
use blackjack_engine::shoe::Shoe;

use crate::error::CliError;
use crate::formatters::{format_hand, format_up_card};

/// Handle the deal command.
///
/// Deals one round (2 cards each, player first) and displays both hands,
/// the dealer's up-card as the player would see it, and whether the deal
/// already resolved the round.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `packs` - Number of packs in the shoe (default 1)
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O or engine errors.
pub fn handle_deal_command(
    seed: Option<u64>,
    packs: Option<u32>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let packs = packs.unwrap_or(1);
    if packs == 0 {
        return Err(CliError::InvalidInput("packs must be >= 1".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut shoe = Shoe::new(packs, seed)?;
    let round = Round::deal(&mut shoe)?;

    writeln!(out, "deal: packs={} seed={}", packs, seed)?;
    writeln!(out, "Player: {}", format_hand(round.player()))?;
    writeln!(out, "Dealer: {}", format_hand(round.dealer()))?;
    writeln!(
        out,
        "Up-card: {}",
        format_up_card(&round.dealer().cards()[0])
    )?;
    match round.phase() {
        Phase::Resolved(Outcome::PlayerWins) => {
            writeln!(out, "Resolved: player blackjack")?;
        }
        _ => writeln!(out, "To act: player")?,
    }
    Ok(())
}
