//! Clap command-line definitions for the `blackjack` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "blackjack",
    version,
    about = "Single-player Blackjack against a scripted dealer"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session against the dealer
    Play {
        /// Number of rounds to play from one shoe
        #[arg(long)]
        rounds: Option<u32>,
        /// RNG seed for the shoe shuffle (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of 52-card packs in the shoe
        #[arg(long)]
        packs: Option<u32>,
        /// Append JSONL round records to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one round for inspection without playing it
    Deal {
        /// RNG seed for the shoe shuffle (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of 52-card packs in the shoe
        #[arg(long)]
        packs: Option<u32>,
    },
    /// Show resolved configuration values and their sources
    Cfg,
}
