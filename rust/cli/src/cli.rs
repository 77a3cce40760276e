//! Command-line definitions for the `holdem` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "holdem",
    version,
    about = "Headless driver for the multi-way Texas Hold'em engine"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play AI-only hands at one table and report the results
    Sim {
        /// Number of hands to play
        #[arg(long, default_value_t = 100)]
        hands: u64,
        /// Seed for shuffles and AI decisions
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats (2-10)
        #[arg(long)]
        seats: Option<usize>,
    },
    /// Deal one hand and show the hole cards
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        seats: Option<usize>,
    },
    /// Evaluate 5 to 7 cards, e.g. `rank As Kd 10h Jc Qs`
    Rank {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
