//! # holdem CLI library
//!
//! A headless driver for the engine: AI-only simulation, single deals,
//! hand ranking and configuration inspection.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand, writing to the streams it is given.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "rank", "As", "Ks", "Qs", "Js", "10s"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```
//!
//! ## Subcommands
//!
//! - `sim --hands N [--seed S] [--seats K]`: AI-only play at one table
//! - `deal [--seed S] [--seats K]`: deal one hand and show the hole cards
//! - `rank CARDS...`: evaluate 5 to 7 cards
//! - `cfg`: show the resolved configuration with value sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_deal_command, handle_rank_command, handle_sim_command};

pub use error::CliError;

/// Parses `args` (program name first) and runs the subcommand.
///
/// Returns [`exit_code::SUCCESS`] on success and [`exit_code::ERROR`] for
/// usage errors and failed commands. Help and version go to `out`, errors
/// to `err`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Rank { cards } => handle_rank_command(&cards, out),
        Commands::Deal { seed, seats } => {
            resolve(seats, seed).and_then(|r| handle_deal_command(r, out))
        }
        Commands::Sim { hands, seed, seats } => {
            resolve(seats, seed).and_then(|r| handle_sim_command(hands, r, out))
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn resolve(seats: Option<usize>, seed: Option<u64>) -> Result<config::ConfigResolved, CliError> {
    Ok(config::load_with_sources()?.with_flags(seats, seed)?)
}
