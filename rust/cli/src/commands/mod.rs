//! Command handlers for the `holdem` CLI.
//!
//! Each subcommand lives in its own module and exposes one
//! `handle_COMMAND_command(...) -> Result<(), CliError>` function. Output
//! streams are passed in as `&mut dyn Write` so tests can capture them.

pub mod cfg;
pub mod deal;
pub mod rank;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;
