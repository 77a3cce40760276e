//! Deal command handler: start one hand and show who holds what.

use crate::config::ConfigResolved;
use crate::error::CliError;
use crate::ui::format_cards;
use holdem_engine::table::Table;
use std::io::Write;

/// Deals the first hand of a fresh table and prints the dealer, the blinds
/// posted, every seat's hole cards and the seat to act. A missing seed is
/// drawn at random and printed so the deal can be repeated.
pub fn handle_deal_command(resolved: ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let mut config = resolved.config;
    let seed = *config.seed.get_or_insert_with(rand::random);
    let table = Table::init_game(config)?;

    let players = table.players();
    writeln!(out, "Seed: {}", seed)?;
    if let Some(dealer) = table.dealer_index() {
        writeln!(out, "Dealer: {}", players[dealer].name())?;
    }
    for blind in &table.history().blinds {
        writeln!(out, "Blind: {} posts {}", players[blind.seat].name(), blind.amount)?;
    }
    for p in players {
        writeln!(out, "Hole {}: {}", p.name(), format_cards(p.hole_cards()))?;
    }
    if let Some(p) = table.current_player() {
        writeln!(out, "To act: {} ({} to call)", p.name(), table.call_amount())?;
    }
    Ok(())
}
