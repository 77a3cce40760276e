//! Rank command handler: evaluate 5 to 7 cards given on the command line.

use crate::error::CliError;
use crate::ui::format_cards;
use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate_cards;
use std::io::Write;

/// Accepts cards as separate arguments or one quoted string
/// (`rank As Kd 10h Jc Qs` or `rank "As Kd 10h Jc Qs"`).
pub fn handle_rank_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" ")).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut unique = cards.clone();
    unique.sort();
    unique.dedup();
    if unique.len() != cards.len() {
        return Err(CliError::InvalidInput("duplicate card".into()));
    }

    let hand = evaluate_cards(&cards)?;
    writeln!(out, "Hand: {}", hand.describe())?;
    writeln!(out, "Cards: {}", format_cards(&hand.cards))?;
    writeln!(out, "Tiebreak: {}", hand.tiebreak)?;
    Ok(())
}
