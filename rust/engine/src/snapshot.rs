use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandResult;
use crate::player::{ActionKind, Player};
use crate::table::Phase;

/// Read-only view of one seat.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub name: String,
    pub chips: u32,
    pub hole_cards: Vec<Card>,
    pub current_bet: u32,
    pub is_folded: bool,
    pub is_all_in: bool,
    pub is_dealer: bool,
    pub sitting_out: bool,
}

impl From<&Player> for SeatView {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name().to_string(),
            chips: p.chips(),
            hole_cards: p.hole_cards().to_vec(),
            current_bet: p.current_bet(),
            is_folded: p.is_folded(),
            is_all_in: p.is_all_in(),
            is_dealer: p.is_dealer(),
            sitting_out: p.is_sitting_out(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub seat_index: usize,
    /// Absent when the pot was won uncontested before five cards were out.
    pub hand: Option<HandResult>,
    pub amount_won: u32,
}

/// How the last pot was settled.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WinnerInfo {
    /// Pot size at settlement; equals the sum of `amount_won`.
    pub pot: u32,
    pub winners: Vec<Winner>,
}

/// Everything a driver may read about the table after a state change.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub phase: Phase,
    /// Chips swept from finished streets
    pub pot: u32,
    pub current_bet: u32,
    pub big_blind: u32,
    pub community_cards: Vec<Card>,
    /// `None` once no seat is left to act
    pub active_player_index: Option<usize>,
    pub dealer_index: usize,
    pub players: Vec<SeatView>,
    /// Legal actions for the active seat
    pub available_actions: Vec<ActionKind>,
    pub winner_info: Option<WinnerInfo>,
}

impl TableSnapshot {
    /// Swept pot plus everything wagered on the current street.
    pub fn total_pot(&self) -> u32 {
        self.pot + self.players.iter().map(|p| p.current_bet).sum::<u32>()
    }

    pub fn call_amount(&self, seat: usize) -> u32 {
        self.players
            .get(seat)
            .map_or(0, |p| self.current_bet.saturating_sub(p.current_bet))
    }

    /// Copy of the snapshot as seen from `seat`: other seats' hole cards are
    /// hidden until showdown.
    pub fn redacted_for(&self, seat: usize) -> TableSnapshot {
        let mut view = self.clone();
        if self.phase != Phase::Showdown {
            for (i, p) in view.players.iter_mut().enumerate() {
                if i != seat {
                    p.hole_cards.clear();
                }
            }
        }
        view
    }
}
