use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandResult;

/// Action kinds offered to the seat to act, without amounts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

/// A player action during a betting round.
///
/// `Bet` and `Raise` carry the seat's target total wager for the street,
/// not the increment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Match the table's current bet
    Call,
    /// Open the betting to the given total
    Bet(u32),
    /// Raise the table's current bet to the given total
    Raise(u32),
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }
}

/// Per-seat state. Only the table mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) chips: u32,
    pub(crate) hole_cards: Vec<Card>,
    /// Chips wagered on the current street, not yet swept into the pot.
    pub(crate) current_bet: u32,
    pub(crate) is_folded: bool,
    pub(crate) is_all_in: bool,
    pub(crate) is_dealer: bool,
    pub(crate) has_acted: bool,
    /// Seat had no chips when the hand started and was dealt out.
    pub(crate) sitting_out: bool,
    pub(crate) hand: Option<HandResult>,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            hole_cards: Vec::with_capacity(2),
            current_bet: 0,
            is_folded: false,
            is_all_in: false,
            is_dealer: false,
            has_acted: false,
            sitting_out: false,
            hand: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn is_folded(&self) -> bool {
        self.is_folded
    }
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }
    pub fn is_dealer(&self) -> bool {
        self.is_dealer
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn is_sitting_out(&self) -> bool {
        self.sitting_out
    }
    pub fn hand(&self) -> Option<&HandResult> {
        self.hand.as_ref()
    }

    /// Still holding cards: not folded and not dealt out.
    pub fn in_hand(&self) -> bool {
        !self.is_folded && !self.sitting_out
    }

    pub fn can_act(&self) -> bool {
        self.in_hand() && !self.is_all_in
    }

    /// Clears per-hand state. Chips carry over; a seat without chips sits
    /// the hand out.
    pub(crate) fn reset_for_new_hand(&mut self) {
        self.hole_cards.clear();
        self.current_bet = 0;
        self.is_all_in = false;
        self.is_dealer = false;
        self.has_acted = false;
        self.hand = None;
        self.sitting_out = self.chips == 0;
        self.is_folded = self.sitting_out;
    }

    pub(crate) fn reset_for_new_street(&mut self) {
        self.current_bet = 0;
        self.has_acted = false;
    }

    /// Moves up to `amount` chips from the stack into the street wager and
    /// returns what was actually wagered. Exhausting the stack marks the
    /// seat all-in.
    pub(crate) fn bet(&mut self, amount: u32) -> u32 {
        let wagered = amount.min(self.chips);
        self.chips -= wagered;
        self.current_bet += wagered;
        if self.chips == 0 && !self.sitting_out {
            self.is_all_in = true;
        }
        wagered
    }

    /// Table chips never exceed `u32::MAX`; `TableConfig::validate` bounds
    /// the total.
    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.chips += amount;
    }

    /// Takes the street wager off the seat for sweeping into the pot.
    pub(crate) fn take_current_bet(&mut self) -> u32 {
        std::mem::take(&mut self.current_bet)
    }
}
