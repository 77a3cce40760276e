use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerAction;
use crate::snapshot::WinnerInfo;
use crate::table::Phase;

/// A forced blind wager posted at the start of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlindPost {
    pub seat: usize,
    /// What was actually posted; less than the blind when the stack ran out.
    pub amount: u32,
}

/// Records a single applied action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    /// The street the action was taken on
    pub phase: Phase,
    /// The action after clamping: bet and raise totals are the ones applied.
    pub action: PlayerAction,
    /// Chips moved from the stack by this action
    pub wagered: u32,
}

/// In-memory record of one hand, kept until the next hand starts.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// 1-based count of hands started at this table
    pub hand_number: u64,
    pub dealer: usize,
    pub blinds: Vec<BlindPost>,
    /// Chronological list of actions
    pub actions: Vec<ActionRecord>,
    /// Community cards dealt so far
    pub board: Vec<Card>,
    /// Settlement, once the hand is over
    #[serde(default)]
    pub result: Option<WinnerInfo>,
}

impl HandRecord {
    pub(crate) fn new(hand_number: u64, dealer: usize) -> Self {
        Self {
            hand_number,
            dealer,
            ..Self::default()
        }
    }

    pub fn actions_on(&self, phase: Phase) -> impl Iterator<Item = &ActionRecord> {
        self.actions.iter().filter(move |a| a.phase == phase)
    }
}
