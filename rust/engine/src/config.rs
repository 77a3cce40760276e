use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Largest table the engine deals to. Even at this size a hand draws at most
/// 2*10 hole cards + 5 board cards + 3 burns from the 52-card deck.
pub const MAX_SEATS: usize = 10;

/// Table setup: seat count, stacks, blinds and an optional shuffle seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub seats: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: 4,
            starting_stack: 1_000,
            small_blind: 10,
            big_blind: 20,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn with_seats(seats: usize) -> Self {
        Self {
            seats,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(2..=MAX_SEATS).contains(&self.seats) {
            return Err(GameError::InvalidSeatCount { seats: self.seats });
        }
        if self.small_blind == 0 {
            return Err(GameError::InvalidConfig(
                "small_blind must be >0".into(),
            ));
        }
        if self.big_blind < self.small_blind {
            return Err(GameError::InvalidConfig(
                "big_blind must be >= small_blind".into(),
            ));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting_stack must be >0".into(),
            ));
        }
        // Every chip on the table, including a full pot, is counted in u32.
        let table_chips = (self.seats as u64).saturating_mul(u64::from(self.starting_stack));
        if table_chips > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(
                "seats * starting_stack must fit in u32".into(),
            ));
        }
        Ok(())
    }
}
