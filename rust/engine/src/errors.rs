use thiserror::Error;

use crate::player::ActionKind;

/// Every way an engine call can be refused.
///
/// Rejected actions leave the table exactly as it was; the error only
/// tells the driver why nothing happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Seat {seat} cannot act (folded or all-in)")]
    SeatCannotAct { seat: usize },
    #[error("Action {action:?} is not legal right now")]
    IllegalAction { action: ActionKind },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("A hand is still in progress")]
    HandInProgress,
    #[error("Need at least two seats with chips, found {funded}")]
    NotEnoughPlayers { funded: usize },
    #[error("Invalid seat count: {seats}")]
    InvalidSeatCount { seats: usize },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Need at least 5 cards to evaluate a hand, got {count}")]
    NotEnoughCards { count: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}
