//! # holdem-engine: Texas Hold'em table engine
//!
//! A deterministic multi-way (2-10 seats) No-Limit Hold'em table. It tracks
//! chips, deals from a seeded deck, runs the street-by-street betting state
//! machine and settles a single pot at showdown.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - 52-card deck with injectable shuffling
//! - [`player`] - Seat state and player actions
//! - [`hand`] - Best-five-of-seven hand ranking
//! - [`rules`] - Legal actions and wager clamping
//! - [`table`] - The betting state machine
//! - [`snapshot`] - Read-only view handed to drivers and AI seats
//! - [`history`] - In-memory record of the current hand
//! - [`config`] - Table configuration
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::player::PlayerAction;
//! use holdem_engine::table::{Phase, Table};
//!
//! let config = TableConfig { seed: Some(42), ..TableConfig::with_seats(3) };
//! let mut table = Table::init_game(config).unwrap();
//! assert_eq!(table.phase(), Phase::Preflop);
//!
//! // everyone folds to the big blind
//! table.player_action(PlayerAction::Fold).unwrap();
//! table.player_action(PlayerAction::Fold).unwrap();
//! assert_eq!(table.phase(), Phase::GameOver);
//! assert_eq!(table.winner_info().unwrap().pot, 30);
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let hole = parse_cards("As Ks").unwrap();
//! let board = parse_cards("Qs Js 10s 2d 3c").unwrap();
//! let best = evaluate_hand(&hole, &board).unwrap();
//! assert_eq!(best.category, Category::StraightFlush);
//! assert_eq!(best.describe(), "Royal Flush");
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod history;
pub mod player;
pub mod rules;
pub mod snapshot;
pub mod table;
