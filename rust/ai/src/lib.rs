//! # holdem-ai: computer opponents
//!
//! AI seats read a [`TableSnapshot`] and answer with a [`PlayerAction`]
//! that is legal for the seat to act.
//!
//! - [`Personality`]: aggressiveness and bluff frequency, with named presets
//! - [`strength`]: hand-strength estimate in `[0, 1]`
//! - [`decide`]: the decision function
//! - [`AIOpponent`] and [`create_ai`]: a seat-level interface for drivers
//!
//! ## Quick start
//!
//! ```rust
//! use holdem_ai::{create_ai, AIOpponent};
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::table::Table;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut table = Table::init_game(TableConfig {
//!     seed: Some(42),
//!     ..TableConfig::default()
//! })
//! .unwrap();
//! let ai = create_ai("tight-aggressive").unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//!
//! let seat = table.current_player_index().unwrap();
//! let action = ai.get_action(&table.snapshot(), seat, &mut rng);
//! assert!(table.player_actions().contains(&action.kind()));
//! table.player_action(action).unwrap();
//! ```

use holdem_engine::player::PlayerAction;
use holdem_engine::snapshot::TableSnapshot;
use rand::RngCore;

pub mod personality;
pub mod policy;
pub mod strength;

pub use personality::Personality;
pub use policy::decide;

/// A computer player that can be seated at a table.
///
/// Implementors must only return actions listed in the snapshot's
/// `available_actions`.
pub trait AIOpponent: Send + Sync {
    /// Chooses the next action for `seat`. Randomness (bluffs, loose bets)
    /// is drawn from `rng` so games replay under a fixed seed.
    fn get_action(&self, snapshot: &TableSnapshot, seat: usize, rng: &mut dyn RngCore) -> PlayerAction;

    fn name(&self) -> &str;
}

/// An opponent driven by [`decide`] with a fixed [`Personality`].
#[derive(Debug, Clone)]
pub struct PersonalityAI {
    name: String,
    personality: Personality,
}

impl PersonalityAI {
    pub fn new(name: impl Into<String>, personality: Personality) -> Self {
        Self {
            name: name.into(),
            personality,
        }
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }
}

impl AIOpponent for PersonalityAI {
    fn get_action(&self, snapshot: &TableSnapshot, seat: usize, rng: &mut dyn RngCore) -> PlayerAction {
        decide(snapshot, seat, &self.personality, rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Creates an opponent from a preset name such as `"loose-passive"`.
/// Returns `None` for names that are not presets.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// assert_eq!(create_ai("UNPREDICTABLE").unwrap().name(), "unpredictable");
/// assert!(create_ai("fish").is_none());
/// ```
pub fn create_ai(name: &str) -> Option<Box<dyn AIOpponent>> {
    let personality = Personality::preset(name)?;
    let canonical = Personality::PRESETS
        .iter()
        .find(|(_, p)| *p == personality)
        .map_or(name, |(n, _)| *n);
    Some(Box::new(PersonalityAI::new(canonical, personality)))
}
