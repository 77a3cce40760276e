//! Simulation command handler: AI-only play at a single table.
//!
//! Every seat is driven by a [`PersonalityAI`]. Seat 0 plays the default
//! personality and the others take the presets in seat order. Each AI only
//! sees its own hole cards until showdown. After every hand the table's
//! chip total is checked against the starting total.
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//! let code = holdem_cli::run(
//!     ["holdem", "sim", "--hands", "100", "--seed", "42"],
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use crate::ui::join_names;
use holdem_ai::{AIOpponent, Personality, PersonalityAI};
use holdem_engine::errors::GameError;
use holdem_engine::snapshot::WinnerInfo;
use holdem_engine::table::{Phase, Table};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Offset between the shuffle seed and the seed for AI decisions, so the two
/// streams differ while both follow from one `--seed`.
const DECISION_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Plays up to `hands` hands and prints one summary line per hand followed
/// by the final stacks. Stops early when only one seat has chips left.
pub fn handle_sim_command(
    hands: u64,
    resolved: ConfigResolved,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let mut config = resolved.config;
    let seed = *config.seed.get_or_insert_with(rand::random);
    tracing::info!(seed, seats = config.seats, hands, sources = ?resolved.sources, "simulation starting");

    let mut table = Table::init_game(config)?;
    let seats: Vec<PersonalityAI> = (0..table.players().len())
        .map(|i| {
            let personality = if i == 0 {
                Personality::default()
            } else {
                Personality::for_seat(i)
            };
            PersonalityAI::new(table.players()[i].name(), personality)
        })
        .collect();
    let mut decisions = ChaCha20Rng::seed_from_u64(seed.wrapping_add(DECISION_SEED_OFFSET));
    let total_chips = table.total_chips();

    writeln!(out, "Seed: {}", seed)?;
    let mut played = 0u64;
    loop {
        while let Some(seat) = table.current_player_index() {
            let view = table.snapshot().redacted_for(seat);
            let action = seats[seat].get_action(&view, seat, &mut decisions);
            table.player_action(action)?;
        }
        played += 1;

        if table.total_chips() != total_chips {
            return Err(CliError::Invariant(format!(
                "hand {}: table holds {} chips, expected {}",
                played,
                table.total_chips(),
                total_chips
            )));
        }
        if let Some(info) = table.winner_info() {
            writeln!(out, "Hand {}: {}", played, summarize(&table, info))?;
        }

        if played >= hands {
            break;
        }
        match table.start_new_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers { .. }) => {
                writeln!(out, "Game over: one seat holds every chip")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(out, "Simulated: {} hands", played)?;
    writeln!(out, "Final stacks:")?;
    for (p, ai) in table.players().iter().zip(&seats) {
        writeln!(out, "  {}: {} ({})", p.name(), p.chips(), describe(ai.personality()))?;
    }
    Ok(())
}

fn summarize<R>(table: &Table<R>, info: &WinnerInfo) -> String {
    let names: Vec<&str> = info
        .winners
        .iter()
        .map(|w| table.players()[w.seat_index].name())
        .collect();
    let verb = if names.len() > 1 { "split" } else { "wins" };
    let label = info
        .winners
        .first()
        .and_then(|w| w.hand.as_ref())
        .filter(|_| table.phase() == Phase::Showdown)
        .map_or("uncontested", |h| h.describe());
    format!("{} {} {} ({})", join_names(&names), verb, info.pot, label)
}

fn describe(p: &Personality) -> String {
    Personality::PRESETS
        .iter()
        .find(|(_, preset)| preset == p)
        .map_or_else(
            || format!("aggr {:.2}, bluff {:.2}", p.aggressiveness, p.bluff_frequency),
            |(name, _)| name.to_string(),
        )
}
