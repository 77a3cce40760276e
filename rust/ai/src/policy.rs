//! The decision function behind every AI seat.

use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::snapshot::TableSnapshot;
use holdem_engine::table::Phase;
use rand::Rng;

use crate::personality::Personality;
use crate::strength::hand_strength;

/// Strength at which a seat facing a wager raises instead of calling.
pub const RAISE_THRESHOLD: f64 = 0.8;
/// Strength above which a seat bets when nobody has.
pub const BET_THRESHOLD: f64 = 0.6;

/// Chooses an action for `seat` from what the snapshot shows.
///
/// The returned action is always one of `snapshot.available_actions`, with
/// a `Bet`/`Raise` amount given as the seat's target total for the street.
/// When the preferred action is not on offer the seat calls, checks or
/// folds, in that order of preference.
pub fn decide<R: Rng + ?Sized>(
    snapshot: &TableSnapshot,
    seat: usize,
    personality: &Personality,
    rng: &mut R,
) -> PlayerAction {
    let Some(me) = snapshot.players.get(seat) else {
        return PlayerAction::Fold;
    };

    let strength = hand_strength(&me.hole_cards, &snapshot.community_cards);
    let call = snapshot.call_amount(seat);
    let pot = snapshot.total_pot();
    let pot_odds = pot_odds(pot, call);

    let bluff = snapshot.phase != Phase::Preflop && roll(rng, personality.bluff_frequency);
    let preferred = if bluff {
        aggressive(snapshot, seat, personality)
    } else if call == 0 {
        if strength > BET_THRESHOLD || roll(rng, personality.aggressiveness) {
            aggressive(snapshot, seat, personality)
        } else {
            PlayerAction::Check
        }
    } else if strength >= RAISE_THRESHOLD {
        aggressive(snapshot, seat, personality)
    } else if strength > pot_odds {
        PlayerAction::Call
    } else {
        PlayerAction::Fold
    };

    let action = legalize(preferred, &snapshot.available_actions);
    tracing::debug!(
        seat,
        strength,
        pot_odds,
        bluff,
        ?preferred,
        ?action,
        "ai decision"
    );
    action
}

/// Share of the pot a call costs: `call / (pot + call)`.
pub fn pot_odds(pot: u32, call: u32) -> f64 {
    if call == 0 {
        return 0.0;
    }
    f64::from(call) / (f64::from(pot) + f64::from(call))
}

/// A bet or raise target: the table's bet plus a pot fraction scaled by
/// aggressiveness, at least a big blind, rounded to 10 chips and capped at
/// everything the seat has.
pub fn wager_target(snapshot: &TableSnapshot, seat: usize, personality: &Personality) -> u32 {
    let Some(me) = snapshot.players.get(seat) else {
        return 0;
    };
    let raw = f64::from(snapshot.total_pot()) * personality.aggressiveness;
    let raise_by = ((raw.max(f64::from(snapshot.big_blind)) / 10.0).round() * 10.0) as u32;
    let all_in = me.current_bet.saturating_add(me.chips);
    snapshot
        .current_bet
        .saturating_add(raise_by)
        .min(all_in)
}

/// True with probability `p`; out-of-range values act as 0 or 1.
fn roll<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random::<f64>() < p
}

fn aggressive(snapshot: &TableSnapshot, seat: usize, personality: &Personality) -> PlayerAction {
    let to = wager_target(snapshot, seat, personality);
    if snapshot.call_amount(seat) == 0 {
        PlayerAction::Bet(to)
    } else {
        PlayerAction::Raise(to)
    }
}

fn legalize(preferred: PlayerAction, available: &[ActionKind]) -> PlayerAction {
    if available.contains(&preferred.kind()) {
        return preferred;
    }
    [
        (ActionKind::Call, PlayerAction::Call),
        (ActionKind::Check, PlayerAction::Check),
    ]
    .into_iter()
    .find(|(kind, _)| available.contains(kind))
    .map_or(PlayerAction::Fold, |(_, action)| action)
}
