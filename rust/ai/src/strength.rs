//! Hand-strength estimate in `[0, 1]`.
//!
//! With five or more cards visible the estimate comes from the made hand:
//! each category owns a band and the tiebreak places the hand inside it, so
//! a better `(category, tiebreak)` always scores higher. Before the flop
//! only the two hole cards are known and a card-quality heuristic is used.

use holdem_engine::cards::Card;
use holdem_engine::hand::{rank_cards, Category};

/// Lower edge of each category's band, indexed by category. The band ends
/// where the next one starts.
const BAND_FLOOR: [f64; 10] = [0.0, 0.2, 0.45, 0.6, 0.7, 0.78, 0.86, 0.93, 0.98, 1.0];

pub fn hand_strength(hole_cards: &[Card], community_cards: &[Card]) -> f64 {
    if hole_cards.len() < 2 {
        return 0.0;
    }
    let mut cards = hole_cards.to_vec();
    cards.extend_from_slice(community_cards);
    match rank_cards(&cards) {
        Ok((category, tiebreak)) => made_hand_strength(category, tiebreak),
        Err(_) => preflop_strength(hole_cards[0], hole_cards[1]),
    }
}

pub fn made_hand_strength(category: Category, tiebreak: u32) -> f64 {
    let idx = category as usize;
    let (lo, hi) = (BAND_FLOOR[idx], BAND_FLOOR[idx + 1]);
    let within = f64::from(tiebreak) / f64::from(category.tiebreak_ceiling());
    lo + (hi - lo) * within.min(1.0)
}

/// High cards, pairs, suitedness and connectedness, capped at 1.
pub fn preflop_strength(a: Card, b: Card) -> f64 {
    let (va, vb) = (a.value(), b.value());
    let mut s = f64::from(va + vb) / 28.0;
    if va == vb {
        s += 0.5;
    }
    if a.suit == b.suit {
        s += 0.2;
    }
    if va.abs_diff(vb) == 1 {
        s += 0.1;
    }
    s.min(1.0)
}
