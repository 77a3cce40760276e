//! Best-five-of-seven hand ranking.
//!
//! [`evaluate_hand`] scores every 5-card subset and keeps the best one. It is
//! the reference algorithm. [`rank_cards`] works from rank and suit counts and
//! must produce the same `(Category, tiebreak)` pair, but it skips the subset
//! scan and does not report the contributing cards.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Positional base for tiebreak digits. Must exceed the highest rank value (14).
pub const TIEBREAK_BASE: u32 = 15;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }

    /// Number of base-15 digits in this category's tiebreak score.
    pub fn tiebreak_digits(self) -> u32 {
        match self {
            Category::Straight | Category::StraightFlush => 1,
            Category::FourOfAKind | Category::FullHouse => 2,
            Category::ThreeOfAKind | Category::TwoPair => 3,
            Category::OnePair => 4,
            Category::HighCard | Category::Flush => 5,
        }
    }

    /// Exclusive upper bound of tiebreak scores in this category.
    pub fn tiebreak_ceiling(self) -> u32 {
        TIEBREAK_BASE.pow(self.tiebreak_digits())
    }
}

/// The best 5-card hand found for a seat.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    /// Ranks of the category's groups, then kickers, as base-15 digits.
    pub tiebreak: u32,
    /// The five cards that make the hand, strongest group first.
    pub cards: [Card; 5],
}

impl HandResult {
    pub fn key(&self) -> (Category, u32) {
        (self.category, self.tiebreak)
    }

    pub fn describe(&self) -> &'static str {
        if self.category == Category::StraightFlush && self.tiebreak == 14 {
            "Royal Flush"
        } else {
            self.category.label()
        }
    }
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.key().cmp(&b.key())
}

/// Best hand from a seat's hole cards plus the visible board.
pub fn evaluate_hand(hole_cards: &[Card], community_cards: &[Card]) -> Result<HandResult, GameError> {
    let all: Vec<Card> = hole_cards.iter().chain(community_cards).copied().collect();
    evaluate_cards(&all)
}

/// Scans every 5-card subset of `cards` and keeps the highest one.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandResult, GameError> {
    let n = cards.len();
    if n < 5 {
        return Err(GameError::NotEnoughCards { count: n });
    }

    let mut best: Option<HandResult> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let combo = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let candidate = score_five(&combo);
                        if best.as_ref().is_none_or(|cur| candidate.key() > cur.key()) {
                            best = Some(candidate);
                        }
                    }
                }
            }
        }
    }
    best.ok_or(GameError::NotEnoughCards { count: n })
}

/// Category and tiebreak for exactly five cards.
pub fn score_five(cards: &[Card; 5]) -> HandResult {
    let mut ordered = *cards;
    ordered.sort_unstable_by(|x, y| y.rank.cmp(&x.rank).then(y.suit.cmp(&x.suit)));

    let flush = ordered.iter().all(|c| c.suit == ordered[0].suit);
    let mut values = [0u8; 5];
    for (slot, card) in values.iter_mut().zip(ordered.iter()) {
        *slot = card.value();
    }
    let straight = five_card_straight_high(&values);

    // (count, rank), most frequent first, then higher rank first
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &v in &values {
        match groups.iter_mut().find(|(_, r)| *r == v) {
            Some(g) => g.0 += 1,
            None => groups.push((1, v)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let category = match (straight, flush, groups[0].0, groups.get(1).map(|g| g.0)) {
        (Some(_), true, _, _) => Category::StraightFlush,
        (_, _, 4, _) => Category::FourOfAKind,
        (_, _, 3, Some(2)) => Category::FullHouse,
        (_, true, _, _) => Category::Flush,
        (Some(_), _, _, _) => Category::Straight,
        (_, _, 3, _) => Category::ThreeOfAKind,
        (_, _, 2, Some(2)) => Category::TwoPair,
        (_, _, 2, _) => Category::OnePair,
        _ => Category::HighCard,
    };

    let tiebreak = match straight {
        Some(high) => encode(&[high]),
        None => encode(&groups.iter().map(|&(_, r)| r).collect::<Vec<_>>()),
    };

    // present the cards in group order; the wheel's ace plays low
    ordered.sort_by_key(|c| {
        let count = groups.iter().find(|(_, r)| *r == c.value()).map_or(0, |g| g.0);
        std::cmp::Reverse((count, c.value()))
    });
    if straight == Some(5) {
        ordered.rotate_left(1);
    }

    HandResult {
        category,
        tiebreak,
        cards: ordered,
    }
}

/// Count-based evaluation of 5 or more cards. Returns the same
/// `(Category, tiebreak)` as [`evaluate_cards`].
pub fn rank_cards(cards: &[Card]) -> Result<(Category, u32), GameError> {
    if cards.len() < 5 {
        return Err(GameError::NotEnoughCards { count: cards.len() });
    }

    let mut rank_counts = [0u8; 15];
    let mut rank_mask: u16 = 0;
    let mut suit_masks = [0u16; 4];
    for c in cards {
        let r = c.value();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        suit_masks[c.suit as usize] |= 1 << r;
    }
    let flush_masks: Vec<u16> = suit_masks
        .iter()
        .copied()
        .filter(|m| m.count_ones() >= 5)
        .collect();

    if let Some(high) = flush_masks.iter().filter_map(|&m| straight_high_from_mask(m)).max() {
        return Ok((Category::StraightFlush, encode(&[high])));
    }

    let ranks_with = |min: u8| -> Vec<u8> {
        (2..=14u8)
            .rev()
            .filter(|&r| rank_counts[r as usize] >= min)
            .collect()
    };
    let kickers = |exclude: &[u8], n: usize| -> Vec<u8> {
        (2..=14u8)
            .rev()
            .filter(|r| rank_counts[*r as usize] > 0 && !exclude.contains(r))
            .take(n)
            .collect()
    };

    if let Some(&quad) = ranks_with(4).first() {
        let mut digits = vec![quad];
        digits.extend(kickers(&[quad], 1));
        return Ok((Category::FourOfAKind, encode(&digits)));
    }

    let trips = ranks_with(3);
    if let Some(&trip) = trips.first() {
        if let Some(&pair) = ranks_with(2).iter().find(|&&r| r != trip) {
            return Ok((Category::FullHouse, encode(&[trip, pair])));
        }
    }

    if let Some(best) = flush_masks.iter().map(|&m| encode(&top_ranks(m, 5))).max() {
        return Ok((Category::Flush, best));
    }

    if let Some(high) = straight_high_from_mask(rank_mask) {
        return Ok((Category::Straight, encode(&[high])));
    }

    if let Some(&trip) = trips.first() {
        let mut digits = vec![trip];
        digits.extend(kickers(&[trip], 2));
        return Ok((Category::ThreeOfAKind, encode(&digits)));
    }

    let pairs = ranks_with(2);
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut digits = vec![high, low];
        digits.extend(kickers(&[high, low], 1));
        return Ok((Category::TwoPair, encode(&digits)));
    }
    if let Some(&pair) = pairs.first() {
        let mut digits = vec![pair];
        digits.extend(kickers(&[pair], 3));
        return Ok((Category::OnePair, encode(&digits)));
    }

    Ok((Category::HighCard, encode(&kickers(&[], 5))))
}

fn encode(ranks: &[u8]) -> u32 {
    ranks
        .iter()
        .fold(0, |acc, &r| acc * TIEBREAK_BASE + u32::from(r))
}

/// `values` sorted high to low; the wheel reports 5 as its high card.
fn five_card_straight_high(values: &[u8; 5]) -> Option<u8> {
    if *values == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    values
        .windows(2)
        .all(|w| w[0] == w[1] + 1)
        .then_some(values[0])
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    let mut m = mask;
    // ace also plays low
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        (m & window) == window
    })
}

fn top_ranks(mask: u16, n: usize) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| (mask & (1 << r)) != 0)
        .take(n)
        .collect()
}
