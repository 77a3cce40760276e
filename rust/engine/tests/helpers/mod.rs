#![allow(dead_code)]

use holdem_engine::cards::{full_deck, parse_cards, Card};
use holdem_engine::deck::Deck;
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::table::Table;
use rand::Rng;

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

/// Deck that deals `holes[seat]` to every seat starting at `first` (the small
/// blind), then burn, flop, burn, turn, burn, river, then everything else.
pub fn stacked_deck(holes: &[&str], first: usize, board: &str) -> Deck {
    let holes: Vec<Vec<Card>> = holes.iter().map(|h| cards(h)).collect();
    let board = cards(board);
    assert_eq!(board.len(), 5, "board needs five cards");
    let used: Vec<Card> = holes.iter().flatten().chain(board.iter()).copied().collect();
    let mut spare = full_deck().into_iter().filter(|c| !used.contains(c));

    let n = holes.len();
    let mut order = Vec::with_capacity(52);
    for round in 0..2 {
        for k in 0..n {
            order.push(holes[(first + k) % n][round]);
        }
    }
    order.push(spare.next().unwrap());
    order.extend_from_slice(&board[..3]);
    order.push(spare.next().unwrap());
    order.push(board[3]);
    order.push(spare.next().unwrap());
    order.push(board[4]);
    order.extend(spare);
    Deck::stacked(order)
}

/// Picks a legal action for the seat to act, with a random bet size.
pub fn random_action<R: Rng, T: Rng>(table: &Table<T>, rng: &mut R) -> PlayerAction {
    let actions = table.player_actions();
    let mut kind = actions[rng.random_range(0..actions.len())];
    // folding every other time keeps hands alive long enough to reach showdown
    if kind == ActionKind::Fold && rng.random_bool(0.5) {
        kind = actions[0];
    }
    let p = table.current_player().unwrap();
    let max = p.current_bet() + p.chips();
    let min = table.min_raise().min(max);
    match kind {
        ActionKind::Fold => PlayerAction::Fold,
        ActionKind::Check => PlayerAction::Check,
        ActionKind::Call => PlayerAction::Call,
        ActionKind::Bet => PlayerAction::Bet(rng.random_range(min..=max)),
        ActionKind::Raise => PlayerAction::Raise(rng.random_range(min..=max)),
    }
}
