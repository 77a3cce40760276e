mod helpers;

use helpers::{cards, stacked_deck};
use holdem_engine::config::TableConfig;
use holdem_engine::hand::Category;
use holdem_engine::player::{ActionKind, PlayerAction as A};
use holdem_engine::table::{Phase, Table};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn passive_action(t: &Table) -> A {
    if t.player_actions().contains(&ActionKind::Check) {
        A::Check
    } else {
        A::Call
    }
}

#[test]
fn heads_up_best_hand_takes_the_pot() {
    let mut t = Table::new(TableConfig::with_seats(2), ChaCha20Rng::seed_from_u64(0)).unwrap();
    t.start_hand_with_deck(stacked_deck(&["Ah Ad", "Kh Kd"], 1, "2c 7s 9d Jc 3h"))
        .unwrap();
    assert_eq!(t.players()[0].hole_cards(), cards("Ah Ad").as_slice());

    while t.phase().is_betting() {
        let action = passive_action(&t);
        t.player_action(action).unwrap();
    }

    assert_eq!(t.phase(), Phase::Showdown);
    assert_eq!(t.community_cards(), cards("2c 7s 9d Jc 3h").as_slice());
    let info = t.winner_info().unwrap();
    assert_eq!(info.winners.len(), 1);
    let winner = &info.winners[0];
    assert_eq!(winner.seat_index, 0);
    assert_eq!(winner.amount_won, 40);
    assert_eq!(winner.hand.as_ref().unwrap().category, Category::OnePair);
    assert_eq!(t.players()[0].chips(), 1_020);
    assert_eq!(t.players()[1].hand().unwrap().category, Category::OnePair);
}

#[test]
fn quads_beat_a_full_house() {
    let mut t = Table::new(TableConfig::with_seats(3), ChaCha20Rng::seed_from_u64(0)).unwrap();
    t.start_hand_with_deck(stacked_deck(
        &["9h 9d", "Kh Kd", "3c 4d"],
        1,
        "9s 9c Ks 2d 5h",
    ))
    .unwrap();
    while t.phase().is_betting() {
        let action = passive_action(&t);
        t.player_action(action).unwrap();
    }

    let info = t.winner_info().unwrap();
    assert_eq!(info.pot, 60);
    assert_eq!(info.winners.len(), 1);
    assert_eq!(info.winners[0].seat_index, 0);
    assert_eq!(t.hand_label(0), Some("Four of a Kind"));
    assert_eq!(t.hand_label(1), Some("Full House"));
}

#[test]
fn snapshot_hides_opponent_cards_until_showdown() {
    let mut t = Table::new(TableConfig::with_seats(2), ChaCha20Rng::seed_from_u64(0)).unwrap();
    t.start_hand_with_deck(stacked_deck(&["Ah Ad", "Kh Kd"], 1, "2c 7s 9d Jc 3h"))
        .unwrap();

    let view = t.snapshot().redacted_for(1);
    assert!(view.players[0].hole_cards.is_empty());
    assert_eq!(view.players[1].hole_cards, cards("Kh Kd"));
    assert_eq!(view.active_player_index, Some(1));
    assert_eq!(view.available_actions, t.player_actions());
    assert_eq!(view.total_pot(), 30);
    assert_eq!(view.call_amount(1), 10);

    while t.phase().is_betting() {
        let action = passive_action(&t);
        t.player_action(action).unwrap();
    }
    let view = t.snapshot().redacted_for(1);
    assert_eq!(view.players[0].hole_cards, cards("Ah Ad"));
    assert!(view.winner_info.is_some());
    assert!(view.available_actions.is_empty());
    assert_eq!(view.active_player_index, None);
}

#[test]
fn snapshot_serializes_for_drivers() {
    let t = Table::init_game(TableConfig {
        seed: Some(3),
        ..TableConfig::default()
    })
    .unwrap();
    let json = serde_json::to_value(t.snapshot()).unwrap();
    assert_eq!(json["phase"], "preflop");
    assert_eq!(json["current_bet"], 20);
    assert_eq!(json["available_actions"][0], "call");
    assert_eq!(json["players"].as_array().unwrap().len(), 4);
}
