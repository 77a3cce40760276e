mod helpers;

use helpers::stacked_deck;
use holdem_engine::config::TableConfig;
use holdem_engine::errors::GameError;
use holdem_engine::player::PlayerAction as A;
use holdem_engine::table::{Phase, Table};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn chips_are_conserved_across_random_hands() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for seats in 2..=6 {
        let config = TableConfig {
            seats,
            starting_stack: 300,
            seed: Some(seats as u64),
            ..TableConfig::default()
        };
        let total = 300 * seats as u64;
        let mut t = Table::init_game(config).unwrap();
        for _ in 0..50 {
            while t.phase().is_betting() {
                let action = helpers::random_action(&t, &mut rng);
                t.player_action(action).unwrap();
                assert_eq!(t.total_chips(), total);
            }
            let info = t.winner_info().unwrap();
            let paid: u32 = info.winners.iter().map(|w| w.amount_won).sum();
            assert_eq!(paid, info.pot);
            assert_eq!(t.pot(), 0);
            assert_eq!(t.total_chips(), total);

            match t.start_new_hand() {
                Ok(()) => assert_eq!(t.total_chips(), total),
                Err(GameError::NotEnoughPlayers { funded }) => {
                    assert_eq!(funded, 1);
                    break;
                }
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }
}

#[test]
fn tied_board_splits_pot_with_odd_chips_from_dealer_left() {
    let mut t = Table::new(TableConfig::default(), ChaCha20Rng::seed_from_u64(0)).unwrap();
    let deck = stacked_deck(
        &["2c 3d", "4c 5d", "6c 7d", "8c 9d"],
        1,
        "As Ks Qs Js 10s",
    );
    t.start_hand_with_deck(deck).unwrap();

    t.player_action(A::Call).unwrap(); // seat 3
    t.player_action(A::Call).unwrap(); // seat 0
    t.player_action(A::Call).unwrap(); // seat 1
    t.player_action(A::Check).unwrap(); // seat 2
    assert_eq!(t.pot(), 80);

    t.player_action(A::Bet(20)).unwrap(); // seat 1
    t.player_action(A::Call).unwrap(); // seat 2
    t.player_action(A::Fold).unwrap(); // seat 3
    t.player_action(A::Call).unwrap(); // seat 0
    assert_eq!(t.phase(), Phase::Turn);
    assert_eq!(t.pot(), 140);

    while t.phase().is_betting() {
        t.player_action(A::Check).unwrap();
    }
    assert_eq!(t.phase(), Phase::Showdown);

    let info = t.winner_info().unwrap();
    assert_eq!(info.pot, 140);
    let split: Vec<(usize, u32)> = info
        .winners
        .iter()
        .map(|w| (w.seat_index, w.amount_won))
        .collect();
    assert_eq!(split, vec![(1, 47), (2, 47), (0, 46)]);
    assert_eq!(t.players()[0].chips(), 1_006);
    assert_eq!(t.players()[1].chips(), 1_007);
    assert_eq!(t.players()[3].chips(), 980);
    assert_eq!(t.hand_label(1), Some("Royal Flush"));
}

#[test]
fn uncontested_pot_goes_to_last_seat_without_a_hand() {
    let mut t = Table::init_game(TableConfig {
        seed: Some(6),
        ..TableConfig::default()
    })
    .unwrap();
    for _ in 0..3 {
        t.player_action(A::Fold).unwrap();
    }
    assert_eq!(t.phase(), Phase::GameOver);
    let info = t.winner_info().unwrap();
    assert_eq!(info.pot, 30);
    assert_eq!(info.winners.len(), 1);
    assert_eq!(info.winners[0].seat_index, 2);
    assert_eq!(info.winners[0].amount_won, 30);
    assert!(info.winners[0].hand.is_none());
    assert_eq!(t.players()[2].chips(), 1_010);
    assert_eq!(t.players()[1].chips(), 990);
}

#[test]
fn fold_on_the_river_still_reports_the_winning_hand() {
    let mut t = Table::new(TableConfig::with_seats(2), ChaCha20Rng::seed_from_u64(0)).unwrap();
    t.start_hand_with_deck(stacked_deck(&["Ah Ad", "Kh Kd"], 1, "2c 7s 9d Jc 3h"))
        .unwrap();
    t.player_action(A::Call).unwrap();
    while t.phase() != Phase::River {
        t.player_action(A::Check).unwrap();
    }
    t.player_action(A::Bet(40)).unwrap(); // seat 1
    t.player_action(A::Fold).unwrap(); // seat 0

    assert_eq!(t.phase(), Phase::GameOver);
    let winner = &t.winner_info().unwrap().winners[0];
    assert_eq!(winner.seat_index, 1);
    assert_eq!(winner.amount_won, 80);
    assert!(winner.hand.is_some());
}

#[test]
fn largest_allowed_stacks_settle_an_all_in_pot() {
    let stack = u32::MAX / 5;
    let config = TableConfig {
        seats: 5,
        starting_stack: stack,
        seed: Some(77),
        ..TableConfig::default()
    };
    let mut t = Table::init_game(config).unwrap();
    t.player_action(A::Raise(u32::MAX)).unwrap();
    while t.phase().is_betting() {
        t.player_action(A::Call).unwrap();
    }

    let info = t.winner_info().unwrap();
    assert_eq!(u64::from(info.pot), 5 * u64::from(stack));
    let paid: u64 = info.winners.iter().map(|w| u64::from(w.amount_won)).sum();
    assert_eq!(paid, u64::from(info.pot));
    assert_eq!(t.total_chips(), 5 * u64::from(stack));
}

#[test]
fn stacks_too_large_for_chip_counts_are_refused() {
    let config = TableConfig {
        seats: 5,
        starting_stack: 1_000_000_000,
        ..TableConfig::default()
    };
    assert!(matches!(
        Table::init_game(config),
        Err(GameError::InvalidConfig(_))
    ));
}
