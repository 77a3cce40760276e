mod helpers;

use holdem_engine::config::TableConfig;
use holdem_engine::errors::GameError;
use holdem_engine::player::{ActionKind as K, PlayerAction as A};
use holdem_engine::table::{Phase, Table};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn table(seats: usize, seed: u64) -> Table {
    Table::init_game(TableConfig {
        seed: Some(seed),
        ..TableConfig::with_seats(seats)
    })
    .unwrap()
}

#[test]
fn limped_pot_checks_through_every_street() {
    let mut t = table(4, 21);
    t.player_action(A::Call).unwrap(); // seat 3
    t.player_action(A::Call).unwrap(); // seat 0
    t.player_action(A::Call).unwrap(); // seat 1 completes the small blind

    // big blind gets its option
    assert_eq!(t.current_player_index(), Some(2));
    assert_eq!(t.player_actions(), vec![K::Check, K::Bet, K::Fold]);
    t.player_action(A::Check).unwrap();

    assert_eq!(t.phase(), Phase::Flop);
    assert_eq!(t.community_cards().len(), 3);
    assert_eq!(t.pot(), 80);
    assert_eq!(t.current_bet(), 0);
    assert_eq!(t.current_player_index(), Some(1));
    assert_eq!(t.deck_remaining(), 40);

    for _ in 0..4 {
        t.player_action(A::Check).unwrap();
    }
    assert_eq!(t.phase(), Phase::Turn);
    assert_eq!(t.community_cards().len(), 4);
    assert_eq!(t.deck_remaining(), 38);

    for _ in 0..4 {
        t.player_action(A::Check).unwrap();
    }
    assert_eq!(t.phase(), Phase::River);
    assert_eq!(t.community_cards().len(), 5);
    assert_eq!(t.deck_remaining(), 36);

    for _ in 0..4 {
        t.player_action(A::Check).unwrap();
    }
    assert_eq!(t.phase(), Phase::Showdown);
    assert!(t.current_player().is_none());
    assert_eq!(t.pot(), 0);
    let info = t.winner_info().unwrap();
    assert_eq!(info.pot, 80);
    assert!(info.winners.iter().all(|w| w.hand.is_some()));
    assert_eq!(t.total_chips(), 4_000);
}

#[test]
fn raise_reopens_action_for_earlier_callers() {
    let mut t = table(4, 8);
    t.player_action(A::Raise(60)).unwrap(); // seat 3
    t.player_action(A::Call).unwrap(); // seat 0
    t.player_action(A::Call).unwrap(); // seat 1
    t.player_action(A::Raise(200)).unwrap(); // seat 2

    assert_eq!(t.last_raiser(), Some(2));
    assert_eq!(t.current_bet(), 200);
    assert_eq!(t.current_player_index(), Some(3));
    assert_eq!(t.call_amount(), 140);

    t.player_action(A::Call).unwrap(); // seat 3
    t.player_action(A::Fold).unwrap(); // seat 0
    assert_eq!(t.phase(), Phase::Preflop);
    t.player_action(A::Fold).unwrap(); // seat 1

    assert_eq!(t.phase(), Phase::Flop);
    assert_eq!(t.pot(), 520);
    // seat 1 folded, so the first seat after the dealer still in is seat 2
    assert_eq!(t.current_player_index(), Some(2));
    assert_eq!(t.players()[0].chips(), 940);
    assert_eq!(t.players()[3].chips(), 800);
}

#[test]
fn rejected_actions_leave_state_untouched() {
    let mut t = table(4, 2);
    let before = t.snapshot();

    assert_eq!(
        t.player_action(A::Check),
        Err(GameError::IllegalAction { action: K::Check })
    );
    assert_eq!(
        t.player_action(A::Bet(100)),
        Err(GameError::IllegalAction { action: K::Bet })
    );
    assert_eq!(
        t.player_action_as(0, A::Call),
        Err(GameError::NotPlayersTurn {
            expected: 3,
            actual: 0
        })
    );
    assert_eq!(t.snapshot(), before);
    assert!(t.history().actions.is_empty());
}

#[test]
fn actions_after_the_hand_are_refused() {
    let mut t = table(3, 4);
    t.player_action(A::Fold).unwrap();
    t.player_action(A::Fold).unwrap();
    assert_eq!(t.phase(), Phase::GameOver);
    assert_eq!(t.player_action(A::Call), Err(GameError::NoHandInProgress));

    let mut waiting = Table::new(TableConfig::default(), ChaCha20Rng::seed_from_u64(1)).unwrap();
    assert_eq!(waiting.player_action(A::Check), Err(GameError::NoHandInProgress));
}

#[test]
fn raise_amounts_are_clamped() {
    let mut t = table(4, 13);
    t.player_action(A::Raise(25)).unwrap(); // seat 3, below minimum
    assert_eq!(t.current_bet(), 40);
    assert_eq!(t.history().actions[0].action, A::Raise(40));
    assert_eq!(t.history().actions[0].wagered, 40);

    t.player_action(A::Raise(5_000)).unwrap(); // seat 0, beyond stack
    assert_eq!(t.current_bet(), 1_000);
    assert!(t.players()[0].is_all_in());
    assert_eq!(t.players()[0].chips(), 0);
    assert_eq!(t.history().actions[1].action, A::Raise(1_000));
}

#[test]
fn all_in_and_call_runs_out_the_board() {
    let mut t = table(2, 30);
    // heads-up: seat 1 posted the small blind and acts first
    t.player_action(A::Raise(1_000)).unwrap();
    t.player_action(A::Call).unwrap();

    assert!(t.phase().is_hand_over());
    assert_eq!(t.community_cards().len(), 5);
    assert_eq!(t.winner_info().unwrap().pot, 2_000);
    assert_eq!(t.total_chips(), 2_000);
}

#[test]
fn betting_never_stalls_on_a_closed_round() {
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    for seats in 2..=6 {
        let mut t = table(seats, 100 + seats as u64);
        for _ in 0..20 {
            while t.phase().is_betting() {
                assert!(t.current_player().is_some());
                assert!(!t.is_betting_round_complete());
                let action = helpers::random_action(&t, &mut rng);
                t.player_action(action).unwrap();
            }
            assert!(t.phase().is_hand_over());
            if t.start_new_hand().is_err() {
                break;
            }
        }
    }
}
