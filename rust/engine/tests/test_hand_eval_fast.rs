use holdem_engine::cards::{full_deck, Card};
use holdem_engine::hand::{evaluate_cards, rank_cards, Category};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

mod helpers;
use helpers::cards;

fn assert_same(cs: &[Card]) {
    let oracle = evaluate_cards(cs).unwrap().key();
    let fast = rank_cards(cs).unwrap();
    assert_eq!(fast, oracle, "mismatch on {:?}", cs);
}

#[test]
fn fast_matches_subset_scan_on_edge_cases() {
    for text in [
        "Ah 2d 3c 4s 5h Kd Kc",   // wheel beside a pair
        "Ah 2h 3h 4h 5h 6d 7c",   // wheel straight flush
        "9h 9d 9s 4c 4h 4d Kc",   // two sets of trips
        "Kh Kd Qs Qc Jh Jd 2s",   // three pairs
        "2h 7h 9h Jh Kh Qh 3h",   // seven-card flush
        "5d 6d 7d 8d 9c 10d 2d",  // flush and straight, no straight flush
        "Ah Ad Ac As Kh Kd Kc",   // quads with trips beside
        "10s Js Qs Ks As 9s 8s",  // royal with lower straight flush cards
        "2c 3d 5h 7s 9c Jd Kh",   // nothing
    ] {
        assert_same(&cards(text));
    }
}

#[test]
fn fast_matches_subset_scan_on_random_hands() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut deck = full_deck();
    for i in 0..3_000 {
        deck.shuffle(&mut rng);
        let n = 5 + i % 3;
        assert_same(&deck[..n]);
    }
}

#[test]
fn fast_path_rejects_short_input() {
    assert!(rank_cards(&cards("As Ks Qs Js")).is_err());
    assert_eq!(
        rank_cards(&cards("As Ks Qs Js 10s")).unwrap().0,
        Category::StraightFlush
    );
}
