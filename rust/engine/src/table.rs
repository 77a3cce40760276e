//! The hand/phase state machine.
//!
//! A [`Table`] owns the seats, the deck and the pot. Every mutation goes
//! through [`Table::start_new_hand`] or [`Table::player_action`], so the chip
//! conservation invariant only has to hold at those two entry points:
//! `pot + sum(chips) + sum(current_bet)` never changes while a hand runs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, Category, HandResult};
use crate::history::{ActionRecord, BlindPost, HandRecord};
use crate::player::{ActionKind, Player, PlayerAction};
use crate::rules::{legal_actions, min_raise, validate_action, ValidatedAction};
use crate::snapshot::{SeatView, TableSnapshot, Winner, WinnerInfo};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No hand has been dealt yet
    Waiting,
    /// Blinds and hole cards are being dealt
    Dealing,
    Preflop,
    Flop,
    Turn,
    River,
    /// Hand compared at showdown and the pot settled
    Showdown,
    /// Everyone else folded; the pot went to the last seat standing
    GameOver,
}

impl Phase {
    /// True on the four streets where seats act.
    pub fn is_betting(self) -> bool {
        matches!(self, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River)
    }

    pub fn is_hand_over(self) -> bool {
        matches!(self, Phase::Showdown | Phase::GameOver)
    }
}

#[derive(Debug)]
pub struct Table<R = ChaCha20Rng> {
    players: Vec<Player>,
    deck: Deck,
    community_cards: Vec<Card>,
    /// Chips swept in from finished streets
    pot: u32,
    /// The standing wager on this street
    current_bet: u32,
    phase: Phase,
    active_player_index: usize,
    /// `None` until the first hand is dealt
    dealer_index: Option<usize>,
    small_blind: u32,
    big_blind: u32,
    last_raiser: Option<usize>,
    winner_info: Option<WinnerInfo>,
    history: HandRecord,
    hands_started: u64,
    rng: R,
}

impl Table<ChaCha20Rng> {
    /// Seats the table from `config` and deals the first hand. Shuffles are
    /// seeded from `config.seed`, or randomly when no seed is given.
    pub fn init_game(config: TableConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::init_game_with_rng(config, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Table<R> {
    /// Seats the table without dealing. Seat 0 is the human seat, the rest
    /// are named `AI 1`, `AI 2`, ...
    pub fn new(config: TableConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let players = (0..config.seats)
            .map(|i| {
                let name = if i == 0 {
                    "You".to_string()
                } else {
                    format!("AI {}", i)
                };
                Player::new(name, config.starting_stack)
            })
            .collect();
        Ok(Self {
            players,
            deck: Deck::new(),
            community_cards: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            phase: Phase::Waiting,
            active_player_index: 0,
            dealer_index: None,
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            last_raiser: None,
            winner_info: None,
            history: HandRecord::default(),
            hands_started: 0,
            rng,
        })
    }

    pub fn init_game_with_rng(config: TableConfig, rng: R) -> Result<Self, GameError> {
        let mut table = Self::new(config, rng)?;
        table.start_new_hand()?;
        Ok(table)
    }

    /// Rotates the dealer, posts blinds, deals hole cards and opens pre-flop
    /// betting.
    pub fn start_new_hand(&mut self) -> Result<(), GameError> {
        self.begin_hand(None)
    }

    /// Like [`Table::start_new_hand`] but deals from a pre-arranged deck
    /// instead of shuffling, for replays and scripted scenarios.
    pub fn start_hand_with_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        self.begin_hand(Some(deck))
    }

    fn begin_hand(&mut self, deck: Option<Deck>) -> Result<(), GameError> {
        if self.phase.is_betting() || self.phase == Phase::Dealing {
            return Err(GameError::HandInProgress);
        }
        let funded = self.players.iter().filter(|p| p.chips() > 0).count();
        if funded < 2 {
            return Err(GameError::NotEnoughPlayers { funded });
        }

        self.phase = Phase::Dealing;
        match deck {
            Some(d) => self.deck = d,
            None => self.deck.reset(&mut self.rng),
        }
        self.community_cards.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.winner_info = None;
        self.last_raiser = None;
        for p in &mut self.players {
            p.reset_for_new_hand();
        }

        let last_seat = self.players.len() - 1;
        let dealer = self
            .next_seat_where(self.dealer_index.unwrap_or(last_seat), Player::in_hand)
            .ok_or(GameError::NotEnoughPlayers { funded })?;
        self.dealer_index = Some(dealer);
        self.players[dealer].is_dealer = true;
        self.hands_started += 1;
        self.history = HandRecord::new(self.hands_started, dealer);

        let sb_seat = self
            .next_seat_where(dealer, Player::in_hand)
            .ok_or(GameError::NotEnoughPlayers { funded })?;
        let bb_seat = self
            .next_seat_where(sb_seat, Player::in_hand)
            .ok_or(GameError::NotEnoughPlayers { funded })?;
        self.post_blind(sb_seat, self.small_blind);
        self.post_blind(bb_seat, self.big_blind);
        self.current_bet = self.big_blind;
        self.last_raiser = Some(bb_seat);

        tracing::info!(
            hand = self.hands_started,
            dealer,
            small_blind_seat = sb_seat,
            big_blind_seat = bb_seat,
            "hand started"
        );

        self.deal_hole_cards(sb_seat)?;

        self.phase = Phase::Preflop;
        self.active_player_index = self
            .next_seat_where(bb_seat, Player::can_act)
            .unwrap_or(bb_seat);
        if self.is_betting_round_complete() {
            self.advance_street()?;
        }
        Ok(())
    }

    /// Applies one action for the seat to act.
    pub fn player_action(&mut self, action: PlayerAction) -> Result<(), GameError> {
        self.player_action_as(self.active_player_index, action)
    }

    /// Applies one action on behalf of `seat`, refusing it unless that seat
    /// is the one to act. A refused action changes nothing.
    pub fn player_action_as(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        let validated = match self.check_action(seat, action) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(seat, ?action, error = %e, "action rejected");
                return Err(e);
            }
        };

        let (applied, wagered) = match validated {
            ValidatedAction::Fold => {
                self.players[seat].is_folded = true;
                (PlayerAction::Fold, 0)
            }
            ValidatedAction::Check => (PlayerAction::Check, 0),
            ValidatedAction::Call(amount) => (PlayerAction::Call, self.players[seat].bet(amount)),
            ValidatedAction::Bet(to) | ValidatedAction::Raise(to) => {
                let owed = to.saturating_sub(self.players[seat].current_bet());
                let wagered = self.players[seat].bet(owed);
                self.current_bet = self.current_bet.max(self.players[seat].current_bet());
                self.last_raiser = Some(seat);
                for (i, p) in self.players.iter_mut().enumerate() {
                    if i != seat && p.can_act() {
                        p.has_acted = false;
                    }
                }
                let applied = if matches!(validated, ValidatedAction::Bet(_)) {
                    PlayerAction::Bet(to)
                } else {
                    PlayerAction::Raise(to)
                };
                (applied, wagered)
            }
        };

        tracing::debug!(
            seat,
            phase = ?self.phase,
            action = ?applied,
            wagered,
            table_bet = self.current_bet,
            "action applied"
        );
        self.history.actions.push(ActionRecord {
            seat,
            phase: self.phase,
            action: applied,
            wagered,
        });

        if self.contenders().len() <= 1 {
            return self.resolve_showdown();
        }

        self.players[seat].has_acted = true;
        if self.is_betting_round_complete() {
            return self.advance_street();
        }
        if let Some(next) = self.next_seat_where(seat, Player::can_act) {
            self.active_player_index = next;
            Ok(())
        } else {
            self.advance_street()
        }
    }

    fn check_action(&self, seat: usize, action: PlayerAction) -> Result<ValidatedAction, GameError> {
        if !self.phase.is_betting() {
            return Err(GameError::NoHandInProgress);
        }
        if seat != self.active_player_index {
            return Err(GameError::NotPlayersTurn {
                expected: self.active_player_index,
                actual: seat,
            });
        }
        let p = &self.players[seat];
        if !p.can_act() {
            return Err(GameError::SeatCannotAct { seat });
        }
        validate_action(p.chips(), p.current_bet(), self.current_bet, self.big_blind, action)
    }

    /// The street is over once every seat still able to act has acted and
    /// matched the table's bet. A lone bettor with nobody left to contest
    /// the pot closes it as soon as it owes nothing.
    pub fn is_betting_round_complete(&self) -> bool {
        let actors: Vec<&Player> = self.players.iter().filter(|p| p.can_act()).collect();
        match actors.as_slice() {
            [] => true,
            [only] if only.current_bet() >= self.current_bet => true,
            _ => actors
                .iter()
                .all(|p| p.has_acted() && p.current_bet() == self.current_bet),
        }
    }

    /// Moves to the next street, dealing without betting while no more than
    /// one seat is able to act.
    fn advance_street(&mut self) -> Result<(), GameError> {
        loop {
            self.next_phase()?;
            if !self.phase.is_betting() || !self.is_betting_round_complete() {
                return Ok(());
            }
        }
    }

    /// Closes the current street: sweeps wagers into the pot, then deals the
    /// next street (burn first) or goes to showdown after the river.
    fn next_phase(&mut self) -> Result<(), GameError> {
        self.sweep_bets();
        for p in &mut self.players {
            p.reset_for_new_street();
        }
        self.current_bet = 0;
        self.last_raiser = None;

        let (next, count) = match self.phase {
            Phase::Preflop => (Phase::Flop, 3),
            Phase::Flop => (Phase::Turn, 1),
            Phase::Turn => (Phase::River, 1),
            Phase::River => return self.resolve_showdown(),
            _ => return Err(GameError::NoHandInProgress),
        };

        let dealer = self.dealer_index.unwrap_or(0);
        self.active_player_index = self
            .next_seat_where(dealer, Player::can_act)
            .unwrap_or(dealer);

        self.deck.burn()?;
        for _ in 0..count {
            let card = self.deck.deal()?;
            self.community_cards.push(card);
        }
        self.history.board = self.community_cards.clone();
        self.phase = next;

        tracing::debug!(
            phase = ?self.phase,
            board = ?self.community_cards,
            pot = self.pot,
            "street dealt"
        );
        Ok(())
    }

    /// Settles the pot. A lone contender takes it without a comparison;
    /// otherwise the best `(category, tiebreak)` wins and ties split evenly,
    /// odd chips going one each to the tied seats nearest the dealer's left.
    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        self.sweep_bets();
        let pot = self.pot;
        let contenders = self.contenders();

        if contenders.is_empty() {
            return Err(GameError::NoHandInProgress);
        }

        let winners = if let [seat] = contenders.as_slice() {
            let seat = *seat;
            let hand = evaluate_hand(self.players[seat].hole_cards(), &self.community_cards).ok();
            self.players[seat].hand = hand.clone();
            self.players[seat].add_chips(pot);
            self.phase = Phase::GameOver;
            vec![Winner {
                seat_index: seat,
                hand,
                amount_won: pot,
            }]
        } else {
            let mut best: Option<(Category, u32)> = None;
            for &seat in &contenders {
                let hand = evaluate_hand(self.players[seat].hole_cards(), &self.community_cards)?;
                if best.is_none_or(|b| hand.key() > b) {
                    best = Some(hand.key());
                }
                self.players[seat].hand = Some(hand);
            }
            let tied: Vec<usize> = contenders
                .into_iter()
                .filter(|&s| self.players[s].hand.as_ref().map(HandResult::key) == best)
                .collect();

            let n = tied.len() as u32;
            let share = pot / n;
            let remainder = (pot % n) as usize;
            let mut winners = Vec::with_capacity(tied.len());
            for (i, &seat) in tied.iter().enumerate() {
                let amount = share + u32::from(i < remainder);
                self.players[seat].add_chips(amount);
                winners.push(Winner {
                    seat_index: seat,
                    hand: self.players[seat].hand.clone(),
                    amount_won: amount,
                });
            }
            self.phase = Phase::Showdown;
            winners
        };
        self.pot = 0;

        tracing::info!(
            hand = self.hands_started,
            pot,
            winners = ?winners.iter().map(|w| w.seat_index).collect::<Vec<_>>(),
            phase = ?self.phase,
            "pot settled"
        );
        let info = WinnerInfo { pot, winners };
        self.history.board = self.community_cards.clone();
        self.history.result = Some(info.clone());
        self.winner_info = Some(info);
        Ok(())
    }

    fn post_blind(&mut self, seat: usize, blind: u32) {
        let amount = self.players[seat].bet(blind);
        self.history.blinds.push(BlindPost { seat, amount });
    }

    fn deal_hole_cards(&mut self, first: usize) -> Result<(), GameError> {
        let n = self.players.len();
        let order: Vec<usize> = (0..n)
            .map(|k| (first + k) % n)
            .filter(|&i| self.players[i].in_hand())
            .collect();
        for _ in 0..2 {
            for &seat in &order {
                let card = self.deck.deal()?;
                self.players[seat].hole_cards.push(card);
            }
        }
        Ok(())
    }

    fn sweep_bets(&mut self) {
        for p in &mut self.players {
            self.pot += p.take_current_bet();
        }
    }

    /// Seats still holding cards, in seat order starting left of the dealer.
    fn contenders(&self) -> Vec<usize> {
        let n = self.players.len();
        let start = self.dealer_index.map_or(0, |d| d + 1);
        (0..n)
            .map(|k| (start + k) % n)
            .filter(|&i| self.players[i].in_hand())
            .collect()
    }

    /// First seat after `from` (wrapping, `from` itself last) matching `pred`.
    fn next_seat_where(&self, from: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
        let n = self.players.len();
        (1..=n).map(|k| (from + k) % n).find(|&i| pred(&self.players[i]))
    }
}

impl<R> Table<R> {
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }
    pub fn dealer_index(&self) -> Option<usize> {
        self.dealer_index
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn last_raiser(&self) -> Option<usize> {
        self.last_raiser
    }
    pub fn winner_info(&self) -> Option<&WinnerInfo> {
        self.winner_info.as_ref()
    }
    pub fn history(&self) -> &HandRecord {
        &self.history
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Pot plus the wagers still in front of the seats.
    pub fn total_pot(&self) -> u32 {
        self.pot + self.players.iter().map(Player::current_bet).sum::<u32>()
    }

    /// Every chip on the table: stacks, street wagers and the pot.
    pub fn total_chips(&self) -> u64 {
        u64::from(self.total_pot()) + self.players.iter().map(|p| u64::from(p.chips())).sum::<u64>()
    }

    /// Index of the seat to act, if any seat can act right now.
    pub fn current_player_index(&self) -> Option<usize> {
        let idx = self.active_player_index;
        (self.phase.is_betting() && self.players[idx].can_act()).then_some(idx)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player_index().map(|i| &self.players[i])
    }

    /// Chips the seat to act owes to stay in.
    pub fn call_amount(&self) -> u32 {
        self.current_player()
            .map_or(0, |p| self.current_bet.saturating_sub(p.current_bet()))
    }

    pub fn min_raise(&self) -> u32 {
        min_raise(self.current_bet, self.big_blind)
    }

    pub fn player_actions(&self) -> Vec<ActionKind> {
        self.current_player()
            .map(|p| legal_actions(p.chips(), p.current_bet(), self.current_bet))
            .unwrap_or_default()
    }

    /// Label of the best hand `seat` can make with the visible board, once
    /// five cards are out.
    pub fn hand_label(&self, seat: usize) -> Option<&'static str> {
        let p = self.players.get(seat)?;
        if p.hole_cards().is_empty() {
            return None;
        }
        evaluate_hand(p.hole_cards(), &self.community_cards)
            .ok()
            .map(|h| h.describe())
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            phase: self.phase,
            pot: self.pot,
            current_bet: self.current_bet,
            big_blind: self.big_blind,
            community_cards: self.community_cards.clone(),
            active_player_index: self.current_player_index(),
            dealer_index: self.dealer_index.unwrap_or(0),
            players: self.players.iter().map(SeatView::from).collect(),
            available_actions: self.player_actions(),
            winner_info: self.winner_info.clone(),
        }
    }
}
