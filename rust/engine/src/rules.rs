use crate::errors::GameError;
use crate::player::{ActionKind, PlayerAction as A};

/// An action checked against the seat's stack, with its amount resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to add to the seat's wager; less than owed means all-in.
    Call(u32),
    /// New total wager for the seat.
    Bet(u32),
    /// New total wager for the seat.
    Raise(u32),
}

/// Smallest total a bet or raise may reach.
pub fn min_raise(table_bet: u32, big_blind: u32) -> u32 {
    table_bet.saturating_add(big_blind)
}

/// Actions open to a seat that can act, in display order.
///
/// Facing a wager the seat may call, and raise only if its stack covers more
/// than the call. Otherwise it may check or bet. Folding is always allowed.
pub fn legal_actions(chips: u32, seat_bet: u32, table_bet: u32) -> Vec<ActionKind> {
    let mut actions = Vec::with_capacity(3);
    if table_bet > seat_bet {
        actions.push(ActionKind::Call);
        if chips > table_bet - seat_bet {
            actions.push(ActionKind::Raise);
        }
    } else {
        actions.push(ActionKind::Check);
        actions.push(ActionKind::Bet);
    }
    actions.push(ActionKind::Fold);
    actions
}

/// Validates a [`crate::player::PlayerAction`] for a seat.
///
/// Actions missing from [`legal_actions`] are refused. Bet and raise totals
/// below [`min_raise`] are lifted to it, and totals beyond the stack are cut
/// to an all-in.
///
/// # Examples
///
/// ```
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// // 1000 behind, nothing wagered yet, facing 20 with a 20 big blind
/// let v = validate_action(1000, 0, 20, 20, PlayerAction::Raise(25)).unwrap();
/// assert_eq!(v, ValidatedAction::Raise(40));
///
/// let v = validate_action(1000, 0, 20, 20, PlayerAction::Raise(5000)).unwrap();
/// assert_eq!(v, ValidatedAction::Raise(1000));
/// ```
///
/// ```
/// use holdem_engine::errors::GameError;
/// use holdem_engine::player::{ActionKind, PlayerAction};
/// use holdem_engine::rules::validate_action;
///
/// let err = validate_action(1000, 0, 20, 20, PlayerAction::Check).unwrap_err();
/// assert_eq!(err, GameError::IllegalAction { action: ActionKind::Check });
/// ```
pub fn validate_action(
    chips: u32,
    seat_bet: u32,
    table_bet: u32,
    big_blind: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let kind = action.kind();
    if !legal_actions(chips, seat_bet, table_bet).contains(&kind) {
        return Err(GameError::IllegalAction { action: kind });
    }
    let clamp_total = |to: u32| {
        to.max(min_raise(table_bet, big_blind))
            .min(seat_bet.saturating_add(chips))
    };
    Ok(match action {
        A::Fold => ValidatedAction::Fold,
        A::Check => ValidatedAction::Check,
        A::Call => ValidatedAction::Call(table_bet.saturating_sub(seat_bet).min(chips)),
        A::Bet(to) => ValidatedAction::Bet(clamp_total(to)),
        A::Raise(to) => ValidatedAction::Raise(clamp_total(to)),
    })
}
