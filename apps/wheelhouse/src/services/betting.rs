//! Bet intake: validation, balance debit, and registration with the
//! current round.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::bet::{validate_stake, Bet, BetChoice};
use crate::domain::round::Phase;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::events::EventEnvelope;
use crate::state::app_state::AppState;
use crate::store::GameStore;

/// What an accepted bet looks like to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetReceipt {
    pub bet_id: i64,
    pub round_id: u64,
    pub user_id: i64,
    pub choice: BetChoice,
    pub amount: i64,
    /// Stake x multiplier, what the bet pays if it hits.
    pub potential_win: i64,
    /// Balance right after the stake was debited.
    pub balance: i64,
}

/// Bet intake service. Request handlers call [`BetService::place_bet`] and
/// map the `Err` side to their transport's reject reason.
#[derive(Default)]
pub struct BetService;

impl BetService {
    /// Accept or reject one bet.
    ///
    /// Accepted only while the round is in its betting phase, the stake is
    /// within bounds, the user has no bet in this round yet, and the balance
    /// covers the stake. The game-state lock is held across the debit, so a
    /// bet can never land in a round whose betting window already closed.
    pub async fn place_bet(
        &self,
        state: &AppState,
        user_id: i64,
        choice: BetChoice,
        amount: i64,
    ) -> Result<BetReceipt, DomainError> {
        debug!(user_id, %choice, amount, "bet received");

        validate_stake(amount, state.config.min_bet, state.config.max_bet)?;
        state.store.ensure_user(user_id).await?;

        let mut game = state.game.lock().await;

        if game.round.phase != Phase::Betting {
            return Err(DomainError::validation(
                ValidationKind::BettingClosed,
                format!("round {} is {}", game.round.id, game.round.phase),
            ));
        }
        if game.bets.iter().any(|b| b.user_id == user_id) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateBet,
                format!("user {user_id} already bet in round {}", game.round.id),
            ));
        }

        let round_id = game.round.id;
        let potential_win = amount * state.config.multipliers.for_color(choice.color());

        // Synchronous debit; rejects instead of going negative.
        let balance = state.store.debit(user_id, amount).await?;

        let mut bet = Bet::new(user_id, round_id, choice, amount);
        match state.store.record_bet(&bet, potential_win).await {
            Ok(bet_id) => bet.id = Some(bet_id),
            Err(err) => {
                // Undo the debit so a rejected bet leaves no trace.
                warn!(user_id, round_id, error = %err, "bet record failed, refunding stake");
                if let Err(refund_err) = state.store.credit(user_id, amount).await {
                    warn!(user_id, amount, error = %refund_err, "stake refund failed");
                }
                return Err(err);
            }
        }

        game.bets.push(bet.clone());
        drop(game);

        state.events.publish(EventEnvelope::BetAccepted {
            round_id,
            user_id,
            choice,
            amount,
        });
        debug!(user_id, round_id, amount, balance, "bet accepted");

        Ok(BetReceipt {
            bet_id: bet.id.unwrap_or_default(),
            round_id,
            user_id,
            choice,
            amount,
            potential_win,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::BetService;
    use crate::config::game::GameConfig;
    use crate::domain::bet::BetChoice;
    use crate::state::app_state::AppState;
    use crate::store::{GameStore, MemoryGameStore};

    fn state() -> AppState {
        let config = GameConfig::european();
        let store = Arc::new(MemoryGameStore::new(config.starting_balance));
        AppState::new(store, config)
    }

    async fn open_round(state: &AppState) -> u64 {
        let mut game = state.game.lock().await;
        let round_id = game.open_round(state.config.betting_seconds);
        state.game.publish_snapshot(&game);
        round_id
    }

    #[tokio::test]
    async fn accepted_bet_debits_and_registers() {
        let state = state();
        open_round(&state).await;

        let receipt = BetService
            .place_bet(&state, 7, BetChoice::Red, 100)
            .await
            .expect("accept");

        assert_eq!(receipt.round_id, 1);
        assert_eq!(receipt.balance, 900);
        assert_eq!(receipt.potential_win, 200);
        assert_eq!(state.store.get_balance(7).await.expect("balance"), 900);

        let game = state.game.lock().await;
        assert_eq!(game.bets.len(), 1);
        assert_eq!(game.bets[0].user_id, 7);
    }

    #[tokio::test]
    async fn rejected_outside_betting_phase() {
        // Idle engine: round 0 sits in a spent result phase.
        let state = state();
        let err = BetService
            .place_bet(&state, 7, BetChoice::Red, 100)
            .await
            .expect_err("reject");
        assert_eq!(err.code(), "BETTING_CLOSED");
        // The user was bootstrapped but nothing was debited.
        assert_eq!(state.store.get_balance(7).await.expect("balance"), 1000);
    }

    #[tokio::test]
    async fn rejected_overdraft_leaves_balance_alone() {
        let state = state();
        open_round(&state).await;

        let err = BetService
            .place_bet(&state, 9, BetChoice::Black, 1001)
            .await
            .expect_err("overdraft");
        assert_eq!(err.code(), "INSUFFICIENT_FUNDS");
        assert_eq!(state.store.get_balance(9).await.expect("balance"), 1000);

        let game = state.game.lock().await;
        assert!(game.bets.is_empty());
    }

    #[tokio::test]
    async fn one_bet_per_user_per_round() {
        let state = state();
        open_round(&state).await;

        BetService
            .place_bet(&state, 4, BetChoice::Green, 50)
            .await
            .expect("first bet");
        let err = BetService
            .place_bet(&state, 4, BetChoice::Red, 50)
            .await
            .expect_err("second bet");
        assert_eq!(err.code(), "DUPLICATE_BET");
        // Only the first stake left the balance.
        assert_eq!(state.store.get_balance(4).await.expect("balance"), 950);

        // A fresh round takes a new bet from the same user.
        open_round(&state).await;
        BetService
            .place_bet(&state, 4, BetChoice::Red, 50)
            .await
            .expect("next round bet");
    }

    #[tokio::test]
    async fn stake_bounds_are_enforced() {
        let state = state();
        open_round(&state).await;

        let err = BetService
            .place_bet(&state, 2, BetChoice::Red, 0)
            .await
            .expect_err("below minimum");
        assert_eq!(err.code(), "STAKE_BELOW_MINIMUM");

        let err = BetService
            .place_bet(&state, 2, BetChoice::Red, 10_001)
            .await
            .expect_err("above maximum");
        assert_eq!(err.code(), "STAKE_ABOVE_MAXIMUM");
    }
}
