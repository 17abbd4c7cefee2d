//! The round scheduler: one cancellable background task driving the
//! betting -> spinning -> result cycle on a fixed one-second cadence.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::domain::seeding::round_rng;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::events::EventEnvelope;
use crate::services::settlement::SettlementService;
use crate::state::app_state::AppState;
use crate::store::GameStore;

/// Pause before resuming the loop after an unexpected cycle error.
const ERROR_PAUSE: Duration = Duration::from_secs(5);

enum RoundEnd {
    Completed,
    Cancelled,
}

/// Owns the loop until started; [`RoundScheduler::start`] consumes it and
/// hands back a [`SchedulerHandle`].
pub struct RoundScheduler {
    state: AppState,
    settlement: SettlementService,
    base_seed: u64,
    cancel: CancellationToken,
}

/// Handle to a running scheduler: signal shutdown and await the drain.
#[derive(Debug)]
pub struct SchedulerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signal shutdown without waiting.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Signal shutdown and wait for the loop to finish. Any in-flight
    /// settlement completes before the task exits.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(err) = self.task.await {
            error!(error = %err, "scheduler task join failed");
        }
    }
}

impl RoundScheduler {
    pub fn new(state: AppState) -> Self {
        Self::with_seed(state, rand::random())
    }

    /// Pin the outcome seed: the same seed and round id always draw the
    /// same pocket.
    pub fn with_seed(state: AppState, base_seed: u64) -> Self {
        Self {
            state,
            settlement: SettlementService,
            base_seed,
            cancel: CancellationToken::new(),
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Spawn the loop. Rejected when this game state already has a running
    /// scheduler; exactly one loop may own the round clock.
    pub fn start(self) -> Result<SchedulerHandle, DomainError> {
        if !self.state.game.try_acquire_scheduler() {
            return Err(DomainError::validation(
                ValidationKind::Other("SCHEDULER_ACTIVE".into()),
                "a scheduler is already running for this game state",
            ));
        }
        let cancel = self.cancel.clone();
        let task = tokio::spawn(self.run());
        Ok(SchedulerHandle { cancel, task })
    }

    async fn run(self) {
        info!("round scheduler started");
        loop {
            if self.cancel.is_cancelled() {
                break;
            }
            match self.run_round().await {
                Ok(RoundEnd::Completed) => {}
                Ok(RoundEnd::Cancelled) => break,
                Err(err) => {
                    error!(error = %err, "round cycle failed, pausing before the next round");
                    if self.pause(ERROR_PAUSE).await {
                        break;
                    }
                }
            }
        }
        self.state.game.release_scheduler();
        info!("round scheduler stopped");
    }

    /// One full betting -> spinning -> result cycle.
    async fn run_round(&self) -> Result<RoundEnd, DomainError> {
        let state = &self.state;
        let config = &state.config;

        // Betting: next round id, cleared bet set, open window.
        let round_id = {
            let mut game = state.game.lock().await;
            let round_id = game.open_round(config.betting_seconds);
            state.game.publish_snapshot(&game);
            round_id
        };
        debug!(round_id, "betting open");
        state.events.publish(EventEnvelope::RoundOpened {
            round_id,
            betting_seconds: config.betting_seconds,
        });
        if self.countdown().await {
            return Ok(RoundEnd::Cancelled);
        }

        // Spinning: bet set frozen, clients animate.
        {
            let mut game = state.game.lock().await;
            game.begin_spin(config.spinning_seconds);
            state.game.publish_snapshot(&game);
        }
        debug!(round_id, "bets frozen, spinning");
        state.events.publish(EventEnvelope::SpinStarted { round_id });
        let cancelled_mid_spin = self.countdown().await;

        // Result: draw, record, settle. Settlement always runs to
        // completion, even when shutdown was requested mid-spin.
        let outcome = {
            let mut rng = round_rng(self.base_seed, round_id);
            config.wheel.draw(&mut rng)
        };
        let (bets, history) = {
            let mut game = state.game.lock().await;
            game.begin_result(outcome, config.result_seconds)?;
            state.game.publish_snapshot(&game);
            (game.bets.clone(), game.history_tail())
        };
        info!(
            round_id,
            pocket = outcome.pocket,
            color = %outcome.color,
            bets = bets.len(),
            "outcome drawn"
        );

        self.settlement
            .settle_round(
                state.store.as_ref(),
                round_id,
                &bets,
                outcome,
                &config.multipliers,
            )
            .await;
        if let Err(err) = state.store.record_round_result(round_id, outcome).await {
            // The round already settled; losing the history row must not
            // kill the cycle.
            warn!(round_id, error = %err, "failed to persist round result");
        }
        state.events.publish(EventEnvelope::RoundResult {
            round_id,
            outcome,
            history,
        });

        if cancelled_mid_spin || self.countdown().await {
            return Ok(RoundEnd::Cancelled);
        }
        Ok(RoundEnd::Completed)
    }

    /// Count the current phase down to zero, publishing a tick every
    /// second. Returns true if shutdown was requested mid-phase.
    async fn countdown(&self) -> bool {
        loop {
            let (round_id, phase, seconds_remaining) = {
                let game = self.state.game.lock().await;
                (
                    game.round.id,
                    game.round.phase,
                    game.round.seconds_remaining,
                )
            };
            self.state.events.publish(EventEnvelope::PhaseTick {
                round_id,
                phase,
                seconds_remaining,
            });
            if seconds_remaining == 0 {
                return false;
            }

            if self.pause(Duration::from_secs(1)).await {
                return true;
            }

            let mut game = self.state.game.lock().await;
            game.tick_second();
            self.state.game.publish_snapshot(&game);
        }
    }

    /// Cancellable sleep; true means the token fired first.
    async fn pause(&self, duration: Duration) -> bool {
        tokio::select! {
            _ = self.cancel.cancelled() => true,
            _ = sleep(duration) => false,
        }
    }
}
