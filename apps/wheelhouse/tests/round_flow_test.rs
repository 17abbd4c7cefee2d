//! End-to-end round lifecycle against the in-memory store.
//!
//! Runs under paused tokio time, so the one-second cadence elapses
//! instantly and every assertion is deterministic (the outcome seed is
//! pinned per test).

use wheelhouse::domain::payout::payout_for;
use wheelhouse::domain::seeding::round_rng;
use wheelhouse::events::EventEnvelope;
use wheelhouse::services::betting::BetService;
use wheelhouse::services::scheduler::RoundScheduler;
use wheelhouse::store::GameStore;
use wheelhouse::{BetChoice, Phase};

mod testkit {
    use std::sync::Arc;

    use tokio::sync::broadcast;
    use wheelhouse::events::EventEnvelope;
    use wheelhouse::store::MemoryGameStore;
    use wheelhouse::{AppState, GameConfig};

    /// Short phases so a full round is a handful of paused-time seconds.
    pub fn quick_config() -> GameConfig {
        let mut config = GameConfig::european();
        config.betting_seconds = 2;
        config.spinning_seconds = 1;
        config.result_seconds = 1;
        config.history_depth = 3;
        config.validate().expect("test config must validate");
        config
    }

    pub fn memory_state(config: GameConfig) -> AppState {
        let store = Arc::new(MemoryGameStore::new(config.starting_balance));
        AppState::new(store, config)
    }

    /// Drain events until the predicate picks one out.
    pub async fn wait_for<T>(
        events: &mut broadcast::Receiver<EventEnvelope>,
        mut pick: impl FnMut(&EventEnvelope) -> Option<T>,
    ) -> T {
        loop {
            let event = events.recv().await.expect("event stream closed");
            if let Some(value) = pick(&event) {
                return value;
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn bet_settles_against_the_drawn_outcome() {
    let config = testkit::quick_config();
    let state = testkit::memory_state(config.clone());
    let mut events = state.events.subscribe();

    let handle = RoundScheduler::with_seed(state.clone(), 42)
        .start()
        .expect("start scheduler");

    let round_id = testkit::wait_for(&mut events, |e| match e {
        EventEnvelope::RoundOpened { round_id, .. } => Some(*round_id),
        _ => None,
    })
    .await;
    assert_eq!(round_id, 1);

    let receipt = BetService
        .place_bet(&state, 7, BetChoice::Red, 100)
        .await
        .expect("bet accepted during betting");
    assert_eq!(receipt.balance, 900);
    assert_eq!(
        state.store.get_balance(7).await.expect("balance"),
        900,
        "stake leaves the balance at accept time"
    );

    let outcome = testkit::wait_for(&mut events, |e| match e {
        EventEnvelope::RoundResult {
            round_id: 1,
            outcome,
            ..
        } => Some(*outcome),
        _ => None,
    })
    .await;

    // The draw is a pure function of (seed, round id).
    let expected = config.wheel.draw(&mut round_rng(42, 1));
    assert_eq!(outcome, expected);

    let payout = payout_for(BetChoice::Red, outcome, 100, &config.multipliers);
    let profile = state.store.profile(7).await.expect("profile");
    assert_eq!(
        profile.balance,
        900 + payout,
        "settlement credits exactly the payout on top of the post-debit balance"
    );
    assert_eq!(profile.games_played, 1);
    if payout > 0 {
        assert_eq!((profile.total_won, profile.total_lost), (payout, 0));
    } else {
        assert_eq!((profile.total_won, profile.total_lost), (0, 100));
    }

    let bets = state.store.recent_bets(7, 10).await.expect("bets");
    assert_eq!(bets.len(), 1);
    assert!(bets[0].settled);
    assert_eq!(bets[0].payout, payout);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn round_ids_increase_and_history_is_capped() {
    let config = testkit::quick_config();
    let state = testkit::memory_state(config.clone());
    let mut events = state.events.subscribe();

    let handle = RoundScheduler::with_seed(state.clone(), 7)
        .start()
        .expect("start scheduler");

    let mut results = Vec::new();
    while results.len() < 5 {
        let (round_id, history_len) = testkit::wait_for(&mut events, |e| match e {
            EventEnvelope::RoundResult {
                round_id, history, ..
            } => Some((*round_id, history.len())),
            _ => None,
        })
        .await;
        results.push(round_id);
        assert!(
            history_len <= config.history_depth,
            "history tail must honor the configured depth"
        );
    }
    handle.shutdown().await;

    assert_eq!(results, vec![1, 2, 3, 4, 5]);

    let snapshot = state.game.current_state();
    assert!(snapshot.last_result.is_some());

    let recent = state.store.recent_rounds(10).await.expect("recent rounds");
    assert_eq!(recent.len(), 5);
    // Newest first, and every persisted row has a drawn outcome by
    // construction.
    let round_nos: Vec<i64> = recent.iter().map(|r| r.round_no).collect();
    assert_eq!(round_nos, vec![5, 4, 3, 2, 1]);
}

#[tokio::test(start_paused = true)]
async fn bets_after_the_freeze_are_rejected() {
    let config = testkit::quick_config();
    let state = testkit::memory_state(config);
    let mut events = state.events.subscribe();

    let handle = RoundScheduler::with_seed(state.clone(), 3)
        .start()
        .expect("start scheduler");

    testkit::wait_for(&mut events, |e| match e {
        EventEnvelope::SpinStarted { round_id: 1 } => Some(()),
        _ => None,
    })
    .await;

    let err = BetService
        .place_bet(&state, 11, BetChoice::Green, 10)
        .await
        .expect_err("betting is frozen while spinning");
    assert_eq!(err.code(), "BETTING_CLOSED");
    assert_eq!(
        state.store.get_balance(11).await.expect("balance"),
        1000,
        "a rejected bet mutates nothing"
    );

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn only_one_scheduler_may_own_the_round_clock() {
    let state = testkit::memory_state(testkit::quick_config());

    let handle = RoundScheduler::with_seed(state.clone(), 1)
        .start()
        .expect("first scheduler");
    let err = RoundScheduler::with_seed(state.clone(), 2)
        .start()
        .expect_err("second scheduler must be rejected");
    assert_eq!(err.code(), "VALIDATION_ERROR");

    handle.shutdown().await;

    // The slot frees up once the first loop drains.
    let handle = RoundScheduler::with_seed(state.clone(), 3)
        .start()
        .expect("restart after shutdown");
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_mid_betting_stops_the_clock() {
    let state = testkit::memory_state(testkit::quick_config());
    let mut events = state.events.subscribe();

    let handle = RoundScheduler::with_seed(state.clone(), 9)
        .start()
        .expect("start scheduler");

    testkit::wait_for(&mut events, |e| match e {
        EventEnvelope::RoundOpened { round_id: 1, .. } => Some(()),
        _ => None,
    })
    .await;

    handle.shutdown().await;

    // No new round opens after the drain.
    let snapshot = state.game.current_state();
    assert_eq!(snapshot.round_id, 1);
    assert_eq!(snapshot.phase, Phase::Betting);
}
