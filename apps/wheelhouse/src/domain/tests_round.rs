use crate::domain::bet::{Bet, BetChoice};
use crate::domain::round::{GameState, Phase};
use crate::domain::wheel::{Color, Outcome};

fn outcome(pocket: u8, color: Color) -> Outcome {
    Outcome { pocket, color }
}

#[test]
fn fresh_state_is_idle_until_round_one_opens() {
    let mut state = GameState::new(10);
    assert_eq!(state.round.id, 0);
    assert_eq!(state.round.phase, Phase::Result);
    assert!(state.last_result().is_none());

    let id = state.open_round(30);
    assert_eq!(id, 1);
    assert_eq!(state.round.phase, Phase::Betting);
    assert_eq!(state.round.seconds_remaining, 30);
}

#[test]
fn round_ids_strictly_increase() {
    let mut state = GameState::new(10);
    let mut last = 0;
    for _ in 0..50 {
        let id = state.open_round(30);
        assert!(id > last);
        last = id;
        state.begin_spin(10);
        state
            .begin_result(outcome(5, Color::Red), 5)
            .expect("first outcome write");
    }
}

#[test]
fn opening_a_round_clears_the_bet_set() {
    let mut state = GameState::new(10);
    state.open_round(30);
    state.bets.push(Bet::new(1, 1, BetChoice::Red, 100));
    state.bets.push(Bet::new(2, 1, BetChoice::Black, 50));

    state.open_round(30);
    assert!(state.bets.is_empty());
}

#[test]
fn outcome_is_write_once() {
    let mut state = GameState::new(10);
    state.open_round(30);
    state.begin_spin(10);
    state
        .begin_result(outcome(0, Color::Green), 5)
        .expect("first outcome write");
    let err = state
        .begin_result(outcome(12, Color::Red), 5)
        .expect_err("second write must fail");
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(state.round.outcome, Some(outcome(0, Color::Green)));
}

#[test]
fn history_never_holds_an_undrawn_round_and_is_capped() {
    let mut state = GameState::new(3);
    for i in 0..5u8 {
        state.open_round(30);
        // While betting/spinning the round must not appear in history.
        assert!(state
            .history
            .iter()
            .all(|entry| entry.round_id != state.round.id));
        state.begin_spin(10);
        state
            .begin_result(outcome(i, Color::Black), 5)
            .expect("outcome write");
    }

    assert_eq!(state.history.len(), 3);
    // Newest first.
    let ids: Vec<u64> = state.history.iter().map(|e| e.round_id).collect();
    assert_eq!(ids, vec![5, 4, 3]);
}

#[test]
fn tick_counts_down_and_reports_elapse() {
    let mut state = GameState::new(10);
    state.open_round(3);
    assert!(!state.tick_second());
    assert!(!state.tick_second());
    assert!(state.tick_second());
    // A spent phase stays spent.
    assert!(state.tick_second());
    assert_eq!(state.round.seconds_remaining, 0);
}

#[test]
fn snapshot_reports_latest_drawn_result() {
    let mut state = GameState::new(10);
    state.open_round(30);
    assert_eq!(state.snapshot().last_result, None);

    state.begin_spin(10);
    state
        .begin_result(outcome(17, Color::Black), 5)
        .expect("outcome write");

    let snap = state.snapshot();
    assert_eq!(snap.round_id, 1);
    assert_eq!(snap.phase, Phase::Result);
    assert_eq!(snap.last_result, Some(outcome(17, Color::Black)));

    // The previous result is still the latest while the next round bets.
    state.open_round(30);
    let snap = state.snapshot();
    assert_eq!(snap.round_id, 2);
    assert_eq!(snap.phase, Phase::Betting);
    assert_eq!(snap.last_result, Some(outcome(17, Color::Black)));
}
