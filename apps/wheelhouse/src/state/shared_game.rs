//! The single owned game-state record and its read paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex, MutexGuard};

use crate::domain::round::{GameState, StateSnapshot};

/// Shared handle to the mutable game state.
///
/// All mutation is serialized through one async mutex: the scheduler task
/// holds it across phase transitions, and bet intake holds it across the
/// balance debit so a bet can never straddle a phase change. Readers never
/// touch the mutex; they get snapshots from a watch channel refreshed on
/// every mutation.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
    snapshot_tx: Arc<watch::Sender<StateSnapshot>>,
    scheduler_active: Arc<AtomicBool>,
}

impl SharedGame {
    pub fn new(history_depth: usize) -> Self {
        let state = GameState::new(history_depth);
        let (snapshot_tx, _) = watch::channel(state.snapshot());
        Self {
            inner: Arc::new(Mutex::new(state)),
            snapshot_tx: Arc::new(snapshot_tx),
            scheduler_active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Read-only snapshot; safe to call from anywhere at any rate.
    pub fn current_state(&self) -> StateSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Watch stream of snapshots, updated on every state mutation.
    pub fn subscribe(&self) -> watch::Receiver<StateSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock().await
    }

    /// Refresh the snapshot channel after mutating locked state.
    pub(crate) fn publish_snapshot(&self, state: &GameState) {
        self.snapshot_tx.send_replace(state.snapshot());
    }

    /// Claim the single scheduler slot. One engine instance runs one loop;
    /// a second claim fails until the first releases.
    pub(crate) fn try_acquire_scheduler(&self) -> bool {
        self.scheduler_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn release_scheduler(&self) {
        self.scheduler_active.store(false, Ordering::Release);
    }
}
