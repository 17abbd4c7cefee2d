//! Outbound event stream.
//!
//! Serde-tagged envelopes over a `tokio::sync::broadcast` channel. Transport
//! to clients (WebSocket room, long-poll endpoint, bot push) is a
//! collaborator concern; anything in-process just subscribes.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

use crate::domain::bet::BetChoice;
use crate::domain::round::{HistoryEntry, Phase};
use crate::domain::wheel::Outcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    RoundOpened {
        round_id: u64,
        betting_seconds: u32,
    },
    PhaseTick {
        round_id: u64,
        phase: Phase,
        seconds_remaining: u32,
    },
    BetAccepted {
        round_id: u64,
        user_id: i64,
        choice: BetChoice,
        amount: i64,
    },
    SpinStarted {
        round_id: u64,
    },
    RoundResult {
        round_id: u64,
        outcome: Outcome,
        /// Recent results, newest first, capped at the configured depth.
        history: Vec<HistoryEntry>,
    },
}

/// Broadcast fan-out for engine events. Cloning shares the channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.tx.subscribe()
    }

    /// Publish to all current subscribers. A send with no subscribers is
    /// not an error; slow subscribers observe `Lagged` on their receiver.
    pub fn publish(&self, event: EventEnvelope) {
        if self.tx.send(event).is_err() {
            trace!("event dropped: no subscribers");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
