use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::domain::round::StateSnapshot;
use crate::events::EventBus;
use crate::state::shared_game::SharedGame;
use crate::store::GameStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
    pub game: SharedGame,
    pub events: EventBus,
    pub config: GameConfig,
}

impl AppState {
    /// Create a new AppState around a store and a game configuration.
    pub fn new(store: Arc<dyn GameStore>, config: GameConfig) -> Self {
        Self {
            store,
            game: SharedGame::new(config.history_depth),
            events: EventBus::default(),
            config,
        }
    }

    /// Read-only snapshot of the current round; safe to poll every tick.
    pub fn current_state(&self) -> StateSnapshot {
        self.game.current_state()
    }
}
