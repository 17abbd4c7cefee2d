#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod events;
pub mod infra;
pub mod repos;
pub mod services;
pub mod state;
pub mod store;

// Re-exports for public API
pub use config::db::{db_url, DbKind, DbProfile};
pub use config::game::GameConfig;
pub use domain::bet::BetChoice;
pub use domain::round::{Phase, StateSnapshot};
pub use domain::wheel::{Color, Outcome, Wheel};
pub use error::AppError;
pub use events::{EventBus, EventEnvelope};
pub use infra::db::connect_db;
pub use services::betting::{BetReceipt, BetService};
pub use services::scheduler::{RoundScheduler, SchedulerHandle};
pub use services::settlement::{SettlementReport, SettlementService};
pub use state::app_state::AppState;
pub use store::{GameStore, MemoryGameStore, SeaGameStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    wheelhouse_test_support::test_logging::init();
}
