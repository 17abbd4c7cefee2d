use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use wheelhouse::config::db::{db_url, DbKind, DbProfile};
use wheelhouse::config::game::GameConfig;
use wheelhouse::infra::db::connect_db;
use wheelhouse::services::scheduler::RoundScheduler;
use wheelhouse::state::app_state::AppState;
use wheelhouse::store::{GameStore, MemoryGameStore, SeaGameStore};

mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid game configuration: {e}");
            std::process::exit(1);
        }
    };

    let kind = match DbKind::from_env() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("❌ Invalid database selection: {e}");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn GameStore> = match kind {
        DbKind::Memory => {
            println!("⚠️ Using the in-memory store; balances die with the process");
            Arc::new(MemoryGameStore::new(config.starting_balance))
        }
        ref kind => {
            let url = match db_url(kind, DbProfile::Prod) {
                Ok(url) => url,
                Err(e) => {
                    eprintln!("❌ Failed to build database URL: {e}");
                    std::process::exit(1);
                }
            };
            let db = match connect_db(&url).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("❌ Failed to connect to database: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = Migrator::up(&db, None).await {
                eprintln!("❌ Migration failed: {e}");
                std::process::exit(1);
            }
            println!("✅ Database connected and migrated");
            Arc::new(SeaGameStore::new(db, config.starting_balance))
        }
    };

    println!(
        "🎡 Starting Wheelhouse: {:?} wheel, {}s betting / {}s spinning / {}s result",
        config.wheel, config.betting_seconds, config.spinning_seconds, config.result_seconds
    );

    let state = AppState::new(store, config);
    let handle = match RoundScheduler::new(state).start() {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("❌ Failed to start the round scheduler: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("❌ Failed to listen for shutdown signal: {e}");
    }
    println!("⏳ Shutting down, draining the current round");
    handle.shutdown().await;
    println!("👋 Wheelhouse stopped");
}
