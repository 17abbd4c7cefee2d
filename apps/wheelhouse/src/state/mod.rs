pub mod app_state;
pub mod shared_game;

pub use app_state::AppState;
pub use shared_game::SharedGame;
