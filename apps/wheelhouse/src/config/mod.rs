pub mod db;
pub mod game;

pub use db::{db_url, DbKind, DbProfile};
pub use game::GameConfig;
