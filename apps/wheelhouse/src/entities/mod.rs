pub mod bets;
pub mod game_rounds;
pub mod users;
