pub mod bets_sea;
pub mod rounds_sea;
pub mod users_sea;
