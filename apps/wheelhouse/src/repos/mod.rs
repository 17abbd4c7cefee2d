pub mod bets;
pub mod rounds;
pub mod users;
