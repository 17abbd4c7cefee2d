//! Domain layer: pure game logic types and helpers.

pub mod bet;
pub mod payout;
pub mod round;
pub mod seeding;
pub mod wheel;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_payout;
#[cfg(test)]
mod tests_props_payout;
#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_wheel;

// Re-exports for ergonomics
pub use bet::{validate_stake, Bet, BetChoice};
pub use payout::{payout_for, settlement_plan, MultiplierTable, Settlement};
pub use round::{GameState, HistoryEntry, Phase, Round, StateSnapshot};
pub use seeding::{derive_round_seed, round_rng};
pub use wheel::{Color, Outcome, Wheel, EUROPEAN_RED_POCKETS};
