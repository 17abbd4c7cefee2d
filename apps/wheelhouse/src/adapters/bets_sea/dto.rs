//! DTOs for the bets_sea adapter.

use crate::entities::bets::BetColor;

/// DTO for recording an accepted bet.
#[derive(Debug, Clone)]
pub struct BetCreate {
    pub user_id: i64,
    pub round_no: i64,
    pub choice: BetColor,
    pub amount: i64,
    pub potential_win: i64,
}
