//! DTOs for the rounds_sea adapter.

use crate::entities::bets::BetColor;

/// DTO for recording a finished round's outcome.
#[derive(Debug, Clone)]
pub struct RoundResultCreate {
    pub round_no: i64,
    pub pocket: i16,
    pub color: BetColor,
}
