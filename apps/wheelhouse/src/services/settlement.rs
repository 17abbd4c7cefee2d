//! Round settlement: apply the payout plan through the store, one bet at a
//! time, without letting one failure take down the batch.

use tracing::{info, warn};

use crate::domain::bet::Bet;
use crate::domain::payout::{settlement_plan, MultiplierTable};
use crate::domain::wheel::Outcome;
use crate::store::GameStore;

/// Tally of one round's settlement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettlementReport {
    pub settled: usize,
    pub failed: usize,
    pub winners: usize,
    pub total_paid: i64,
}

#[derive(Default)]
pub struct SettlementService;

impl SettlementService {
    /// Settle every bet of a finished round.
    ///
    /// A store failure for one bet is logged and skipped; the remaining
    /// bets still settle. There is no refund or partial-settlement path: a
    /// bet either fully settles or stays unsettled for the log to report.
    pub async fn settle_round(
        &self,
        store: &dyn GameStore,
        round_id: u64,
        bets: &[Bet],
        outcome: Outcome,
        table: &MultiplierTable,
    ) -> SettlementReport {
        let plan = settlement_plan(bets, outcome, table);
        let mut report = SettlementReport::default();

        for line in &plan {
            match store.settle_bet(line).await {
                Ok(()) => {
                    report.settled += 1;
                    if line.won() {
                        report.winners += 1;
                        report.total_paid += line.payout;
                    }
                }
                Err(err) => {
                    report.failed += 1;
                    warn!(
                        round_id,
                        user_id = line.user_id,
                        bet_id = ?line.bet_id,
                        error = %err,
                        "bet settlement failed, skipping"
                    );
                }
            }
        }

        info!(
            round_id,
            pocket = outcome.pocket,
            color = %outcome.color,
            settled = report.settled,
            failed = report.failed,
            winners = report.winners,
            total_paid = report.total_paid,
            "round settled"
        );
        report
    }
}
