//! Property tests for payout computation (pure domain, no store).

use proptest::prelude::*;

use crate::domain::bet::{Bet, BetChoice};
use crate::domain::payout::{payout_for, settlement_plan, MultiplierTable};
use crate::domain::test_prelude;
use crate::domain::wheel::Wheel;

fn arb_choice() -> impl Strategy<Value = BetChoice> {
    prop_oneof![
        Just(BetChoice::Red),
        Just(BetChoice::Black),
        Just(BetChoice::Green),
    ]
}

fn arb_table() -> impl Strategy<Value = MultiplierTable> {
    (2i64..=3, 2i64..=3, 10i64..=40).prop_map(|(red, black, green)| MultiplierTable {
        red,
        black,
        green,
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Payout is stake x multiplier on a color match and exactly zero
    /// otherwise, for every pocket of both wheel layouts.
    #[test]
    fn prop_payout_is_multiplier_or_zero(
        choice in arb_choice(),
        table in arb_table(),
        stake in 1i64..=10_000,
        pocket in 0u8..37,
        compact in any::<bool>(),
    ) {
        let wheel = if compact { Wheel::Compact } else { Wheel::European };
        let pocket = pocket % wheel.pockets();
        let outcome = crate::domain::wheel::Outcome { pocket, color: wheel.color_of(pocket) };

        let payout = payout_for(choice, outcome, stake, &table);
        if choice.color() == outcome.color {
            prop_assert_eq!(payout, stake * table.for_color(outcome.color));
            prop_assert!(payout >= stake, "winning payout must at least return the stake");
        } else {
            prop_assert_eq!(payout, 0);
        }
    }

    /// A settlement plan has one line per bet, in order, and every line
    /// agrees with the single-bet payout function.
    #[test]
    fn prop_plan_matches_per_bet_payout(
        choices in proptest::collection::vec((arb_choice(), 1i64..=500), 0..12),
        table in arb_table(),
        pocket in 0u8..37,
    ) {
        let outcome = crate::domain::wheel::Outcome {
            pocket,
            color: Wheel::European.color_of(pocket),
        };
        let bets: Vec<Bet> = choices
            .iter()
            .enumerate()
            .map(|(i, (choice, stake))| {
                let mut bet = Bet::new(i as i64 + 1, 9, *choice, *stake);
                bet.id = Some(i as i64 + 100);
                bet
            })
            .collect();

        let plan = settlement_plan(&bets, outcome, &table);
        prop_assert_eq!(plan.len(), bets.len());
        for (line, bet) in plan.iter().zip(&bets) {
            prop_assert_eq!(line.user_id, bet.user_id);
            prop_assert_eq!(line.bet_id, bet.id);
            prop_assert_eq!(line.stake, bet.amount);
            prop_assert_eq!(line.payout, payout_for(bet.choice, outcome, bet.amount, &table));
        }

        // The house never pays out on a color nobody backed.
        let total: i64 = plan.iter().map(|line| line.payout).sum();
        if bets.iter().all(|b| b.choice.color() != outcome.color) {
            prop_assert_eq!(total, 0);
        }
    }
}
