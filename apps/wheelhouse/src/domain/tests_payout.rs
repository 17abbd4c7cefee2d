use crate::domain::bet::{Bet, BetChoice};
use crate::domain::payout::{payout_for, settlement_plan, MultiplierTable};
use crate::domain::wheel::{Color, Outcome};

fn table() -> MultiplierTable {
    MultiplierTable {
        red: 2,
        black: 2,
        green: 36,
    }
}

#[test]
fn losing_color_pays_nothing() {
    // Balance 1000, bet 100 on red, black comes up: the stake is already
    // gone at intake and settlement adds nothing back.
    let outcome = Outcome {
        pocket: 20,
        color: Color::Black,
    };
    assert_eq!(payout_for(BetChoice::Red, outcome, 100, &table()), 0);
}

#[test]
fn green_hit_pays_the_long_shot_ratio() {
    let outcome = Outcome {
        pocket: 0,
        color: Color::Green,
    };
    assert_eq!(payout_for(BetChoice::Green, outcome, 50, &table()), 1800);
}

#[test]
fn even_colors_pay_double() {
    let outcome = Outcome {
        pocket: 3,
        color: Color::Red,
    };
    assert_eq!(payout_for(BetChoice::Red, outcome, 250, &table()), 500);
    assert_eq!(payout_for(BetChoice::Black, outcome, 250, &table()), 0);
}

#[test]
fn plan_covers_every_bet_once() {
    let outcome = Outcome {
        pocket: 14,
        color: Color::Red,
    };
    let bets = vec![
        Bet {
            id: Some(1),
            ..Bet::new(10, 7, BetChoice::Red, 100)
        },
        Bet {
            id: Some(2),
            ..Bet::new(11, 7, BetChoice::Black, 40)
        },
        Bet {
            id: Some(3),
            ..Bet::new(12, 7, BetChoice::Green, 5)
        },
    ];

    let plan = settlement_plan(&bets, outcome, &table());
    assert_eq!(plan.len(), 3);

    assert_eq!(plan[0].user_id, 10);
    assert_eq!(plan[0].payout, 200);
    assert!(plan[0].won());

    assert_eq!(plan[1].user_id, 11);
    assert_eq!(plan[1].payout, 0);
    assert!(!plan[1].won());

    assert_eq!(plan[2].user_id, 12);
    assert_eq!(plan[2].payout, 0);

    for (line, bet) in plan.iter().zip(&bets) {
        assert_eq!(line.bet_id, bet.id);
        assert_eq!(line.round_id, 7);
        assert_eq!(line.stake, bet.amount);
    }
}

#[test]
fn empty_round_settles_to_nothing() {
    let outcome = Outcome {
        pocket: 0,
        color: Color::Green,
    };
    assert!(settlement_plan(&[], outcome, &table()).is_empty());
}
