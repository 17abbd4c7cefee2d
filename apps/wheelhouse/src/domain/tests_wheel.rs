use crate::domain::wheel::{Color, Wheel, EUROPEAN_RED_POCKETS};

#[test]
fn zero_is_green_on_every_layout() {
    assert_eq!(Wheel::European.color_of(0), Color::Green);
    assert_eq!(Wheel::Compact.color_of(0), Color::Green);
}

#[test]
fn european_partition_is_eighteen_red_eighteen_black() {
    let mut reds = 0;
    let mut blacks = 0;
    for pocket in 1..Wheel::European.pockets() {
        match Wheel::European.color_of(pocket) {
            Color::Red => reds += 1,
            Color::Black => blacks += 1,
            Color::Green => panic!("only pocket 0 may be green, got {pocket}"),
        }
    }
    assert_eq!(reds, 18);
    assert_eq!(blacks, 18);
}

#[test]
fn european_red_pockets_match_the_table() {
    for pocket in EUROPEAN_RED_POCKETS {
        assert_eq!(Wheel::European.color_of(pocket), Color::Red, "pocket {pocket}");
    }
    // Spot-check the black side of the partition.
    for pocket in [2, 4, 10, 11, 17, 20, 28, 29, 35] {
        assert_eq!(Wheel::European.color_of(pocket), Color::Black, "pocket {pocket}");
    }
}

#[test]
fn compact_partition_is_seven_red_seven_black() {
    let mut reds = 0;
    let mut blacks = 0;
    for pocket in 1..Wheel::Compact.pockets() {
        match Wheel::Compact.color_of(pocket) {
            Color::Red => reds += 1,
            Color::Black => blacks += 1,
            Color::Green => panic!("only pocket 0 may be green, got {pocket}"),
        }
    }
    assert_eq!(reds, 7);
    assert_eq!(blacks, 7);
}

#[test]
fn draw_stays_on_the_wheel() {
    let mut rng = crate::domain::seeding::round_rng(1234, 1);
    for _ in 0..500 {
        let outcome = Wheel::European.draw(&mut rng);
        assert!(outcome.pocket < 37);
        assert_eq!(Wheel::European.color_of(outcome.pocket), outcome.color);
    }
    for _ in 0..500 {
        let outcome = Wheel::Compact.draw(&mut rng);
        assert!(outcome.pocket < 15);
        assert_eq!(Wheel::Compact.color_of(outcome.pocket), outcome.color);
    }
}
