//! Wheel geometry: pockets, colors, and the uniform draw.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Color a pocket can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Red pockets of the European wheel; the remaining 18 of 1..=36 are black.
pub const EUROPEAN_RED_POCKETS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Wheel layout. `European` is the canonical 37-pocket wheel; `Compact` is
/// the 15-sector wheel (one green, seven red, seven black) some deployments
/// run with a 14x green payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wheel {
    European,
    Compact,
}

impl Wheel {
    /// Number of pockets; draws land in `0..pockets()`.
    pub fn pockets(&self) -> u8 {
        match self {
            Wheel::European => 37,
            Wheel::Compact => 15,
        }
    }

    /// Fixed pocket -> color lookup. Pocket 0 is green on every layout.
    pub fn color_of(&self, pocket: u8) -> Color {
        if pocket == 0 {
            return Color::Green;
        }
        match self {
            Wheel::European => {
                if EUROPEAN_RED_POCKETS.contains(&pocket) {
                    Color::Red
                } else {
                    Color::Black
                }
            }
            // Sectors alternate around the compact wheel: odd red, even black.
            Wheel::Compact => {
                if pocket % 2 == 1 {
                    Color::Red
                } else {
                    Color::Black
                }
            }
        }
    }

    /// Draw a uniformly random pocket and derive its color.
    pub fn draw(&self, rng: &mut impl Rng) -> Outcome {
        let pocket = rng.random_range(0..self.pockets());
        Outcome {
            pocket,
            color: self.color_of(pocket),
        }
    }
}

/// A drawn result: the pocket plus its derived color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub pocket: u8,
    pub color: Color,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.pocket, self.color)
    }
}
