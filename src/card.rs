use std::fmt;

use crate::enums::{Color, Rank};
use crate::error::ParseError;
use crate::knowledge::Knowledge;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Card {
    color: Color,
    rank: Rank,
    pub knowledge: Knowledge,
}

impl Card {
    pub fn new(color: Color, rank: Rank) -> Self {
        Card {
            color,
            rank,
            knowledge: Knowledge::new(),
        }
    }

    /// Builds a card from console codes such as `("R", "1")` or `("Red", "1")`.
    pub fn from_codes(color: &str, rank: &str) -> Result<Self, ParseError> {
        Ok(Card::new(color.parse()?, rank.parse()?))
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn get_rank(&self) -> Rank {
        self.rank
    }

    pub fn is_known_card(&self) -> bool {
        self.knowledge.is_fully_known()
    }
}

// Renders the color name, not the code it was parsed from: "R1" prints as "Red1".
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.rank)
    }
}
