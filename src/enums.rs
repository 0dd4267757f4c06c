use std::fmt;
use std::str::FromStr;

use crate::card::Card;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    White,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    One = 1,
    Two,
    Three,
    Four,
    Five,
}

// case-sensitive; single letters for decks, full names for hints
const COLOR_CODES: [(&str, Color); 10] = [
    ("R", Color::Red),
    ("G", Color::Green),
    ("B", Color::Blue),
    ("W", Color::White),
    ("Y", Color::Yellow),
    ("Red", Color::Red),
    ("Green", Color::Green),
    ("Blue", Color::Blue),
    ("White", Color::White),
    ("Yellow", Color::Yellow),
];

const RANK_CODES: [(&str, Rank); 5] = [
    ("1", Rank::One),
    ("2", Rank::Two),
    ("3", Rank::Three),
    ("4", Rank::Four),
    ("5", Rank::Five),
];

impl Color {
    pub const ALL: [Color; 5] = [Color::Red, Color::Yellow, Color::Blue, Color::White, Color::Green];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Rank {
    pub const ALL: [Rank; 5] = [Rank::One, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

    /// Numeric value, 1 through 5.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1..=5 => Some(Rank::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        COLOR_CODES
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, color)| *color)
            .ok_or_else(|| ParseError::UnknownColor(code.to_string()))
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        RANK_CODES
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, rank)| *rank)
            .ok_or_else(|| ParseError::UnknownRank(code.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A validated move as handed over by the command layer or a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Play(usize),
    Drop(usize),
    TellColor(Color, Vec<usize>),
    TellRank(Rank, Vec<usize>),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices = |cards: &[usize]| {
            cards.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
        };
        match self {
            Move::Play(index) => write!(f, "Play card {}", index),
            Move::Drop(index) => write!(f, "Drop card {}", index),
            Move::TellColor(color, cards) => write!(f, "Tell color {} for cards {}", color, indices(cards)),
            Move::TellRank(rank, cards) => write!(f, "Tell rank {} for cards {}", rank, indices(cards)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Played { card: Card, risky: bool },
    Misplayed { card: Card },
    Dropped { card: Card },
    Hinted { truthful: bool, complete: bool },
}
