use std::fmt;

use crate::card::Card;
use crate::enums::{Color, Rank};
use crate::subset::ColorSet;

pub const MAX_CARDS_ON_TABLE: usize = 25;

/// The shared board: for each color, the rank of the last card played on it.
#[derive(Clone, Debug, Default)]
pub struct Table {
    fireworks: [u8; 5],
    count_of_cards: usize,
}

impl Table {
    pub fn new() -> Self {
        Table::default()
    }

    /// Places a card whose legality the caller has already checked.
    pub fn put_card(&mut self, card: &Card) {
        self.fireworks[card.get_color().index()] += 1;
        self.count_of_cards += 1;
    }

    pub fn get_rank_of_last_card_with_color(&self, color: Color) -> u8 {
        self.fireworks[color.index()]
    }

    pub fn is_playable(&self, card: &Card) -> bool {
        self.get_rank_of_last_card_with_color(card.get_color()) + 1 == card.get_rank().value()
    }

    /// Colors on which a card of `rank` could not be played right now.
    pub fn invalid_colors_for_rank(&self, rank: Rank) -> ColorSet {
        Color::ALL
            .into_iter()
            .filter(|color| self.fireworks[color.index()] != rank.value() - 1)
            .collect()
    }

    pub fn count_of_cards(&self) -> usize {
        self.count_of_cards
    }

    pub fn is_full(&self) -> bool {
        self.count_of_cards >= MAX_CARDS_ON_TABLE
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in Color::ALL {
            write!(f, "{}:{} ", color, self.fireworks[color.index()])?;
        }
        Ok(())
    }
}
