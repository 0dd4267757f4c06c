use std::collections::VecDeque;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::enums::{Color, Rank};
use crate::error::GameError;

/// Cards leave the deck in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Deck::default()
    }

    pub fn new_full_deck() -> Self {
        let mut cards = VecDeque::new();
        let amounts = [3, 2, 2, 2, 1]; // Amounts of cards for ranks 1 to 5

        for color in Color::ALL {
            for rank in Rank::ALL {
                for _ in 0..amounts[(rank.value() - 1) as usize] {
                    cards.push_back(Card::new(color, rank));
                }
            }
        }

        Deck { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn take_card(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    pub fn count_of_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
