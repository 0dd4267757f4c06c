use std::fmt;

use crate::card::Card;
use crate::enums::{Color, Rank};
use crate::error::GameError;

pub const HAND_SIZE: usize = 5;

/// A player's hand. Removing a card shifts every later card down by one.
#[derive(Clone, Debug, Default)]
pub struct Player {
    hand: Vec<Card>,
}

impl Player {
    pub fn new() -> Self {
        Player {
            hand: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index < self.hand.len() {
            Ok(())
        } else {
            Err(GameError::CardIndexOutOfRange {
                index,
                hand_size: self.hand.len(),
            })
        }
    }

    pub fn get_card_by_number(&self, index: usize) -> Result<&Card, GameError> {
        self.check_index(index)?;
        Ok(&self.hand[index])
    }

    pub fn lay_out_card(&mut self, index: usize) -> Result<Card, GameError> {
        self.check_index(index)?;
        Ok(self.hand.remove(index))
    }

    pub fn add_card_from_deck(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn disclose_card_color(&mut self, index: usize) -> Result<(), GameError> {
        self.check_index(index)?;
        self.hand[index].knowledge.disclose_color();
        Ok(())
    }

    pub fn disclose_card_rank(&mut self, index: usize) -> Result<(), GameError> {
        self.check_index(index)?;
        self.hand[index].knowledge.disclose_rank();
        Ok(())
    }

    pub fn supplement_invalid_colors(&mut self, color: Color, indices: &[usize]) -> Result<(), GameError> {
        for &index in indices {
            self.check_index(index)?;
        }
        for &index in indices {
            self.hand[index].knowledge.rule_out_color(color);
        }
        Ok(())
    }

    pub fn supplement_invalid_ranks(&mut self, rank: Rank, indices: &[usize]) -> Result<(), GameError> {
        for &index in indices {
            self.check_index(index)?;
        }
        for &index in indices {
            self.hand[index].knowledge.rule_out_rank(rank);
        }
        Ok(())
    }

    pub fn count_of_cards_with_color(&self, color: Color) -> usize {
        self.hand.iter().filter(|card| card.get_color() == color).count()
    }

    pub fn count_of_cards_with_rank(&self, rank: Rank) -> usize {
        self.hand.iter().filter(|card| card.get_rank() == rank).count()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.hand {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(codes: &[(&str, &str)]) -> Player {
        let mut player = Player::new();
        for (color, rank) in codes {
            player.add_card_from_deck(Card::from_codes(color, rank).unwrap());
        }
        player
    }

    #[test]
    fn lay_out_card_shifts_later_cards_down() {
        let mut player = hand(&[("R", "1"), ("G", "2"), ("B", "3"), ("W", "4"), ("Y", "5")]);
        let removed = player.lay_out_card(1).unwrap();
        assert_eq!(removed.get_color(), Color::Green);
        assert_eq!(player.hand_size(), 4);
        assert_eq!(player.get_card_by_number(1).unwrap().get_color(), Color::Blue);
        assert_eq!(player.get_card_by_number(3).unwrap().get_color(), Color::Yellow);

        player.add_card_from_deck(Card::from_codes("R", "2").unwrap());
        assert_eq!(player.get_card_by_number(4).unwrap().get_rank(), Rank::Two);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut player = hand(&[("R", "1")]);
        assert_eq!(
            player.lay_out_card(3),
            Err(GameError::CardIndexOutOfRange { index: 3, hand_size: 1 })
        );
        assert!(player.supplement_invalid_colors(Color::Red, &[0, 1]).is_err());
        assert!(player.hand()[0].knowledge.ruled_out_colors().is_empty());
    }

    #[test]
    fn counts_by_color_and_rank() {
        let player = hand(&[("R", "1"), ("R", "2"), ("B", "1"), ("W", "1"), ("Y", "5")]);
        assert_eq!(player.count_of_cards_with_color(Color::Red), 2);
        assert_eq!(player.count_of_cards_with_color(Color::Green), 0);
        assert_eq!(player.count_of_cards_with_rank(Rank::One), 3);
    }

    #[test]
    fn supplements_promote_after_four_values() {
        let mut player = hand(&[("G", "1"), ("R", "1")]);
        for color in [Color::Red, Color::Yellow, Color::Blue, Color::White] {
            player.supplement_invalid_colors(color, &[0]).unwrap();
        }
        assert!(player.hand()[0].knowledge.is_color_known());
        assert!(!player.hand()[1].knowledge.is_color_known());

        player.disclose_card_rank(1).unwrap();
        assert!(player.hand()[1].knowledge.is_rank_known());
    }
}
