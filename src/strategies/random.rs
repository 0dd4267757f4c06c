use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::enums::{Color, Move, Rank};
use crate::strategy::{GameView, Strategy};

/// A simple strategy that picks a random move.
/// Plays and drops go to any hand position; hints are always truthful and complete.
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy
    }

    fn possible_moves(view: &GameView) -> Vec<Move> {
        let mut moves = Vec::new();

        for card_index in 0..view.own_hand.len() {
            moves.push(Move::Play(card_index));
            moves.push(Move::Drop(card_index));
        }

        // You can only hint a value the partner actually holds.
        moves.extend(Color::ALL.into_iter().filter_map(|color| view.color_hint(color)));
        moves.extend(Rank::ALL.into_iter().filter_map(|rank| view.rank_hint(rank)));

        moves
    }
}

impl Strategy for RandomStrategy {
    fn decide_move(&mut self, view: &GameView, rng: &mut StdRng) -> Move {
        let possible_moves = Self::possible_moves(view);
        // a dealt hand is never empty, so this only falls back on an empty view
        possible_moves.choose(rng).cloned().unwrap_or(Move::Drop(0))
    }
}
