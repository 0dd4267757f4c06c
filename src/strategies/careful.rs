use rand::rngs::StdRng;

use crate::enums::{Color, Move};
use crate::strategy::{GameView, OwnCard, Strategy};

/// Plays only cards its knowledge proves playable, otherwise tells the
/// partner about a playable card, otherwise drops its least known card.
pub struct CarefulStrategy;

impl CarefulStrategy {
    pub fn new() -> Self {
        CarefulStrategy
    }

    fn provably_playable(view: &GameView, card: &OwnCard) -> bool {
        let Some(rank) = card.rank else {
            return false;
        };
        let candidates: Vec<Color> = match card.color {
            Some(color) => vec![color],
            None => card.knowledge.ruled_out_colors().complement().iter().collect(),
        };
        candidates
            .iter()
            .all(|color| view.table.get_rank_of_last_card_with_color(*color) + 1 == rank.value())
    }

    // A hint is only worth giving if it tells some named card something new.
    fn useful_hint(view: &GameView) -> Option<Move> {
        for card in view.partner_hand.iter().filter(|card| view.table.is_playable(card)) {
            if !card.knowledge.is_rank_known() {
                return view.rank_hint(card.get_rank());
            }
            if !card.knowledge.is_color_known() {
                return view.color_hint(card.get_color());
            }
        }
        None
    }

    fn least_known(view: &GameView) -> usize {
        view.own_hand
            .iter()
            .position(|card| card.color.is_none() && card.rank.is_none())
            .unwrap_or(0)
    }
}

impl Strategy for CarefulStrategy {
    fn decide_move(&mut self, view: &GameView, _rng: &mut StdRng) -> Move {
        if let Some(index) = view.own_hand.iter().position(|card| Self::provably_playable(view, card)) {
            return Move::Play(index);
        }
        if let Some(hint) = Self::useful_hint(view) {
            return hint;
        }
        Move::Drop(Self::least_known(view))
    }
}
