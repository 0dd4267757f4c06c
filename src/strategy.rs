use rand::rngs::StdRng;

use crate::card::Card;
use crate::enums::*;
use crate::game::Game;
use crate::knowledge::Knowledge;
use crate::table::Table;

/// One of the mover's own cards, as far as the mover can tell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OwnCard {
    pub color: Option<Color>,
    pub rank: Option<Rank>,
    pub knowledge: Knowledge,
}

impl From<&Card> for OwnCard {
    fn from(card: &Card) -> Self {
        OwnCard {
            color: card.knowledge.is_color_known().then(|| card.get_color()),
            rank: card.knowledge.is_rank_known().then(|| card.get_rank()),
            knowledge: card.knowledge,
        }
    }
}

/// What the player to move is allowed to see.
pub struct GameView<'a> {
    pub own_hand: Vec<OwnCard>,
    pub partner_hand: &'a [Card],
    pub table: &'a Table,
    pub cards_left: usize,
}

impl<'a> GameView<'a> {
    pub fn new(game: &'a Game) -> Option<Self> {
        let own = game.player(game.current_player_number())?;
        let partner = game.player(game.receiving_player_number())?;
        Some(GameView {
            own_hand: own.hand().iter().map(OwnCard::from).collect(),
            partner_hand: partner.hand(),
            table: game.table(),
            cards_left: game.deck().count_of_cards(),
        })
    }

    /// Truthful, complete hint naming every partner card of `color`.
    pub fn color_hint(&self, color: Color) -> Option<Move> {
        let indices = indices_where(self.partner_hand, |card| card.get_color() == color);
        (!indices.is_empty()).then(|| Move::TellColor(color, indices))
    }

    /// Truthful, complete hint naming every partner card of `rank`.
    pub fn rank_hint(&self, rank: Rank) -> Option<Move> {
        let indices = indices_where(self.partner_hand, |card| card.get_rank() == rank);
        (!indices.is_empty()).then(|| Move::TellRank(rank, indices))
    }
}

fn indices_where(hand: &[Card], predicate: impl Fn(&Card) -> bool) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| predicate(card))
        .map(|(index, _)| index)
        .collect()
}

pub trait Strategy {
    fn decide_move(&mut self, view: &GameView, rng: &mut StdRng) -> Move;
}
