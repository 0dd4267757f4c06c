use std::collections::BTreeSet;
use std::fmt;

use log::{debug, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::enums::*;
use crate::error::GameError;
use crate::player::{HAND_SIZE, Player};
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    IllegalPlay,
    FalseHint,
    IncompleteHint,
    TableFull,
    DeckExhausted,
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FinishReason::IllegalPlay => "illegal play",
            FinishReason::FalseHint => "hint named a card that does not match",
            FinishReason::IncompleteHint => "hint left out a matching card",
            FinishReason::TableFull => "table is full",
            FinishReason::DeckExhausted => "deck is exhausted",
        };
        f.write_str(text)
    }
}

/// Counters reported once a game is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub turn: usize,
    pub played_cards: usize,
    pub risky_moves: usize,
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn: {}, cards: {}, with risk: {}", self.turn, self.played_cards, self.risky_moves)
    }
}

/// Turn-resolution state machine.
///
/// A game is created empty and (re)initialised by [`Game::start_new_game`],
/// after which the deck is filled with [`Game::add_card_to_deck`] and hands
/// are dealt with [`Game::deal_cards_to_players`]. Every accepted move
/// advances the turn; any rule violation finishes the game for good.
#[derive(Debug, Default)]
pub struct Game {
    number_of_last_move: usize,
    count_of_risky_moves: usize,
    count_of_played_cards: usize,
    is_finished: bool,
    finish_reason: Option<FinishReason>,

    count_of_players: usize,
    current_player_number: usize,
    receiving_player_number: usize,
    deck: Deck,
    table: Table,
    players: Vec<Player>,
}

impl Game {
    pub fn new() -> Self {
        Game::default()
    }

    pub fn start_new_game(&mut self, count_of_players: usize) -> Result<(), GameError> {
        if count_of_players < 2 {
            return Err(GameError::InvalidPlayerCount(count_of_players));
        }
        *self = Game {
            count_of_players,
            current_player_number: 0,
            receiving_player_number: 1,
            players: (0..count_of_players).map(|_| Player::new()).collect(),
            ..Game::default()
        };
        debug!("new game with {} players", count_of_players);
        Ok(())
    }

    pub fn add_card_to_deck(&mut self, card: Card) -> Result<(), GameError> {
        self.ensure_started()?;
        self.deck.add_card(card);
        Ok(())
    }

    /// Deals five cards to each player, one player at a time.
    pub fn deal_cards_to_players(&mut self) -> Result<(), GameError> {
        self.ensure_started()?;
        let needed = HAND_SIZE * self.count_of_players;
        if self.deck.count_of_cards() < needed {
            return Err(GameError::NotEnoughCards {
                needed,
                available: self.deck.count_of_cards(),
            });
        }
        for player in self.players.iter_mut() {
            for _ in 0..HAND_SIZE {
                player.add_card_from_deck(self.deck.take_card()?);
            }
        }
        Ok(())
    }

    pub fn apply_move(&mut self, mv: &Move) -> Result<MoveOutcome, GameError> {
        let player = self.current_player_number;
        let outcome = match mv {
            Move::Play(index) => self.play_card(*index),
            Move::Drop(index) => self.drop_card(*index),
            Move::TellColor(color, indices) => self.tell_color(*color, indices),
            Move::TellRank(rank, indices) => self.tell_rank(*rank, indices),
        }?;
        debug!("turn {}: player {} {} -> {:?}", self.number_of_last_move, player, mv, outcome);
        Ok(outcome)
    }

    pub fn play_card(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        let card = *self.players[self.current_player_number].get_card_by_number(index)?;
        let playable = self.table.is_playable(&card);
        if playable && self.deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }

        self.number_of_last_move += 1;

        let outcome = if playable {
            self.count_of_played_cards += 1;
            let risky = self.is_this_move_risky(&card);
            if risky {
                self.count_of_risky_moves += 1;
            }

            self.table.put_card(&card);
            let player = &mut self.players[self.current_player_number];
            player.lay_out_card(index)?;
            player.add_card_from_deck(self.deck.take_card()?);

            if self.table.is_full() {
                self.finish(FinishReason::TableFull);
            } else if self.deck.is_empty() {
                self.finish(FinishReason::DeckExhausted);
            }
            MoveOutcome::Played { card, risky }
        } else {
            // hand stays frozen as it was
            self.finish(FinishReason::IllegalPlay);
            MoveOutcome::Misplayed { card }
        };

        self.send_move_to_next_player();
        Ok(outcome)
    }

    pub fn drop_card(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        self.players[self.current_player_number].check_index(index)?;
        if self.deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }

        self.number_of_last_move += 1;

        let player = &mut self.players[self.current_player_number];
        let card = player.lay_out_card(index)?;
        player.add_card_from_deck(self.deck.take_card()?);

        if self.deck.is_empty() {
            self.finish(FinishReason::DeckExhausted);
        }

        self.send_move_to_next_player();
        Ok(MoveOutcome::Dropped { card })
    }

    pub fn tell_color(&mut self, color: Color, indices: &[usize]) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        let named = self.named_indices(indices)?;

        self.number_of_last_move += 1;

        let receiver = &mut self.players[self.receiving_player_number];
        let mut truthful = true;
        for &index in &named {
            truthful &= receiver.get_card_by_number(index)?.get_color() == color;
            receiver.disclose_card_color(index)?;
        }
        let complete = receiver.count_of_cards_with_color(color) == named.len();

        let others = Self::unnamed_indices(receiver, &named);
        receiver.supplement_invalid_colors(color, &others)?;

        self.judge_hint(truthful, complete);
        self.send_move_to_next_player();
        Ok(MoveOutcome::Hinted { truthful, complete })
    }

    pub fn tell_rank(&mut self, rank: Rank, indices: &[usize]) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        let named = self.named_indices(indices)?;

        self.number_of_last_move += 1;

        let receiver = &mut self.players[self.receiving_player_number];
        let mut truthful = true;
        for &index in &named {
            truthful &= receiver.get_card_by_number(index)?.get_rank() == rank;
            receiver.disclose_card_rank(index)?;
        }
        let complete = receiver.count_of_cards_with_rank(rank) == named.len();

        let others = Self::unnamed_indices(receiver, &named);
        receiver.supplement_invalid_ranks(rank, &others)?;

        self.judge_hint(truthful, complete);
        self.send_move_to_next_player();
        Ok(MoveOutcome::Hinted { truthful, complete })
    }

    // Risky unless the card is fully known, or its rank is known and every
    // color it could not be played on has already been ruled out.
    fn is_this_move_risky(&self, card: &Card) -> bool {
        let invalid_colors = self.table.invalid_colors_for_rank(card.get_rank());
        let colors_ruled_out = card.knowledge.ruled_out_colors().intersect(&invalid_colors) == invalid_colors;
        !card.is_known_card() && !(colors_ruled_out && card.knowledge.is_rank_known())
    }

    fn judge_hint(&mut self, truthful: bool, complete: bool) {
        if !truthful {
            self.finish(FinishReason::FalseHint);
        } else if !complete {
            self.finish(FinishReason::IncompleteHint);
        }
    }

    fn named_indices(&self, indices: &[usize]) -> Result<Vec<usize>, GameError> {
        if indices.is_empty() {
            return Err(GameError::EmptyHint);
        }
        let receiver = &self.players[self.receiving_player_number];
        for &index in indices {
            receiver.check_index(index)?;
        }
        Ok(indices.iter().copied().collect::<BTreeSet<_>>().into_iter().collect())
    }

    fn unnamed_indices(receiver: &Player, named: &[usize]) -> Vec<usize> {
        (0..receiver.hand_size()).filter(|index| !named.contains(index)).collect()
    }

    fn send_move_to_next_player(&mut self) {
        self.current_player_number = (self.current_player_number + 1) % self.count_of_players;
        self.receiving_player_number = (self.receiving_player_number + 1) % self.count_of_players;
    }

    fn finish(&mut self, reason: FinishReason) {
        self.is_finished = true;
        self.finish_reason = Some(reason);
        info!("game finished on turn {}: {} ({})", self.number_of_last_move, reason, self.stats());
    }

    fn ensure_started(&self) -> Result<(), GameError> {
        if self.players.is_empty() {
            return Err(GameError::NotStarted);
        }
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        self.ensure_started()?;
        if self.is_finished {
            return Err(GameError::AlreadyFinished);
        }
        Ok(())
    }

    pub fn number_of_last_move(&self) -> usize {
        self.number_of_last_move
    }

    pub fn count_of_played_cards(&self) -> usize {
        self.count_of_played_cards
    }

    pub fn count_of_risky_moves(&self) -> usize {
        self.count_of_risky_moves
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            turn: self.number_of_last_move,
            played_cards: self.count_of_played_cards,
            risky_moves: self.count_of_risky_moves,
        }
    }

    pub fn current_player_number(&self) -> usize {
        self.current_player_number
    }

    pub fn receiving_player_number(&self) -> usize {
        self.receiving_player_number
    }

    pub fn player(&self, number: usize) -> Option<&Player> {
        self.players.get(number)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(codes: &str) -> Vec<Card> {
        codes
            .split_whitespace()
            .map(|code| Card::from_codes(&code[..1], &code[1..]).unwrap())
            .collect()
    }

    fn started(codes: &str) -> Game {
        let mut game = Game::new();
        game.start_new_game(2).unwrap();
        for card in deck_of(codes) {
            game.add_card_to_deck(card).unwrap();
        }
        game.deal_cards_to_players().unwrap();
        game
    }

    // played cards keep their knowledge, so compare the physical card only
    fn played(outcome: MoveOutcome) -> (Color, Rank, bool) {
        match outcome {
            MoveOutcome::Played { card, risky } => (card.get_color(), card.get_rank(), risky),
            other => panic!("expected a successful play, got {:?}", other),
        }
    }

    #[test]
    fn moves_before_start_are_rejected() {
        let mut game = Game::new();
        assert_eq!(game.play_card(0), Err(GameError::NotStarted));
        assert_eq!(game.add_card_to_deck(Card::new(Color::Red, Rank::One)), Err(GameError::NotStarted));
    }

    #[test]
    fn single_player_game_is_rejected() {
        let mut game = Game::new();
        assert_eq!(game.start_new_game(1), Err(GameError::InvalidPlayerCount(1)));
    }

    #[test]
    fn dealing_needs_five_cards_per_player() {
        let mut game = Game::new();
        game.start_new_game(2).unwrap();
        for card in deck_of("R1 G1 B1") {
            game.add_card_to_deck(card).unwrap();
        }
        assert_eq!(game.deal_cards_to_players(), Err(GameError::NotEnoughCards { needed: 10, available: 3 }));
    }

    #[test]
    fn turn_pointers_advance_together() {
        let mut game = Game::new();
        game.start_new_game(3).unwrap();
        for card in deck_of("R1 R1 R1 R1 R1 G1 G1 G1 G1 G1 B1 B1 B1 B1 B1 W1 W1 W1 W1 W1") {
            game.add_card_to_deck(card).unwrap();
        }
        game.deal_cards_to_players().unwrap();

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push((game.current_player_number(), game.receiving_player_number()));
            game.drop_card(0).unwrap();
        }
        assert_eq!(seen, vec![(0, 1), (1, 2), (2, 0), (0, 1)]);
    }

    #[test]
    fn unknown_play_is_risky() {
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3 G3");
        let outcome = game.play_card(0).unwrap();
        assert_eq!(played(outcome), (Color::Red, Rank::One, true));
        assert_eq!(game.count_of_risky_moves(), 1);
    }

    #[test]
    fn ones_with_known_rank_are_safe_on_an_empty_table() {
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3 G3 B3");
        // player 0 drops, player 1 tells player 0 "all ones"
        game.drop_card(4).unwrap();
        game.tell_rank(Rank::One, &[0, 1, 2, 3]).unwrap();
        assert!(!game.is_finished());

        let outcome = game.play_card(0).unwrap();
        assert_eq!(played(outcome), (Color::Red, Rank::One, false));
        assert_eq!(game.count_of_risky_moves(), 0);
        assert_eq!(game.count_of_played_cards(), 1);
    }

    #[test]
    fn known_rank_with_open_colors_is_still_risky() {
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3 G3");
        game.play_card(0).unwrap(); // Red -> 1
        game.tell_rank(Rank::One, &[0, 1, 2, 3]).unwrap();
        game.tell_rank(Rank::Two, &[0, 1, 2, 3, 4]).unwrap();
        assert!(!game.is_finished());

        // rank is known but nothing rules out the colors a two cannot go on
        let outcome = game.play_card(0).unwrap();
        assert_eq!(played(outcome.clone()), (Color::Red, Rank::Two, true));
        // the card leaves the hand carrying what was learned about it
        let MoveOutcome::Played { card, .. } = outcome else { unreachable!() };
        assert!(card.knowledge.is_rank_known());
        assert_eq!(game.count_of_risky_moves(), 2);
        assert_eq!(game.table().get_rank_of_last_card_with_color(Color::Red), 2);
        assert_eq!(game.finish_reason(), Some(FinishReason::DeckExhausted));
    }

    #[test]
    fn illegal_play_freezes_the_hand() {
        let mut game = started("R2 G1 B1 W1 Y1 R1 G2 B2 W2 Y2 R3");
        let outcome = game.play_card(0).unwrap();
        assert_eq!(outcome, MoveOutcome::Misplayed { card: Card::new(Color::Red, Rank::Two) });
        assert!(game.is_finished());
        assert_eq!(game.finish_reason(), Some(FinishReason::IllegalPlay));
        assert_eq!(game.count_of_played_cards(), 0);
        assert_eq!(game.number_of_last_move(), 1);
        assert_eq!(game.player(0).unwrap().hand()[0].get_rank(), Rank::Two);
        assert_eq!(game.deck().count_of_cards(), 1);
        assert_eq!(game.drop_card(0), Err(GameError::AlreadyFinished));
    }

    #[test]
    fn false_hint_finishes_and_still_rules_out() {
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3");
        let outcome = game.tell_color(Color::Red, &[0, 1]).unwrap();
        assert_eq!(outcome, MoveOutcome::Hinted { truthful: false, complete: false });
        assert_eq!(game.finish_reason(), Some(FinishReason::FalseHint));

        let hand = game.player(1).unwrap().hand();
        assert!(hand[0].knowledge.is_color_known());
        assert!(hand[1].knowledge.is_color_known());
        for card in &hand[2..] {
            assert!(card.knowledge.ruled_out_colors().has(Color::Red));
        }
    }

    #[test]
    fn rank_hint_rules_out_unnamed_cards() {
        let hand = "R1 G1 B1 W1 Y1 R2 G3 B2 W4 Y2 R3";

        let mut complete = started(hand);
        complete.tell_rank(Rank::Two, &[0, 2, 4]).unwrap();
        assert!(!complete.is_finished());
        let cards = complete.player(1).unwrap().hand();
        for index in [1, 3] {
            assert!(cards[index].knowledge.ruled_out_ranks().has(Rank::Two));
        }
        for index in [0, 2, 4] {
            assert!(cards[index].knowledge.is_rank_known());
            assert!(cards[index].knowledge.ruled_out_ranks().is_empty());
        }

        let mut incomplete = started(hand);
        incomplete.tell_rank(Rank::Two, &[0, 2]).unwrap();
        assert_eq!(incomplete.finish_reason(), Some(FinishReason::IncompleteHint));
        let cards = incomplete.player(1).unwrap().hand();
        for index in [1, 3, 4] {
            assert!(cards[index].knowledge.ruled_out_ranks().has(Rank::Two));
        }
    }

    #[test]
    fn false_hint_is_caught_even_when_counts_match() {
        // player 1 holds reds at 0 and 3; naming 0 and 1 has the right count
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 B2 R4 Y2 R3");
        game.tell_color(Color::Red, &[0, 1]).unwrap();
        assert_eq!(game.finish_reason(), Some(FinishReason::FalseHint));
    }

    #[test]
    fn incomplete_hint_finishes() {
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 R4 W2 Y2 R3");
        let outcome = game.tell_color(Color::Red, &[0]).unwrap();
        assert_eq!(outcome, MoveOutcome::Hinted { truthful: true, complete: false });
        assert_eq!(game.finish_reason(), Some(FinishReason::IncompleteHint));
        assert_eq!(game.current_player_number(), 1);
    }

    #[test]
    fn duplicate_hint_indices_count_once() {
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3");
        game.tell_color(Color::Red, &[0, 0]).unwrap();
        assert!(!game.is_finished());
    }

    #[test]
    fn rejected_moves_leave_the_game_untouched() {
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3");
        assert_eq!(game.tell_rank(Rank::Two, &[]), Err(GameError::EmptyHint));
        assert_eq!(
            game.tell_rank(Rank::Two, &[0, 7]),
            Err(GameError::CardIndexOutOfRange { index: 7, hand_size: 5 })
        );
        assert_eq!(game.number_of_last_move(), 0);
        assert_eq!(game.current_player_number(), 0);
        assert!(game.player(1).unwrap().hand()[0].knowledge.ruled_out_ranks().is_empty());
    }

    #[test]
    fn drawing_from_an_empty_deck_is_an_error() {
        let mut game = started("R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2");
        assert_eq!(game.drop_card(0), Err(GameError::EmptyDeck));
        assert_eq!(game.play_card(0), Err(GameError::EmptyDeck));
        assert_eq!(game.number_of_last_move(), 0);
    }

    #[test]
    fn stats_render_as_summary_line() {
        let stats = GameStats { turn: 12, played_cards: 4, risky_moves: 1 };
        assert_eq!(stats.to_string(), "Turn: 12, cards: 4, with risk: 1");
    }
}
