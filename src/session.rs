use std::io::{self, BufRead, Write};

use log::warn;

use crate::card::Card;
use crate::command::{Command, parse_line};
use crate::error::GameError;
use crate::game::{Game, GameStats};

/// Feeds console lines to a [`Game`] and reports when a game ends.
pub struct Session {
    game: Game,
    players: usize,
    running: bool,
}

impl Session {
    pub fn new(players: usize) -> Self {
        Session {
            game: Game::new(),
            players,
            running: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the final stats when this line finished the game.
    pub fn feed_line(&mut self, line: &str) -> Option<GameStats> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return None,
            Err(err) => {
                warn!("ignoring `{}`: {}", line, err);
                return None;
            }
        };

        match command {
            Command::StartNewGame(cards) => {
                self.running = false;
                if let Err(err) = self.start(cards) {
                    warn!("could not start a game: {}", err);
                } else {
                    self.running = true;
                }
                None
            }
            Command::Move(mv) => {
                if !self.running || self.game.is_finished() {
                    return None;
                }
                match self.game.apply_move(&mv) {
                    Ok(_) if self.game.is_finished() => Some(self.game.stats()),
                    Ok(_) => None,
                    Err(err) => {
                        warn!("ignoring `{}`: {}", mv, err);
                        None
                    }
                }
            }
        }
    }

    fn start(&mut self, cards: Vec<Card>) -> Result<(), GameError> {
        self.game.start_new_game(self.players)?;
        for card in cards {
            self.game.add_card_to_deck(card)?;
        }
        self.game.deal_cards_to_players()
    }

    /// Reads commands until end of input, writing one summary line per finished game.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            if let Some(stats) = self.feed_line(&line?) {
                writeln!(output, "{}", stats)?;
            }
        }
        output.flush()
    }
}
