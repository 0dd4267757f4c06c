//! Referee for a two-or-more player Hanabi-style card game.
//!
//! [`game::Game`] resolves turns and keeps the per-card hint bookkeeping;
//! [`session::Session`] drives it from console lines and [`simulate`] plays
//! batches of games with automated strategies.

pub mod card;
pub mod command;
pub mod deck;
pub mod enums;
pub mod error;
pub mod game;
pub mod knowledge;
pub mod player;
pub mod session;
pub mod simulate;
pub mod strategies;
pub mod strategy;
pub mod subset;
pub mod table;

pub use card::Card;
pub use enums::{Color, Move, MoveOutcome, Rank};
pub use error::{GameError, ParseError};
pub use game::{FinishReason, Game, GameStats};
