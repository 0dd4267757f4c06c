//! Console command recognition.
//!
//! Lines are matched case-sensitively and anywhere within the line, the way
//! the referee's console protocol has always been read. Lines that match no
//! command are not errors; they are simply ignored by the caller.

use std::sync::LazyLock;

use regex::Regex;

use crate::card::Card;
use crate::enums::{Color, Move, Rank};
use crate::error::ParseError;

const START_MARKER: &str = "Start new game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a game whose deck holds these cards, top first.
    StartNewGame(Vec<Card>),
    Move(Move),
}

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($re).unwrap());
    };
}

pattern!(DECK_CARD, r"([RGBYW])([1-5])");
pattern!(PLAY, r"Play card ([0-4])");
pattern!(DROP, r"Drop card ([0-4])");
pattern!(TELL_COLOR, r"Tell color (Red|Green|Blue|White|Yellow) for cards((?: [0-4])+)");
pattern!(TELL_RANK, r"Tell rank ([1-5]) for cards((?: [0-4])+)");

pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    if line.contains(START_MARKER) {
        let cards = DECK_CARD
            .captures_iter(line)
            .map(|caps| Card::from_codes(&caps[1], &caps[2]))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Some(Command::StartNewGame(cards)));
    }

    if let Some(caps) = PLAY.captures(line) {
        return Ok(Some(Command::Move(Move::Play(parse_index(&caps[1])))));
    }
    if let Some(caps) = DROP.captures(line) {
        return Ok(Some(Command::Move(Move::Drop(parse_index(&caps[1])))));
    }
    if let Some(caps) = TELL_COLOR.captures(line) {
        let color: Color = caps[1].parse()?;
        return Ok(Some(Command::Move(Move::TellColor(color, parse_indices(&caps[2])))));
    }
    if let Some(caps) = TELL_RANK.captures(line) {
        let rank: Rank = caps[1].parse()?;
        return Ok(Some(Command::Move(Move::TellRank(rank, parse_indices(&caps[2])))));
    }

    Ok(None)
}

// captures are a single digit 0-4
fn parse_index(token: &str) -> usize {
    token.bytes().fold(0, |index, digit| index * 10 + (digit - b'0') as usize)
}

fn parse_indices(tokens: &str) -> Vec<usize> {
    tokens.split_whitespace().map(parse_index).collect()
}
