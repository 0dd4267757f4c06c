use thiserror::Error;

/// Contract violations raised by the core. Rule violations made by players
/// are not errors; they finish the game instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no game has been started")]
    NotStarted,
    #[error("the game is already finished")]
    AlreadyFinished,
    #[error("a game needs at least 2 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("cannot take a card from an empty deck")]
    EmptyDeck,
    #[error("dealing needs {needed} cards but the deck holds {available}")]
    NotEnoughCards { needed: usize, available: usize },
    #[error("card index {index} is outside a hand of {hand_size}")]
    CardIndexOutOfRange { index: usize, hand_size: usize },
    #[error("a hint must name at least one card")]
    EmptyHint,
}

/// Failures mapping console tokens onto card values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown color code `{0}`")]
    UnknownColor(String),
    #[error("unknown rank code `{0}`")]
    UnknownRank(String),
}
