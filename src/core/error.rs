use thiserror::Error;

/// Everything that can go wrong turning text into a `Hand`.
///
/// Errors only come out of construction. Once a `Hand` exists it is
/// valid and comparisons on it can't fail.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum InvalidCardError {
    #[error("Unexpected rank character {0:?}, expected one of 23456789TJQKA")]
    UnexpectedValueChar(char),
    #[error("Unexpected suit character {0:?}, expected one of SCHD")]
    UnexpectedSuitChar(char),
    #[error("Card token {0:?} is not exactly two characters")]
    InvalidToken(String),
    #[error("A hand needs exactly 5 cards, got {0}")]
    WrongCardCount(usize),
}
