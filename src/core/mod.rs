/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors raised while parsing cards and hands.
mod error;
/// Export `InvalidCardError`
pub use self::error::InvalidCardError;

/// Everything in there is about a five card hand: parsing it, keeping
/// it in canonical order and comparing it.
mod hand;
/// Export `Hand` and `Outcome`
pub use self::hand::{Hand, Outcome, HAND_SIZE};

/// Feature detectors and the classifier that turns cards into a `Rank`.
mod rank;
/// Export `Rank`, `HandType`, `Kind`, the detectors and the `Rankable` trait.
pub use self::rank::{
    is_five_high_straight, is_flush, is_straight, same_kind, value_groups, HandType, Kind, Rank,
    Rankable,
};
