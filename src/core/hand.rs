use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use super::{
    is_five_high_straight, value_groups, Card, HandType, InvalidCardError, Rank, Rankable, Value,
};

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 5;

/// Result of comparing one hand against another, from the point of view
/// of the hand doing the comparing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// The same result seen from the other side of the table.
    pub fn reverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::Tie => "Tie",
        };
        f.write_str(s)
    }
}

/// A five card poker hand.
///
/// The cards are kept sorted by value, lowest first. For a five high
/// straight the ace is moved to the front so the cards read
/// `A 2 3 4 5`. The rank is worked out once when the hand is built and
/// all the comparison traits go through it, so two hands with the same
/// values in different suits are equal. The text the hand was parsed
/// from is kept as given and is available from `Hand::text`.
///
/// # Examples
///
/// ```
/// use poker_hand::core::{Hand, HandType, Outcome};
///
/// let straight = Hand::new_from_str("2H 3H 4H 5H 6D").unwrap();
/// let quads: Hand = "AS AD AC AH JD".parse().unwrap();
///
/// assert_eq!(HandType::Straight, straight.hand_type());
/// assert_eq!(Outcome::Loss, straight.compare_with(&quads));
/// assert!(straight < quads);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone)]
pub struct Hand {
    text: String,
    cards: [Card; HAND_SIZE],
    rank: Rank,
}

impl Hand {
    /// Parse five whitespace separated card tokens such as
    /// `"AH AC 5H 5C QS"`.
    pub fn new_from_str(hand_string: &str) -> Result<Self, InvalidCardError> {
        let cards = hand_string
            .split_whitespace()
            .map(Card::from_str)
            .collect::<Result<Vec<Card>, InvalidCardError>>()?;
        let mut hand = Self::new_with_cards(cards)?;
        hand.text = hand_string.to_string();
        Ok(hand)
    }

    /// Build a hand from exactly five cards in any order. The text of the
    /// hand is its canonical card order.
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, InvalidCardError> {
        let mut cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|v: Vec<Card>| InvalidCardError::WrongCardCount(v.len()))?;

        // Stable so cards of equal value keep their input order.
        cards.sort_by_key(|c| c.value);
        if is_five_high_straight(&cards) {
            cards.rotate_right(1);
            #[cfg(feature = "tracing")]
            debug!(ace = %cards[0], "Moved ace to the front of a five high straight");
        }

        let rank = cards[..].rank_five();
        let text = cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        #[cfg(feature = "tracing")]
        trace!(%text, ?rank, "Built hand");
        Ok(Self { text, cards, rank })
    }

    /// The text this hand was parsed from, exactly as given.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cards in canonical order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The cached rank, category plus tie-break.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The cached category of this hand.
    pub fn hand_type(&self) -> HandType {
        self.rank.hand_type()
    }

    /// The card that tops the hand. A five high straight tops out at
    /// `Five` even though it holds an ace.
    pub fn high_card(&self) -> Value {
        self.cards[HAND_SIZE - 1].value
    }

    /// Compare with another hand. `Win` means this hand is stronger.
    pub fn compare_with(&self, other: &Hand) -> Outcome {
        self.cmp(other).into()
    }

    /// Describe the hand, e.g. `"Full house, Kings over Threes"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::Hand;
    ///
    /// let hand = Hand::new_from_str("3C KH 5D 5S KH").unwrap();
    /// assert_eq!("Two pairs, Kings and Fives", hand.hand_name());
    /// ```
    pub fn hand_name(&self) -> String {
        let hand_type = self.hand_type();
        let name = hand_type.name();
        let groups = value_groups(&self.cards);
        let major = groups[0].1.plural_name();
        match hand_type {
            HandType::RoyalFlush => name.to_string(),
            HandType::StraightFlush | HandType::Flush | HandType::Straight => {
                format!("{name}, {}-high", self.high_card().name())
            }
            HandType::FourOfAKind | HandType::ThreeOfAKind | HandType::OnePair => {
                format!("{name}, {major}")
            }
            HandType::FullHouse => format!("{name}, {major} over {}", groups[1].1.plural_name()),
            HandType::TwoPair => format!("{name}, {major} and {}", groups[1].1.plural_name()),
            HandType::HighCard => format!("{name}, {}", self.high_card().name()),
        }
    }
}

impl FromStr for Hand {
    type Err = InvalidCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<String> for Hand {
    type Error = InvalidCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new_from_str(&value)
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_string()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Hand {}

impl Hash for Hand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn hand(s: &str) -> Hand {
        Hand::new_from_str(s).unwrap()
    }

    #[test]
    fn test_parse_sorts_by_value() {
        let h = hand("KD 6S 9D TH AD");
        assert_eq!("6S 9D TH KD AD", h.to_string());
        assert_eq!(Value::Ace, h.high_card());
    }

    #[test]
    fn test_parse_is_stable_for_equal_values() {
        let h = hand("5S 2C 5D 2H 9C");
        assert_eq!("2C 2H 5S 5D 9C", h.to_string());
    }

    #[test_log::test]
    fn test_five_high_straight_reorders_ace() {
        let h = hand("2H 4D 3C AS 5S");
        assert_eq!(
            &[
                Card::new(Value::Ace, Suit::Spade),
                Card::new(Value::Two, Suit::Heart),
                Card::new(Value::Three, Suit::Club),
                Card::new(Value::Four, Suit::Diamond),
                Card::new(Value::Five, Suit::Spade),
            ],
            h.cards()
        );
        assert_eq!(Value::Five, h.high_card());
    }

    #[test]
    fn test_not_five_high_keeps_order() {
        assert_eq!("2H 3C 5D 5S AS", hand("2H 5D 3C AS 5S").to_string());
        assert_eq!("TS JH QD KC AS", hand("JH QD KC AS TS").to_string());
    }

    #[test]
    fn test_wrong_card_count() {
        assert_eq!(
            Err(InvalidCardError::WrongCardCount(4)),
            Hand::new_from_str("2H 3H 4H 5H")
        );
        assert_eq!(
            Err(InvalidCardError::WrongCardCount(6)),
            Hand::new_from_str("2H 3H 4H 5H 6H 7H")
        );
        assert_eq!(Err(InvalidCardError::WrongCardCount(0)), Hand::new_from_str(""));
    }

    #[test]
    fn test_bad_tokens() {
        assert_eq!(
            Err(InvalidCardError::UnexpectedValueChar('1')),
            Hand::new_from_str("2H 3H 4H 5H 1H")
        );
        assert_eq!(
            Err(InvalidCardError::UnexpectedSuitChar('Z')),
            Hand::new_from_str("2H 3H 4H 5H 6Z")
        );
        assert_eq!(
            Err(InvalidCardError::InvalidToken("10H".to_string())),
            Hand::new_from_str("2H 3H 4H 5H 10H")
        );
    }

    #[test]
    fn test_repeated_cards_are_accepted() {
        assert_eq!(HandType::TwoPair, hand("5S 5D 2C KH KH").hand_type());
    }

    #[test]
    fn test_new_with_cards() {
        let h = Hand::new_with_cards(vec![
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
            Card::new(Value::Queen, Suit::Spade),
            Card::new(Value::Jack, Suit::Spade),
            Card::new(Value::Ten, Suit::Spade),
        ])
        .unwrap();
        assert_eq!(HandType::RoyalFlush, h.hand_type());
        assert_eq!(
            Err(InvalidCardError::WrongCardCount(1)),
            Hand::new_with_cards(vec![Card::new(Value::Ace, Suit::Spade)])
        );
    }

    #[test]
    fn test_outcome() {
        assert_eq!(Outcome::Loss, Outcome::Win.reverse());
        assert_eq!(Outcome::Win, Outcome::Loss.reverse());
        assert_eq!(Outcome::Tie, Outcome::Tie.reverse());
        assert_eq!("Win", Outcome::Win.to_string());
        assert_eq!("Loss", Outcome::Loss.to_string());
        assert_eq!("Tie", Outcome::Tie.to_string());
    }

    #[test]
    fn test_text_keeps_input() {
        let h = hand("2H 4D 3C AS 5S");
        assert_eq!("2H 4D 3C AS 5S", h.text());
        assert_eq!("AS 2H 3C 4D 5S", h.to_string());

        let built = Hand::new_with_cards(h.cards().to_vec()).unwrap();
        assert_eq!("AS 2H 3C 4D 5S", built.text());
    }

    #[test]
    fn test_equal_ignores_suits() {
        let a = hand("2S 3H 4H 5S 6C");
        let b = hand("3D 4C 5H 6H 2S");
        assert_eq!(a, b);
        assert_eq!(Outcome::Tie, a.compare_with(&b));
    }

    #[test]
    fn test_hand_names() {
        assert_eq!("Royal flush", hand("JH AH TH KH QH").hand_name());
        assert_eq!("Straight flush, King-high", hand("JH 9H TH KH QH").hand_name());
        assert_eq!("Straight flush, Five-high", hand("2S AS 4S 5S 3S").hand_name());
        assert_eq!("Four of a kind, Jacks", hand("JC KH JS JD JH").hand_name());
        assert_eq!(
            "Full house, Threes over Kings",
            hand("KH KC 3S 3H 3D").hand_name()
        );
        assert_eq!("Flush, Ten-high", hand("8C 9C 5C 3C TC").hand_name());
        assert_eq!("Straight, Five-high", hand("2H 4D 3C AS 5S").hand_name());
        assert_eq!("Three of a kind, Sevens", hand("7C 7S KH 2H 7H").hand_name());
        assert_eq!("Two pairs, Kings and Fives", hand("3C KH 5D 5S KH").hand_name());
        assert_eq!("One pair, Eights", hand("QH 8H KD JH 8S").hand_name());
        assert_eq!("High card, Ten", hand("2D 6D 9D TH 7D").hand_name());
        assert_eq!("One pair, Sixes", hand("6H 6D 2C 9S KH").hand_name());
    }
}
