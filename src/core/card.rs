use std::fmt;
use std::str::FromStr;

use super::InvalidCardError;

/// Card rank. The discriminant is the numeric rank, so `Two` is 2 and
/// `Ace` is 14.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::Value;
    ///
    /// assert_eq!(Value::Two, Value::values()[0]);
    /// assert_eq!(Value::Ace, Value::values()[12]);
    /// ```
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Numeric rank of the value, 2 through 14.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Look up the value for a numeric rank. Returns `None` outside
    /// of 2..=14.
    pub fn from_rank(rank: u8) -> Option<Self> {
        VALUES.iter().copied().find(|v| v.rank() == rank)
    }

    /// Given a character parse that char into a value.
    /// Case is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(Some(Value::Ace), Value::from_char('a'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

    /// English name of the value as used in hand descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::King => "King",
            Self::Queen => "Queen",
            Self::Jack => "Jack",
            Self::Ten => "Ten",
            Self::Nine => "Nine",
            Self::Eight => "Eight",
            Self::Seven => "Seven",
            Self::Six => "Six",
            Self::Five => "Five",
            Self::Four => "Four",
            Self::Three => "Three",
            Self::Two => "Two",
        }
    }

    /// Plural English name, e.g. `"Kings"` or `"Sixes"`.
    pub fn plural_name(self) -> String {
        match self {
            Self::Six => "Sixes".to_string(),
            v => format!("{}s", v.name()),
        }
    }
}

/// Enum for the four different suits.
/// Suits only matter for flush detection; there is no ordering
/// between them that affects a hand's strength.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade,
    /// Clubs
    Club,
    /// Hearts
    Heart,
    /// Diamonds
    Diamond,
}

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        [Self::Spade, Self::Club, Self::Heart, Self::Diamond]
    }

    /// This Suit from a char. Case is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('H'));
    /// assert_eq!(Some(Suit::Spade), Suit::from_char('s'));
    /// assert_eq!(None, Suit::from_char('X'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Self::Spade),
            'C' => Some(Self::Club),
            'H' => Some(Self::Heart),
            'D' => Some(Self::Diamond),
            _ => None,
        }
    }

    /// This Suit to a char
    pub fn to_char(self) -> char {
        match self {
            Self::Spade => 'S',
            Self::Club => 'C',
            Self::Heart => 'H',
            Self::Diamond => 'D',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse a single two character token such as `"TD"`.
impl FromStr for Card {
    type Err = InvalidCardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let (Some(v), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(InvalidCardError::InvalidToken(token.to_string()));
        };
        let value = Value::from_char(v).ok_or(InvalidCardError::UnexpectedValueChar(v))?;
        let suit = Suit::from_char(s).ok_or(InvalidCardError::UnexpectedSuitChar(s))?;
        Ok(Self::new(value, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_value_ranks() {
        let ranks: Vec<u8> = Value::values().iter().map(|v| v.rank()).collect();
        assert_eq!((2..=14).collect::<Vec<u8>>(), ranks);
        assert_eq!(Some(Value::Queen), Value::from_rank(12));
        assert_eq!(None, Value::from_rank(1));
        assert_eq!(None, Value::from_rank(15));
    }

    #[test]
    fn test_value_char_round_trip() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
    }

    #[test]
    fn test_suit_char_round_trip() {
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
    }

    #[test]
    fn test_compare_value() {
        assert!(Value::Ace > Value::King);
        assert!(Value::Two < Value::Three);
        assert!(Value::Ten > Value::Nine);
    }

    #[test]
    fn test_parse_card() {
        let c: Card = "TD".parse().unwrap();
        assert_eq!(Card::new(Value::Ten, Suit::Diamond), c);
        assert_eq!("TD", c.to_string());

        let lower: Card = "ah".parse().unwrap();
        assert_eq!(Card::new(Value::Ace, Suit::Heart), lower);
        assert_eq!("AH", lower.to_string());
    }

    #[test]
    fn test_parse_card_errors() {
        assert_eq!(
            Err(InvalidCardError::UnexpectedValueChar('1')),
            "1S".parse::<Card>()
        );
        assert_eq!(
            Err(InvalidCardError::UnexpectedSuitChar('X')),
            "AX".parse::<Card>()
        );
        assert_eq!(
            Err(InvalidCardError::InvalidToken("10S".to_string())),
            "10S".parse::<Card>()
        );
        assert_eq!(
            Err(InvalidCardError::InvalidToken("A".to_string())),
            "A".parse::<Card>()
        );
    }

    #[test]
    fn test_value_names() {
        assert_eq!("Ace", Value::Ace.name());
        assert_eq!("Ten", Value::Ten.name());
        assert_eq!("Two", Value::Two.name());
        assert_eq!("Kings", Value::King.plural_name());
        assert_eq!("Sixes", Value::Six.plural_name());
    }
}
