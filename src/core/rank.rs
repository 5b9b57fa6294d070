use std::iter;

use super::{Card, Hand, Value};

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
///
/// The u32 packs the five tie-break ranks four bits apiece, most
/// significant first, so comparing two payloads is the same as comparing
/// the rank sequences lexicographically.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u32),
    /// Ten through Ace of one suit. There's only one of these
    /// so it doesn't carry any tie-break.
    RoyalFlush,
}

/// The category of a hand with the tie-break stripped. The ordinal of
/// each variant is its place on the ladder, 0 for a high card up to 9
/// for a royal flush.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandType {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandType {
    /// Position on the ladder, 0..=9.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human readable name, e.g. `"Full house"`.
    pub fn name(self) -> &'static str {
        match self {
            HandType::HighCard => "High card",
            HandType::OnePair => "One pair",
            HandType::TwoPair => "Two pairs",
            HandType::ThreeOfAKind => "Three of a kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full house",
            HandType::FourOfAKind => "Four of a kind",
            HandType::StraightFlush => "Straight flush",
            HandType::RoyalFlush => "Royal flush",
        }
    }
}

/// Convert from Rank to HandType by stripping the u32 detail.
/// This is useful to reduce the cardinality of ranks.
impl From<Rank> for HandType {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::HighCard(_) => HandType::HighCard,
            Rank::OnePair(_) => HandType::OnePair,
            Rank::TwoPair(_) => HandType::TwoPair,
            Rank::ThreeOfAKind(_) => HandType::ThreeOfAKind,
            Rank::Straight(_) => HandType::Straight,
            Rank::Flush(_) => HandType::Flush,
            Rank::FullHouse(_) => HandType::FullHouse,
            Rank::FourOfAKind(_) => HandType::FourOfAKind,
            Rank::StraightFlush(_) => HandType::StraightFlush,
            Rank::RoyalFlush => HandType::RoyalFlush,
        }
    }
}

/// Tie-break ranks of a royal flush.
const BROADWAY: [u8; 5] = [14, 13, 12, 11, 10];
/// Tie-break ranks of a five high straight. The ace plays as a one.
const WHEEL_RANKS: [u8; 5] = [5, 4, 3, 2, 1];

impl Rank {
    /// The category of this rank.
    pub fn hand_type(self) -> HandType {
        self.into()
    }

    /// Unpack the five tie-break ranks, most significant first.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::Hand;
    ///
    /// let hand = Hand::new_from_str("KH KC 3S 3H 3D").unwrap();
    /// assert_eq!([3, 3, 3, 13, 13], hand.rank().tie_break());
    /// ```
    pub fn tie_break(self) -> [u8; 5] {
        let bits = match self {
            Rank::HighCard(bits)
            | Rank::OnePair(bits)
            | Rank::TwoPair(bits)
            | Rank::ThreeOfAKind(bits)
            | Rank::Straight(bits)
            | Rank::Flush(bits)
            | Rank::FullHouse(bits)
            | Rank::FourOfAKind(bits)
            | Rank::StraightFlush(bits) => bits,
            Rank::RoyalFlush => return BROADWAY,
        };
        let mut ranks = [0u8; 5];
        for (i, r) in ranks.iter_mut().enumerate() {
            *r = ((bits >> (4 * (4 - i))) & 0xF) as u8;
        }
        ranks
    }
}

/// Grouping of the values in a hand by how many times they repeat.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Kind {
    /// Every value is different.
    Nothing,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = (1 << 14) | (1 << 5) | (1 << 4) | (1 << 3) | (1 << 2);
/// Five consecutive values once shifted down to bit zero.
const FIVE_IN_A_ROW: u32 = 0b1_1111;

/// Bit set of the values present, bit n set for rank n.
fn value_set(cards: &[Card]) -> u32 {
    cards
        .iter()
        .fold(0, |set, c| set | (1 << c.value.rank() as u32))
}

/// Pack ranks four bits at a time, first rank ending up most significant.
fn pack(ranks: impl IntoIterator<Item = u8>) -> u32 {
    ranks
        .into_iter()
        .fold(0, |bits, r| (bits << 4) | u32::from(r))
}

/// True when all five cards share a suit.
pub fn is_flush(cards: &[Card]) -> bool {
    match cards {
        [first, rest @ ..] if cards.len() == 5 => rest.iter().all(|c| c.suit == first.suit),
        _ => false,
    }
}

/// True when the five values are distinct and consecutive. There's no
/// wrap around, an ace only counts high here. See
/// `is_five_high_straight` for the ace low case.
pub fn is_straight(cards: &[Card]) -> bool {
    let set = value_set(cards);
    cards.len() == 5 && set.count_ones() == 5 && set >> set.trailing_zeros() == FIVE_IN_A_ROW
}

/// True when the values are exactly A, 2, 3, 4, 5.
pub fn is_five_high_straight(cards: &[Card]) -> bool {
    cards.len() == 5 && value_set(cards) == WHEEL
}

/// Group the values by count. Returns `(count, value)` pairs sorted by
/// count and then value, both descending.
///
/// # Examples
///
/// ```
/// use poker_hand::core::{value_groups, Hand, Value};
///
/// let hand = Hand::new_from_str("3C KH 5D 5S KH").unwrap();
/// assert_eq!(
///     vec![(2, Value::King), (2, Value::Five), (1, Value::Three)],
///     value_groups(hand.cards())
/// );
/// ```
pub fn value_groups(cards: &[Card]) -> Vec<(u8, Value)> {
    let mut value_to_count = [0u8; 15];
    for c in cards {
        let count = &mut value_to_count[c.value.rank() as usize];
        *count = count.saturating_add(1);
    }

    let mut groups: Vec<(u8, Value)> = Value::values()
        .into_iter()
        .filter_map(|v| {
            let count = value_to_count[v.rank() as usize];
            (count > 0).then_some((count, v))
        })
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

/// Classify the hand by the sizes of its value groups alone.
pub fn same_kind(cards: &[Card]) -> Kind {
    let sizes: Vec<u8> = value_groups(cards).iter().map(|&(count, _)| count).collect();
    match sizes.as_slice() {
        // Five of one value only happens with repeated cards. Treat it
        // like quads.
        [4 | 5, ..] => Kind::FourOfAKind,
        [3, 2] => Kind::FullHouse,
        [3, ..] => Kind::ThreeOfAKind,
        [2, 2, ..] => Kind::TwoPair,
        [2, ..] => Kind::OnePair,
        _ => Kind::Nothing,
    }
}

/// The tie-break sequence: every value repeated by its count, bigger
/// groups first then higher values first. A wheel is always `5 4 3 2 1`.
/// Only the first five ranks are kept.
fn tie_break_bits(cards: &[Card], five_high: bool) -> u32 {
    if five_high {
        return pack(WHEEL_RANKS);
    }
    pack(
        value_groups(cards)
            .into_iter()
            .flat_map(|(count, v)| iter::repeat(v.rank()).take(count as usize))
            .take(5),
    )
}

/// Run the detectors in ladder order, best category first.
fn classify(cards: &[Card]) -> Rank {
    let flush = is_flush(cards);
    let five_high = is_five_high_straight(cards);
    let straight = five_high || is_straight(cards);
    let kind = same_kind(cards);
    let bits = tie_break_bits(cards, five_high);

    if straight && flush {
        if !five_high && cards.iter().any(|c| c.value == Value::Ace) {
            Rank::RoyalFlush
        } else {
            Rank::StraightFlush(bits)
        }
    } else if kind == Kind::FourOfAKind {
        Rank::FourOfAKind(bits)
    } else if kind == Kind::FullHouse {
        Rank::FullHouse(bits)
    } else if flush {
        Rank::Flush(bits)
    } else if straight {
        Rank::Straight(bits)
    } else {
        match kind {
            Kind::ThreeOfAKind => Rank::ThreeOfAKind(bits),
            Kind::TwoPair => Rank::TwoPair(bits),
            Kind::OnePair => Rank::OnePair(bits),
            _ => Rank::HighCard(bits),
        }
    }
}

/// Can this turn into a hand rank? There are default implementations for
/// `Hand`, `Vec<Card>` and card slices.
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the current 5 card hand.
    /// This will not cache the value. The result is only meaningful for
    /// exactly five cards: fewer can't be a straight or a flush, and past
    /// five only the top five tie-break ranks are kept.
    ///
    /// # Examples
    /// ```
    /// use poker_hand::core::{Card, HandType, Rankable, Suit, Value};
    ///
    /// let cards = vec![
    ///     Card::new(Value::Ace, Suit::Spade),
    ///     Card::new(Value::Two, Suit::Heart),
    ///     Card::new(Value::Three, Suit::Club),
    ///     Card::new(Value::Four, Suit::Diamond),
    ///     Card::new(Value::Five, Suit::Spade),
    /// ];
    /// assert_eq!(HandType::Straight, cards.rank_five().hand_type());
    /// ```
    fn rank_five(&self) -> Rank {
        let cards: Vec<Card> = self.cards().collect();
        classify(&cards)
    }
}

/// Implementation for `Hand`
impl Rankable for Hand {
    fn cards(&self) -> impl Iterator<Item = Card> {
        Hand::cards(self).iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
