//! Five card poker hands.
//!
//! Parse a hand from text, find out where it sits on the hand ranking
//! ladder and compare or sort it against other hands.
//!
//! ```
//! use poker_hand::core::{Hand, Outcome};
//!
//! let aces_up = Hand::new_from_str("AH AC 5H 5C QS").unwrap();
//! let kings_up = Hand::new_from_str("KH KC 5H 5C QS").unwrap();
//! assert_eq!(Outcome::Win, aces_up.compare_with(&kings_up));
//!
//! let mut hands = vec![aces_up, kings_up];
//! hands.sort();
//! assert_eq!("5H 5C QS KH KC", hands[0].to_string());
//! ```

/// Cards, hands and hand ranking.
pub mod core;
