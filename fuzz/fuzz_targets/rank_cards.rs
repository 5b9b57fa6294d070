#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_hand;

use libfuzzer_sys::fuzz_target;
use poker_hand::core::{Card, Hand, Outcome};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub hand: [Card; 5],
    pub other: [Card; 5],
}

fuzz_target!(|input: Input| {
    let hand = Hand::new_with_cards(input.hand.to_vec()).unwrap();
    let other = Hand::new_with_cards(input.other.to_vec()).unwrap();

    let outcome = hand.compare_with(&other);
    assert_eq!(outcome.reverse(), other.compare_with(&hand));
    assert!(hand.hand_type().ordinal() <= 9);
    if outcome == Outcome::Tie {
        assert_eq!(hand.rank().tie_break(), other.rank().tie_break());
    }
});
