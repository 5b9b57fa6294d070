#![no_main]

extern crate libfuzzer_sys;
extern crate poker_hand;

use libfuzzer_sys::fuzz_target;
use poker_hand::core::Hand;

fuzz_target!(|data: &str| {
    let Ok(hand) = Hand::new_from_str(data) else {
        return;
    };
    let reparsed = Hand::new_from_str(&hand.to_string()).unwrap();
    assert_eq!(hand, reparsed);
    assert_eq!(hand.cards(), reparsed.cards());
    assert_eq!(hand.hand_type(), reparsed.hand_type());
});
