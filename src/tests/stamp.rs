use crate::stamp::{Bit, HashStamp, STAMP_BITS};

#[test]
fn bits_are_indexed_from_the_top() {
    let stamp = HashStamp::from_bits(0x8000_0000);
    assert_eq!(stamp.bit(0), Bit::Right);
    for pos in 1..STAMP_BITS {
        assert_eq!(stamp.bit(pos), Bit::Left);
    }

    let stamp = HashStamp::from_bits(1);
    assert_eq!(stamp.bit(STAMP_BITS - 1), Bit::Right);
    assert_eq!(stamp.bit(0), Bit::Left);
}

#[test]
fn order_matches_unsigned_value() {
    let small = HashStamp::from_bits(0x0000_0001);
    let big = HashStamp::from_bits(0x8000_0000);
    assert!(small < big);
    assert_eq!(small, HashStamp::from_bits(1));
}

#[test]
fn xor_exposes_divergence() {
    let a = HashStamp::from_bits(0b1010 << 28);
    let b = HashStamp::from_bits(0b1011 << 28);
    assert_eq!((a ^ b).into_bits(), 0b0001 << 28);
    assert_eq!(a.common_prefix_len(b), 3);
}

#[test]
fn common_prefix_of_equal_stamps_is_full_width() {
    let a = HashStamp::from_bits(0xDEAD_BEEF);
    assert_eq!(a.common_prefix_len(a), STAMP_BITS);
}

#[test]
fn common_prefix_when_top_bits_differ_is_zero() {
    let a = HashStamp::from_bits(0x0000_0000);
    let b = HashStamp::from_bits(0x8000_0000);
    assert_eq!(a.common_prefix_len(b), 0);
}

#[test]
fn stamp_of_is_deterministic() {
    assert_eq!(HashStamp::of(&"key"), HashStamp::of(&"key"));
    assert_ne!(HashStamp::of(&"key"), HashStamp::of(&"other"));
}

#[test]
fn dense_integers_spread_over_high_bits() {
    // The stamp comes from the mixed high half of the 64-bit hash, so
    // sequential keys must not all share a top bit.
    let mut lefts = 0;
    for i in 0_u64..64 {
        if HashStamp::of(&i).bit(0) == Bit::Left {
            lefts += 1;
        }
    }
    assert!(lefts > 0 && lefts < 64);
}
