//! Tip/tail orientation round-trip (S8) and strand decode.

use tefingerprint::interval::Strand;
use tefingerprint::reads::{strand_from_flag, tip_and_tail};

#[test]
fn s8_plus_strand_read_tip_and_tail() {
    // pos 2, SEQ length 7 => tip 8, tail 2.
    assert_eq!(tip_and_tail(2, 7, Strand::Plus), (8, 2));
}

#[test]
fn s8_minus_strand_read_tip_and_tail() {
    // pos 7, SEQ length 3 => tip 7, tail 9.
    assert_eq!(tip_and_tail(7, 3, Strand::Minus), (7, 9));
}

#[test]
fn strand_decode_from_sam_flag_bit_4() {
    assert_eq!(strand_from_flag(0), Strand::Plus);
    assert_eq!(strand_from_flag(0x10), Strand::Minus);
    assert_eq!(strand_from_flag(99), Strand::Plus); // 99 = 0x63, bit 0x10 clear
    assert_eq!(strand_from_flag(83), Strand::Minus); // 83 = 0x53, bit 0x10 set
}

#[test]
fn single_base_read_has_equal_tip_and_tail_plus() {
    assert_eq!(tip_and_tail(100, 1, Strand::Plus), (100, 100));
}
