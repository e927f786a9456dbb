//! Read-level primitives: strand decode and tip/tail arithmetic (spec §6).
//!
//! This module implements only the pure, testable slice of the read
//! enumerator interface named in spec §6 — decoding strand from a SAM flag
//! and computing a read's tip/tail coordinates. Actually reading a BAM file
//! is outside this crate; [`ReadSource`] is the narrow trait such a
//! collaborator would implement.

use crate::interval::Strand;

/// Decode strand from SAM flag bit `0x10` (read reverse strand).
#[inline]
pub fn strand_from_flag(flag: u16) -> Strand {
    Strand::from_sam_flag(flag)
}

/// Tip and tail coordinates of an aligned read.
///
/// `pos` is the read's 1-based leftmost aligned position; `seq_len` is the
/// aligned sequence length. For `+` strand, tip is the rightmost base
/// (`pos + seq_len - 1`) and tail is `pos`; for `-` strand these swap.
#[inline]
pub fn tip_and_tail(pos: i64, seq_len: i64, strand: Strand) -> (i64, i64) {
    let far_end = pos + seq_len - 1;
    match strand {
        Strand::Minus => (pos, far_end),
        _ => (far_end, pos),
    }
}

/// A source of aligned reads a BAM-reading collaborator would implement,
/// exposing only what the clustering and comparison layers need: a read's
/// tip coordinate and its name (for GFF3 attribute output).
pub trait ReadSource {
    fn tip(&self) -> i64;
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s8_plus_strand_tip_and_tail() {
        // pos 2, SEQ length 7 => tip 8, tail 2.
        assert_eq!(tip_and_tail(2, 7, Strand::Plus), (8, 2));
    }

    #[test]
    fn s8_minus_strand_tip_and_tail() {
        // pos 7, SEQ length 3 => tip 7, tail 9.
        assert_eq!(tip_and_tail(7, 3, Strand::Minus), (7, 9));
    }

    #[test]
    fn strand_decode_matches_flag_bit_4() {
        assert_eq!(strand_from_flag(0), Strand::Plus);
        assert_eq!(strand_from_flag(0x10), Strand::Minus);
        assert_eq!(strand_from_flag(0x63), Strand::Minus);
    }
}
