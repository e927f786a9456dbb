//! Bare genomic intervals, strand, and the group keys loci are partitioned by.

use std::cmp::Ordering;
use std::fmt;

/// A closed genomic coordinate range `[start, stop]`.
///
/// Unlike a BED-style half-open interval, `stop` is inclusive — this matches
/// the clustering engine's extremity pairs, which are always `(x[lower],
/// x[upper - 1])`, the last point included rather than one past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i64,
    pub stop: i64,
}

impl Interval {
    #[inline]
    pub fn new(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }

    /// Closed-interval overlap test: `a.start <= b.stop && b.start <= a.stop`.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.stop && other.start <= self.stop
    }

    /// Union of this interval with an overlapping (or touching) one.
    #[inline]
    pub fn merge(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            stop: self.stop.max(other.stop),
        }
    }

    #[inline]
    pub fn contains(&self, point: i64) -> bool {
        self.start <= point && point <= self.stop
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.start, self.stop)
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start).then(self.stop.cmp(&other.stop))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Strand orientation: forward, reverse, or mixed/unknown (`.`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strand {
    Plus,
    Minus,
    Unknown,
}

impl Strand {
    pub fn from_char(c: char) -> Self {
        match c {
            '+' => Strand::Plus,
            '-' => Strand::Minus,
            _ => Strand::Unknown,
        }
    }

    /// Decode strand from SAM flag bit `0x10` (read reverse strand).
    #[inline]
    pub fn from_sam_flag(flag: u16) -> Self {
        if flag & 0x10 != 0 {
            Strand::Minus
        } else {
            Strand::Plus
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
            Strand::Unknown => write!(f, "."),
        }
    }
}

/// A read-level partition key: `(reference, strand, category, source)`.
///
/// `source` is typically a sample's file name; `category` is a transposable
/// element family label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReadGroupKey {
    pub reference: String,
    pub strand: Strand,
    pub category: String,
    pub source: String,
}

impl ReadGroupKey {
    pub fn new(
        reference: impl Into<String>,
        strand: Strand,
        category: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            strand,
            category: category.into(),
            source: source.into(),
        }
    }

    /// Project to the cross-sample [`BinGroupKey`] by dropping `source`.
    #[inline]
    pub fn without_source(&self) -> BinGroupKey {
        BinGroupKey {
            reference: self.reference.clone(),
            strand: self.strand,
            category: self.category.clone(),
        }
    }
}

/// A cross-sample partition key: `(reference, strand, category)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinGroupKey {
    pub reference: String,
    pub strand: Strand,
    pub category: String,
}

impl BinGroupKey {
    pub fn new(reference: impl Into<String>, strand: Strand, category: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            strand,
            category: category.into(),
        }
    }
}
