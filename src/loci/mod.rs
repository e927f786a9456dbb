//! The loci-group container and its four concrete shapes (spec §4.6).
//!
//! A `LociGroup<K, V>` is a mapping from a [`ReadGroupKey`](crate::interval::ReadGroupKey)
//! or [`BinGroupKey`](crate::interval::BinGroupKey) to a sequence of tagged
//! intervals. The shape of `V` distinguishes the four concrete entities the
//! rest of the crate works with: [`ReadLoci`], [`Fingerprint`],
//! [`ComparativeBins`], and [`Comparison`].

pub mod bins;
pub mod comparison;
pub mod melt;
pub mod read_loci;

use rustc_hash::FxHashMap;

use crate::interval::{BinGroupKey, Interval, ReadGroupKey};

/// A single named read interval (tagged with the read's name, for GFF output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadInterval {
    pub start: i64,
    pub stop: i64,
    pub name: String,
}

impl ReadInterval {
    pub fn new(start: i64, stop: i64, name: impl Into<String>) -> Self {
        Self {
            start,
            stop,
            name: name.into(),
        }
    }

    pub fn as_interval(&self) -> Interval {
        Interval::new(self.start, self.stop)
    }
}

/// One comparative bin's per-sample tip counts (spec §4.9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonBin {
    pub start: i64,
    pub stop: i64,
    pub samples: Vec<String>,
    pub counts: Vec<u64>,
}

/// A mapping from `K` to a sequence of `V`, grouping tagged intervals by
/// reference/strand/category (and, for read-level shapes, sample).
///
/// Generic over both the key and the payload so incompatible shapes (e.g. a
/// [`Fingerprint`] and a [`ComparativeBins`]) are distinct types rather than
/// a single runtime-checked container — see `merge` below.
#[derive(Debug, Clone)]
pub struct LociGroup<K, V> {
    groups: FxHashMap<K, Vec<V>>,
}

impl<K, V> Default for LociGroup<K, V> {
    fn default() -> Self {
        Self {
            groups: FxHashMap::default(),
        }
    }
}

impl<K, V> LociGroup<K, V>
where
    K: Eq + std::hash::Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(groups: FxHashMap<K, Vec<V>>) -> Self {
        Self { groups }
    }

    pub fn insert(&mut self, key: K, loci: Vec<V>) {
        self.groups.insert(key, loci);
    }

    pub fn groups(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn loci(&self) -> impl Iterator<Item = &Vec<V>> {
        self.groups.values()
    }

    pub fn items(&self) -> impl Iterator<Item = (&K, &Vec<V>)> {
        self.groups.iter()
    }

    pub fn get(&self, key: &K) -> Option<&Vec<V>> {
        self.groups.get(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flatten to a row-oriented table: one `(key, locus)` row per interval,
    /// the group's key repeated across every row it owns. Used for
    /// serialisation only (spec §4.6) — [`crate::gff`]'s row builders
    /// consume this instead of re-deriving their own flattening.
    pub fn as_array(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.groups
            .iter()
            .flat_map(|(key, loci)| loci.iter().map(move |locus| (key.clone(), locus.clone())))
            .collect()
    }

    /// Union of several `LociGroup`s of the *same concrete shape*: on key
    /// collision, the later argument's group wins outright (no element-wise
    /// concatenation — matches spec §4.6's "later value wins").
    ///
    /// Mixing incompatible shapes (e.g. a `Fingerprint` with a
    /// `ComparativeBins`) does not typecheck, since `K`/`V` differ between
    /// the type aliases — a compile-time strengthening of the runtime shape
    /// assertion in the source this was distilled from.
    pub fn merge<'a>(groups: impl IntoIterator<Item = &'a LociGroup<K, V>>) -> Self
    where
        K: 'a,
        V: Clone + 'a,
    {
        let mut merged = FxHashMap::default();
        for group in groups {
            for (key, loci) in group.groups.iter() {
                merged.insert(key.clone(), loci.clone());
            }
        }
        Self { groups: merged }
    }
}

/// Per-read, per-sample loci: one interval (plus the read's name) per
/// aligned read, grouped by [`ReadGroupKey`].
pub type ReadLoci = LociGroup<ReadGroupKey, ReadInterval>;

/// A fingerprinted sample: one or more cluster extremity intervals per
/// [`ReadGroupKey`] (clustering output, still keyed per-sample).
pub type Fingerprint = LociGroup<ReadGroupKey, Interval>;

/// The union of fingerprints across samples, collapsed to [`BinGroupKey`]
/// (sample dropped) and melted into disjoint comparison bins.
pub type ComparativeBins = LociGroup<BinGroupKey, Interval>;

/// A `ComparativeBins` enriched with per-sample tip counts in each bin.
pub type Comparison = LociGroup<BinGroupKey, ComparisonBin>;
