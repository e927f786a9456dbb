//! Cross-sample comparative bins (spec §4.8).

use rustc_hash::FxHashMap;

use crate::interval::{BinGroupKey, Interval, ReadGroupKey};
use crate::loci::melt::melt_intervals;
use crate::loci::{ComparativeBins, LociGroup, ReadInterval};

/// Anything that can be read as a plain `(start, stop)` interval, so
/// [`ComparativeBins::from_union`] can accept both [`crate::loci::Fingerprint`]
/// (`LociGroup<ReadGroupKey, Interval>`) and [`crate::loci::ReadLoci`]
/// (`LociGroup<ReadGroupKey, ReadInterval>`) groups.
pub trait AsInterval {
    fn as_interval(&self) -> Interval;
}

impl AsInterval for Interval {
    fn as_interval(&self) -> Interval {
        *self
    }
}

impl AsInterval for ReadInterval {
    fn as_interval(&self) -> Interval {
        Interval::new(self.start, self.stop)
    }
}

impl ComparativeBins {
    /// Union several same-shape `LociGroup<ReadGroupKey, _>` inputs — either
    /// [`crate::loci::Fingerprint`] or raw [`crate::loci::ReadLoci`] groups,
    /// per spec §4.8 ("several `Fingerprint` (or `ReadLoci`) groups") —
    /// dropping the sample (`source`) field from each group key and melting
    /// all contributing intervals within a bin group into their disjoint
    /// cover.
    pub fn from_union<'a, V>(groups: impl IntoIterator<Item = &'a LociGroup<ReadGroupKey, V>>) -> Self
    where
        V: AsInterval + 'a,
    {
        let mut by_bin: FxHashMap<BinGroupKey, Vec<Interval>> = FxHashMap::default();
        for g in groups {
            for (group, loci) in g.items() {
                by_bin
                    .entry(group.without_source())
                    .or_default()
                    .extend(loci.iter().map(AsInterval::as_interval));
            }
        }

        let mut bins = LociGroup::new();
        for (group, intervals) in by_bin {
            bins.insert(group, melt_intervals(intervals));
        }
        bins
    }
}
