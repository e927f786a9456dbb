//! Per-bin per-sample tip counter (spec §4.9).

use rustc_hash::FxHashMap;

use crate::loci::{Comparison, ComparativeBins, ComparisonBin, LociGroup, ReadLoci};

impl ComparativeBins {
    /// For every bin group `g` and bin `b`, count tips from each sample
    /// whose `(reference, strand, category)` matches `g`.
    ///
    /// `samples` is scoped per bin group — the ascending distinct list of
    /// `source` values among `reads` groups that project onto `g` — rather
    /// than one list shared across the whole comparison. This matches spec
    /// §4.9's definition exactly and avoids a cross-group sample leak
    /// present in the source this was distilled from.
    pub fn compare(&self, reads: &ReadLoci) -> Comparison {
        let mut result = LociGroup::new();
        for (group, bins) in self.items() {
            let mut samples: Vec<String> = reads
                .groups()
                .filter(|rg| &rg.without_source() == group)
                .map(|rg| rg.source.clone())
                .collect();
            samples.sort_unstable();
            samples.dedup();

            let tips_owned: FxHashMap<String, Vec<i64>> = reads
                .tips()
                .into_iter()
                .filter(|(rg, _)| &rg.without_source() == group)
                .map(|(rg, t)| (rg.source, t))
                .collect();

            let rows = bins
                .iter()
                .map(|bin| {
                    let counts = samples
                        .iter()
                        .map(|sample| {
                            tips_owned
                                .get(sample)
                                .map(|tips| {
                                    tips.iter()
                                        .filter(|&&t| t >= bin.start && t <= bin.stop)
                                        .count() as u64
                                })
                                .unwrap_or(0)
                        })
                        .collect();
                    ComparisonBin {
                        start: bin.start,
                        stop: bin.stop,
                        samples: samples.clone(),
                        counts,
                    }
                })
                .collect();

            result.insert(group.clone(), rows);
        }
        result
    }
}
