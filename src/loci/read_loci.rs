//! Per-read loci: tip extraction and fingerprinting (spec §4.9, §6 glue).

use rustc_hash::FxHashMap;

use crate::cluster::{Hudc, Udc};
use crate::error::Result;
use crate::interval::{ReadGroupKey, Strand};
use crate::loci::{Fingerprint, ReadLoci};

impl ReadLoci {
    /// The tip coordinate of each read in every group: `stop` for `Plus`
    /// strand reads, `start` for `Minus` (spec §6's tip rule).
    pub fn tips(&self) -> FxHashMap<ReadGroupKey, Vec<i64>> {
        self.items()
            .map(|(group, loci)| {
                let tips = loci
                    .iter()
                    .map(|l| match group.strand {
                        Strand::Minus => l.start,
                        _ => l.stop,
                    })
                    .collect();
                (group.clone(), tips)
            })
            .collect()
    }

    /// Cluster every group's tips independently and collect the resulting
    /// cluster extremities into a [`Fingerprint`].
    ///
    /// Uses [`Hudc`] when `hierarchical`, otherwise flat [`Udc`]. `min_eps`
    /// only applies to the hierarchical path (UDC has no density floor).
    pub fn fingerprint(
        &self,
        min_reads: usize,
        eps: i64,
        min_eps: Option<i64>,
        hierarchical: bool,
    ) -> Result<Fingerprint> {
        let mut fprint = Fingerprint::new();
        for (group, mut tips) in self.tips() {
            tips.sort_unstable();
            let extremities: Vec<crate::interval::Interval> = if hierarchical {
                let mut model = Hudc::new(min_reads).with_max_eps(eps);
                if let Some(floor) = min_eps {
                    model = model.with_min_eps(floor);
                }
                model
                    .fit(&tips)?
                    .cluster_extremities()
                    .map(|(a, b)| crate::interval::Interval::new(a, b))
                    .collect()
            } else {
                Udc::new(min_reads, eps)
                    .fit(&tips)?
                    .cluster_extremities()
                    .map(|(a, b)| crate::interval::Interval::new(a, b))
                    .collect()
            };
            fprint.insert(group, extremities);
        }
        Ok(fprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loci::ReadInterval;

    fn group(strand: Strand) -> ReadGroupKey {
        ReadGroupKey::new("chr1", strand, "gypsy", "sampleA")
    }

    #[test]
    fn tips_use_stop_on_plus_strand() {
        let mut reads = ReadLoci::new();
        let g = group(Strand::Plus);
        reads.insert(
            g.clone(),
            vec![
                ReadInterval::new(10, 20, "read1"),
                ReadInterval::new(30, 40, "read2"),
            ],
        );
        let tips = reads.tips();
        assert_eq!(tips[&g], vec![20, 40]);
    }

    #[test]
    fn tips_use_start_on_minus_strand() {
        let mut reads = ReadLoci::new();
        let g = group(Strand::Minus);
        reads.insert(g.clone(), vec![ReadInterval::new(10, 20, "read1")]);
        let tips = reads.tips();
        assert_eq!(tips[&g], vec![10]);
    }

    #[test]
    fn fingerprint_flat_udc_produces_one_cluster() {
        let mut reads = ReadLoci::new();
        let g = group(Strand::Plus);
        reads.insert(
            g.clone(),
            vec![
                ReadInterval::new(90, 100, "r1"),
                ReadInterval::new(91, 101, "r2"),
                ReadInterval::new(93, 103, "r3"),
            ],
        );
        let fp = reads.fingerprint(2, 5, None, false).unwrap();
        let clusters = fp.get(&g).unwrap();
        assert_eq!(clusters.len(), 1);
    }

    #[test]
    fn fingerprint_hierarchical_path_runs() {
        let mut reads = ReadLoci::new();
        let g = group(Strand::Plus);
        reads.insert(
            g.clone(),
            vec![
                ReadInterval::new(0, 1, "r1"),
                ReadInterval::new(0, 2, "r2"),
                ReadInterval::new(0, 3, "r3"),
                ReadInterval::new(0, 20, "r4"),
                ReadInterval::new(0, 21, "r5"),
                ReadInterval::new(0, 22, "r6"),
            ],
        );
        let fp = reads.fingerprint(3, 30, Some(1), true).unwrap();
        assert!(fp.get(&g).is_some());
    }
}
