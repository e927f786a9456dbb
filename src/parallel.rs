//! Parallel fingerprint dispatch using Rayon (spec §5).
//!
//! The clustering core is purely functional over immutable arrays: there is
//! no shared mutable state, so independent `(reference, strand, category,
//! source)` groups can be fit concurrently and collected in any order.

use std::time::Instant;

use rayon::prelude::*;

use crate::cluster::{Hudc, Udc};
use crate::config;
use crate::error::Result;
use crate::interval::{Interval, ReadGroupKey};
use crate::loci::{Fingerprint, LociGroup, ReadLoci};

/// Fit every `(reference, strand, category, source)` group in `reads`
/// independently and in parallel, collecting cluster extremities into a
/// [`Fingerprint`].
///
/// Uses [`Hudc`] when `hierarchical`, otherwise flat [`Udc`]. When
/// [`config::is_stats_enabled`], reports each group's read count, cluster
/// count, and fit time to stderr.
pub fn par_fingerprint(
    reads: &ReadLoci,
    min_reads: usize,
    eps: i64,
    min_eps: Option<i64>,
    hierarchical: bool,
) -> Result<Fingerprint> {
    let verbose = config::is_stats_enabled();

    let fitted: Vec<Result<(ReadGroupKey, Vec<Interval>)>> = reads
        .tips()
        .into_par_iter()
        .map(|(group, mut tips)| {
            let started = verbose.then(Instant::now);
            tips.sort_unstable();

            let extremities: Vec<Interval> = if hierarchical {
                let mut model = Hudc::new(min_reads).with_max_eps(eps);
                if let Some(floor) = min_eps {
                    model = model.with_min_eps(floor);
                }
                model
                    .fit(&tips)?
                    .cluster_extremities()
                    .map(|(a, b)| Interval::new(a, b))
                    .collect()
            } else {
                Udc::new(min_reads, eps)
                    .fit(&tips)?
                    .cluster_extremities()
                    .map(|(a, b)| Interval::new(a, b))
                    .collect()
            };

            if let Some(started) = started {
                eprintln!(
                    "[tefingerprint] {}:{}:{} ({}) - {} reads -> {} clusters in {:.3}s",
                    group.reference,
                    group.strand,
                    group.category,
                    group.source,
                    tips.len(),
                    extremities.len(),
                    started.elapsed().as_secs_f64()
                );
            }

            Ok((group, extremities))
        })
        .collect();

    let mut fprint = LociGroup::new();
    for entry in fitted {
        let (group, extremities) = entry?;
        fprint.insert(group, extremities);
    }
    Ok(fprint)
}
