//! GFF3-compatible row formatting (spec §6 output interface).
//!
//! Pure formatting over already-built [`Fingerprint`]/[`Comparison`] data —
//! no file writing, no CLI.

use crate::loci::{Comparison, Fingerprint};

/// One GFF3 feature row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GffRow {
    pub seqid: String,
    pub source: String,
    pub feature: String,
    pub start: i64,
    pub end: i64,
    pub strand: String,
    pub attributes: String,
}

impl GffRow {
    /// Render as a tab-separated GFF3 line: `score` and `frame` are always
    /// `.` (neither entity this crate models carries them).
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t.\t{}\t.\t{}",
            self.seqid, self.source, self.feature, self.start, self.end, self.strand, self.attributes
        )
    }
}

/// One row per cluster interval in a [`Fingerprint`]: `source` is the
/// sample, `attributes` is `ID=...;Name=<category>`.
///
/// Built from [`crate::loci::LociGroup::as_array`]'s flattened `(key,
/// interval)` rows rather than re-deriving its own grouping.
pub fn fingerprint_rows(fp: &Fingerprint) -> Vec<GffRow> {
    let mut rows: Vec<GffRow> = fp
        .as_array()
        .into_iter()
        .enumerate()
        .map(|(i, (group, interval))| {
            let id = format!(
                "{}_{}_{}_{}_{}",
                group.reference, group.strand, group.category, group.source, i
            );
            GffRow {
                seqid: group.reference.clone(),
                source: group.source.clone(),
                feature: "TE_cluster".to_string(),
                start: interval.start,
                end: interval.stop,
                strand: group.strand.to_string(),
                attributes: format!("ID={};Name={}", id, group.category),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.seqid.cmp(&b.seqid).then(a.start.cmp(&b.start)));
    rows
}

/// One row per bin in a [`Comparison`]: `attributes` carries the
/// comma-separated `samples=...;counts=...` fields, `source` is fixed to
/// `comparison` since counts are cross-sample.
///
/// Built from [`crate::loci::LociGroup::as_array`]'s flattened `(key, bin)`
/// rows rather than re-deriving its own grouping.
pub fn comparison_rows(cmp: &Comparison) -> Vec<GffRow> {
    let mut rows: Vec<GffRow> = cmp
        .as_array()
        .into_iter()
        .enumerate()
        .map(|(i, (group, bin))| {
            let id = format!("{}_{}_{}_{}", group.reference, group.strand, group.category, i);
            let samples = bin.samples.join(",");
            let counts = bin
                .counts
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",");
            GffRow {
                seqid: group.reference.clone(),
                source: "comparison".to_string(),
                feature: "TE_bin".to_string(),
                start: bin.start,
                end: bin.stop,
                strand: group.strand.to_string(),
                attributes: format!("ID={};Name={};samples={};counts={}", id, group.category, samples, counts),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.seqid.cmp(&b.seqid).then(a.start.cmp(&b.start)));
    rows
}
