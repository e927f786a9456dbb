//! Melt (union) of genomic intervals by coordinate sweep (spec §4.7).

use crate::interval::Interval;

/// Collapse a sequence of (possibly unsorted, possibly overlapping) closed
/// intervals into their minimal disjoint cover.
///
/// Matches the independently-sorted-starts/independently-sorted-stops sweep:
/// an emitted interval ends at the first `stop` such that the next `start`
/// exceeds it, which is equivalent to a standard sweep-merge because sorting
/// `starts` and `stops` separately preserves ordering between the two
/// sequences.
pub fn melt_intervals(intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return Vec::new();
    }
    let mut starts: Vec<i64> = intervals.iter().map(|i| i.start).collect();
    let mut stops: Vec<i64> = intervals.iter().map(|i| i.stop).collect();
    starts.sort_unstable();
    stops.sort_unstable();

    let mut out = Vec::new();
    let mut start = starts[0];
    let mut stop = stops[0];
    for i in 1..starts.len() {
        if starts[i] <= stop {
            if stops[i] > stop {
                stop = stops[i];
            }
        } else {
            out.push(Interval::new(start, stop));
            start = starts[i];
            stop = stops[i];
        }
    }
    out.push(Interval::new(start, stop));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s5_melt_overlapping_and_touching_and_disjoint() {
        let intervals = vec![
            Interval::new(1, 5),
            Interval::new(3, 7),
            Interval::new(10, 12),
            Interval::new(11, 20),
            Interval::new(30, 30),
        ];
        let melted = melt_intervals(intervals);
        assert_eq!(
            melted,
            vec![Interval::new(1, 7), Interval::new(10, 20), Interval::new(30, 30)]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(melt_intervals(Vec::new()).is_empty());
    }

    #[test]
    fn single_interval_is_unchanged() {
        let intervals = vec![Interval::new(5, 9)];
        assert_eq!(melt_intervals(intervals), vec![Interval::new(5, 9)]);
    }

    #[test]
    fn property_melt_is_idempotent() {
        let intervals = vec![
            Interval::new(1, 5),
            Interval::new(3, 7),
            Interval::new(10, 12),
            Interval::new(11, 20),
            Interval::new(30, 30),
        ];
        let once = melt_intervals(intervals);
        let twice = melt_intervals(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn property_output_is_disjoint_and_ascending() {
        let intervals = vec![
            Interval::new(0, 2),
            Interval::new(5, 6),
            Interval::new(8, 9),
            Interval::new(1, 1),
        ];
        let melted = melt_intervals(intervals);
        for w in melted.windows(2) {
            assert!(w[0].stop < w[1].start);
        }
    }
}
