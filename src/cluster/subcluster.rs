//! Sub-cluster scanner and flat interval merge (spec §4.3).

use crate::array::Slice;

/// Scan sorted `x` for every maximal index slice `[j, j + k)` whose span
/// `x[j + k - 1] - x[j] <= epsilon`. Yields nothing if `k > x.len()`.
pub fn scan_subclusters(x: &[i64], min_points: usize, epsilon: i64) -> Vec<Slice> {
    let n = x.len();
    if min_points == 0 || min_points > n {
        return Vec::new();
    }
    let offset = min_points - 1;
    (0..n - offset)
        .filter(|&j| x[j + offset] - x[j] <= epsilon)
        .map(|j| Slice::new(j, j + min_points))
        .collect()
}

/// Melt a sequence of half-open index slices into their minimal disjoint
/// cover: overlapping or adjacent-by-overlap slices are merged, in ascending
/// `lower` order.
///
/// `slices` need not arrive sorted; this function sorts a copy by `lower`
/// before sweeping.
pub fn melt_slices(mut slices: Vec<Slice>) -> Vec<Slice> {
    if slices.len() <= 1 {
        return slices;
    }
    slices.sort_by_key(|s| s.lower);

    let mut merged = Vec::with_capacity(slices.len());
    let mut current = slices[0];
    for &next in &slices[1..] {
        if next.lower <= current.upper {
            current.upper = current.upper.max(next.upper);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_k_exceeds_len() {
        assert!(scan_subclusters(&[1, 2, 3], 5, 100).is_empty());
    }

    #[test]
    fn zero_epsilon_collapses_to_identical_runs() {
        // k=3 windows of identical values have span 0.
        let x = [1, 1, 1, 2, 2];
        let slices = scan_subclusters(&x, 3, 0);
        assert_eq!(slices, vec![Slice::new(0, 3)]);
    }

    #[test]
    fn melt_merges_overlapping_and_adjacent() {
        let slices = vec![Slice::new(0, 3), Slice::new(2, 5), Slice::new(5, 7)];
        let melted = melt_slices(slices);
        assert_eq!(melted, vec![Slice::new(0, 7)]);
    }

    #[test]
    fn melt_leaves_disjoint_slices_separate() {
        let slices = vec![Slice::new(0, 2), Slice::new(5, 7)];
        let melted = melt_slices(slices);
        assert_eq!(melted, vec![Slice::new(0, 2), Slice::new(5, 7)]);
    }

    #[test]
    fn melt_idempotent() {
        let slices = vec![Slice::new(0, 3), Slice::new(1, 4), Slice::new(10, 12)];
        let once = melt_slices(slices);
        let twice = melt_slices(once.clone());
        assert_eq!(once, twice);
    }
}
