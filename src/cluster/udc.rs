//! UDC — the flat (non-hierarchical) univariate density clusterer (spec §4.4).

use crate::array::{Slice, SortedArray};
use crate::cluster::subcluster::{melt_slices, scan_subclusters};
use crate::error::{ClusterError, Result};

/// Flat univariate density clusterer.
///
/// Fixed parameters `min_points` (window size `k`) and `epsilon`
/// (`ε`, the maximum allowed span within any `k`-window). Disjoint
/// subclusters are melted into maximal clusters; this runs in `O(n)` given
/// sorted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Udc {
    pub min_points: usize,
    pub epsilon: i64,
}

impl Udc {
    pub fn new(min_points: usize, epsilon: i64) -> Self {
        Self {
            min_points,
            epsilon,
        }
    }

    /// Fit sorted array `x`, returning the index slices of its clusters.
    ///
    /// Returns an empty result (not an error) if `min_points > x.len()`.
    pub fn fit(&self, x: &[i64]) -> Result<UdcResult> {
        if self.min_points < 2 {
            return Err(ClusterError::MinPointsTooSmall(self.min_points));
        }
        let sorted = SortedArray::new(x.to_vec())?;

        let slices = melt_slices(scan_subclusters(sorted.as_slice(), self.min_points, self.epsilon));
        Ok(UdcResult {
            input: sorted.into_vec(),
            slices,
        })
    }
}

/// The fitted result of a [`Udc`] run: the original values and the disjoint
/// index slices found within them.
#[derive(Debug, Clone)]
pub struct UdcResult {
    input: Vec<i64>,
    slices: Vec<Slice>,
}

impl UdcResult {
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }

    /// Values grouped into clusters; noise points are omitted.
    pub fn clusters(&self) -> impl Iterator<Item = &[i64]> + '_ {
        self.slices
            .iter()
            .map(move |s| &self.input[s.lower..s.upper])
    }

    /// `(min, max)` value pairs found in each cluster, as genomic intervals.
    pub fn cluster_extremities(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.slices.iter().map(move |s| s.extremities(&self.input))
    }

    /// Cluster label per input point: cluster index (ascending from 0), or
    /// `-1` for noise.
    pub fn labels(&self) -> Vec<i64> {
        let mut labels = vec![-1i64; self.input.len()];
        for (i, s) in self.slices.iter().enumerate() {
            for label in labels[s.lower..s.upper].iter_mut() {
                *label = i as i64;
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_textbook_two_clusters() {
        let x = [0, 0, 0, 3, 4, 5, 8, 9, 50, 51, 52];
        let result = Udc::new(3, 5).fit(&x).unwrap();
        let extremities: Vec<(i64, i64)> = result.cluster_extremities().collect();
        assert_eq!(extremities, vec![(0, 9), (50, 52)]);
    }

    #[test]
    fn s2_no_cluster_when_k_exceeds_len() {
        let x = [1, 2, 3];
        let result = Udc::new(5, 100).fit(&x).unwrap();
        assert!(result.slices().is_empty());
    }

    #[test]
    fn rejects_unsorted_input() {
        let x = [1, 3, 2];
        let err = Udc::new(2, 10).fit(&x).unwrap_err();
        assert!(matches!(err, ClusterError::Unsorted { .. }));
    }

    #[test]
    fn rejects_min_points_below_two() {
        let x = [1, 2, 3];
        assert_eq!(
            Udc::new(1, 10).fit(&x).unwrap_err(),
            ClusterError::MinPointsTooSmall(1)
        );
    }

    #[test]
    fn property_disjoint_and_ascending() {
        let x = [0, 1, 2, 10, 11, 12, 30, 31, 32, 33];
        let result = Udc::new(3, 2).fit(&x).unwrap();
        let slices = result.slices();
        for w in slices.windows(2) {
            assert!(w[0].upper <= w[1].lower);
            assert!(w[0].lower < w[1].lower);
        }
    }

    #[test]
    fn property_density_guarantee() {
        let x = [0, 0, 0, 3, 4, 5, 8, 9, 50, 51, 52];
        let k = 3;
        let eps = 5;
        let result = Udc::new(k, eps).fit(&x).unwrap();
        for s in result.slices() {
            for j in s.lower..=(s.upper - k) {
                assert!(x[j + k - 1] - x[j] <= eps);
            }
        }
    }

    #[test]
    fn property_maximality() {
        let x = [0, 0, 0, 3, 4, 5, 8, 9, 50, 51, 52];
        let k = 3;
        let eps = 5;
        let result = Udc::new(k, eps).fit(&x).unwrap();
        for s in result.slices() {
            // Extending left by one must either run off the array or break
            // the density threshold for the window introduced by extension.
            if s.lower > 0 {
                let j = s.lower - 1;
                assert!(x[j + k - 1] - x[j] > eps);
            }
            // Extending right by one similarly.
            if s.upper < x.len() {
                let j = s.upper - k + 1;
                assert!(x[j + k - 1] - x[j] > eps);
            }
        }
    }

    #[test]
    fn zero_epsilon_requires_exact_ties() {
        let x = [1, 1, 1, 2, 3];
        let result = Udc::new(3, 0).fit(&x).unwrap();
        let extremities: Vec<(i64, i64)> = result.cluster_extremities().collect();
        assert_eq!(extremities, vec![(1, 1)]);
    }
}
