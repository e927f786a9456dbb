//! Fork-epsilon primitive (spec §4.2).
//!
//! The largest epsilon at which a sorted array's single cluster splits into
//! two or more sub-clusters, or "no fork" (`None`) if the whole array stays
//! one cluster all the way down to its smallest core distance.

use crate::error::{ClusterError, Result};

/// Sliding minimum of `values` over windows of width `window`, in "full"
/// convolution mode: the output has length `values.len() + window - 1`, and
/// each output position takes the minimum over whichever part of its window
/// actually overlaps `values` (edges are covered by a partial window).
fn windowed_min_full(values: &[i64], window: usize) -> Vec<i64> {
    let vlen = values.len();
    let out_len = vlen + window - 1;
    let mut out = Vec::with_capacity(out_len);
    for c in 0..out_len {
        let lo = c.saturating_sub(window - 1);
        let hi = c.min(vlen - 1);
        out.push(values[lo..=hi].iter().copied().min().unwrap());
    }
    out
}

/// Remove consecutive duplicate runs, keeping the first value of each run.
fn drop_plateaus(values: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(values.len());
    for (i, &v) in values.iter().enumerate() {
        if i == 0 || v != values[i - 1] {
            out.push(v);
        }
    }
    out
}

/// Strict local peaks: values greater than both neighbours. Endpoints can
/// never be peaks.
fn strict_peaks(values: &[i64]) -> Vec<i64> {
    if values.len() < 3 {
        return Vec::new();
    }
    (1..values.len() - 1)
        .filter(|&i| values[i] > values[i - 1] && values[i] > values[i + 1])
        .map(|i| values[i])
        .collect()
}

/// Compute the fork epsilon of sorted array `x` under window size
/// `min_points`, or `None` if `x` never forks (the "no fork" sentinel of
/// spec §7 — internal only, never surfaced as an error).
///
/// # Errors
///
/// Returns [`ClusterError::MinPointsTooSmall`] if `min_points < 2`.
pub fn fork_epsilon(x: &[i64], min_points: usize) -> Result<Option<i64>> {
    if min_points < 2 {
        return Err(ClusterError::MinPointsTooSmall(min_points));
    }
    let n = x.len();
    if n <= min_points {
        // No forks possible: every point shares the same core distance.
        return Ok(None);
    }

    let offset = min_points - 1;
    let eps_values: Vec<i64> = (0..n - offset).map(|j| x[j + offset] - x[j]).collect();

    let splits = windowed_min_full(&eps_values, offset);
    let splits = drop_plateaus(&splits);
    let peaks = strict_peaks(&splits);

    Ok(peaks.into_iter().max().map(|peak| peak - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_min_points() {
        assert!(matches!(
            fork_epsilon(&[1, 2, 3], 1),
            Err(ClusterError::MinPointsTooSmall(1))
        ));
    }

    #[test]
    fn no_fork_when_len_at_most_min_points() {
        assert_eq!(fork_epsilon(&[1, 2, 3], 3).unwrap(), None);
        assert_eq!(fork_epsilon(&[1, 2], 3).unwrap(), None);
    }

    #[test]
    fn docstring_example_forks_at_21() {
        let x = [0, 0, 3, 4, 4, 6, 26, 28, 28, 29, 32, 32];
        assert_eq!(fork_epsilon(&x, 3).unwrap(), Some(21));
    }

    #[test]
    fn consecutive_run_never_forks() {
        let x: Vec<i64> = (0..10).collect();
        assert_eq!(fork_epsilon(&x, 3).unwrap(), None);
    }

    #[test]
    fn three_well_separated_triplets_fork() {
        // S4 setup
        let x = [0, 1, 2, 3, 20, 21, 22, 23, 40, 41, 42, 43];
        let f = fork_epsilon(&x, 3).unwrap();
        assert!(f.is_some());
        assert!(f.unwrap() < 20);
    }
}
