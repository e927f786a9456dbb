//! Core-distance primitive (spec §4.1).
//!
//! For each point in a sorted array, the core distance is the smallest
//! epsilon at which the point belongs to some window of `k` consecutive
//! neighbours with span `<= epsilon`.

use crate::error::{ClusterError, Result};

/// Compute `D[i]`, the core distance of every point in `x`, for window size
/// `k = min_points`.
///
/// `D[i] = min` over windows `[j, j + k)` covering `i` of `x[j + k - 1] -
/// x[j]`. Edge positions covered by fewer than `k` windows take the minimum
/// over the windows that do cover them.
///
/// # Errors
///
/// Returns [`ClusterError::MinPointsTooSmall`] if `k < 2`. Contract
/// violation for `k > n` is the caller's responsibility to avoid; this
/// function returns an empty vector in that case rather than panicking,
/// since no window of size `k` exists.
pub fn core_distances(x: &[i64], min_points: usize) -> Result<Vec<i64>> {
    if min_points < 2 {
        return Err(ClusterError::MinPointsTooSmall(min_points));
    }
    let n = x.len();
    if min_points > n {
        return Ok(Vec::new());
    }

    let k = min_points;
    let offset = k - 1;
    let span_count = n - offset;

    // S[j] = x[j + k - 1] - x[j], for j in [0, span_count)
    let spans: Vec<i64> = (0..span_count).map(|j| x[j + offset] - x[j]).collect();

    // D[i] = min of spans[j] over j with max(0, i-k+1) <= j <= min(n-k, i)
    let mut d = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(offset);
        let hi = i.min(span_count - 1);
        let min_span = spans[lo..=hi].iter().copied().min().unwrap();
        d.push(min_span);
    }
    Ok(d)
}
