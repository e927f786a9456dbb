//! Global configuration for runtime reporting behavior.
//!
//! Thread-safe global configuration that affects diagnostic output without
//! adding overhead to hot loops.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for per-group timing/size reports during parallel dispatch.
///
/// Set once at startup and read from [`crate::parallel::par_fingerprint`].
/// The atomic load has negligible overhead compared to a clustering fit.
static STATS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable per-group stats reporting to stderr.
///
/// # Example
///
/// ```
/// use tefingerprint::config;
///
/// config::set_stats_enabled(true);
/// assert!(config::is_stats_enabled());
/// config::set_stats_enabled(false);
/// ```
#[inline]
pub fn set_stats_enabled(enabled: bool) {
    STATS_ENABLED.store(enabled, Ordering::Release);
}

/// Check whether per-group stats reporting is enabled.
#[inline]
pub fn is_stats_enabled() -> bool {
    STATS_ENABLED.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_to_disabled() {
        set_stats_enabled(false);
        assert!(!is_stats_enabled());
    }

    #[test]
    #[serial]
    fn can_be_enabled_and_disabled() {
        set_stats_enabled(true);
        assert!(is_stats_enabled());
        set_stats_enabled(false);
        assert!(!is_stats_enabled());
    }
}
