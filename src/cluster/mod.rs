//! The univariate density clustering engine (spec §4.1–§4.5).
//!
//! Two clusterers share the same low-level primitives: [`Udc`] (flat) scans
//! for subclusters at one fixed epsilon and melts overlapping ones; [`Hudc`]
//! (hierarchical) builds on [`core_distances`] and [`fork_epsilon`] to pick
//! flat clusters out of the density tree induced by varying epsilon.

pub mod core_distance;
pub mod fork_epsilon;
pub mod hudc;
pub mod subcluster;
pub mod udc;

pub use core_distance::core_distances;
pub use fork_epsilon::fork_epsilon;
pub use hudc::{Hudc, HudcResult, Method};
pub use subcluster::{melt_slices, scan_subclusters};
pub use udc::{Udc, UdcResult};
