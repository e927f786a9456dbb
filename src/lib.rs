#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::type_complexity)]

//! tefingerprint: density-based clustering of genomic read-tip coordinates
//! for transposable-element insertion fingerprinting.
//!
//! # Features
//!
//! - **Univariate density clustering**: flat ([`cluster::Udc`]) and
//!   hierarchical ([`cluster::Hudc`]) clusterers over sorted coordinate
//!   arrays.
//! - **Loci algebra**: a generic [`loci::LociGroup`] container with melt,
//!   union, and comparison operations over per-sample read loci.
//! - **Parallel dispatch**: fits independent groups concurrently via Rayon.
//!
//! # Example
//!
//! ```rust
//! use tefingerprint::cluster::Udc;
//!
//! let tips = [0, 0, 0, 3, 4, 5, 8, 9, 50, 51, 52];
//! let result = Udc::new(3, 5).fit(&tips).unwrap();
//! let clusters: Vec<(i64, i64)> = result.cluster_extremities().collect();
//! assert_eq!(clusters, vec![(0, 9), (50, 52)]);
//! ```

pub mod array;
pub mod cluster;
pub mod config;
pub mod error;
pub mod gff;
pub mod interval;
pub mod loci;
pub mod parallel;
pub mod reads;

pub use cluster::{Hudc, HudcResult, Method, Udc, UdcResult};
pub use error::{ClusterError, Result};
pub use interval::{BinGroupKey, Interval, ReadGroupKey, Strand};
pub use loci::{ComparativeBins, Comparison, Fingerprint, LociGroup, ReadLoci};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cluster::{Hudc, Method, Udc};
    pub use crate::error::{ClusterError, Result};
    pub use crate::interval::{BinGroupKey, Interval, ReadGroupKey, Strand};
    pub use crate::loci::{ComparativeBins, Comparison, Fingerprint, LociGroup, ReadLoci};
}
