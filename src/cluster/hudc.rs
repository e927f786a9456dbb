//! HUDC — the hierarchical univariate density clusterer (spec §4.5).
//!
//! Builds on [`core_distances`] and [`fork_epsilon`] to perform a top-down
//! traversal of the density tree induced by varying epsilon, selecting flat
//! clusters by a support score. Per the design notes (spec §9), traversal
//! uses an explicit work-stack rather than recursion so depth is bounded
//! only by available memory, not the call stack.

use crate::array::{Slice, SortedArray};
use crate::cluster::core_distance::core_distances;
use crate::cluster::fork_epsilon::fork_epsilon;
use crate::cluster::subcluster::{melt_slices, scan_subclusters};
use crate::cluster::udc::Udc;
use crate::error::{ClusterError, Result};

/// Support-scoring method used when deciding whether a parent cluster or
/// its children are selected (spec §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Score a cluster against the global epsilon ceiling `E`.
    Conservative,
    /// Score a cluster against the epsilon at which it was entered from its
    /// parent (tighter at deep levels).
    Aggressive,
}

impl Method {
    /// Parse a method name, as it might arrive from external configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::UnknownMethod`] for anything other than
    /// `"conservative"` or `"aggressive"` (case-sensitive, matching the
    /// values named in spec §4.5).
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "conservative" => Ok(Method::Conservative),
            "aggressive" => Ok(Method::Aggressive),
            other => Err(ClusterError::UnknownMethod(other.to_string())),
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Conservative
    }
}

/// Hierarchical univariate density clusterer.
#[derive(Debug, Clone, Copy)]
pub struct Hudc {
    pub min_points: usize,
    pub max_eps: Option<i64>,
    pub min_eps: Option<i64>,
    pub method: Method,
}

impl Hudc {
    pub fn new(min_points: usize) -> Self {
        Self {
            min_points,
            max_eps: None,
            min_eps: None,
            method: Method::Conservative,
        }
    }

    pub fn with_max_eps(mut self, max_eps: i64) -> Self {
        self.max_eps = Some(max_eps);
        self
    }

    pub fn with_min_eps(mut self, min_eps: i64) -> Self {
        self.min_eps = Some(min_eps);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Fit sorted array `x`.
    ///
    /// Returns an empty result if `x.len() < min_points`. `max_eps` is
    /// never written back onto `self` — the default is computed locally on
    /// each call, so a reused `Hudc` value gives identical results for
    /// identical inputs (see spec §9's note on the Python source mutating
    /// `max_eps` in place on first fit, which this deliberately avoids).
    pub fn fit(&self, x: &[i64]) -> Result<HudcResult> {
        if self.min_points < 2 {
            return Err(ClusterError::MinPointsTooSmall(self.min_points));
        }
        let sorted = SortedArray::new(x.to_vec())?;
        let x = sorted.as_slice();
        if x.len() < self.min_points {
            return Ok(HudcResult {
                input: sorted.into_vec(),
                slices: Vec::new(),
            });
        }

        let mut core_dist = core_distances(x, self.min_points)?;
        if let Some(min_eps) = self.min_eps {
            for d in core_dist.iter_mut() {
                *d = (*d).max(min_eps);
            }
        }

        let global_max_eps = match self.max_eps {
            Some(e) => e,
            None => match fork_epsilon(x, self.min_points)? {
                Some(f) => f - 1,
                // The whole array never forks regardless of epsilon; the
                // seed ceiling is irrelevant to the result in this case, so
                // any value at least as large as the largest core distance
                // keeps the seed step well-defined.
                None => core_dist.iter().copied().max().unwrap_or(0),
            },
        };

        let seed = Udc::new(self.min_points, global_max_eps).fit(x)?;
        let slices = self.traverse(x, &core_dist, seed.slices().to_vec(), global_max_eps);

        Ok(HudcResult {
            input: x.to_vec(),
            slices,
        })
    }

    fn traverse(
        &self,
        x: &[i64],
        core_dist: &[i64],
        seeds: Vec<Slice>,
        global_max_eps: i64,
    ) -> Vec<Slice> {
        let mut stack: Vec<(Slice, i64)> = seeds.into_iter().map(|s| (s, global_max_eps)).collect();
        let mut selected = Vec::new();

        while let Some((slice, local_max_eps)) = stack.pop() {
            let sub_x = &x[slice.lower..slice.upper];
            // min_points >= 2 already checked in `fit`; safe to unwrap here.
            let fork = fork_epsilon(sub_x, self.min_points).unwrap();

            let Some(local_min_eps) = fork else {
                // Case A: no fork, this cluster has no children.
                selected.push(slice);
                continue;
            };

            let sub_dist = &core_dist[slice.lower..slice.upper];
            let support_parent: i64 = match self.method {
                Method::Aggressive => sub_dist
                    .iter()
                    .map(|&d| local_max_eps - local_min_eps.max(d))
                    .sum(),
                Method::Conservative => sub_dist
                    .iter()
                    .map(|&d| global_max_eps - local_min_eps.max(d))
                    .sum(),
            };
            let support_children: i64 = sub_dist
                .iter()
                .map(|&d| (local_min_eps - d).max(0))
                .sum();

            if support_parent >= support_children {
                // Case B, parent supported.
                selected.push(slice);
            } else {
                // Case B, children supported: descend one level.
                let child_bounds = melt_slices(scan_subclusters(
                    sub_x,
                    self.min_points,
                    local_min_eps - 1,
                ));
                for child in child_bounds {
                    let absolute = Slice::new(slice.lower + child.lower, slice.lower + child.upper);
                    stack.push((absolute, local_min_eps));
                }
            }
        }

        selected.sort_by_key(|s| s.lower);
        selected
    }
}

/// The fitted result of a [`Hudc`] run.
#[derive(Debug, Clone)]
pub struct HudcResult {
    input: Vec<i64>,
    slices: Vec<Slice>,
}

impl HudcResult {
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn cluster_extremities(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.slices.iter().map(move |s| s.extremities(&self.input))
    }
}
