//! Brute-force k-nearest-neighbor graphs.
//!
//! Each node is linked to its `k` closest *other* nodes by Euclidean distance.
//! The adjacency is directed: node `i` listing `j` says nothing about whether
//! `j` lists `i`. Summing edge weights therefore has two readings, selected by
//! [`EdgeWeighting`]:
//!
//! - **Directed**: sum every adjacency entry. A mutual pair `i <-> j`
//!   contributes its length twice, a one-sided pair once. This is the total the
//!   kNN-length estimator has always used.
//! - **Undirected**: symmetrize first, so every unordered pair contributes its
//!   length exactly once.
//!
//! ## Complexity
//!
//! - **Time**: O(n² · d) distance evaluations plus O(n · n) selection.
//! - **Space**: O(n · k) for the adjacency, O(n) scratch per row.
//!
//! With the `parallel` feature, rows are computed on the rayon thread pool. Row
//! contents do not depend on scheduling, so the graph is identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::util;
use crate::error::{Error, Result};

/// How edge weights of a [`KnnGraph`] are totalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeWeighting {
    /// Sum every directed adjacency entry (mutual neighbors count twice).
    #[default]
    Directed,
    /// Sum each unordered neighbor pair once.
    Undirected,
}

/// An outgoing edge of a kNN graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the neighbor within the graph's point set.
    pub index: usize,
    /// Euclidean distance to the neighbor.
    pub distance: f64,
}

/// Directed k-nearest-neighbor graph with Euclidean edge weights.
#[derive(Debug, Clone)]
pub struct KnnGraph {
    k: usize,
    /// `adjacency[i]` holds the `k` neighbors of `i`, nearest first.
    adjacency: Vec<Vec<Neighbor>>,
}

impl KnnGraph {
    /// Build the graph over `points`, excluding self-loops.
    ///
    /// Ties in distance are broken by the lower index, so the result is fully
    /// determined by the input.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `k == 0`.
    /// - [`Error::SampleTooSmall`] if there are not at least `k + 1` points.
    /// - [`Error::DimensionMismatch`] / [`Error::NonFinite`] for malformed points.
    pub fn build<P>(points: &[P], k: usize) -> Result<Self>
    where
        P: AsRef<[f32]> + Sync,
    {
        if k == 0 {
            return Err(Error::InvalidParameter {
                name: "n_neighbors",
                message: "must be at least 1",
            });
        }
        let n = points.len();
        if n <= k {
            return Err(Error::SampleTooSmall {
                requested: n,
                n_neighbors: k,
            });
        }
        util::validate_dataset(points)?;

        #[cfg(feature = "parallel")]
        let adjacency: Vec<Vec<Neighbor>> = (0..n)
            .into_par_iter()
            .map(|i| nearest_neighbors(points, i, k))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let adjacency = serial_adjacency(points, k);

        Ok(Self { k, adjacency })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no nodes (never true for a built graph).
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Out-degree of every node.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Neighbors of node `i`, nearest first.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn neighbors(&self, i: usize) -> &[Neighbor] {
        &self.adjacency[i]
    }

    /// Whether `j` is among the neighbors of `i`.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency
            .get(i)
            .is_some_and(|row| row.iter().any(|nb| nb.index == j))
    }

    /// Total edge length under the given weighting.
    pub fn total_weight(&self, weighting: EdgeWeighting) -> f64 {
        match weighting {
            EdgeWeighting::Directed => self
                .adjacency
                .iter()
                .flatten()
                .map(|nb| nb.distance)
                .sum(),
            EdgeWeighting::Undirected => {
                let mut total = 0.0f64;
                for (i, row) in self.adjacency.iter().enumerate() {
                    for nb in row {
                        // Mutual pairs are counted from the lower endpoint only.
                        if nb.index < i && self.has_edge(nb.index, i) {
                            continue;
                        }
                        total += nb.distance;
                    }
                }
                total
            }
        }
    }
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn serial_adjacency<P: AsRef<[f32]>>(points: &[P], k: usize) -> Vec<Vec<Neighbor>> {
    (0..points.len())
        .map(|i| nearest_neighbors(points, i, k))
        .collect()
}

fn nearest_neighbors<P: AsRef<[f32]>>(points: &[P], i: usize, k: usize) -> Vec<Neighbor> {
    let query = points[i].as_ref();
    let mut candidates: Vec<Neighbor> = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, p)| Neighbor {
            index: j,
            distance: util::euclidean(query, p.as_ref()),
        })
        .collect();

    let by_distance = |a: &Neighbor, b: &Neighbor| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.index.cmp(&b.index))
    };

    if candidates.len() > k {
        candidates.select_nth_unstable_by(k - 1, by_distance);
        candidates.truncate(k);
    }
    candidates.sort_by(by_distance);
    candidates
}
