// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

// Chiba, N.; Nishizeki, T. (1985). "Arboricity and subgraph listing
// algorithms". SIAM Journal on Computing. 14 (1): 210–223. doi:10.1137/0214017.

use std::hash::Hash;

use petgraph::visit::{
    EdgeCount, GraphBase, GraphProp, IntoEdgeReferences, IntoNodeIdentifiers, NodeCount,
    NodeIndexable,
};
use petgraph::Undirected;
use tracing::debug;

use crate::adjacency::{snapshot, Adjacency};
use crate::combinations::Combinations;
use crate::error::CliqueCountError;
use crate::orientation::Orientation;

/// Count the k-cliques of an undirected graph.
///
/// `k == 1` returns the node count and `k == 2` the edge count, without
/// building an orientation. For larger `k` the edges are first oriented
/// along a degeneracy order (see [`degeneracy_orientation`]), and for every
/// oriented edge `u -> v` only subsets of the out-neighbours of `u` are
/// examined. Running time is `O(d^(k-2) * m)` for degeneracy `d`.
///
/// The graph must be simple. Self-loops and parallel edges are ignored
/// for `k >= 3`.
///
/// Arguments:
///
/// * `graph` - The undirected graph to search.
/// * `k` - Clique size, at least 1.
///
/// Returns the number of vertex sets of size `k` that are pairwise adjacent,
/// or [`CliqueCountError::InvalidArgument`] if `k` is zero.
///
/// # Example
/// ```rust
/// use kclique::count_k_cliques;
/// use petgraph::graph::UnGraph;
///
/// // 4-cycle with the chord 0-2.
/// let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
/// assert_eq!(count_k_cliques(&graph, 3), Ok(2));
/// assert_eq!(count_k_cliques(&graph, 4), Ok(0));
/// ```
///
/// [`degeneracy_orientation`]: crate::degeneracy_orientation
pub fn count_k_cliques<G>(graph: G, k: usize) -> Result<u64, CliqueCountError>
where
    G: IntoEdgeReferences
        + IntoNodeIdentifiers
        + NodeIndexable
        + NodeCount
        + EdgeCount
        + GraphProp<EdgeType = Undirected>,
    G::NodeId: Hash + Eq,
{
    match k {
        0 => Err(CliqueCountError::InvalidArgument { k }),
        1 => Ok(graph.node_count() as u64),
        2 => Ok(graph.edge_count() as u64),
        _ => CliqueCounter::new(graph).count(k),
    }
}

/// Reusable clique counter over one graph.
///
/// The adjacency snapshot and the degeneracy orientation are built once in
/// [`CliqueCounter::new`]; every [`CliqueCounter::count`] call reuses them.
#[derive(Debug, Clone)]
pub struct CliqueCounter<N> {
    adjacency: Adjacency,
    orientation: Orientation<N>,
}

impl<N> CliqueCounter<N>
where
    N: Copy + Hash + Eq,
{
    pub fn new<G>(graph: G) -> Self
    where
        G: IntoEdgeReferences
            + IntoNodeIdentifiers
            + NodeIndexable
            + GraphProp<EdgeType = Undirected>
            + GraphBase<NodeId = N>,
    {
        let (nodes, adjacency) = snapshot(graph);
        let orientation = Orientation::from_adjacency(nodes, &adjacency);
        CliqueCounter {
            adjacency,
            orientation,
        }
    }

    pub fn orientation(&self) -> &Orientation<N> {
        &self.orientation
    }

    /// Number of k-cliques. Same contract as [`count_k_cliques`], except
    /// that `k == 2` reports distinct non-loop edges.
    pub fn count(&self, k: usize) -> Result<u64, CliqueCountError> {
        match k {
            0 => Err(CliqueCountError::InvalidArgument { k }),
            1 => Ok(self.orientation.node_count() as u64),
            2 => Ok(self.adjacency.edge_count() as u64),
            _ => count_oriented(
                &self.adjacency,
                self.orientation.compact_successors(),
                self.orientation.degeneracy(),
                k,
            ),
        }
    }

    /// Clique counts for `k = 1, 2, ...` up to the clique number; entry
    /// `i` holds the count for `k = i + 1`. Empty for the empty graph.
    pub fn clique_counts(&self) -> Result<Vec<u64>, CliqueCountError> {
        let mut counts = Vec::new();
        for k in 1.. {
            let count = self.count(k)?;
            if count == 0 {
                break;
            }
            counts.push(count);
        }
        Ok(counts)
    }

    /// Size of the largest clique.
    pub fn clique_number(&self) -> Result<usize, CliqueCountError> {
        Ok(self.clique_counts()?.len())
    }
}

/// Core search for `k >= 3` over compact indices.
///
/// Each oriented edge `u -> v` is visited once, with `u` as the tail. With
/// `S` the out-neighbours of `u` other than `v`, every `(k-3)`-subset `w`
/// of `S` that is a clique fully joined to `v` is extended by each `x` in
/// `S` adjacent to `v` and to all of `w`. A k-clique is found only from
/// its earliest-removed vertex `u`, once for every choice of `v` and `x`
/// among the other members, so the raw total is `(k-1)(k-2)` times the
/// clique count.
fn count_oriented(
    adjacency: &Adjacency,
    successors: &[Vec<usize>],
    degeneracy: usize,
    k: usize,
) -> Result<u64, CliqueCountError> {
    debug_assert!(k >= 3);
    // A k-clique needs a vertex with k-1 out-neighbours.
    if k > degeneracy + 1 {
        debug!(k, degeneracy, "clique size exceeds degeneracy bound");
        return Ok(0);
    }

    let extension = k - 3;
    let mut raw: u64 = 0;
    let mut candidates: Vec<usize> = Vec::with_capacity(degeneracy);
    for out in successors {
        for &v in out {
            candidates.clear();
            candidates.extend(out.iter().copied().filter(|&x| x != v));

            let mut subsets = Combinations::new(candidates.len(), extension);
            while let Some(selection) = subsets.advance() {
                let pairwise = selection.iter().enumerate().all(|(i, &a)| {
                    selection[i + 1..]
                        .iter()
                        .all(|&b| adjacency.has_edge(candidates[a], candidates[b]))
                });
                if !pairwise {
                    continue;
                }
                if !selection
                    .iter()
                    .all(|&a| adjacency.has_edge(candidates[a], v))
                {
                    continue;
                }
                let completions = candidates
                    .iter()
                    .filter(|&&x| {
                        adjacency.has_edge(x, v)
                            && selection
                                .iter()
                                .all(|&a| adjacency.has_edge(x, candidates[a]))
                    })
                    .count() as u64;
                raw = raw
                    .checked_add(completions)
                    .ok_or(CliqueCountError::CountOverflow { k })?;
            }
        }
    }

    let divisor = ((k - 1) * (k - 2)) as u64;
    debug_assert_eq!(
        raw % divisor,
        0,
        "raw detections {raw} not a multiple of {divisor}"
    );
    debug!(k, raw, divisor, "counted oriented clique completions");
    Ok(raw / divisor)
}
