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

//! Degeneracy orientation by minimum-degree peeling.
//!
//! Vertices are removed one at a time, always taking a vertex of minimum
//! remaining degree; every edge still incident to the removed vertex is
//! directed away from it. The out-degree of a vertex is therefore its
//! degree at removal time, and the largest of those is the degeneracy.

use std::collections::BTreeSet;
use std::hash::Hash;

use fixedbitset::FixedBitSet;
use petgraph::visit::{GraphProp, IntoEdgeReferences, IntoNodeIdentifiers, NodeIndexable};
use petgraph::Undirected;
use tracing::debug;

use crate::adjacency::{snapshot, Adjacency, NodeSet};

/// Acyclic orientation of an undirected graph along a degeneracy order.
///
/// Every undirected edge `{a, b}` appears exactly once, as `a -> b` when
/// `a` was removed before `b`. No vertex has more out-neighbours than
/// [`Orientation::degeneracy`].
#[derive(Debug, Clone)]
pub struct Orientation<N> {
    nodes: NodeSet<N>,
    rank: Vec<usize>,
    order: Vec<usize>,
    successors: Vec<Vec<usize>>,
    degeneracy: usize,
}

impl<N> Orientation<N>
where
    N: Copy + Hash + Eq,
{
    pub(crate) fn from_adjacency(nodes: NodeSet<N>, adjacency: &Adjacency) -> Self {
        let peeling = peel(adjacency);
        debug!(
            nodes = adjacency.node_count(),
            edges = adjacency.edge_count(),
            degeneracy = peeling.degeneracy,
            "computed degeneracy orientation"
        );
        Orientation {
            nodes,
            rank: peeling.rank,
            order: peeling.order,
            successors: peeling.successors,
            degeneracy: peeling.degeneracy,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// The largest out-degree, which equals the degeneracy of the source
    /// graph. Zero for graphs without edges.
    pub fn degeneracy(&self) -> usize {
        self.degeneracy
    }

    /// Out-degree of `node`, or `None` if it is not in the graph.
    pub fn out_degree(&self, node: N) -> Option<usize> {
        let v = self.nodes.get_index_of(&node)?;
        Some(self.successors[v].len())
    }

    /// Out-neighbours of `node` in ascending vertex order.
    pub fn successors(&self, node: N) -> Option<impl Iterator<Item = N> + '_> {
        let v = self.nodes.get_index_of(&node)?;
        Some(self.successors[v].iter().map(move |&t| self.nodes[t]))
    }

    /// Whether the orientation contains the directed edge `source -> target`.
    pub fn contains_edge(&self, source: N, target: N) -> bool {
        let (Some(s), Some(t)) = (
            self.nodes.get_index_of(&source),
            self.nodes.get_index_of(&target),
        ) else {
            return false;
        };
        self.rank[s] < self.rank[t] && self.successors[s].binary_search(&t).is_ok()
    }

    /// Position of `node` in the removal order.
    pub fn rank(&self, node: N) -> Option<usize> {
        self.nodes.get_index_of(&node).map(|v| self.rank[v])
    }

    /// Vertices in the order they were peeled off.
    pub fn removal_order(&self) -> impl Iterator<Item = N> + '_ {
        self.order.iter().map(move |&v| self.nodes[v])
    }

    /// All directed edges, grouped by source in removal order.
    pub fn edges(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.order.iter().flat_map(move |&s| {
            self.successors[s]
                .iter()
                .map(move |&t| (self.nodes[s], self.nodes[t]))
        })
    }

    pub(crate) fn compact_successors(&self) -> &[Vec<usize>] {
        &self.successors
    }
}

/// Orient the edges of `graph` along a degeneracy order.
///
/// Among vertices of equal minimum degree the one with the smallest
/// `NodeIndexable::to_index` is removed first, so the result depends only
/// on the graph and not on hashing or iteration order. Runs in
/// `O((n + m) log n)`: each degree bucket is an ordered set so the smallest
/// index can be taken first, which a plain bucket queue (`O(n + m)`) cannot
/// do. Never fails; the empty graph gives an empty orientation.
///
/// ```
/// use kclique::degeneracy_orientation;
/// use petgraph::graph::{NodeIndex, UnGraph};
///
/// let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
/// let orientation = degeneracy_orientation(&graph);
/// assert_eq!(orientation.degeneracy(), 2);
/// assert!(orientation.contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
/// ```
pub fn degeneracy_orientation<G>(graph: G) -> Orientation<G::NodeId>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers + NodeIndexable + GraphProp<EdgeType = Undirected>,
    G::NodeId: Hash + Eq,
{
    let (nodes, adjacency) = snapshot(graph);
    Orientation::from_adjacency(nodes, &adjacency)
}

/// Degeneracy of `graph`: the smallest `d` such that every subgraph has a
/// vertex of degree at most `d`.
pub fn degeneracy<G>(graph: G) -> usize
where
    G: IntoEdgeReferences + IntoNodeIdentifiers + NodeIndexable + GraphProp<EdgeType = Undirected>,
    G::NodeId: Hash + Eq,
{
    let (_, adjacency) = snapshot(graph);
    peel(&adjacency).degeneracy
}

struct Peeling {
    rank: Vec<usize>,
    order: Vec<usize>,
    successors: Vec<Vec<usize>>,
    degeneracy: usize,
}

/// Bucket queue keyed by remaining degree. Buckets are ordered sets so
/// the smallest index wins ties.
fn peel(adjacency: &Adjacency) -> Peeling {
    let num_nodes = adjacency.node_count();
    let mut degrees: Vec<usize> = (0..num_nodes).map(|v| adjacency.degree(v)).collect();
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let mut degree_bins: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); max_degree + 1];
    for (node, &degree) in degrees.iter().enumerate() {
        degree_bins[degree].insert(node);
    }

    let mut removed = FixedBitSet::with_capacity(num_nodes);
    let mut rank = vec![0; num_nodes];
    let mut order = Vec::with_capacity(num_nodes);
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];
    let mut degeneracy = 0;
    let mut current_degree = 0;

    for step in 0..num_nodes {
        while current_degree <= max_degree && degree_bins[current_degree].is_empty() {
            current_degree += 1;
        }
        let Some(node) = degree_bins
            .get_mut(current_degree)
            .and_then(BTreeSet::pop_first)
        else {
            break;
        };
        removed.insert(node);
        rank[node] = step;
        order.push(node);
        degeneracy = degeneracy.max(current_degree);

        let mut out = Vec::with_capacity(current_degree);
        for &neighbor in adjacency.neighbors(node) {
            if removed.contains(neighbor) {
                continue;
            }
            out.push(neighbor);
            let degree = degrees[neighbor];
            degree_bins[degree].remove(&neighbor);
            degrees[neighbor] = degree - 1;
            degree_bins[degree - 1].insert(neighbor);
        }
        successors[node] = out;
        // Neighbour degrees dropped by at most one.
        current_degree = current_degree.saturating_sub(1);
    }

    Peeling {
        rank,
        order,
        successors,
        degeneracy,
    }
}
