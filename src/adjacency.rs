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

//! Private adjacency snapshot shared by the orientation and the counter.
//!
//! The caller's graph is only read once, through `petgraph::visit`. Every
//! later query runs against compact indices `0..n`, assigned in ascending
//! `NodeIndexable::to_index` order so that tie-breaks never depend on
//! incidental iteration order.

use std::hash::Hash;

use fixedbitset::FixedBitSet;
use foldhash::{HashSet, HashSetExt};
use indexmap::IndexSet;
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers, NodeIndexable};

// Threshold for dense bitset rows; above it rows become hash sets.
const MAX_NODES_FOR_DENSE_LOOKUP: usize = 4096;

pub(crate) type NodeSet<N> = IndexSet<N, foldhash::fast::RandomState>;

#[derive(Debug, Clone)]
enum EdgeLookup {
    Dense(Vec<FixedBitSet>),
    Sparse(Vec<HashSet<usize>>),
}

/// Sorted, deduplicated neighbour lists plus an O(1) edge test.
#[derive(Debug, Clone)]
pub(crate) struct Adjacency {
    neighbors: Vec<Vec<usize>>,
    lookup: EdgeLookup,
    edge_count: usize,
}

impl Adjacency {
    /// Build from compact edge pairs. Self-loops are dropped and parallel
    /// edges collapse into one.
    pub(crate) fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (s, t) in edges {
            if s == t {
                continue;
            }
            neighbors[s].push(t);
            neighbors[t].push(s);
        }
        let mut degree_sum = 0;
        for row in &mut neighbors {
            row.sort_unstable();
            row.dedup();
            degree_sum += row.len();
        }

        let lookup = if node_count <= MAX_NODES_FOR_DENSE_LOOKUP {
            let rows = neighbors
                .iter()
                .map(|row| {
                    let mut bits = FixedBitSet::with_capacity(node_count);
                    for &t in row {
                        bits.insert(t);
                    }
                    bits
                })
                .collect();
            EdgeLookup::Dense(rows)
        } else {
            let rows = neighbors
                .iter()
                .map(|row| {
                    let mut set = HashSet::with_capacity(row.len());
                    set.extend(row.iter().copied());
                    set
                })
                .collect();
            EdgeLookup::Sparse(rows)
        };

        Adjacency {
            neighbors,
            lookup,
            edge_count: degree_sum / 2,
        }
    }

    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of distinct non-loop edges.
    #[inline]
    pub(crate) fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub(crate) fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    #[inline]
    pub(crate) fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    #[inline]
    pub(crate) fn has_edge(&self, a: usize, b: usize) -> bool {
        match &self.lookup {
            EdgeLookup::Dense(rows) => rows[a].contains(b),
            EdgeLookup::Sparse(rows) => rows[a].contains(&b),
        }
    }
}

/// Read `graph` into a node set (compact index <-> id) and an adjacency
/// snapshot over the compact indices.
pub(crate) fn snapshot<G>(graph: G) -> (NodeSet<G::NodeId>, Adjacency)
where
    G: IntoEdgeReferences + IntoNodeIdentifiers + NodeIndexable,
    G::NodeId: Hash + Eq,
{
    let mut ids: Vec<G::NodeId> = graph.node_identifiers().collect();
    ids.sort_by_key(|&n| graph.to_index(n));
    let mut nodes: NodeSet<G::NodeId> =
        IndexSet::with_capacity_and_hasher(ids.len(), Default::default());
    nodes.extend(ids);

    let edges = graph.edge_references().filter_map(|edge| {
        let s = nodes.get_index_of(&edge.source())?;
        let t = nodes.get_index_of(&edge.target())?;
        Some((s, t))
    });
    let adjacency = Adjacency::from_edges(nodes.len(), edges);
    (nodes, adjacency)
}
