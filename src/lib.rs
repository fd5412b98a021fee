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

//! k-clique counting over `petgraph` graphs.
//!
//! The crate implements the Chiba–Nishizeki scheme: edges are oriented
//! along a degeneracy order ([`degeneracy_orientation`]), which caps every
//! out-degree by the degeneracy, and cliques are then completed only from
//! out-neighbour sets ([`count_k_cliques`], [`CliqueCounter`]).
//!
//! All algorithms are generic over the `petgraph::visit` traits and take
//! the graph by reference; the caller's graph is never modified.

mod adjacency;
mod combinations;
mod counting;
mod error;
mod orientation;

pub use combinations::{binomial, Combinations};
pub use counting::{count_k_cliques, CliqueCounter};
pub use error::CliqueCountError;
pub use orientation::{degeneracy, degeneracy_orientation, Orientation};
