#![forbid(unsafe_code)]

//! Weighted, undirected graph container.
//!
//! Design goals:
//! - the adjacency is always stored in weighted form; unweighted input is normalized once at
//!   construction (weight `1` on every edge)
//! - deterministic output: vertices and adjacency lists keep insertion order
//! - lazy traversals (`Iterator`s) that can be dropped at any point
//!
//! ```
//! use wgraph::Graph;
//!
//! let g = Graph::from_unweighted([("A", vec!["B", "C"]), ("B", vec!["A", "C"]), ("C", vec!["A", "B"])]);
//! assert_eq!(g.to_string(), "graph with 3 vertices and 6 edges");
//! assert_eq!(g.shortest_path(&"A", &"C").unwrap(), Some(vec!["A", "C"]));
//! ```

pub mod error;
pub mod graph;
pub mod input;
pub mod matrix;

use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

pub use error::{Error, Result};
pub use graph::traversal::{BfsPaths, BreadthFirst, DepthFirst, DfsPaths};
pub use graph::{Edge, Graph, Neighbor, Vertices};
pub use input::{AdjacencyInput, GraphOptions};
pub use matrix::{
    AdjacencyMatrix, LABEL_CAPACITY, format_matrix, from_adjacency_matrix,
    from_adjacency_matrix_with_options, matrix_labels, parse_matrix,
};

/// Edge weights are plain integers; `0` means "no edge" in matrix form.
pub type Weight = i64;

pub(crate) type FxHashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Adjacency keyed by vertex, in storage order.
pub type Adjacency<V, T> = indexmap::IndexMap<V, Vec<T>, FxBuildHasher>;

/// Vertex identifiers: hashable, totally ordered, printable.
///
/// One identifier type is fixed per graph instance (`Graph<&str>`, `Graph<String>`,
/// `Graph<i64>`, ...).
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Display {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + fmt::Display {}
