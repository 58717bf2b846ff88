//! Graph container.
//!
//! The adjacency is an insertion-ordered map from vertex to its list of `(neighbor, weight)`
//! entries. Every public mutation keeps three invariants:
//! - symmetry: `v` is in `u`'s list with weight `w` iff `u` is in `v`'s list with weight `w`
//! - uniqueness: a neighbor appears at most once per list
//! - closure: every neighbor is itself a vertex
//!
//! Traversals live in [`traversal`], matrix/complement/subgraph queries in [`structure`].

pub mod structure;
pub mod traversal;

use crate::input::{AdjacencyInput, GraphOptions};
use crate::{Adjacency, Error, Result, Vertex, Weight};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Weight used when the caller does not supply one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// One adjacency-list entry. Serializes as `[vertex, weight]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Neighbor<V> {
    pub vertex: V,
    pub weight: Weight,
}

impl<V: Serialize> Serialize for Neighbor<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (&self.vertex, self.weight).serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Neighbor<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let (vertex, weight) = <(V, Weight)>::deserialize(deserializer)?;
        Ok(Self { vertex, weight })
    }
}

/// A directed view of one adjacency entry: `end` as seen from `start`.
///
/// Orders by `(start, end, weight)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<V> {
    pub start: V,
    pub end: V,
    pub weight: Weight,
}

#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: Adjacency<V, Neighbor<V>>,
    weighted: bool,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::default(),
            weighted: false,
        }
    }
}

impl<V: Vertex> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<V: Vertex> Eq for Graph<V> {}

impl<V: Vertex> Graph<V> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_mode(weighted: bool) -> Self {
        Self {
            adjacency: Adjacency::default(),
            weighted,
        }
    }

    /// Copies `input` into a fresh graph.
    ///
    /// `weighted: None` detects the mode from the input shape. In unweighted mode every edge
    /// gets [`DEFAULT_WEIGHT`]. Entries are replayed through [`Graph::add_edge`], so missing
    /// back-links and neighbor-only vertices are filled in, and for an entry given with two
    /// different weights the first one seen wins.
    pub fn new(input: AdjacencyInput<V>, weighted: Option<bool>) -> Self {
        Self::with_options(input, GraphOptions { weighted })
    }

    pub fn with_options(input: AdjacencyInput<V>, options: GraphOptions) -> Self {
        let weighted = options.resolve(&input);
        let entries = input.into_entries();

        let mut g = Self::with_mode(weighted);
        for (v, _) in &entries {
            g.add_vertex(v.clone());
        }
        for (v, neighbors) in entries {
            for (n, weight) in neighbors {
                let weight = if weighted { weight } else { DEFAULT_WEIGHT };
                g.add_edge(v.clone(), n, weight);
            }
        }

        tracing::debug!(
            vertices = g.vertex_count(),
            edges = g.edge_count(),
            weighted,
            "graph constructed"
        );
        g
    }

    /// `[(vertex, [neighbor, ...]), ...]`; every edge gets weight `1`.
    pub fn from_unweighted<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        Self::with_options(
            AdjacencyInput::unweighted(adjacency),
            GraphOptions::unweighted(),
        )
    }

    /// `[(vertex, [(neighbor, weight), ...]), ...]`.
    pub fn from_weighted<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, Weight)>,
    {
        Self::with_options(AdjacencyInput::weighted(adjacency), GraphOptions::weighted())
    }

    /// The mode resolved at construction.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of adjacency entries, i.e. twice the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Fresh pass over the vertices in storage order.
    pub fn iter(&self) -> Vertices<'_, V> {
        Vertices {
            inner: self.adjacency.keys(),
        }
    }

    /// Every adjacency entry as a directed edge, sorted.
    ///
    /// Each undirected edge appears twice, once from each endpoint.
    pub fn edges(&self) -> Vec<Edge<V>> {
        let mut out: Vec<Edge<V>> = self
            .adjacency
            .iter()
            .flat_map(|(start, list)| {
                list.iter().map(move |n| Edge {
                    start: start.clone(),
                    end: n.vertex.clone(),
                    weight: n.weight,
                })
            })
            .collect();
        out.sort();
        out
    }

    /// Same as [`Graph::edges`] without weights.
    pub fn edge_pairs(&self) -> Vec<(V, V)> {
        let mut out: Vec<(V, V)> = self
            .adjacency
            .iter()
            .flat_map(|(start, list)| list.iter().map(move |n| (start.clone(), n.vertex.clone())))
            .collect();
        out.sort();
        out
    }

    pub fn degree(&self, v: &V) -> Result<usize> {
        self.neighbors(v).map(<[Neighbor<V>]>::len)
    }

    /// Neighbor identifiers of `v` in storage order.
    pub fn adjacent(&self, v: &V) -> Result<Vec<V>> {
        Ok(self
            .neighbors(v)?
            .iter()
            .map(|n| n.vertex.clone())
            .collect())
    }

    pub fn neighbors(&self, v: &V) -> Result<&[Neighbor<V>]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::vertex_not_found(v))
    }

    /// The entry for `v` inside `u`'s list. `None` if either is missing.
    pub fn find_edge(&self, u: &V, v: &V) -> Option<&Neighbor<V>> {
        self.adjacency.get(u)?.iter().find(|n| n.vertex == *v)
    }

    pub fn add_vertex(&mut self, v: V) {
        if self.adjacency.contains_key(&v) {
            return;
        }
        tracing::debug!(vertex = %v, "vertex added");
        self.adjacency.insert(v, Vec::new());
    }

    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Removes `v` and every entry pointing at it.
    pub fn delete_vertex(&mut self, v: &V) -> Result<()> {
        if !self.adjacency.contains_key(v) {
            return Err(Error::vertex_not_found(v));
        }
        for list in self.adjacency.values_mut() {
            list.retain(|n| n.vertex != *v);
        }
        self.adjacency.shift_remove(v);
        tracing::debug!(vertex = %v, "vertex deleted");
        Ok(())
    }

    /// Stops at the first missing vertex; earlier deletions stay applied.
    pub fn delete_vertices<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        for v in vertices {
            self.delete_vertex(&v)?;
        }
        Ok(())
    }

    /// Links `u` and `v`, creating either endpoint if needed.
    ///
    /// An existing link keeps its weight. Self-loops are not stored; `u` is still created.
    /// Any weight is accepted, but [`Graph::adjacency_matrix`] writes `0` for a missing edge,
    /// so an edge of weight `0` does not survive a matrix round trip.
    pub fn add_edge(&mut self, u: V, v: V, weight: Weight) {
        self.add_vertex(u.clone());
        if u == v {
            tracing::debug!(vertex = %u, "self-loop ignored");
            return;
        }
        self.add_vertex(v.clone());

        if self.find_edge(&u, &v).is_none() {
            if let Some(list) = self.adjacency.get_mut(&u) {
                list.push(Neighbor {
                    vertex: v.clone(),
                    weight,
                });
            }
        }
        if self.find_edge(&v, &u).is_none() {
            if let Some(list) = self.adjacency.get_mut(&v) {
                list.push(Neighbor { vertex: u, weight });
            }
        }
    }

    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V, Weight)>,
    {
        for (u, v, weight) in edges {
            self.add_edge(u, v, weight);
        }
    }

    /// Unlinks `u` and `v`. Missing vertices or a missing link are ignored.
    pub fn delete_edge(&mut self, u: &V, v: &V) {
        if !(self.adjacency.contains_key(u) && self.adjacency.contains_key(v)) {
            return;
        }
        if let Some(list) = self.adjacency.get_mut(u) {
            list.retain(|n| n.vertex != *v);
        }
        if let Some(list) = self.adjacency.get_mut(v) {
            list.retain(|n| n.vertex != *u);
        }
    }

    pub fn delete_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (u, v) in edges {
            self.delete_edge(&u, &v);
        }
    }

    /// The stored adjacency.
    pub fn weighted_view(&self) -> &Adjacency<V, Neighbor<V>> {
        &self.adjacency
    }

    /// The adjacency with weights stripped.
    pub fn unweighted_view(&self) -> Adjacency<V, V> {
        self.adjacency
            .iter()
            .map(|(v, list)| (v.clone(), list.iter().map(|n| n.vertex.clone()).collect()))
            .collect()
    }
}

impl<V: Vertex> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph with {} vertices and {} edges",
            self.vertex_count(),
            self.edge_count()
        )
    }
}

impl<V: Serialize> Serialize for Graph<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

/// Vertices in storage order; see [`Graph::iter`].
#[derive(Debug, Clone)]
pub struct Vertices<'a, V> {
    inner: indexmap::map::Keys<'a, V, Vec<Neighbor<V>>>,
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}

impl<'a, V: Vertex> IntoIterator for &'a Graph<V> {
    type Item = &'a V;
    type IntoIter = Vertices<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
