//! Whole-graph structural queries.

use super::Graph;
use crate::matrix::AdjacencyMatrix;
use crate::{Adjacency, FxHashSet, Vertex};
use indexmap::IndexMap;
use std::hash::BuildHasher;

impl<V: Vertex> Graph<V> {
    /// `n x n` weights in [`Graph::vertices`] order, `0` where there is no edge.
    ///
    /// A stored edge of weight `0` is indistinguishable from a missing one here.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        self.adjacency
            .keys()
            .map(|u| {
                self.adjacency
                    .keys()
                    .map(|v| self.find_edge(u, v).map_or(0, |n| n.weight))
                    .collect()
            })
            .collect()
    }

    /// For every vertex, the other vertices it is not linked to (weights dropped).
    pub fn complement(&self) -> Adjacency<V, V> {
        self.adjacency
            .iter()
            .map(|(v, list)| {
                let linked: FxHashSet<&V> = list.iter().map(|n| &n.vertex).collect();
                let missing: Vec<V> = self
                    .adjacency
                    .keys()
                    .filter(|u| *u != v && !linked.contains(u))
                    .cloned()
                    .collect();
                (v.clone(), missing)
            })
            .collect()
    }

    /// Whether `candidate` lists, for every vertex of this graph, exactly the vertices that
    /// are not linked to it here. Order within the lists does not matter; vertices that only
    /// exist in `candidate` are ignored.
    pub fn is_complement_of<S: BuildHasher>(&self, candidate: &IndexMap<V, Vec<V>, S>) -> bool {
        self.complement_matches(|v| candidate.get(v).map(|list| list.iter().collect()))
    }

    /// Whether every edge of `candidate` is also an edge here, ignoring weights.
    pub fn is_subgraph(&self, candidate: &Graph<V>) -> bool {
        let own: FxHashSet<(&V, &V)> = self
            .adjacency
            .iter()
            .flat_map(|(u, list)| list.iter().map(move |n| (u, &n.vertex)))
            .collect();
        candidate
            .adjacency
            .iter()
            .all(|(u, list)| list.iter().all(|n| own.contains(&(u, &n.vertex))))
    }

    /// Label-aligned check: for every vertex here, `candidate`'s neighbors of the vertex with
    /// the same label must be exactly the vertices not linked to it here.
    ///
    /// This is not a general isomorphism test. No relabelling is searched; it only holds
    /// when `candidate` is, label for label, the complement of this graph.
    pub fn is_isomorphic(&self, candidate: &Graph<V>) -> bool {
        self.complement_matches(|v| {
            candidate
                .adjacency
                .get(v)
                .map(|list| list.iter().map(|n| &n.vertex).collect())
        })
    }

    fn complement_matches<'c, F>(&self, mut lookup: F) -> bool
    where
        F: FnMut(&V) -> Option<FxHashSet<&'c V>>,
        V: 'c,
    {
        for (v, list) in &self.adjacency {
            let Some(actual) = lookup(v) else {
                return false;
            };
            let linked: FxHashSet<&V> = list.iter().map(|n| &n.vertex).collect();
            let expected: FxHashSet<&V> = self
                .adjacency
                .keys()
                .filter(|u| *u != v && !linked.contains(u))
                .collect();
            if expected.len() != actual.len() || !expected.iter().all(|u| actual.contains(*u)) {
                return false;
            }
        }
        true
    }
}
