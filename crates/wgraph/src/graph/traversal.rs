//! Lazy traversals and simple-path enumeration.
//!
//! Every iterator borrows the graph and owns its frontier, so a fresh call starts a fresh
//! pass and dropping the iterator stops the search. Neighbors are expanded in adjacency-list
//! order, which makes every sequence deterministic.

use super::{Graph, Neighbor};
use crate::{Error, FxHashSet, Result, Vertex};
use std::collections::VecDeque;

/// Storage for the vertices still to be expanded. The container decides the order:
/// `Vec` pops last-in (depth-first), `VecDeque` pops first-in (breadth-first).
pub trait Frontier<T>: Default {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
}

impl<T> Frontier<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

impl<T> Frontier<T> for VecDeque<T> {
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
}

fn neighbors_of<'a, V: Vertex>(graph: &'a Graph<V>, v: &V) -> &'a [Neighbor<V>] {
    graph
        .adjacency
        .get(v)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Stack-based depth-first traversal, see [`Graph::depth_first`].
#[derive(Debug, Clone)]
pub struct DepthFirst<'a, V> {
    graph: &'a Graph<V>,
    stack: Vec<&'a V>,
    visited: FxHashSet<&'a V>,
}

impl<'a, V: Vertex> Iterator for DepthFirst<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.stack.pop() {
            let first_visit = self.visited.insert(v);
            // Pushed in reverse so the first listed neighbor is expanded first. A popped vertex
            // that was already visited still pushes its unvisited neighbors.
            let visited = &self.visited;
            self.stack.extend(
                neighbors_of(self.graph, v)
                    .iter()
                    .rev()
                    .map(|n| &n.vertex)
                    .filter(|n| !visited.contains(n)),
            );
            if first_visit {
                tracing::trace!(vertex = %v, "depth-first visit");
                return Some(v);
            }
        }
        None
    }
}

/// Queue-based breadth-first traversal, see [`Graph::breadth_first`].
#[derive(Debug, Clone)]
pub struct BreadthFirst<'a, V> {
    graph: &'a Graph<V>,
    queue: VecDeque<&'a V>,
    visited: FxHashSet<&'a V>,
}

impl<'a, V: Vertex> Iterator for BreadthFirst<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.queue.pop_front() {
            if !self.visited.insert(v) {
                continue;
            }
            let visited = &self.visited;
            self.queue.extend(
                neighbors_of(self.graph, v)
                    .iter()
                    .map(|n| &n.vertex)
                    .filter(|n| !visited.contains(n)),
            );
            tracing::trace!(vertex = %v, "breadth-first visit");
            return Some(v);
        }
        None
    }
}

/// Simple paths from `start` to `finish`; the frontier type fixes the exploration order.
#[derive(Debug, Clone)]
pub struct PathSearch<'a, V, F> {
    graph: &'a Graph<V>,
    finish: V,
    frontier: F,
    found: VecDeque<Vec<V>>,
}

/// Depth-first path enumeration, see [`Graph::dfs_paths`].
pub type DfsPaths<'a, V> = PathSearch<'a, V, Vec<Vec<&'a V>>>;

/// Breadth-first path enumeration, see [`Graph::bfs_paths`].
pub type BfsPaths<'a, V> = PathSearch<'a, V, VecDeque<Vec<&'a V>>>;

impl<'a, V, F> PathSearch<'a, V, F>
where
    V: Vertex,
    F: Frontier<Vec<&'a V>>,
{
    fn new(graph: &'a Graph<V>, start: &'a V, finish: &V) -> Self {
        let mut frontier = F::default();
        frontier.push(vec![start]);
        Self {
            graph,
            finish: finish.clone(),
            frontier,
            found: VecDeque::new(),
        }
    }
}

impl<'a, V, F> Iterator for PathSearch<'a, V, F>
where
    V: Vertex,
    F: Frontier<Vec<&'a V>>,
{
    type Item = Vec<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(path) = self.found.pop_front() {
                return Some(path);
            }
            let path = self.frontier.pop()?;
            let Some(&tail) = path.last() else {
                continue;
            };
            for n in neighbors_of(self.graph, tail) {
                let next = &n.vertex;
                if path.contains(&next) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(next);
                if *next == self.finish {
                    self.found
                        .push_back(extended.into_iter().cloned().collect());
                } else {
                    self.frontier.push(extended);
                }
            }
        }
    }
}

impl<V: Vertex> Graph<V> {
    fn stored_vertex(&self, v: &V) -> Result<&V> {
        self.adjacency
            .get_key_value(v)
            .map(|(k, _)| k)
            .ok_or_else(|| Error::vertex_not_found(v))
    }

    /// Vertices reachable from `start`, depth-first, each yielded once.
    pub fn depth_first(&self, start: &V) -> Result<DepthFirst<'_, V>> {
        let start = self.stored_vertex(start)?;
        Ok(DepthFirst {
            graph: self,
            stack: vec![start],
            visited: FxHashSet::default(),
        })
    }

    /// Vertices reachable from `start`, breadth-first, each yielded once.
    pub fn breadth_first(&self, start: &V) -> Result<BreadthFirst<'_, V>> {
        let start = self.stored_vertex(start)?;
        Ok(BreadthFirst {
            graph: self,
            queue: VecDeque::from([start]),
            visited: FxHashSet::default(),
        })
    }

    /// All simple paths from `start` to `finish` (both included), in no particular length
    /// order. An absent `finish` yields nothing.
    pub fn dfs_paths(&self, start: &V, finish: &V) -> Result<DfsPaths<'_, V>> {
        let start = self.stored_vertex(start)?;
        Ok(PathSearch::new(self, start, finish))
    }

    /// All simple paths from `start` to `finish`, shorter paths first.
    pub fn bfs_paths(&self, start: &V, finish: &V) -> Result<BfsPaths<'_, V>> {
        let start = self.stored_vertex(start)?;
        Ok(PathSearch::new(self, start, finish))
    }

    /// The first breadth-first path: fewest hops, not least total weight. `None` when
    /// `finish` is unreachable (or equals `start`).
    pub fn shortest_path(&self, start: &V, finish: &V) -> Result<Option<Vec<V>>> {
        let path = self.bfs_paths(start, finish)?.next();
        if path.is_none() {
            tracing::debug!(start = %start, finish = %finish, "no path");
        }
        Ok(path)
    }
}
