//! Caller-supplied adjacency and construction options.

use crate::{Adjacency, Weight};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Adjacency handed to [`crate::Graph::new`].
///
/// Deserializes from either shape without a tag:
/// `{"A": ["B", "C"]}` is unweighted, `{"A": [["B", 3], ["C", 1]]}` is weighted.
/// An empty mapping (or one whose lists are all empty) is read as unweighted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
#[serde(bound(deserialize = "V: Deserialize<'de> + Eq + Hash"))]
pub enum AdjacencyInput<V> {
    Unweighted(Adjacency<V, V>),
    Weighted(Adjacency<V, (V, Weight)>),
}

impl<V> AdjacencyInput<V>
where
    V: Eq + Hash,
{
    pub fn unweighted<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        Self::Unweighted(
            adjacency
                .into_iter()
                .map(|(v, neighbors)| (v, neighbors.into_iter().collect()))
                .collect(),
        )
    }

    pub fn weighted<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, Weight)>,
    {
        Self::Weighted(
            adjacency
                .into_iter()
                .map(|(v, neighbors)| (v, neighbors.into_iter().collect()))
                .collect(),
        )
    }

    /// The shape detected for this input.
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::Weighted(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Unweighted(m) => m.len(),
            Self::Weighted(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens into `(vertex, [(neighbor, weight)])` entries, weight `1` for unweighted input.
    pub(crate) fn into_entries(self) -> Vec<(V, Vec<(V, Weight)>)> {
        match self {
            Self::Unweighted(m) => m
                .into_iter()
                .map(|(v, neighbors)| (v, neighbors.into_iter().map(|n| (n, 1)).collect()))
                .collect(),
            Self::Weighted(m) => m.into_iter().collect(),
        }
    }
}

impl<V> Default for AdjacencyInput<V> {
    fn default() -> Self {
        Self::Unweighted(Adjacency::default())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// `None` infers the mode from the input shape.
    pub weighted: Option<bool>,
}

impl GraphOptions {
    /// Weighted iff the input is pair-shaped.
    pub fn detect() -> Self {
        Self { weighted: None }
    }

    /// Keep the weights supplied by the caller.
    pub fn weighted() -> Self {
        Self {
            weighted: Some(true),
        }
    }

    /// Every edge gets weight `1`, whatever the input says.
    pub fn unweighted() -> Self {
        Self {
            weighted: Some(false),
        }
    }

    pub(crate) fn resolve<V: Eq + Hash>(self, input: &AdjacencyInput<V>) -> bool {
        self.weighted.unwrap_or_else(|| input.is_weighted())
    }
}
