//! Adjacency-matrix import/export.
//!
//! Text form: one row per line, cells separated by whitespace, `0` for "no edge". Row `i`
//! belongs to the `i`-th vertex; imported vertices are labelled `A`, `B`, `C`, ...

use crate::graph::DEFAULT_WEIGHT;
use crate::{Error, Graph, GraphOptions, Result, Weight};

pub type AdjacencyMatrix = Vec<Vec<Weight>>;

/// Number of single-letter labels available for matrix import.
pub const LABEL_CAPACITY: usize = 26;

/// `A`, `B`, ... for `n` rows.
pub fn matrix_labels(n: usize) -> Result<Vec<String>> {
    if n > LABEL_CAPACITY {
        return Err(Error::CapacityExceeded {
            requested: n,
            capacity: LABEL_CAPACITY,
        });
    }
    Ok((b'A'..=b'Z')
        .take(n)
        .map(|c| char::from(c).to_string())
        .collect())
}

/// Builds a weighted graph from a square matrix of non-negative weights.
///
/// Cell `[i][j] != 0` links `label(i)` and `label(j)` with that weight. The first nonzero
/// cell seen for a pair (row-major) decides the weight, so an asymmetric matrix still yields
/// a symmetric graph. Diagonal cells are ignored.
pub fn from_adjacency_matrix(matrix: &[Vec<Weight>]) -> Result<Graph<String>> {
    from_adjacency_matrix_with_options(matrix, GraphOptions::detect())
}

/// [`from_adjacency_matrix`] with an explicit mode. A matrix always carries weights, so
/// `weighted: None` means weighted; in unweighted mode every nonzero cell becomes
/// [`DEFAULT_WEIGHT`].
pub fn from_adjacency_matrix_with_options(
    matrix: &[Vec<Weight>],
    options: GraphOptions,
) -> Result<Graph<String>> {
    let labels = matrix_labels(matrix.len())?;
    validate(matrix)?;

    let weighted = options.weighted.unwrap_or(true);
    let mut g = Graph::with_mode(weighted);
    g.add_vertices(labels.iter().cloned());
    for (i, row) in matrix.iter().enumerate() {
        for (j, &weight) in row.iter().enumerate() {
            if weight != 0 {
                let weight = if weighted { weight } else { DEFAULT_WEIGHT };
                g.add_edge(labels[i].clone(), labels[j].clone(), weight);
            }
        }
    }

    tracing::debug!(
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        weighted,
        "graph imported from adjacency matrix"
    );
    Ok(g)
}

impl Graph<String> {
    /// See [`from_adjacency_matrix`].
    pub fn from_adjacency_matrix(matrix: &[Vec<Weight>]) -> Result<Self> {
        from_adjacency_matrix(matrix)
    }
}

fn validate(matrix: &[Vec<Weight>]) -> Result<()> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(Error::malformed(
                i + 1,
                format!("expected {n} cells, found {}", row.len()),
            ));
        }
        if let Some(w) = row.iter().find(|w| **w < 0) {
            return Err(Error::malformed(i + 1, format!("negative weight {w}")));
        }
    }
    Ok(())
}

/// Parses the text form. Blank lines are skipped; line numbers in errors are 1-based and
/// count blank lines too.
pub fn parse_matrix(text: &str) -> Result<AdjacencyMatrix> {
    let mut rows: Vec<(usize, Vec<Weight>)> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                let weight = token
                    .parse::<Weight>()
                    .map_err(|_| Error::malformed(line_no, format!("invalid cell `{token}`")))?;
                if weight < 0 {
                    return Err(Error::malformed(
                        line_no,
                        format!("negative weight {weight}"),
                    ));
                }
                Ok(weight)
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push((line_no, row));
    }

    let n = rows.len();
    for (line_no, row) in &rows {
        if row.len() != n {
            return Err(Error::malformed(
                *line_no,
                format!("expected {n} cells, found {}", row.len()),
            ));
        }
    }
    Ok(rows.into_iter().map(|(_, row)| row).collect())
}

/// Text form of `matrix`, newline-terminated rows.
pub fn format_matrix(matrix: &[Vec<Weight>]) -> String {
    let mut out = String::new();
    for row in matrix {
        let cells: Vec<String> = row.iter().map(Weight::to_string).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
