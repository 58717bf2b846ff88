pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("Adjacency matrix has {requested} vertices but only {capacity} labels are available")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("Malformed adjacency matrix (line {line}): {message}")]
    MalformedInput { line: usize, message: String },
}

impl Error {
    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Display) -> Self {
        Self::VertexNotFound {
            vertex: vertex.to_string(),
        }
    }

    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }
}
