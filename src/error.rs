use thiserror::Error;

pub type Result<T> = std::result::Result<T, MaxCutError>;

/// Errors surfaced at the boundaries of the graph store, the loader and the algorithms.
#[derive(Error, Debug)]
pub enum MaxCutError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("expected {expected} edges, found {actual}")]
    EdgeCountMismatch { expected: usize, actual: usize },

    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: u32 },

    #[error("negative weight {weight} on edge ({src}, {dst})")]
    NegativeWeight { src: u32, dst: u32, weight: i64 },

    #[error("weight {weight} on edge ({src}, {dst}) does not fit into 32 bits")]
    WeightOverflow { src: u32, dst: u32, weight: i64 },

    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: u32, vertex_count: usize },

    #[error("duplicate edge ({src}, {dst})")]
    DuplicateEdge { src: u32, dst: u32 },

    /// The RCL bias must lie in `[0, 1]`.
    #[error("alpha must be within [0, 1], got {0}")]
    InvalidAlpha(f64),

    #[error("runs must be at least 1")]
    InvalidRuns,

    #[error("iterations must be at least 1")]
    InvalidIterations,

    #[error("partition covers {actual} vertices, graph has {expected}")]
    PartitionSizeMismatch { expected: usize, actual: usize },
}
