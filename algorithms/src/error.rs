use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgoError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("vertex {vertex} is out of range for a graph with {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },
    #[error("rank {rank} is out of range 1..={len}")]
    RankOutOfRange { rank: usize, len: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
}
