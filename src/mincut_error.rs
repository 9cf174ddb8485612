//! GomoryHuError: Unified error type for gomory-hu public APIs
//!
//! Every fallible operation in the crate (graph construction, cut queries,
//! cluster splitting, tree extraction) reports through this one enum so callers
//! can match on a single type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GomoryHuError>;

/// Unified error type for minimum-cut tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GomoryHuError {
    /// The weight matrix has no rows.
    #[error("Graph must contain at least one node")]
    EmptyGraph,
    /// A row of the weight matrix has the wrong length.
    #[error("Weight matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A weight entry is negative.
    #[error("Negative weight {weight} between nodes {u} and {v}")]
    NegativeWeight { u: usize, v: usize, weight: i64 },
    /// A node has a self-loop weight.
    #[error("Diagonal entry for node {node} must be zero, found {weight}")]
    NonZeroDiagonal { node: usize, weight: i64 },
    /// `weight[u][v] != weight[v][u]`.
    #[error("Weight matrix is not symmetric: w({u},{v}) = {forward} but w({v},{u}) = {backward}")]
    Asymmetric {
        u: usize,
        v: usize,
        forward: i64,
        backward: i64,
    },
    /// The sum of all edge weights does not fit the cut accumulator.
    #[error("Total edge weight overflows the 64-bit cut accumulator")]
    WeightOverflow,
    /// Text input could not be read as a weight matrix.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// A two-terminal query named the same node twice.
    #[error("Terminals must be distinct, both were node {0}")]
    SameTerminals(usize),
    /// A node index outside `[0, n)`.
    #[error("Node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },
    /// The exhaustive oracle was asked to enumerate a graph that is too large.
    #[error(
        "Exhaustive cut search over {nodes} nodes exceeds the limit of {limit}; use the Edmonds-Karp oracle for larger graphs"
    )]
    ExhaustiveLimitExceeded { nodes: usize, limit: usize },
    /// A split was requested that cannot be applied to the given cluster.
    #[error("Cluster {cluster} cannot be split: {reason}")]
    ClusterNotSplittable { cluster: usize, reason: &'static str },
    /// The forest still has clusters with two or more members.
    #[error("Partition is not fully refined: {clusters} clusters still have multiple members")]
    Incomplete { clusters: usize },
    /// A structural invariant of the partition forest does not hold.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
