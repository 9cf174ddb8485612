#![cfg_attr(docsrs, feature(doc_cfg))]
//! # gomory-hu
//!
//! gomory-hu computes **minimum-cut trees** (Gomory-Hu trees) for undirected graphs with
//! non-negative integer edge weights. The tree has one vertex per graph node and `n - 1`
//! weighted edges; for every pair of nodes, the smallest weight on the tree path between
//! them equals the minimum weighted cut separating them in the graph.
//!
//! ## Features
//! - Validated dense weight matrices ([`graph::WeightGraph`]) with exact `u64` cut values
//! - Pluggable two-terminal cut oracles: exhaustive reference search and Edmonds-Karp max-flow
//! - Cluster-splitting construction over the original graph, no contraction
//! - Tree queries: pairwise minimum cuts, all-pairs matrix, cut sides, rooted parent arrays
//! - Optional Rayon parallelism for the exhaustive oracle (`rayon` feature)
//!
//! ## Determinism
//!
//! Construction is sequential and fully deterministic: cluster selection, representative
//! choice, and oracle tie-breaking depend only on the input matrix. The parallel
//! exhaustive oracle reduces on enumeration position, so enabling `rayon` never changes
//! the result. Different oracles may return different minimum cuts, and therefore
//! different tree shapes, but always the same pairwise cut values.
//!
//! ## Usage
//!
//! ```rust
//! use gomory_hu::prelude::*;
//!
//! let graph = WeightGraph::from_rows(&[[0i64, 5, 3], [5, 0, 4], [3, 4, 0]])?;
//! let tree = gomory_hu_tree(&graph, &GomoryHuConfig::default())?;
//! assert_eq!(tree.edges().len(), 2);
//! assert_eq!(tree.min_cut_value(0, 1)?, 8);
//! assert_eq!(tree.min_cut_value(0, 2)?, 7);
//! # Ok::<(), GomoryHuError>(())
//! ```

pub mod debug_invariants;
pub mod graph;
pub mod mincut_error;
pub mod oracle;
pub mod presets;
pub mod tree;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{CutValue, NodeId, Weight, WeightGraph};
    pub use crate::mincut_error::GomoryHuError;
    pub use crate::oracle::{CutOracle, CutResult, EdmondsKarpOracle, ExhaustiveOracle, OracleKind};
    pub use crate::tree::{
        CutTreeEdge, GomoryHuConfig, GomoryHuTree, ParentArray, PartitionForest, TreeBuilder,
        gomory_hu_tree, node_label,
    };
}
