//! Entry-point for minimum-cut tree construction.
//!
//! [`gomory_hu_tree`] builds the tree for a validated [`WeightGraph`] with the oracle
//! named in a [`GomoryHuConfig`]. For a custom oracle, or to watch the refinement step
//! by step, use [`TreeBuilder`] directly.

pub mod builder;
pub mod cut_tree;
pub mod disjoint_set;
pub mod forest;

#[cfg(test)]
mod tests;

pub use self::builder::{BuildState, SplitRecord, TreeBuilder};
pub use self::cut_tree::{CutTreeEdge, GomoryHuTree, ParentArray, node_label};
pub use self::forest::{Cluster, ClusterId, Orientation, PartitionForest, SplitOutcome, TreeEdge};

use crate::graph::WeightGraph;
use crate::mincut_error::Result;
use crate::oracle::exhaustive::DEFAULT_NODE_LIMIT;
use crate::oracle::{EdmondsKarpOracle, ExhaustiveOracle, OracleKind};

/// Settings for [`gomory_hu_tree`].
#[derive(Debug, Clone)]
pub struct GomoryHuConfig {
    /// Which cut oracle answers the per-cluster queries.
    pub oracle: OracleKind,
    /// Largest graph the exhaustive oracle accepts.
    pub exhaustive_node_limit: usize,
    /// Check forest invariants after every split and fail on a violation.
    pub validate_each_split: bool,
}

impl Default for GomoryHuConfig {
    fn default() -> Self {
        Self {
            oracle: OracleKind::Exhaustive,
            exhaustive_node_limit: DEFAULT_NODE_LIMIT,
            validate_each_split: false,
        }
    }
}

/// Build the minimum-cut tree of `graph`.
///
/// Every valid graph has a tree, but with [`OracleKind::Exhaustive`] (the default)
/// graphs larger than `cfg.exhaustive_node_limit` fail with
/// [`GomoryHuError::ExhaustiveLimitExceeded`](crate::mincut_error::GomoryHuError::ExhaustiveLimitExceeded).
/// [`OracleKind::EdmondsKarp`] has no size limit.
pub fn gomory_hu_tree(graph: &WeightGraph, cfg: &GomoryHuConfig) -> Result<GomoryHuTree> {
    match cfg.oracle {
        OracleKind::Exhaustive => TreeBuilder::with_oracle(
            graph,
            ExhaustiveOracle::with_node_limit(cfg.exhaustive_node_limit),
        )
        .validate_each_split(cfg.validate_each_split)
        .run(),
        OracleKind::EdmondsKarp => TreeBuilder::with_oracle(graph, EdmondsKarpOracle::new())
            .validate_each_split(cfg.validate_each_split)
            .run(),
    }
}
