//! Iterative cluster splitting.
//!
//! [`TreeBuilder`] is a two-state machine. While some cluster has two or more
//! members it is *refining*: each step selects a cluster, queries the oracle for a
//! global minimum cut between the cluster's representatives, and hands the cut to
//! the [`PartitionForest`] to split the cluster and rewire its edges. Once every
//! cluster is a singleton it is *done* and the forest is the tree.
//!
//! Selection policy: among clusters with at least two members, the smallest wins;
//! on ties, the *last* one in collection order wins. Representatives are the first
//! and last members added to the cluster. Both choices depend on the order earlier
//! splits produced, so tree topology can vary with the oracle and the input while
//! the pairwise minimum cut values cannot.

use crate::debug_invariants::DebugInvariants;
use crate::graph::{NodeId, WeightGraph};
use crate::mincut_error::{GomoryHuError, Result};
use crate::oracle::{CutOracle, CutResult, ExhaustiveOracle};
use crate::tree::cut_tree::GomoryHuTree;
use crate::tree::forest::{Cluster, ClusterId, Orientation, PartitionForest};

/// Whether any cluster is left to split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Refining,
    Done,
}

/// Everything one split step did, for inspection and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRecord {
    /// Zero-based step index; equals the index of the edge it created.
    pub step: usize,
    /// Members of the split cluster, in insertion order.
    pub members: Vec<NodeId>,
    pub source: NodeId,
    pub sink: NodeId,
    /// The global cut returned by the oracle.
    pub cut: CutResult,
    /// Members of the first child.
    pub a: Vec<NodeId>,
    /// Members of the second child.
    pub b: Vec<NodeId>,
    pub orientation: Orientation,
}

/// Drives the refinement of a [`PartitionForest`] over one graph.
#[derive(Debug)]
pub struct TreeBuilder<'g, O = ExhaustiveOracle> {
    graph: &'g WeightGraph,
    oracle: O,
    forest: PartitionForest,
    validate_each_split: bool,
    oracle_calls: usize,
}

impl<'g> TreeBuilder<'g, ExhaustiveOracle> {
    /// Builder using the exhaustive reference oracle.
    ///
    /// The exhaustive oracle refuses graphs above
    /// [`DEFAULT_NODE_LIMIT`](crate::oracle::exhaustive::DEFAULT_NODE_LIMIT) nodes, so
    /// [`run`](Self::run) fails with [`GomoryHuError::ExhaustiveLimitExceeded`] on them.
    /// Use [`with_oracle`](Self::with_oracle) and
    /// [`EdmondsKarpOracle`](crate::oracle::EdmondsKarpOracle) for larger graphs.
    pub fn new(graph: &'g WeightGraph) -> Self {
        Self::with_oracle(graph, ExhaustiveOracle::default())
    }
}

impl<'g, O: CutOracle> TreeBuilder<'g, O> {
    /// Builder using any cut oracle.
    pub fn with_oracle(graph: &'g WeightGraph, oracle: O) -> Self {
        Self {
            graph,
            oracle,
            forest: PartitionForest::whole(graph.node_count()),
            validate_each_split: false,
            oracle_calls: 0,
        }
    }

    /// Check the forest invariants after every split and fail on a violation.
    pub fn validate_each_split(mut self, enabled: bool) -> Self {
        self.validate_each_split = enabled;
        self
    }

    pub fn state(&self) -> BuildState {
        if self.forest.is_refined() {
            BuildState::Done
        } else {
            BuildState::Refining
        }
    }

    pub fn forest(&self) -> &PartitionForest {
        &self.forest
    }

    /// Number of oracle queries issued so far.
    pub fn oracle_calls(&self) -> usize {
        self.oracle_calls
    }

    /// The cluster the next step will split, or `None` when done.
    pub fn select_cluster(&self) -> Option<ClusterId> {
        let mut best: Option<&Cluster> = None;
        for cluster in self.forest.clusters().filter(|c| c.len() >= 2) {
            if best.is_none_or(|b| cluster.len() <= b.len()) {
                best = Some(cluster);
            }
        }
        best.map(Cluster::id)
    }

    /// Perform one split. Returns `None` once the builder is done.
    pub fn step(&mut self) -> Result<Option<SplitRecord>> {
        let Some(id) = self.select_cluster() else {
            return Ok(None);
        };
        let cluster = self
            .forest
            .cluster(id)
            .ok_or(GomoryHuError::ClusterNotSplittable {
                cluster: id.index(),
                reason: "cluster is not live",
            })?;
        let members = cluster.members().to_vec();
        let (source, sink) = cluster
            .representatives()
            .ok_or(GomoryHuError::ClusterNotSplittable {
                cluster: id.index(),
                reason: "singleton clusters are terminal",
            })?;

        let cut = self.oracle.min_cut(self.graph, source, sink)?;
        self.oracle_calls += 1;
        let outcome = self.forest.split(id, &cut)?;

        crate::debug_invariants!(self.forest.validate_invariants(), "forest after split");
        if self.validate_each_split {
            self.forest.validate_invariants()?;
        }

        let child = |c| {
            self.forest
                .cluster(c)
                .map(|c| c.members().to_vec())
                .unwrap_or_default()
        };
        let record = SplitRecord {
            step: outcome.edge,
            members,
            source,
            sink,
            a: child(outcome.a),
            b: child(outcome.b),
            orientation: outcome.orientation,
            cut,
        };
        log::debug!(
            "step {}: split {id} (|C|={}) with {} s={source} t={sink}: value {}, |a|={} |b|={}, {} edges rewired",
            record.step,
            record.members.len(),
            self.oracle.name(),
            record.cut.value(),
            record.a.len(),
            record.b.len(),
            outcome.rewired.len()
        );
        Ok(Some(record))
    }

    /// Refine until done and return the tree.
    pub fn run(self) -> Result<GomoryHuTree> {
        self.run_traced().map(|(tree, _)| tree)
    }

    /// Refine until done and return the tree along with one record per split.
    pub fn run_traced(mut self) -> Result<(GomoryHuTree, Vec<SplitRecord>)> {
        let mut trace = Vec::with_capacity(self.graph.node_count().saturating_sub(1));
        while let Some(record) = self.step()? {
            trace.push(record);
        }
        let tree = GomoryHuTree::from_forest(&self.forest)?;
        log::info!(
            "minimum-cut tree complete: {} nodes, {} oracle calls ({})",
            tree.node_count(),
            self.oracle_calls,
            self.oracle.name()
        );
        Ok((tree, trace))
    }
}
