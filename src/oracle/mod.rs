//! Two-terminal minimum cut oracles.
//!
//! A [`CutOracle`] answers one question: given two distinct nodes `s` and `t` of the
//! *original* graph, which node set `S` with `s ∈ S`, `t ∉ S` minimises the weight
//! crossing from `S` to the rest of the graph? Tree construction only depends on that
//! contract, so the exhaustive reference search and the flow-based search are
//! interchangeable behind it.

pub mod edmonds_karp;
pub mod exhaustive;

pub use self::edmonds_karp::EdmondsKarpOracle;
pub use self::exhaustive::ExhaustiveOracle;

use crate::graph::{CutValue, NodeId, WeightGraph};
use crate::mincut_error::{GomoryHuError, Result};

/// Strategy for computing a global minimum `s`-`t` cut.
pub trait CutOracle {
    /// Minimum cut separating `s` from `t` over the whole graph.
    ///
    /// Fails if `s == t` or either index is out of range.
    fn min_cut(&self, graph: &WeightGraph, s: NodeId, t: NodeId) -> Result<CutResult>;

    /// Short name used in log output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<O: CutOracle + ?Sized> CutOracle for &O {
    fn min_cut(&self, graph: &WeightGraph, s: NodeId, t: NodeId) -> Result<CutResult> {
        (**self).min_cut(graph, s, t)
    }
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<O: CutOracle + ?Sized> CutOracle for Box<O> {
    fn min_cut(&self, graph: &WeightGraph, s: NodeId, t: NodeId) -> Result<CutResult> {
        (**self).min_cut(graph, s, t)
    }
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Built-in oracle selection used by [`GomoryHuConfig`](crate::tree::GomoryHuConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OracleKind {
    /// Exhaustive subset enumeration, `O(2^n)`.
    #[default]
    Exhaustive,
    /// Edmonds-Karp maximum flow on the dense residual matrix.
    EdmondsKarp,
}

/// Fails unless `s` and `t` are distinct nodes of `graph`.
pub fn check_terminals(graph: &WeightGraph, s: NodeId, t: NodeId) -> Result<()> {
    graph.check_node(s)?;
    graph.check_node(t)?;
    if s == t {
        return Err(GomoryHuError::SameTerminals(s));
    }
    Ok(())
}

/// A two-sided partition of every node of the graph together with its cut value.
///
/// The source side always holds `s` and never `t`, and is stored with `s` first
/// followed by the remaining members in ascending order. The sink side is the
/// complement, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutResult {
    source: NodeId,
    sink: NodeId,
    source_side: Vec<NodeId>,
    in_source: Vec<bool>,
    value: CutValue,
}

impl CutResult {
    /// Build a cut from its source side, computing the value from `graph`.
    pub fn from_source_side(
        graph: &WeightGraph,
        source: NodeId,
        sink: NodeId,
        source_side: &[NodeId],
    ) -> Result<Self> {
        check_terminals(graph, source, sink)?;
        let in_source = graph.mask_of(source_side)?;
        if !in_source[source] || in_source[sink] {
            return Err(GomoryHuError::InvariantViolation(format!(
                "cut side must contain source {source} and exclude sink {sink}"
            )));
        }
        let rest = (0..graph.node_count()).filter(|&v| in_source[v] && v != source);
        let source_side: Vec<NodeId> = std::iter::once(source).chain(rest).collect();
        let value = graph.cut_value(&in_source);
        Ok(Self {
            source,
            sink,
            source_side,
            in_source,
            value,
        })
    }

    /// The `s` terminal.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The `t` terminal.
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// Weight crossing the cut.
    pub fn value(&self) -> CutValue {
        self.value
    }

    /// Number of nodes in the whole graph.
    pub fn node_count(&self) -> usize {
        self.in_source.len()
    }

    /// Members of `S`: `s` first, then ascending.
    pub fn source_side(&self) -> &[NodeId] {
        &self.source_side
    }

    /// Members of the complement of `S`, ascending.
    pub fn sink_side(&self) -> Vec<NodeId> {
        (0..self.node_count())
            .filter(|&v| !self.in_source[v])
            .collect()
    }

    /// Whether `v` lies on the source side. Out-of-range nodes are on neither side.
    pub fn is_source_side(&self, v: NodeId) -> bool {
        self.in_source.get(v).copied().unwrap_or(false)
    }

    /// Membership mask of the source side over all nodes.
    pub fn source_mask(&self) -> &[bool] {
        &self.in_source
    }

    /// `|S| = n - 1`: the cut isolates the sink, so its canonical form is `{t}`
    /// against everything else.
    pub fn isolates_sink(&self) -> bool {
        self.source_side.len() + 1 == self.node_count()
    }
}
