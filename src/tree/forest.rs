//! The evolving partition of the node set into clusters, plus the tree edges
//! recorded between clusters.
//!
//! Clusters live in an arena and are referred to by stable [`ClusterId`] handles;
//! tree edges name their endpoints by handle. A cluster is retired in the same
//! split step that creates its two children and is never reused.
//!
//! Invariants (checked by [`DebugInvariants::validate_invariants`]):
//! - the live clusters are non-empty, pairwise disjoint, and cover `0..n`;
//! - a live cluster's parent, if any, is retired;
//! - there are exactly `live - 1` edges, each joining two distinct live clusters,
//!   and together they form a spanning tree over the live clusters.

use crate::debug_invariants::DebugInvariants;
use crate::graph::{CutValue, NodeId};
use crate::mincut_error::{GomoryHuError, Result};
use crate::oracle::CutResult;
use crate::tree::disjoint_set::DisjointSet;
use hashbrown::{HashMap, HashSet};
use std::fmt;

/// Stable handle of a cluster in the forest arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(usize);

impl ClusterId {
    /// Arena slot of this cluster.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A group of original nodes currently treated as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    id: ClusterId,
    members: Vec<NodeId>,
    parent: Option<ClusterId>,
    live: bool,
}

impl Cluster {
    pub fn id(&self) -> ClusterId {
        self.id
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Singleton clusters are terminal and never split again.
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }

    /// The cluster this one was split from, `None` for the initial cluster.
    pub fn parent(&self) -> Option<ClusterId> {
        self.parent
    }

    /// False once the cluster has been replaced by its children.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// The first and last members added, used as the terminals of the next split.
    /// `None` for singletons.
    pub fn representatives(&self) -> Option<(NodeId, NodeId)> {
        match self.members.as_slice() {
            [first, .., last] => Some((*first, *last)),
            _ => None,
        }
    }
}

/// An edge of the partial tree, weighted by a previously computed minimum cut.
///
/// `witnesses[i]` is the terminal of the producing cut that was placed in
/// `ends[i]` when the edge was created. Removing the edge from the tree always
/// leaves `witnesses[i]` on the component of `ends[i]`, even after the endpoint
/// has been replaced by one of its descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEdge {
    ends: [ClusterId; 2],
    witnesses: [NodeId; 2],
    weight: CutValue,
    step: usize,
}

impl TreeEdge {
    pub fn ends(&self) -> [ClusterId; 2] {
        self.ends
    }

    pub fn witnesses(&self) -> [NodeId; 2] {
        self.witnesses
    }

    /// Minimum cut value between the two witnesses.
    pub fn weight(&self) -> CutValue {
        self.weight
    }

    /// Index of the split that created this edge.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The endpoint opposite to `cluster`, if `cluster` is an endpoint.
    pub fn other_end(&self, cluster: ClusterId) -> Option<ClusterId> {
        match self.ends {
            [a, b] if a == cluster => Some(b),
            [a, b] if b == cluster => Some(a),
            _ => None,
        }
    }
}

/// Which part of a split cluster becomes the first child `a`.
///
/// Orientation decides the order in which children enter the cluster collection
/// (and therefore later selection tie-breaks) but not which edges they receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `a` is the part on the source side of the cut.
    SourceFirst,
    /// `a` is the part on the sink side of the cut.
    SinkFirst,
}

/// What a single split did to the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    /// The retired cluster.
    pub parent: ClusterId,
    /// First child, appended to the cluster collection before `b`.
    pub a: ClusterId,
    /// Second child.
    pub b: ClusterId,
    pub orientation: Orientation,
    /// Index of the new edge `(a, b)` in [`PartitionForest::edges`].
    pub edge: usize,
    /// Edges whose `parent` endpoint moved, with the child they now attach to.
    pub rewired: Vec<(usize, ClusterId)>,
}

/// Single-writer partition state: cluster arena, live order, and tree edges.
#[derive(Debug, Clone)]
pub struct PartitionForest {
    node_count: usize,
    clusters: Vec<Cluster>,
    order: Vec<ClusterId>,
    owner: Vec<ClusterId>,
    edges: Vec<TreeEdge>,
}

impl PartitionForest {
    /// One cluster holding every node `0..n`, no edges.
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(GomoryHuError::EmptyGraph);
        }
        Ok(Self::whole(node_count))
    }

    /// Initial forest for a graph that is already known to be non-empty.
    pub(crate) fn whole(node_count: usize) -> Self {
        debug_assert!(node_count > 0);
        let root = ClusterId(0);
        Self {
            node_count,
            clusters: vec![Cluster {
                id: root,
                members: (0..node_count).collect(),
                parent: None,
                live: true,
            }],
            order: vec![root],
            owner: vec![root; node_count],
            edges: Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Live clusters in collection order.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> + '_ {
        self.order.iter().map(move |id| &self.clusters[id.0])
    }

    /// Number of live clusters.
    pub fn cluster_count(&self) -> usize {
        self.order.len()
    }

    /// Any cluster ever created, live or retired.
    pub fn cluster(&self, id: ClusterId) -> Option<&Cluster> {
        self.clusters.get(id.0)
    }

    /// The live cluster containing `node`.
    pub fn cluster_of(&self, node: NodeId) -> Option<ClusterId> {
        self.owner.get(node).copied()
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// True once every live cluster is a singleton.
    pub fn is_refined(&self) -> bool {
        self.clusters().all(Cluster::is_singleton)
    }

    /// Number of live clusters that still have two or more members.
    pub fn unrefined_count(&self) -> usize {
        self.clusters().filter(|c| !c.is_singleton()).count()
    }

    fn live(&self, id: ClusterId) -> Result<&Cluster> {
        match self.clusters.get(id.0) {
            Some(cluster) if cluster.live => Ok(cluster),
            _ => Err(GomoryHuError::ClusterNotSplittable {
                cluster: id.0,
                reason: "cluster is not live",
            }),
        }
    }

    /// Orientation rule: the sink-side part becomes `a` when the cut isolates the
    /// sink, or when every sink-side node is the sink itself or already sits in a
    /// singleton cluster. Otherwise the source-side part becomes `a`.
    fn orientation(&self, cut: &CutResult) -> Orientation {
        let sink_settled = cut.sink_side().iter().all(|&v| {
            v == cut.sink() || self.clusters[self.owner[v].0].is_singleton()
        });
        if cut.isolates_sink() || sink_settled {
            Orientation::SinkFirst
        } else {
            Orientation::SourceFirst
        }
    }

    /// Split cluster `id` by a global cut and rewire every edge incident to it.
    ///
    /// The children are `S ∩ C` and `C \ S`, each keeping the order in which its
    /// members appear on their side of the cut. Each edge `(C, D)` is reattached to
    /// the child on the same side of the cut as the edge's `D`-side witness; when
    /// `D` still holds that witness and lies wholly on one side, this is the side
    /// containing `D`. A cut may straddle `D`; the witness keeps the choice
    /// consistent with an uncrossed minimum cut of equal value. Finally `C` is
    /// retired, `a` then `b` are appended to the collection, and the edge
    /// `(a, b, cut.value())` is recorded.
    pub fn split(&mut self, id: ClusterId, cut: &CutResult) -> Result<SplitOutcome> {
        let cluster = self.live(id)?;
        if cluster.len() < 2 {
            return Err(GomoryHuError::ClusterNotSplittable {
                cluster: id.0,
                reason: "singleton clusters are terminal",
            });
        }
        if cut.node_count() != self.node_count {
            return Err(GomoryHuError::InvariantViolation(format!(
                "cut covers {} nodes but the forest has {}",
                cut.node_count(),
                self.node_count
            )));
        }

        let source_part: Vec<NodeId> = cut
            .source_side()
            .iter()
            .copied()
            .filter(|&v| self.owner[v] == id)
            .collect();
        let sink_part: Vec<NodeId> = cut
            .sink_side()
            .into_iter()
            .filter(|&v| self.owner[v] == id)
            .collect();
        if source_part.is_empty() || sink_part.is_empty() {
            return Err(GomoryHuError::ClusterNotSplittable {
                cluster: id.0,
                reason: "cut does not separate the cluster",
            });
        }

        let orientation = self.orientation(cut);
        let (a_members, b_members) = match orientation {
            Orientation::SourceFirst => (source_part, sink_part),
            Orientation::SinkFirst => (sink_part, source_part),
        };
        let a = self.push_cluster(a_members, id);
        let b = self.push_cluster(b_members, id);
        let (source_child, sink_child) = match orientation {
            Orientation::SourceFirst => (a, b),
            Orientation::SinkFirst => (b, a),
        };

        let rewired = self.rewire(id, cut, source_child, sink_child);

        self.clusters[id.0].live = false;
        self.order.retain(|&c| c != id);
        self.order.extend([a, b]);
        for child in [a, b] {
            for &v in &self.clusters[child.0].members {
                self.owner[v] = child;
            }
        }

        let witnesses = match orientation {
            Orientation::SourceFirst => [cut.source(), cut.sink()],
            Orientation::SinkFirst => [cut.sink(), cut.source()],
        };
        let step = self.edges.len();
        self.edges.push(TreeEdge {
            ends: [a, b],
            witnesses,
            weight: cut.value(),
            step,
        });

        Ok(SplitOutcome {
            parent: id,
            a,
            b,
            orientation,
            edge: step,
            rewired,
        })
    }

    fn push_cluster(&mut self, members: Vec<NodeId>, parent: ClusterId) -> ClusterId {
        let id = ClusterId(self.clusters.len());
        self.clusters.push(Cluster {
            id,
            members,
            parent: Some(parent),
            live: true,
        });
        id
    }

    /// Move every edge endpoint equal to `id` onto one of its children.
    fn rewire(
        &mut self,
        id: ClusterId,
        cut: &CutResult,
        source_child: ClusterId,
        sink_child: ClusterId,
    ) -> Vec<(usize, ClusterId)> {
        let mut moves = Vec::new();
        for (idx, edge) in self.edges.iter().enumerate() {
            let Some(slot) = edge.ends.iter().position(|&end| end == id) else {
                continue;
            };
            let far = edge.ends[1 - slot];
            let witness = edge.witnesses[1 - slot];
            let target = if cut.is_source_side(witness) {
                source_child
            } else {
                sink_child
            };

            let far_members = &self.clusters[far.0].members;
            let on_source = far_members
                .iter()
                .filter(|&&v| cut.is_source_side(v))
                .count();
            if on_source != 0 && on_source != far_members.len() {
                log::debug!(
                    "cut {}-{} straddles neighbour {far} of {id}; following witness {witness}",
                    cut.source(),
                    cut.sink()
                );
            }
            log::trace!("edge {idx}: {id} -> {target} (neighbour {far}, witness {witness})");
            moves.push((idx, slot, target));
        }

        moves
            .into_iter()
            .map(|(idx, slot, target)| {
                self.edges[idx].ends[slot] = target;
                (idx, target)
            })
            .collect()
    }
}

impl DebugInvariants for PartitionForest {
    fn validate_invariants(&self) -> Result<()> {
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(self.node_count);
        let mut slot: HashMap<ClusterId, usize> = HashMap::with_capacity(self.order.len());
        for (pos, cluster) in self.clusters().enumerate() {
            if !cluster.live {
                return Err(GomoryHuError::InvariantViolation(format!(
                    "retired cluster {} is still in the collection",
                    cluster.id
                )));
            }
            if cluster.members.is_empty() {
                return Err(GomoryHuError::InvariantViolation(format!(
                    "cluster {} is empty",
                    cluster.id
                )));
            }
            for &v in &cluster.members {
                if v >= self.node_count || !seen.insert(v) {
                    return Err(GomoryHuError::InvariantViolation(format!(
                        "node {v} is out of range or in more than one cluster"
                    )));
                }
                if self.owner[v] != cluster.id {
                    return Err(GomoryHuError::InvariantViolation(format!(
                        "node {v} is listed in {} but owned by {}",
                        cluster.id, self.owner[v]
                    )));
                }
            }
            if let Some(parent) = cluster.parent() {
                if self.clusters.get(parent.0).is_none_or(Cluster::is_live) {
                    return Err(GomoryHuError::InvariantViolation(format!(
                        "cluster {} is live next to its parent {parent}",
                        cluster.id
                    )));
                }
            }
            slot.insert(cluster.id, pos);
        }
        if seen.len() != self.node_count {
            return Err(GomoryHuError::InvariantViolation(format!(
                "clusters cover {} of {} nodes",
                seen.len(),
                self.node_count
            )));
        }

        if self.edges.len() + 1 != self.order.len() {
            return Err(GomoryHuError::InvariantViolation(format!(
                "{} edges for {} clusters",
                self.edges.len(),
                self.order.len()
            )));
        }
        let mut components = DisjointSet::new(self.order.len());
        for (idx, edge) in self.edges.iter().enumerate() {
            let [a, b] = edge.ends;
            let (Some(&pa), Some(&pb)) = (slot.get(&a), slot.get(&b)) else {
                return Err(GomoryHuError::InvariantViolation(format!(
                    "edge {idx} references a retired cluster"
                )));
            };
            if !components.union(pa, pb) {
                return Err(GomoryHuError::InvariantViolation(format!(
                    "edge {idx} ({a}, {b}) closes a cycle"
                )));
            }
        }
        Ok(())
    }
}
