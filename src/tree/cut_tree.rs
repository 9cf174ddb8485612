//! The finished minimum-cut tree and the queries it answers.
//!
//! A [`GomoryHuTree`] over `n` nodes has exactly `n - 1` weighted edges. For any two
//! nodes `u` and `v`, the smallest weight on the tree path between them is the value
//! of a minimum cut separating `u` and `v` in the original graph, and removing that
//! lightest edge splits the nodes into the two sides of such a cut.

use crate::graph::{CutValue, NodeId};
use crate::mincut_error::{GomoryHuError, Result};
use crate::tree::disjoint_set::DisjointSet;
use crate::tree::forest::PartitionForest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One edge of the tree, over original node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CutTreeEdge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: CutValue,
}

/// Rooted form of the tree: `parent[i]` and the weight of the edge `(i, parent[i])`.
///
/// The root has no parent and weight `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentArray {
    pub root: NodeId,
    pub parent: Vec<Option<NodeId>>,
    pub weight: Vec<CutValue>,
}

/// Gomory-Hu tree as a list of `n - 1` edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GomoryHuTree {
    node_count: usize,
    edges: Vec<CutTreeEdge>,
}

impl GomoryHuTree {
    /// Extract the tree from a fully refined forest, keeping edge creation order.
    pub fn from_forest(forest: &PartitionForest) -> Result<Self> {
        if !forest.is_refined() {
            return Err(GomoryHuError::Incomplete {
                clusters: forest.unrefined_count(),
            });
        }
        let node_of = |id| {
            forest
                .cluster(id)
                .and_then(|c| c.members().first().copied())
                .ok_or_else(|| {
                    GomoryHuError::InvariantViolation(format!("edge endpoint {id} has no members"))
                })
        };
        let edges = forest
            .edges()
            .iter()
            .map(|edge| {
                let [a, b] = edge.ends();
                Ok(CutTreeEdge {
                    u: node_of(a)?,
                    v: node_of(b)?,
                    weight: edge.weight(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_edges(forest.node_count(), edges)
    }

    /// Build from an explicit edge list, checking that it is a spanning tree on `0..n`.
    pub fn from_edges(node_count: usize, edges: Vec<CutTreeEdge>) -> Result<Self> {
        if node_count == 0 {
            return Err(GomoryHuError::EmptyGraph);
        }
        if edges.len() + 1 != node_count {
            return Err(GomoryHuError::InvariantViolation(format!(
                "a tree on {node_count} nodes needs {} edges, got {}",
                node_count - 1,
                edges.len()
            )));
        }
        let mut components = DisjointSet::new(node_count);
        for edge in &edges {
            for node in [edge.u, edge.v] {
                if node >= node_count {
                    return Err(GomoryHuError::NodeOutOfRange { node, node_count });
                }
            }
            if !components.union(edge.u, edge.v) {
                return Err(GomoryHuError::InvariantViolation(format!(
                    "edge ({}, {}) closes a cycle",
                    edge.u, edge.v
                )));
            }
        }
        Ok(Self { node_count, edges })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edges(&self) -> &[CutTreeEdge] {
        &self.edges
    }

    /// Adjacency lists of `(neighbour, edge index)`.
    fn adjacency(&self) -> Vec<Vec<(NodeId, usize)>> {
        let mut adj = vec![Vec::new(); self.node_count];
        for (idx, edge) in self.edges.iter().enumerate() {
            adj[edge.u].push((edge.v, idx));
            adj[edge.v].push((edge.u, idx));
        }
        adj
    }

    fn check_pair(&self, u: NodeId, v: NodeId) -> Result<()> {
        for node in [u, v] {
            if node >= self.node_count {
                return Err(GomoryHuError::NodeOutOfRange {
                    node,
                    node_count: self.node_count,
                });
            }
        }
        if u == v {
            return Err(GomoryHuError::SameTerminals(u));
        }
        Ok(())
    }

    /// Edge indices on the tree path from `u` to `v`, starting at `u`.
    fn path(&self, u: NodeId, v: NodeId) -> Vec<usize> {
        let adj = self.adjacency();
        let mut via: Vec<Option<(NodeId, usize)>> = vec![None; self.node_count];
        let mut visited = vec![false; self.node_count];
        visited[v] = true;
        let mut stack = vec![v];
        // Search from v so that walking `via` from u yields the path in u -> v order.
        while let Some(x) = stack.pop() {
            for &(y, idx) in &adj[x] {
                if !visited[y] {
                    visited[y] = true;
                    via[y] = Some((x, idx));
                    stack.push(y);
                }
            }
        }
        let mut path = Vec::new();
        let mut cur = u;
        while let Some((next, idx)) = via[cur] {
            path.push(idx);
            cur = next;
        }
        path
    }

    /// Minimum weight on the tree path between `u` and `v`.
    pub fn min_cut_value(&self, u: NodeId, v: NodeId) -> Result<CutValue> {
        self.check_pair(u, v)?;
        self.path(u, v)
            .into_iter()
            .map(|idx| self.edges[idx].weight)
            .min()
            .ok_or_else(|| GomoryHuError::InvariantViolation(format!("no path from {u} to {v}")))
    }

    /// All-pairs minimum cut values; the diagonal is zero.
    pub fn min_cut_matrix(&self) -> Vec<Vec<CutValue>> {
        let adj = self.adjacency();
        let mut matrix = vec![vec![0; self.node_count]; self.node_count];
        for root in 0..self.node_count {
            let mut visited = vec![false; self.node_count];
            visited[root] = true;
            let mut stack = vec![(root, CutValue::MAX)];
            while let Some((x, bottleneck)) = stack.pop() {
                for &(y, idx) in &adj[x] {
                    if !visited[y] {
                        visited[y] = true;
                        let through = bottleneck.min(self.edges[idx].weight);
                        matrix[root][y] = through;
                        stack.push((y, through));
                    }
                }
            }
        }
        matrix
    }

    /// The two sides of a minimum `u`-`v` cut, found by removing the lightest edge
    /// on the tree path (the one closest to `u` on ties), with its weight.
    ///
    /// The first side contains `u`; both are ascending.
    pub fn min_cut_partition(
        &self,
        u: NodeId,
        v: NodeId,
    ) -> Result<(Vec<NodeId>, Vec<NodeId>, CutValue)> {
        self.check_pair(u, v)?;
        let lightest = self
            .path(u, v)
            .into_iter()
            .min_by_key(|&idx| self.edges[idx].weight)
            .ok_or_else(|| GomoryHuError::InvariantViolation(format!("no path from {u} to {v}")))?;

        let adj = self.adjacency();
        let mut in_u_side = vec![false; self.node_count];
        in_u_side[u] = true;
        let mut stack = vec![u];
        while let Some(x) = stack.pop() {
            for &(y, idx) in &adj[x] {
                if idx != lightest && !in_u_side[y] {
                    in_u_side[y] = true;
                    stack.push(y);
                }
            }
        }
        let (side_u, side_v): (Vec<NodeId>, Vec<NodeId>) =
            (0..self.node_count).partition(|&x| in_u_side[x]);
        Ok((side_u, side_v, self.edges[lightest].weight))
    }

    /// Root the tree at `root`.
    pub fn to_parent_array(&self, root: NodeId) -> Result<ParentArray> {
        if root >= self.node_count {
            return Err(GomoryHuError::NodeOutOfRange {
                node: root,
                node_count: self.node_count,
            });
        }
        let adj = self.adjacency();
        let mut parent = vec![None; self.node_count];
        let mut weight = vec![0; self.node_count];
        let mut visited = vec![false; self.node_count];
        visited[root] = true;
        let mut stack = vec![root];
        while let Some(x) = stack.pop() {
            for &(y, idx) in &adj[x] {
                if !visited[y] {
                    visited[y] = true;
                    parent[y] = Some(x);
                    weight[y] = self.edges[idx].weight;
                    stack.push(y);
                }
            }
        }
        Ok(ParentArray {
            root,
            parent,
            weight,
        })
    }
}

/// Spreadsheet-style letter label for a node: `a`..`z`, then `aa`, `ab`, ...
pub fn node_label(node: NodeId) -> String {
    let mut label = Vec::new();
    let mut rest = node + 1;
    while rest > 0 {
        rest -= 1;
        label.push(b'a' + (rest % 26) as u8);
        rest /= 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

impl fmt::Display for CutTreeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -- {} : {}",
            node_label(self.u),
            node_label(self.v),
            self.weight
        )
    }
}

impl fmt::Display for GomoryHuTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
