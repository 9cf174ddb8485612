//! Immutable weighted-adjacency view over all nodes of an undirected graph.
//!
//! A [`WeightGraph`] is built once from a dense `n × n` matrix and is read-only
//! afterwards. Construction validates the matrix (square, non-negative,
//! zero diagonal, symmetric) and fails fast on the first problem; no partially
//! built graph is ever returned.
//!
//! Cut values are accumulated in `u64`. Construction rejects matrices whose total
//! edge weight does not fit, and every cut is bounded by the total, so
//! [`WeightGraph::cut_value`] can never overflow.

use crate::mincut_error::{GomoryHuError, Result};
use std::str::FromStr;

/// Index of a node in the original graph, in `[0, n)`.
pub type NodeId = usize;
/// Weight of a single undirected edge.
pub type Weight = u64;
/// Sum of edge weights crossing a cut.
pub type CutValue = u64;

/// Largest weight a single edge may carry, the same bound [`WeightGraph::from_rows`]
/// gets from its signed input. Flow residuals reach twice an edge weight.
pub const MAX_WEIGHT: Weight = i64::MAX as Weight;

/// Validated, symmetric, zero-diagonal weight matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightGraph {
    n: usize,
    weights: Vec<Weight>,
    total_weight: CutValue,
}

static_assertions::assert_impl_all!(WeightGraph: Send, Sync);

impl WeightGraph {
    /// Build a graph from matrix rows of signed integers.
    ///
    /// Signed input lets negative entries be reported instead of silently wrapping.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(GomoryHuError::EmptyGraph);
        }
        for (row, r) in rows.iter().enumerate() {
            let found = r.as_ref().len();
            if found != n {
                return Err(GomoryHuError::NotSquare {
                    row,
                    expected: n,
                    found,
                });
            }
        }

        let mut weights = Vec::with_capacity(n * n);
        let mut total_weight: CutValue = 0;
        for (u, r) in rows.iter().enumerate() {
            for (v, &raw) in r.as_ref().iter().enumerate() {
                let w = Weight::try_from(raw).map_err(|_| GomoryHuError::NegativeWeight {
                    u,
                    v,
                    weight: raw,
                })?;
                if u == v {
                    if w != 0 {
                        return Err(GomoryHuError::NonZeroDiagonal {
                            node: u,
                            weight: raw,
                        });
                    }
                } else {
                    let backward = rows[v].as_ref()[u];
                    if backward != raw {
                        return Err(GomoryHuError::Asymmetric {
                            u,
                            v,
                            forward: raw,
                            backward,
                        });
                    }
                    if u < v {
                        total_weight = total_weight
                            .checked_add(w)
                            .ok_or(GomoryHuError::WeightOverflow)?;
                    }
                }
                weights.push(w);
            }
        }

        Ok(Self {
            n,
            weights,
            total_weight,
        })
    }

    /// Build a graph on `n` nodes from an undirected edge list `(u, v, w)`.
    ///
    /// Each pair is stored symmetrically; when the same pair is listed twice the
    /// later weight replaces the earlier one. Zero-weight self loops are ignored.
    /// Weights above [`MAX_WEIGHT`] are rejected with [`GomoryHuError::WeightOverflow`].
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId, Weight)]) -> Result<Self> {
        if n == 0 {
            return Err(GomoryHuError::EmptyGraph);
        }
        let mut weights = vec![0 as Weight; n * n];
        for &(u, v, w) in edges {
            for node in [u, v] {
                if node >= n {
                    return Err(GomoryHuError::NodeOutOfRange {
                        node,
                        node_count: n,
                    });
                }
            }
            if w > MAX_WEIGHT {
                return Err(GomoryHuError::WeightOverflow);
            }
            if u == v {
                if w != 0 {
                    let weight = i64::try_from(w).map_err(|_| GomoryHuError::WeightOverflow)?;
                    return Err(GomoryHuError::NonZeroDiagonal { node: u, weight });
                }
                continue;
            }
            weights[u * n + v] = w;
            weights[v * n + u] = w;
        }

        let mut total_weight: CutValue = 0;
        for u in 0..n {
            for v in (u + 1)..n {
                total_weight = total_weight
                    .checked_add(weights[u * n + v])
                    .ok_or(GomoryHuError::WeightOverflow)?;
            }
        }

        Ok(Self {
            n,
            weights,
            total_weight,
        })
    }

    /// Number of nodes `n`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Weight of the undirected edge `{u, v}` (zero when absent or `u == v`).
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn weight(&self, u: NodeId, v: NodeId) -> Weight {
        assert!(u < self.n && v < self.n, "node out of range");
        self.weights[u * self.n + v]
    }

    /// Row `u` of the weight matrix.
    #[inline]
    pub fn row(&self, u: NodeId) -> &[Weight] {
        &self.weights[u * self.n..(u + 1) * self.n]
    }

    /// Sum of all edge weights, counting each undirected edge once.
    pub fn total_weight(&self) -> CutValue {
        self.total_weight
    }

    /// Nodes adjacent to `u` through a positive-weight edge, with that weight.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.row(u)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, w)| w > 0)
    }

    /// All undirected edges `(u, v, w)` with `u < v` and `w > 0`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        (0..self.n).flat_map(move |u| {
            self.neighbors(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| (u, v, w))
        })
    }

    /// Weight crossing the cut described by a membership mask over all `n` nodes:
    /// the sum of `weight[i][j]` for every `i` inside and `j` outside.
    ///
    /// The mask always spans the full node range, never a single cluster.
    ///
    /// # Panics
    /// Panics if `in_side.len() != n`.
    pub fn cut_value(&self, in_side: &[bool]) -> CutValue {
        assert_eq!(in_side.len(), self.n, "cut mask must cover every node");
        let mut sum: CutValue = 0;
        for (i, _) in in_side.iter().enumerate().filter(|&(_, &inside)| inside) {
            let row = self.row(i);
            for (j, &w) in row.iter().enumerate() {
                if !in_side[j] {
                    sum += w;
                }
            }
        }
        sum
    }

    /// [`cut_value`](Self::cut_value) for an explicit node list. Duplicates are ignored.
    pub fn cut_value_of(&self, side: &[NodeId]) -> Result<CutValue> {
        Ok(self.cut_value(&self.mask_of(side)?))
    }

    /// Membership mask over `[0, n)` for a node list.
    pub fn mask_of(&self, side: &[NodeId]) -> Result<Vec<bool>> {
        let mut mask = vec![false; self.n];
        for &v in side {
            self.check_node(v)?;
            mask[v] = true;
        }
        Ok(mask)
    }

    /// Every node of the graph not in `side`, ascending.
    pub fn complement(&self, side: &[NodeId]) -> Result<Vec<NodeId>> {
        let mask = self.mask_of(side)?;
        Ok((0..self.n).filter(|&v| !mask[v]).collect())
    }

    /// Fails with [`GomoryHuError::NodeOutOfRange`] unless `v < n`.
    pub fn check_node(&self, v: NodeId) -> Result<()> {
        if v < self.n {
            Ok(())
        } else {
            Err(GomoryHuError::NodeOutOfRange {
                node: v,
                node_count: self.n,
            })
        }
    }
}

/// Parses a whitespace-separated weight grid, one matrix row per line.
///
/// Blank lines are skipped and `#` starts a comment that runs to the end of the line.
impl FromStr for WeightGraph {
    type Err = GomoryHuError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows: Vec<Vec<i64>> = Vec::new();
        for (idx, raw_line) in s.lines().enumerate() {
            let line = raw_line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<i64>().map_err(|e| GomoryHuError::Parse {
                        line: idx + 1,
                        message: format!("invalid weight `{tok}`: {e}"),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}
