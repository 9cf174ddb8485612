//! Exhaustive minimum `s`-`t` cut search.
//!
//! Every set `S = {s} ∪ C` is evaluated, where `C` ranges over the combinations of
//! the remaining nodes (all nodes except `s` and `t`). Sizes are visited in
//! increasing order and, within one size, combinations in lexicographic order. The
//! first candidate that strictly improves on the best value so far is retained, so
//! ties go to smaller sets and then to lexicographically earlier ones.
//!
//! The search is `O(2^n · n^2)` and is guarded by a node limit. With the `rayon`
//! feature the candidates of one size are evaluated in parallel; the reduction keys
//! on `(value, position)` so the result is identical to the sequential search.

use super::{CutOracle, CutResult, check_terminals};
use crate::graph::{CutValue, NodeId, WeightGraph};
use crate::mincut_error::{GomoryHuError, Result};
use itertools::Itertools;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Largest graph the exhaustive oracle accepts unless configured otherwise.
pub const DEFAULT_NODE_LIMIT: usize = 24;

/// Reference oracle: enumerate every candidate source side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveOracle {
    node_limit: usize,
}

impl Default for ExhaustiveOracle {
    fn default() -> Self {
        Self {
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }
}

impl ExhaustiveOracle {
    /// Oracle with the default node limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle refusing graphs with more than `node_limit` nodes.
    pub fn with_node_limit(node_limit: usize) -> Self {
        Self { node_limit }
    }

    /// Largest accepted node count.
    pub fn node_limit(&self) -> usize {
        self.node_limit
    }
}

impl CutOracle for ExhaustiveOracle {
    fn min_cut(&self, graph: &WeightGraph, s: NodeId, t: NodeId) -> Result<CutResult> {
        check_terminals(graph, s, t)?;
        let n = graph.node_count();
        if n > self.node_limit {
            return Err(GomoryHuError::ExhaustiveLimitExceeded {
                nodes: n,
                limit: self.node_limit,
            });
        }

        let others: Vec<NodeId> = (0..n).filter(|&v| v != s && v != t).collect();
        let mut best: Option<(CutValue, Vec<NodeId>)> = None;
        for extra in 0..=others.len() {
            let Some((value, combo)) = best_of_size(graph, s, &others, extra) else {
                continue;
            };
            if best.as_ref().is_none_or(|(current, _)| value < *current) {
                log::trace!(
                    "exhaustive s={s} t={t}: |S|={} improves to {value}",
                    extra + 1
                );
                best = Some((value, combo));
            }
            // Nothing beats a zero cut.
            if matches!(best, Some((0, _))) {
                break;
            }
        }

        let (_, mut side) = best.ok_or_else(|| {
            GomoryHuError::InvariantViolation(format!("no candidate cut between {s} and {t}"))
        })?;
        side.push(s);
        CutResult::from_source_side(graph, s, t, &side)
    }

    fn name(&self) -> &'static str {
        "exhaustive"
    }
}

/// Best `{s} ∪ C` over all `C` of size `extra` drawn from `others`, first minimum wins.
#[cfg(not(feature = "rayon"))]
fn best_of_size(
    graph: &WeightGraph,
    s: NodeId,
    others: &[NodeId],
    extra: usize,
) -> Option<(CutValue, Vec<NodeId>)> {
    let mut mask = vec![false; graph.node_count()];
    mask[s] = true;
    let mut best: Option<(CutValue, Vec<NodeId>)> = None;
    for combo in others.iter().copied().combinations(extra) {
        for &v in &combo {
            mask[v] = true;
        }
        let value = graph.cut_value(&mask);
        for &v in &combo {
            mask[v] = false;
        }
        if best.as_ref().is_none_or(|(current, _)| value < *current) {
            best = Some((value, combo));
        }
    }
    best
}

/// Parallel variant; ties are resolved by enumeration position.
#[cfg(feature = "rayon")]
fn best_of_size(
    graph: &WeightGraph,
    s: NodeId,
    others: &[NodeId],
    extra: usize,
) -> Option<(CutValue, Vec<NodeId>)> {
    let n = graph.node_count();
    let combos: Vec<Vec<NodeId>> = others.iter().copied().combinations(extra).collect();
    combos
        .into_par_iter()
        .enumerate()
        .map(|(position, combo)| {
            let mut mask = vec![false; n];
            mask[s] = true;
            for &v in &combo {
                mask[v] = true;
            }
            (graph.cut_value(&mask), position, combo)
        })
        .min_by_key(|&(value, position, _)| (value, position))
        .map(|(value, _, combo)| (value, combo))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightGraph {
        WeightGraph::from_rows(&[[0i64, 5, 3], [5, 0, 4], [3, 4, 0]]).unwrap()
    }

    #[test]
    fn triangle_first_split() {
        let cut = ExhaustiveOracle::new().min_cut(&triangle(), 0, 2).unwrap();
        assert_eq!(cut.value(), 7);
        assert_eq!(cut.source_side(), &[0, 1]);
        assert_eq!(cut.sink_side(), vec![2]);
        assert!(cut.isolates_sink());
    }

    #[test]
    fn triangle_second_split() {
        let cut = ExhaustiveOracle::new().min_cut(&triangle(), 0, 1).unwrap();
        assert_eq!(cut.value(), 8);
        assert_eq!(cut.source_side(), &[0]);
        assert!(!cut.isolates_sink());
    }

    #[test]
    fn ties_prefer_smaller_then_earlier_sets() {
        // Path 0 - 1 - 2 - 3 with unit weights: every single-edge cut costs 1.
        let g = WeightGraph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
        let cut = ExhaustiveOracle::new().min_cut(&g, 0, 3).unwrap();
        assert_eq!(cut.value(), 1);
        assert_eq!(cut.source_side(), &[0]);

        // From the middle: {1} costs 2, {1,0} costs 1, {1,2} costs 1; {0,1} is earlier.
        let cut = ExhaustiveOracle::new().min_cut(&g, 1, 3).unwrap();
        assert_eq!(cut.value(), 1);
        assert_eq!(cut.source_side(), &[1, 0]);
    }

    #[test]
    fn disconnected_graph_has_zero_cut() {
        let g = WeightGraph::from_edges(4, &[(0, 1, 3), (2, 3, 3)]).unwrap();
        let cut = ExhaustiveOracle::new().min_cut(&g, 0, 2).unwrap();
        assert_eq!(cut.value(), 0);
        assert!(cut.is_source_side(0));
        assert!(!cut.is_source_side(2));
    }

    #[test]
    fn rejects_bad_terminals_and_large_graphs() {
        let g = triangle();
        let oracle = ExhaustiveOracle::new();
        assert_eq!(
            oracle.min_cut(&g, 2, 2),
            Err(GomoryHuError::SameTerminals(2))
        );
        assert!(matches!(
            oracle.min_cut(&g, 0, 3),
            Err(GomoryHuError::NodeOutOfRange { node: 3, .. })
        ));
        assert_eq!(
            ExhaustiveOracle::with_node_limit(2).min_cut(&g, 0, 1),
            Err(GomoryHuError::ExhaustiveLimitExceeded { nodes: 3, limit: 2 })
        );
    }

    #[test]
    fn matches_mask_enumeration() {
        // K5 with distinct weights, compared against a plain bitmask sweep.
        let rows = [
            [0i64, 3, 1, 4, 2],
            [3, 0, 5, 1, 1],
            [1, 5, 0, 2, 6],
            [4, 1, 2, 0, 3],
            [2, 1, 6, 3, 0],
        ];
        let g = WeightGraph::from_rows(&rows).unwrap();
        for s in 0..5 {
            for t in 0..5 {
                if s == t {
                    continue;
                }
                let cut = ExhaustiveOracle::new().min_cut(&g, s, t).unwrap();
                let brute = (0u32..32)
                    .filter(|bits| bits & (1 << s) != 0 && bits & (1 << t) == 0)
                    .map(|bits| {
                        let mask: Vec<bool> = (0..5).map(|i| bits & (1 << i) != 0).collect();
                        g.cut_value(&mask)
                    })
                    .min()
                    .unwrap();
                assert_eq!(cut.value(), brute, "s={s} t={t}");
                assert!(cut.is_source_side(s) && !cut.is_source_side(t));
            }
        }
    }
}
