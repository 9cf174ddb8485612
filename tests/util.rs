#![allow(dead_code)]
use gomory_hu::prelude::*;

pub fn graph(rows: &[&[i64]]) -> WeightGraph {
    WeightGraph::from_rows(rows).unwrap()
}

/// Minimum `u`-`v` cut value by enumerating every side containing `u` but not `v`.
pub fn brute_force_min_cut(g: &WeightGraph, u: NodeId, v: NodeId) -> CutValue {
    let n = g.node_count();
    (0u32..(1 << n))
        .filter(|bits| bits & (1 << u) != 0 && bits & (1 << v) == 0)
        .map(|bits| {
            let mask: Vec<bool> = (0..n).map(|i| bits & (1 << i) != 0).collect();
            g.cut_value(&mask)
        })
        .min()
        .unwrap_or(CutValue::MAX)
}

/// Assert that every pair's tree path minimum equals its brute-force minimum cut.
pub fn assert_matches_brute_force(g: &WeightGraph, tree: &GomoryHuTree) {
    let n = g.node_count();
    assert_eq!(tree.edges().len(), n - 1, "tree on {n} nodes");
    for u in 0..n {
        for v in (u + 1)..n {
            assert_eq!(
                tree.min_cut_value(u, v).unwrap(),
                brute_force_min_cut(g, u, v),
                "pair ({u}, {v})\n{tree}"
            );
        }
    }
}

/// Sorted `(min, max, weight)` triples, for comparing trees regardless of edge order.
pub fn normalized_edges(tree: &GomoryHuTree) -> Vec<(NodeId, NodeId, CutValue)> {
    let mut edges: Vec<_> = tree
        .edges()
        .iter()
        .map(|e| (e.u.min(e.v), e.u.max(e.v), e.weight))
        .collect();
    edges.sort_unstable();
    edges
}
