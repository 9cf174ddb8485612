use super::*;
use crate::graph::{CutValue, NodeId};
use crate::mincut_error::GomoryHuError;
use crate::presets::{DEMONSTRATION, VARIANT_24};


/// Minimum `u`-`v` cut by trying every subset that contains `u` and not `v`.
pub(super) fn brute_force_min_cut(graph: &WeightGraph, u: NodeId, v: NodeId) -> CutValue {
    let n = graph.node_count();
    let mut best = CutValue::MAX;
    for bits in 0u32..(1 << n) {
        if bits & (1 << u) == 0 || bits & (1 << v) != 0 {
            continue;
        }
        let mask: Vec<bool> = (0..n).map(|i| bits & (1 << i) != 0).collect();
        best = best.min(graph.cut_value(&mask));
    }
    best
}

pub(super) fn assert_cut_equivalent(graph: &WeightGraph, tree: &GomoryHuTree) {
    let n = graph.node_count();
    assert_eq!(tree.node_count(), n);
    assert_eq!(tree.edges().len(), n - 1);
    let matrix = tree.min_cut_matrix();
    for u in 0..n {
        for v in (u + 1)..n {
            let expected = brute_force_min_cut(graph, u, v);
            assert_eq!(matrix[u][v], expected, "pair ({u}, {v})");
            assert_eq!(tree.min_cut_value(v, u).unwrap(), expected);
        }
    }
}

#[test]
fn presets_under_both_oracles() {
    let demo = WeightGraph::from_rows(&DEMONSTRATION).unwrap();
    let variant = WeightGraph::from_rows(&VARIANT_24).unwrap();
    for graph in [&demo, &variant] {
        for oracle in [OracleKind::Exhaustive, OracleKind::EdmondsKarp] {
            let cfg = GomoryHuConfig {
                oracle,
                validate_each_split: true,
                ..Default::default()
            };
            let tree = gomory_hu_tree(graph, &cfg).unwrap();
            assert_cut_equivalent(graph, &tree);
        }
    }
}

#[test]
fn config_limit_reaches_the_exhaustive_oracle() {
    let demo = WeightGraph::from_rows(&DEMONSTRATION).unwrap();
    let cfg = GomoryHuConfig {
        exhaustive_node_limit: 6,
        ..Default::default()
    };
    let err = gomory_hu_tree(&demo, &cfg).unwrap_err();
    assert_eq!(err, GomoryHuError::ExhaustiveLimitExceeded { nodes: 7, limit: 6 });
    assert!(err.to_string().contains("Edmonds-Karp"), "{err}");
    // The flow oracle has no size limit.
    let cfg = GomoryHuConfig {
        oracle: OracleKind::EdmondsKarp,
        ..cfg
    };
    assert!(gomory_hu_tree(&demo, &cfg).is_ok());
}

#[test]
fn disconnected_graph_has_zero_weight_bridges() {
    // Two components {0,1} and {2,3}.
    let g = WeightGraph::from_edges(4, &[(0, 1, 3), (2, 3, 4)]).unwrap();
    let tree = gomory_hu_tree(&g, &GomoryHuConfig::default()).unwrap();
    assert_cut_equivalent(&g, &tree);
    assert_eq!(tree.edges().iter().filter(|e| e.weight == 0).count(), 1);
    assert_eq!(tree.min_cut_value(0, 3).unwrap(), 0);
    assert_eq!(tree.min_cut_value(2, 3).unwrap(), 4);
}

#[test]
fn trace_edges_match_their_cuts() {
    let demo = WeightGraph::from_rows(&DEMONSTRATION).unwrap();
    let (tree, trace) = TreeBuilder::new(&demo).run_traced().unwrap();
    assert_eq!(trace.len(), 6);
    for (edge, record) in tree.edges().iter().zip(&trace) {
        assert_eq!(edge.weight, record.cut.value());
        assert_ne!(
            record.cut.is_source_side(edge.u),
            record.cut.is_source_side(edge.v),
            "edge {edge} is not separated by the cut of step {}",
            record.step
        );
    }
}

#[test]
fn later_cut_straddling_a_neighbour_keeps_the_tree_exact() {
    let g = WeightGraph::from_rows(&[
        [0i64, 1, 0, 1, 0, 0, 1],
        [1, 0, 0, 1, 1, 0, 0],
        [0, 0, 0, 0, 0, 0, 0],
        [1, 1, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0, 0, 1],
        [0, 0, 0, 0, 0, 0, 0],
        [1, 0, 0, 0, 1, 0, 0],
    ])
    .unwrap();

    for oracle in [OracleKind::Exhaustive, OracleKind::EdmondsKarp] {
        let boxed: Box<dyn crate::oracle::CutOracle> = match oracle {
            OracleKind::Exhaustive => Box::new(crate::oracle::ExhaustiveOracle::new()),
            OracleKind::EdmondsKarp => Box::new(crate::oracle::EdmondsKarpOracle::new()),
        };
        let mut builder = TreeBuilder::with_oracle(&g, boxed).validate_each_split(true);

        let first = builder.step().unwrap().unwrap();
        assert_eq!(first.cut.source_side(), &[0, 1, 3]);
        let members: Vec<Vec<NodeId>> = builder
            .forest()
            .clusters()
            .map(|c| c.members().to_vec())
            .collect();
        assert_eq!(members, vec![vec![0, 1, 3], vec![2, 4, 5, 6]]);

        // Splitting {0,1,3} with s=0, t=3 puts 4 and 6 on the source side,
        // cutting through the neighbour {2,4,5,6}.
        let second = builder.step().unwrap().unwrap();
        assert_eq!((second.source, second.sink), (0, 3));
        assert_eq!(second.cut.source_side(), &[0, 1, 4, 6]);
        assert_eq!(second.cut.value(), 2);
        let neighbour = &members[1];
        let inside = neighbour
            .iter()
            .filter(|&&v| second.cut.is_source_side(v))
            .count();
        assert!(inside > 0 && inside < neighbour.len());

        // The first edge follows its witness 6, which is on the source side.
        let edge = &builder.forest().edges()[0];
        let holder = builder.forest().cluster_of(0).unwrap();
        assert!(edge.ends().contains(&holder), "{:?}", edge.ends());
        assert_eq!(builder.forest().cluster(holder).unwrap().members(), &[0, 1]);

        let tree = builder.run().unwrap();
        assert_cut_equivalent(&g, &tree);
    }
}
