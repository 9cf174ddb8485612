//! Reference weight matrices.
//!
//! These are the graphs the interactive matrix editor ships with; they double as
//! fixtures for tests and benchmarks. Build a graph with
//! [`WeightGraph::from_rows`](crate::graph::WeightGraph::from_rows).

/// Seven-node demonstration graph, nodes `a`..`g`.
pub const DEMONSTRATION: [[i64; 7]; 7] = [
    [0, 8, 9, 7, 0, 0, 0],
    [8, 0, 0, 5, 7, 0, 0],
    [9, 0, 0, 4, 0, 9, 0],
    [7, 5, 4, 0, 4, 6, 8],
    [0, 7, 0, 4, 0, 0, 2],
    [0, 0, 9, 6, 0, 0, 11],
    [0, 0, 0, 8, 2, 11, 0],
];

/// Eight-node exercise graph ("variant 24"), nodes `a`..`h`.
pub const VARIANT_24: [[i64; 8]; 8] = [
    [0, 2, 8, 0, 1, 4, 0, 0],
    [2, 0, 0, 0, 4, 7, 0, 0],
    [8, 0, 0, 7, 0, 3, 0, 0],
    [0, 0, 7, 0, 0, 0, 6, 0],
    [1, 4, 0, 0, 0, 0, 0, 2],
    [4, 7, 3, 0, 0, 0, 0, 4],
    [0, 0, 0, 6, 0, 0, 0, 6],
    [0, 0, 0, 0, 2, 4, 6, 0],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightGraph;

    #[test]
    fn presets_are_valid_graphs() {
        let demo = WeightGraph::from_rows(&DEMONSTRATION).unwrap();
        assert_eq!(demo.node_count(), 7);
        assert_eq!(demo.total_weight(), 80);
        let variant = WeightGraph::from_rows(&VARIANT_24).unwrap();
        assert_eq!(variant.node_count(), 8);
        assert_eq!(variant.total_weight(), 54);
    }
}
