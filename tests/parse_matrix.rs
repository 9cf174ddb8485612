mod util;

use gomory_hu::prelude::*;
use util::assert_matches_brute_force;

const GRID: &str = "\
# a  b  c  d
  0  8  9  7   # a
  8  0  0  5
  9  0  0  4

  7  5  4  0
";

#[test]
fn parses_commented_grid() {
    let g: WeightGraph = GRID.parse().unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.weight(0, 2), 9);
    assert_eq!(g.total_weight(), 8 + 9 + 7 + 5 + 4);
    let tree = gomory_hu_tree(&g, &GomoryHuConfig::default()).unwrap();
    assert_matches_brute_force(&g, &tree);
}

#[test]
fn reports_the_offending_line() {
    let err = "0 1\n1 x\n".parse::<WeightGraph>().unwrap_err();
    assert!(matches!(err, GomoryHuError::Parse { line: 2, .. }), "{err:?}");
    assert!(matches!(
        "0 1 2\n1 0\n".parse::<WeightGraph>(),
        Err(GomoryHuError::NotSquare { row: 0, expected: 2, found: 3 })
    ));
    assert_eq!("# nothing\n".parse::<WeightGraph>(), Err(GomoryHuError::EmptyGraph));
}
