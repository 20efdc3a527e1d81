use super::*;
use crate::seeds::FIRST_ROUND_ORDER;
use crate::types::{Entrant, Region};

fn entrants64() -> Vec<Entrant> {
    let mut entrants = Vec::new();
    for region in Region::ALL {
        for &seed in &FIRST_ROUND_ORDER {
            let name = format!("{} {}", region.name(), seed);
            entrants.push(Entrant::new(name, seed, region));
        }
    }
    entrants
}

fn collect_leaves<'a>(node: &'a Node, out: &mut Vec<&'a Entrant>) {
    if node.is_leaf() {
        out.push(node.occupant.as_ref().unwrap());
        return;
    }
    collect_leaves(node.left.as_ref().unwrap(), out);
    collect_leaves(node.right.as_ref().unwrap(), out);
}

#[test]
fn test_build_shape() {
    let bracket = Bracket::build(entrants64()).unwrap();
    let (internal, leaves) = bracket.node_counts();
    assert_eq!(internal, 63);
    assert_eq!(leaves, 64);
    assert_eq!(bracket.root.depth, 0);
}

#[test]
fn test_leaf_depth_and_empty_internal_nodes() {
    fn walk(node: &Node) {
        if node.is_leaf() {
            assert_eq!(node.depth, LEAF_DEPTH);
            assert!(node.occupant.is_some());
        } else {
            assert!(node.depth < LEAF_DEPTH);
            assert!(node.occupant.is_none());
            walk(node.left.as_ref().unwrap());
            walk(node.right.as_ref().unwrap());
        }
    }

    let bracket = Bracket::build(entrants64()).unwrap();
    walk(&bracket.root);
}

#[test]
fn test_leaves_keep_input_order() {
    let entrants = entrants64();
    let bracket = Bracket::build(entrants.clone()).unwrap();

    let mut leaves = Vec::new();
    collect_leaves(&bracket.root, &mut leaves);

    assert_eq!(leaves.len(), entrants.len());
    for (leaf, entrant) in leaves.iter().zip(&entrants) {
        assert_eq!(*leaf, entrant);
    }
}

#[test]
fn test_wrong_entrant_count_rejected() {
    let mut entrants = entrants64();
    entrants.pop();

    let err = Bracket::build(entrants).unwrap_err();
    assert!(matches!(
        err,
        StructuralError::EntrantCount {
            expected: 64,
            actual: 63
        }
    ));

    let err = Bracket::build(Vec::new()).unwrap_err();
    assert!(matches!(err, StructuralError::EntrantCount { actual: 0, .. }));
}
