//! Bracket tree construction.

use log::debug;

use crate::error::StructuralError;
use crate::seeds::BRACKET_SIZE;
use crate::types::Entrant;

/// Depth of the leaf level; the root sits at depth 0.
pub const LEAF_DEPTH: u8 = 6;

/// A single node in the bracket tree.
///
/// Leaves (both children absent) carry their entrant from construction.
/// Internal occupants stay empty until resolution fills them in with the
/// winner of the contest between the two children.
#[derive(Debug, Clone)]
pub struct Node {
    pub depth: u8,
    pub occupant: Option<Entrant>,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Empty internal node over two children.
    pub fn internal(depth: u8, left: Node, right: Node) -> Self {
        Self {
            depth,
            occupant: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Leaf holding an initial entrant.
    pub fn leaf(depth: u8, entrant: Entrant) -> Self {
        Self {
            depth,
            occupant: Some(entrant),
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The complete tournament tree: 63 contests over 64 leaves.
#[derive(Debug, Clone)]
pub struct Bracket {
    pub root: Node,
}

impl Bracket {
    /// Build the depth-6 tree, placing `entrants` on the leaves in strict
    /// left-to-right order. The sequence must hold exactly [`BRACKET_SIZE`]
    /// entrants and is consumed front to back.
    pub fn build(entrants: Vec<Entrant>) -> Result<Self, StructuralError> {
        if entrants.len() != BRACKET_SIZE {
            return Err(StructuralError::EntrantCount {
                expected: BRACKET_SIZE,
                actual: entrants.len(),
            });
        }

        let mut feed = entrants.into_iter();
        let root = build_node(0, &mut feed)?;

        let bracket = Self { root };
        let (internal, leaves) = bracket.node_counts();
        debug!("built bracket: {} leaves, {} pending contests", leaves, internal);
        Ok(bracket)
    }

    /// The resolved champion, once the root has been resolved.
    pub fn champion(&self) -> Option<&Entrant> {
        self.root.occupant.as_ref()
    }

    /// (internal, leaf) node counts.
    pub fn node_counts(&self) -> (usize, usize) {
        fn walk(node: &Node, counts: &mut (usize, usize)) {
            if node.is_leaf() {
                counts.1 += 1;
            } else {
                counts.0 += 1;
            }
            if let Some(left) = &node.left {
                walk(left, counts);
            }
            if let Some(right) = &node.right {
                walk(right, counts);
            }
        }

        let mut counts = (0, 0);
        walk(&self.root, &mut counts);
        counts
    }
}

fn build_node<I>(depth: u8, feed: &mut I) -> Result<Node, StructuralError>
where
    I: Iterator<Item = Entrant>,
{
    if depth == LEAF_DEPTH {
        let entrant = feed
            .next()
            .ok_or(StructuralError::EntrantsExhausted { depth })?;
        return Ok(Node::leaf(depth, entrant));
    }

    let left = build_node(depth + 1, feed)?;
    let right = build_node(depth + 1, feed)?;
    Ok(Node::internal(depth, left, right))
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
