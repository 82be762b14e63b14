//! Auditing of the AVL invariants over a whole tree.

use thiserror::Error;

use crate::avl::Node;

/// The first broken invariant found by [`Tree::check_invariants`][crate::Tree::check_invariants].
/// `depth` is 0 at the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A key is smaller than a key in some ancestor's left position or larger than a key in
    /// some ancestor's right position.
    #[error("key at depth {depth} is out of order with respect to its ancestors")]
    OutOfOrder {
        /// Depth of the misplaced node.
        depth: usize,
    },
    /// The subtrees of a node differ in height by more than one.
    #[error("node at depth {depth} has balance factor {balance_factor}")]
    Unbalanced {
        /// Depth of the unbalanced node.
        depth: usize,
        /// Left subtree height minus right subtree height.
        balance_factor: isize,
    },
    /// A node's cached height doesn't match the height of its subtree.
    #[error("node at depth {depth} caches height {cached} but its subtree has height {actual}")]
    StaleHeight {
        /// Depth of the node with the stale height.
        depth: usize,
        /// The height stored in the node.
        cached: usize,
        /// The height recomputed from its children.
        actual: usize,
    },
}

/// Checks the subtree rooted at `node`, whose keys must lie within `lower..=upper`, and
/// returns its recomputed height.
pub(crate) fn check<K: Ord>(
    node: Option<&Node<K>>,
    lower: Option<&K>,
    upper: Option<&K>,
    depth: usize,
) -> Result<usize, InvariantViolation> {
    let node = match node {
        Some(node) => node,
        None => return Ok(0),
    };

    let key = node.key();
    if lower.map_or(false, |lower| key < lower) || upper.map_or(false, |upper| key > upper) {
        return Err(InvariantViolation::OutOfOrder { depth });
    }

    let left_height = check(node.left(), lower, Some(key), depth + 1)?;
    let right_height = check(node.right(), Some(key), upper, depth + 1)?;

    let actual = left_height.max(right_height) + 1;
    if node.height() != actual {
        return Err(InvariantViolation::StaleHeight {
            depth,
            cached: node.height(),
            actual,
        });
    }

    let balance_factor = left_height as isize - right_height as isize;
    if balance_factor.abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            depth,
            balance_factor,
        });
    }

    Ok(actual)
}
