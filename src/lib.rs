//! This crate exposes a self-balancing Binary Search Tree (an AVL tree),
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores the key that was inserted
//! and will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key no greater than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key no less than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## AVL
//!
//! Inserting keys in ascending order into a plain BST produces a linked list
//! of height `N`. An AVL tree additionally keeps, for every `Node`, the heights
//! of its two subtrees within one of each other. Whenever an insertion breaks
//! that rule the tree performs one or two rotations on the way back up the
//! insertion path, which keeps the height within `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! for key in 1..=3 {
//!     tree.insert(key);
//! }
//!
//! // Ascending inserts were rotated into a balanced shape.
//! assert_eq!(tree.root().map(|root| *root.key()), Some(2));
//! assert_eq!(tree.height(), 2);
//!
//! assert!(tree.search(&3));
//! assert!(!tree.search(&4));
//! assert_eq!(tree.inorder_traversal(), vec![&1, &2, &3]);
//! assert!(tree.check_invariants().is_ok());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
mod invariant;
#[cfg(feature = "serde")]
mod serde_impl;
mod traversal;

pub use crate::avl::{Node, Tree};
pub use crate::invariant::InvariantViolation;
pub use crate::traversal::Iter;
