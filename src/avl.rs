//! A self-balancing BST. Every `Node` owns its children through a `Box` and
//! caches the height of the subtree rooted at it. Insertion walks down a single
//! path and, on the way back up, recomputes heights and rotates wherever the
//! two subtrees of a `Node` differ in height by more than one.
//!
//! Keys that compare equal to an existing key are routed to the right, so the
//! tree behaves like a sorted multiset.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&5));
//!
//! for key in [5, 2, 8, 1, 3] {
//!     tree.insert(key);
//! }
//! assert!(tree.search(&5));
//! assert!(!tree.search(&10));
//!
//! assert_eq!(tree.inorder_traversal(), vec![&1, &2, &3, &5, &8]);
//! assert_eq!(tree.preorder_traversal(), vec![&5, &2, &1, &3, &8]);
//! assert_eq!(tree.postorder_traversal(), vec![&1, &3, &2, &8, &5]);
//! ```

use std::iter::FromIterator;

use tracing::trace;

use crate::invariant::{self, InvariantViolation};
use crate::traversal::{self, Iter, Order};

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Height of a possibly empty subtree. An empty subtree has a height of 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// A self-balancing Binary Search Tree (specifically, an AVL tree). This can be used for
/// inserting and searching for keys, and for walking them in-order, pre-order, or post-order.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    pub(crate) len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the given key into the tree. Inserting a key equal to one already in the tree
    /// stores it again, to the right of the existing one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.inorder_traversal(), vec![&1, &1]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root = Some(Node::insert_into(self.root.take(), key));
        self.len += 1;

        trace!(len = self.len, height = self.height(), "inserted key");
    }

    /// Returns whether a key equal to `key` is stored in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.search(&1));
    ///
    /// tree.insert(1);
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *key < node.key {
                current = node.left.as_deref();
            } else if *key > node.key {
                current = node.right.as_deref();
            } else {
                return true;
            }
        }

        false
    }

    /// Returns every key in sorted order: left subtree, then the subtree root, then the
    /// right subtree.
    pub fn inorder_traversal(&self) -> Vec<&K> {
        traversal::collect(self.root(), Order::In, self.len)
    }

    /// Returns every key with each subtree root before its left and then right subtree.
    pub fn preorder_traversal(&self) -> Vec<&K> {
        traversal::collect(self.root(), Order::Pre, self.len)
    }

    /// Returns every key with each subtree root after its left and then right subtree.
    pub fn postorder_traversal(&self) -> Vec<&K> {
        traversal::collect(self.root(), Order::Post, self.len)
    }

    /// Lazily iterates over the keys in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    /// let keys: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// The number of keys stored, counting each insertion of a duplicate key.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels are in this tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The root `Node`, if anything has been inserted.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }

    /// Walks the whole tree and verifies the ordering, balance, and height invariants,
    /// returning the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = (0..100).collect();
    /// assert!(tree.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation>
    where
        K: Ord,
    {
        invariant::check(self.root(), None, None, 0).map(|_| ())
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` has a key that is used for searching/sorting and owns up to two children.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` with the given `key`.
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    fn update_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Left height minus right height.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Inserts `key` into the (possibly empty) subtree and returns its new root.
    fn insert_into(link: Link<K>, key: K) -> Box<Self>
    where
        K: Ord,
    {
        match link {
            None => Self::new_boxed(key),
            Some(node) => node.insert(key),
        }
    }

    fn insert(mut self: Box<Self>, key: K) -> Box<Self>
    where
        K: Ord,
    {
        if key < self.key {
            self.left = Some(Self::insert_into(self.left.take(), key));
        } else {
            self.right = Some(Self::insert_into(self.right.take(), key));
        }

        self.update_height();
        self.balance()
    }

    /// Rotates the right child up to become the root of this subtree. The right child's left
    /// subtree becomes the old root's right subtree.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.right.take() {
            Some(right) => right,
            // We only rotate left when the right subtree is taller than the left subtree.
            None => unreachable!("`balance` saw right child taller than left child."),
        };

        self.right = new_root.left.take();
        // The old root is now below the new root so its height has to be fixed first.
        self.update_height();
        new_root.left = Some(self);
        new_root.update_height();

        trace!(height = new_root.height, "rotated left");
        new_root
    }

    /// Rotates the left child up to become the root of this subtree. The left child's right
    /// subtree becomes the old root's left subtree.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.left.take() {
            Some(left) => left,
            None => unreachable!("`balance` saw left child taller than right child."),
        };

        self.left = new_root.right.take();
        self.update_height();
        new_root.right = Some(self);
        new_root.update_height();

        trace!(height = new_root.height, "rotated right");
        new_root
    }

    /// Balances a subtree using the heights of the children and grandchildren. The children
    /// must already be balanced, which holds for every node on an insertion path since only
    /// that path changed.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        let balance_factor = self.balance_factor();

        let return_node = if balance_factor > 1 {
            // Left-right: the left child leans right so a single rotation would just move the
            // imbalance over to the other side.
            if self.left.as_ref().map_or(0, |left| left.balance_factor()) < 0 {
                self.left = self.left.take().map(Self::rotate_left);
            }
            self.rotate_right()
        } else if balance_factor < -1 {
            if self.right.as_ref().map_or(0, |right| right.balance_factor()) > 0 {
                self.right = self.right.take().map(Self::rotate_right);
            }
            self.rotate_left()
        } else {
            self
        };

        // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(test) {
            assert!(return_node.balance_factor().abs() <= 1);
        }
        return_node
    }
}
