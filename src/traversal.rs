//! Depth-first walks over a tree's keys.

use std::iter::FusedIterator;

use crate::avl::Node;

/// Where a subtree root is visited relative to its left and right subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    In,
    Pre,
    Post,
}

/// Eagerly collects every key under `root` in the given order.
pub(crate) fn collect<K>(root: Option<&Node<K>>, order: Order, len: usize) -> Vec<&K> {
    let mut keys = Vec::with_capacity(len);
    visit(root, order, &mut keys);
    keys
}

/// Recursion depth is bounded by the tree height, which the balance invariant keeps
/// logarithmic.
fn visit<'a, K>(node: Option<&'a Node<K>>, order: Order, keys: &mut Vec<&'a K>) {
    if let Some(node) = node {
        if order == Order::Pre {
            keys.push(node.key());
        }
        visit(node.left(), order, keys);
        if order == Order::In {
            keys.push(node.key());
        }
        visit(node.right(), order, keys);
        if order == Order::Post {
            keys.push(node.key());
        }
    }
}

/// A lazy, sorted iterator over the keys of a [`Tree`][crate::Tree].
///
/// It keeps the path from the root down to the next key on an explicit stack, so each call
/// to `next` is amortized `O(1)`.
#[derive(Clone, Debug)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
