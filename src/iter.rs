//! In-order iterators over a [`Tree`][crate::tree::Tree].
//!
//! Both iterators keep an explicit stack of pending ancestors instead of recursing. The stack
//! starts out holding the leftmost spine of the root. Each step pops the top node, pushes the
//! leftmost spine of that node's right child, and yields the popped key. That is `O(height)`
//! extra space and amortised `O(1)` work per key, and the traversal can stop at any point.

use std::iter::FusedIterator;

use crate::node::{dismantle, Link, Node};

/// Borrowing iterator returned by [`Tree::iter`][crate::tree::Tree::iter].
pub struct Iter<'a, K> {
    pending: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cur: Option<&'a Node<K>>) {
        while let Some(node) = cur {
            self.pending.push(node);
            cur = node.left();
        }
    }
}

impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
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

/// Owning iterator returned by `Tree::into_iter`. Keys are handed out in ascending order and
/// each node is freed as soon as its key is yielded.
pub struct IntoIter<K> {
    // Every node in here has already had its left child taken.
    pending: Vec<Box<Node<K>>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cur: Link<K>) {
        while let Some(mut node) = cur {
            cur = node.left_link_mut().take();
            self.pending.push(node);
        }
    }
}

impl<K> Drop for IntoIter<K> {
    fn drop(&mut self) {
        dismantle(self.pending.drain(..));
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.pending.pop()?;
        let (_, right) = node.take_children();
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(node.into_key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}
