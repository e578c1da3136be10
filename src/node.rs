//! The building block of a [`Tree`][crate::tree::Tree].

use std::mem;

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single cell of the tree. A `Node` exclusively owns both of its subtrees so there is no way
/// to build a cycle or to reach a node from two places.
pub(crate) struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    /// A boxed node with no children, ready to be hung off a [`Link`].
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    /// Puts `key` in this node and returns the key it held before.
    pub(crate) fn replace_key(&mut self, key: K) -> K {
        mem::replace(&mut self.key, key)
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_link_mut(&mut self) -> &mut Link<K> {
        &mut self.left
    }

    pub(crate) fn right_link_mut(&mut self) -> &mut Link<K> {
        &mut self.right
    }

    /// Both child links at once, for building a tree top-down.
    pub(crate) fn links_mut(&mut self) -> (&mut Link<K>, &mut Link<K>) {
        (&mut self.left, &mut self.right)
    }

    /// Detaches both subtrees, leaving this node a leaf.
    pub(crate) fn take_children(&mut self) -> (Link<K>, Link<K>) {
        (self.left.take(), self.right.take())
    }

    pub(crate) fn set_children(&mut self, left: Link<K>, right: Link<K>) {
        self.left = left;
        self.right = right;
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Drops every node reachable from `links` without recursing, so a degenerate (list shaped)
/// subtree can't blow the call stack the way the default `Box` drop glue would.
pub(crate) fn dismantle<K>(links: impl IntoIterator<Item = Box<Node<K>>>) {
    let mut pending: Vec<Box<Node<K>>> = links.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        let (left, right) = node.take_children();
        pending.extend(left);
        pending.extend(right);
    }
}
