//! An unbalanced, mutable BST. Each node owns its children through a `Box` so the whole tree is
//! a plain recursive sum type: no parent pointers, no `unsafe`, and no way to build a cycle.
//!
//! Nothing here rebalances, so inserting keys in sorted order degrades the tree into a list. To
//! keep that from overflowing the call stack every operation walks the tree with a loop (or an
//! explicit stack) rather than recursion.
//!
//! # Examples
//!
//! ```
//! use movie_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1), Some(&1));
//!
//! // Inserting the same key again is ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a key hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.search(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::iter::{IntoIter, Iter};
use crate::node::{dismantle, Link, Node};

/// A Binary Search Tree storing distinct keys in ascending order.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Copies the tree node for node, so the clone has the same shape as the original.
    fn clone(&self) -> Self {
        let mut root = None;
        {
            let mut pending: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
            if let Some(node) = self.root.as_deref() {
                pending.push((node, &mut root));
            }
            while let Some((node, link)) = pending.pop() {
                let copy = link.insert(Node::new_boxed(node.key().clone()));
                let (left, right) = copy.links_mut();
                if let Some(child) = node.left() {
                    pending.push((child, left));
                }
                if let Some(child) = node.right() {
                    pending.push((child, right));
                }
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        dismantle(self.root.take());
        self.len = 0;
    }

    /// The key stored at the root, if any. Mostly useful for checking the shape of the tree.
    pub fn root(&self) -> Option<&K> {
        self.root.as_deref().map(Node::key)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            if node.is_leaf() {
                height = height.max(depth);
                continue;
            }
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// An iterator over the keys of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Renders every key in ascending order separated by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [20, 10, 30].into_iter().collect();
    /// assert_eq!(tree.inorder(), "10 20 30");
    ///
    /// assert_eq!(Tree::<i32>::new().inorder(), "");
    /// ```
    pub fn inorder(&self) -> String
    where
        K: fmt::Display,
    {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Potentially finds the stored key equal to `key`. If no node has an equal key, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(node.key()) {
                Ordering::Less => cur = node.left(),
                Ordering::Equal => return Some(node.key()),
                Ordering::Greater => cur = node.right(),
            }
        }
        None
    }

    /// Whether a key equal to `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts `key` unless an equal key is already present, in which case the tree is left
    /// untouched. Returns whether the key was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(node.key()) {
                Ordering::Less => link = node.left_link_mut(),
                Ordering::Equal => return false,
                Ordering::Greater => link = node.right_link_mut(),
            }
        }
        *link = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Removes the node holding a key equal to `key` and returns the key it held. If the tree
    /// does not contain such a key, nothing happens.
    ///
    /// A node with two children is not unlinked. Instead its in-order successor (the leftmost
    /// node of its right subtree) is unlinked and its key moves into the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70, 60, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&50), Some(50));
    /// assert_eq!(tree.root(), Some(&60));
    /// assert_eq!(tree.remove(&50), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        loop {
            match link.as_deref().map(|node| key.cmp(node.key())) {
                None => return None,
                Some(Ordering::Equal) => break,
                Some(Ordering::Less) => {
                    link = link
                        .as_mut()
                        .expect("Comparing against a node implies a node")
                        .left_link_mut()
                }
                Some(Ordering::Greater) => {
                    link = link
                        .as_mut()
                        .expect("Comparing against a node implies a node")
                        .right_link_mut()
                }
            }
        }

        let removed = unlink(link);
        self.len -= 1;
        Some(removed)
    }
}

/// Removes the node at `link` (which must be non-empty) from the tree and returns its key.
fn unlink<K>(link: &mut Link<K>) -> K {
    let mut node = link.take().expect("Unlinking requires a node");
    match node.take_children() {
        (None, right) => {
            *link = right;
            node.into_key()
        }
        (left, None) => {
            *link = left;
            node.into_key()
        }
        (left, mut right) => {
            let successor = take_leftmost(&mut right);
            let removed = node.replace_key(successor);
            node.set_children(left, right);
            *link = Some(node);
            removed
        }
    }
}

/// Unlinks the leftmost node of the non-empty subtree at `link`, replacing it with its right
/// subtree, and returns its key.
fn take_leftmost<K>(mut link: &mut Link<K>) -> K {
    while link.as_deref().map_or(false, |node| node.left().is_some()) {
        link = link
            .as_mut()
            .expect("A node with a left child is a node")
            .left_link_mut();
    }
    let mut leftmost = link.take().expect("Leftmost of a non-empty subtree");
    let (_, right) = leftmost.take_children();
    *link = right;
    leftmost.into_key()
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        self.len = 0;
        IntoIter::new(self.root.take(), len)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
