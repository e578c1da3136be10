//! An ordered key container built on an (unbalanced) Binary Search Tree, plus a small command
//! interpreter that keeps a catalogue of movies in one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. [`tree::Tree`] does no rebalancing
//! so the height depends entirely on insertion order: random orders give
//! `O(lg N)` on average while sorted input degrades into a list of height `N`.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Commands
//!
//! [`interpreter::Interpreter`] reads lines such as `insert,Titanic,1997,7.8,1100000`,
//! applies them to a `Tree<Movie>` and writes one result line per command. See
//! [`command`] for the accepted syntax.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod interpreter;
pub mod iter;
pub mod movie;
mod node;
pub mod tree;

pub use error::{CommandError, Error};
pub use movie::Movie;
pub use tree::Tree;
