//! This crate exposes an ordered set backed by an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does no rebalancing, so inserting
//! values in sorted order degrades it to a linked list of height `N`. Every walk in this crate
//! is therefore iterative.
//!
//! ## Recently touched node
//!
//! The [`Tree`] remembers the last node found by [`Tree::search`], [`Tree::contains`] or placed
//! by [`Tree::insert`]. Asking about the same value again (e.g. check-then-delete) skips the walk
//! from the root entirely.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [10, 8, 12, 16, 20, 18, 9, 4, 14, 19] {
//!     assert!(tree.insert(x));
//! }
//!
//! assert_eq!(tree.to_vec(), vec![4, 8, 9, 10, 12, 14, 16, 18, 19, 20]);
//! assert_eq!(tree.min(), Some(&4));
//! assert_eq!(tree.max(), Some(&20));
//!
//! // No duplicates.
//! assert!(!tree.insert(12));
//!
//! if tree.contains(&10) {
//!     assert!(tree.delete(&10));
//! }
//! assert_eq!(tree.len(), 9);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod error;
mod stack;
#[cfg(test)]
mod test;
pub mod tree;

pub use error::InvariantError;
pub use tree::Tree;
