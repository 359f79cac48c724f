//! A Binary Search Tree (BST) container for unique, comparable records.
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively using the notion of a `Node`. A `Node` owns
//! one record and up to two child `Node`s. The important invariants are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree hold
//!    records less than its own record.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree hold
//!    records greater than its own record.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Records equal to one already stored are rejected, so the invariants are
//! strict: every record appears at most once. Searching takes `O(height)`
//! (where `height` is the longest path from the root to a leaf), and an
//! in-order traversal visits records in ascending order.
//!
//! ## Rebalancing
//!
//! The tree never rebalances itself on insertion; inserting ascending records
//! degenerates into a linked list. Instead, [`BinaryTree::to_sorted_array`]
//! drains the tree into a fixed-capacity slot array in sorted order, and
//! [`BinaryTree::from_sorted_array`] rebuilds a height-balanced tree from it
//! by always inserting the midpoint of the remaining range first. Records are
//! moved, never copied, in both directions.
//!
//! # Examples
//!
//! ```
//! use bintree::{slots, BinaryTree};
//!
//! let mut tree = BinaryTree::new();
//! for animal in ["dog", "cat", "bird", "elephant", "ant"] {
//!     tree.insert(animal).unwrap();
//! }
//!
//! // In-order traversal is sorted regardless of insertion order.
//! assert_eq!(tree.to_string(), "ant bird cat dog elephant \n");
//!
//! // Round-trip through a sorted array to rebalance.
//! let mut slots = slots::vacant();
//! tree.to_sorted_array(&mut slots);
//! assert!(tree.is_empty());
//! tree.from_sorted_array(&mut slots);
//! assert_eq!(tree.height(&"cat"), 3);
//! ```

#![deny(missing_docs)]

pub mod slots;
pub mod tree;

#[cfg(test)]
pub(crate) mod test;

pub use crate::slots::{SlotArray, SLOT_COUNT};
pub use crate::tree::BinaryTree;
