//! Classic in-memory containers for keyed elements.
//!
//! ## Keyed elements
//!
//! The ordered containers here don't care what they store, only that each
//! element can report an integer key (see [`element::Keyed`]). Everything
//! else about an element rides along untouched.
//!
//! ## Heap
//!
//! [`heap::Heap`] is an array-backed binary heap. It is built as either a
//! min-heap or a max-heap and the root always holds the smallest (or largest)
//! key. Its one invariant is:
//!
//! 1. For every index `i` with a child `c`, `key(i) <= key(c)` for a
//!    min-heap (`>=` for a max-heap).
//!
//! Every operation runs under one lock, so a heap can be shared between
//! threads as is.
//!
//! ## Binary Search Tree
//!
//! [`tree::Tree`] is an unbalanced BST with parent links. Its invariants are:
//!
//! 1. For every node, all the nodes in its left subtree have a key strictly
//!    less than its own key.
//! 2. For every node, all the nodes in its right subtree have a key greater
//!    than or equal to its own key.
//!
//! Searching costs `O(height)`. Nothing keeps the height down, so sorted
//! input gives a list-shaped tree. Walking the tree in-order yields sorted
//! keys. The tree isn't synchronized.
//!
//! ## Queue and Stack
//!
//! [`queue::Queue`] and [`stack::Stack`] are plain FIFO/LIFO buffers over any
//! value, locked the same way the heap is.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod element;
mod error;
pub mod heap;
pub mod queue;
pub mod stack;
pub mod tree;

pub use error::{Error, Result};
