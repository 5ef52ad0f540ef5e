//! This crate exposes a Binary Search Tree (BST) that balances itself
//! by full reconstruction rather than by incremental rotation.
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
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Balancing
//!
//! The tree here does not rebalance on every insert or delete. Instead it is
//! built balanced from a sorted sequence, is allowed to drift out of balance
//! under mutation, and offers [`Tree::balanced`][tree::Tree::balanced] to
//! detect the drift and [`Tree::rebalance`][tree::Tree::rebalance] to rebuild
//! the whole tree from its sorted contents. This trades an occasional `O(n)`
//! rebuild for the bookkeeping an AVL or red-black tree carries on every
//! mutation.

#![deny(missing_docs)]

pub mod pretty;
pub mod tree;
