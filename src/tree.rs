//! An owned BST over an ordered element type. Values double as keys, so the
//! tree behaves like an ordered set. The tree is built balanced from its
//! initial contents and drifts out of balance under mutation; [`Tree::balanced`]
//! detects the drift and [`Tree::rebalance`] rebuilds the tree from its sorted
//! contents.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::tree::Tree;
//!
//! let mut tree = Tree::from_values(vec![5, 3, 8, 1, 4, 7, 9]);
//!
//! // Inorder traversal of a BST is always sorted.
//! assert_eq!(tree.inorder(), [&1, &3, &4, &5, &7, &8, &9]);
//!
//! tree.insert(6);
//! tree.delete(&1);
//! assert_eq!(tree.inorder(), [&3, &4, &5, &6, &7, &8, &9]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::iter::FromIterator;

/// A single element holder with up to two child relations. Each `Node` is
/// exclusively owned by its parent slot (or by the [`Tree`] as the root), so
/// the node graph is always a finite tree.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node. Values are immutable once set; deletion
    /// replaces nodes wholesale instead of rewriting values in place.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if this node has exactly one child.
    pub fn has_one_child(&self) -> bool {
        self.left.is_some() != self.right.is_some()
    }

    /// Returns `true` if this node has both children.
    pub fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Returns `true` if this node has a left child.
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns `true` if this node has a right child.
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// The height of the subtree rooted at this node: the number of edges on
    /// the longest path from this node down to a leaf. A leaf has height 0.
    pub fn height(&self) -> isize {
        let left = self.left.as_deref().map_or(-1, Node::height);
        let right = self.right.as_deref().map_or(-1, Node::height);
        left.max(right) + 1
    }
}

/// A Binary Search Tree storing one copy of each distinct value. This can be
/// used for inserting, finding, and deleting values, traversing them in four
/// orders, and checking/restoring balance.
///
/// The tree never rebalances itself during `insert` or `delete`. Callers that
/// mutate heavily should call [`Tree::rebalance`] periodically.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// // Nothing in here yet.
    /// assert!(tree.find(&1).is_none());
    ///
    /// tree.insert(1);
    /// assert!(tree.find(&1).is_some());
    /// ```
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree from arbitrary input. Duplicates collapse
    /// to one occurrence and input order does not affect the resulting shape:
    /// the values are sorted, deduplicated, and then built by recursively
    /// splitting the sequence at its midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![8, 3, 8, 1, 5, 3]);
    ///
    /// assert_eq!(tree.inorder(), [&1, &3, &5, &8]);
    /// assert!(tree.balanced());
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort();
        values.dedup();
        Self {
            root: Self::build_balanced(values),
        }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts the given value as a new leaf. Inserting a value the tree
    /// already holds leaves the tree unchanged. No rebalancing occurs, so
    /// a run of inserts can leave the tree unbalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::from_values(vec![2, 1, 3]);
    ///
    /// tree.insert(4);
    /// assert_eq!(tree.inorder(), [&1, &2, &3, &4]);
    ///
    /// // Inserting an existing value is a no-op.
    /// tree.insert(2);
    /// assert_eq!(tree.inorder(), [&1, &2, &3, &4]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Equal => return,
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(Box::new(Node::new(value)));
    }

    /// Recursive implementation of [`Tree::insert`] with identical observable
    /// behavior.
    pub fn insert_recursive(&mut self, value: T)
    where
        T: Ord,
    {
        Self::insert_in(&mut self.root, value);
    }

    fn insert_in(slot: &mut Option<Box<Node<T>>>, value: T)
    where
        T: Ord,
    {
        match slot {
            None => *slot = Some(Box::new(Node::new(value))),
            Some(node) => match value.cmp(&node.value) {
                Ordering::Equal => {}
                Ordering::Less => Self::insert_in(&mut node.left, value),
                Ordering::Greater => Self::insert_in(&mut node.right, value),
            },
        }
    }

    /// Deletes the node holding the given value. Deleting a value the tree
    /// does not hold leaves the tree unchanged; deleting the only remaining
    /// value empties the tree.
    ///
    /// A leaf is detached, a node with one child is spliced out (its subtree
    /// moves up intact), and a node with two children is replaced by a node
    /// holding its inorder successor's value with the successor removed from
    /// its original slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::from_values(vec![5, 3, 8, 1, 4, 7, 9]);
    ///
    /// // The root holds 5 and has two children, so the inorder successor
    /// // (the smallest value greater than 5) takes its place.
    /// tree.delete(&5);
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(7));
    /// assert_eq!(tree.inorder(), [&1, &3, &4, &7, &8, &9]);
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        Self::delete_from(&mut self.root, value);
    }

    fn delete_from(slot: &mut Option<Box<Node<T>>>, value: &T)
    where
        T: Ord,
    {
        let node = match slot {
            Some(node) => node,
            None => return,
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::delete_from(&mut node.left, value),
            Ordering::Greater => Self::delete_from(&mut node.right, value),
            Ordering::Equal => Self::detach(slot),
        }
    }

    /// Removes the node currently occupying `slot`, applying the three
    /// structural deletion cases. Because the root is just another slot,
    /// root deletion needs no separate path.
    fn detach(slot: &mut Option<Box<Node<T>>>) {
        let node = match slot.take() {
            Some(node) => *node,
            None => return,
        };
        *slot = match (node.left, node.right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let successor = Self::detach_min(&mut right)
                    .expect("a node with two children has a non-empty right subtree");
                // The deleted node is replaced wholesale by a new node holding
                // the successor's value and the original children.
                Some(Box::new(Node {
                    value: successor,
                    left: Some(left),
                    right,
                }))
            }
        };
    }

    /// Detaches the leftmost node of the subtree in `slot` and returns its
    /// value. The leftmost node has no left child, so removing it is always
    /// the leaf or one-child case.
    fn detach_min(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
        let node = slot.as_mut()?;
        if node.left.is_some() {
            Self::detach_min(&mut node.left)
        } else {
            let node = *slot.take()?;
            *slot = node.right;
            Some(node.value)
        }
    }

    /// Potentially finds the node holding the given value. If no node holds
    /// it, `None` is returned. The tree is not mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|node| *node.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Recursive implementation of [`Tree::find`] with identical observable
    /// behavior.
    pub fn find_recursive(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        Self::find_in(self.root.as_deref(), value)
    }

    fn find_in<'a>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>>
    where
        T: Ord,
    {
        let node = node?;
        match value.cmp(&node.value) {
            Ordering::Equal => Some(node),
            Ordering::Less => Self::find_in(node.left.as_deref(), value),
            Ordering::Greater => Self::find_in(node.right.as_deref(), value),
        }
    }

    /// The number of edges from the root to the node holding the given value,
    /// or `-1` if the tree does not hold it.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.depth(&2), 0);
    /// assert_eq!(tree.depth(&3), 1);
    /// assert_eq!(tree.depth(&42), -1);
    /// ```
    pub fn depth(&self, value: &T) -> isize
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        let mut edges = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return edges,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
            edges += 1;
        }
        -1
    }

    /// The height of the tree: the number of edges on the longest path from
    /// the root to a leaf. An empty tree has height `-1` and a tree holding a
    /// single value has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// assert_eq!(Tree::<i32>::new().height(), -1);
    /// assert_eq!(Tree::from_values(vec![1]).height(), 0);
    /// assert_eq!(Tree::from_values(0..15).height(), 3);
    /// ```
    pub fn height(&self) -> isize {
        self.root.as_deref().map_or(-1, Node::height)
    }

    /// Returns the values in level order: breadth-first, the root first, each
    /// node's left child before its right child, layer by layer.
    pub fn level_order(&self) -> Vec<&T> {
        self.level_order_map(|value| value)
    }

    /// Level-order traversal with a per-value transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.level_order_map(|value| value * 10), [20, 10, 30]);
    /// ```
    pub fn level_order_map<'a, U, F>(&'a self, mut transform: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        let mut result = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
            result.push(transform(&node.value));
        }
        result
    }

    /// Returns the values in preorder: each node before its left subtree,
    /// then its right subtree.
    pub fn preorder(&self) -> Vec<&T> {
        self.preorder_map(|value| value)
    }

    /// Preorder traversal with a per-value transform.
    pub fn preorder_map<'a, U, F>(&'a self, mut transform: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        let mut result = Vec::new();
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            result.push(transform(&node.value));
            // Push right first so the left subtree is visited first.
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        result
    }

    /// Returns the values in inorder: left subtree, node, right subtree. For
    /// any valid BST this is ascending sorted order, balanced or not.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let tree = Tree::from_values(vec![8, 5, 1, 3]);
    ///
    /// assert_eq!(tree.inorder(), [&1, &3, &5, &8]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        self.inorder_map(|value| value)
    }

    /// Inorder traversal with a per-value transform.
    pub fn inorder_map<'a, U, F>(&'a self, mut transform: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        let mut result = Vec::new();
        Self::inorder_walk(self.root.as_deref(), &mut transform, &mut result);
        result
    }

    fn inorder_walk<'a, U, F>(node: Option<&'a Node<T>>, transform: &mut F, result: &mut Vec<U>)
    where
        F: FnMut(&'a T) -> U,
    {
        if let Some(node) = node {
            Self::inorder_walk(node.left.as_deref(), transform, result);
            result.push(transform(&node.value));
            Self::inorder_walk(node.right.as_deref(), transform, result);
        }
    }

    /// Returns the values in postorder: left subtree, right subtree, then the
    /// node itself.
    pub fn postorder(&self) -> Vec<&T> {
        self.postorder_map(|value| value)
    }

    /// Postorder traversal with a per-value transform.
    pub fn postorder_map<'a, U, F>(&'a self, mut transform: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        let mut result = Vec::new();
        Self::postorder_walk(self.root.as_deref(), &mut transform, &mut result);
        result
    }

    fn postorder_walk<'a, U, F>(node: Option<&'a Node<T>>, transform: &mut F, result: &mut Vec<U>)
    where
        F: FnMut(&'a T) -> U,
    {
        if let Some(node) = node {
            Self::postorder_walk(node.left.as_deref(), transform, result);
            Self::postorder_walk(node.right.as_deref(), transform, result);
            result.push(transform(&node.value));
        }
    }

    /// Checks whether the tree is balanced.
    ///
    /// Balance is judged at the root: collect, separately for the root's left
    /// and right child slots, the depths (counting nodes from the slot) at
    /// which leaf nodes occur, with an empty slot contributing the single
    /// depth 0. The tree is balanced iff `max - min <= 1` over the merged
    /// collection. The empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::from_values(0..15);
    /// assert!(tree.balanced());
    ///
    /// for value in 15..30 {
    ///     tree.insert(value);
    /// }
    /// assert!(!tree.balanced());
    /// ```
    pub fn balanced(&self) -> bool {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return true,
        };
        let mut depths = Vec::new();
        match root.left() {
            Some(left) => Self::leaf_depths(left, 0, &mut depths),
            None => depths.push(0),
        }
        match root.right() {
            Some(right) => Self::leaf_depths(right, 0, &mut depths),
            None => depths.push(0),
        }
        let max = depths.iter().max().expect("each slot contributes a depth");
        let min = depths.iter().min().expect("each slot contributes a depth");
        max - min <= 1
    }

    /// Records the depths of all leaves under `node`, counting nodes from the
    /// slot `node` occupies. Only leaves contribute; the missing child of a
    /// one-child node does not.
    fn leaf_depths(node: &Node<T>, depth: usize, depths: &mut Vec<usize>) {
        let depth = depth + 1;
        if node.is_leaf() {
            depths.push(depth);
            return;
        }
        if let Some(left) = node.left() {
            Self::leaf_depths(left, depth, depths);
        }
        if let Some(right) = node.right() {
            Self::leaf_depths(right, depth, depths);
        }
    }

    /// Rebalances the tree by rebuilding it from its sorted contents. If the
    /// tree is already balanced this is a no-op. The rebuild costs `O(n)`
    /// extra space for the drained values plus the reconstruction itself,
    /// traded for not carrying rotation bookkeeping on every mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::tree::Tree;
    ///
    /// let mut tree = Tree::from_values(0..15);
    /// for value in 15..30 {
    ///     tree.insert(value);
    /// }
    /// assert!(!tree.balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.balanced());
    /// assert_eq!(tree.inorder().len(), 30);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        if self.balanced() {
            return;
        }
        let mut values = Vec::new();
        Self::drain_inorder(self.root.take(), &mut values);
        self.root = Self::build_balanced(values);
    }

    /// Moves every value out of `node`'s subtree into `values` in ascending
    /// order, consuming the nodes.
    fn drain_inorder(node: Option<Box<Node<T>>>, values: &mut Vec<T>) {
        if let Some(node) = node {
            let node = *node;
            Self::drain_inorder(node.left, values);
            values.push(node.value);
            Self::drain_inorder(node.right, values);
        }
    }

    /// Builds a height-balanced subtree from sorted, unique values. The
    /// midpoint (`len / 2`, so the left half is the smaller one on even
    /// lengths) becomes the subtree root and each half recurses.
    fn build_balanced(mut values: Vec<T>) -> Option<Box<Node<T>>> {
        if values.is_empty() {
            return None;
        }
        let midpoint = values.len() / 2;
        let upper = values.split_off(midpoint + 1);
        let value = values.pop().expect("midpoint is in bounds of a non-empty vec");
        Some(Box::new(Node {
            value,
            left: Self::build_balanced(values),
            right: Self::build_balanced(upper),
        }))
    }
}
