//! An ordered set stored in an unbalanced BST. Nodes are kept in an arena and linked by id, and
//! the tree remembers where it last found (or placed) a value so that touching the same value
//! twice in a row only walks from the root once.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1), Some(&1));
//!
//! // Values are unique.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a value reports whether it was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::arena::{Arena, Node, NodeId, Side};
use crate::error::InvariantError;
use crate::stack::Stack;

const LIVE_LINKS: &str = "tree links only name live nodes";

/// A node's id together with the link that references it. `parent` is `None` for the root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Located {
    node: NodeId,
    parent: Option<(NodeId, Side)>,
}

/// A set of unique values kept in ascending order by an unbalanced Binary Search Tree.
///
/// All comparisons, including equality, go through [`Ord::cmp`].
#[derive(Clone)]
pub struct Tree<T> {
    arena: Arena<T>,
    root: Option<NodeId>,
    size: usize,
    /// The node last found by a search or placed by an insert. Cleared by every deletion and by
    /// `clear`. Holds ids only, so it never keeps a node alive.
    recent: Cell<Option<Located>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.walk_in_order(|value| {
            set.entry(value);
        })
        .map_err(|_| fmt::Error)?;
        set.finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generates a new, empty `Tree` with room for `capacity` values before its node storage
    /// has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            size: 0,
            recent: Cell::new(None),
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every value. The node storage is released in one go rather than by walking the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing tree of {} values", self.size);
        self.arena.clear();
        self.root = None;
        self.size = 0;
        self.recent.set(None);
    }

    /// The smallest value in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.outermost(Side::Left)
    }

    /// The largest value in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(3);
    /// tree.insert(1);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.outermost(Side::Right)
    }

    /// Copies every value out of the tree in ascending order. An empty tree yields an empty
    /// `Vec` without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.to_vec().is_empty());
    ///
    /// for x in [3, 1, 2] {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        if self.is_empty() {
            return Vec::new();
        }

        let mut values = Vec::with_capacity(self.size);
        self.walk_in_order(|value| values.push(value.clone())).expect(LIVE_LINKS);
        values
    }

    /// The number of nodes on the longest path from the root to a leaf. Zero for an empty tree.
    /// Nothing rebalances this tree, so inserting sorted values makes this equal to `len`.
    pub fn height(&self) -> usize {
        let mut stack = Stack::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }

        let mut height = 0;
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.arena.get(id).expect(LIVE_LINKS)
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.arena.get_mut(id).expect(LIVE_LINKS)
    }

    /// Follows `side` links from the root until there are none left.
    fn outermost(&self, side: Side) -> Option<&T> {
        let mut id = self.root?;
        while let Some(child) = self.node(id).child(side) {
            id = child;
        }
        Some(&self.node(id).value)
    }

    /// Visits every value in ascending order with an explicit stack, so the depth of the tree
    /// never touches the call stack. Returns how many values were visited.
    fn walk_in_order<'a>(
        &'a self,
        mut visit: impl FnMut(&'a T),
    ) -> Result<usize, InvariantError> {
        let mut stack = Stack::new();
        let mut cursor = self.root;
        let mut visited = 0;

        while cursor.is_some() || !stack.is_empty() {
            // Go as far left as possible, remembering the way back up.
            while let Some(id) = cursor {
                let node = self.arena.get(id).ok_or(InvariantError::DanglingLink)?;
                stack.push(node);
                cursor = node.left;
            }

            if let Some(node) = stack.pop() {
                visit(&node.value);
                visited += 1;
                cursor = node.right;
            }
        }

        Ok(visited)
    }

    /// Points whatever referenced a removed node (its parent's link, or the root) at `child`.
    fn relink(&mut self, link: Option<(NodeId, Side)>, child: Option<NodeId>) {
        match link {
            None => self.root = child,
            Some((parent, side)) => self.node_mut(parent).set_child(side, child),
        }
    }

    /// Removes an already unlinked node from storage and returns its value.
    fn detach(&mut self, id: NodeId) -> T {
        self.arena.remove(id).expect(LIVE_LINKS).value
    }

    /// Finds the leftmost node of the right subtree of `of` (whose right child is `right`),
    /// along with the link that references it.
    ///
    /// ```text
    ///      of                 of
    ///     /  \               /  \
    ///    a   right          a   right
    ///         \                 /
    ///          b              ...
    ///                         /
    ///   successor = right   successor (via Left)
    ///   (via of's Right)
    /// ```
    fn successor(&self, of: NodeId, right: NodeId) -> (NodeId, (NodeId, Side)) {
        let mut parent = of;
        let mut id = right;
        let mut side = Side::Right;
        while let Some(left) = self.node(id).left {
            parent = id;
            id = left;
            side = Side::Left;
        }
        (id, (parent, side))
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` unless an equal value is already present. Returns whether the tree
    /// changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.to_vec(), vec![1]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.recent_hit(&value).is_some() {
            return false;
        }

        let Some(mut parent) = self.root else {
            let root = self.arena.alloc(Node::new(value));
            self.root = Some(root);
            self.recent.set(Some(Located {
                node: root,
                parent: None,
            }));
            self.size += 1;
            trace!("inserted root");
            return true;
        };

        let side = loop {
            let node = self.node(parent);
            let side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            match node.child(side) {
                Some(child) => parent = child,
                None => break side,
            }
        };

        let leaf = self.arena.alloc(Node::new(value));
        self.node_mut(parent).set_child(side, Some(leaf));
        self.recent.set(Some(Located {
            node: leaf,
            parent: Some((parent, side)),
        }));
        self.size += 1;
        trace!("attached leaf on the {side:?} of its parent");

        if cfg!(debug_assertions) {
            let parent = &self.node(parent).value;
            let leaf = &self.node(leaf).value;
            let expected = match side {
                Side::Left => Ordering::Less,
                Side::Right => Ordering::Greater,
            };
            assert_eq!(leaf.cmp(parent), expected);
        }

        true
    }

    /// Potentially finds the stored value that compares equal to `value`. If no such value is
    /// present, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T> {
        self.locate(value).map(|located| &self.node(located.node).value)
    }

    /// Whether a value comparing equal to `value` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("b");
    ///
    /// assert!(tree.contains(&"b"));
    /// assert!(!tree.contains(&"a"));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    /// Deletes the value comparing equal to `value`. Returns whether anything was deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Deletes the value comparing equal to `value` and returns it.
    ///
    /// Depending on the shape around the node holding it:
    ///
    /// 1. A leaf is unlinked from its parent.
    /// 2. A node with one child is replaced, in its parent's link, by that child.
    /// 3. A node with two children stays where it is and takes the value of its in-order
    ///    successor (the leftmost node of its right subtree), which is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.take(&2), Some(2));
    /// assert_eq!(tree.take(&2), None);
    /// assert_eq!(tree.to_vec(), vec![1, 3]);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let Located { node: id, parent } = self.locate(value)?;

        let node = self.node(id);
        let removed = match (node.left, node.right) {
            (None, None) => {
                trace!("deleting leaf");
                self.relink(parent, None);
                self.detach(id)
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("deleting single-branch node");
                self.relink(parent, Some(child));
                self.detach(id)
            }
            (Some(_), Some(right)) => {
                let (successor, successor_link) = self.successor(id, right);
                trace!(
                    "deleting node with two children, successor linked on the {:?}",
                    successor_link.1
                );
                let orphan = self.node(successor).right;
                self.relink(Some(successor_link), orphan);
                let successor_value = self.detach(successor);
                std::mem::replace(&mut self.node_mut(id).value, successor_value)
            }
        };

        self.size -= 1;
        self.recent.set(None);
        Some(removed)
    }

    /// Verifies the structure of the tree: values strictly ascend in order, the recorded size
    /// matches the reachable nodes, no stored node is unreachable and no link dangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8, 1, 4] {
    ///     tree.insert(x);
    /// }
    /// tree.delete(&3);
    ///
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut previous: Option<&T> = None;
        let mut position = 0;
        let mut out_of_order = None;
        let reachable = self.walk_in_order(|value| {
            let descends =
                matches!(previous, Some(previous) if previous.cmp(value) != Ordering::Less);
            if descends && out_of_order.is_none() {
                out_of_order = Some(position);
            }
            previous = Some(value);
            position += 1;
        })?;

        if let Some(position) = out_of_order {
            return Err(InvariantError::OutOfOrder { position });
        }
        if reachable != self.size {
            return Err(InvariantError::SizeMismatch {
                recorded: self.size,
                reachable,
            });
        }
        if self.arena.len() != reachable {
            return Err(InvariantError::LeakedNodes {
                live: self.arena.len(),
                reachable,
            });
        }
        Ok(())
    }

    /// The cached node, if it is still alive and holds a value equal to `value`.
    fn recent_hit(&self, value: &T) -> Option<Located> {
        let recent = self.recent.get()?;
        let node = self.arena.get(recent.node)?;
        match value.cmp(&node.value) {
            Ordering::Equal => {
                trace!("recent node cache hit");
                Some(recent)
            }
            _ => None,
        }
    }

    /// Finds the node holding a value equal to `value` and the link referencing it, checking
    /// the recently touched node first. A hit becomes the new recently touched node.
    fn locate(&self, value: &T) -> Option<Located> {
        if let Some(hit) = self.recent_hit(value) {
            return Some(hit);
        }

        let mut id = self.root?;
        let mut parent = None;
        loop {
            let node = self.node(id);
            let side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let located = Located { node: id, parent };
                    self.recent.set(Some(located));
                    return Some(located);
                }
            };
            parent = Some((id, side));
            id = node.child(side)?;
        }
    }
}
