//! Node storage for [`Tree`][crate::Tree].
//!
//! Nodes live in a dense `Vec` of slots and refer to their children by [`NodeId`] rather than by
//! pointer. Each slot carries a generation which is bumped whenever the slot is vacated, so an id
//! that outlived its node (for example one held by the tree's recently-touched cache) resolves to
//! `None` instead of to whichever node reused the slot.

/// Which child pointer of a parent references a given node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A handle to a slot in an [`Arena`]. Only valid while the slot's generation matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeId {
    index: usize,
    generation: u32,
}

/// A `Node` has a value and up to two children. The children are reachable only through these
/// links, so unlinking a child is what removes its subtree from the tree.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, link: Option<NodeId>) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Generation-tagged slot storage. Vacated slots are recycled through a free list.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `node` in a vacated slot if there is one, otherwise in a new slot at the end.
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                debug_assert!(slot.node.is_none(), "free list held a live slot");
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Vacates the slot named by `id` and hands back its node. Any copy of `id` is dead after this.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<Node<T>> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;

        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node)
    }

    /// Drops every node at once. Ids handed out before this must not be used afterwards since
    /// slot numbering starts over.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}
