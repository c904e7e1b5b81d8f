//! Errors reported by [`Tree::check_invariants`][crate::Tree::check_invariants].
//!
//! None of the regular tree operations fail: absence and duplicates are reported through `bool`
//! and `Option` returns. These errors only describe a tree whose structure has been broken.

/// A violated structural invariant of a [`Tree`][crate::Tree].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantError {
    /// An in-order walk visited a value that did not compare greater than the one before it.
    /// `position` is the index of the offending value in ascending order.
    #[error("value at in-order position {position} is not greater than its predecessor")]
    OutOfOrder {
        /// Index of the offending value in the in-order sequence.
        position: usize,
    },
    /// The recorded size disagrees with the number of nodes reachable from the root.
    #[error("tree records {recorded} values but {reachable} are reachable from the root")]
    SizeMismatch {
        /// The size the tree reports through `len`.
        recorded: usize,
        /// The number of nodes actually linked below the root.
        reachable: usize,
    },
    /// Storage holds nodes that are not linked into the tree.
    #[error("{live} nodes are stored but only {reachable} are reachable from the root")]
    LeakedNodes {
        /// Number of live nodes in storage.
        live: usize,
        /// The number of nodes linked below the root.
        reachable: usize,
    },
    /// A child (or root) link names a node that no longer exists.
    #[error("a link refers to a removed node")]
    DanglingLink,
}
