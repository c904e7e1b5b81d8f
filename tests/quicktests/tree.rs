use ordered_tree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in the same order.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
        Op::Remove(x) => tree.delete(x) == set.remove(x),
        Op::Search(x) => tree.search(x) == set.get(x),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.to_vec() == set.iter().cloned().collect::<Vec<_>>()
        && tree.len() == set.len()
        && tree.check_invariants().is_ok()
}

#[quickcheck]
fn round_trip_is_sorted(xs: HashSet<i32>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let mut sorted: Vec<_> = xs.into_iter().collect();
    sorted.sort_unstable();
    tree.to_vec() == sorted
}

#[quickcheck]
fn size_matches_contents(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    tree.len() == tree.to_vec().len()
}

#[quickcheck]
fn duplicates_are_rejected(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.to_vec();

    xs.iter().all(|x| !tree.insert(*x)) && tree.to_vec() == before
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        let len = tree.len();
        let present = tree.contains(delete);
        let deleted = tree.delete(delete);
        if deleted != present || tree.len() != len - usize::from(deleted) {
            return false;
        }
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    let mut still_present: Vec<_> = xs.iter().filter(|x| !deleted.contains(x)).copied().collect();
    still_present.sort_unstable();
    still_present.dedup();

    deletes.iter().all(|x| !tree.contains(x))
        && tree.to_vec() == still_present
        && tree.check_invariants().is_ok()
}

#[quickcheck]
fn repeated_lookups_agree(xs: Vec<i8>, queries: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    queries.iter().all(|x| {
        let once = tree.contains(x);
        let found = tree.search(x).copied();
        once == tree.contains(x) && found == tree.search(x).copied()
    })
}

#[quickcheck]
fn min_and_max_match_ends(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}
