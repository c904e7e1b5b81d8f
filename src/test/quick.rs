use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
    /// Look the value up (twice, to go through the recent node cache)
    Contains(T),
    /// Compare in-order contents
    Iter,
    /// Empty the data structure
    Clear,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Clearing is rare so that trees
    /// get a chance to grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 2, 3, 4]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Contains(T::arbitrary(g)),
            3 => Op::Iter,
            4 => Op::Clear,
            _ => unreachable!(),
        }
    }
}
