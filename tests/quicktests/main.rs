use quickcheck::{Arbitrary, Gen};
use simplelog::{Config, LevelFilter, TestLogger};

mod tree;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
    /// Search for the value
    Search(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Search(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Routes the tree's `trace!` output through the test harness. Only the first call in a test
/// binary installs the logger, the rest are no-ops.
pub(crate) fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
