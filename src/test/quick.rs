use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a linked list in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum ListOp<T> {
    /// Push the value onto the end of the list
    Append(T),
    /// Push the value onto the front of the list
    Prepend(T),
    /// Remove every element equal to the value
    DeleteAll(T),
}

impl<T> Arbitrary for ListOp<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match *g.choose(&[0, 1, 2]).unwrap() {
            0 => ListOp::Append(T::arbitrary(g)),
            1 => ListOp::Prepend(T::arbitrary(g)),
            2 => ListOp::DeleteAll(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum TreeOp<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Delete the value from the tree
    Delete(T),
}

impl<T> Arbitrary for TreeOp<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match *g.choose(&[0, 1]).unwrap() {
            0 => TreeOp::Insert(T::arbitrary(g)),
            1 => TreeOp::Delete(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
