use std::iter::FusedIterator;

use crate::{puller::Puller, sequence::Sequence, stage::Stage};

/// An iterator pulling the elements of a [`Sequence`] one at a time.
///
/// Each call to `next` pulls exactly one element through the pipeline.
/// Dropping the iterator early leaves the rest of the elements unproduced;
/// keeping it lets a caller resume where it left off.
pub struct SequenceIter<'a, E>
where
    E: Clone,
{
    head: Stage<'a, E>,
}

impl<E> Iterator for SequenceIter<'_, E>
where
    E: Clone,
{
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.head.pull()
    }
}

// every stage keeps returning `None` once exhausted
impl<E> FusedIterator for SequenceIter<'_, E> where E: Clone {}

impl<'a, E> IntoIterator for Sequence<'a, E>
where
    E: Clone,
{
    type Item = E;
    type IntoIter = SequenceIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIter {
            head: self.into_stage(),
        }
    }
}
