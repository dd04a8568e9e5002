use std::fmt;

use super::Stage;
use crate::puller::Puller;

/// Discards the first `limit` of the parent's elements and passes on the
/// rest.
pub(crate) struct DropStage<'a, E>
where
    E: Clone,
{
    parent: Box<Stage<'a, E>>,
    limit: usize,
    dropped: usize,
}

impl<'a, E> DropStage<'a, E>
where
    E: Clone,
{
    pub(crate) fn new(parent: Stage<'a, E>, limit: usize) -> Self {
        DropStage {
            parent: Box::new(parent),
            limit,
            dropped: 0,
        }
    }
}

impl<E> Puller for DropStage<'_, E>
where
    E: Clone,
{
    type Item = E;

    fn pull(&mut self) -> Option<E> {
        while self.dropped < self.limit {
            self.parent.pull()?;
            self.dropped += 1;
        }
        self.parent.pull()
    }
}

impl<E> fmt::Display for DropStage<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > drop {}", self.parent, self.limit)
    }
}
