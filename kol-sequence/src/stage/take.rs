use std::fmt;

use super::Stage;
use crate::puller::Puller;

/// Passes on at most `limit` of the parent's elements.
pub(crate) struct TakeStage<'a, E>
where
    E: Clone,
{
    parent: Box<Stage<'a, E>>,
    limit: usize,
    taken: usize,
}

impl<'a, E> TakeStage<'a, E>
where
    E: Clone,
{
    pub(crate) fn new(parent: Stage<'a, E>, limit: usize) -> Self {
        TakeStage {
            parent: Box::new(parent),
            limit,
            taken: 0,
        }
    }
}

impl<E> Puller for TakeStage<'_, E>
where
    E: Clone,
{
    type Item = E;

    fn pull(&mut self) -> Option<E> {
        // once the limit is reached the parent must not be pulled again
        if self.taken >= self.limit {
            return None;
        }
        let element = self.parent.pull()?;
        self.taken += 1;
        if self.taken == self.limit {
            log::trace!("take limit of {} reached", self.limit);
        }
        Some(element)
    }
}

impl<E> fmt::Display for TakeStage<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > take {}", self.parent, self.limit)
    }
}
