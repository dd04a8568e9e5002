use std::fmt;

use super::Stage;
use crate::puller::Puller;

/// Passes on only the parent's elements that match the predicate.
pub(crate) struct FilterStage<'a, E>
where
    E: Clone,
{
    parent: Box<Stage<'a, E>>,
    predicate: Box<dyn FnMut(&E) -> bool + 'a>,
}

impl<'a, E> FilterStage<'a, E>
where
    E: Clone,
{
    pub(crate) fn new(parent: Stage<'a, E>, predicate: impl FnMut(&E) -> bool + 'a) -> Self {
        FilterStage {
            parent: Box::new(parent),
            predicate: Box::new(predicate),
        }
    }
}

impl<E> Puller for FilterStage<'_, E>
where
    E: Clone,
{
    type Item = E;

    fn pull(&mut self) -> Option<E> {
        // skip rejected elements until one matches or the parent runs dry
        loop {
            let element = self.parent.pull()?;
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
    }
}

impl<E> fmt::Display for FilterStage<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > filter", self.parent)
    }
}
