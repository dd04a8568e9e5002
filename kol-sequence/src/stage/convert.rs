use std::fmt;

use super::Stage;
use crate::puller::Puller;

/// Transforms each of the parent's elements into a different element type.
///
/// The result is type-erased before it joins a chain of the new element
/// type, since the parent's element type is not part of that chain.
pub(crate) struct ConvertStage<'a, E1, F>
where
    E1: Clone,
{
    parent: Box<Stage<'a, E1>>,
    transform: F,
}

impl<'a, E1, F> ConvertStage<'a, E1, F>
where
    E1: Clone,
{
    pub(crate) fn new(parent: Stage<'a, E1>, transform: F) -> Self {
        ConvertStage {
            parent: Box::new(parent),
            transform,
        }
    }
}

impl<E1, E2, F> Puller for ConvertStage<'_, E1, F>
where
    E1: Clone,
    F: FnMut(E1) -> E2,
{
    type Item = E2;

    #[inline]
    fn pull(&mut self) -> Option<E2> {
        self.parent.pull().map(&mut self.transform)
    }
}

impl<E1, F> fmt::Display for ConvertStage<'_, E1, F>
where
    E1: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > map", self.parent)
    }
}
