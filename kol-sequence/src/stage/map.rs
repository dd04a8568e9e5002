use std::fmt;

use super::Stage;
use crate::puller::Puller;

/// Transforms each of the parent's elements, keeping the element type.
pub(crate) struct MapStage<'a, E>
where
    E: Clone,
{
    parent: Box<Stage<'a, E>>,
    transform: Box<dyn FnMut(E) -> E + 'a>,
}

impl<'a, E> MapStage<'a, E>
where
    E: Clone,
{
    pub(crate) fn new(parent: Stage<'a, E>, transform: impl FnMut(E) -> E + 'a) -> Self {
        MapStage {
            parent: Box::new(parent),
            transform: Box::new(transform),
        }
    }
}

impl<E> Puller for MapStage<'_, E>
where
    E: Clone,
{
    type Item = E;

    #[inline]
    fn pull(&mut self) -> Option<E> {
        self.parent.pull().map(&mut self.transform)
    }
}

impl<E> fmt::Display for MapStage<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > map", self.parent)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::stage::tests::{assert_idempotent_exhaustion, counted, drain, source};

    #[test]
    fn test_map() {
        let mut stage: Stage<'_, i32> = MapStage::new(source(&[1, 2, 3, 3]), |e| e * 2).into();
        assert_eq!(drain(&mut stage), vec![2, 4, 6, 6]);
    }

    #[test]
    fn test_one_parent_pull_per_pull() {
        let pulls = Cell::new(0);
        let mut stage: Stage<'_, i32> =
            MapStage::new(counted(source(&[1, 2, 3]), &pulls), |e| e + 1).into();
        assert_eq!(stage.pull(), Some(2));
        assert_eq!(pulls.get(), 1);
        assert_eq!(stage.pull(), Some(3));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut stage: Stage<'_, i32> = MapStage::new(source(&[1, 2]), |e| -e).into();
        assert_idempotent_exhaustion(&mut stage);
    }
}
