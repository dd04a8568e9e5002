use std::{fmt, hash::Hash};

use ahash::{HashSet, HashSetExt};

use super::Stage;
use crate::puller::Puller;

/// Passes on the first occurrence of each of the parent's elements.
pub(crate) struct DistinctStage<'a, E>
where
    E: Clone,
{
    parent: Box<Stage<'a, E>>,
    seen: HashSet<E>,
    // resolved where `E: Eq + Hash` is known, so the stage enum needn't
    // carry those bounds
    insert: fn(&mut HashSet<E>, &E) -> bool,
}

fn insert<E>(seen: &mut HashSet<E>, element: &E) -> bool
where
    E: Eq + Hash + Clone,
{
    if seen.contains(element) {
        return false;
    }
    seen.insert(element.clone())
}

impl<'a, E> DistinctStage<'a, E>
where
    E: Clone,
{
    pub(crate) fn new(parent: Stage<'a, E>) -> Self
    where
        E: Eq + Hash,
    {
        DistinctStage {
            parent: Box::new(parent),
            seen: HashSet::new(),
            insert: insert::<E>,
        }
    }
}

impl<E> Puller for DistinctStage<'_, E>
where
    E: Clone,
{
    type Item = E;

    fn pull(&mut self) -> Option<E> {
        loop {
            let element = self.parent.pull()?;
            if (self.insert)(&mut self.seen, &element) {
                return Some(element);
            }
        }
    }
}

impl<E> fmt::Display for DistinctStage<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > distinct", self.parent)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::stage::tests::{assert_idempotent_exhaustion, counted, drain, source};

    #[test]
    fn test_distinct_keeps_first_occurrence_order() {
        let mut stage: Stage<'_, i32> = DistinctStage::new(source(&[3, 1, 3, 2, 1, 4])).into();
        assert_eq!(drain(&mut stage), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_distinct_strings() {
        let elements = ["a", "b", "a", "c", "b"].map(String::from);
        let mut stage: Stage<'_, String> = DistinctStage::new(source(&elements)).into();
        assert_eq!(drain(&mut stage), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_distinct_pulls_only_as_needed() {
        let pulls = Cell::new(0);
        let mut stage: Stage<'_, i32> =
            DistinctStage::new(counted(source(&[1, 1, 1, 2, 3]), &pulls)).into();
        assert_eq!(stage.pull(), Some(1));
        assert_eq!(pulls.get(), 1);
        assert_eq!(stage.pull(), Some(2));
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut stage: Stage<'_, i32> = DistinctStage::new(source(&[1, 1, 2])).into();
        assert_idempotent_exhaustion(&mut stage);
    }
}
