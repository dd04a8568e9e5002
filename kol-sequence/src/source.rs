use std::{borrow::Cow, fmt};

use crate::puller::Puller;

/// The leaf of every chain: walks an ordered run of elements by index.
///
/// The elements are either borrowed from the caller or owned by the puller.
pub(crate) struct SourcePuller<'a, E>
where
    E: Clone,
{
    elements: Cow<'a, [E]>,
    cursor: usize,
}

impl<'a, E> SourcePuller<'a, E>
where
    E: Clone,
{
    pub(crate) fn new(elements: Cow<'a, [E]>) -> Self {
        SourcePuller {
            elements,
            cursor: 0,
        }
    }
}

impl<E> Puller for SourcePuller<'_, E>
where
    E: Clone,
{
    type Item = E;

    fn pull(&mut self) -> Option<E> {
        let element = self.elements.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(element)
    }
}

impl<E> fmt::Display for SourcePuller<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source {}/{}", self.cursor, self.elements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_in_order() {
        let mut source = SourcePuller::new(Cow::Borrowed(&[1, 2, 3]));
        assert_eq!(source.pull(), Some(1));
        assert_eq!(source.pull(), Some(2));
        assert_eq!(source.pull(), Some(3));
        assert_eq!(source.pull(), None);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut source = SourcePuller::new(Cow::Owned(vec![1]));
        assert_eq!(source.pull(), Some(1));
        for _ in 0..3 {
            assert_eq!(source.pull(), None);
        }
        assert_eq!(source.to_string(), "source 1/1");
    }

    #[test]
    fn test_empty() {
        let mut source = SourcePuller::<i32>::new(Cow::Owned(vec![]));
        assert_eq!(source.pull(), None);
        assert_eq!(source.to_string(), "source 0/0");
    }
}
