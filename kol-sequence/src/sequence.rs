use std::{borrow::Cow, fmt, hash::Hash};

use kol_collections::List;

use crate::{
    puller::Puller,
    source::SourcePuller,
    stage::{
        ConvertStage, DistinctStage, DropStage, ErasedStage, FilterStage, MapStage, Stage,
        TakeStage,
    },
};

/// A lazily evaluated, single-pass sequence of elements.
///
/// Building operations (`filter`, `map`, `distinct`, `take`, `drop`) only
/// describe the pipeline; nothing is evaluated until a terminal operation
/// such as [`Sequence::to_vec`] pulls elements through it, or the sequence
/// is iterated. Each building operation consumes the sequence it's called
/// on, so a pipeline always has exactly one owner.
///
/// A sequence is a stateful stream rather than a restartable view: the
/// elements pulled through it are gone. To consume part of a sequence and
/// carry on later, iterate it with [`IntoIterator`] and keep the iterator.
pub struct Sequence<'a, E>
where
    E: Clone,
{
    head: Stage<'a, E>,
}

impl<'a, E> Sequence<'a, E>
where
    E: Clone,
{
    /// A sequence that owns its elements.
    pub fn new(elements: impl Into<Vec<E>>) -> Self {
        Self::from_stage(SourcePuller::new(Cow::Owned(elements.into())).into())
    }

    /// A sequence over borrowed elements; each one is cloned as it's pulled.
    pub fn from_slice(elements: &'a [E]) -> Self {
        Self::from_stage(SourcePuller::new(Cow::Borrowed(elements)).into())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn from_stage(head: Stage<'a, E>) -> Self {
        Sequence { head }
    }

    pub(crate) fn into_stage(self) -> Stage<'a, E> {
        self.head
    }

    /// Keep only the elements matching the predicate.
    pub fn filter(self, predicate: impl FnMut(&E) -> bool + 'a) -> Self {
        Self::from_stage(FilterStage::new(self.head, predicate).into())
    }

    /// Transform each element. Use [`map_sequence`] to change the element
    /// type.
    pub fn map(self, transform: impl FnMut(E) -> E + 'a) -> Self {
        Self::from_stage(MapStage::new(self.head, transform).into())
    }

    /// Keep only the first occurrence of each element.
    pub fn distinct(self) -> Self
    where
        E: Eq + Hash,
    {
        Self::from_stage(DistinctStage::new(self.head).into())
    }

    /// Keep at most the first `n` elements.
    pub fn take(self, n: usize) -> Self {
        Self::from_stage(TakeStage::new(self.head, n).into())
    }

    /// Skip the first `n` elements.
    pub fn drop(self, n: usize) -> Self {
        Self::from_stage(DropStage::new(self.head, n).into())
    }

    /// Evaluate the whole pipeline, collecting the elements in the order
    /// they're produced.
    pub fn to_vec(mut self) -> Vec<E> {
        let mut elements = Vec::new();
        while let Some(element) = self.head.pull() {
            elements.push(element);
        }
        log::trace!(
            "materialized {} elements from {}",
            elements.len(),
            self.head
        );
        elements
    }

    /// Evaluate the whole pipeline into a [`List`].
    pub fn to_list(self) -> List<E> {
        self.to_vec().into()
    }
}

/// Transform each element of `sequence` into a possibly different type.
///
/// ```
/// use kol_sequence::{map_sequence, sequence};
///
/// let strings = map_sequence(sequence![1, 2, 3], |e: i32| e.to_string()).to_vec();
/// assert_eq!(strings, vec!["1", "2", "3"]);
/// ```
pub fn map_sequence<'a, E1, E2>(
    sequence: Sequence<'a, E1>,
    transform: impl FnMut(E1) -> E2 + 'a,
) -> Sequence<'a, E2>
where
    E1: Clone + 'a,
    E2: Clone,
{
    let stage: Box<dyn ErasedStage<E2> + 'a> =
        Box::new(ConvertStage::new(sequence.head, transform));
    Sequence::from_stage(Stage::Convert(stage))
}

impl<E> Default for Sequence<'_, E>
where
    E: Clone,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> From<Vec<E>> for Sequence<'_, E>
where
    E: Clone,
{
    fn from(elements: Vec<E>) -> Self {
        Self::new(elements)
    }
}

impl<'a, E> From<&'a [E]> for Sequence<'a, E>
where
    E: Clone,
{
    fn from(elements: &'a [E]) -> Self {
        Self::from_slice(elements)
    }
}

impl<E> From<List<E>> for Sequence<'_, E>
where
    E: Clone,
{
    fn from(list: List<E>) -> Self {
        Self::new(list.into_vec())
    }
}

impl<'a, E> From<&'a List<E>> for Sequence<'a, E>
where
    E: Clone,
{
    fn from(list: &'a List<E>) -> Self {
        Self::from_slice(list.as_slice())
    }
}

impl<E> FromIterator<E> for Sequence<'_, E>
where
    E: Clone,
{
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<E> fmt::Display for Sequence<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.head, f)
    }
}

impl<E> fmt::Debug for Sequence<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("pipeline", &self.head.to_string())
            .finish()
    }
}
