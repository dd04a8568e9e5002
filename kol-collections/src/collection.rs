use std::hash::Hash;

use crate::iterable::Iterable;

/// A mutable collection of elements.
///
/// The transforming operations (`filter`, `map`, `plus` and so on) never
/// touch the receiver; they produce a new collection of the same kind.
pub trait Collection<E>: Iterable<E> + Clone
where
    E: Eq + Hash + Clone,
{
    /// Add the given elements.
    fn add(&mut self, elements: impl IntoIterator<Item = E>);

    /// Remove all elements.
    fn clear(&mut self);

    /// Remove the given elements.
    fn remove(&mut self, targets: impl IntoIterator<Item = E>);

    /// Keep only the elements that are contained in `targets`.
    fn retain(&mut self, targets: impl IntoIterator<Item = E>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A collection containing only distinct elements.
    fn distinct(&self) -> Self;

    /// A collection containing only the elements matching the predicate.
    fn filter(&self, predicate: impl FnMut(&E) -> bool) -> Self;

    /// A collection containing the results of applying `transform` to each
    /// element.
    fn map(&self, transform: impl FnMut(&E) -> E) -> Self;

    /// A copy of this collection without the given elements.
    fn minus(&self, elements: impl IntoIterator<Item = E>) -> Self {
        let mut copy = self.clone();
        copy.remove(elements);
        copy
    }

    /// A copy of this collection with the given elements added.
    fn plus(&self, elements: impl IntoIterator<Item = E>) -> Self {
        let mut copy = self.clone();
        copy.add(elements);
        copy
    }
}
