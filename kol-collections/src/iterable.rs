use std::hash::Hash;

use crate::{error, List, Set};

/// The core collection interface: a collection must implement this to
/// function.
///
/// If you do, `Iterable` provides a whole set of query APIs on top of it.
pub trait Iterable<E>
where
    E: Eq + Hash + Clone,
{
    type Iter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    /// Get the elements of the collection as an iterator
    fn iter(&self) -> Self::Iter<'_>;

    /// `true` if every element matches the predicate.
    ///
    /// An empty collection is falsy: it has no element that matches.
    fn all(&self, mut predicate: impl FnMut(&E) -> bool) -> bool {
        let mut iter = self.iter().peekable();
        if iter.peek().is_none() {
            return false;
        }
        iter.all(|e| predicate(e))
    }

    /// `true` if at least one element matches the predicate.
    fn any(&self, mut predicate: impl FnMut(&E) -> bool) -> bool {
        self.iter().any(|e| predicate(e))
    }

    /// `true` if the element is in the collection.
    fn contains(&self, element: &E) -> bool {
        self.iter().any(|e| e == element)
    }

    /// The number of elements matching the predicate.
    fn count(&self, mut predicate: impl FnMut(&E) -> bool) -> usize {
        self.iter().filter(|&e| predicate(e)).count()
    }

    /// The first element matching the predicate, if any.
    fn find(&self, mut predicate: impl FnMut(&E) -> bool) -> Option<&E> {
        self.iter().find(|&e| predicate(e))
    }

    fn for_each(&self, action: impl FnMut(&E)) {
        self.iter().for_each(action)
    }

    /// `true` if no element matches the predicate.
    fn none(&self, predicate: impl FnMut(&E) -> bool) -> bool {
        !self.any(predicate)
    }

    /// The one element matching the predicate.
    ///
    /// It's an error if there is no match, or if there is more than one.
    fn single(&self, mut predicate: impl FnMut(&E) -> bool) -> error::Result<&E> {
        one(self.iter().filter(|&e| predicate(e)))
    }

    fn to_vec(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }

    fn to_list(&self) -> List<E> {
        self.iter().cloned().collect()
    }

    fn to_set(&self) -> Set<E> {
        self.iter().cloned().collect()
    }

    /// The elements contained by both this collection and `other`.
    fn intersect<I>(&self, other: &I) -> Set<E>
    where
        I: Iterable<E> + ?Sized,
    {
        let other = other.to_set();
        self.iter()
            .filter(|&e| other.contains(e))
            .cloned()
            .collect()
    }

    /// The elements of this collection that are not contained by `other`.
    fn subtract<I>(&self, other: &I) -> Set<E>
    where
        I: Iterable<E> + ?Sized,
    {
        let other = other.to_set();
        self.iter()
            .filter(|&e| !other.contains(e))
            .cloned()
            .collect()
    }

    /// All distinct elements of both collections.
    fn union<I>(&self, other: &I) -> Set<E>
    where
        I: Iterable<E> + ?Sized,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

fn one<T>(mut iter: impl Iterator<Item = T>) -> error::Result<T> {
    if let Some(one) = iter.next() {
        if iter.next().is_none() {
            Ok(one)
        } else {
            Err(error::Error::MultipleElements)
        }
    } else {
        Err(error::Error::NoSuchElement)
    }
}
