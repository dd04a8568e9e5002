use std::hash::Hash;

use ahash::{HashSet, HashSetExt};
use rand::{seq::SliceRandom, Rng};

use crate::{collection::Collection, iterable::Iterable};

/// An ordered collection of elements, backed by a vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct List<E> {
    elements: Vec<E>,
}

impl<E> List<E> {
    pub fn new() -> Self {
        List {
            elements: Vec::new(),
        }
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<E> {
        self.elements
    }

    /// The element at `index`, if it's in range.
    pub fn element_at(&self, index: usize) -> Option<&E> {
        self.elements.get(index)
    }

    /// Index of the first element matching the predicate.
    pub fn index_of_first(&self, mut predicate: impl FnMut(&E) -> bool) -> Option<usize> {
        self.elements.iter().position(|e| predicate(e))
    }

    /// Index of the last element matching the predicate.
    pub fn index_of_last(&self, mut predicate: impl FnMut(&E) -> bool) -> Option<usize> {
        self.elements.iter().rposition(|e| predicate(e))
    }

    /// The last element matching the predicate.
    pub fn find_last(&self, predicate: impl FnMut(&E) -> bool) -> Option<&E> {
        self.index_of_last(predicate).map(|index| &self.elements[index])
    }

    pub fn for_each_indexed(&self, mut action: impl FnMut(usize, &E)) {
        for (index, e) in self.elements.iter().enumerate() {
            action(index, e)
        }
    }
}

impl<E: PartialEq> List<E> {
    /// Index of the first occurrence of `element`.
    pub fn index_of(&self, element: &E) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
}

impl<E: Clone> List<E> {
    /// A list without the first `n` elements.
    pub fn drop(&self, n: usize) -> Self {
        let n = n.min(self.elements.len());
        self.elements[n..].to_vec().into()
    }

    /// A list without the leading elements that match the predicate.
    pub fn drop_while(&self, mut predicate: impl FnMut(&E) -> bool) -> Self {
        match self.elements.iter().position(|e| !predicate(e)) {
            Some(index) => self.elements[index..].to_vec().into(),
            None => List::new(),
        }
    }

    /// A list of the first `n` elements.
    pub fn take(&self, n: usize) -> Self {
        let n = n.min(self.elements.len());
        self.elements[..n].to_vec().into()
    }

    /// A list of the leading elements that match the predicate.
    pub fn take_while(&self, mut predicate: impl FnMut(&E) -> bool) -> Self {
        match self.elements.iter().position(|e| !predicate(e)) {
            Some(index) => self.elements[..index].to_vec().into(),
            None => self.clone(),
        }
    }

    /// The element at `index`, or the result of `default` if it's out of
    /// range.
    pub fn element_at_or_else(&self, index: usize, default: impl FnOnce() -> E) -> E {
        match self.element_at(index) {
            Some(e) => e.clone(),
            None => default(),
        }
    }

    pub fn filter_indexed(&self, mut predicate: impl FnMut(usize, &E) -> bool) -> Self {
        self.elements
            .iter()
            .enumerate()
            .filter(|(index, e)| predicate(*index, e))
            .map(|(_, e)| e.clone())
            .collect()
    }

    pub fn map_indexed(&self, mut transform: impl FnMut(usize, &E) -> E) -> Self {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, e)| transform(index, e))
            .collect()
    }

    /// Split the list in two: the elements matching the predicate, and the
    /// rest. Both keep their original order.
    pub fn partition(&self, mut predicate: impl FnMut(&E) -> bool) -> (Self, Self) {
        let (matched, rest): (Vec<E>, Vec<E>) =
            self.elements.iter().cloned().partition(|e| predicate(e));
        (matched.into(), rest.into())
    }

    pub fn reversed(&self) -> Self {
        self.elements.iter().rev().cloned().collect()
    }

    /// A copy of this list in random order, using the thread-local
    /// generator.
    #[cfg(feature = "std-rng")]
    pub fn shuffled(&self) -> Self {
        self.shuffled_with(&mut rand::thread_rng())
    }

    /// A copy of this list in random order, using the given generator.
    pub fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut elements = self.elements.clone();
        elements.shuffle(rng);
        elements.into()
    }
}

impl<E> Default for List<E> {
    fn default() -> Self {
        List::new()
    }
}

impl<E> From<Vec<E>> for List<E> {
    fn from(elements: Vec<E>) -> Self {
        List { elements }
    }
}

impl<E> From<List<E>> for Vec<E> {
    fn from(list: List<E>) -> Self {
        list.elements
    }
}

impl<E> FromIterator<E> for List<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        List {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E> IntoIterator for List<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a List<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E> Iterable<E> for List<E>
where
    E: Eq + Hash + Clone,
{
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        E: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }
}

impl<E> Collection<E> for List<E>
where
    E: Eq + Hash + Clone,
{
    fn add(&mut self, elements: impl IntoIterator<Item = E>) {
        self.elements.extend(elements)
    }

    fn clear(&mut self) {
        self.elements.clear()
    }

    // each target removes a single occurrence, the first one
    fn remove(&mut self, targets: impl IntoIterator<Item = E>) {
        for target in targets {
            if let Some(index) = self.index_of(&target) {
                self.elements.remove(index);
            }
        }
    }

    fn retain(&mut self, targets: impl IntoIterator<Item = E>) {
        let targets = targets.into_iter().collect::<HashSet<_>>();
        self.elements.retain(|e| targets.contains(e))
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn distinct(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.elements.len());
        self.elements
            .iter()
            .filter(|&e| seen.insert(e))
            .cloned()
            .collect()
    }

    fn filter(&self, mut predicate: impl FnMut(&E) -> bool) -> Self {
        self.elements
            .iter()
            .filter(|&e| predicate(e))
            .cloned()
            .collect()
    }

    fn map(&self, transform: impl FnMut(&E) -> E) -> Self {
        self.elements.iter().map(transform).collect()
    }
}

/// A list containing the results of applying `transform` to each element of
/// `collection`, which may produce a different element type.
pub fn map_list<E1, E2, C>(collection: &C, transform: impl FnMut(&E1) -> E2) -> List<E2>
where
    E1: Eq + Hash + Clone,
    C: Iterable<E1> + ?Sized,
{
    collection.iter().map(transform).collect()
}
