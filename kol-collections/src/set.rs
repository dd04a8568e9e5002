use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use crate::{collection::Collection, iterable::Iterable};

/// An unordered collection of elements without duplicates.
///
/// Iteration order is unspecified and may differ between two sets holding
/// the same elements.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(
            serialize = "E: serde::Serialize + Eq + Hash",
            deserialize = "E: serde::Deserialize<'de> + Eq + Hash"
        )
    )
)]
pub struct Set<E> {
    elements: HashSet<E>,
}

impl<E> Set<E> {
    pub fn new() -> Self {
        Set {
            elements: HashSet::new(),
        }
    }
}

impl<E> Default for Set<E> {
    fn default() -> Self {
        Set::new()
    }
}

impl<E: Eq + Hash> PartialEq for Set<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Eq + Hash> Eq for Set<E> {}

impl<E: Eq + Hash> From<Vec<E>> for Set<E> {
    fn from(elements: Vec<E>) -> Self {
        elements.into_iter().collect()
    }
}

impl<E: Eq + Hash> FromIterator<E> for Set<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Set {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E> IntoIterator for Set<E> {
    type Item = E;
    type IntoIter = std::collections::hash_set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Set<E> {
    type Item = &'a E;
    type IntoIter = std::collections::hash_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E> Iterable<E> for Set<E>
where
    E: Eq + Hash + Clone,
{
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, E>
    where
        E: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    // membership is a hash lookup rather than a scan
    fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }
}

impl<E> Collection<E> for Set<E>
where
    E: Eq + Hash + Clone,
{
    fn add(&mut self, elements: impl IntoIterator<Item = E>) {
        self.elements.extend(elements)
    }

    fn clear(&mut self) {
        self.elements.clear()
    }

    fn remove(&mut self, targets: impl IntoIterator<Item = E>) {
        for target in targets {
            self.elements.remove(&target);
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
        self.clone()
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

/// A set containing the results of applying `transform` to each element of
/// `collection`, which may produce a different element type.
pub fn map_set<E1, E2, C>(collection: &C, transform: impl FnMut(&E1) -> E2) -> Set<E2>
where
    E1: Eq + Hash + Clone,
    E2: Eq + Hash,
    C: Iterable<E1> + ?Sized,
{
    collection.iter().map(transform).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, List};

    fn set(elements: &[i32]) -> Set<i32> {
        elements.to_vec().into()
    }

    fn sorted(set: &Set<i32>) -> Vec<i32> {
        let mut elements = set.to_vec();
        elements.sort();
        elements
    }

    #[test]
    fn test_new_deduplicates() {
        assert_eq!(sorted(&set(&[1, 2, 1, 2])), vec![1, 2]);
    }

    #[test]
    fn test_add() {
        let mut s = set(&[1, 2]);
        s.add([3, 4]);
        assert_eq!(s, set(&[1, 2, 3, 4]));

        let mut s = set(&[1, 2, 3]);
        s.add([1, 2]);
        assert_eq!(s, set(&[1, 2, 3]));
    }

    #[test]
    fn test_clear() {
        let mut s = set(&[1, 2]);
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut s = set(&[1, 2, 3]);
        s.remove([2]);
        assert_eq!(s, set(&[1, 3]));

        let mut s = set(&[1, 2, 3]);
        s.remove([4, 5]);
        assert_eq!(s, set(&[1, 2, 3]));
    }

    #[test]
    fn test_retain() {
        let mut s = set(&[1, 2, 3]);
        s.retain([2, 3, 4]);
        assert_eq!(s, set(&[2, 3]));

        let mut s = set(&[1, 2, 3]);
        s.retain([4, 5]);
        assert_eq!(s, set(&[]));
    }

    #[test]
    fn test_all() {
        assert!(set(&[1, 2, 3]).all(|v| *v < 100));
        assert!(!set(&[1, 2, 300]).all(|v| *v < 100));
        assert!(!set(&[]).all(|v| *v < 100));
    }

    #[test]
    fn test_any() {
        assert!(set(&[1, 2, 3]).any(|v| *v == 3));
        assert!(!set(&[1, 2, 3]).any(|v| *v > 3));
    }

    #[test]
    fn test_contains() {
        assert!(set(&[1, 2, 3]).contains(&1));
        assert!(!set(&[1, 2, 3]).contains(&4));
    }

    #[test]
    fn test_count() {
        assert_eq!(set(&[1, 2, 3, 3]).count(|v| *v > 1), 2);
    }

    #[test]
    fn test_distinct() {
        assert_eq!(sorted(&set(&[1, 2, 3]).distinct()), vec![1, 2, 3]);
        assert_eq!(
            sorted(&set(&[1, 2, 3, 2, 3, 4, 5]).distinct()),
            vec![1, 2, 3, 4, 5]
        );
        assert!(set(&[]).distinct().is_empty());
    }

    #[test]
    fn test_filter() {
        assert_eq!(set(&[1, 2, 3]).filter(|e| *e > 1), set(&[2, 3]));
    }

    #[test]
    fn test_find() {
        assert_eq!(set(&[1, 2, 3]).find(|e| *e == 2), Some(&2));
        assert_eq!(set(&[1, 2, 3]).find(|e| *e == 4), None);
    }

    #[test]
    fn test_map() {
        assert_eq!(set(&[1, 2, 3]).map(|e| e * 2), set(&[2, 4, 6]));
    }

    #[test]
    fn test_map_collapses_duplicates() {
        assert_eq!(set(&[1, 2, 3, 4]).map(|e| e % 2), set(&[0, 1]));
    }

    #[test]
    fn test_for_each() {
        let mut sum = 0;
        set(&[1, 2, 3]).for_each(|e| sum += e);
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_minus() {
        let s = set(&[1, 2, 3, 4]);
        assert_eq!(s.minus([3, 4]), set(&[1, 2]));
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_none() {
        assert!(set(&[1, 2, 3, 3]).none(|e| *e > 999));
        assert!(!set(&[1, 2, 3, 3]).none(|e| *e < 999));
    }

    #[test]
    fn test_plus() {
        assert_eq!(set(&[1, 2, 3]).plus([4, 5]), set(&[1, 2, 3, 4, 5]));
        assert_eq!(set(&[1, 2, 3]).plus([3, 5]), set(&[1, 2, 3, 5]));
    }

    #[test]
    fn test_single() {
        assert_eq!(set(&[1, 2, 3]).single(|e| *e == 1), Ok(&1));
        assert_eq!(
            set(&[1, 2, 3]).single(|e| *e > 1),
            Err(Error::MultipleElements)
        );
        assert_eq!(set(&[1, 2, 3]).single(|e| *e > 3), Err(Error::NoSuchElement));
    }

    #[test]
    fn test_intersect() {
        assert_eq!(set(&[1, 2, 3]).intersect(&set(&[2, 3, 4])), set(&[2, 3]));
        assert_eq!(set(&[1, 2]).intersect(&set(&[3, 4])), set(&[]));
    }

    #[test]
    fn test_intersect_with_list() {
        let other = List::from(vec![3, 3, 1, 9]);
        assert_eq!(set(&[1, 2, 3]).intersect(&other), set(&[1, 3]));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(set(&[1, 2, 3]).subtract(&set(&[2, 4])), set(&[1, 3]));
    }

    #[test]
    fn test_union() {
        assert_eq!(
            set(&[1, 2, 3]).union(&set(&[3, 4, 5])),
            set(&[1, 2, 3, 4, 5])
        );
    }

    #[test]
    fn test_to_list() {
        let list = set(&[1, 2, 3]).to_list();
        let mut elements = list.into_vec();
        elements.sort();
        assert_eq!(elements, vec![1, 2, 3]);
    }

    #[test]
    fn test_map_set() {
        let strings = map_set(&set(&[1, 2, 3]), |e: &i32| e.to_string());
        assert_eq!(
            strings,
            Set::from(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn test_map_set_from_list() {
        let parity = map_set(&List::from(vec![1, 2, 3, 4]), |e: &i32| e % 2 == 0);
        assert_eq!(parity, Set::from(vec![true, false]));
    }
}
