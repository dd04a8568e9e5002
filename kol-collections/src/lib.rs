//! Eager collections with Kotlin-style operations.
//!
//! [`List`] is an ordered, vector-backed collection; [`Set`] is an
//! unordered, hash-backed collection without duplicates. Both implement the
//! [`Iterable`] query contract (`all`, `any`, `find`, set algebra and so on)
//! and the [`Collection`] contract (mutation plus copying transforms).
//!
//! ```
//! use kol_collections::{Iterable, List};
//!
//! let l1 = List::from(vec![1, 2, 3]);
//! let l2 = List::from(vec![2, 3, 4]).map_indexed(|index, e| index as i32 + e);
//! assert_eq!(l2.as_slice(), &[2, 4, 6]);
//!
//! let mut difference = l1.subtract(&l2).to_vec();
//! difference.sort();
//! assert_eq!(difference, vec![1, 3]);
//! ```
//!
//! ```
//! use kol_collections::{Collection, Iterable, Set};
//!
//! let s1 = Set::from(vec![1, 2, 3, 3, 3]);
//! let s2 = Set::from(vec![2, 3, 4]).map(|e| e + 1);
//!
//! let mut union = s1.union(&s2).to_vec();
//! union.sort();
//! assert_eq!(union, vec![1, 2, 3, 4, 5]);
//! ```
mod collection;
pub mod error;
mod iterable;
mod list;
mod set;

pub use collection::Collection;
pub use error::{Error, Result};
pub use iterable::Iterable;
pub use list::{map_list, List};
pub use set::{map_set, Set};
