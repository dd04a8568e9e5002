//! Lazily evaluated, pull-based sequences.
//!
//! A [`Sequence`] describes a pipeline of stages over a source of elements.
//! Building the pipeline runs nothing; elements are pulled through it one at
//! a time only when it's materialized or iterated, and only as many as are
//! needed.
//!
//! ```
//! use kol_sequence::sequence;
//!
//! let sequence = sequence![1, 2, 3, 4, 5]
//!     .filter(|e| *e < 3)
//!     .map(|e| e * 2)
//!     .distinct()
//!     .drop(1)
//!     .take(2);
//! assert_eq!(
//!     sequence.to_string(),
//!     "source 0/5 > filter > map > distinct > drop 1 > take 2"
//! );
//! assert_eq!(sequence.to_vec(), vec![4]);
//! ```
//!
//! Sequences are single-pass: a terminal operation consumes the sequence,
//! so it can't be evaluated twice.
//!
//! ```compile_fail
//! use kol_sequence::sequence;
//!
//! let sequence = sequence![1, 2, 3];
//! let first = sequence.to_vec();
//! let second = sequence.to_vec();
//! ```
mod iter;
mod puller;
mod sequence;
mod source;
mod stage;

pub use iter::SequenceIter;
pub use sequence::{map_sequence, Sequence};

/// Create a [`Sequence`] owning the given elements, in order.
///
/// ```
/// use kol_sequence::{sequence, Sequence};
///
/// assert_eq!(sequence![1, 2, 3].to_vec(), vec![1, 2, 3]);
/// let empty: Sequence<'_, i32> = sequence![];
/// assert!(empty.to_vec().is_empty());
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Sequence::new(::std::vec![$($element),+])
    };
}
