// A chain is a strict line of stages ending in exactly one source. The set
// of stage kinds is closed, so they're dispatched through an enum rather
// than a trait object; only the cross-type conversion needs erasure, as its
// upstream element type differs from the chain's.

mod convert;
mod distinct;
mod drop;
mod filter;
mod map;
mod take;

use std::fmt;

pub(crate) use convert::ConvertStage;
pub(crate) use distinct::DistinctStage;
pub(crate) use drop::DropStage;
pub(crate) use filter::FilterStage;
pub(crate) use map::MapStage;
pub(crate) use take::TakeStage;

use crate::{puller::Puller, source::SourcePuller};

/// A stage whose upstream element type has been erased.
pub(crate) trait ErasedStage<E>: Puller<Item = E> + fmt::Display {}

impl<T, E> ErasedStage<E> for T where T: Puller<Item = E> + fmt::Display {}

pub(crate) enum Stage<'a, E>
where
    E: Clone,
{
    Source(SourcePuller<'a, E>),
    Distinct(DistinctStage<'a, E>),
    Filter(FilterStage<'a, E>),
    Map(MapStage<'a, E>),
    Take(TakeStage<'a, E>),
    Drop(DropStage<'a, E>),
    Convert(Box<dyn ErasedStage<E> + 'a>),
}

impl<'a, E> From<SourcePuller<'a, E>> for Stage<'a, E>
where
    E: Clone,
{
    fn from(inner: SourcePuller<'a, E>) -> Self {
        Self::Source(inner)
    }
}

impl<'a, E> From<DistinctStage<'a, E>> for Stage<'a, E>
where
    E: Clone,
{
    fn from(inner: DistinctStage<'a, E>) -> Self {
        Self::Distinct(inner)
    }
}

impl<'a, E> From<FilterStage<'a, E>> for Stage<'a, E>
where
    E: Clone,
{
    fn from(inner: FilterStage<'a, E>) -> Self {
        Self::Filter(inner)
    }
}

impl<'a, E> From<MapStage<'a, E>> for Stage<'a, E>
where
    E: Clone,
{
    fn from(inner: MapStage<'a, E>) -> Self {
        Self::Map(inner)
    }
}

impl<'a, E> From<TakeStage<'a, E>> for Stage<'a, E>
where
    E: Clone,
{
    fn from(inner: TakeStage<'a, E>) -> Self {
        Self::Take(inner)
    }
}

impl<'a, E> From<DropStage<'a, E>> for Stage<'a, E>
where
    E: Clone,
{
    fn from(inner: DropStage<'a, E>) -> Self {
        Self::Drop(inner)
    }
}

impl<E> Puller for Stage<'_, E>
where
    E: Clone,
{
    type Item = E;

    fn pull(&mut self) -> Option<E> {
        match self {
            Stage::Source(inner) => inner.pull(),
            Stage::Distinct(inner) => inner.pull(),
            Stage::Filter(inner) => inner.pull(),
            Stage::Map(inner) => inner.pull(),
            Stage::Take(inner) => inner.pull(),
            Stage::Drop(inner) => inner.pull(),
            Stage::Convert(inner) => inner.pull(),
        }
    }
}

impl<E> fmt::Display for Stage<'_, E>
where
    E: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Source(inner) => fmt::Display::fmt(inner, f),
            Stage::Distinct(inner) => fmt::Display::fmt(inner, f),
            Stage::Filter(inner) => fmt::Display::fmt(inner, f),
            Stage::Map(inner) => fmt::Display::fmt(inner, f),
            Stage::Take(inner) => fmt::Display::fmt(inner, f),
            Stage::Drop(inner) => fmt::Display::fmt(inner, f),
            Stage::Convert(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
