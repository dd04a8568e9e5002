/// A pull-based, single step iteration primitive.
///
/// Each call to `pull` either produces the next element and advances by
/// exactly one logical position, or returns `None` at the end of the data.
/// A puller that has returned `None` keeps returning `None` on every later
/// call; pullers are single-pass and cannot be restarted.
pub(crate) trait Puller {
    type Item;

    fn pull(&mut self) -> Option<Self::Item>;
}

impl<P> Puller for Box<P>
where
    P: Puller + ?Sized,
{
    type Item = P::Item;

    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }
}
