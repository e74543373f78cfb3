/// A structure with a distinguished focus that can report the values around it.
///
/// This is the read-only view a [`Rule`](crate::Rule) observes: the stencil re-focuses
/// the structure on every position and hands it to the rule, which only needs
/// the cursor and its neighborhood to produce the next value.
pub trait Focused {
    type Cell;
    type Index;

    /// The value under the focus.
    fn cursor(&self) -> &Self::Cell;

    /// The logical index of the focus.
    fn index(&self) -> Self::Index;

    /// The values adjacent to the focus.
    ///
    /// Structures too small to have distinct neighbors on an axis report what
    /// they have without deduplication, so wrap-around may list a value twice
    /// or list the focus itself.
    fn neighborhood(&self) -> Vec<&Self::Cell>;

    /// Count the neighbors that satisfy a predicate.
    #[inline]
    fn count_neighbors<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Cell) -> bool,
    {
        self.neighborhood()
            .into_iter()
            .filter(|&cell| predicate(cell))
            .count()
    }
}
