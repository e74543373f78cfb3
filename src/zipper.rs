use crate::{CircleDirection, Error, Focused, Result};
use boolinator::Boolinator;
use std::collections::VecDeque;
use std::iter::{once, repeat};
use std::mem;
use tracing::trace;

/// A non-empty circular sequence with one focused value.
///
/// Indices are modular: index `k` and `k + size` name the same value. Moving the
/// focus one step moves a single value between the ends of a deque, so it never
/// rebuilds the sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Zipper<T> {
    focus: T,
    index: usize,
    /// Every other value in circular order, starting just after the focus.
    rest: VecDeque<T>,
}

impl<T> Zipper<T> {
    /// Make a zipper of size one.
    pub fn singleton(value: T) -> Self {
        Self {
            focus: value,
            index: 0,
            rest: VecDeque::new(),
        }
    }

    /// Make a zipper from values in index order, focused at index 0.
    ///
    /// Fails with [`Error::Empty`] if no values are provided.
    pub fn new<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut rest: VecDeque<T> = values.into_iter().collect();
        let focus = rest.pop_front().ok_or(Error::Empty)?;
        Ok(Self {
            focus,
            index: 0,
            rest,
        })
    }

    /// `rest` must be in circular order starting just after `index`.
    pub(crate) fn from_parts(focus: T, index: usize, rest: VecDeque<T>) -> Self {
        debug_assert!(index <= rest.len());
        Self { focus, index, rest }
    }

    /// The number of values in the circle. Never zero.
    #[inline]
    pub fn size(&self) -> usize {
        self.rest.len() + 1
    }

    #[inline]
    fn normalize(&self, k: isize) -> usize {
        k.rem_euclid(self.size() as isize) as usize
    }

    /// Translate a normalized index into a position in `rest`, or `None` for the focus.
    ///
    /// This depends on where the focus currently is, so it is recomputed on every access.
    #[inline]
    fn slot(&self, k: usize) -> Option<usize> {
        let size = self.size();
        (k != self.index).as_some_from(|| (k + size - self.index - 1) % size)
    }

    /// Get the value at any index, wrapping around the circle.
    #[inline]
    pub fn get(&self, k: isize) -> &T {
        match self.slot(self.normalize(k)) {
            Some(slot) => &self.rest[slot],
            None => &self.focus,
        }
    }

    /// Get the value at any index mutably, wrapping around the circle.
    #[inline]
    pub fn get_mut(&mut self, k: isize) -> &mut T {
        match self.slot(self.normalize(k)) {
            Some(slot) => &mut self.rest[slot],
            None => &mut self.focus,
        }
    }

    /// Modify the value at an index in place. Free when `k` is the focus.
    #[inline]
    pub fn adjust<F>(&mut self, k: isize, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(self.get_mut(k))
    }

    /// Replace the value at an index, returning the old value.
    #[inline]
    pub fn set(&mut self, k: isize, value: T) -> T {
        mem::replace(self.get_mut(k), value)
    }

    /// Rotate the focus by one position. A zipper of size one is left unchanged.
    pub fn shift(&mut self, direction: CircleDirection) {
        let size = self.size();
        match direction {
            CircleDirection::Right => {
                if let Some(next) = self.rest.pop_front() {
                    let previous = mem::replace(&mut self.focus, next);
                    self.rest.push_back(previous);
                    self.index = (self.index + 1) % size;
                }
            }
            CircleDirection::Left => {
                if let Some(previous) = self.rest.pop_back() {
                    let next = mem::replace(&mut self.focus, previous);
                    self.rest.push_front(next);
                    self.index = (self.index + size - 1) % size;
                }
            }
        }
    }

    /// Move the focus to an index, rotating whichever way is shorter.
    pub fn focus_at(&mut self, k: isize) {
        let size = self.size();
        let right = (self.normalize(k) + size - self.index) % size;
        if right <= size / 2 {
            (0..right).for_each(|_| self.shift(CircleDirection::Right));
        } else {
            (right..size).for_each(|_| self.shift(CircleDirection::Left));
        }
    }

    /// Iterate over all values in index order `0..size`.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let split = self.rest.len() - self.index;
        self.rest
            .range(split..)
            .chain(once(&self.focus))
            .chain(self.rest.range(..split))
    }

    /// Apply a function to every value, keeping the focus where it is.
    pub fn map<U, F>(&self, mut f: F) -> Zipper<U>
    where
        F: FnMut(&T) -> U,
    {
        let focus = f(&self.focus);
        Zipper {
            focus,
            index: self.index,
            rest: self.rest.iter().map(f).collect(),
        }
    }

    /// Every value including the focus, in storage order rather than index order.
    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        once(&mut self.focus).chain(self.rest.iter_mut())
    }
}

impl<T> Zipper<T>
where
    T: Clone,
{
    /// Make a zipper of `size` copies of a value.
    pub fn repeat(size: usize, value: T) -> Result<Self> {
        (size > 0).ok_or(Error::Empty)?;
        Ok(Self::filled(size, 0, value))
    }

    /// `size` must be at least one.
    pub(crate) fn filled(size: usize, index: usize, value: T) -> Self {
        let rest = repeat(value.clone()).take(size - 1).collect();
        Self::from_parts(value, index, rest)
    }

    /// Build a zipper from sparse `(index, value)` pairs, focused at index 0.
    ///
    /// The size is one more than the largest index given (one if there are no pairs)
    /// and every index without a pair holds `default`. Later pairs win over earlier ones.
    pub fn from_map<I>(default: T, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let pairs: Vec<(usize, T)> = pairs.into_iter().collect();
        let size = pairs.iter().map(|&(k, _)| k + 1).max().unwrap_or(1);
        let mut zipper = Self::filled(size, 0, default);
        for (k, value) in pairs {
            zipper.set(k as isize, value);
        }
        zipper
    }

    /// Collect all values in index order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Grow or shrink the circle by `delta` values.
    ///
    /// Values are removed from, or copies of `fill` added to, the positions just before
    /// the focus. The focus keeps its index unless that index no longer exists, in which
    /// case it wraps to the new size.
    ///
    /// Panics if this would leave the zipper empty.
    pub fn resize(&mut self, delta: isize, fill: T) {
        if delta < 0 {
            let remove = delta.unsigned_abs();
            assert!(
                remove < self.size(),
                "gridzip::Zipper::resize: cannot remove {} values from a zipper of size {}",
                remove,
                self.size()
            );
            self.rest.truncate(self.rest.len() - remove);
        } else {
            self.rest.extend(repeat(fill).take(delta as usize));
        }
        self.index %= self.size();
        trace!(delta, size = self.size(), "resized zipper");
    }
}

impl<T> Focused for Zipper<T> {
    type Cell = T;
    type Index = usize;

    #[inline]
    fn cursor(&self) -> &T {
        &self.focus
    }

    #[inline]
    fn index(&self) -> usize {
        self.index
    }

    #[inline]
    fn neighborhood(&self) -> Vec<&T> {
        match self.rest.len() {
            0 | 1 => self.rest.iter().collect(),
            n => vec![&self.rest[n - 1], &self.rest[0]],
        }
    }
}

impl<T> std::ops::Index<isize> for Zipper<T> {
    type Output = T;

    #[inline]
    fn index(&self, k: isize) -> &T {
        self.get(k)
    }
}
