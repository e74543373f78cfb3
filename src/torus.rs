use crate::{CircleDirection, Focused, Result, TorusDirection, Zipper};
use itertools::Itertools;
use std::fmt;
use std::iter::once;
use tracing::debug;
use crate::TorusDirection::{East, North, South, West};

/// An edge-wrapping grid with a movable focus.
///
/// This is a zipper of columns where each column is a zipper over rows. Every
/// column always has the same height and the same row focus, which is what lets
/// a vertical shift be applied to all columns uniformly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Torus<T> {
    columns: Zipper<Zipper<T>>,
}

impl<T> Torus<T> {
    /// Every column must have the same size and the same focus index.
    pub(crate) fn from_columns(columns: Zipper<Zipper<T>>) -> Self {
        Self { columns }
    }

    /// Get the Torus's `(width, height)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.columns.size(), self.columns.cursor().size())
    }

    /// Get the cell at any coordinate, wrapping on both axes independently.
    #[inline]
    pub fn get(&self, (x, y): (isize, isize)) -> &T {
        self.columns.get(x).get(y)
    }

    #[inline]
    pub fn get_mut(&mut self, (x, y): (isize, isize)) -> &mut T {
        self.columns.get_mut(x).get_mut(y)
    }

    #[inline]
    pub fn adjust<F>(&mut self, (x, y): (isize, isize), f: F)
    where
        F: FnOnce(&mut T),
    {
        self.columns.get_mut(x).adjust(y, f)
    }

    /// Replace the cell at a coordinate, returning the old value.
    #[inline]
    pub fn set(&mut self, (x, y): (isize, isize), value: T) -> T {
        self.columns.get_mut(x).set(y, value)
    }

    /// Move the focus one cell.
    ///
    /// East and West rotate the zipper of columns. North and South rotate every
    /// column, including the ones that are not focused.
    pub fn shift(&mut self, direction: TorusDirection) {
        match direction {
            East => self.columns.shift(CircleDirection::Right),
            West => self.columns.shift(CircleDirection::Left),
            North => self.shift_rows(CircleDirection::Left),
            South => self.shift_rows(CircleDirection::Right),
        }
    }

    fn shift_rows(&mut self, direction: CircleDirection) {
        for column in self.columns.values_mut() {
            column.shift(direction);
        }
    }

    /// Move the focus to a coordinate, rotating whichever way is shorter on each axis.
    pub fn focus_at(&mut self, (x, y): (isize, isize)) {
        self.columns.focus_at(x);
        let (_, height) = self.size();
        let current = self.columns.cursor().index();
        let south = (y.rem_euclid(height as isize) as usize + height - current) % height;
        if south <= height / 2 {
            (0..south).for_each(|_| self.shift(South));
        } else {
            (south..height).for_each(|_| self.shift(North));
        }
    }

    /// Iterate over every cell with its coordinate, column by column.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.columns.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, value)| ((x, y), value))
        })
    }

    /// Apply a function to every cell, keeping the focus where it is.
    pub fn map<U, F>(&self, mut f: F) -> Torus<U>
    where
        F: FnMut(&T) -> U,
    {
        Torus {
            columns: self.columns.map(|column| column.map(&mut f)),
        }
    }
}

impl<T> Torus<T>
where
    T: Clone,
{
    /// Make a `width` by `height` torus filled with a value.
    pub fn repeat(width: usize, height: usize, value: T) -> Result<Self> {
        let column = Zipper::repeat(height, value)?;
        Ok(Self {
            columns: Zipper::repeat(width, column)?,
        })
    }

    /// Build a torus from sparse `((x, y), value)` pairs, focused at `(0, 0)`.
    ///
    /// The extent is one more than the largest `x` and `y` given and every other cell
    /// holds `default`. Later pairs win over earlier ones.
    pub fn from_map<I>(default: T, pairs: I) -> Self
    where
        I: IntoIterator<Item = ((usize, usize), T)>,
    {
        let pairs: Vec<((usize, usize), T)> = pairs.into_iter().collect();
        let height = pairs.iter().map(|&((_, y), _)| y + 1).max().unwrap_or(1);
        let by_column = pairs
            .into_iter()
            .map(|((x, y), value)| (x, (y, value)))
            .into_group_map();
        // Each column is padded out to the far row so they all end up the same height.
        let columns = by_column.into_iter().map(|(x, entries)| {
            let padding = once((height - 1, default.clone()));
            (x, Zipper::from_map(default.clone(), padding.chain(entries)))
        });
        Self {
            columns: Zipper::from_map(Zipper::filled(height, 0, default.clone()), columns),
        }
    }

    /// Collect every column in index order, each in row order.
    pub fn to_columns(&self) -> Vec<Vec<T>> {
        self.columns.iter().map(Zipper::to_vec).collect()
    }

    /// Collect every cell with its coordinate, the inverse of [`Torus::from_map`].
    pub fn to_map(&self) -> Vec<((usize, usize), T)> {
        self.iter()
            .map(|(coord, value)| (coord, value.clone()))
            .collect()
    }

    /// Add or remove columns and rows.
    ///
    /// Each axis is resized independently like [`Zipper::resize`], with new cells
    /// holding `fill`. Panics if either axis would become empty.
    pub fn resize(&mut self, dwidth: isize, dheight: isize, fill: T) {
        for column in self.columns.values_mut() {
            column.resize(dheight, fill.clone());
        }
        let (_, height) = self.size();
        let row = self.columns.cursor().index();
        self.columns
            .resize(dwidth, Zipper::filled(height, row, fill));
        let (width, height) = self.size();
        debug!(dwidth, dheight, width, height, "resized torus");
    }
}

impl<T> Focused for Torus<T> {
    type Cell = T;
    type Index = (usize, usize);

    #[inline]
    fn cursor(&self) -> &T {
        self.columns.cursor().cursor()
    }

    #[inline]
    fn index(&self) -> (usize, usize) {
        (self.columns.index(), self.columns.cursor().index())
    }

    /// The Moore neighborhood: the focused column's vertical neighbors, then for each
    /// adjacent column its focused cell followed by that cell's vertical neighbors.
    fn neighborhood(&self) -> Vec<&T> {
        let mut cells = self.columns.cursor().neighborhood();
        for column in self.columns.neighborhood() {
            cells.push(column.cursor());
            cells.extend(column.neighborhood());
        }
        cells
    }
}

impl<T> std::ops::Index<(isize, isize)> for Torus<T> {
    type Output = T;

    #[inline]
    fn index(&self, coord: (isize, isize)) -> &T {
        self.get(coord)
    }
}

impl<T> fmt::Display for Torus<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.size();
        for y in 0..height as isize {
            for x in 0..width as isize {
                write!(f, "{}", self.get((x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
