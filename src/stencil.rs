use crate::{CircleDirection, Focused, Rule, Torus, TorusDirection, Zipper};
use std::collections::VecDeque;
use std::iter::once;
use tracing::trace;

impl<T> Zipper<T>
where
    T: Clone,
{
    /// Build a zipper of the same shape where each value is `f` of a view focused there.
    ///
    /// Every view is a rotation of the original, so no output can leak into another
    /// position's computation. The result keeps the original focus.
    pub fn extend<U, F>(&self, mut f: F) -> Zipper<U>
    where
        F: FnMut(&Zipper<T>) -> U,
    {
        let mut view = self.clone();
        let focus = f(&view);
        let rest = (1..self.size())
            .map(|_| {
                view.shift(CircleDirection::Right);
                f(&view)
            })
            .collect();
        Zipper::from_parts(focus, self.index(), rest)
    }

    /// Run a [`Rule`] at every position.
    pub fn apply<R>(&self, rule: &R) -> Zipper<R::Output>
    where
        R: Rule<Self>,
    {
        self.extend(|view| rule.compute(view))
    }
}

impl<T> Torus<T>
where
    T: Clone,
{
    /// Build a torus of the same shape where each cell is `f` of a view focused there.
    ///
    /// The view walks the grid row by row starting from the current focus, so it moves
    /// east on every cell and south once per row. The result keeps the original focus.
    pub fn extend<U, F>(&self, mut f: F) -> Torus<U>
    where
        F: FnMut(&Torus<T>) -> U,
    {
        let (width, height) = self.size();
        let (x, y) = self.index();
        trace!(width, height, "extending torus");

        let mut view = self.clone();
        let mut visit = |view: &mut Torus<T>| {
            let value = f(&*view);
            view.shift(TorusDirection::East);
            value
        };

        // The first row holds the focus of every output column.
        let mut first = (visit(&mut view), VecDeque::with_capacity(height - 1));
        let mut others: Vec<(U, VecDeque<U>)> = (1..width)
            .map(|_| (visit(&mut view), VecDeque::with_capacity(height - 1)))
            .collect();
        for _ in 1..height {
            view.shift(TorusDirection::South);
            for (_, rest) in once(&mut first).chain(others.iter_mut()) {
                rest.push_back(visit(&mut view));
            }
        }

        let focus = Zipper::from_parts(first.0, y, first.1);
        let rest = others
            .into_iter()
            .map(|(focus, rest)| Zipper::from_parts(focus, y, rest))
            .collect();
        Torus::from_columns(Zipper::from_parts(focus, x, rest))
    }

    /// Run a [`Rule`] at every cell.
    pub fn apply<R>(&self, rule: &R) -> Torus<R::Output>
    where
        R: Rule<Self>,
    {
        self.extend(|view| rule.compute(view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn labelled(width: usize, height: usize) -> Torus<usize> {
        Torus::from_map(
            0,
            (0..width)
                .cartesian_product(0..height)
                .map(|(x, y)| ((x, y), 10 * x + y)),
        )
    }

    #[test]
    fn zipper_extend_sees_neighbors() {
        let mut z = Zipper::new(vec![1, 2, 3, 4]).unwrap();
        let sum = |view: &Zipper<i32>| view.cursor() + view.neighborhood().into_iter().sum::<i32>();
        assert_eq!(z.extend(sum).to_vec(), vec![7, 6, 9, 8]);

        z.focus_at(2);
        let out = z.extend(sum);
        assert_eq!(out.index(), 2);
        assert_eq!(out.to_vec(), vec![7, 6, 9, 8]);
    }

    #[test]
    fn zipper_extend_reads_original_values() {
        let z = Zipper::new(vec!['a', 'b', 'c']).unwrap();
        let rotated = z.extend(|view| *view.get(view.index() as isize + 1));
        assert_eq!(rotated.to_vec(), vec!['b', 'c', 'a']);
    }

    #[test]
    fn torus_extend_identity() {
        let mut t = labelled(4, 3);
        t.focus_at((2, 1));
        assert_eq!(t.extend(|view| *view.cursor()), t);
    }

    #[test]
    fn torus_extend_visits_every_position_once() {
        let mut t = labelled(3, 5);
        t.focus_at((1, 3));
        let mut visits = 0;
        let coords = t.extend(|view| {
            visits += 1;
            view.index()
        });
        assert_eq!(visits, 15);
        assert_eq!(coords.index(), (1, 3));
        for ((x, y), &coord) in coords.iter() {
            assert_eq!(coord, (x, y));
        }
    }

    #[test]
    fn torus_extend_degenerate_shapes() {
        for &(width, height) in &[(1, 1), (1, 4), (4, 1), (2, 2)] {
            let t = labelled(width, height);
            let counts = t.extend(|view| view.neighborhood().len());
            assert_eq!(counts.size(), (width, height));
        }
    }

    struct Sum;

    impl Rule<Torus<usize>> for Sum {
        type Output = usize;

        fn compute(&self, view: &Torus<usize>) -> usize {
            view.neighborhood().into_iter().sum()
        }
    }

    #[test]
    fn apply_rule_and_closure_agree() {
        let t = labelled(3, 3);
        let by_rule = t.apply(&Sum);
        let by_closure = t.apply(&|view: &Torus<usize>| view.neighborhood().into_iter().sum::<usize>());
        assert_eq!(by_rule, by_closure);
        // Every cell of a 3x3 torus sees the other eight.
        let total: usize = t.iter().map(|(_, &v)| v).sum();
        for ((x, y), &sum) in by_rule.iter() {
            assert_eq!(sum, total - t[(x as isize, y as isize)]);
        }
    }
}
