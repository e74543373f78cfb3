//! Gridzip is a library of edge-wrapping zippers for running local-rule simulations.
//!
//! A [`Zipper`] is a circular sequence with a movable focus, and a [`Torus`] nests it to
//! get a two dimensional grid whose focus can move in four directions without copying
//! the grid. Any [`Rule`] that looks at a focused view can then be run over every cell
//! at once with [`Torus::apply`]. The [`life`] module uses this to play Conway's Game of Life.

mod direction;
mod error;
pub mod life;
mod neighborhood;
mod stencil;
mod torus;
mod zipper;

pub use direction::*;
pub use error::*;
pub use neighborhood::*;
pub use torus::*;
pub use zipper::*;

/// Defines how a single position is recomputed from a view focused on it.
///
/// This enforces a rule in that all new cells are only produced from old state. The view is
/// always the original structure moved to a new focus, so the order positions are visited
/// in cannot break the simulation.
///
/// Any `Fn(&V) -> U` closure is a rule.
pub trait Rule<V: ?Sized> {
    /// Result of the neighbor-observing computation.
    type Output;

    fn compute(&self, view: &V) -> Self::Output;
}

impl<V, U, F> Rule<V> for F
where
    V: ?Sized,
    F: Fn(&V) -> U,
{
    type Output = U;

    #[inline]
    fn compute(&self, view: &V) -> U {
        self(view)
    }
}
