//! Conway's Game of Life on a [`Torus`].

use crate::{Error, Focused, Result, Rule, Torus};
use boolinator::Boolinator;
use std::fmt;
use std::iter::once;
use std::str::FromStr;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Dead
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cell::Alive => "O",
            Cell::Dead => ".",
        })
    }
}

pub type Board = Torus<Cell>;

/// A birth/survival rule over the eight cell Moore neighborhood.
///
/// The default is Conway's rule, `B3/S23`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LifeRule {
    birth: [bool; 9],
    survival: [bool; 9],
}

impl LifeRule {
    /// Make a rule from the live neighbor counts that cause birth and survival.
    pub fn new<B, S>(birth: B, survival: S) -> Result<Self>
    where
        B: IntoIterator<Item = usize>,
        S: IntoIterator<Item = usize>,
    {
        let mut rule = Self {
            birth: [false; 9],
            survival: [false; 9],
        };
        for (counts, table) in [
            (birth.into_iter().collect::<Vec<_>>(), &mut rule.birth),
            (survival.into_iter().collect(), &mut rule.survival),
        ] {
            for n in counts {
                *table.get_mut(n).ok_or_else(|| Error::InvalidRule {
                    rule: format!("{} neighbors", n),
                    reason: "neighbor counts must be at most 8",
                })? = true;
            }
        }
        Ok(rule)
    }

    /// The next state of a cell with `alive_neighbors` live neighbors.
    #[inline]
    pub fn next(&self, cell: Cell, alive_neighbors: usize) -> Cell {
        let table = match cell {
            Cell::Alive => &self.survival,
            Cell::Dead => &self.birth,
        };
        table.get(alive_neighbors).copied().unwrap_or(false).into()
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        birth[3] = true;
        survival[2] = true;
        survival[3] = true;
        Self { birth, survival }
    }
}

impl Rule<Board> for LifeRule {
    type Output = Cell;

    fn compute(&self, view: &Board) -> Cell {
        self.next(*view.cursor(), view.count_neighbors(|cell| cell.is_alive()))
    }
}

impl FromStr for LifeRule {
    type Err = Error;

    /// Parse `B<counts>/S<counts>` notation, such as `B36/S23`, in either order.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidRule {
            rule: s.to_owned(),
            reason,
        };
        let mut birth = None;
        let mut survival = None;
        for part in s.trim().split('/') {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survival,
                _ => return Err(invalid("each part must start with B or S")),
            };
            slot.is_none().ok_or_else(|| invalid("B and S may each appear once"))?;
            let counts = chars
                .map(|c| match c.to_digit(10) {
                    Some(n) if n <= 8 => Ok(n as usize),
                    _ => Err(invalid("neighbor counts must be digits from 0 to 8")),
                })
                .collect::<Result<Vec<usize>>>()?;
            *slot = Some(counts);
        }
        match (birth, survival) {
            (Some(birth), Some(survival)) => Self::new(birth, survival),
            _ => Err(invalid("expected both a B and an S part")),
        }
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = |table: &[bool; 9]| -> String {
            (0..9)
                .filter(|&n| table[n])
                .map(|n| char::from(b'0' + n as u8))
                .collect()
        };
        write!(f, "B{}/S{}", counts(&self.birth), counts(&self.survival))
    }
}

/// Make a `width` by `height` board where the listed cells are alive.
///
/// Coordinates outside the board wrap around. Fails with [`Error::Empty`] if
/// either dimension is zero.
pub fn board<I>(width: usize, height: usize, alive: I) -> Result<Board>
where
    I: IntoIterator<Item = (isize, isize)>,
{
    (width > 0 && height > 0).ok_or(Error::Empty)?;
    let wrap = |(x, y): (isize, isize)| {
        (
            x.rem_euclid(width as isize) as usize,
            y.rem_euclid(height as isize) as usize,
        )
    };
    let alive = alive.into_iter().map(|coord| (wrap(coord), Cell::Alive));
    // The far corner fixes the extent even when no cell near it is alive.
    let corner = once(((width - 1, height - 1), Cell::Dead));
    let board = Torus::from_map(Cell::Dead, corner.chain(alive));
    debug!(width, height, population = population(&board), "built board");
    Ok(board)
}

/// Compute the next generation with Conway's rule.
pub fn step(board: &Board) -> Board {
    step_with(board, &LifeRule::default())
}

/// Compute the next generation with any birth/survival rule.
pub fn step_with(board: &Board, rule: &LifeRule) -> Board {
    board.apply(rule)
}

/// The number of live cells.
pub fn population(board: &Board) -> usize {
    board.iter().filter(|(_, cell)| cell.is_alive()).count()
}

/// Whether every cell is dead.
pub fn gameover(board: &Board) -> bool {
    population(board) == 0
}

/// Add or remove columns and rows, filling new cells with [`Cell::Dead`].
///
/// Panics if either axis would become empty.
pub fn resize(board: &Board, dwidth: isize, dheight: isize) -> Board {
    let mut board = board.clone();
    board.resize(dwidth, dheight, Cell::Dead);
    board
}

/// The coordinates of every live cell, column by column.
pub fn alive_cells(board: &Board) -> Vec<(usize, usize)> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(coord, _)| coord)
        .collect()
}
