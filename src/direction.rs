use enum_iterator::IntoEnumIterator;

/// A direction the focus of a zipper can move in.
///
/// Directions are numbered from zero counter-clockwise by their `usize` conversions. There
/// must be an even number of them so that each one has an opposite halfway around.
pub trait Direction: Copy + From<usize> + Into<usize> {
    type Directions: Iterator<Item = Self>;

    /// Every direction in counter-clockwise order.
    fn directions() -> Self::Directions;

    #[inline]
    fn total() -> usize {
        Self::directions().count()
    }

    /// Turn counter-clockwise by `steps` directions.
    #[inline]
    fn rotate(self, steps: usize) -> Self {
        let n: usize = self.into();
        ((n + steps) % Self::total()).into()
    }

    /// The opposite direction. Shifting one way and then the opposite way restores a zipper.
    #[inline]
    fn inv(self) -> Self {
        self.rotate(Self::total() / 2)
    }

    #[inline]
    fn turn_counterclockwise(self) -> Self {
        self.rotate(1)
    }

    #[inline]
    fn turn_clockwise(self) -> Self {
        self.rotate(Self::total() - 1)
    }
}

/// The two ways the focus of a [`Zipper`](crate::Zipper) can rotate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
pub enum CircleDirection {
    /// Towards higher indices.
    Right,
    /// Towards lower indices.
    Left,
}

impl Direction for CircleDirection {
    type Directions = <CircleDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        CircleDirection::into_enum_iter()
    }
}

impl From<usize> for CircleDirection {
    fn from(n: usize) -> Self {
        match n {
            0 => CircleDirection::Right,
            1 => CircleDirection::Left,
            _ => panic!("invalid integer conversion to CircleDirection"),
        }
    }
}

impl From<CircleDirection> for usize {
    fn from(direction: CircleDirection) -> usize {
        direction as usize
    }
}

/// The four ways the focus of a [`Torus`](crate::Torus) can move. `y` grows to the south.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
pub enum TorusDirection {
    East,
    North,
    West,
    South,
}

impl Direction for TorusDirection {
    type Directions = <TorusDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        TorusDirection::into_enum_iter()
    }
}

impl TorusDirection {
    /// The coordinate offset of one step in this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            TorusDirection::East => (1, 0),
            TorusDirection::North => (0, -1),
            TorusDirection::West => (-1, 0),
            TorusDirection::South => (0, 1),
        }
    }
}

impl From<usize> for TorusDirection {
    fn from(n: usize) -> Self {
        match n {
            0 => TorusDirection::East,
            1 => TorusDirection::North,
            2 => TorusDirection::West,
            3 => TorusDirection::South,
            _ => panic!("invalid integer conversion to TorusDirection"),
        }
    }
}

impl From<TorusDirection> for usize {
    fn from(direction: TorusDirection) -> usize {
        direction as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(CircleDirection::total(), 2);
        assert_eq!(TorusDirection::total(), 4);
    }

    #[test]
    fn opposites() {
        assert_eq!(CircleDirection::Right.inv(), CircleDirection::Left);
        assert_eq!(TorusDirection::East.inv(), TorusDirection::West);
        assert_eq!(TorusDirection::North.inv(), TorusDirection::South);
        for direction in TorusDirection::directions() {
            let (dx, dy) = direction.delta();
            assert_eq!(direction.inv().delta(), (-dx, -dy));
            assert_eq!(direction.inv().inv(), direction);
        }
    }

    #[test]
    fn turns() {
        assert_eq!(TorusDirection::North.turn_counterclockwise(), TorusDirection::West);
        assert_eq!(TorusDirection::East.turn_clockwise(), TorusDirection::South);
        for direction in TorusDirection::directions() {
            assert_eq!(direction.turn_clockwise().turn_counterclockwise(), direction);
            assert_eq!(direction.rotate(4), direction);
        }
    }

    #[test]
    fn usize_round_trip() {
        for (n, direction) in TorusDirection::directions().enumerate() {
            assert_eq!(usize::from(direction), n);
            assert_eq!(TorusDirection::from(n), direction);
        }
    }
}
