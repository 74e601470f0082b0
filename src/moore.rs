use crate::{Direction, GetNeighbors, Grid, Neighborhood};
use enum_iterator::IntoEnumIterator;
use std::iter::{once, Chain, Once};
use std::ops::Index;
use MooreDirection::*;

/// The eight directions of the Moore neighborhood, counter-clockwise from the right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
pub enum MooreDirection {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction for MooreDirection {
    type Directions = <MooreDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        MooreDirection::into_enum_iter()
    }

    #[inline]
    fn delta(self) -> (isize, isize) {
        match self {
            Right => (1, 0),
            UpRight => (1, -1),
            Up => (0, -1),
            UpLeft => (-1, -1),
            Left => (-1, 0),
            DownLeft => (-1, 1),
            Down => (0, 1),
            DownRight => (1, 1),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MooreNeighbors<T> {
    pub right: T,
    pub up_right: T,
    pub up: T,
    pub up_left: T,
    pub left: T,
    pub down_left: T,
    pub down: T,
    pub down_right: T,
}

impl MooreNeighbors<bool> {
    /// Number of alive neighbors.
    #[inline]
    pub fn count_alive(self) -> usize {
        self.iter().filter(|&c| c).count()
    }
}

impl<T> std::iter::FromIterator<T> for MooreNeighbors<T> {
    /// Panics if the iterator yields fewer than eight items.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let mut next = || {
            iter.next()
                .expect("MooreNeighbors::from_iter: fewer than eight neighbors")
        };
        Self {
            right: next(),
            up_right: next(),
            up: next(),
            up_left: next(),
            left: next(),
            down_left: next(),
            down: next(),
            down_right: next(),
        }
    }
}

impl<T> Index<MooreDirection> for MooreNeighbors<T> {
    type Output = T;
    #[inline]
    fn index(&self, ix: MooreDirection) -> &T {
        match ix {
            Right => &self.right,
            UpRight => &self.up_right,
            Up => &self.up,
            UpLeft => &self.up_left,
            Left => &self.left,
            DownLeft => &self.down_left,
            Down => &self.down,
            DownRight => &self.down_right,
        }
    }
}

type NeighborhoodIter<T> = Chain<
    Chain<
        Chain<Chain<Chain<Chain<Chain<Once<T>, Once<T>>, Once<T>>, Once<T>>, Once<T>>, Once<T>>,
        Once<T>,
    >,
    Once<T>,
>;

impl<T> Neighborhood<T> for MooreNeighbors<T> {
    type Direction = MooreDirection;
    type Iter = NeighborhoodIter<T>;

    #[inline]
    fn new<F: FnMut(MooreDirection) -> T>(f: F) -> MooreNeighbors<T> {
        MooreDirection::directions().map(f).collect()
    }

    #[inline]
    fn iter(self) -> Self::Iter {
        once(self.right)
            .chain(once(self.up_right))
            .chain(once(self.up))
            .chain(once(self.up_left))
            .chain(once(self.left))
            .chain(once(self.down_left))
            .chain(once(self.down))
            .chain(once(self.down_right))
    }
}

/// Cells off the edge of the grid count as dead.
impl GetNeighbors<(usize, usize), MooreNeighbors<bool>> for Grid {
    #[inline]
    fn get_neighbors(&self, (x, y): (usize, usize)) -> MooreNeighbors<bool> {
        MooreNeighbors::new(|dir| {
            self.delta_index(x, y, dir.delta())
                .map_or(false, |ix| self.cells()[ix])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_cover_every_neighbor_once() {
        let mut deltas: Vec<(isize, isize)> = MooreDirection::directions()
            .map(Direction::delta)
            .collect();
        deltas.sort();
        let mut expected: Vec<(isize, isize)> = (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&d| d != (0, 0))
            .collect();
        expected.sort();
        assert_eq!(deltas, expected);
    }

    #[test]
    fn neighbors_are_stored_by_direction() {
        let neighbors = MooreNeighbors::new(MooreDirection::delta);
        for dir in MooreDirection::directions() {
            assert_eq!(neighbors[dir], dir.delta());
        }
    }

    #[test]
    fn corner_sees_only_three_cells() {
        let grid = Grid::from_fn(3, |_, _| true);
        assert_eq!(grid.get_neighbors((0, 0)).count_alive(), 3);
        assert_eq!(grid.get_neighbors((2, 2)).count_alive(), 3);
        assert_eq!(grid.get_neighbors((1, 0)).count_alive(), 5);
        assert_eq!(grid.get_neighbors((1, 1)).count_alive(), 8);
    }

    #[test]
    fn neighbors_land_in_their_direction() {
        let grid = Grid::from_alive(3, vec![(2, 0)]).unwrap();
        let neighbors = grid.get_neighbors((1, 1));
        assert!(neighbors[UpRight]);
        assert_eq!(neighbors.count_alive(), 1);
        let collected: MooreNeighbors<bool> = neighbors.iter().collect();
        assert_eq!(collected, neighbors);
    }

    #[test]
    fn edges_do_not_wrap() {
        let grid = Grid::from_alive(4, vec![(3, 1)]).unwrap();
        assert_eq!(grid.get_neighbors((0, 1)).count_alive(), 0);
    }
}
