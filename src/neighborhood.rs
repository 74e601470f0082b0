use crate::Direction;

/// A `Neighborhood` contains all of your neighbors, which are each in their own `Direction`.
pub trait Neighborhood<T>: std::iter::FromIterator<T> {
    type Direction: Direction;
    type Iter: Iterator<Item = T>;

    fn new<F: FnMut(Self::Direction) -> T>(dir_map: F) -> Self;

    /// Iterate over all neighbor cells.
    fn iter(self) -> Self::Iter;
}

pub trait GetNeighbors<Idx, Neighbors> {
    /// Gather the neighbors of the cell at `index`. Neighbors that fall off the grid are padding.
    fn get_neighbors(&self, index: Idx) -> Neighbors;
}
