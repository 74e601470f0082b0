pub trait Direction: Sized {
    type Directions: Iterator<Item = Self>;

    /// An iterator over all directions, in the order a `Neighborhood` stores its neighbors.
    fn directions() -> Self::Directions;

    /// The step in `(x, y)` that leads from a cell to its neighbor in this direction.
    fn delta(self) -> (isize, isize);
}
