use crate::MooreNeighbors;

#[cfg(feature = "snapshot")]
use serde::{Deserialize, Serialize};

/// Defines how a cell moves from one generation to the next.
///
/// Every new cell is produced only from the old board state, so the update order can never change
/// the outcome of a generation.
pub trait Rule {
    /// Compute the next state of a cell from its current state and its neighbors.
    fn compute(&self, cell: bool, neighbors: MooreNeighbors<bool>) -> bool;
}

/// Conway's Game of Life (B3/S23).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct Conway;

impl Rule for Conway {
    #[inline]
    fn compute(&self, cell: bool, neighbors: MooreNeighbors<bool>) -> bool {
        let n = neighbors.count_alive();
        if cell {
            (2..=3).contains(&n)
        } else {
            n == 3
        }
    }
}

impl<F> Rule for F
where
    F: Fn(bool, MooreNeighbors<bool>) -> bool,
{
    #[inline]
    fn compute(&self, cell: bool, neighbors: MooreNeighbors<bool>) -> bool {
        self(cell, neighbors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Neighborhood;

    fn with_alive(n: usize) -> MooreNeighbors<bool> {
        (0..8).map(|i| i < n).collect()
    }

    #[test]
    fn conway_table() {
        for n in 0..=8 {
            assert_eq!(Conway.compute(true, with_alive(n)), n == 2 || n == 3, "survive {}", n);
            assert_eq!(Conway.compute(false, with_alive(n)), n == 3, "birth {}", n);
        }
    }

    #[test]
    fn closures_are_rules() {
        let seeds =
            |cell: bool, neighbors: MooreNeighbors<bool>| !cell && neighbors.count_alive() == 2;
        assert!(seeds.compute(false, with_alive(2)));
        assert!(!seeds.compute(true, with_alive(2)));
        assert!(!with_alive(0).iter().any(|c| c));
    }
}
