//! Random seeding with a caller-provided source of randomness, so tests can fix the seed.

use crate::{Error, Grid, GridEngine, Result};
use log::debug;
use rand::Rng;

fn check_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(Error::InvalidDensity(density))
    }
}

/// Bring each dead cell to life with probability `density`. Live cells stay alive.
///
/// Returns the number of cells brought to life.
pub fn seed_grid<G>(grid: &mut Grid, density: f64, rng: &mut G) -> Result<usize>
where
    G: Rng + ?Sized,
{
    check_density(density)?;
    let mut seeded = 0;
    for cell in grid.cells_mut() {
        if rng.gen_bool(density) && !*cell {
            *cell = true;
            seeded += 1;
        }
    }
    Ok(seeded)
}

/// Make a grid where each cell is alive with probability `density`.
pub fn random_grid<G>(side: usize, density: f64, rng: &mut G) -> Result<Grid>
where
    G: Rng + ?Sized,
{
    if side == 0 {
        return Err(Error::EmptyGrid);
    }
    let mut grid = Grid::new(side);
    seed_grid(&mut grid, density, rng)?;
    Ok(grid)
}

impl<R> GridEngine<R> {
    /// Randomly bring cells to life. The activation budget is not touched and the callback does not
    /// fire.
    pub fn seed_random<G>(&mut self, density: f64, rng: &mut G) -> Result<usize>
    where
        G: Rng + ?Sized,
    {
        let seeded = seed_grid(self.grid_mut(), density, rng)?;
        debug!("seeded {} cells at density {}", seeded, density);
        Ok(seeded)
    }
}
