use crate::{Error, GridEngine, Result};
use rand::Rng;

#[cfg(feature = "snapshot")]
use serde::{Deserialize, Serialize};

/// How to set up one player's board.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Side length of the square board.
    pub side: usize,
    /// How many cells the player may bring to life by hand.
    pub activation_limit: usize,
    /// Probability that each cell starts alive. `None` starts with an empty board.
    pub seed_density: Option<f64>,
}

impl EngineConfig {
    /// One in ten cells, as in the original game.
    pub const REFERENCE_SEED_DENSITY: f64 = 0.1;

    pub fn validate(&self) -> Result<()> {
        if self.side == 0 {
            return Err(Error::EmptyGrid);
        }
        match self.seed_density {
            Some(density) if !(0.0..=1.0).contains(&density) => {
                Err(Error::InvalidDensity(density))
            }
            _ => Ok(()),
        }
    }

    /// Build an engine, seeding it from `rng` if a density is configured.
    pub fn build<G>(&self, rng: &mut G) -> Result<GridEngine>
    where
        G: Rng + ?Sized,
    {
        let mut engine = self.build_empty()?;
        if let Some(density) = self.seed_density {
            engine.seed_random(density, rng)?;
        }
        Ok(engine)
    }

    /// Build an engine with every cell dead, ignoring `seed_density`.
    pub fn build_empty(&self) -> Result<GridEngine> {
        self.validate()?;
        Ok(GridEngine::new(self.side, self.activation_limit))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            side: 10,
            activation_limit: 10,
            seed_density: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_builds_an_empty_board() {
        let engine = EngineConfig::default().build_empty().unwrap();
        assert_eq!(engine.side(), 10);
        assert_eq!(engine.remaining(), 10);
        assert_eq!(engine.count_active(), 0);
    }

    #[test]
    fn seeded_build_is_reproducible() {
        let config = EngineConfig {
            side: 20,
            activation_limit: 4,
            seed_density: Some(EngineConfig::REFERENCE_SEED_DENSITY),
        };
        let a = config.build(&mut StdRng::seed_from_u64(99)).unwrap();
        let b = config.build(&mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.remaining(), 4);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let zero = EngineConfig {
            side: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(zero.build_empty(), Err(Error::EmptyGrid)));
        let dense = EngineConfig {
            seed_density: Some(-0.1),
            ..EngineConfig::default()
        };
        assert!(matches!(
            dense.build(&mut StdRng::seed_from_u64(0)),
            Err(Error::InvalidDensity(_))
        ));
    }
}
