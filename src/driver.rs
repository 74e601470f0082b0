//! Moves any number of boards forward (or backward) together, one generation at a time.
//!
//! Nothing here sleeps or owns a clock. A caller animating the boards calls `step_all` once per
//! tick of its own timer; a caller that only wants the result calls `Evolution::run`.

use crate::{GridEngine, Rule};
use log::debug;

#[cfg(feature = "snapshot")]
use serde::{Deserialize, Serialize};

/// Advance every engine by one generation. Returns `true` if any engine changed.
pub fn step_all<R>(engines: &mut [GridEngine<R>]) -> bool
where
    R: Rule + Sync,
{
    engines
        .iter_mut()
        .fold(false, |changed, engine| engine.step() | changed)
}

/// Undo one generation on every engine. Returns `true` if any engine had history left.
pub fn undo_all<R>(engines: &mut [GridEngine<R>]) -> bool {
    engines
        .iter_mut()
        .fold(false, |undone, engine| engine.undo() | undone)
}

/// Run boards until they settle, bounded by a generation limit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct Evolution {
    pub max_generations: usize,
}

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "snapshot", derive(Serialize, Deserialize))]
pub struct EvolutionReport {
    /// Generations computed, including the final one in which nothing changed.
    pub generations: usize,
    /// Whether the run stopped because no board changed.
    pub quiescent: bool,
}

impl Evolution {
    pub fn new(max_generations: usize) -> Self {
        Evolution { max_generations }
    }

    /// Step all engines in lock-step until a generation changes no board, or the limit is hit.
    pub fn run<R>(&self, engines: &mut [GridEngine<R>]) -> EvolutionReport
    where
        R: Rule + Sync,
    {
        let mut report = EvolutionReport {
            generations: 0,
            quiescent: false,
        };
        while report.generations < self.max_generations {
            report.generations += 1;
            if !step_all(engines) {
                report.quiescent = true;
                break;
            }
        }
        debug!(
            "evolved {} boards for {} generations (quiescent: {})",
            engines.len(),
            report.generations,
            report.quiescent
        );
        report
    }
}

impl Default for Evolution {
    /// Fifty generations, the length of the original animation.
    fn default() -> Self {
        Evolution::new(50)
    }
}
