use crate::{Conway, GetNeighbors, Grid, Result, Rule};
use log::{debug, trace};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use std::fmt;

/// What a manual activation did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The cell was dead and is now alive. One unit of budget was spent.
    Activated,
    /// The cell was already alive. Nothing changed.
    AlreadyActive,
    /// The cell was dead but the budget is spent. Nothing changed.
    Exhausted,
}

/// The state of one player's board.
///
/// Owns the grid, the budget of manual activations and the history of every generation computed
/// so far, so any number of generations can be undone.
pub struct GridEngine<R = Conway> {
    grid: Grid,
    rule: R,
    budget: usize,
    history: Vec<Grid>,
    on_activate: Option<Box<dyn FnMut()>>,
}

impl GridEngine<Conway> {
    /// Make an engine with every cell dead playing Conway's Game of Life.
    ///
    /// Panics if `side` is zero.
    pub fn new(side: usize, activation_limit: usize) -> Self {
        Self::with_rule(side, activation_limit, Conway)
    }
}

impl<R> GridEngine<R> {
    /// Make an engine with every cell dead playing a custom rule.
    pub fn with_rule(side: usize, activation_limit: usize, rule: R) -> Self {
        GridEngine {
            grid: Grid::new(side),
            rule,
            budget: activation_limit,
            history: Vec::new(),
            on_activate: None,
        }
    }

    /// Register the callback that fires after every successful `activate`. Replaces any
    /// previous callback.
    pub fn on_activate<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_activate = Some(Box::new(callback));
    }

    /// Manually bring a cell to life, spending one unit of budget.
    pub fn activate(&mut self, x: usize, y: usize) -> Result<Activation> {
        if self.grid.get(x, y)? {
            return Ok(Activation::AlreadyActive);
        }
        if self.budget == 0 {
            return Ok(Activation::Exhausted);
        }
        self.grid.set(x, y, true)?;
        self.budget -= 1;
        trace!("activated ({}, {}), {} activations left", x, y, self.budget);
        if let Some(callback) = self.on_activate.as_mut() {
            callback();
        }
        Ok(Activation::Activated)
    }

    /// Kill a cell. The budget is not touched.
    pub fn deactivate(&mut self, x: usize, y: usize) -> Result<()> {
        self.set_active(x, y, false)
    }

    /// Set a cell directly. The budget is not touched.
    pub fn set_active(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.grid.set(x, y, alive).map(drop)
    }

    /// Flip a cell, returning its new state. The budget is not touched.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let alive = !self.grid.get(x, y)?;
        self.grid.set(x, y, alive)?;
        Ok(alive)
    }

    pub fn is_active(&self, x: usize, y: usize) -> Result<bool> {
        self.grid.get(x, y)
    }

    pub fn count_active(&self) -> usize {
        self.grid.count_active()
    }

    /// Undo the most recent generation. Returns `false` when there was nothing to undo.
    ///
    /// The activation budget is not restored.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.grid = previous;
                debug!("undid a generation, {} left in history", self.history.len());
                true
            }
            None => false,
        }
    }

    /// Copy the current board. The copy never aliases the engine.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Replace the board with `state`, keeping budget and history.
    pub fn set_state(&mut self, state: &Grid) -> Result<()> {
        self.grid.ensure_same_side(state)?;
        self.grid.clone_from(state);
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn side(&self) -> usize {
        self.grid.side()
    }

    /// Manual activations left.
    pub fn remaining(&self) -> usize {
        self.budget
    }

    /// Number of generations that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl<R> GridEngine<R>
where
    R: Rule + Sync,
{
    /// Compute one generation in parallel. Returns `true` iff any cell changed.
    ///
    /// The board before the generation is pushed onto the history first.
    pub fn step(&mut self) -> bool {
        let side = self.grid.side();
        let grid = &self.grid;
        let rule = &self.rule;
        let next: Vec<bool> = grid
            .cells()
            .par_iter()
            .enumerate()
            .map(|(ix, &cell)| rule.compute(cell, grid.get_neighbors((ix % side, ix / side))))
            .collect();
        let changed = grid
            .cells()
            .par_iter()
            .zip(next.par_iter())
            .filter(|(old, new)| old != new)
            .count();

        self.history.push(self.grid.clone());
        self.grid.cells_mut().copy_from_slice(&next);
        debug!(
            "generation {} changed {} cells",
            self.history.len(),
            changed
        );
        changed > 0
    }
}

impl<R> fmt::Debug for GridEngine<R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridEngine")
            .field("grid", &self.grid)
            .field("rule", &self.rule)
            .field("budget", &self.budget)
            .field("history", &self.history.len())
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}
