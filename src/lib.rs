//! Lifeduel is the engine of a two-player Game of Life.
//!
//! Each player seeds a square board with a limited number of manual activations. Both boards then
//! evolve under the same rule, and the player whose board keeps more live cells wins.
//!
//! The crate only holds the simulation: [`GridEngine`] owns a board, its activation budget and an
//! undo history, [`Evolution`] runs boards in lock-step until they settle, and [`evaluate`] scores
//! a finished round. Rendering, input and animation timing are left to the caller.
//!
//! ```
//! use lifeduel::{Evolution, GridEngine, Outcome};
//!
//! let mut boards = vec![GridEngine::new(5, 4), GridEngine::new(5, 4)];
//! for &(x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2)] {
//!     boards[0].activate(x, y).unwrap();
//! }
//! boards[1].activate(0, 0).unwrap();
//! let initial: Vec<_> = boards.iter().map(GridEngine::snapshot).collect();
//!
//! Evolution::default().run(&mut boards);
//!
//! let result = lifeduel::evaluate(
//!     &initial[0],
//!     boards[0].grid(),
//!     &initial[1],
//!     boards[1].grid(),
//! )
//! .unwrap();
//! assert_eq!(result.outcome, Outcome::PlayerOneWins);
//! ```

mod config;
mod direction;
mod driver;
mod duel;
mod engine;
mod error;
mod evaluate;
mod grid;
mod moore;
mod neighborhood;
mod rule;
mod seed;

pub use config::*;
pub use direction::*;
pub use driver::*;
pub use duel::*;
pub use engine::*;
pub use error::*;
pub use evaluate::*;
pub use grid::*;
pub use moore::*;
pub use neighborhood::*;
pub use rule::*;
pub use seed::*;
