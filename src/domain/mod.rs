mod cell;
mod grid;
pub mod rules;
mod patterns;
mod simulator;

pub use cell::Cell;
pub use grid::{CellId, Grid};
pub use patterns::{Pattern, presets};
pub use simulator::{Simulator, StepSummary};
