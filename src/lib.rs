// Domain layer - simulation core
pub mod domain;

// Application layer - session state, scheduling and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellId, Grid, Pattern, Simulator, StepSummary, presets};
pub use application::{ConfigError, GameState, LifeConfig, Seed};
