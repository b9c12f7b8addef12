use std::collections::HashSet;

use tracing::{debug, info};

use super::{ConfigError, LifeConfig, Seed};
use crate::domain::{CellId, Pattern, Simulator, StepSummary, presets};

/// GameState drives the simulator for an interactive session.
/// It plays the scheduler (fixed step interval) and debounces pointer toggles.
pub struct GameState {
    pub simulator: Simulator,
    pub config: LifeConfig,
    pub is_running: bool,
    pub update_timer: f32,
    pub last_step: StepSummary,
    pub last_step_time_ms: f32,   // Step performance metric
    pub last_render_time_ms: f32, // Render performance metric
    /// Cell toggled by the current pointer press, ignored until it moves or releases
    last_toggled: Option<(usize, usize)>,
    /// Cells edited by hand since the renderer last drained them
    edited: HashSet<CellId>,
}

impl GameState {
    /// Create a paused session seeded as the config asks
    pub fn new(config: LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = Self {
            simulator: Simulator::new(),
            config,
            is_running: false,
            update_timer: 0.0,
            last_step: StepSummary::default(),
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
            last_toggled: None,
            edited: HashSet::new(),
        };
        Ok(match state.config.seed {
            Seed::Empty => state.clear(),
            Seed::Random => state.randomize(),
            Seed::Gun => state.seed_gun(),
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!(running = self.is_running, "toggled simulation");
        self
    }

    /// Kill every cell, keeping the board when it already has the configured size
    pub fn clear(mut self) -> Self {
        let LifeConfig { width, height, .. } = self.config;
        if self.simulator.grid().dimensions() == (width, height) {
            let killed = self.simulator.clear();
            self.reset_session();
            self.edited.extend(killed);
        } else {
            self.simulator.init_empty(width, height);
            self.reset_session();
        }
        self
    }

    /// Replace the board with a random one at the configured density
    pub fn randomize(mut self) -> Self {
        let LifeConfig { width, height, density, .. } = self.config;
        self.simulator.init_random(width, height, density, &mut rand::rng());
        self.reset_session();
        self
    }

    /// Replace the board with the Gosper glider gun seed
    pub fn seed_gun(mut self) -> Self {
        let LifeConfig { width, height, .. } = self.config;
        self.simulator.init_from_pattern(width, height, &presets::glider_gun());
        self.reset_session();
        self
    }

    /// Change the step interval by `delta_ms`, kept within 1..=1000 ms
    pub fn adjust_interval(mut self, delta_ms: i64) -> Self {
        let interval = (self.config.interval_ms as i64 + delta_ms).clamp(1, 1000);
        self.config.interval_ms = interval as u64;
        debug!(interval_ms = self.config.interval_ms, "adjusted step interval");
        self
    }

    /// Advance exactly one generation regardless of the running flag
    pub fn step_once(mut self) -> Self {
        self.run_step();
        self
    }

    /// Update simulation by one frame.
    /// Steps at most once per frame, when the configured interval has elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.config.interval_secs() {
            self.run_step();
            self.update_timer = 0.0;
        }

        self
    }

    /// Toggle the cell under the pointer.
    /// Repeated calls for the same cell during one press are ignored.
    /// Returns the new state of the cell if it was toggled.
    pub fn toggle_at(&mut self, x: usize, y: usize) -> Option<bool> {
        if self.last_toggled == Some((x, y)) {
            return None;
        }
        let alive = self.simulator.toggle_cell(x, y)?.is_alive();
        self.edited.extend(self.simulator.grid().id_of(x, y));
        self.last_toggled = Some((x, y));
        Some(alive)
    }

    /// Stamp `pattern` with its top-left corner at (x, y)
    pub fn stamp_at(&mut self, pattern: &Pattern, x: usize, y: usize) {
        let born = self.simulator.stamp(pattern, x, y);
        debug!(pattern = pattern.name, x, y, born = born.len(), "stamped pattern");
        self.edited.extend(born);
    }

    /// Cells whose pixels may be stale: hand edits since the last call plus
    /// the simulator's current changed set. A step clears the changed set, so
    /// edits made in the same frame as a step survive only through here.
    pub fn take_repaint(&mut self) -> HashSet<CellId> {
        let mut repaint = std::mem::take(&mut self.edited);
        repaint.extend(self.simulator.changed_ids());
        repaint
    }

    /// Pointer released; the next press may toggle the same cell again
    pub fn release_pointer(&mut self) {
        self.last_toggled = None;
    }

    fn run_step(&mut self) {
        let start = std::time::Instant::now();
        self.last_step = self.simulator.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.last_toggled = None;
    }

    fn reset_session(&mut self) {
        self.is_running = false;
        self.update_timer = 0.0;
        self.last_step = StepSummary::default();
        self.last_toggled = None;
        self.edited.clear();
    }
}
