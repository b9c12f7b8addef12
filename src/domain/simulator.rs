//! Incremental Game of Life simulation.
//!
//! The simulator owns the active [`Grid`] and is the only entry point that
//! mutates cells, so the alive and changed sets are updated at the moment a
//! cell's state changes instead of being recomputed by scanning the grid.
//!
//! A step only visits the candidate set (alive cells plus their neighbors):
//! a dead cell with no live neighbor can never be born.

use std::collections::HashSet;

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::{Cell, CellId, Grid, Pattern, rules};

/// What happened during one call to [`Simulator::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Generation reached after the step
    pub generation: u64,
    /// Number of cells evaluated
    pub candidates: usize,
    /// Number of cells that flipped
    pub changed: usize,
    /// Alive cells after the step
    pub alive: usize,
}

/// Owns the grid plus the incrementally maintained alive and changed sets
#[derive(Default)]
pub struct Simulator {
    grid: Grid,
    alive: HashSet<CellId>,
    changed: HashSet<CellId>,
    generation: u64,
}

impl Simulator {
    /// Create a simulator with no grid; every query returns an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator driving `grid`
    pub fn with_grid(grid: Grid) -> Self {
        let mut sim = Self::new();
        sim.load(grid);
        sim
    }

    /// Replace the active grid and rebuild tracking from it.
    ///
    /// Every cell of the new grid is reported as changed so a renderer
    /// repaints the whole board once.
    pub fn load(&mut self, grid: Grid) {
        self.alive.clear();
        self.changed.clear();
        self.generation = 0;
        self.grid = grid;

        let ids: Vec<(CellId, bool)> = self
            .grid
            .iter_cells()
            .filter_map(|cell| {
                let id = self.grid.id_of(cell.x(), cell.y())?;
                Some((id, cell.is_alive()))
            })
            .collect();
        for (id, alive) in ids {
            self.register_changed(id);
            if alive {
                self.register_alive(id);
            }
        }

        let (width, height) = self.grid.dimensions();
        debug!(width, height, alive = self.alive.len(), "loaded grid");
    }

    /// Replace the grid with an empty `width × height` board
    pub fn init_empty(&mut self, width: usize, height: usize) {
        self.load(Grid::new(width, height));
    }

    /// Replace the grid with a random board; `density` is the probability
    /// of a cell starting alive
    pub fn init_random<R: Rng + ?Sized>(&mut self, width: usize, height: usize, density: f64, rng: &mut R) {
        self.load(Grid::random(width, height, density, rng));
    }

    /// Replace the grid with `pattern` seeded at the top-left origin
    pub fn init_from_pattern(&mut self, width: usize, height: usize, pattern: &Pattern) {
        self.load(Grid::from_pattern(width, height, pattern));
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of completed steps since the last grid load
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells currently alive (unordered)
    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.alive.iter().map(|&id| self.grid.cell(id))
    }

    /// Cells flipped by the most recent step, plus any toggled or reset since
    pub fn changed_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.changed.iter().map(|&id| self.grid.cell(id))
    }

    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }

    pub(crate) fn changed_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.changed.iter().copied()
    }

    pub(crate) fn register_alive(&mut self, id: CellId) {
        self.alive.insert(id);
    }

    pub(crate) fn unregister_alive(&mut self, id: CellId) {
        self.alive.remove(&id);
    }

    pub(crate) fn register_changed(&mut self, id: CellId) {
        self.changed.insert(id);
    }

    /// Keep the alive set in sync with the current state of `id`
    fn sync_alive(&mut self, id: CellId) {
        if self.grid.cell(id).is_alive() {
            self.register_alive(id);
        } else {
            self.unregister_alive(id);
        }
    }

    /// Alive cells plus their 8-neighborhoods: the only cells that can change
    /// in the next step. Recomputed on every call.
    pub fn candidate_cells(&self) -> HashSet<CellId> {
        let mut candidates = HashSet::with_capacity(self.alive.len() * 9);
        for &id in &self.alive {
            candidates.insert(id);
            let cell = self.grid.cell(id);
            if let Some(neighbors) = self.grid.neighbor_ids(cell.x(), cell.y()) {
                candidates.extend(neighbors);
            }
        }
        candidates
    }

    /// Apply the rule to one cell using its current state and its
    /// neighbors' current state
    fn next_state(&self, id: CellId) -> bool {
        let cell = self.grid.cell(id);
        let neighbors = self.grid.live_neighbors(cell.x(), cell.y());
        rules::next_alive(cell.is_alive(), neighbors)
    }

    /// Advance the simulation by one generation
    pub fn step(&mut self) -> StepSummary {
        let candidates: Vec<CellId> = self.candidate_cells().into_iter().collect();
        self.step_over(&candidates)
    }

    /// Advance one generation with the decide phase spread across rayon's
    /// thread pool. Produces exactly the same state as [`Simulator::step`].
    pub fn step_parallel(&mut self) -> StepSummary {
        self.changed.clear();
        let candidates: Vec<CellId> = self.candidate_cells().into_iter().collect();

        // Decide: read-only over the grid, safe to evaluate concurrently
        let decisions: Vec<(CellId, bool)> = candidates
            .par_iter()
            .map(|&id| (id, self.next_state(id)))
            .collect();
        for (id, next) in decisions {
            self.schedule(id, next);
        }

        self.commit_all(&candidates);
        self.finish_step(candidates.len())
    }

    /// Two-phase step over an explicit candidate order
    pub(crate) fn step_over(&mut self, candidates: &[CellId]) -> StepSummary {
        self.changed.clear();

        // Decide: only next_alive is written, so every cell sees its
        // neighbors' pre-step state regardless of iteration order
        for &id in candidates {
            let next = self.next_state(id);
            self.schedule(id, next);
        }

        self.commit_all(candidates);
        self.finish_step(candidates.len())
    }

    fn schedule(&mut self, id: CellId, next: bool) {
        if self.grid.cell_mut(id).schedule(next) {
            self.register_changed(id);
        }
    }

    fn commit_all(&mut self, candidates: &[CellId]) {
        for &id in candidates {
            if self.grid.cell_mut(id).commit() {
                self.sync_alive(id);
            }
        }
    }

    fn finish_step(&mut self, candidates: usize) -> StepSummary {
        self.generation += 1;
        let summary = StepSummary {
            generation: self.generation,
            candidates,
            changed: self.changed.len(),
            alive: self.alive.len(),
        };
        trace!(
            generation = summary.generation,
            candidates = summary.candidates,
            changed = summary.changed,
            alive = summary.alive,
            "step",
        );
        summary
    }

    /// Flip the cell at (x, y) immediately. Returns `None` out of bounds.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Option<&Cell> {
        let id = self.grid.id_of(x, y)?;
        self.grid.cell_mut(id).toggle();
        self.register_changed(id);
        self.sync_alive(id);
        Some(self.grid.cell(id))
    }

    /// Force the cell at (x, y) dead. Returns `None` out of bounds.
    pub fn reset(&mut self, x: usize, y: usize) -> Option<&Cell> {
        let id = self.grid.id_of(x, y)?;
        if self.grid.cell_mut(id).kill() {
            self.register_changed(id);
        }
        self.unregister_alive(id);
        Some(self.grid.cell(id))
    }

    /// Kill every alive cell without rebuilding the grid.
    /// Returns the cells that died.
    pub fn clear(&mut self) -> Vec<CellId> {
        let killed: Vec<CellId> = self.alive.drain().collect();
        for &id in &killed {
            self.grid.cell_mut(id).kill();
            self.register_changed(id);
        }
        debug!(killed = killed.len(), "cleared grid");
        killed
    }

    /// Stamp `pattern` with its top-left corner at (x, y), wrapping around
    /// the edges. Stamped cells become alive immediately.
    /// Returns the cells that were born.
    pub fn stamp(&mut self, pattern: &Pattern, x: usize, y: usize) -> Vec<CellId> {
        let (width, height) = self.grid.dimensions();
        if self.grid.is_empty() {
            return Vec::new();
        }
        // Both terms stay below the side length, so the sums cannot overflow
        let (x, y) = (x % width, y % height);
        let mut born = Vec::new();
        for &(dx, dy) in &pattern.cells {
            let Some(id) = self.grid.id_of((x + dx % width) % width, (y + dy % height) % height) else {
                continue;
            };
            if self.grid.cell_mut(id).revive() {
                self.register_changed(id);
                born.push(id);
            }
            self.register_alive(id);
        }
        born
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn alive_coords(sim: &Simulator) -> Vec<(usize, usize)> {
        let mut coords: Vec<_> = sim.alive_cells().map(|c| (c.x(), c.y())).collect();
        coords.sort();
        coords
    }

    fn changed_coords(sim: &Simulator) -> Vec<(usize, usize)> {
        let mut coords: Vec<_> = sim.changed_cells().map(|c| (c.x(), c.y())).collect();
        coords.sort();
        coords
    }

    fn with_alive(width: usize, height: usize, cells: &[(usize, usize)]) -> Simulator {
        let mut sim = Simulator::new();
        sim.init_empty(width, height);
        for &(x, y) in cells {
            sim.toggle_cell(x, y);
        }
        sim
    }

    fn assert_alive_set_consistent(sim: &Simulator) {
        let scanned: Vec<_> = {
            let mut v: Vec<_> = sim
                .grid()
                .iter_cells()
                .filter(|c| c.is_alive())
                .map(|c| (c.x(), c.y()))
                .collect();
            v.sort();
            v
        };
        assert_eq!(alive_coords(sim), scanned);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut sim = with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        sim.step();
        assert_eq!(alive_coords(&sim), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(changed_coords(&sim), vec![(1, 2), (2, 1), (2, 3), (3, 2)]);

        sim.step();
        assert_eq!(alive_coords(&sim), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_block_still_life() {
        let mut sim = with_alive(10, 10, &[(4, 4), (5, 4), (4, 5), (5, 5)]);

        for _ in 0..5 {
            let summary = sim.step();
            assert_eq!(summary.changed, 0);
            assert_eq!(sim.changed_count(), 0);
            assert_eq!(alive_coords(&sim), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
        }
    }

    #[test]
    fn test_wraparound_neighbor_counted() {
        let sim = with_alive(6, 6, &[(5, 5)]);
        assert_eq!(sim.grid().live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_birth_across_corner() {
        // Three cells around the corner wrap to give (0, 0) three neighbors
        let mut sim = with_alive(6, 6, &[(5, 5), (5, 0), (0, 5)]);
        sim.step();
        assert!(sim.grid().cell_at(0, 0).unwrap().is_alive());
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut sim = Simulator::new();
        sim.init_empty(4, 4);
        sim.changed.clear();
        let id = sim.grid().id_of(1, 1).unwrap();

        sim.register_alive(id);
        sim.register_alive(id);
        sim.register_changed(id);
        sim.register_changed(id);
        assert_eq!(sim.alive_count(), 1);
        assert_eq!(sim.changed_count(), 1);

        sim.unregister_alive(id);
        sim.unregister_alive(id);
        assert_eq!(sim.alive_count(), 0);
    }

    #[test]
    fn test_toggle_is_immediate() {
        let mut sim = Simulator::new();
        sim.init_empty(8, 8);
        sim.step();

        let cell = sim.toggle_cell(3, 4).unwrap();
        assert!(cell.is_alive());
        assert!(!cell.is_pending());
        assert_eq!(alive_coords(&sim), vec![(3, 4)]);
        assert_eq!(changed_coords(&sim), vec![(3, 4)]);

        let cell = sim.toggle_cell(3, 4).unwrap();
        assert!(!cell.is_alive());
        assert_eq!(sim.alive_count(), 0);
        assert_eq!(changed_coords(&sim), vec![(3, 4)]);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut sim = Simulator::new();
        sim.init_empty(8, 8);
        assert!(sim.toggle_cell(8, 0).is_none());
        assert!(sim.toggle_cell(0, 8).is_none());
        assert!(sim.reset(99, 99).is_none());
    }

    #[test]
    fn test_reset_forces_dead() {
        let mut sim = with_alive(8, 8, &[(2, 2), (3, 3)]);

        let cell = sim.reset(2, 2).unwrap();
        assert!(!cell.is_alive() && !cell.is_next_alive());
        assert_eq!(alive_coords(&sim), vec![(3, 3)]);
        assert!(changed_coords(&sim).contains(&(2, 2)));

        // Resetting a dead cell reports nothing new
        let before = sim.changed_count();
        sim.reset(6, 6);
        assert_eq!(sim.changed_count(), before);
    }

    #[test]
    fn test_uninitialized_simulator_is_inert() {
        let mut sim = Simulator::new();
        assert!(sim.candidate_cells().is_empty());
        let summary = sim.step();
        assert_eq!(summary.candidates, 0);
        assert_eq!(summary.changed, 0);
        assert!(sim.toggle_cell(0, 0).is_none());
        sim.stamp(&presets::glider(), 0, 0);
        sim.clear();
        assert_eq!(sim.alive_count(), 0);
    }

    #[test]
    fn test_load_reports_every_cell_changed() {
        let mut sim = Simulator::new();
        sim.init_from_pattern(6, 4, &presets::block());
        assert_eq!(sim.changed_count(), 24);
        assert_eq!(sim.alive_count(), 4);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_candidates_cover_neighborhood() {
        let sim = with_alive(10, 10, &[(0, 0)]);
        let candidates = sim.candidate_cells();
        assert_eq!(candidates.len(), 9);
        for cell in sim.grid().neighbors_of(0, 0) {
            let id = sim.grid().id_of(cell.x(), cell.y()).unwrap();
            assert!(candidates.contains(&id));
        }
    }

    #[test]
    fn test_changed_set_matches_diff() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sim = Simulator::new();
        sim.init_random(30, 20, 0.35, &mut rng);

        for _ in 0..25 {
            let before: Vec<bool> = sim.grid().iter_cells().map(Cell::is_alive).collect();
            let candidates = sim.candidate_cells();
            sim.step();

            let mut diff: Vec<_> = sim
                .grid()
                .iter_cells()
                .zip(&before)
                .filter(|(cell, was)| cell.is_alive() != **was)
                .map(|(cell, _)| (cell.x(), cell.y()))
                .collect();
            diff.sort();
            assert_eq!(changed_coords(&sim), diff);

            for &(x, y) in &diff {
                assert!(candidates.contains(&sim.grid().id_of(x, y).unwrap()));
            }
            assert_alive_set_consistent(&sim);
            assert!(sim.grid().iter_cells().all(|c| !c.is_pending()));
        }
    }

    #[test]
    fn test_order_independence() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = Grid::random(24, 24, 0.4, &mut rng);
        let mut ordered = Simulator::with_grid(grid.clone());
        let mut shuffled = Simulator::with_grid(grid);

        for _ in 0..10 {
            let mut candidates: Vec<CellId> = ordered.candidate_cells().into_iter().collect();
            candidates.sort();
            ordered.step_over(&candidates);

            let mut candidates: Vec<CellId> = shuffled.candidate_cells().into_iter().collect();
            candidates.shuffle(&mut rng);
            shuffled.step_over(&candidates);

            assert_eq!(ordered.grid(), shuffled.grid());
            assert_eq!(changed_coords(&ordered), changed_coords(&shuffled));
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(1234);
        let grid = Grid::random(50, 50, 0.3, &mut rng);
        let mut serial = Simulator::with_grid(grid.clone());
        let mut parallel = Simulator::with_grid(grid);

        for _ in 0..20 {
            let a = serial.step();
            let b = parallel.step_parallel();
            assert_eq!(a, b);
            assert_eq!(serial.grid(), parallel.grid());
        }
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut sim = with_alive(8, 8, &[(1, 1), (2, 2), (3, 3)]);
        sim.step();
        sim.clear();
        assert_eq!(sim.alive_count(), 0);
        assert_eq!(sim.grid().count_alive(), 0);
    }

    #[test]
    fn test_clear_returns_killed_cells() {
        let mut sim = with_alive(8, 8, &[(1, 1), (6, 2)]);
        let mut killed: Vec<_> = sim
            .clear()
            .into_iter()
            .map(|id| {
                let cell = sim.grid().cell(id);
                (cell.x(), cell.y())
            })
            .collect();
        killed.sort();
        assert_eq!(killed, vec![(1, 1), (6, 2)]);
        assert!(sim.clear().is_empty());
    }

    #[test]
    fn test_stamp_wraps_around_edges() {
        let mut sim = Simulator::new();
        sim.init_empty(5, 5);
        let born = sim.stamp(&presets::blinker(), 4, 4);
        assert_eq!(born.len(), 3);
        assert_eq!(alive_coords(&sim), vec![(0, 4), (1, 4), (4, 4)]);
        assert_alive_set_consistent(&sim);

        // Stamping over live cells reports only new births
        assert!(sim.stamp(&presets::blinker(), 4, 4).is_empty());
    }

    #[test]
    fn test_stamp_near_usize_max_wraps() {
        let mut sim = Simulator::new();
        sim.init_empty(5, 5);
        // usize::MAX % 5 == 0
        sim.stamp(&presets::blinker(), usize::MAX, usize::MAX);
        assert_eq!(alive_coords(&sim), vec![(0, 0), (1, 0), (2, 0)]);
    }
}
