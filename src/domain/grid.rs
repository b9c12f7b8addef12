use super::{Cell, Pattern, rules};
use rand::Rng;

/// Stable handle to a cell inside a [`Grid`] arena (row-major index).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CellId(usize);

/// Offsets of the 8 surrounding cells
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Single-step wraparound: one past either edge lands on the opposite edge.
/// Offsets are always ±1, so no general modulo is needed.
const fn wrap(i: isize, dim: usize) -> usize {
    if i < 0 {
        dim - 1
    } else if i as usize >= dim {
        0
    } else {
        i as usize
    }
}

/// Grid owns the cells of a toroidal `width × height` lattice.
/// Cells are created once per initialization and live until the grid is replaced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| false)
    }

    /// Create a grid where each cell is alive with probability `density`.
    ///
    /// `density` is the probability of a cell being ALIVE. Values above 1
    /// fill the grid, values below 0 (or NaN) leave it empty.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, density: f64, rng: &mut R) -> Self {
        Self::from_fn(width, height, |_, _| rng.random::<f64>() < density)
    }

    /// Create a grid seeded with `pattern` at the top-left origin.
    /// Pattern cells that fall outside the grid are dropped.
    pub fn from_pattern(width: usize, height: usize, pattern: &Pattern) -> Self {
        let mut grid = Self::new(width, height);
        for &(x, y) in &pattern.cells {
            if let Some(id) = grid.id_of(x, y) {
                grid.cells[id.0] = Cell::new(x, y, true);
            }
        }
        grid
    }

    fn from_fn(width: usize, height: usize, mut alive: impl FnMut(usize, usize) -> bool) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| Cell::new(x, y, alive(x, y)))
            .collect();
        Self { width, height, cells }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for an uninitialized (0-sized) grid
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Resolve coordinates to a cell handle (with bounds checking)
    pub fn id_of(&self, x: usize, y: usize) -> Option<CellId> {
        (x < self.width && y < self.height).then(|| CellId(y * self.width + x))
    }

    /// Get cell at position (with bounds checking)
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.id_of(x, y).map(|id| &self.cells[id.0])
    }

    pub(crate) fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub(crate) fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    /// Handles of the 8 cells surrounding (x, y), wrapping at the edges.
    /// `None` when (x, y) is outside the grid.
    pub fn neighbor_ids(&self, x: usize, y: usize) -> Option<[CellId; 8]> {
        self.id_of(x, y)?;
        let (w, h) = (self.width, self.height);
        Some(NEIGHBOR_OFFSETS.map(|(dx, dy)| {
            let nx = wrap(x as isize + dx, w);
            let ny = wrap(y as isize + dy, h);
            CellId(ny * w + nx)
        }))
    }

    /// The 8 cells surrounding (x, y) with toroidal wrapping.
    /// Yields nothing for coordinates outside the grid.
    pub fn neighbors_of(&self, x: usize, y: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.neighbor_ids(x, y)
            .into_iter()
            .flatten()
            .map(|id| &self.cells[id.0])
    }

    /// Count live neighbors of (x, y) from their current state
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighbors_of(x, y).filter(|cell| cell.is_alive()).count() as u8
    }

    /// Iterate over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Count alive cells by scanning the whole grid
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Full-scan evolution - returns new grid with every cell evaluated.
    /// Baseline for checking and benchmarking the incremental simulator.
    pub fn next_generation(&self) -> Self {
        Self::from_fn(self.width, self.height, |x, y| {
            let alive = self.cell_at(x, y).is_some_and(Cell::is_alive);
            rules::next_alive(alive, self.live_neighbors(x, y))
        })
    }
}
