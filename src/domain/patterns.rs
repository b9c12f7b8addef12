/// A seed pattern: the alive cells of a rectangular literal, anchored at its
/// top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative (x, y) of alive cells
}

impl Pattern {
    /// Build a pattern from a 0/1 literal, one slice per row (y).
    ///
    /// Parsing is permissive: rows may have different lengths (missing
    /// cells are dead) and any non-zero value counts as alive.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let mut cells = Vec::new();
        let mut width = 0;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            width = width.max(row.len());
            cells.extend(
                row.iter()
                    .enumerate()
                    .filter(|&(_, &v)| v != 0)
                    .map(|(x, _)| (x, y)),
            );
        }
        Self {
            name: "Custom",
            description: "User supplied literal",
            width,
            height: rows.len(),
            cells,
        }
    }

    /// Parse the plaintext `.cells` layout: `O`, `*` or `1` is alive,
    /// anything else is dead, lines starting with `!` are comments.
    pub fn from_plaintext(text: &str) -> Self {
        let rows: Vec<Vec<u8>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('!'))
            .map(|line| line.chars().map(|c| u8::from(matches!(c, 'O' | '*' | '1'))).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Rename the pattern (builder pattern)
    pub fn named(mut self, name: &'static str, description: &'static str) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    /// Check whether the pattern marks (x, y) alive
    pub fn is_alive_at(&self, x: usize, y: usize) -> bool {
        self.cells.contains(&(x, y))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    fn plaintext(name: &'static str, description: &'static str, rows: &[&str]) -> Pattern {
        Pattern::from_plaintext(&rows.join("\n")).named(name, description)
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        plaintext("Glider", "Moves diagonally (period 4)", &[
            ".O.",
            "..O",
            "OOO",
        ])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        plaintext("Blinker", "Oscillator (period 2)", &["OOO"])
    }

    pub fn toad() -> Pattern {
        plaintext("Toad", "Oscillator (period 2)", &[
            ".OOO",
            "OOO.",
        ])
    }

    pub fn beacon() -> Pattern {
        plaintext("Beacon", "Oscillator (period 2)", &[
            "OO..",
            "O...",
            "...O",
            "..OO",
        ])
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        plaintext("Pulsar", "Oscillator (period 3)", &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ])
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        plaintext("LWSS", "Lightweight Spaceship (period 4)", &[
            ".O..O",
            "O....",
            "O...O",
            "OOOO.",
        ])
    }

    /// Gosper Glider Gun - the "gun" seed, emits a glider every 30 steps.
    ///
    /// Rows are `y` and columns are `x`, anchored at the origin with no
    /// border. Seeds that index the same literal as `[x][y]` (with a one-cell
    /// empty margin) place the transpose of this gun, shifted by one cell.
    pub fn glider_gun() -> Pattern {
        plaintext("Gosper Glider Gun", "Produces gliders (period 30)", &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ])
    }

    /// R-pentomino - methuselah, stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        plaintext("R-pentomino", "Methuselah - stabilizes at gen 1103", &[
            ".OO",
            "OO.",
            ".O.",
        ])
    }

    pub fn acorn() -> Pattern {
        plaintext("Acorn", "Methuselah - stabilizes at gen 5206", &[
            ".O.....",
            "...O...",
            "OO..OOO",
        ])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        plaintext("Block", "Still life", &["OO", "OO"])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}
