/// Cell is one lattice site of the toroidal board.
/// Coordinates are fixed at creation; the Simulator flips the two state bits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
    next_alive: bool,
}

impl Cell {
    /// Create a cell whose pending state matches its current state
    pub const fn new(x: usize, y: usize, alive: bool) -> Self {
        Self { x, y, alive, next_alive: alive }
    }

    pub const fn x(&self) -> usize {
        self.x
    }

    pub const fn y(&self) -> usize {
        self.y
    }

    /// Current (rendered) state
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Pending state for the step in progress
    pub const fn is_next_alive(&self) -> bool {
        self.next_alive
    }

    /// True while a flip is scheduled but not yet committed
    pub const fn is_pending(&self) -> bool {
        self.alive != self.next_alive
    }

    /// Schedule the next state. Returns true if this schedules a flip.
    pub(crate) fn schedule(&mut self, next_alive: bool) -> bool {
        self.next_alive = next_alive;
        self.is_pending()
    }

    /// Apply the pending state. Returns true if the current state flipped.
    pub(crate) fn commit(&mut self) -> bool {
        let flipped = self.is_pending();
        self.alive = self.next_alive;
        flipped
    }

    /// Flip the current state immediately, keeping both fields in sync
    pub(crate) fn toggle(&mut self) {
        self.next_alive = !self.alive;
        self.alive = self.next_alive;
    }

    /// Force dead. Returns true if the cell was alive.
    pub(crate) fn kill(&mut self) -> bool {
        let was_alive = self.alive;
        self.alive = false;
        self.next_alive = false;
        was_alive
    }

    /// Force alive. Returns true if the cell was dead.
    pub(crate) fn revive(&mut self) -> bool {
        let was_dead = !self.alive;
        self.alive = true;
        self.next_alive = true;
        was_dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_settled() {
        let cell = Cell::new(3, 4, true);
        assert_eq!((cell.x(), cell.y()), (3, 4));
        assert!(cell.is_alive());
        assert!(cell.is_next_alive());
        assert!(!cell.is_pending());
    }

    #[test]
    fn test_schedule_does_not_touch_current_state() {
        let mut cell = Cell::new(0, 0, false);
        assert!(cell.schedule(true));
        assert!(!cell.is_alive());
        assert!(cell.is_pending());

        assert!(cell.commit());
        assert!(cell.is_alive());
        assert!(!cell.is_pending());

        // Committing again is a no-op
        assert!(!cell.commit());
    }

    #[test]
    fn test_toggle_flips_both_fields() {
        let mut cell = Cell::new(1, 1, false);
        cell.toggle();
        assert!(cell.is_alive() && cell.is_next_alive());
        cell.toggle();
        assert!(!cell.is_alive() && !cell.is_next_alive());
    }

    #[test]
    fn test_kill_clears_pending_revival() {
        let mut cell = Cell::new(0, 0, false);
        cell.schedule(true);
        assert!(!cell.kill());
        assert!(!cell.is_pending());
    }
}
