//! Conway's Game of Life rule (B3/S23).

/// Compute the next state from the current state and the live neighbor count:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_alive(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!next_alive(true, 0));
        assert!(!next_alive(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(next_alive(true, 2));
        assert!(next_alive(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        assert!(!next_alive(true, 4));
        assert!(!next_alive(true, 8));
    }

    #[test]
    fn test_reproduction() {
        assert!(next_alive(false, 3));
    }

    #[test]
    fn test_dead_stays_dead() {
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert!(!next_alive(false, n), "dead cell revived with {} neighbors", n);
        }
    }
}
