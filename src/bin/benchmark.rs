//! Compares the incremental simulator against a full grid scan

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{Grid, Simulator};

const SEED: u64 = 0x5EED_0F_11FE;

fn random_grid(size: usize, density: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(SEED);
    Grid::random(size, size, density, &mut rng)
}

fn benchmark_full_scan(size: usize, density: f64, iterations: u32) -> f64 {
    let mut grid = random_grid(size, density);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.next_generation();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_incremental(size: usize, density: f64, iterations: u32) -> f64 {
    let mut sim = Simulator::with_grid(random_grid(size, density));

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_incremental_parallel(size: usize, density: f64, iterations: u32) -> f64 {
    let mut sim = Simulator::with_grid(random_grid(size, density));

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    println!("=== Incremental vs Full Scan (ms/generation) ===\n");

    let sizes = [100, 250, 500, 1000];
    // Sparse boards are where skipping dead regions pays off
    let densities = [0.01, 0.05, 0.2];
    let iterations = 20;

    println!(
        "{:>10} {:>8} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Density", "FullScan", "Incr", "Incr+Par", "Speedup"
    );
    println!("{:-<70}", "");

    for size in sizes {
        for density in densities {
            let full_ms = benchmark_full_scan(size, density, iterations);
            let incr_ms = benchmark_incremental(size, density, iterations);
            let par_ms = benchmark_incremental_parallel(size, density, iterations);
            let fastest = incr_ms.min(par_ms);

            println!(
                "{:>10} {:>8.2} {:>12.2} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", size, size),
                density,
                full_ms,
                incr_ms,
                par_ms,
                full_ms / fastest
            );
        }
    }
}
