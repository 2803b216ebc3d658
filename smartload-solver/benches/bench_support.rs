//! Benchmark support utilities for the load solvers.
//!
//! Provides deterministic order generation so repeated runs measure the same
//! search space.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smartload_core::test_support::order;
use smartload_core::{Order, Truck};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Lanes orders are spread over. Most orders share the first lane so the
/// exact solvers face a dense compatibility graph.
const LANES: [(&str, &str); 3] = [
    ("Los Angeles, CA", "Dallas, TX"),
    ("Dallas, TX", "Atlanta, GA"),
    ("Chicago, IL", "Denver, CO"),
];

/// Probability that a generated order is hazmat.
const HAZMAT_RATE: f64 = 0.1;

/// The truck every benchmark loads.
#[must_use]
pub fn benchmark_truck() -> Truck {
    Truck::new("BENCH", 44_000, 3_000)
}

/// Generate `count` orders with unique ids from a seeded RNG.
#[must_use]
pub fn generate_orders(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let lane = if rng.gen_bool(0.7) {
                LANES.first()
            } else {
                LANES.get(rng.gen_range(1..LANES.len()))
            };
            let (origin, destination) = lane.copied().unwrap_or(("A", "B"));
            order(
                &format!("B{i}"),
                rng.gen_range(10_000..=500_000),
                rng.gen_range(500..=15_000),
                rng.gen_range(50..=1_000),
            )
            .with_route(origin, destination)
            .with_hazmat(rng.gen_bool(HAZMAT_RATE))
        })
        .collect()
}
