//! Deterministic per-vehicle and world-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each vehicle gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vehicle_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive vehicle IDs uniformly across the seed space.
//! This means:
//!
//! - Vehicles never share RNG state, so the wander random walk of one agent
//!   cannot perturb another's.
//! - Spawning more vehicles does not disturb the seeds of existing ones —
//!   runs are reproducible even as scenes grow.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VehicleId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SteerRng ──────────────────────────────────────────────────────────────────

/// Per-vehicle deterministic RNG.
///
/// Create one per vehicle at spawn time; the world stores them in a parallel
/// `Vec<SteerRng>` alongside the vehicles.  The wander behavior draws its
/// jitter samples from here, so a fixed seed reproduces the identical force
/// sequence.
pub struct SteerRng(SmallRng);

impl SteerRng {
    /// Seed deterministically from the run's global seed and a vehicle ID.
    pub fn new(global_seed: u64, vehicle: VehicleId) -> Self {
        let seed = global_seed ^ (vehicle.0 as u64).wrapping_mul(MIXING_CONSTANT);
        SteerRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn uniform01(&mut self) -> f32 {
        self.0.r#gen()
    }

    /// Sample in `(-1, 1)` biased towards zero: the difference of two uniform
    /// draws.  This is the jitter distribution the wander behavior uses —
    /// deliberately not Gaussian.
    #[inline]
    pub fn binomial(&mut self) -> f32 {
        self.uniform01() - self.uniform01()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── WorldRng ──────────────────────────────────────────────────────────────────

/// World-level RNG for global draws (scene setup, initial placements).
///
/// Used only from the single-threaded simulation loop.
pub struct WorldRng(SmallRng);

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `WorldRng` with a different seed offset — useful for
    /// seeding scenario-local generators deterministically from the run seed.
    pub fn child(&mut self, offset: u64) -> WorldRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        WorldRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn uniform01(&mut self) -> f32 {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
