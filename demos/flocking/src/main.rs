//! flocking — a wanderer harried by a flock of evaders.
//!
//! One vehicle wanders the world; twenty flock members keep formation via
//! separation/alignment/cohesion while fleeing and evading the wanderer
//! whenever it drifts into view.  Headless: progress goes to stdout through a
//! `WorldObserver`.

use std::time::Instant;

use anyhow::Result;

use steer_behavior::{BehaviorKind, CombineMethod};
use steer_core::{Vec2, VehicleId, WorldRng};
use steer_sim::{Vehicle, VehicleParams, WorldBuilder, WorldConfig, WorldObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const WORLD_WIDTH:  f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;
const SEED:         u64 = 42;

const FLOCK_SIZE: usize = 20;
const TICKS:      u64   = 3_600; // one simulated minute at 60 Hz
const DT:         f32   = 1.0 / 60.0;
const REPORT_INTERVAL: u64 = 600;

// ── Progress observer ─────────────────────────────────────────────────────────

struct FlockReporter;

impl WorldObserver for FlockReporter {
    fn on_tick_end(&mut self, tick: u64, vehicles: &[Vehicle]) {
        if tick % REPORT_INTERVAL != 0 {
            return;
        }

        let wanderer = vehicles[0].entity.pos;
        let flock = &vehicles[1..];

        let center = flock.iter().fold(Vec2::ZERO, |acc, v| acc + v.entity.pos)
            / flock.len() as f32;
        let spread = flock
            .iter()
            .map(|v| v.entity.pos.distance(center))
            .fold(0.0f32, f32::max);

        println!(
            "tick {tick:>5}: wanderer {wanderer}  flock center {center}  spread {spread:.1}"
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== flocking — rust_steer ===");
    println!("Flock: {FLOCK_SIZE}  |  Ticks: {TICKS}  |  Seed: {SEED}");
    println!();

    // Scene placement draws come from the world-level RNG so the whole run
    // reproduces from the one seed.
    let mut rng = WorldRng::new(SEED);

    let mut builder = WorldBuilder::new(WorldConfig {
        width:  WORLD_WIDTH,
        height: WORLD_HEIGHT,
        seed:   SEED,
    });

    // Vehicle 0: the wanderer, starting dead center with a nudge east.
    builder = builder.vehicle(VehicleParams {
        pos:       Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        velocity:  Vec2::new(20.0, 0.0),
        max_speed: 80.0,
        max_force: 120.0,
        ..Default::default()
    });

    // Vehicles 1..: the flock, scattered across the left half.
    for _ in 0..FLOCK_SIZE {
        let pos = Vec2::new(
            rng.gen_range(50.0..WORLD_WIDTH / 2.0),
            rng.gen_range(50.0..WORLD_HEIGHT - 50.0),
        );
        let heading = rng.uniform01() * std::f32::consts::TAU;
        builder = builder.vehicle(VehicleParams {
            pos,
            velocity:  Vec2::new(heading.cos(), heading.sin()) * 10.0,
            max_speed: 70.0,
            max_force: 150.0,
            ..Default::default()
        });
    }

    let mut world = builder.build()?;
    let wanderer = VehicleId(0);

    {
        let behavior = &mut world.vehicle_mut(wanderer)?.behavior;
        behavior.enable(BehaviorKind::Wander);
        behavior.set_wander_jitter(500.0);
    }

    for i in 1..=FLOCK_SIZE as u32 {
        let behavior = &mut world.vehicle_mut(VehicleId(i))?.behavior;
        behavior.combine_method = CombineMethod::PrioritizedAndWeighted;

        behavior.enable(BehaviorKind::Separation);
        behavior.enable(BehaviorKind::Alignment);
        behavior.enable(BehaviorKind::Cohesion);
        behavior.enable(BehaviorKind::Evade);
        behavior.enable(BehaviorKind::Flee);
        behavior.enable(BehaviorKind::Wander);

        behavior.assign_weight(BehaviorKind::Separation, 3.0);
        behavior.assign_weight(BehaviorKind::Alignment, 4.0);
        behavior.assign_weight(BehaviorKind::Cohesion, 2.0);
        behavior.assign_weight(BehaviorKind::Evade, 10.0);
        behavior.assign_weight(BehaviorKind::Flee, 10.0);
        behavior.assign_weight(BehaviorKind::Wander, 0.5);

        behavior.set_wander_jitter(500.0);
        behavior.set_view_distance(120.0);
        behavior.set_to_avoid(Some(wanderer));
    }

    let t0 = Instant::now();
    world.run_ticks(TICKS, DT, &mut FlockReporter)?;
    let elapsed = t0.elapsed();

    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();

    println!("{:<10} {:<24} {:<10}", "Vehicle", "Position", "Speed");
    println!("{}", "-".repeat(44));
    for vehicle in &world.vehicles {
        println!(
            "{:<10} {:<24} {:<10.1}",
            vehicle.id().index(),
            vehicle.entity.pos.to_string(),
            vehicle.entity.speed(),
        );
    }

    Ok(())
}
