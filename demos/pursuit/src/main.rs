//! pursuit — one vehicle hunts another across a wrapping world.
//!
//! The pursuer intercepts the escaper's predicted position; the escaper
//! evades while wandering to stay unpredictable.  The faster pursuer slowly
//! gains, so the gap oscillates as the escaper dodges and the world wraps.

use std::time::Instant;

use anyhow::Result;

use steer_behavior::BehaviorKind;
use steer_core::{Vec2, VehicleId};
use steer_sim::{Vehicle, VehicleParams, WorldBuilder, WorldConfig, WorldObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const WORLD_WIDTH:  f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;
const SEED:         u64 = 7;

const TICKS: u64 = 7_200; // two simulated minutes at 60 Hz
const DT:    f32 = 1.0 / 60.0;
const REPORT_INTERVAL: u64 = 600;

// ── Gap tracker ───────────────────────────────────────────────────────────────

struct GapReporter {
    min_gap: f32,
    max_gap: f32,
}

impl GapReporter {
    fn new() -> Self {
        Self { min_gap: f32::INFINITY, max_gap: 0.0 }
    }
}

impl WorldObserver for GapReporter {
    fn on_tick_end(&mut self, tick: u64, vehicles: &[Vehicle]) {
        let gap = vehicles[0].entity.pos.distance(vehicles[1].entity.pos);
        self.min_gap = self.min_gap.min(gap);
        self.max_gap = self.max_gap.max(gap);

        if tick % REPORT_INTERVAL == 0 {
            println!(
                "tick {tick:>5}: pursuer {}  escaper {}  gap {gap:.1}",
                vehicles[0].entity.pos, vehicles[1].entity.pos
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== pursuit — rust_steer ===");
    println!("Ticks: {TICKS}  |  Seed: {SEED}");
    println!();

    let mut world = WorldBuilder::new(WorldConfig {
        width:  WORLD_WIDTH,
        height: WORLD_HEIGHT,
        seed:   SEED,
    })
    // Vehicle 0: the pursuer — faster but less nimble.
    .vehicle(VehicleParams {
        pos:       Vec2::new(100.0, 100.0),
        velocity:  Vec2::new(10.0, 0.0),
        mass:      2.0,
        max_speed: 90.0,
        max_force: 120.0,
    })
    // Vehicle 1: the escaper — slower, lighter, sees further.
    .vehicle(VehicleParams {
        pos:       Vec2::new(600.0, 450.0),
        velocity:  Vec2::new(-10.0, 0.0),
        mass:      1.0,
        max_speed: 75.0,
        max_force: 150.0,
    })
    .build()?;

    let pursuer = VehicleId(0);
    let escaper = VehicleId(1);

    {
        let behavior = &mut world.vehicle_mut(pursuer)?.behavior;
        behavior.enable(BehaviorKind::Pursuit);
        behavior.set_target(Some(escaper));
        behavior.set_view_distance(120.0);
    }
    {
        let behavior = &mut world.vehicle_mut(escaper)?.behavior;
        behavior.enable(BehaviorKind::Evade);
        behavior.enable(BehaviorKind::Wander);
        behavior.assign_weight(BehaviorKind::Evade, 10.0);
        behavior.assign_weight(BehaviorKind::Wander, 0.5);
        behavior.set_to_avoid(Some(pursuer));
        behavior.set_view_distance(200.0);
    }

    let mut reporter = GapReporter::new();
    let t0 = Instant::now();
    world.run_ticks(TICKS, DT, &mut reporter)?;
    let elapsed = t0.elapsed();

    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "Gap over the run: min {:.1}, max {:.1}",
        reporter.min_gap, reporter.max_gap
    );

    Ok(())
}
