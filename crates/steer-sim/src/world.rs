//! The `World` struct and its tick loop.

use steer_behavior::{SteeringBehavior, SteeringContext};
use steer_core::{SteerRng, VehicleId};
use steer_entity::{MovingEntity, WorldBounds};

use crate::{SimResult, Vehicle, VehicleParams, WorldObserver, neighbors_within};
use crate::error::SimError;

/// The simulation world.
///
/// Owns the vehicle registry, one [`SteerRng`] per vehicle (kept in a
/// parallel `Vec` for the split-borrow pattern in `tick`), the toroidal
/// bounds, and the tick counter.  Everything runs single-threaded; vehicles
/// are never added or removed while a tick is in flight.
///
/// Tick order per vehicle is ascending ID, and every cross-agent read goes
/// through a snapshot taken at the start of the tick, so the outcome is
/// independent of registry order details and fully reproducible from the
/// seed.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World {
    bounds:     WorldBounds,
    seed:       u64,
    tick_count: u64,

    /// Registry, indexed by `VehicleId`.
    pub vehicles: Vec<Vehicle>,

    /// Per-vehicle RNGs, separated from the vehicles for disjoint borrows.
    rngs: Vec<SteerRng>,
}

impl World {
    pub fn new(bounds: WorldBounds, seed: u64) -> Self {
        Self {
            bounds,
            seed,
            tick_count: 0,
            vehicles: Vec::new(),
            rngs: Vec::new(),
        }
    }

    // ── Registry ──────────────────────────────────────────────────────────

    /// Add a vehicle, assigning the next ID in spawn order.
    ///
    /// Valid between ticks only (enforced by `&mut self`); the new vehicle
    /// participates from the next tick.  Its RNG is seeded from the world
    /// seed and its ID, so spawning never disturbs existing vehicles' random
    /// streams.
    pub fn spawn(&mut self, params: VehicleParams) -> SimResult<VehicleId> {
        let id = VehicleId(self.vehicles.len() as u32);
        let mut rng = SteerRng::new(self.seed, id);

        let entity = MovingEntity::new(
            id,
            params.pos,
            params.velocity,
            params.mass,
            params.max_speed,
            params.max_force,
        )?;

        self.vehicles.push(Vehicle::new(entity, SteeringBehavior::new(&mut rng)));
        self.rngs.push(rng);
        Ok(id)
    }

    pub fn vehicle(&self, id: VehicleId) -> SimResult<&Vehicle> {
        self.vehicles.get(id.index()).ok_or(SimError::VehicleNotFound(id))
    }

    pub fn vehicle_mut(&mut self, id: VehicleId) -> SimResult<&mut Vehicle> {
        self.vehicles.get_mut(id.index()).ok_or(SimError::VehicleNotFound(id))
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Copy of every vehicle's current physical state, in ID order.
    pub fn snapshot(&self) -> Vec<MovingEntity> {
        self.vehicles.iter().map(|v| v.entity).collect()
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the world by one step of `dt` seconds.
    ///
    /// 1. Snapshot all entity states.  Targets, threats, and neighbors are
    ///    resolved against this snapshot, so every agent observes the world
    ///    as it stood when the tick began, regardless of update order.
    /// 2. For each vehicle in ascending ID order: skip if inactive or no
    ///    behavior is enabled; gather the steering context; `calculate`;
    ///    `integrate`; wrap the position.
    pub fn tick(&mut self, dt: f32) -> SimResult<()> {
        let snapshot = self.snapshot();

        // Explicit field borrows so the borrow checker sees disjoint access.
        let vehicles = &mut self.vehicles;
        let rngs     = &mut self.rngs;
        let bounds   = self.bounds;

        for (i, vehicle) in vehicles.iter_mut().enumerate() {
            if !vehicle.active || !vehicle.behavior.has_active_behavior() {
                continue;
            }

            let agent = &snapshot[i];

            let target   = resolve(vehicle.behavior.target(), &snapshot)?;
            let to_avoid = resolve(vehicle.behavior.to_avoid(), &snapshot)?;
            let neighbors = if vehicle.behavior.needs_neighbors() {
                neighbors_within(&snapshot, agent, vehicle.behavior.view_distance())
            } else {
                Vec::new()
            };

            let ctx = SteeringContext { target, to_avoid, neighbors: &neighbors };
            let force = vehicle.behavior.calculate(agent, &ctx, dt, &mut rngs[i])?;

            vehicle.entity.integrate(force, dt);
            vehicle.entity.pos = bounds.wrap(vehicle.entity.pos);
        }

        self.tick_count += 1;
        Ok(())
    }

    /// Run exactly `n` ticks, invoking observer hooks at every boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_ticks<O: WorldObserver>(
        &mut self,
        n:        u64,
        dt:       f32,
        observer: &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            let now = self.tick_count;
            observer.on_tick_start(now);
            self.tick(dt)?;
            observer.on_tick_end(now, &self.vehicles);
        }
        Ok(())
    }
}

/// Resolve an engine's vehicle reference against the tick snapshot.
fn resolve(
    reference: Option<VehicleId>,
    snapshot:  &[MovingEntity],
) -> SimResult<Option<&MovingEntity>> {
    match reference {
        None     => Ok(None),
        Some(id) => snapshot
            .get(id.index())
            .map(Some)
            .ok_or(SimError::VehicleNotFound(id)),
    }
}
