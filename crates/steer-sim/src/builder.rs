//! Fluent builder for constructing a [`World`].

use steer_core::Vec2;
use steer_entity::WorldBounds;

use crate::{SimResult, World};

/// World-level configuration: the wrap bounds and the master seed.
///
/// Dimensions must be strictly positive; the builder validates on `build`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    pub width:  f32,
    pub height: f32,
    /// Master seed.  Each vehicle's RNG is derived from this and its ID.
    pub seed: u64,
}

/// Initial physical parameters for one vehicle.
///
/// `mass`, `max_speed`, and `max_force` must be strictly positive; spawn
/// fails fast otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleParams {
    pub pos:       Vec2,
    pub velocity:  Vec2,
    pub mass:      f32,
    pub max_speed: f32,
    pub max_force: f32,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            pos:       Vec2::ZERO,
            velocity:  Vec2::ZERO,
            mass:      1.0,
            max_speed: 100.0,
            max_force: 100.0,
        }
    }
}

/// Fluent builder for [`World`].
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(WorldConfig { width: 800.0, height: 600.0, seed: 42 })
///     .vehicle(VehicleParams { pos: Vec2::new(100.0, 100.0), ..Default::default() })
///     .vehicle(VehicleParams { pos: Vec2::new(700.0, 500.0), ..Default::default() })
///     .build()?;
/// world.run_ticks(1_000, 0.016, &mut NoopObserver)?;
/// ```
pub struct WorldBuilder {
    config:   WorldConfig,
    vehicles: Vec<VehicleParams>,
}

impl WorldBuilder {
    pub fn new(config: WorldConfig) -> Self {
        Self { config, vehicles: Vec::new() }
    }

    /// Queue a vehicle to be spawned at build time, in call order (IDs are
    /// assigned in this order).
    pub fn vehicle(mut self, params: VehicleParams) -> Self {
        self.vehicles.push(params);
        self
    }

    /// Validate the configuration, spawn the queued vehicles, and return a
    /// ready-to-run [`World`].
    pub fn build(self) -> SimResult<World> {
        let bounds = WorldBounds::new(self.config.width, self.config.height)?;

        let mut world = World::new(bounds, self.config.seed);
        for params in self.vehicles {
            world.spawn(params)?;
        }
        Ok(world)
    }
}
