//! `steer-sim` — world orchestration for the rust_steer framework.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Snapshot — copy every vehicle's MovingEntity (previous-tick state).
//!   ② Steer    — per vehicle in ascending VehicleId order:
//!                  skip if inactive or no behavior enabled;
//!                  resolve target / to_avoid / neighbors from the snapshot;
//!                  force = behavior.calculate(agent, ctx, dt, rng)
//!   ③ Move     — entity.integrate(force, dt); pos = bounds.wrap(pos)
//! ```
//!
//! Cross-agent reads only ever see the snapshot, so results do not depend on
//! update order within a tick, and a fixed seed reproduces a run exactly.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`vehicle`]  | `Vehicle` — entity + steering engine + active flag   |
//! | [`query`]    | `neighbors_within` — linear neighbor scan            |
//! | [`world`]    | `World` — registry, tick loop, `run_ticks`           |
//! | [`builder`]  | `WorldConfig` / `VehicleParams` / `WorldBuilder`     |
//! | [`observer`] | `WorldObserver` trait and `NoopObserver`             |
//! | [`error`]    | `SimError` / `SimResult`                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use steer_behavior::BehaviorKind;
//! use steer_sim::{NoopObserver, VehicleParams, WorldBuilder, WorldConfig};
//!
//! let mut world = WorldBuilder::new(WorldConfig { width: 800.0, height: 600.0, seed: 42 })
//!     .vehicle(VehicleParams::default())
//!     .build()?;
//! world.vehicle_mut(steer_core::VehicleId(0))?
//!     .behavior
//!     .enable(BehaviorKind::Wander);
//! world.run_ticks(1_000, 0.016, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod query;
pub mod vehicle;
pub mod world;


pub use builder::{VehicleParams, WorldBuilder, WorldConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use query::neighbors_within;
pub use vehicle::Vehicle;
pub use world::World;
