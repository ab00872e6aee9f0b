//! `steer-entity` — physical agent state and the integration step.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`state`]  | `MovingEntity` — position/velocity/heading + integration |
//! | [`bounds`] | `WorldBounds` — toroidal wraparound                      |
//!
//! # Integration model
//!
//! The steering engine produces one bounded force per tick; this crate turns
//! it into motion:
//!
//! 1. `MovingEntity::integrate(force, dt)` applies Newtonian integration with
//!    the velocity truncated to `max_speed` and the local basis (heading,
//!    perp, orientation) refreshed only while the speed is non-negligible.
//! 2. The world applies `WorldBounds::wrap` to the new position.
//!
//! Entities are plain `Copy` data: the simulation snapshots them once per
//! tick so every cross-agent read observes the previous tick's state.

pub mod bounds;
pub mod state;


pub use bounds::WorldBounds;
pub use state::{MovingEntity, VELOCITY_EPSILON};
