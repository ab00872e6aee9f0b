//! `steer-core` — foundational types for the `rust_steer` steering framework.
//!
//! This crate is a dependency of every other `steer-*` crate.  It
//! intentionally has no `steer-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`vec2`]      | `Vec2` and its steering-specific operations         |
//! | [`transform`] | local-basis ↔ world coordinate transforms           |
//! | [`ids`]       | `VehicleId`                                         |
//! | [`rng`]       | `SteerRng` (per-vehicle), `WorldRng` (global)       |
//! | [`error`]     | `SteerError`, `SteerResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod transform;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SteerError, SteerResult};
pub use ids::VehicleId;
pub use rng::{SteerRng, WorldRng};
pub use transform::{local_to_world, world_to_local};
pub use vec2::Vec2;
