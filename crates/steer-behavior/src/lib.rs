//! `steer-behavior` — steering force laws and their combination.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`kind`]    | `BehaviorKind` enum and the `BehaviorSet` bitset          |
//! | [`weights`] | `WeightTable` — per-behavior force scaling                |
//! | [`context`] | `SteeringContext` — per-call resolved references          |
//! | [`engine`]  | `SteeringBehavior` — force laws and combination methods   |
//! | [`error`]   | `BehaviorError` / `BehaviorResult`                        |
//!
//! # Model
//!
//! Each agent owns one [`SteeringBehavior`]: a set of enabled behaviors, a
//! weight per behavior, and a combination method.  Once per tick the
//! simulation resolves the engine's vehicle references against the tick
//! snapshot, packs them into a [`SteeringContext`], and calls
//! [`SteeringBehavior::calculate`] to obtain a single force bounded by the
//! agent's `max_force`.  The engine holds no world state of its own; only the
//! wander behavior carries state (its random-walk target) between calls.

pub mod context;
pub mod engine;
pub mod error;
pub mod kind;
pub mod weights;

#[cfg(test)]
mod tests;

pub use context::SteeringContext;
pub use engine::{CombineMethod, SteeringBehavior, turn_around_time};
pub use error::{BehaviorError, BehaviorResult};
pub use kind::{BehaviorKind, BehaviorSet};
pub use weights::WeightTable;
