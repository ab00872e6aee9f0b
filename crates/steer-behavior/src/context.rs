//! Read-only per-call inputs to the steering engine.

use steer_entity::MovingEntity;

/// Everything the engine needs from the rest of the world for one
/// `calculate` call.
///
/// The simulation resolves the engine's `target`/`to_avoid` vehicle IDs
/// against the previous tick's entity snapshot and gathers the neighbor list
/// once, then hands all three in here.  Passing them explicitly (instead of a
/// hidden per-call cache inside the engine) keeps `calculate` deterministic
/// given the snapshot and makes the data flow visible at the call site.
///
/// All borrows point into the tick snapshot and live for one call.
#[derive(Copy, Clone, Default)]
pub struct SteeringContext<'a> {
    /// Previous-tick state of the entity referenced by the engine's `target`,
    /// required by Seek, Arrive, and Pursuit.
    pub target: Option<&'a MovingEntity>,

    /// Previous-tick state of the entity referenced by the engine's
    /// `to_avoid`, required by Flee and Evade and excluded from group
    /// behaviors.
    pub to_avoid: Option<&'a MovingEntity>,

    /// Entities within the agent's view distance, from the neighbor query.
    /// Gathered only when a group behavior (separation/alignment/cohesion)
    /// is enabled; empty otherwise.
    pub neighbors: &'a [MovingEntity],
}

impl<'a> SteeringContext<'a> {
    /// A context with no target, no threat, and no neighbors — enough for
    /// solo behaviors like wander.
    pub const EMPTY: SteeringContext<'static> = SteeringContext {
        target: None,
        to_avoid: None,
        neighbors: &[],
    };
}
