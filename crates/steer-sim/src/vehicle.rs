//! A vehicle: physical state plus its steering engine.

use steer_behavior::SteeringBehavior;
use steer_core::VehicleId;
use steer_entity::MovingEntity;

/// One autonomous agent in the world.
///
/// A vehicle is plain composition: the [`MovingEntity`] it moves, the
/// [`SteeringBehavior`] that decides where, and an `active` switch.  Inactive
/// vehicles (and vehicles with no behavior enabled) are skipped by the tick
/// loop entirely but remain visible to other agents' neighbor queries and
/// target references.
#[derive(Debug)]
pub struct Vehicle {
    /// Physical state: position, velocity, local basis, caps.
    pub entity: MovingEntity,

    /// The per-agent steering engine.
    pub behavior: SteeringBehavior,

    /// Cleared to freeze the vehicle in place without despawning it.
    pub active: bool,
}

impl Vehicle {
    pub fn new(entity: MovingEntity, behavior: SteeringBehavior) -> Self {
        Self { entity, behavior, active: true }
    }

    /// Registry ID, identical to the entity's.
    #[inline]
    pub fn id(&self) -> VehicleId {
        self.entity.id
    }
}
