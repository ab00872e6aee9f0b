//! Neighbor lookup over the tick snapshot.

use steer_entity::MovingEntity;

/// All entities within `radius` of `reference`, excluding `reference` itself.
///
/// An entity counts as a neighbor when the center distance is below
/// `radius + its bounding radius`, so large entities are noticed from
/// proportionally further away.  Linear scan over the snapshot; vehicle
/// counts here are flock-sized, far below where a spatial index would pay
/// for itself.
///
/// The `to_avoid` entity is *not* filtered here; group behaviors drop it
/// themselves so the same neighbor list can serve every behavior.
pub fn neighbors_within(
    snapshot:  &[MovingEntity],
    reference: &MovingEntity,
    radius:    f32,
) -> Vec<MovingEntity> {
    snapshot
        .iter()
        .filter(|e| {
            e.id != reference.id
                && reference.pos.distance_squared(e.pos) < (radius + e.bounding_radius).powi(2)
        })
        .copied()
        .collect()
}
