//! Local/world coordinate transforms.
//!
//! An agent's local space is spanned by its unit `heading` (local x axis) and
//! `perp` (local y axis, heading rotated 90° clockwise), with the agent's
//! position as the origin.  The wander behavior projects its target point
//! from this local space into world space every tick.

use crate::Vec2;

/// Map a point from an agent's local basis into world coordinates:
///
/// `world = origin + local.x * heading + local.y * perp`
///
/// `heading` and `perp` must be the agent's current orthonormal basis.
#[inline]
pub fn local_to_world(local: Vec2, heading: Vec2, perp: Vec2, origin: Vec2) -> Vec2 {
    Vec2::new(
        local.x * heading.x + local.y * perp.x + origin.x,
        local.x * heading.y + local.y * perp.y + origin.y,
    )
}

/// Inverse of [`local_to_world`]: express a world-space point in an agent's
/// local basis.
///
/// Relies on `heading`/`perp` being orthonormal, so the inverse of the
/// rotation part is its transpose.
#[inline]
pub fn world_to_local(world: Vec2, heading: Vec2, perp: Vec2, origin: Vec2) -> Vec2 {
    let offset = world - origin;
    Vec2::new(offset.dot(heading), offset.dot(perp))
}
