//! Physical state of a moving entity and its integration step.

use steer_core::{SteerError, SteerResult, Vec2, VehicleId};

/// Velocities with a squared length at or below this are treated as standing
/// still: heading and orientation are left untouched to avoid jitter and NaNs
/// as an agent brakes to a stop.
pub const VELOCITY_EPSILON: f32 = 1e-8;

/// Angles below this (radians) count as "already facing" in
/// [`MovingEntity::rotate_towards`].
const FACING_EPSILON: f32 = 1e-4;

/// The physical state of one autonomous agent.
///
/// This is a plain data record: position, velocity, the derived local basis
/// (`heading` / `perp` / `orientation`), and the tuning caps.  The steering
/// engine reads it and [`integrate`][MovingEntity::integrate] mutates it; it
/// carries no behavior of its own.
///
/// # Invariants
///
/// - `heading` is always unit-length or zero, and equals the normalized
///   velocity from the last integration step with non-negligible speed.
/// - `perp` is always `heading` rotated 90° clockwise.
/// - `mass`, `max_speed`, and `max_force` are strictly positive.
///
/// `MovingEntity` is `Copy` so the world can snapshot all entities at the
/// start of a tick; cross-agent reads go through that snapshot, never through
/// live state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovingEntity {
    /// Registry index of the vehicle owning this state.
    pub id: VehicleId,

    /// World position.
    pub pos: Vec2,

    /// Radius of the circle approximating the entity for proximity checks.
    pub bounding_radius: f32,

    /// Distance at which the arrive behavior starts braking.
    pub brake_radius: f32,

    /// Per-step cap (radians) used by [`rotate_towards`][Self::rotate_towards].
    pub max_rotation: f32,

    velocity: Vec2,
    heading: Vec2,
    perp: Vec2,
    orientation: f32,
    mass: f32,
    max_speed: f32,
    max_force: f32,
}

impl MovingEntity {
    /// Create an entity at `pos` with the given initial `velocity` and caps.
    ///
    /// Fails fast with [`SteerError::Config`] when `mass`, `max_speed`, or
    /// `max_force` is not strictly positive.  The heading is derived from the
    /// initial velocity; a near-zero velocity leaves it at the zero vector.
    pub fn new(
        id:        VehicleId,
        pos:       Vec2,
        velocity:  Vec2,
        mass:      f32,
        max_speed: f32,
        max_force: f32,
    ) -> SteerResult<Self> {
        if mass <= 0.0 {
            return Err(SteerError::Config(format!("mass must be > 0, got {mass}")));
        }
        if max_speed <= 0.0 {
            return Err(SteerError::Config(format!("max_speed must be > 0, got {max_speed}")));
        }
        if max_force <= 0.0 {
            return Err(SteerError::Config(format!("max_force must be > 0, got {max_force}")));
        }

        let mut entity = Self {
            id,
            pos,
            bounding_radius: 10.0,
            brake_radius: 5.0,
            max_rotation: 0.001,
            velocity,
            heading: Vec2::ZERO,
            perp: Vec2::ZERO,
            orientation: 0.0,
            mass,
            max_speed,
            max_force,
        };
        entity.update_local_basis();
        Ok(entity)
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current scalar speed.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Normalized travel direction (unit length, or zero when the entity has
    /// never moved).
    #[inline]
    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    /// `heading` rotated 90° clockwise — the local y axis.
    #[inline]
    pub fn perp(&self) -> Vec2 {
        self.perp
    }

    /// Facing angle in radians, `atan2(heading.y, heading.x)`.
    #[inline]
    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    #[inline]
    pub fn max_force(&self) -> f32 {
        self.max_force
    }

    // ── Tuning setters ────────────────────────────────────────────────────
    //
    // Non-positive values are silently ignored rather than panicking or
    // erroring: these are live tuning knobs and a bad value from a UI must
    // not take down a running scene.  Construction-time validation already
    // rejected invalid initial values.

    pub fn set_mass(&mut self, mass: f32) {
        if mass > 0.0 {
            self.mass = mass;
        }
    }

    pub fn set_max_speed(&mut self, max_speed: f32) {
        if max_speed > 0.0 {
            self.max_speed = max_speed;
        }
    }

    pub fn set_max_force(&mut self, max_force: f32) {
        if max_force > 0.0 {
            self.max_force = max_force;
        }
    }

    /// Overwrite the velocity directly (scene setup, tests).  The local basis
    /// is refreshed from the new velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.update_local_basis();
    }

    // ── Integration ───────────────────────────────────────────────────────

    /// Advance the entity by one step under `force` over `dt` seconds.
    ///
    /// 1. acceleration = force / mass
    /// 2. velocity += acceleration · dt, truncated to `max_speed`
    /// 3. heading/perp/orientation refresh only above [`VELOCITY_EPSILON`]
    /// 4. pos += velocity · dt
    ///
    /// World wrapping is a policy of the surrounding world; the caller
    /// applies it to `pos` after this returns.
    pub fn integrate(&mut self, force: Vec2, dt: f32) {
        let acceleration = force / self.mass;
        self.velocity += acceleration * dt;
        self.velocity = self.velocity.truncate(self.max_speed);

        if self.velocity.length_squared() > VELOCITY_EPSILON {
            self.update_local_basis();
        }

        self.pos += self.velocity * dt;
    }

    /// Rotate the velocity towards `target_pos`, at most `max_turn_per_step`
    /// radians.
    ///
    /// Returns `true` when the entity already faces the target (angle below
    /// 1e-4 radians, no rotation applied), `false` otherwise.  The turn
    /// direction comes from [`Vec2::turn_sign`].
    pub fn rotate_towards(&mut self, target_pos: Vec2, max_turn_per_step: f32) -> bool {
        let desired = (target_pos - self.pos).normalized();
        let angle = self.heading.dot(desired).clamp(-1.0, 1.0).acos();

        if angle < FACING_EPSILON {
            return true;
        }

        let signed = angle.min(max_turn_per_step) * self.heading.turn_sign(desired);
        self.velocity = self.velocity.rotated(signed);
        self.update_local_basis();
        false
    }

    /// Refresh heading, perp, and orientation from the current velocity.
    /// A near-zero velocity leaves the basis unchanged.
    fn update_local_basis(&mut self) {
        if self.velocity.length_squared() > VELOCITY_EPSILON {
            self.heading = self.velocity.normalized();
            self.perp = self.heading.perp();
            self.orientation = self.heading.y.atan2(self.heading.x);
        }
    }
}
