//! The steering engine: per-behavior force laws and force combination.

use steer_core::{SteerRng, Vec2, VehicleId, local_to_world};
use steer_entity::MovingEntity;

use crate::{BehaviorError, BehaviorKind, BehaviorResult, BehaviorSet, SteeringContext, WeightTable};

/// Delay coefficient applied to pursuit interception estimates; accounts for
/// the time the pursuer needs to turn around before closing in.
const PURSUIT_TURN_DELAY: f32 = 0.05;

/// How a multi-behavior force is combined.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombineMethod {
    /// Sum every enabled behavior's weighted force, then cap at `max_force`.
    #[default]
    Weighted,
    /// Accumulate weighted forces in a fixed priority order, clipping the
    /// last contribution and skipping the rest once the `max_force` budget is
    /// spent.  Survival behaviors (evade, flee, separation) come first so
    /// they are never starved by lower-priority ones.
    PrioritizedAndWeighted,
}

/// Fixed evaluation order for [`CombineMethod::PrioritizedAndWeighted`].
const PRIORITY_ORDER: [BehaviorKind; 9] = [
    BehaviorKind::Evade,
    BehaviorKind::Flee,
    BehaviorKind::Separation,
    BehaviorKind::Alignment,
    BehaviorKind::Cohesion,
    BehaviorKind::Seek,
    BehaviorKind::Arrive,
    BehaviorKind::Wander,
    BehaviorKind::Pursuit,
];

/// Evaluation order for [`CombineMethod::Weighted`].  Order does not affect
/// the sum; it only fixes which missing-reference error surfaces first.
const WEIGHTED_ORDER: [BehaviorKind; 9] = [
    BehaviorKind::Seek,
    BehaviorKind::Flee,
    BehaviorKind::Arrive,
    BehaviorKind::Pursuit,
    BehaviorKind::Evade,
    BehaviorKind::Wander,
    BehaviorKind::Separation,
    BehaviorKind::Alignment,
    BehaviorKind::Cohesion,
];

/// The per-agent steering engine.
///
/// Owns the enabled [`BehaviorSet`], the weight table, the combination
/// method, the target/threat references (non-owning `VehicleId`s resolved by
/// the simulation each tick), and the wander behavior's persistent state.
///
/// [`calculate`][Self::calculate] is the single entry point; everything else
/// is configuration.
#[derive(Debug)]
pub struct SteeringBehavior {
    active: BehaviorSet,
    weights: WeightTable,
    pub combine_method: CombineMethod,

    view_distance: f32,

    target: Option<VehicleId>,
    to_avoid: Option<VehicleId>,

    // Wander tuning and its persistent random-walk state.
    wander_radius: f32,
    wander_distance: f32,
    wander_jitter: f32,
    wander_target: Vec2,

    // Debug outputs for a rendering layer; never read by the engine itself.
    wander_target_pos: Vec2,
    wander_circle_pos: Vec2,
}

impl SteeringBehavior {
    /// Default radius of the wander circle.
    pub const DEFAULT_WANDER_RADIUS: f32 = 25.0;
    /// Default projection of the wander circle ahead of the agent.
    pub const DEFAULT_WANDER_DISTANCE: f32 = 150.0;
    /// Default maximum random displacement added per second of wander.
    pub const DEFAULT_WANDER_JITTER: f32 = 1000.0;
    /// Default view distance (flee gating and neighbor queries).
    pub const DEFAULT_VIEW_DISTANCE: f32 = 100.0;

    /// Create an engine with no behaviors enabled.
    ///
    /// The wander target starts at a uniformly random point on the wander
    /// circle so agents sharing a spawn point do not wander in lockstep.
    pub fn new(rng: &mut SteerRng) -> Self {
        let theta = rng.uniform01() * std::f32::consts::TAU;
        let wander_target = Vec2::new(
            Self::DEFAULT_WANDER_RADIUS * theta.cos(),
            Self::DEFAULT_WANDER_RADIUS * theta.sin(),
        );

        Self {
            active: BehaviorSet::EMPTY,
            weights: WeightTable::new(),
            combine_method: CombineMethod::Weighted,
            view_distance: Self::DEFAULT_VIEW_DISTANCE,
            target: None,
            to_avoid: None,
            wander_radius: Self::DEFAULT_WANDER_RADIUS,
            wander_distance: Self::DEFAULT_WANDER_DISTANCE,
            wander_jitter: Self::DEFAULT_WANDER_JITTER,
            wander_target,
            wander_target_pos: Vec2::ZERO,
            wander_circle_pos: Vec2::ZERO,
        }
    }

    // ── Behavior toggles ──────────────────────────────────────────────────

    /// Enable `kind`.  Enabling an unimplemented kind is allowed but
    /// contributes no force.
    pub fn enable(&mut self, kind: BehaviorKind) {
        self.active.insert(kind);
    }

    pub fn disable(&mut self, kind: BehaviorKind) {
        self.active.remove(kind);
    }

    pub fn is_on(&self, kind: BehaviorKind) -> bool {
        self.active.contains(kind)
    }

    /// Disable every behavior.
    pub fn clear_behaviors(&mut self) {
        self.active.clear();
    }

    pub fn has_active_behavior(&self) -> bool {
        !self.active.is_empty()
    }

    /// `true` when a group behavior is enabled and the caller must run the
    /// neighbor query before `calculate`.
    pub fn needs_neighbors(&self) -> bool {
        self.is_on(BehaviorKind::Separation)
            || self.is_on(BehaviorKind::Alignment)
            || self.is_on(BehaviorKind::Cohesion)
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Assign a behavior weight.  Returns `false` (no-op) for non-positive
    /// values or unimplemented kinds.
    pub fn assign_weight(&mut self, kind: BehaviorKind, value: f32) -> bool {
        self.weights.assign(kind, value)
    }

    pub fn weight(&self, kind: BehaviorKind) -> f32 {
        self.weights.get(kind)
    }

    pub fn view_distance(&self) -> f32 {
        self.view_distance
    }

    /// Set how far the agent can see.  Non-positive values are silently
    /// ignored.
    pub fn set_view_distance(&mut self, value: f32) {
        if value > 0.0 {
            self.view_distance = value;
        }
    }

    pub fn target(&self) -> Option<VehicleId> {
        self.target
    }

    /// Set the vehicle that seek/arrive/pursuit steer towards.
    pub fn set_target(&mut self, target: Option<VehicleId>) {
        self.target = target;
    }

    pub fn to_avoid(&self) -> Option<VehicleId> {
        self.to_avoid
    }

    /// Set the vehicle that flee/evade steer away from (also excluded from
    /// group-behavior averaging).
    pub fn set_to_avoid(&mut self, to_avoid: Option<VehicleId>) {
        self.to_avoid = to_avoid;
    }

    pub fn wander_radius(&self) -> f32 {
        self.wander_radius
    }

    pub fn set_wander_radius(&mut self, value: f32) {
        if value > 0.0 {
            self.wander_radius = value;
        }
    }

    pub fn wander_distance(&self) -> f32 {
        self.wander_distance
    }

    pub fn set_wander_distance(&mut self, value: f32) {
        if value > 0.0 {
            self.wander_distance = value;
        }
    }

    pub fn wander_jitter(&self) -> f32 {
        self.wander_jitter
    }

    pub fn set_wander_jitter(&mut self, value: f32) {
        if value > 0.0 {
            self.wander_jitter = value;
        }
    }

    // ── Debug outputs (read-only to callers) ──────────────────────────────

    /// World position of the last wander target, for debug rendering.
    pub fn wander_target_pos(&self) -> Vec2 {
        self.wander_target_pos
    }

    /// World position of the wander circle center, for debug rendering.
    pub fn wander_circle_pos(&self) -> Vec2 {
        self.wander_circle_pos
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Compute the combined steering force for this tick.
    ///
    /// `agent` and everything in `ctx` must come from the same entity
    /// snapshot (the previous completed tick).  The result is always capped
    /// at `agent.max_force()`.
    ///
    /// Fails fast with a [`BehaviorError`] the first time a behavior is
    /// evaluated without its required reference resolved in `ctx`.
    pub fn calculate(
        &mut self,
        agent: &MovingEntity,
        ctx:   &SteeringContext<'_>,
        dt:    f32,
        rng:   &mut SteerRng,
    ) -> BehaviorResult<Vec2> {
        match self.combine_method {
            CombineMethod::Weighted => self.calculate_weighted(agent, ctx, dt, rng),
            CombineMethod::PrioritizedAndWeighted => {
                self.calculate_prioritized(agent, ctx, dt, rng)
            }
        }
    }

    fn calculate_weighted(
        &mut self,
        agent: &MovingEntity,
        ctx:   &SteeringContext<'_>,
        dt:    f32,
        rng:   &mut SteerRng,
    ) -> BehaviorResult<Vec2> {
        let mut total = Vec2::ZERO;
        for kind in WEIGHTED_ORDER {
            if self.is_on(kind) {
                total += self.evaluate(kind, agent, ctx, dt, rng)?;
            }
        }
        Ok(total.truncate(agent.max_force()))
    }

    fn calculate_prioritized(
        &mut self,
        agent: &MovingEntity,
        ctx:   &SteeringContext<'_>,
        dt:    f32,
        rng:   &mut SteerRng,
    ) -> BehaviorResult<Vec2> {
        let mut total = Vec2::ZERO;
        for kind in PRIORITY_ORDER {
            if !self.is_on(kind) {
                continue;
            }
            let force = self.evaluate(kind, agent, ctx, dt, rng)?;
            if !accumulate_force(&mut total, force, agent.max_force()) {
                break;
            }
        }
        Ok(total)
    }

    /// One behavior's weighted contribution.
    fn evaluate(
        &mut self,
        kind:  BehaviorKind,
        agent: &MovingEntity,
        ctx:   &SteeringContext<'_>,
        dt:    f32,
        rng:   &mut SteerRng,
    ) -> BehaviorResult<Vec2> {
        let force = match kind {
            BehaviorKind::Seek => self.seek(agent, require_target(ctx, kind)?.pos),
            BehaviorKind::Flee => self.flee(agent, require_avoid(ctx, kind)?.pos),
            BehaviorKind::Arrive => self.arrive(agent, require_target(ctx, kind)?.pos),
            BehaviorKind::Pursuit => self.pursuit(agent, require_target(ctx, kind)?),
            BehaviorKind::Evade => self.evade(agent, require_avoid(ctx, kind)?),
            BehaviorKind::Wander => self.wander(agent, dt, rng),
            BehaviorKind::Separation => self.separation(agent, ctx.neighbors),
            BehaviorKind::Alignment => self.alignment(agent, ctx.neighbors),
            BehaviorKind::Cohesion => self.cohesion(agent, ctx.neighbors),
            // Reserved kinds have no force law yet.
            _ => Vec2::ZERO,
        };
        Ok(force * self.weights.get(kind))
    }

    // ── Individual force laws ─────────────────────────────────────────────

    /// Steer at full speed towards `target_pos`.
    fn seek(&self, agent: &MovingEntity, target_pos: Vec2) -> Vec2 {
        let desired = (target_pos - agent.pos).normalized() * agent.max_speed();
        desired - agent.velocity()
    }

    /// Steer at full speed away from `threat_pos`, but only while the threat
    /// is within view distance — beyond it there is nothing to panic about.
    fn flee(&self, agent: &MovingEntity, threat_pos: Vec2) -> Vec2 {
        if agent.pos.distance_squared(threat_pos) > self.view_distance * self.view_distance {
            return Vec2::ZERO;
        }
        let desired = (agent.pos - threat_pos).normalized() * agent.max_speed();
        desired - agent.velocity()
    }

    /// Seek that brakes exponentially inside the agent's brake radius and
    /// comes to rest on the target.
    fn arrive(&self, agent: &MovingEntity, target_pos: Vec2) -> Vec2 {
        let offset = target_pos - agent.pos;
        let distance = offset.length();

        let desired = if distance <= 1e-6 {
            Vec2::ZERO
        } else if distance < agent.brake_radius {
            offset.normalized() * agent.max_speed() * (-agent.brake_radius / distance).exp()
        } else {
            offset.normalized() * agent.max_speed()
        };

        desired - agent.velocity()
    }

    /// Intercept a moving target.
    ///
    /// When the target is ahead and roughly facing the agent (headings more
    /// than 160° apart) the two are closing head-on and plain seek is the
    /// best move.  Otherwise seek the target's position extrapolated over
    /// the estimated interception time, padded by [`turn_around_time`].
    fn pursuit(&self, agent: &MovingEntity, target: &MovingEntity) -> Vec2 {
        let to_target = target.pos - agent.pos;
        let cos_heading = agent.heading().dot(target.heading());

        let facing_threshold = (180.0f32 - 20.0).to_radians().cos();
        if cos_heading < facing_threshold && to_target.dot(agent.heading()) > 0.0 {
            return self.seek(agent, target.pos);
        }

        let mut time_ahead = to_target.length() / (agent.max_speed() + target.speed());
        time_ahead += turn_around_time(agent, target.pos, PURSUIT_TURN_DELAY);

        self.seek(agent, target.pos + target.velocity() * time_ahead)
    }

    /// Flee from a pursuer's predicted position instead of its current one.
    fn evade(&self, agent: &MovingEntity, pursuer: &MovingEntity) -> Vec2 {
        let to_pursuer = pursuer.pos - agent.pos;
        let time_ahead = to_pursuer.length() / (agent.max_speed() + pursuer.speed());
        self.flee(agent, pursuer.pos + pursuer.velocity() * time_ahead)
    }

    /// Smooth pseudo-random roaming.
    ///
    /// The persistent `wander_target` random-walks on a circle of
    /// `wander_radius` projected `wander_distance` ahead of the agent; each
    /// call jitters it (scaled by `dt` so the walk is frame-rate
    /// independent), re-projects it onto the circle, and seeks the resulting
    /// world point.  This is the engine's only carried per-call state.
    fn wander(&mut self, agent: &MovingEntity, dt: f32, rng: &mut SteerRng) -> Vec2 {
        let jitter = dt * self.wander_jitter;
        self.wander_target += Vec2::new(rng.binomial() * jitter, rng.binomial() * jitter);
        self.wander_target = self.wander_target.normalized() * self.wander_radius;

        let local_target = self.wander_target + Vec2::new(self.wander_distance, 0.0);
        let world_target =
            local_to_world(local_target, agent.heading(), agent.perp(), agent.pos);

        self.wander_target_pos = world_target;
        self.wander_circle_pos = local_to_world(
            Vec2::new(self.wander_distance, 0.0),
            agent.heading(),
            agent.perp(),
            agent.pos,
        );

        self.seek(agent, world_target)
    }

    /// Push away from neighbors closer than twice the agent's bounding
    /// radius, weighted by inverse squared distance.
    fn separation(&self, agent: &MovingEntity, neighbors: &[MovingEntity]) -> Vec2 {
        let min_distance_squared = (agent.bounding_radius * 2.0).powi(2);

        let mut desired = Vec2::ZERO;
        let mut count = 0u32;

        for neighbor in self.relevant_neighbors(agent, neighbors) {
            let distance_squared = agent.pos.distance_squared(neighbor.pos);
            // distance_squared == 0 would blow up the scaling; coincident
            // entities contribute nothing.
            if distance_squared > 0.0 && distance_squared < min_distance_squared {
                desired += (agent.pos - neighbor.pos).normalized() / distance_squared;
                count += 1;
            }
        }

        if count > 0 {
            desired /= count as f32;
            desired.normalized() * agent.max_speed() - agent.velocity()
        } else {
            Vec2::ZERO
        }
    }

    /// Match the average neighbor velocity.
    fn alignment(&self, agent: &MovingEntity, neighbors: &[MovingEntity]) -> Vec2 {
        let mut average = Vec2::ZERO;
        let mut count = 0u32;

        for neighbor in self.relevant_neighbors(agent, neighbors) {
            average += neighbor.velocity();
            count += 1;
        }

        if count > 0 {
            average /= count as f32;
            average.normalized() * agent.max_speed() - agent.velocity()
        } else {
            Vec2::ZERO
        }
    }

    /// Seek the neighbors' center of mass.
    fn cohesion(&self, agent: &MovingEntity, neighbors: &[MovingEntity]) -> Vec2 {
        let mut center = Vec2::ZERO;
        let mut count = 0u32;

        for neighbor in self.relevant_neighbors(agent, neighbors) {
            center += neighbor.pos;
            count += 1;
        }

        if count > 0 {
            self.seek(agent, center / count as f32)
        } else {
            Vec2::ZERO
        }
    }

    /// Neighbors minus the agent itself and the `to_avoid` entity (the
    /// threat is evaded, not flocked with).
    fn relevant_neighbors<'a>(
        &'a self,
        agent: &'a MovingEntity,
        neighbors: &'a [MovingEntity],
    ) -> impl Iterator<Item = &'a MovingEntity> {
        neighbors
            .iter()
            .filter(move |n| n.id != agent.id && Some(n.id) != self.to_avoid)
    }
}

// ── Force accumulation ────────────────────────────────────────────────────────

/// Add `force` to `total` without exceeding `max_force`.
///
/// Returns `true` when the full force fit and evaluation may continue.
/// Returns `false` when the budget was already spent (nothing added) or the
/// force had to be clipped to exactly fill it — either way, lower-priority
/// behaviors are skipped for this tick.
fn accumulate_force(total: &mut Vec2, force: Vec2, max_force: f32) -> bool {
    let remaining = max_force - total.length();
    if remaining <= 0.0 {
        return false;
    }

    if force.length() < remaining {
        *total += force;
        true
    } else {
        *total += force.normalized() * remaining;
        false
    }
}

/// A non-negative delay estimating how long `entity` needs to turn to face
/// `target_pos`: zero when already facing, `2 * coef_delay` seconds when
/// facing exactly away.
pub fn turn_around_time(entity: &MovingEntity, target_pos: Vec2, coef_delay: f32) -> f32 {
    let desired = (target_pos - entity.pos).normalized();
    // 1 = facing the target, -1 = facing directly away.
    let cos_angle = entity.heading().dot(desired);
    (cos_angle - 1.0) * coef_delay * -1.0
}

// ── Reference resolution ──────────────────────────────────────────────────────

fn require_target<'a>(
    ctx:  &SteeringContext<'a>,
    kind: BehaviorKind,
) -> BehaviorResult<&'a MovingEntity> {
    ctx.target.ok_or(BehaviorError::MissingTarget(kind))
}

fn require_avoid<'a>(
    ctx:  &SteeringContext<'a>,
    kind: BehaviorKind,
) -> BehaviorResult<&'a MovingEntity> {
    ctx.to_avoid.ok_or(BehaviorError::MissingAvoidTarget(kind))
}
