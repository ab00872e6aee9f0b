use steer_core::{SteerRng, Vec2, VehicleId};
use steer_entity::MovingEntity;

use crate::{
    BehaviorError, BehaviorKind, BehaviorSet, CombineMethod, SteeringBehavior, SteeringContext,
    WeightTable,
};

fn entity(id: u32, pos: Vec2, velocity: Vec2, max_speed: f32, max_force: f32) -> MovingEntity {
    MovingEntity::new(VehicleId(id), pos, velocity, 1.0, max_speed, max_force).unwrap()
}

fn rng_for(id: u32) -> SteerRng {
    SteerRng::new(42, VehicleId(id))
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

const DT: f32 = 0.016;

// ── Behavior sets ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod behavior_set {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = BehaviorSet::EMPTY;
        assert!(set.is_empty());

        set.insert(BehaviorKind::Seek);
        set.insert(BehaviorKind::Evade);
        assert!(set.contains(BehaviorKind::Seek));
        assert!(set.contains(BehaviorKind::Evade));
        assert!(!set.contains(BehaviorKind::Flee));

        set.remove(BehaviorKind::Seek);
        assert!(!set.contains(BehaviorKind::Seek));
        assert!(set.contains(BehaviorKind::Evade));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = BehaviorSet::EMPTY;
        set.insert(BehaviorKind::Wander);
        set.insert(BehaviorKind::Wander);
        assert!(set.contains(BehaviorKind::Wander));
        set.remove(BehaviorKind::Wander);
        assert!(set.is_empty());
    }

    #[test]
    fn clear_disables_everything() {
        let mut set = BehaviorSet::EMPTY;
        for kind in BehaviorKind::IMPLEMENTED {
            set.insert(kind);
        }
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn engine_toggle_roundtrip() {
        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        assert!(!eng.has_active_behavior());

        eng.enable(BehaviorKind::Separation);
        assert!(eng.is_on(BehaviorKind::Separation));
        assert!(eng.has_active_behavior());
        assert!(eng.needs_neighbors());

        eng.disable(BehaviorKind::Separation);
        eng.enable(BehaviorKind::Seek);
        assert!(!eng.needs_neighbors());

        eng.clear_behaviors();
        assert!(!eng.has_active_behavior());
    }
}

// ── Weights ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod weights {
    use super::*;

    #[test]
    fn defaults_to_one_for_implemented_kinds() {
        let table = WeightTable::new();
        for kind in BehaviorKind::IMPLEMENTED {
            assert_eq!(table.get(kind), 1.0);
        }
        assert_eq!(table.get(BehaviorKind::FollowPath), 0.0);
    }

    #[test]
    fn assign_rejects_non_positive_values() {
        let mut table = WeightTable::new();
        assert!(!table.assign(BehaviorKind::Seek, 0.0));
        assert!(!table.assign(BehaviorKind::Seek, -2.0));
        assert_eq!(table.get(BehaviorKind::Seek), 1.0);
    }

    #[test]
    fn assign_rejects_unimplemented_kinds() {
        let mut table = WeightTable::new();
        assert!(!table.assign(BehaviorKind::Hide, 5.0));
        assert_eq!(table.get(BehaviorKind::Hide), 0.0);
    }

    #[test]
    fn assign_scales_the_force() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 10.0, 1000.0);
        let target = entity(1, Vec2::new(50.0, 0.0), Vec2::ZERO, 10.0, 1000.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Seek);
        let base = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        assert!(eng.assign_weight(BehaviorKind::Seek, 3.0));
        let scaled = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        assert!(approx(scaled, base * 3.0));
    }
}

// ── Reference resolution ──────────────────────────────────────────────────────

#[cfg(test)]
mod references {
    use super::*;

    #[test]
    fn seek_without_target_fails() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 10.0, 100.0);
        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Seek);

        let err = eng
            .calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng_for(0))
            .unwrap_err();
        assert_eq!(err, BehaviorError::MissingTarget(BehaviorKind::Seek));
    }

    #[test]
    fn flee_without_threat_fails() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 10.0, 100.0);
        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Flee);

        let err = eng
            .calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng_for(0))
            .unwrap_err();
        assert_eq!(err, BehaviorError::MissingAvoidTarget(BehaviorKind::Flee));
    }

    #[test]
    fn target_setter_roundtrip() {
        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        assert_eq!(eng.target(), None);
        eng.set_target(Some(VehicleId(3)));
        eng.set_to_avoid(Some(VehicleId(7)));
        assert_eq!(eng.target(), Some(VehicleId(3)));
        assert_eq!(eng.to_avoid(), Some(VehicleId(7)));
    }
}

// ── Individual force laws ─────────────────────────────────────────────────────

#[cfg(test)]
mod force_laws {
    use super::*;

    #[test]
    fn seek_points_at_the_target_at_full_speed() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(0.0, 5.0), 20.0, 1000.0);
        let target = entity(1, Vec2::new(100.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Seek);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        // desired = (1,0)*20, minus current velocity (0,5).
        assert!(approx(force, Vec2::new(20.0, -5.0)));
    }

    #[test]
    fn flee_is_zero_beyond_view_distance() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 20.0, 1000.0);
        let threat = entity(1, Vec2::new(150.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let ctx = SteeringContext { to_avoid: Some(&threat), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Flee);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        assert!(approx(force, Vec2::ZERO));
    }

    #[test]
    fn flee_pushes_directly_away_inside_view_distance() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(5.0, 0.0), 20.0, 1000.0);
        let threat = entity(1, Vec2::new(50.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let ctx = SteeringContext { to_avoid: Some(&threat), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Flee);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        // desired = (-1,0)*20, minus current velocity (5,0).
        assert!(approx(force, Vec2::new(-25.0, 0.0)));
    }

    #[test]
    fn flee_honors_a_custom_view_distance() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 20.0, 1000.0);
        let threat = entity(1, Vec2::new(50.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let ctx = SteeringContext { to_avoid: Some(&threat), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Flee);
        eng.set_view_distance(30.0);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();
        assert!(approx(force, Vec2::ZERO));

        // A non-positive value is ignored, not applied.
        eng.set_view_distance(-1.0);
        assert_eq!(eng.view_distance(), 30.0);
    }

    #[test]
    fn arrive_at_the_target_cancels_velocity() {
        let agent = entity(0, Vec2::new(3.0, 4.0), Vec2::new(2.0, -1.0), 20.0, 1000.0);
        let target = entity(1, Vec2::new(3.0, 4.0), Vec2::ZERO, 20.0, 1000.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Arrive);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        assert!(approx(force, Vec2::new(-2.0, 1.0)));
    }

    #[test]
    fn arrive_brakes_inside_the_brake_radius() {
        // Distance 2 with the default brake radius of 5.
        let agent = entity(0, Vec2::ZERO, Vec2::new(3.0, 0.0), 20.0, 1000.0);
        let target = entity(1, Vec2::new(2.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Arrive);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        let desired = 20.0 * (-agent.brake_radius / 2.0_f32).exp();
        assert!(approx(force, Vec2::new(desired - 3.0, 0.0)));
        // Still closing but slowing down.
        assert!(force.x < 0.0);
    }

    #[test]
    fn arrive_far_away_matches_seek() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(1.0, 0.0), 20.0, 1000.0);
        let target = entity(1, Vec2::new(100.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Arrive);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        assert!(approx(force, Vec2::new(19.0, 0.0)));
    }

    #[test]
    fn pursuit_seeks_directly_when_closing_head_on() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0, 1000.0);
        let target = entity(1, Vec2::new(50.0, 0.0), Vec2::new(-10.0, 0.0), 20.0, 1000.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Pursuit);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        // Head-on: plain seek at the target's current position.
        assert!(approx(force, Vec2::new(20.0, 0.0) - agent.velocity()));
    }

    #[test]
    fn pursuit_leads_a_crossing_target() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0, 1000.0);
        let target = entity(1, Vec2::new(100.0, 0.0), Vec2::new(0.0, 10.0), 20.0, 1000.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Pursuit);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        // The target moves up, so the intercept point is above its current
        // position and the force leans upward.
        assert!(force.y > 0.0);
    }

    #[test]
    fn evade_flees_the_predicted_position() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(1.0, 0.0), 20.0, 1000.0);
        let pursuer = entity(1, Vec2::new(30.0, 0.0), Vec2::new(-10.0, 0.0), 20.0, 1000.0);
        let ctx = SteeringContext { to_avoid: Some(&pursuer), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Evade);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        // The pursuer closes in from +x; the force runs away along -x.
        assert!(force.x < 0.0);
    }

    #[test]
    fn separation_is_symmetric_for_a_mirrored_pair() {
        let a = entity(0, Vec2::ZERO, Vec2::ZERO, 20.0, 1000.0);
        let b = entity(1, Vec2::new(5.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let neighbors = [a, b];

        let mut eng_a = SteeringBehavior::new(&mut rng_for(0));
        let mut eng_b = SteeringBehavior::new(&mut rng_for(1));
        eng_a.enable(BehaviorKind::Separation);
        eng_b.enable(BehaviorKind::Separation);

        let ctx = SteeringContext { neighbors: &neighbors, ..Default::default() };
        let force_a = eng_a.calculate(&a, &ctx, DT, &mut rng_for(0)).unwrap();
        let force_b = eng_b.calculate(&b, &ctx, DT, &mut rng_for(1)).unwrap();

        assert!(approx(force_a, -force_b));
        assert!(force_a.x < 0.0);
    }

    #[test]
    fn separation_ignores_neighbors_outside_the_personal_zone() {
        // Default bounding radius is 10, so the zone ends at distance 20.
        let a = entity(0, Vec2::ZERO, Vec2::ZERO, 20.0, 1000.0);
        let far = entity(1, Vec2::new(25.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let neighbors = [a, far];

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Separation);
        let ctx = SteeringContext { neighbors: &neighbors, ..Default::default() };

        let force = eng.calculate(&a, &ctx, DT, &mut rng_for(0)).unwrap();
        assert!(approx(force, Vec2::ZERO));
    }

    #[test]
    fn alignment_matches_the_average_neighbor_velocity() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(5.0, 0.0), 20.0, 1000.0);
        let n1 = entity(1, Vec2::new(10.0, 0.0), Vec2::new(0.0, 2.0), 20.0, 1000.0);
        let n2 = entity(2, Vec2::new(0.0, 10.0), Vec2::new(0.0, 4.0), 20.0, 1000.0);
        let neighbors = [agent, n1, n2];

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Alignment);
        let ctx = SteeringContext { neighbors: &neighbors, ..Default::default() };

        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();
        // Average heading is straight up, scaled to max speed, minus velocity.
        assert!(approx(force, Vec2::new(-5.0, 20.0)));
    }

    #[test]
    fn group_behaviors_skip_the_agent_and_the_threat() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 20.0, 1000.0);
        let threat = entity(1, Vec2::new(0.0, 50.0), Vec2::ZERO, 20.0, 1000.0);
        let friend = entity(2, Vec2::new(40.0, 0.0), Vec2::ZERO, 20.0, 1000.0);
        let neighbors = [agent, threat, friend];

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Cohesion);
        eng.set_to_avoid(Some(threat.id));
        let ctx = SteeringContext {
            to_avoid:  Some(&threat),
            neighbors: &neighbors,
            ..Default::default()
        };

        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();
        // Only the friend counts, so cohesion seeks straight at it.
        assert!(approx(force, Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn group_behaviors_with_no_neighbors_produce_nothing() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(1.0, 0.0), 20.0, 1000.0);
        let neighbors = [agent];

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Separation);
        eng.enable(BehaviorKind::Alignment);
        eng.enable(BehaviorKind::Cohesion);
        let ctx = SteeringContext { neighbors: &neighbors, ..Default::default() };

        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();
        assert!(approx(force, Vec2::ZERO));
    }

    #[test]
    fn reserved_kinds_contribute_no_force() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(1.0, 0.0), 20.0, 1000.0);
        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::FollowPath);

        let force = eng
            .calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng_for(0))
            .unwrap();
        assert!(approx(force, Vec2::ZERO));
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander {
    use super::*;

    #[test]
    fn produces_a_force_and_tracks_debug_positions() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0, 1000.0);
        let mut rng = rng_for(0);
        let mut eng = SteeringBehavior::new(&mut rng);
        eng.enable(BehaviorKind::Wander);

        let force = eng.calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng).unwrap();
        assert!(force.length() > 0.0);

        // The wander target always sits on the circle around the projected
        // circle center.
        let offset = eng.wander_target_pos() - eng.wander_circle_pos();
        assert!((offset.length() - eng.wander_radius()).abs() < 1e-3);
    }

    #[test]
    fn same_seed_reproduces_the_same_walk() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0, 1000.0);

        let mut rng_a = rng_for(0);
        let mut rng_b = rng_for(0);
        let mut eng_a = SteeringBehavior::new(&mut rng_a);
        let mut eng_b = SteeringBehavior::new(&mut rng_b);
        eng_a.enable(BehaviorKind::Wander);
        eng_b.enable(BehaviorKind::Wander);

        for _ in 0..10 {
            let fa = eng_a.calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng_a).unwrap();
            let fb = eng_b.calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng_b).unwrap();
            assert_eq!(fa, fb);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0, 1000.0);

        let mut rng_a = rng_for(0);
        let mut rng_b = rng_for(1);
        let mut eng_a = SteeringBehavior::new(&mut rng_a);
        let mut eng_b = SteeringBehavior::new(&mut rng_b);
        eng_a.enable(BehaviorKind::Wander);
        eng_b.enable(BehaviorKind::Wander);

        let fa = eng_a.calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng_a).unwrap();
        let fb = eng_b.calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng_b).unwrap();
        assert_ne!(fa, fb);
    }

    #[test]
    fn tuning_setters_reject_non_positive_values() {
        let mut eng = SteeringBehavior::new(&mut rng_for(0));

        eng.set_wander_radius(40.0);
        eng.set_wander_radius(0.0);
        assert_eq!(eng.wander_radius(), 40.0);

        eng.set_wander_distance(-3.0);
        assert_eq!(eng.wander_distance(), SteeringBehavior::DEFAULT_WANDER_DISTANCE);

        eng.set_wander_jitter(250.0);
        assert_eq!(eng.wander_jitter(), 250.0);
    }
}

// ── Force combination ─────────────────────────────────────────────────────────

#[cfg(test)]
mod combination {
    use super::*;

    #[test]
    fn weighted_sum_is_capped_at_max_force() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 100.0, 5.0);
        let target = entity(1, Vec2::new(200.0, 0.0), Vec2::ZERO, 100.0, 5.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.enable(BehaviorKind::Seek);
        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();

        assert!((force.length() - 5.0).abs() < 1e-4);
        // Direction survives the cap.
        assert!(force.x > 0.0 && approx(Vec2::new(0.0, force.y), Vec2::ZERO));
    }

    #[test]
    fn prioritized_sum_never_exceeds_max_force() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 100.0, 10.0);
        let threat = entity(1, Vec2::new(20.0, 0.0), Vec2::new(-5.0, 0.0), 100.0, 10.0);
        let ctx = SteeringContext { to_avoid: Some(&threat), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.combine_method = CombineMethod::PrioritizedAndWeighted;
        eng.enable(BehaviorKind::Evade);
        eng.enable(BehaviorKind::Flee);

        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();
        assert!((force.length() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn prioritized_stops_evaluating_once_the_budget_is_spent() {
        // Seek is enabled but its target is unresolved.  Under the weighted
        // method that is an error; under the prioritized method the
        // higher-priority evade fills the whole force budget first, so seek
        // must never be evaluated.
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 100.0, 10.0);
        let threat = entity(1, Vec2::new(20.0, 0.0), Vec2::new(-5.0, 0.0), 100.0, 10.0);
        let ctx = SteeringContext { to_avoid: Some(&threat), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.combine_method = CombineMethod::PrioritizedAndWeighted;
        eng.enable(BehaviorKind::Evade);
        eng.enable(BehaviorKind::Seek);

        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();
        assert!((force.length() - 10.0).abs() < 1e-3);

        eng.combine_method = CombineMethod::Weighted;
        assert!(eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).is_err());
    }

    #[test]
    fn prioritized_passes_small_forces_through_unclipped() {
        let agent = entity(0, Vec2::ZERO, Vec2::ZERO, 2.0, 100.0);
        let target = entity(1, Vec2::new(50.0, 0.0), Vec2::ZERO, 2.0, 100.0);
        let ctx = SteeringContext { target: Some(&target), ..Default::default() };

        let mut eng = SteeringBehavior::new(&mut rng_for(0));
        eng.combine_method = CombineMethod::PrioritizedAndWeighted;
        eng.enable(BehaviorKind::Seek);

        let force = eng.calculate(&agent, &ctx, DT, &mut rng_for(0)).unwrap();
        // Seek's raw magnitude is max_speed, well under the budget.
        assert!(approx(force, Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn disabled_behaviors_contribute_nothing() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(1.0, 0.0), 20.0, 1000.0);
        let mut eng = SteeringBehavior::new(&mut rng_for(0));

        let force = eng
            .calculate(&agent, &SteeringContext::EMPTY, DT, &mut rng_for(0))
            .unwrap();
        assert!(approx(force, Vec2::ZERO));
    }
}

// ── Turn-around delay ─────────────────────────────────────────────────────────

#[cfg(test)]
mod turn_delay {
    use super::*;
    use crate::turn_around_time;

    #[test]
    fn zero_when_already_facing() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0, 1000.0);
        let delay = turn_around_time(&agent, Vec2::new(50.0, 0.0), 0.05);
        assert!(delay.abs() < 1e-5);
    }

    #[test]
    fn maximal_when_facing_directly_away() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0, 1000.0);
        let delay = turn_around_time(&agent, Vec2::new(-50.0, 0.0), 0.05);
        assert!((delay - 0.1).abs() < 1e-5);
    }

    #[test]
    fn always_non_negative() {
        let agent = entity(0, Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0, 1000.0);
        for target in [
            Vec2::new(0.0, 30.0),
            Vec2::new(-10.0, -10.0),
            Vec2::new(5.0, -40.0),
        ] {
            assert!(turn_around_time(&agent, target, 0.05) >= 0.0);
        }
    }
}
