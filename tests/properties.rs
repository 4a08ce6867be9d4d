//! Property tests for the simulation invariants

use block_dodge::consts::*;
use block_dodge::sim::{
    Aabb, Difficulty, GamePhase, GameState, Player, ProjectileKind, TickInput, physics, tick,
};
use glam::Vec2;
use proptest::prelude::*;

proptest! {
    /// Velocity components stay within the speed limit after every tick
    #[test]
    fn velocity_always_within_max_speed(
        vx in -2000.0f32..2000.0,
        vy in -2000.0f32..2000.0,
        ix in -1i8..=1,
        iy in -1i8..=1,
        ticks in 1usize..120,
    ) {
        let mut player = Player::default();
        player.vel = Vec2::new(vx, vy);
        for _ in 0..ticks {
            physics::integrate(&mut player, ix, iy, SIM_DT);
            prop_assert!(player.vel.x.abs() <= MAX_SPEED + 1e-3);
            prop_assert!(player.vel.y.abs() <= MAX_SPEED + 1e-3);
        }
    }

    /// With no input, an axis's speed decays and never grows (away from walls)
    #[test]
    fn idle_axis_speed_never_grows(
        vx in -420.0f32..420.0,
        ticks in 1usize..50,
    ) {
        let mut player = Player::default();
        player.vel = Vec2::new(vx, 0.0);
        let mut prev = player.vel.x.abs();
        for _ in 0..ticks {
            physics::integrate(&mut player, 0, 0, SIM_DT);
            prop_assert!(player.vel.x.abs() <= prev + 1e-6);
            prev = player.vel.x.abs();
        }
    }

    /// Hold right for n ticks, release for m: friction leaves ~speed * 0.92^m
    #[test]
    fn friction_decay_matches_geometric_law(
        n in 1usize..40,
        m in 1usize..40,
    ) {
        let mut player = Player::default();
        for _ in 0..n {
            physics::integrate(&mut player, 1, 0, SIM_DT);
        }
        let at_release = player.vel.x;
        for _ in 0..m {
            physics::integrate(&mut player, 0, 0, SIM_DT);
        }
        let expected = at_release * FRICTION.powi(m as i32);
        prop_assert!((player.vel.x - expected).abs() <= expected.abs() * 1e-3 + 1e-3);
    }

    /// AABB overlap holds exactly when both axis intervals strictly intersect
    #[test]
    fn aabb_overlap_iff_both_axis_intervals_intersect(
        ax in -500.0f32..500.0,
        ay in -500.0f32..500.0,
        aw in 1.0f32..120.0,
        ah in 1.0f32..120.0,
        bx in -500.0f32..500.0,
        by in -500.0f32..500.0,
        bw in 1.0f32..120.0,
        bh in 1.0f32..120.0,
    ) {
        let a = Aabb::from_pos_extent(Vec2::new(ax, ay), Vec2::new(aw, ah));
        let b = Aabb::from_pos_extent(Vec2::new(bx, by), Vec2::new(bw, bh));
        let x_intersects = ax < bx + bw && ax + aw > bx;
        let y_intersects = ay < by + bh && ay + ah > by;
        prop_assert_eq!(a.overlaps(&b), x_intersects && y_intersects);
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    /// Every category's ramp is non-decreasing and capped, whatever the dts
    #[test]
    fn ramps_are_monotone_and_capped(
        dts in prop::collection::vec(0.0f32..0.25, 1..300),
    ) {
        let mut difficulty = Difficulty::new();
        let mut prev: Vec<f32> = ProjectileKind::ALL
            .into_iter()
            .map(|k| difficulty.speed_of(k))
            .collect();
        for dt in dts {
            difficulty.advance(dt);
            for (i, kind) in ProjectileKind::ALL.into_iter().enumerate() {
                let speed = difficulty.speed_of(kind);
                prop_assert!(speed >= prev[i]);
                prop_assert!(speed <= 1080.0);
                prev[i] = speed;
            }
        }
    }

    /// Lives never increase over the course of a run, and score never decreases
    #[test]
    fn lives_and_score_are_monotone(seed in any::<u64>(), ticks in 1usize..900) {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Running;
        let input = TickInput::default();
        let mut lives = state.player.lives;
        let mut score = state.player.score;
        for _ in 0..ticks {
            tick(&mut state, &input, SIM_DT);
            prop_assert!(state.player.lives <= lives);
            prop_assert!(state.player.score >= score);
            lives = state.player.lives;
            score = state.player.score;
        }
    }

    /// Projectiles past the cull margin are gone by the end of any tick
    #[test]
    fn no_projectile_survives_past_the_margin(seed in any::<u64>(), ticks in 1usize..900) {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Running;
        let input = TickInput::default();
        for _ in 0..ticks {
            tick(&mut state, &input, SIM_DT);
            for p in &state.projectiles {
                let extent = p.kind.extent();
                prop_assert!(p.pos.x <= FIELD_WIDTH + CULL_MARGIN);
                prop_assert!(p.pos.x + extent.x >= -CULL_MARGIN);
            }
        }
    }
}
