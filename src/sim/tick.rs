//! Fixed cadence simulation tick
//!
//! One call advances every entity by exactly one step. There is no delta
//! time: velocities are in pixels per tick.

use super::collision::step_in_viewport;
use super::state::FieldState;
use crate::viewport::Viewport;

/// Advance the field by one tick against the current viewport
pub fn tick(state: &mut FieldState, viewport: Viewport) {
    state.time_ticks += 1;

    for ball in &mut state.balls {
        step_in_viewport(&mut ball.pos, &mut ball.vel, ball.size, viewport);
    }

    for demon in &mut state.demons {
        step_in_viewport(&mut demon.pos, &mut demon.vel, demon.size, viewport);
        // Spins regardless of wall hits; never wrapped
        demon.rotation += demon.rotation_speed;
    }
}

/// Pure form of [`tick`]: returns the next state, leaving `prev` untouched
pub fn next_state(prev: &FieldState, viewport: Viewport) -> FieldState {
    let mut next = prev.clone();
    tick(&mut next, viewport);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{N_BALLS, N_DEMONS};
    use crate::sim::state::{Ball, BallColor, Demon};
    use glam::Vec2;
    use proptest::prelude::*;

    fn lone_ball(pos: Vec2, vel: Vec2, size: f32) -> FieldState {
        FieldState::from_entities(
            vec![Ball {
                id: 0,
                pos,
                vel,
                size,
                color: BallColor::Sky,
            }],
            Vec::new(),
        )
    }

    fn lone_demon(rotation: f32, rotation_speed: f32) -> FieldState {
        FieldState::from_entities(
            Vec::new(),
            vec![Demon {
                id: 0,
                pos: Vec2::new(400.0, 300.0),
                vel: Vec2::ZERO,
                size: 50.0,
                rotation,
                rotation_speed,
            }],
        )
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let mut state = lone_ball(Vec2::new(5.0, 100.0), Vec2::new(-1.0, 0.0), 15.0);
        tick(&mut state, Viewport::new(800.0, 600.0));

        let ball = &state.balls[0];
        assert_eq!(ball.vel.x, 1.0);
        assert_eq!(ball.pos.x, 15.0);
        assert_eq!(ball.pos.y, 100.0);
        assert_eq!(ball.vel.y, 0.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_demon_rotation_accumulates_without_wrapping() {
        let mut state = lone_demon(358.0, 5.0);
        let viewport = Viewport::new(800.0, 600.0);

        tick(&mut state, viewport);
        assert_eq!(state.demons[0].rotation, 363.0);

        tick(&mut state, viewport);
        assert_eq!(state.demons[0].rotation, 368.0);
    }

    #[test]
    fn test_demon_spins_while_bouncing() {
        let mut state = lone_demon(10.0, -2.0);
        state.demons[0].pos = Vec2::new(51.0, 300.0);
        state.demons[0].vel = Vec2::new(-2.0, 0.0);
        tick(&mut state, Viewport::new(800.0, 600.0));

        let demon = &state.demons[0];
        assert_eq!(demon.pos.x, 50.0);
        assert_eq!(demon.vel.x, 2.0);
        assert_eq!(demon.rotation, 8.0);
    }

    #[test]
    fn test_resize_between_ticks() {
        let mut state = lone_ball(Vec2::new(700.0, 300.0), Vec2::new(0.5, 0.0), 20.0);
        tick(&mut state, Viewport::new(1000.0, 600.0));
        assert_eq!(state.balls[0].pos.x, 700.5);

        // Window shrinks under the ball: next tick clamps it back inside
        tick(&mut state, Viewport::new(500.0, 600.0));
        assert_eq!(state.balls[0].pos.x, 480.0);
        assert_eq!(state.balls[0].vel.x, -0.5);
    }

    #[test]
    fn test_next_state_leaves_input() {
        let prev = FieldState::new(5, None);
        let next = next_state(&prev, Viewport::FALLBACK);
        assert_eq!(prev.time_ticks, 0);
        assert_eq!(next.time_ticks, 1);
        assert_ne!(prev.balls, next.balls);
    }

    #[test]
    fn test_determinism() {
        // Two fields with the same seed should stay identical
        let viewport = Viewport::new(1280.0, 720.0);
        let mut state1 = FieldState::new(99999, Some(viewport));
        let mut state2 = FieldState::new(99999, Some(viewport));

        for _ in 0..1000 {
            tick(&mut state1, viewport);
            tick(&mut state2, viewport);
        }

        assert_eq!(state1, state2);
    }

    proptest! {
        #[test]
        fn prop_entities_stay_inside(seed in any::<u64>(), w in 200.0f32..2500.0, h in 200.0f32..1500.0, ticks in 1usize..400) {
            let viewport = Viewport::new(w, h);
            let mut state = FieldState::new(seed, Some(viewport));

            for _ in 0..ticks {
                tick(&mut state, viewport);
                for ball in &state.balls {
                    prop_assert!(ball.pos.x >= ball.size && ball.pos.x <= w - ball.size);
                    prop_assert!(ball.pos.y >= ball.size && ball.pos.y <= h - ball.size);
                }
                for demon in &state.demons {
                    prop_assert!(demon.pos.x >= demon.size && demon.pos.x <= w - demon.size);
                    prop_assert!(demon.pos.y >= demon.size && demon.pos.y <= h - demon.size);
                }
            }

            prop_assert_eq!(state.balls.len(), N_BALLS);
            prop_assert_eq!(state.demons.len(), N_DEMONS);
        }

        #[test]
        fn prop_reflection_flips_only_on_crossing(seed in any::<u64>(), ticks in 0usize..200) {
            let viewport = Viewport::new(900.0, 700.0);
            let mut state = FieldState::new(seed, Some(viewport));
            for _ in 0..ticks {
                tick(&mut state, viewport);
            }

            let before = state.clone();
            tick(&mut state, viewport);

            let balls = before.balls.iter().zip(&state.balls).map(|(o, n)| (o.pos, o.vel, o.size, n.vel));
            let demons = before.demons.iter().zip(&state.demons).map(|(o, n)| (o.pos, o.vel, o.size, n.vel));
            for (pos, vel, size, new_vel) in balls.chain(demons) {
                let tentative = pos + vel;
                let crosses_x = tentative.x <= size || tentative.x >= viewport.width - size;
                let crosses_y = tentative.y <= size || tentative.y >= viewport.height - size;
                prop_assert_eq!(new_vel.x, if crosses_x { -vel.x } else { vel.x });
                prop_assert_eq!(new_vel.y, if crosses_y { -vel.y } else { vel.y });
            }
        }

        #[test]
        fn prop_rotation_adds_speed_exactly(seed in any::<u64>(), ticks in 1usize..300) {
            let mut state = FieldState::new(seed, None);
            for _ in 0..ticks {
                let before: Vec<(f32, f32)> = state
                    .demons
                    .iter()
                    .map(|d| (d.rotation, d.rotation_speed))
                    .collect();
                tick(&mut state, Viewport::FALLBACK);
                for (demon, (rotation, speed)) in state.demons.iter().zip(before) {
                    prop_assert_eq!(demon.rotation, rotation + speed);
                    prop_assert_eq!(demon.rotation_speed, speed);
                }
            }
        }
    }
}
