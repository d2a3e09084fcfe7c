//! Field state and core simulation types
//!
//! Everything a tick reads or writes lives here. Spawning takes an injected
//! RNG so a seed reproduces the whole field.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::hex_rgba;
use crate::viewport::Viewport;

/// Fixed ball palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallColor {
    Coral,
    Turquoise,
    Sky,
    Sunflower,
    Tangerine,
    Crimson,
}

impl BallColor {
    pub const ALL: [BallColor; 6] = [
        BallColor::Coral,
        BallColor::Turquoise,
        BallColor::Sky,
        BallColor::Sunflower,
        BallColor::Tangerine,
        BallColor::Crimson,
    ];

    pub fn hex(&self) -> u32 {
        match self {
            BallColor::Coral => 0xff6b6b,
            BallColor::Turquoise => 0x4ecdc4,
            BallColor::Sky => 0x45b7d1,
            BallColor::Sunflower => 0xf9ca24,
            BallColor::Tangerine => 0xf0932b,
            BallColor::Crimson => 0xeb4d4b,
        }
    }

    pub fn rgba(&self, alpha: f32) -> [f32; 4] {
        hex_rgba(self.hex(), alpha)
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Also the wall margin
    pub size: f32,
    pub color: BallColor,
}

impl Ball {
    /// Draw a ball uniformly inside `viewport`
    pub fn spawn<R: Rng + ?Sized>(id: u32, rng: &mut R, viewport: Viewport) -> Self {
        let pos = random_pos(rng, viewport);
        let vel = random_vel(rng, BALL_SPEED_MAX);
        let size = rng.random_range(BALL_SIZE_MIN..BALL_SIZE_MAX);
        let color = BallColor::random(rng);
        Self {
            id,
            pos,
            vel,
            size,
            color,
        }
    }
}

/// A spinning demon glyph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demon {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Degrees, accumulates without wrapping
    pub rotation: f32,
    /// Degrees per tick
    pub rotation_speed: f32,
}

impl Demon {
    pub fn spawn<R: Rng + ?Sized>(id: u32, rng: &mut R, viewport: Viewport) -> Self {
        let pos = random_pos(rng, viewport);
        let vel = random_vel(rng, DEMON_SPEED_MAX);
        let size = rng.random_range(DEMON_SIZE_MIN..DEMON_SIZE_MAX);
        let rotation = rng.random_range(0.0..360.0);
        let rotation_speed =
            rng.random_range(-DEMON_ROTATION_SPEED_MAX..DEMON_ROTATION_SPEED_MAX);
        Self {
            id,
            pos,
            vel,
            size,
            rotation,
            rotation_speed,
        }
    }
}

fn random_pos<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..viewport.width),
        rng.random_range(0.0..viewport.height),
    )
}

fn random_vel<R: Rng + ?Sized>(rng: &mut R, max: f32) -> Vec2 {
    Vec2::new(rng.random_range(-max..max), rng.random_range(-max..max))
}

/// Complete field state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    /// Seed the field was spawned from, if it came from `new`
    pub seed: Option<u64>,
    /// Ticks applied since spawn
    pub time_ticks: u64,
    /// Balls, in id order
    pub balls: Vec<Ball>,
    /// Demons, in id order
    pub demons: Vec<Demon>,
}

impl FieldState {
    /// Spawn a field from a seed
    pub fn new(seed: u64, viewport: Option<Viewport>) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = Self::spawn(&mut rng, viewport);
        state.seed = Some(seed);
        state
    }

    /// Spawn a field from any random source. All balls are drawn before any
    /// demon.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Option<Viewport>) -> Self {
        let viewport = Viewport::or_fallback(viewport);

        let balls = (0..N_BALLS as u32)
            .map(|id| Ball::spawn(id, rng, viewport))
            .collect();
        let demons = (0..N_DEMONS as u32)
            .map(|id| Demon::spawn(id, rng, viewport))
            .collect();

        Self {
            seed: None,
            time_ticks: 0,
            balls,
            demons,
        }
    }

    /// Build a field from explicit entities (scenarios, replays)
    pub fn from_entities(balls: Vec<Ball>, demons: Vec<Demon>) -> Self {
        Self {
            seed: None,
            time_ticks: 0,
            balls,
            demons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_counts_and_ids() {
        let state = FieldState::new(42, Some(Viewport::new(800.0, 600.0)));
        assert_eq!(state.balls.len(), N_BALLS);
        assert_eq!(state.demons.len(), N_DEMONS);
        assert_eq!(state.seed, Some(42));
        assert_eq!(state.time_ticks, 0);

        let ball_ids: Vec<u32> = state.balls.iter().map(|b| b.id).collect();
        assert_eq!(ball_ids, (0..15).collect::<Vec<_>>());
        let demon_ids: Vec<u32> = state.demons.iter().map(|d| d.id).collect();
        assert_eq!(demon_ids, (0..5).collect::<Vec<_>>());
    }

    #[test]
    fn test_spawn_ranges() {
        for seed in 0..50 {
            let viewport = Viewport::new(640.0, 480.0);
            let state = FieldState::new(seed, Some(viewport));

            for ball in &state.balls {
                assert!((0.0..640.0).contains(&ball.pos.x));
                assert!((0.0..480.0).contains(&ball.pos.y));
                assert!((-1.0..1.0).contains(&ball.vel.x));
                assert!((-1.0..1.0).contains(&ball.vel.y));
                assert!((15.0..35.0).contains(&ball.size));
            }
            for demon in &state.demons {
                assert!((0.0..640.0).contains(&demon.pos.x));
                assert!((0.0..480.0).contains(&demon.pos.y));
                assert!((-0.75..0.75).contains(&demon.vel.x));
                assert!((-0.75..0.75).contains(&demon.vel.y));
                assert!((40.0..70.0).contains(&demon.size));
                assert!((0.0..360.0).contains(&demon.rotation));
                assert!((-2.5..2.5).contains(&demon.rotation_speed));
            }
        }
    }

    #[test]
    fn test_spawn_without_viewport_uses_fallback() {
        let mut spread = false;
        for seed in 0..20 {
            let state = FieldState::new(seed, None);
            for ball in &state.balls {
                assert!(ball.pos.x < 1920.0 && ball.pos.y < 1080.0);
                // At least one draw should land past a typical laptop width
                spread |= ball.pos.x > 1400.0;
            }
        }
        assert!(spread);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = FieldState::new(7, None);
        let b = FieldState::new(7, None);
        assert_eq!(a, b);

        let c = FieldState::new(8, None);
        assert_ne!(a, c);
    }

    #[test]
    fn test_injected_rng_is_used() {
        let mut rng_a = Pcg32::seed_from_u64(3);
        let mut rng_b = Pcg32::seed_from_u64(3);
        let a = FieldState::spawn(&mut rng_a, None);
        let b = FieldState::spawn(&mut rng_b, None);
        assert_eq!(a.balls, b.balls);
        assert_eq!(a.demons, b.demons);
        assert_eq!(a.seed, None);
    }

    #[test]
    fn test_palette() {
        assert_eq!(BallColor::ALL.len(), 6);
        assert_eq!(BallColor::Coral.rgba(1.0), [1.0, 107.0 / 255.0, 107.0 / 255.0, 1.0]);
        assert_eq!(BallColor::Crimson.hex(), 0xeb4d4b);
    }
}
