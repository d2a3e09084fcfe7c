//! Demon Field - animated bouncing background
//!
//! Core modules:
//! - `sim`: Deterministic simulation (balls, demons, wall reflection, driver)
//! - `viewport`: Viewport dimensions and their sources
//! - `renderer`: WebGPU rendering pipeline and scene builders
//! - `platform`: Browser timer plumbing
//! - `settings`: Persisted user preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod viewport;

pub use settings::{QualityPreset, Settings};
pub use viewport::{FixedViewport, Viewport, ViewportSource};

/// Field configuration constants
pub mod consts {
    /// Timer cadence between ticks (~60 Hz)
    pub const TICK_INTERVAL_MS: u32 = 16;

    /// Entity counts, fixed for the lifetime of a field
    pub const N_BALLS: usize = 15;
    pub const N_DEMONS: usize = 5;

    /// Viewport used when the host cannot report one
    pub const FALLBACK_WIDTH: f32 = 1920.0;
    pub const FALLBACK_HEIGHT: f32 = 1080.0;

    /// Ball spawn ranges (half-open)
    pub const BALL_SPEED_MAX: f32 = 1.0; // per axis, pixels/tick
    pub const BALL_SIZE_MIN: f32 = 15.0;
    pub const BALL_SIZE_MAX: f32 = 35.0;

    /// Demon spawn ranges (half-open)
    pub const DEMON_SPEED_MAX: f32 = 0.75;
    pub const DEMON_SIZE_MIN: f32 = 40.0;
    pub const DEMON_SIZE_MAX: f32 = 70.0;
    pub const DEMON_ROTATION_SPEED_MAX: f32 = 2.5; // degrees/tick

    /// Draw opacities
    pub const BALL_OPACITY: f32 = 0.7;
    pub const DEMON_BODY_OPACITY: f32 = 0.8;
}

/// Rotate `v` by `degrees`, clockwise on a y-down screen
#[inline]
pub fn rotate_degrees(v: glam::Vec2, degrees: f32) -> glam::Vec2 {
    glam::Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Convert a `#rrggbb` colour to RGBA floats with the given alpha
pub const fn hex_rgba(hex: u32, alpha: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}
