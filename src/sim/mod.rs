//! Deterministic simulation module
//!
//! All motion lives here. This module must be pure and deterministic:
//! - Fixed cadence ticks, no delta time
//! - Injected or seeded RNG only, and only at spawn
//! - Viewport passed in, never read from the platform
//! - No rendering or platform dependencies

pub mod collision;
pub mod driver;
pub mod state;
pub mod tick;

pub use collision::{WallHit, reflect_axis, step_in_viewport};
pub use driver::{DriverPhase, FieldDriver};
pub use state::{Ball, BallColor, Demon, FieldState};
pub use tick::{next_state, tick};
