//! Decorative layers behind the field
//!
//! A diagonal gradient, four blurred orbs bobbing on slow timers, a pulsing
//! color wash, and a faint grid drifting one cell every 20 seconds. Purely a
//! function of elapsed time; none of it touches the simulation.

use glam::Vec2;
use std::f32::consts::TAU;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::hex_rgba;
use crate::viewport::Viewport;

/// Orb fill alpha at the center
const ORB_ALPHA: f32 = 0.2;
/// Peak vertical travel of a bobbing orb, pixels
const ORB_BOB: f32 = 20.0;
/// Grid cell edge, pixels
pub const GRID_CELL: f32 = 50.0;
/// Seconds for the grid to drift one cell
pub const GRID_PERIOD: f32 = 20.0;
/// Line alpha (10% lines on a 10% opacity layer)
const GRID_ALPHA: f32 = 0.01;
/// Wash layer opacity
const WASH_OPACITY: f32 = 0.3;
/// Full-screen wash corner alpha before the layer opacity
const WASH_SHEET_ALPHA: f32 = 0.2;
/// Side-lit blob alpha before the layer opacity
const WASH_BLOB_ALPHA: f32 = 0.3;
/// Blob diameter, pixels
const WASH_BLOB_DIAMETER: f32 = 384.0;
/// Seconds per pulse
pub const PULSE_PERIOD: f32 = 2.0;
/// Opacity at the bottom of a pulse
pub const PULSE_LOW: f32 = 0.5;

/// Which layers to draw
#[derive(Debug, Clone, Copy)]
pub struct BackdropStyle {
    pub orbs: bool,
    pub grid: bool,
    pub overlay: bool,
    pub segments: u32,
}

/// Where an orb sits, measured from the viewport edges
#[derive(Debug, Clone, Copy)]
enum Anchor {
    TopLeft(f32, f32),
    TopRight(f32, f32),
    /// Left offset as a fraction of the width
    BottomFraction(f32, f32),
    BottomRight(f32, f32),
}

#[derive(Debug, Clone, Copy)]
struct Orb {
    anchor: Anchor,
    diameter: f32,
    color: u32,
    period: f32,
    delay: f32,
}

const ORBS: [Orb; 4] = [
    Orb {
        anchor: Anchor::TopLeft(80.0, 80.0),
        diameter: 288.0,
        color: colors::ORB_BLUE,
        period: 6.0,
        delay: 0.0,
    },
    Orb {
        anchor: Anchor::TopRight(160.0, 128.0),
        diameter: 384.0,
        color: colors::ORB_PURPLE,
        period: 8.0,
        delay: 2.0,
    },
    Orb {
        anchor: Anchor::BottomFraction(128.0, 1.0 / 3.0),
        diameter: 320.0,
        color: colors::ORB_PINK,
        period: 10.0,
        delay: 0.0,
    },
    Orb {
        anchor: Anchor::BottomRight(80.0, 80.0),
        diameter: 256.0,
        color: colors::ORB_CYAN,
        period: 6.0,
        delay: 0.0,
    },
];

impl Orb {
    /// Resting center in `viewport`
    fn center(&self, viewport: Viewport) -> Vec2 {
        let r = self.diameter / 2.0;
        match self.anchor {
            Anchor::TopLeft(top, left) => Vec2::new(left + r, top + r),
            Anchor::TopRight(top, right) => Vec2::new(viewport.width - right - r, top + r),
            Anchor::BottomFraction(bottom, left) => {
                Vec2::new(viewport.width * left + r, viewport.height - bottom - r)
            }
            Anchor::BottomRight(bottom, right) => {
                Vec2::new(viewport.width - right - r, viewport.height - bottom - r)
            }
        }
    }

    /// Vertical bob at `time` seconds; zero until the delay has passed
    fn bob(&self, time: f32) -> f32 {
        let t = time - self.delay;
        if t <= 0.0 {
            return 0.0;
        }
        -ORB_BOB * (TAU * t / self.period).sin()
    }
}

/// Pulse opacity at `time` seconds: 1 at rest, dipping to `PULSE_LOW`
/// halfway through each period. Held at 1 until `delay` has passed.
pub fn pulse(time: f32, delay: f32) -> f32 {
    let t = time - delay;
    if t <= 0.0 {
        return 1.0;
    }
    let mid = (1.0 + PULSE_LOW) / 2.0;
    mid + (1.0 - mid) * (TAU * t / PULSE_PERIOD).cos()
}

/// Grid drift at `time` seconds, in `[0, GRID_CELL)` on both axes
pub fn grid_offset(time: f32) -> f32 {
    (time.rem_euclid(GRID_PERIOD) / GRID_PERIOD) * GRID_CELL
}

/// All backdrop layers for one frame
pub fn backdrop(viewport: Viewport, time: f32, style: BackdropStyle) -> Vec<Vertex> {
    let mut vertices = gradient(viewport);
    if style.orbs {
        for orb in &ORBS {
            let center = orb.center(viewport) + Vec2::new(0.0, orb.bob(time));
            let color = hex_rgba(orb.color, ORB_ALPHA);
            vertices.extend(shapes::radial_gradient(
                center,
                orb.diameter / 2.0,
                &[
                    (0.0, color),
                    (0.5, shapes::with_alpha(color, ORB_ALPHA * 0.6)),
                    (1.0, shapes::with_alpha(color, 0.0)),
                ],
                style.segments,
            ));
        }
    }
    if style.overlay {
        vertices.extend(wash(viewport, time, style.segments));
    }
    if style.grid {
        vertices.extend(grid(viewport, grid_offset(time)));
    }
    vertices
}

fn gradient(viewport: Viewport) -> Vec<Vertex> {
    let middle = hex_rgba(colors::BACKDROP_MIDDLE, 1.0);
    shapes::rect(
        Vec2::ZERO,
        Vec2::new(viewport.width, viewport.height),
        [
            hex_rgba(colors::BACKDROP_TOP_LEFT, 1.0),
            middle,
            hex_rgba(colors::BACKDROP_BOTTOM_RIGHT, 1.0),
            middle,
        ],
    )
}

/// Pulsing wash: a blue to purple sheet that is clear across the middle,
/// plus a pink blob lit from the right and a cyan blob lit from the left,
/// each pulse a second behind the last
fn wash(viewport: Viewport, time: f32, segments: u32) -> Vec<Vertex> {
    let sheet_alpha = WASH_OPACITY * WASH_SHEET_ALPHA * pulse(time, 0.0);
    let clear = hex_rgba(colors::WASH_BLUE, 0.0);
    let mut vertices = shapes::rect(
        Vec2::ZERO,
        Vec2::new(viewport.width, viewport.height),
        [
            hex_rgba(colors::WASH_BLUE, sheet_alpha),
            clear,
            hex_rgba(colors::WASH_PURPLE, sheet_alpha),
            clear,
        ],
    );

    let r = WASH_BLOB_DIAMETER / 2.0;
    let pink = Vec2::new(viewport.width - r, viewport.height / 4.0 + r);
    let cyan = Vec2::new(viewport.width / 4.0 + r, viewport.height - r);
    let blob_alpha = WASH_OPACITY * WASH_BLOB_ALPHA;
    vertices.extend(shapes::fading_disc(
        pink,
        r,
        Vec2::X,
        hex_rgba(colors::WASH_PINK, blob_alpha * pulse(time, 1.0)),
        segments,
    ));
    vertices.extend(shapes::fading_disc(
        cyan,
        r,
        Vec2::NEG_X,
        hex_rgba(colors::WASH_CYAN, blob_alpha * pulse(time, 2.0)),
        segments,
    ));
    vertices
}

fn grid(viewport: Viewport, offset: f32) -> Vec<Vertex> {
    let color = hex_rgba(colors::GRID_LINE, GRID_ALPHA);
    let mut vertices = Vec::new();

    let mut x = offset;
    while x < viewport.width {
        vertices.extend(shapes::solid_rect(
            Vec2::new(x, 0.0),
            Vec2::new(x + 1.0, viewport.height),
            color,
        ));
        x += GRID_CELL;
    }

    let mut y = offset;
    while y < viewport.height {
        vertices.extend(shapes::solid_rect(
            Vec2::new(0.0, y),
            Vec2::new(viewport.width, y + 1.0),
            color,
        ));
        y += GRID_CELL;
    }

    vertices
}
