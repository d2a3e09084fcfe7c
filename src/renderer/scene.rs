//! Scene building: field state to triangles
//!
//! Pure functions of the state. Drawing never feeds back into the simulation,
//! so frames can be built at any rate.

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes::{self, with_alpha};
use super::vertex::{Vertex, colors};
use crate::consts::{BALL_OPACITY, DEMON_BODY_OPACITY};
use crate::hex_rgba;
use crate::settings::Settings;
use crate::sim::{Ball, Demon, FieldState};

/// Mouth stroke width in pixels (does not scale)
const MOUTH_STROKE: f32 = 3.0;
/// Horn tilt away from the centerline, degrees
const HORN_TILT: f32 = 20.0;

/// Drawing options taken from settings
#[derive(Debug, Clone, Copy)]
pub struct SceneStyle {
    pub glow: bool,
    pub segments: u32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SceneStyle {
    fn from(settings: &Settings) -> Self {
        Self {
            glow: settings.glow,
            segments: settings.quality.circle_segments(),
        }
    }
}

impl SceneStyle {
    /// Fewer segments for small features
    fn detail_segments(&self) -> u32 {
        (self.segments / 2).max(6)
    }
}

/// A ball: disc of diameter `size` with a same-colored halo `size` wide
pub fn ball(ball: &Ball, style: SceneStyle) -> Vec<Vertex> {
    let radius = ball.size / 2.0;
    let color = ball.color.rgba(BALL_OPACITY);

    let mut vertices = Vec::new();
    if style.glow {
        vertices.extend(shapes::glow(ball.pos, radius, ball.size, color, style.segments));
    }
    vertices.extend(shapes::circle(ball.pos, radius, color, style.segments));
    vertices
}

/// Geometry of a demon glyph inside its `size x size` box, before rotation.
/// Coordinates are relative to the box's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct DemonGlyph {
    pub size: f32,
    pub body_center: Vec2,
    pub body_radius: f32,
    pub body_glow: f32,
    pub eye_centers: [Vec2; 2],
    pub eye_radius: f32,
    pub eye_glow: f32,
    pub mouth_center: Vec2,
    pub mouth_radius: f32,
    /// Apex, base-left, base-right for each horn, already tilted
    pub horns: [[Vec2; 3]; 2],
}

impl DemonGlyph {
    pub fn new(size: f32) -> Self {
        let s = size;
        let eye_d = 0.15 * s;
        let eye_top = 0.35 * s;
        let eye_inset = 0.3 * s;

        let horn_w = 0.15 * s;
        let horn_h = 0.2 * s;
        let horn_top = 0.1 * s;
        let horn_inset = 0.25 * s;

        Self {
            size,
            body_center: Vec2::splat(s / 2.0),
            body_radius: s / 2.0,
            body_glow: 0.5 * s,
            eye_centers: [
                Vec2::new(eye_inset + eye_d / 2.0, eye_top + eye_d / 2.0),
                Vec2::new(s - eye_inset - eye_d / 2.0, eye_top + eye_d / 2.0),
            ],
            eye_radius: eye_d / 2.0,
            eye_glow: 0.1 * s,
            // Lower half of a circle hanging from the mouth box's top edge
            mouth_center: Vec2::new(s / 2.0, 0.55 * s),
            mouth_radius: 0.2 * s,
            horns: [
                horn(Vec2::new(horn_inset, horn_top), horn_w, horn_h, -HORN_TILT),
                horn(Vec2::new(s - horn_inset - horn_w, horn_top), horn_w, horn_h, HORN_TILT),
            ],
        }
    }
}

/// Upward wedge in a `w x h` box at `top_left`, tilted about the box center
fn horn(top_left: Vec2, w: f32, h: f32, tilt: f32) -> [Vec2; 3] {
    let pivot = top_left + Vec2::new(w, h) / 2.0;
    [
        top_left + Vec2::new(w / 2.0, 0.0),
        top_left + Vec2::new(0.0, h),
        top_left + Vec2::new(w, h),
    ]
    .map(|p| crate::rotate_degrees(p - pivot, tilt) + pivot)
}

/// A demon glyph centered on its position and rotated by its heading
pub fn demon(demon: &Demon, style: SceneStyle) -> Vec<Vertex> {
    let glyph = DemonGlyph::new(demon.size);
    let detail = style.detail_segments();

    let body_inner = hex_rgba(colors::DEMON_BODY_INNER, DEMON_BODY_OPACITY);
    let body_mid = hex_rgba(colors::DEMON_BODY_MID, DEMON_BODY_OPACITY);
    let body_outer = hex_rgba(colors::DEMON_BODY_OUTER, DEMON_BODY_OPACITY);
    let eye = hex_rgba(colors::DEMON_EYE, 1.0);
    let eye_glow = hex_rgba(colors::DEMON_EYE_GLOW, 1.0);
    let mouth = hex_rgba(colors::DEMON_MOUTH, 1.0);
    let horn = hex_rgba(colors::DEMON_HORN, 1.0);

    let mut vertices = Vec::new();

    // Body
    if style.glow {
        vertices.extend(shapes::glow(
            glyph.body_center,
            glyph.body_radius,
            glyph.body_glow,
            with_alpha(body_inner, 1.0),
            style.segments,
        ));
    }
    vertices.extend(shapes::radial_gradient(
        glyph.body_center,
        glyph.body_radius,
        &[(0.0, body_inner), (0.5, body_mid), (1.0, body_outer)],
        style.segments,
    ));

    // Eyes
    for center in glyph.eye_centers {
        if style.glow {
            vertices.extend(shapes::glow(center, glyph.eye_radius, glyph.eye_glow, eye_glow, detail));
        }
        vertices.extend(shapes::circle(center, glyph.eye_radius, eye, detail));
    }

    // Mouth
    vertices.extend(shapes::arc_band(
        glyph.mouth_center,
        glyph.mouth_radius,
        MOUTH_STROKE.min(glyph.mouth_radius),
        0.0,
        PI,
        mouth,
        detail,
    ));

    // Horns
    for [apex, left, right] in glyph.horns {
        vertices.extend(shapes::triangle(apex, left, right, horn));
    }

    shapes::transform(
        &mut vertices,
        glyph.body_center,
        demon.rotation,
        demon.pos - glyph.body_center,
    );
    vertices
}

/// Every ball, then every demon, in id order
pub fn field(state: &FieldState, style: SceneStyle) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for b in &state.balls {
        vertices.extend(ball(b, style));
    }
    for d in &state.demons {
        vertices.extend(demon(d, style));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BallColor;

    fn plain() -> SceneStyle {
        SceneStyle {
            glow: false,
            segments: 16,
        }
    }

    fn sample_demon(rotation: f32) -> Demon {
        Demon {
            id: 0,
            pos: Vec2::new(300.0, 200.0),
            vel: Vec2::ZERO,
            size: 60.0,
            rotation,
            rotation_speed: 1.0,
        }
    }

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| (lo.min(v.pos()), hi.max(v.pos())),
        )
    }

    #[test]
    fn test_ball_is_centered_with_diameter_size() {
        let b = Ball {
            id: 3,
            pos: Vec2::new(100.0, 50.0),
            vel: Vec2::ONE,
            size: 20.0,
            color: BallColor::Turquoise,
        };
        let verts = ball(&b, plain());
        let (lo, hi) = bounds(&verts);
        assert!((lo - Vec2::new(90.0, 40.0)).length() < 1e-3);
        assert!((hi - Vec2::new(110.0, 60.0)).length() < 1e-3);
        assert!(verts.iter().all(|v| v.color == BallColor::Turquoise.rgba(0.7)));
    }

    #[test]
    fn test_ball_glow_extends_by_size() {
        let b = Ball {
            id: 0,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 20.0,
            color: BallColor::Coral,
        };
        let verts = ball(&b, SceneStyle::default());
        let reach = verts.iter().map(|v| v.pos().length()).fold(0.0, f32::max);
        assert!((reach - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_glyph_scales_with_size() {
        let small = DemonGlyph::new(40.0);
        let large = DemonGlyph::new(80.0);

        assert_eq!(large.body_radius, small.body_radius * 2.0);
        assert_eq!(large.eye_radius, small.eye_radius * 2.0);
        assert_eq!(large.mouth_center, small.mouth_center * 2.0);
        for (a, b) in small.eye_centers.iter().zip(&large.eye_centers) {
            assert!((*b - *a * 2.0).length() < 1e-4);
        }
        for (hs, hl) in small.horns.iter().zip(&large.horns) {
            for (a, b) in hs.iter().zip(hl) {
                assert!((*b - *a * 2.0).length() < 1e-4);
            }
        }
    }

    #[test]
    fn test_glyph_is_mirror_symmetric() {
        let g = DemonGlyph::new(60.0);
        let mirror = |p: Vec2| Vec2::new(60.0 - p.x, p.y);

        assert!((mirror(g.eye_centers[0]) - g.eye_centers[1]).length() < 1e-4);
        assert!((g.eye_centers[0] - Vec2::new(22.5, 25.5)).length() < 1e-4);

        let [apex_l, left_l, right_l] = g.horns[0];
        let [apex_r, left_r, right_r] = g.horns[1];
        assert!((mirror(apex_l) - apex_r).length() < 1e-3);
        assert!((mirror(left_l) - right_r).length() < 1e-3);
        assert!((mirror(right_l) - left_r).length() < 1e-3);
    }

    #[test]
    fn test_demon_rotates_about_its_position() {
        let unrotated = demon(&sample_demon(0.0), plain());
        let turned = demon(&sample_demon(90.0), plain());
        assert_eq!(unrotated.len(), turned.len());

        let center = Vec2::new(300.0, 200.0);
        for (a, b) in unrotated.iter().zip(&turned) {
            let expected = crate::rotate_degrees(a.pos() - center, 90.0) + center;
            assert!((b.pos() - expected).length() < 1e-2);
            assert_eq!(a.color, b.color);
        }
    }

    #[test]
    fn test_demon_body_fits_its_box() {
        let verts = demon(&sample_demon(0.0), plain());
        let (lo, hi) = bounds(&verts);
        // Horns tilt slightly past the top of the body; nothing leaves the box sideways
        assert!(lo.x >= 270.0 - 1e-3 && hi.x <= 330.0 + 1e-3);
        assert!(hi.y <= 230.0 + 1e-3);
    }

    #[test]
    fn test_field_draws_everything() {
        let state = FieldState::new(11, None);
        let style = plain();
        let expected: usize = state.balls.iter().map(|b| ball(b, style).len()).sum::<usize>()
            + state.demons.iter().map(|d| demon(d, style).len()).sum::<usize>();
        let verts = field(&state, style);
        assert_eq!(verts.len(), expected);
        assert_eq!(verts.len() % 3, 0);
    }
}
