//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen pixels (y down).

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;
use crate::rotate_degrees;

/// Point on a circle; angle measured from +x towards +y (clockwise on screen)
#[inline]
fn on_circle(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Same color with alpha replaced
#[inline]
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(on_circle(center, radius, theta1), color));
        vertices.push(Vertex::at(on_circle(center, radius, theta2), color));
    }

    vertices
}

/// Generate vertices for a ring whose color blends from `inner_color` at the
/// inner edge to `outer_color` at the outer edge
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    inner_color: [f32; 4],
    outer_color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = on_circle(center, inner_radius, theta1);
        let outer1 = on_circle(center, outer_radius, theta1);
        let inner2 = on_circle(center, inner_radius, theta2);
        let outer2 = on_circle(center, outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::at(inner1, inner_color));
        vertices.push(Vertex::at(outer1, outer_color));
        vertices.push(Vertex::at(inner2, inner_color));

        vertices.push(Vertex::at(inner2, inner_color));
        vertices.push(Vertex::at(outer1, outer_color));
        vertices.push(Vertex::at(outer2, outer_color));
    }

    vertices
}

/// Soft halo that fades to transparent `spread` pixels outside `radius`
pub fn glow(center: Vec2, radius: f32, spread: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    if spread <= 0.0 {
        return Vec::new();
    }
    ring(
        center,
        radius,
        radius + spread,
        color,
        with_alpha(color, 0.0),
        segments,
    )
}

/// Disc filled with a radial gradient.
///
/// `stops` are `(t, color)` pairs with `t` from 0 (center) to 1 (edge), in
/// ascending order. A gradient that starts after 0 is flat up to its first
/// stop.
pub fn radial_gradient(
    center: Vec2,
    radius: f32,
    stops: &[(f32, [f32; 4])],
    segments: u32,
) -> Vec<Vertex> {
    let Some(&(first_t, first_color)) = stops.first() else {
        return Vec::new();
    };

    let mut vertices = Vec::new();
    let core = radius * first_t.clamp(0.0, 1.0);
    if core > 0.0 {
        vertices.extend(circle(center, core, first_color, segments));
    }

    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        let r0 = radius * t0.clamp(0.0, 1.0);
        let r1 = radius * t1.clamp(0.0, 1.0);
        if r1 <= r0 {
            continue;
        }
        if r0 == 0.0 {
            // Innermost band is a fan, not a ring
            vertices.extend(gradient_fan(center, r1, c0, c1, segments));
        } else {
            vertices.extend(ring(center, r0, r1, c0, c1, segments));
        }
    }

    vertices
}

fn gradient_fan(
    center: Vec2,
    radius: f32,
    center_color: [f32; 4],
    edge_color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        vertices.push(Vertex::at(center, center_color));
        vertices.push(Vertex::at(on_circle(center, radius, theta1), edge_color));
        vertices.push(Vertex::at(on_circle(center, radius, theta2), edge_color));
    }
    vertices
}

/// Thick arc band between `theta_start` and `theta_end` (radians)
pub fn arc_band(
    center: Vec2,
    radius: f32,
    thickness: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let span = theta_end - theta_start;
    let num_segments = (((span.abs() / PI) * segments as f32) as u32).max(4);
    let inner_r = (radius - thickness).max(0.0);
    let outer_r = radius;

    let mut vertices = Vec::with_capacity((num_segments * 6) as usize);

    for i in 0..num_segments {
        let t1 = i as f32 / num_segments as f32;
        let t2 = (i + 1) as f32 / num_segments as f32;

        let theta1 = theta_start + t1 * span;
        let theta2 = theta_start + t2 * span;

        let inner1 = on_circle(center, inner_r, theta1);
        let outer1 = on_circle(center, outer_r, theta1);
        let inner2 = on_circle(center, inner_r, theta2);
        let outer2 = on_circle(center, outer_r, theta2);

        vertices.push(Vertex::at(inner1, color));
        vertices.push(Vertex::at(outer1, color));
        vertices.push(Vertex::at(inner2, color));

        vertices.push(Vertex::at(inner2, color));
        vertices.push(Vertex::at(outer1, color));
        vertices.push(Vertex::at(outer2, color));
    }

    vertices
}

/// Disc lit from one side: `color` on the rim in direction `toward`, fading
/// linearly to transparent at the center and staying transparent beyond it
pub fn fading_disc(
    center: Vec2,
    radius: f32,
    toward: Vec2,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let toward = toward.normalize_or_zero();
    let clear = with_alpha(color, 0.0);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let p1 = on_circle(center, radius, theta1);
        let p2 = on_circle(center, radius, theta2);
        let lit = |p: Vec2| {
            let t = ((p - center).dot(toward) / radius).max(0.0);
            with_alpha(color, color[3] * t)
        };
        vertices.push(Vertex::at(center, clear));
        vertices.push(Vertex::at(p1, lit(p1)));
        vertices.push(Vertex::at(p2, lit(p2)));
    }
    vertices
}

/// Single flat triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![Vertex::at(a, color), Vertex::at(b, color), Vertex::at(c, color)]
}

/// Axis-aligned rectangle with one color per corner
/// (`[top_left, top_right, bottom_right, bottom_left]`).
///
/// Split along the top-right to bottom-left diagonal, so a top-left to
/// bottom-right gradient passes through the other two corners' color at the
/// center.
pub fn rect(min: Vec2, max: Vec2, corners: [[f32; 4]; 4]) -> Vec<Vertex> {
    let tl = Vertex::new(min.x, min.y, corners[0]);
    let tr = Vertex::new(max.x, min.y, corners[1]);
    let br = Vertex::new(max.x, max.y, corners[2]);
    let bl = Vertex::new(min.x, max.y, corners[3]);
    vec![tl, tr, bl, tr, br, bl]
}

/// Flat-colored rectangle
pub fn solid_rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    rect(min, max, [color; 4])
}

/// Rotate vertices about `pivot` by `degrees`, then translate by `offset`
pub fn transform(vertices: &mut [Vertex], pivot: Vec2, degrees: f32, offset: Vec2) {
    for v in vertices {
        let p = rotate_degrees(v.pos() - pivot, degrees) + pivot + offset;
        v.position = p.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    fn max_distance(vertices: &[Vertex], center: Vec2) -> f32 {
        vertices
            .iter()
            .map(|v| v.pos().distance(center))
            .fold(0.0, f32::max)
    }

    #[test]
    fn test_circle_radius() {
        let center = Vec2::new(10.0, 20.0);
        let verts = circle(center, 5.0, RED, 16);
        assert_eq!(verts.len(), 16 * 3);
        assert!((max_distance(&verts, center) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_glow_fades_out() {
        let verts = glow(Vec2::ZERO, 10.0, 10.0, RED, 8);
        assert_eq!(verts.len(), 8 * 6);
        for v in &verts {
            let d = v.pos().length();
            if (d - 20.0).abs() < 1e-3 {
                assert_eq!(v.color[3], 0.0);
            } else {
                assert!((d - 10.0).abs() < 1e-3);
                assert_eq!(v.color[3], 1.0);
            }
        }
        assert!(glow(Vec2::ZERO, 10.0, 0.0, RED, 8).is_empty());
    }

    #[test]
    fn test_radial_gradient_colors() {
        let verts = radial_gradient(Vec2::ZERO, 10.0, &[(0.0, RED), (1.0, BLUE)], 8);
        assert_eq!(verts.len(), 8 * 3);
        for v in &verts {
            if v.pos().length() < 1e-4 {
                assert_eq!(v.color, RED);
            } else {
                assert_eq!(v.color, BLUE);
            }
        }
        assert!(radial_gradient(Vec2::ZERO, 10.0, &[], 8).is_empty());
    }

    #[test]
    fn test_three_stop_gradient_has_fan_and_ring() {
        let verts = radial_gradient(
            Vec2::ZERO,
            10.0,
            &[(0.0, RED), (0.5, [0.5, 0.0, 0.5, 1.0]), (1.0, BLUE)],
            8,
        );
        assert_eq!(verts.len(), 8 * 3 + 8 * 6);
        assert!((max_distance(&verts, Vec2::ZERO) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_transform_rotates_clockwise_on_screen() {
        let mut verts = vec![Vertex::new(1.0, 0.0, RED)];
        transform(&mut verts, Vec2::ZERO, 90.0, Vec2::new(5.0, 5.0));
        // +x turns into +y (downwards), then shifts
        assert!((verts[0].position[0] - 5.0).abs() < 1e-5);
        assert!((verts[0].position[1] - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::ZERO, Vec2::new(2.0, 1.0), [RED, BLUE, RED, BLUE]);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[1].position, [2.0, 0.0]);
        assert_eq!(verts[1].color, BLUE);
    }

    #[test]
    fn test_rect_shares_anti_diagonal() {
        let verts = rect(Vec2::ZERO, Vec2::new(4.0, 2.0), [RED, BLUE, RED, BLUE]);
        // Both triangles hold top-right and bottom-left, never tl and br together
        for tri in verts.chunks(3) {
            let has = |p: [f32; 2]| tri.iter().any(|v| v.position == p);
            assert!(has([4.0, 0.0]) && has([0.0, 2.0]));
            assert!(!(has([0.0, 0.0]) && has([4.0, 2.0])));
        }
    }

    #[test]
    fn test_fading_disc_lit_side() {
        let verts = fading_disc(Vec2::ZERO, 10.0, Vec2::X, RED, 8);
        assert_eq!(verts.len(), 8 * 3);
        for v in &verts {
            let p = v.pos();
            if p.length() < 1e-4 || p.x <= 1e-4 {
                assert_eq!(v.color[3], 0.0);
            } else {
                assert!((v.color[3] - p.x / 10.0).abs() < 1e-5);
            }
        }
        // Rim point straight along +x is fully lit
        assert!(verts.iter().any(|v| (v.color[3] - 1.0).abs() < 1e-6));
    }
}
