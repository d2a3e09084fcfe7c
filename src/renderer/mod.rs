//! WebGPU rendering module
//!
//! Scenes are built on the CPU as colored triangles in screen pixels and
//! drawn in a single pass.

pub mod backdrop;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use backdrop::BackdropStyle;
pub use pipeline::{RenderInitError, RenderState};
pub use scene::{DemonGlyph, SceneStyle};
pub use vertex::Vertex;

use crate::settings::Settings;
use crate::sim::FieldState;
use crate::viewport::Viewport;

/// Everything for one frame: backdrop first, then the field on top.
/// `state` is `None` before mount and after unmount.
pub fn frame(
    state: Option<&FieldState>,
    viewport: Viewport,
    time: f32,
    settings: &Settings,
) -> Vec<Vertex> {
    let style = BackdropStyle {
        orbs: settings.backdrop_orbs,
        grid: settings.backdrop_grid,
        overlay: settings.backdrop_overlay,
        segments: settings.quality.circle_segments(),
    };
    let mut vertices = backdrop::backdrop(viewport, time, style);
    if let Some(state) = state {
        vertices.extend(scene::field(state, SceneStyle::from(settings)));
    }
    vertices
}
