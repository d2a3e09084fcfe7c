//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Fixed colors (`#rrggbb`) for the demon glyph and the backdrop
pub mod colors {
    pub const DEMON_BODY_INNER: u32 = 0xff4757;
    pub const DEMON_BODY_MID: u32 = 0xc44569;
    pub const DEMON_BODY_OUTER: u32 = 0x6c5ce7;
    pub const DEMON_EYE: u32 = 0xfde047;
    pub const DEMON_EYE_GLOW: u32 = 0xfeca57;
    pub const DEMON_MOUTH: u32 = 0x2f3542;
    pub const DEMON_HORN: u32 = 0xdc2626;

    pub const BACKDROP_TOP_LEFT: u32 = 0x1e3a8a;
    pub const BACKDROP_MIDDLE: u32 = 0x581c87;
    pub const BACKDROP_BOTTOM_RIGHT: u32 = 0x831843;
    pub const ORB_BLUE: u32 = 0x3b82f6;
    pub const ORB_PURPLE: u32 = 0xa855f7;
    pub const ORB_PINK: u32 = 0xec4899;
    pub const ORB_CYAN: u32 = 0x06b6d4;
    pub const GRID_LINE: u32 = 0xffffff;
    pub const WASH_BLUE: u32 = 0x3b82f6;
    pub const WASH_PURPLE: u32 = 0xa855f7;
    pub const WASH_PINK: u32 = 0xec4899;
    pub const WASH_CYAN: u32 = 0x06b6d4;

    /// Clear color behind everything
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
