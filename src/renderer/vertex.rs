//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

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

/// Colors for game elements
pub mod colors {
    pub const BOARD: [f32; 4] = [0.90, 0.97, 0.95, 1.0];
    pub const GRID_LINE: [f32; 4] = [0.55, 0.65, 0.85, 0.2];
    pub const SNAKE_HEAD: [f32; 4] = [0.02, 0.47, 0.34, 1.0];
    pub const SNAKE_BODY_EVEN: [f32; 4] = [0.13, 0.77, 0.37, 1.0];
    pub const SNAKE_BODY_ODD: [f32; 4] = [0.29, 0.87, 0.50, 1.0];
    pub const FOOD: [f32; 4] = [0.94, 0.27, 0.27, 1.0];
    /// Dim veil over the board while paused or over
    pub const VEIL: [f32; 4] = [0.0, 0.0, 0.0, 0.45];
    pub const BACKGROUND: [f32; 4] = [0.93, 0.95, 1.0, 1.0];
}
