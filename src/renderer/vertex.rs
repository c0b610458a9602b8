//! Vertex type for lit, textured meshes

use bytemuck::{Pod, Zeroable};

/// Position, normal and texture coordinate, laid out for a GPU buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Byte stride between consecutive vertices
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Byte offsets of (position, normal, uv) within a vertex
    pub const OFFSETS: [usize; 3] = [0, 12, 24];
}
