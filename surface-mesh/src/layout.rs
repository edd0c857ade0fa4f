//! Vertex attribute layout
//!
//! The contract with the buffer-upload collaborator: each vertex is a
//! record of [`VERTEX_STRIDE`] floats with the attributes below. Offsets
//! and sizes are counted in floats; byte helpers multiply by four.
//!
//! With the `wgpu` feature, [`Vertex::buffer_layout`] describes the same
//! layout as a `wgpu::VertexBufferLayout`.

use std::mem::size_of;
use std::ops::Range;

#[cfg(feature = "wgpu")]
use crate::types::Vertex;

/// Floats per vertex record
pub const VERTEX_STRIDE: usize = 11;

/// Bytes per vertex record
pub const VERTEX_STRIDE_BYTES: usize = VERTEX_STRIDE * size_of::<f32>();

/// One attribute of the interleaved vertex record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute name for debugging
    pub name: &'static str,
    /// Offset in floats from the start of the record
    pub offset: usize,
    /// Component count
    pub size: usize,
    /// Shader input location
    pub location: u32,
}

impl VertexAttribute {
    pub const fn byte_offset(&self) -> usize {
        self.offset * size_of::<f32>()
    }

    /// Float range of this attribute within one record
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.size
    }
}

pub const POSITION: VertexAttribute = VertexAttribute {
    name: "position",
    offset: 0,
    size: 3,
    location: 0,
};

pub const NORMAL: VertexAttribute = VertexAttribute {
    name: "normal",
    offset: 3,
    size: 3,
    location: 1,
};

pub const COLOR: VertexAttribute = VertexAttribute {
    name: "color",
    offset: 6,
    size: 3,
    location: 2,
};

pub const TEX_COORD: VertexAttribute = VertexAttribute {
    name: "tex_coord",
    offset: 9,
    size: 2,
    location: 3,
};

/// All attributes in record order
pub const ATTRIBUTES: [VertexAttribute; 4] = [POSITION, NORMAL, COLOR, TEX_COORD];

#[cfg(feature = "wgpu")]
impl Vertex {
    const WGPU_ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
        3 => Float32x2
    ];

    /// Vertex buffer layout for render pipeline creation
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: VERTEX_STRIDE_BYTES as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::WGPU_ATTRIBUTES,
        }
    }
}
