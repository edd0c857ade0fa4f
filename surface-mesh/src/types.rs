//! Mesh types
//!
//! Shared types for surface tessellation: the interleaved vertex record,
//! the generated mesh, and the builder trait the generators write through.

use bytemuck::{Pod, Zeroable, cast_slice};
use glam::Vec3;

use crate::color::Color;

/// Trait for mesh construction - enables generic geometry generation
///
/// Tessellation writes every vertex and triangle through this trait, so the
/// same sampling and topology code can feed [`Mesh`] or any other sink.
pub trait MeshBuilder: Default {
    /// Add a vertex, returning its index
    fn add_vertex(&mut self, vertex: Vertex) -> u32;

    /// Add a triangle using three vertex indices
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);

    /// Reserve room for `vertices` more vertices and `indices` more indices
    fn reserve(&mut self, _vertices: usize, _indices: usize) {}
}

/// Interleaved vertex record: position, normal, color, texture coordinate
///
/// Eleven `f32` fields with no padding. The field order matches the
/// attribute offsets in [`crate::layout`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    /// Assemble a vertex record field by field
    pub fn new(position: Vec3, normal: Vec3, color: Color, uv: (f32, f32)) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            normal: [normal.x, normal.y, normal.z],
            color: [color.r, color.g, color.b],
            uv: [uv.0, uv.1],
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Generated mesh data
///
/// Vertices are stored row-major over the parameter grid; indices are
/// grouped in triples, one triple per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Flat vertex buffer: repeating 11-float records (position, normal, color, uv)
    pub fn vertex_data(&self) -> &[f32] {
        cast_slice(&self.vertices)
    }

    /// Vertex buffer as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for upload (u32 elements)
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}

impl MeshBuilder for Mesh {
    fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    fn reserve(&mut self, vertices: usize, indices: usize) {
        self.vertices.reserve(vertices);
        self.indices.reserve(indices);
    }
}
