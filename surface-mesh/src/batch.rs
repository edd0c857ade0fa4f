//! Parallel generation of independent surfaces

use rayon::prelude::*;

use crate::descriptor::SurfaceDescriptor;
use crate::generator::{SurfaceMeshGenerator, generate_mesh};
use crate::types::Mesh;

/// Generate one mesh per descriptor in parallel, preserving order
pub fn generate_all(descriptors: &[SurfaceDescriptor]) -> Vec<Mesh> {
    descriptors
        .par_iter()
        .map(generate_mesh)
        .collect()
}

/// Build one generator per descriptor in parallel, preserving order
pub fn build_generators(descriptors: &[SurfaceDescriptor]) -> Vec<SurfaceMeshGenerator> {
    descriptors
        .par_iter()
        .map(|&descriptor| SurfaceMeshGenerator::new(descriptor))
        .collect()
}
