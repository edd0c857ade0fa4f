//! Surface mesh generation
//!
//! [`tessellate`] runs sampling, vertex evaluation and topology for any
//! [`ParametricSurface`]. [`SurfaceMeshGenerator`] owns one descriptor and
//! the mesh generated from it.

use tracing::{debug, warn};

use crate::descriptor::SurfaceDescriptor;
use crate::render_mode::RenderMode;
use crate::surface::{ParametricSurface, Sphere, Torus};
use crate::topology::{build_grid_indices, grid_index_count};
use crate::types::{Mesh, MeshBuilder};

/// Tessellate a surface into any mesh builder
///
/// Degenerate surfaces produce an empty mesh.
pub fn tessellate<S: ParametricSurface, M: MeshBuilder>(surface: &S) -> M {
    let mut mesh = M::default();

    if surface.is_degenerate() {
        warn!(
            "tessellate: {} has zero measure, generating empty mesh",
            surface.name()
        );
        return mesh;
    }

    let grid = surface.grid();
    mesh.reserve(
        grid.len(),
        grid_index_count(grid.rows.divisions, grid.cols.divisions),
    );

    for sample in grid.samples() {
        mesh.add_vertex(surface.vertex(sample));
    }
    build_grid_indices(&mut mesh, &grid, surface.winding());

    debug!(
        "tessellate: {} {}x{} grid, {} vertices, {} indices",
        surface.name(),
        grid.row_count(),
        grid.col_count(),
        grid.len(),
        grid_index_count(grid.rows.divisions, grid.cols.divisions)
    );

    mesh
}

/// Generate the mesh for a descriptor
pub fn generate_mesh(descriptor: &SurfaceDescriptor) -> Mesh {
    match *descriptor {
        SurfaceDescriptor::Sphere(sphere) => tessellate(&Sphere::new(sphere)),
        SurfaceDescriptor::Torus(torus) => tessellate(&Torus::new(torus)),
    }
}

/// One surface together with its generated mesh
///
/// Construction generates immediately. [`generate`](Self::generate)
/// replaces both the stored descriptor and the mesh.
#[derive(Clone, Debug)]
pub struct SurfaceMeshGenerator {
    descriptor: SurfaceDescriptor,
    mesh: Mesh,
    render_mode: RenderMode,
}

impl SurfaceMeshGenerator {
    pub fn new(descriptor: impl Into<SurfaceDescriptor>) -> Self {
        Self::with_render_mode(descriptor, RenderMode::default())
    }

    pub fn with_render_mode(descriptor: impl Into<SurfaceDescriptor>, render_mode: RenderMode) -> Self {
        let descriptor = descriptor.into().sanitized();
        Self {
            mesh: generate_mesh(&descriptor),
            descriptor,
            render_mode,
        }
    }

    /// Regenerate from new parameters, replacing the stored mesh
    pub fn generate(&mut self, descriptor: impl Into<SurfaceDescriptor>) -> &Mesh {
        let descriptor = descriptor.into().sanitized();
        self.mesh = generate_mesh(&descriptor);
        self.descriptor = descriptor;
        &self.mesh
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Corrected parameters the current mesh was generated from
    pub fn descriptor(&self) -> &SurfaceDescriptor {
        &self.descriptor
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    pub fn turn_on(&mut self) {
        self.render_mode = self.render_mode.turned_on();
    }

    pub fn turn_off(&mut self) {
        self.render_mode = self.render_mode.turned_off();
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{SphereDescriptor, TorusDescriptor};
    use crate::types::Vertex;

    /// Builder that only counts what it receives
    #[derive(Default)]
    struct CountingBuilder {
        vertices: u32,
        triangles: u32,
    }

    impl MeshBuilder for CountingBuilder {
        fn add_vertex(&mut self, _vertex: Vertex) -> u32 {
            self.vertices += 1;
            self.vertices - 1
        }

        fn add_triangle(&mut self, _i0: u32, _i1: u32, _i2: u32) {
            self.triangles += 1;
        }
    }

    #[test]
    fn test_tessellate_into_custom_builder() {
        let counts: CountingBuilder = tessellate(&Sphere::new(SphereDescriptor::new(1.0, 4, 6)));
        assert_eq!(counts.vertices, 5 * 7);
        assert_eq!(counts.triangles, 2 * 4 * 6);
    }

    #[test]
    fn test_generator_stores_sanitized_descriptor() {
        let generator = SurfaceMeshGenerator::new(TorusDescriptor::new(0.5, 0.25, 2, 2));
        assert_eq!(
            *generator.descriptor(),
            SurfaceDescriptor::Torus(TorusDescriptor::new(0.25, 0.5, 3, 3))
        );
        assert_eq!(generator.mesh().vertex_count(), 16);
    }

    #[test]
    fn test_regenerate_replaces_mesh() {
        let mut generator = SurfaceMeshGenerator::new(SphereDescriptor::new(1.0, 3, 3));
        assert_eq!(generator.mesh().vertex_count(), 16);

        let mesh = generator.generate(TorusDescriptor::new(0.25, 0.5, 4, 4));
        assert_eq!(mesh.vertex_count(), 25);
        assert_eq!(generator.descriptor().family(), "torus");

        generator.generate(TorusDescriptor::new(0.3, 0.3, 4, 4));
        assert!(generator.mesh().is_empty());
    }

    #[test]
    fn test_render_mode_transitions() {
        let mut generator =
            SurfaceMeshGenerator::with_render_mode(SphereDescriptor::default(), RenderMode::Textured);
        assert_eq!(generator.render_mode(), RenderMode::Textured);

        generator.turn_off();
        assert_eq!(generator.render_mode(), RenderMode::Lit);
        generator.turn_on();
        assert_eq!(generator.render_mode(), RenderMode::Textured);

        // Regeneration leaves the render mode alone
        generator.generate(SphereDescriptor::new(1.0, 4, 4));
        assert_eq!(generator.render_mode(), RenderMode::Textured);
    }

    #[test]
    fn test_instances_independent() {
        let mut first = SurfaceMeshGenerator::new(SphereDescriptor::new(1.0, 3, 3));
        let second = SurfaceMeshGenerator::new(SphereDescriptor::new(1.0, 3, 3));
        first.generate(SphereDescriptor::new(1.0, 8, 8));
        assert_eq!(second.mesh().vertex_count(), 16);
        assert_ne!(first.mesh(), second.mesh());
    }
}
