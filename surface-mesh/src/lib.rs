//! Parametric surface tessellation
//!
//! Converts closed-form surfaces (sphere, torus) into triangle meshes with
//! per-vertex position, normal, color and texture coordinate, plus a
//! seam-free, outward-wound index buffer.
//!
//! Generation is a pure function of its descriptor: sample an
//! `(M+1)×(N+1)` parameter grid, evaluate a vertex at every sample, then
//! stitch the cells into triangles. Out-of-range parameters are corrected,
//! never rejected.
//!
//! ```
//! use surface_mesh::{SphereDescriptor, SurfaceMeshGenerator};
//!
//! let sphere = SurfaceMeshGenerator::new(SphereDescriptor::new(1.0, 3, 3));
//! assert_eq!(sphere.mesh().vertex_count(), 16);
//! assert_eq!(sphere.mesh().index_count(), 54);
//! ```

pub mod batch;
pub mod color;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod layout;
pub mod render_mode;
pub mod sampler;
pub mod surface;
pub mod topology;
pub mod types;

pub use batch::{build_generators, generate_all};
pub use color::Color;
pub use config::{SceneConfig, ShapeConfig};
pub use descriptor::{MIN_DIVISIONS, SphereDescriptor, SurfaceDescriptor, TorusDescriptor};
pub use error::ConfigError;
pub use generator::{SurfaceMeshGenerator, generate_mesh, tessellate};
pub use render_mode::RenderMode;
pub use surface::{ParametricSurface, Sphere, Torus};
pub use topology::Winding;
pub use types::{Mesh, MeshBuilder, Vertex};
