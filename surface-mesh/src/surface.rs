//! Parametric surfaces
//!
//! A [`ParametricSurface`] maps a point `(p, q)` of its parameter domain to a
//! position and outward unit normal, and assigns each grid sample a texture
//! coordinate. Sphere and torus are the built-in families; any surface of
//! revolution or bi-periodic surface can implement the trait.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::color::Color;
use crate::descriptor::{SphereDescriptor, TorusDescriptor};
use crate::sampler::{AxisSampler, GridSample, ParamGrid};
use crate::topology::Winding;
use crate::types::Vertex;

/// A closed-form surface that can be tessellated over a parameter grid
pub trait ParametricSurface {
    /// Family name used in log output
    fn name(&self) -> &'static str;

    /// Parameter domain and division counts
    fn grid(&self) -> ParamGrid;

    /// Orientation of the parameter axes relative to the outward normal
    fn winding(&self) -> Winding;

    /// Constant color written into every vertex
    fn color(&self) -> Color;

    /// Position and outward unit normal at `(p, q)`
    fn evaluate(&self, p: f32, q: f32) -> (Vec3, Vec3);

    /// Texture coordinate of grid sample `(i, j)`
    fn uv(&self, i: u32, j: u32) -> (f32, f32);

    /// Zero-measure surfaces tessellate to an empty mesh
    fn is_degenerate(&self) -> bool {
        false
    }

    /// Full vertex record for one grid sample
    fn vertex(&self, sample: GridSample) -> Vertex {
        let (position, normal) = self.evaluate(sample.p, sample.q);
        Vertex::new(position, normal, self.color(), self.uv(sample.i, sample.j))
    }
}

/// UV sphere centered at the origin with its poles on the Z axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    descriptor: SphereDescriptor,
}

impl Sphere {
    pub fn new(descriptor: SphereDescriptor) -> Self {
        Self {
            descriptor: descriptor.sanitized(),
        }
    }

    pub fn descriptor(&self) -> &SphereDescriptor {
        &self.descriptor
    }
}

impl ParametricSurface for Sphere {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn grid(&self) -> ParamGrid {
        ParamGrid::new(
            AxisSampler::new(-FRAC_PI_2, FRAC_PI_2, self.descriptor.slices),
            AxisSampler::new(-PI, PI, self.descriptor.stacks),
        )
    }

    // Latitude then longitude: ∂P/∂phi × ∂P/∂theta points toward the center
    fn winding(&self) -> Winding {
        Winding::Reversed
    }

    fn color(&self) -> Color {
        self.descriptor.color
    }

    fn evaluate(&self, phi: f32, theta: f32) -> (Vec3, Vec3) {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();

        // Outward unit normal equals the unit position vector
        let normal = Vec3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi);
        (normal * self.descriptor.radius, normal)
    }

    fn uv(&self, i: u32, j: u32) -> (f32, f32) {
        (
            j as f32 / self.descriptor.stacks as f32,
            i as f32 / self.descriptor.slices as f32,
        )
    }
}

/// Torus around the Z axis
///
/// `a` is the center-line radius and `b` the tube radius, both derived from
/// the ordered inner/outer radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torus {
    descriptor: TorusDescriptor,
    ring_radius: f32,
    tube_radius: f32,
}

impl Torus {
    pub fn new(descriptor: TorusDescriptor) -> Self {
        let descriptor = descriptor.sanitized();
        Self {
            descriptor,
            ring_radius: descriptor.ring_radius(),
            tube_radius: descriptor.tube_radius(),
        }
    }

    pub fn descriptor(&self) -> &TorusDescriptor {
        &self.descriptor
    }

    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }

    pub fn tube_radius(&self) -> f32 {
        self.tube_radius
    }
}

/// Sign used to keep normals outward; zero counts as positive
fn outward_sign(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

impl ParametricSurface for Torus {
    fn name(&self) -> &'static str {
        "torus"
    }

    fn grid(&self) -> ParamGrid {
        ParamGrid::new(
            AxisSampler::new(-PI, PI, self.descriptor.nsides),
            AxisSampler::new(-PI, PI, self.descriptor.rings),
        )
    }

    fn winding(&self) -> Winding {
        Winding::Forward
    }

    fn color(&self) -> Color {
        self.descriptor.color
    }

    fn evaluate(&self, u: f32, v: f32) -> (Vec3, Vec3) {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_v, cos_v) = v.sin_cos();
        let a = self.ring_radius;
        let b = self.tube_radius;

        // Distance from the Z axis; the unscaled gradient is proportional to it
        let comm = a + b * cos_v;
        let position = Vec3::new(comm * cos_u, comm * sin_u, b * sin_v);

        let orientation = outward_sign(b) * outward_sign(comm);
        let normal = Vec3::new(cos_u * cos_v, sin_u * cos_v, sin_v) * orientation;

        (position, normal)
    }

    fn uv(&self, i: u32, j: u32) -> (f32, f32) {
        (
            i as f32 / self.descriptor.nsides as f32,
            j as f32 / self.descriptor.rings as f32,
        )
    }

    fn is_degenerate(&self) -> bool {
        self.tube_radius == 0.0
    }
}
