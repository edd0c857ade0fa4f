//! Surface descriptors and parameter correction
//!
//! Descriptors hold the shape parameters a mesh is generated from. Invalid
//! but interpretable values are corrected by `sanitized()` rather than
//! rejected; every correction is reported with `warn!`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Color;

/// Smallest division count accepted along any periodic axis
pub const MIN_DIVISIONS: u32 = 3;

/// Raise a division count below [`MIN_DIVISIONS`] to the minimum
pub(crate) fn clamp_divisions(context: &str, axis: &str, value: u32) -> u32 {
    if value < MIN_DIVISIONS {
        warn!("{context}: {axis} must be >= {MIN_DIVISIONS}, clamping {value} to {MIN_DIVISIONS}");
        MIN_DIVISIONS
    } else {
        value
    }
}

/// Sphere parameters
///
/// `slices` divides latitude (`phi` in `[-π/2, π/2]`); `stacks` divides
/// longitude (`theta` in `[-π, π]`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereDescriptor {
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
    pub color: Color,
}

impl SphereDescriptor {
    pub fn new(radius: f32, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            slices,
            stacks,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Apply the resolution clamp
    ///
    /// A non-positive radius is kept as given and only reported: it yields
    /// an inverted or collapsed sphere, which is the caller's choice.
    pub fn sanitized(self) -> Self {
        if self.radius <= 0.0 {
            warn!("sphere: radius {} is not positive, generating as given", self.radius);
        }
        Self {
            slices: clamp_divisions("sphere", "slices", self.slices),
            stacks: clamp_divisions("sphere", "stacks", self.stacks),
            ..self
        }
    }
}

impl Default for SphereDescriptor {
    fn default() -> Self {
        Self {
            radius: 1.0,
            slices: 30,
            stacks: 30,
            color: Color::BLUE,
        }
    }
}

/// Torus parameters
///
/// `nsides` divides the angle around the central axis (`u`), `rings` the
/// angle around the tube (`v`). Both span `[-π, π]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusDescriptor {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub nsides: u32,
    pub rings: u32,
    pub color: Color,
}

impl TorusDescriptor {
    pub fn new(inner_radius: f32, outer_radius: f32, nsides: u32, rings: u32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            nsides,
            rings,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Apply the resolution clamp and order the radii so inner <= outer
    pub fn sanitized(self) -> Self {
        let (inner_radius, outer_radius) = if self.inner_radius > self.outer_radius {
            warn!(
                "torus: inner_radius {} exceeds outer_radius {}, swapping",
                self.inner_radius, self.outer_radius
            );
            (self.outer_radius, self.inner_radius)
        } else {
            (self.inner_radius, self.outer_radius)
        };

        Self {
            inner_radius,
            outer_radius,
            nsides: clamp_divisions("torus", "nsides", self.nsides),
            rings: clamp_divisions("torus", "rings", self.rings),
            color: self.color,
        }
    }

    /// Center-line radius `a`: distance from the axis to the tube center
    pub fn ring_radius(&self) -> f32 {
        (self.outer_radius + self.inner_radius) / 2.0
    }

    /// Tube radius `b`: half the difference between the radii
    pub fn tube_radius(&self) -> f32 {
        (self.outer_radius - self.inner_radius) / 2.0
    }

    /// Zero tube thickness; such a torus tessellates to an empty mesh
    pub fn is_degenerate(&self) -> bool {
        self.tube_radius() == 0.0
    }
}

impl Default for TorusDescriptor {
    fn default() -> Self {
        Self {
            inner_radius: 0.25,
            outer_radius: 0.5,
            nsides: 36,
            rings: 36,
            color: Color::SOFTBLUE,
        }
    }
}

/// Any supported surface family
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceDescriptor {
    Sphere(SphereDescriptor),
    Torus(TorusDescriptor),
}

impl SurfaceDescriptor {
    pub fn sanitized(self) -> Self {
        match self {
            Self::Sphere(sphere) => Self::Sphere(sphere.sanitized()),
            Self::Torus(torus) => Self::Torus(torus.sanitized()),
        }
    }

    /// Family name used in log output
    pub fn family(&self) -> &'static str {
        match self {
            Self::Sphere(_) => "sphere",
            Self::Torus(_) => "torus",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Sphere(sphere) => sphere.color,
            Self::Torus(torus) => torus.color,
        }
    }
}

impl From<SphereDescriptor> for SurfaceDescriptor {
    fn from(sphere: SphereDescriptor) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<TorusDescriptor> for SurfaceDescriptor {
    fn from(torus: TorusDescriptor) -> Self {
        Self::Torus(torus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_clamped_to_minimum() {
        let sphere = SphereDescriptor::new(1.0, 0, 2).sanitized();
        assert_eq!(sphere.slices, 3);
        assert_eq!(sphere.stacks, 3);

        let torus = TorusDescriptor::new(0.25, 0.5, 1, 64).sanitized();
        assert_eq!(torus.nsides, 3);
        assert_eq!(torus.rings, 64);
    }

    #[test]
    fn test_valid_resolution_untouched() {
        let sphere = SphereDescriptor::new(2.0, 3, 17);
        assert_eq!(sphere.sanitized(), sphere);
    }

    #[test]
    fn test_torus_radii_swapped() {
        let torus = TorusDescriptor::new(0.5, 0.25, 4, 4).sanitized();
        assert_eq!(torus.inner_radius, 0.25);
        assert_eq!(torus.outer_radius, 0.5);
        assert_eq!(torus.ring_radius(), 0.375);
        assert_eq!(torus.tube_radius(), 0.125);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let torus = TorusDescriptor::new(0.9, 0.1, 0, 2).sanitized();
        assert_eq!(torus.sanitized(), torus);
    }

    #[test]
    fn test_zero_thickness_is_degenerate() {
        assert!(TorusDescriptor::new(0.3, 0.3, 8, 8).sanitized().is_degenerate());
        assert!(!TorusDescriptor::default().is_degenerate());
    }

    #[test]
    fn test_non_positive_radius_kept() {
        let sphere = SphereDescriptor::new(-1.0, 8, 8).sanitized();
        assert_eq!(sphere.radius, -1.0);
    }

    #[test]
    fn test_defaults() {
        let sphere = SphereDescriptor::default();
        assert_eq!((sphere.radius, sphere.slices, sphere.stacks), (1.0, 30, 30));
        assert_eq!(sphere.color, Color::BLUE);

        let torus = TorusDescriptor::default();
        assert_eq!((torus.inner_radius, torus.outer_radius), (0.25, 0.5));
        assert_eq!((torus.nsides, torus.rings), (36, 36));
        assert_eq!(torus.color, Color::SOFTBLUE);
    }

    #[test]
    fn test_surface_descriptor_dispatch() {
        let surface: SurfaceDescriptor = TorusDescriptor::new(0.5, 0.25, 1, 1).into();
        match surface.sanitized() {
            SurfaceDescriptor::Torus(torus) => {
                assert!(torus.inner_radius <= torus.outer_radius);
                assert_eq!(torus.nsides, MIN_DIVISIONS);
            }
            other => panic!("expected torus, got {other:?}"),
        }
        assert_eq!(surface.family(), "torus");
    }
}
