//! Renderable primitives and their surface coefficients.

use glam::Vec3;

/// Phong-style shading coefficients carried by every primitive.
///
/// `color` is unnormalized linear RGB in byte units (0-255 per channel);
/// the shaded result is scaled by the accumulated coefficient sum and
/// clamped only at output time.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub color: Vec3,
    pub ambient_k: f32,
    pub diffuse_k: f32,
    pub specular_k: f32,
    pub specular_exponent: f32,
    pub reflective_k: f32,
}

/// A scene primitive. Closed set: the scene description calls anything
/// that is not a plane a sphere.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere {
        center: Vec3,
        radius: f32,
        surface: Surface,
    },
    Plane {
        /// Any point on the plane.
        center: Vec3,
        /// Unit-length plane normal.
        normal: Vec3,
        surface: Surface,
    },
}

impl Primitive {
    /// Shading coefficients of this primitive.
    pub fn surface(&self) -> &Surface {
        match self {
            Primitive::Sphere { surface, .. } => surface,
            Primitive::Plane { surface, .. } => surface,
        }
    }

    /// Outward surface normal at a point on the primitive.
    ///
    /// Planes return their fixed normal regardless of `point`.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Primitive::Sphere { center, .. } => (point - *center).normalize(),
            Primitive::Plane { normal, .. } => *normal,
        }
    }
}
