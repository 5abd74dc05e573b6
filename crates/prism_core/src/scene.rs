//! Scene graph types for the prism tracer.
//!
//! A [`Scene`] is built once from external input and is read-only for the
//! duration of a render pass; per-ray state never leaks back into it.

use glam::Vec3;

use crate::primitive::Primitive;

/// Camera description as it appears in the scene file.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Look-at target, not a direction vector.
    pub direction: Vec3,
    /// Full vertical field of view in degrees.
    pub fov: f32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// A point light. No intensity or falloff is modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
}

/// A complete scene: camera, lights, and primitives.
///
/// Iteration order of `objects` is significant: closest-hit ties go to
/// the earlier object.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub objects: Vec<Primitive>,
}

impl Scene {
    /// Create a scene with no lights or objects.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, position: Vec3) {
        self.lights.push(Light { position });
    }

    /// Add a primitive to the scene.
    pub fn add_object(&mut self, primitive: Primitive) {
        self.objects.push(primitive);
    }
}
