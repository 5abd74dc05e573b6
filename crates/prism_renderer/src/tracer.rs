//! Depth-bounded Whitted tracing.
//!
//! Conceptually the trace is recursive (shading spawns the reflection
//! bounce). Here the recursion is unrolled into a loop that carries the
//! accumulated color and a multiplicative reflectivity weight, so deep
//! settings never grow the call stack.

use glam::Vec3;
use prism_core::Scene;
use prism_math::Ray;

use crate::intersect::intersect_scene;
use crate::shade::shade_local;

/// Per-render configuration, threaded explicitly through every trace
/// call. Never global state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Bounce budget: a reflection ray past this depth is not
    /// intersected and resolves to the background color.
    pub max_depth: u32,
    /// Color for depth-exceeded rays; also what the renderer paints
    /// for primary-ray misses. Byte units, like surface colors.
    pub background: Vec3,
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
    pub reflection: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: 1,
            background: Vec3::new(190.0, 210.0, 215.0),
            ambient: true,
            diffuse: true,
            specular: true,
            reflection: true,
        }
    }
}

/// Mirror `v` about the unit normal `n`.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Trace a ray through the scene.
///
/// Returns `None` when the ray leaves the scene without hitting
/// anything — the caller decides what a primary-ray miss looks like
/// (the tile renderer paints the background). A reflection bounce that
/// misses simply stops contributing, while a bounce past
/// `settings.max_depth` contributes the attenuated background instead.
pub fn trace(scene: &Scene, settings: &RenderSettings, primary: Ray) -> Option<Vec3> {
    let mut color = Vec3::ZERO;
    let mut weight = 1.0_f32;
    let mut ray = primary;

    for depth in 0_u32.. {
        if depth > settings.max_depth {
            color += weight * settings.background;
            break;
        }

        let Some(hit) = intersect_scene(&ray, scene) else {
            if depth == 0 {
                return None;
            }
            break;
        };

        color += weight * shade_local(scene, settings, &hit);
        if !settings.reflection {
            break;
        }

        let point = hit.intersection.point;
        let normal = hit.primitive.normal_at(point);
        weight *= hit.primitive.surface().reflective_k;
        ray = Ray::new(point, reflect(ray.direction(), normal));
    }

    Some(color)
}
