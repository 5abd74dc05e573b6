//! Local Phong shading and shadow testing.

use glam::Vec3;
use prism_core::{Light, Scene};
use prism_math::Ray;

use crate::intersect::{intersect_scene, Hit};
use crate::tracer::RenderSettings;

/// True when `point` cannot see `light`.
///
/// The shadow ray is range-limited: a hit counts as an occluder only if
/// it lies strictly between the point and the light, so geometry beyond
/// the light never shadows.
pub fn occluded(scene: &Scene, point: Vec3, light: &Light) -> bool {
    let to_light = light.position - point;
    let light_distance = to_light.length();
    if light_distance == 0.0 {
        return false;
    }

    let shadow_ray = Ray::new(point, to_light / light_distance);
    match intersect_scene(&shadow_ray, scene) {
        Some(hit) => {
            let d = hit.intersection.distance;
            d > 0.0 && d < light_distance
        }
        None => false,
    }
}

/// Local radiance at a hit point: ambient plus per-light diffuse and
/// specular, each term subject to its toggle, scaled into the surface
/// color. The reflection term is handled by the tracer, not here.
pub fn shade_local(scene: &Scene, settings: &RenderSettings, hit: &Hit) -> Vec3 {
    let surface = hit.primitive.surface();
    let point = hit.intersection.point;
    let normal = hit.primitive.normal_at(point);
    let to_eye = (scene.camera.position - point).normalize();

    let mut diffuse = 0.0;
    let mut specular = 0.0;
    for light in &scene.lights {
        if occluded(scene, point, light) {
            continue;
        }

        let to_light = (light.position - point).normalize();
        // A light behind the surface contributes nothing.
        diffuse += surface.diffuse_k * to_light.dot(normal).max(0.0);

        let halfway = (to_light + to_eye).normalize_or_zero();
        let base = halfway.dot(normal).max(0.0);
        specular += surface.specular_k * base.powf(surface.specular_exponent);
    }

    let mut total = 0.0;
    if settings.ambient {
        total += surface.ambient_k;
    }
    if settings.diffuse {
        total += diffuse;
    }
    if settings.specular {
        total += specular;
    }

    surface.color * total
}
