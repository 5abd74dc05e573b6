//! Ray/primitive intersection and closest-hit selection.

use glam::Vec3;
use prism_core::{Primitive, Scene};
use prism_math::Ray;

/// Self-intersection guard. Sphere hit points are pulled back toward the
/// ray origin by this much, and plane hits closer than this are
/// rejected, so secondary rays clear the surface they start on.
pub const BIAS: f32 = 1e-3;

/// A valid intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Ray parameter t at the hit.
    pub distance: f32,
    /// World position reported for the hit.
    pub point: Vec3,
}

/// The closest primitive a ray hits, borrowed from the scene.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub intersection: Intersection,
    pub primitive: &'a Primitive,
}

/// Ray/sphere intersection.
///
/// Solves `At^2 + Bt + C = 0` for the ray parameter and keeps the near
/// root. A ray that starts inside the sphere has a negative near root
/// and is reported as a miss; DESIGN.md records why.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<Intersection> {
    let d = ray.direction();
    let oc = ray.origin() - center;

    let a = d.dot(d);
    if a == 0.0 {
        // Zero-length direction: degenerate ray, no hit.
        return None;
    }
    let b = 2.0 * d.dot(oc);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t = ((-b - sqrt_d) / (2.0 * a)).min((-b + sqrt_d) / (2.0 * a));
    if t <= 0.0 {
        return None;
    }

    // Report the point slightly short of the surface so shadow and
    // reflection rays don't re-hit it.
    Some(Intersection {
        distance: t,
        point: ray.at(t - BIAS),
    })
}

/// Ray/plane intersection.
///
/// Unlike spheres, plane hits report the exact surface point; the guard
/// here is the `t >= BIAS` acceptance instead of a point offset.
pub fn intersect_plane(ray: &Ray, center: Vec3, normal: Vec3) -> Option<Intersection> {
    let denom = normal.dot(ray.direction());
    if denom == 0.0 {
        // Ray parallel to the plane.
        return None;
    }

    let t = (center - ray.origin()).dot(normal) / denom;
    if t >= BIAS {
        Some(Intersection {
            distance: t,
            point: ray.at(t),
        })
    } else {
        None
    }
}

/// Intersection test for a single primitive.
pub fn intersect_primitive(ray: &Ray, primitive: &Primitive) -> Option<Intersection> {
    match primitive {
        Primitive::Sphere { center, radius, .. } => intersect_sphere(ray, *center, *radius),
        Primitive::Plane { center, normal, .. } => intersect_plane(ray, *center, *normal),
    }
}

/// Closest hit over the whole scene.
///
/// Distance is measured from the ray origin to the reported hit point.
/// Exact ties go to the earlier object in declaration order.
pub fn intersect_scene<'a>(ray: &Ray, scene: &'a Scene) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_distance = f32::INFINITY;

    for primitive in &scene.objects {
        if let Some(intersection) = intersect_primitive(ray, primitive) {
            let distance = ray.origin().distance(intersection.point);
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(Hit {
                    intersection,
                    primitive,
                });
            }
        }
    }

    closest
}
