//! JSON scene-description ingestion.
//!
//! The on-disk format is a single JSON object:
//!
//! ```json
//! {
//!   "camera":  { "position": [x,y,z], "direction": [x,y,z], "fov": 45 },
//!   "lights":  [ { "position": [x,y,z] } ],
//!   "objects": [
//!     { "type": "sphere", "center": [x,y,z], "radius": 1.0,
//!       "color": [r,g,b], "ambientK": 0.1, "diffuseK": 0.5,
//!       "specularK": 0.3, "specularExponent": 8, "reflectiveK": 0.2 },
//!     { "type": "plane", "center": [x,y,z], "normal": [x,y,z], ... }
//!   ]
//! }
//! ```
//!
//! Any object whose `type` is not `"plane"` is a sphere, including
//! objects with no `type` field at all. The camera resolution is not
//! part of the file; the caller supplies it.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::primitive::{Primitive, Surface};
use crate::scene::{Camera, Light, Scene};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("object {index}: sphere is missing \"radius\"")]
    MissingRadius { index: usize },

    #[error("object {index}: plane is missing \"normal\"")]
    MissingNormal { index: usize },

    #[error("object {index}: plane normal has zero length")]
    DegenerateNormal { index: usize },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Deserialize)]
struct RawScene {
    camera: RawCamera,
    #[serde(default)]
    lights: Vec<RawLight>,
    #[serde(default)]
    objects: Vec<RawObject>,
}

#[derive(Deserialize)]
struct RawCamera {
    position: [f32; 3],
    direction: [f32; 3],
    fov: f32,
}

#[derive(Deserialize)]
struct RawLight {
    position: [f32; 3],
}

#[derive(Deserialize)]
struct RawObject {
    #[serde(rename = "type")]
    kind: Option<String>,
    center: [f32; 3],
    radius: Option<f32>,
    normal: Option<[f32; 3]>,
    color: [f32; 3],
    #[serde(rename = "ambientK")]
    ambient_k: f32,
    #[serde(rename = "diffuseK")]
    diffuse_k: f32,
    #[serde(rename = "specularK")]
    specular_k: f32,
    #[serde(rename = "specularExponent")]
    specular_exponent: f32,
    #[serde(rename = "reflectiveK")]
    reflective_k: f32,
}

fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}

/// Load a scene description from a JSON file.
///
/// `width` and `height` become the camera resolution; the file itself
/// does not carry one.
pub fn load_scene<P: AsRef<Path>>(path: P, width: u32, height: u32) -> LoadResult<Scene> {
    let text = fs::read_to_string(path)?;
    load_scene_from_str(&text, width, height)
}

/// Load a scene description from JSON text.
pub fn load_scene_from_str(json: &str, width: u32, height: u32) -> LoadResult<Scene> {
    let raw: RawScene = serde_json::from_str(json)?;

    let camera = Camera {
        position: vec3(raw.camera.position),
        direction: vec3(raw.camera.direction),
        fov: raw.camera.fov,
        width,
        height,
    };

    let lights: Vec<Light> = raw
        .lights
        .into_iter()
        .map(|l| Light {
            position: vec3(l.position),
        })
        .collect();

    let mut objects = Vec::with_capacity(raw.objects.len());
    for (index, obj) in raw.objects.into_iter().enumerate() {
        let surface = Surface {
            color: vec3(obj.color),
            ambient_k: obj.ambient_k,
            diffuse_k: obj.diffuse_k,
            specular_k: obj.specular_k,
            specular_exponent: obj.specular_exponent,
            reflective_k: obj.reflective_k,
        };

        let primitive = match obj.kind.as_deref() {
            Some("plane") => {
                let normal = vec3(obj.normal.ok_or(LoadError::MissingNormal { index })?);
                if normal.length_squared() == 0.0 {
                    return Err(LoadError::DegenerateNormal { index });
                }
                Primitive::Plane {
                    center: vec3(obj.center),
                    // The tracer assumes unit normals; don't trust the file.
                    normal: normal.normalize(),
                    surface,
                }
            }
            // Everything else, "sphere" or otherwise, is a sphere.
            _ => Primitive::Sphere {
                center: vec3(obj.center),
                radius: obj.radius.ok_or(LoadError::MissingRadius { index })?,
                surface,
            },
        };
        objects.push(primitive);
    }

    log::info!(
        "loaded scene: {} lights, {} objects",
        lights.len(),
        objects.len()
    );

    Ok(Scene {
        camera,
        lights,
        objects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "camera": { "position": [0, 0, 0], "direction": [0, 0, -1], "fov": 45 },
        "lights": [ { "position": [0, 10, 0] } ],
        "objects": [
            { "type": "sphere", "center": [0, 0, -5], "radius": 1,
              "color": [255, 0, 0], "ambientK": 0.1, "diffuseK": 0.5,
              "specularK": 0.3, "specularExponent": 8, "reflectiveK": 0.2 },
            { "type": "plane", "center": [0, -2, 0], "normal": [0, 2, 0],
              "color": [100, 100, 100], "ambientK": 0.1, "diffuseK": 0.5,
              "specularK": 0.0, "specularExponent": 1, "reflectiveK": 0.0 }
        ]
    }"#;

    #[test]
    fn test_load_scene() {
        let scene = load_scene_from_str(SCENE, 640, 480).unwrap();

        assert_eq!(scene.camera.width, 640);
        assert_eq!(scene.camera.height, 480);
        assert_eq!(scene.camera.fov, 45.0);
        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.objects.len(), 2);

        match &scene.objects[0] {
            Primitive::Sphere { center, radius, surface } => {
                assert_eq!(*center, Vec3::new(0.0, 0.0, -5.0));
                assert_eq!(*radius, 1.0);
                assert_eq!(surface.color, Vec3::new(255.0, 0.0, 0.0));
            }
            other => panic!("expected sphere, got {other:?}"),
        }
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let scene = load_scene_from_str(SCENE, 640, 480).unwrap();
        match &scene.objects[1] {
            Primitive::Plane { normal, .. } => {
                assert!((normal.length() - 1.0).abs() < 1e-6);
                assert_eq!(*normal, Vec3::Y);
            }
            other => panic!("expected plane, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_is_a_sphere() {
        let json = r#"{
            "camera": { "position": [0,0,0], "direction": [0,0,-1], "fov": 45 },
            "objects": [
                { "type": "blob", "center": [0,0,-3], "radius": 2,
                  "color": [0,255,0], "ambientK": 0.1, "diffuseK": 0.5,
                  "specularK": 0.0, "specularExponent": 1, "reflectiveK": 0.0 },
                { "center": [0,0,-9], "radius": 1,
                  "color": [0,0,255], "ambientK": 0.1, "diffuseK": 0.5,
                  "specularK": 0.0, "specularExponent": 1, "reflectiveK": 0.0 }
            ]
        }"#;

        let scene = load_scene_from_str(json, 100, 100).unwrap();
        assert!(matches!(scene.objects[0], Primitive::Sphere { .. }));
        assert!(matches!(scene.objects[1], Primitive::Sphere { .. }));
    }

    #[test]
    fn test_sphere_without_radius_is_an_error() {
        let json = r#"{
            "camera": { "position": [0,0,0], "direction": [0,0,-1], "fov": 45 },
            "objects": [
                { "type": "sphere", "center": [0,0,-3],
                  "color": [0,255,0], "ambientK": 0.1, "diffuseK": 0.5,
                  "specularK": 0.0, "specularExponent": 1, "reflectiveK": 0.0 }
            ]
        }"#;

        let err = load_scene_from_str(json, 100, 100).unwrap_err();
        assert!(matches!(err, LoadError::MissingRadius { index: 0 }));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = load_scene_from_str("{ not json", 100, 100).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_camera_is_an_error() {
        let err = load_scene_from_str(r#"{ "objects": [] }"#, 100, 100).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
