//! Primary-ray generation from the scene camera.

use glam::Vec3;
use prism_core::Camera;
use prism_math::Ray;
use thiserror::Error;

/// Camera configurations that cannot produce a valid pixel grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("image must be at least 2x2 pixels, got {width}x{height}")]
    ImageTooSmall { width: u32, height: u32 },

    #[error("field of view must be in (0, 180) degrees, got {fov}")]
    InvalidFov { fov: f32 },

    #[error("camera position and look-at target coincide")]
    DegenerateDirection,

    #[error("camera looks straight along the world up axis")]
    LookAlongUp,
}

/// Precomputed orthonormal basis and pixel stepping for a camera.
///
/// The pixel grid spans the full field of view with pixel (0, 0) at one
/// corner; steps divide by `width - 1` / `height - 1`, which is why
/// 1-pixel-wide images are rejected up front instead of dividing by
/// zero.
#[derive(Debug, Clone)]
pub struct Viewport {
    origin: Vec3,
    eye: Vec3,
    right: Vec3,
    up: Vec3,
    half_width: f32,
    half_height: f32,
    pixel_width: f32,
    pixel_height: f32,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Derive the ray-generation basis from a camera.
    ///
    /// `camera.direction` is a look-at target, not a direction vector.
    /// World up is +Y.
    pub fn new(camera: &Camera) -> Result<Self, CameraError> {
        if camera.width < 2 || camera.height < 2 {
            return Err(CameraError::ImageTooSmall {
                width: camera.width,
                height: camera.height,
            });
        }
        if camera.fov <= 0.0 || camera.fov >= 180.0 || camera.fov.is_nan() {
            return Err(CameraError::InvalidFov { fov: camera.fov });
        }

        let eye = camera.direction - camera.position;
        if eye.length_squared() == 0.0 {
            return Err(CameraError::DegenerateDirection);
        }
        let eye = eye.normalize();

        let right = eye.cross(Vec3::Y);
        if right.length_squared() == 0.0 {
            return Err(CameraError::LookAlongUp);
        }
        let right = right.normalize();
        let up = right.cross(eye).normalize();

        let half_width = (camera.fov.to_radians() / 2.0).tan();
        let half_height = camera.height as f32 / camera.width as f32 * half_width;
        let pixel_width = 2.0 * half_width / (camera.width - 1) as f32;
        let pixel_height = 2.0 * half_height / (camera.height - 1) as f32;

        Ok(Self {
            origin: camera.position,
            eye,
            right,
            up,
            half_width,
            half_height,
            pixel_width,
            pixel_height,
            width: camera.width,
            height: camera.height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Primary ray through pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let vx = self.right * (x as f32 * self.pixel_width - self.half_width);
        let vy = self.up * (y as f32 * self.pixel_height - self.half_height);
        let direction = (self.eye + vx + vy).normalize();
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(width: u32, height: u32, fov: f32) -> Camera {
        Camera {
            position: Vec3::ZERO,
            direction: Vec3::new(0.0, 0.0, -1.0),
            fov,
            width,
            height,
        }
    }

    #[test]
    fn test_center_pixel_looks_along_eye() {
        let viewport = Viewport::new(&camera(101, 101, 90.0)).unwrap();
        let ray = viewport.primary_ray(50, 50);

        assert!((ray.direction() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
        assert_eq!(ray.origin(), Vec3::ZERO);
    }

    #[test]
    fn test_corner_rays_span_the_fov() {
        let viewport = Viewport::new(&camera(101, 101, 90.0)).unwrap();

        let left = viewport.primary_ray(0, 50);
        let right = viewport.primary_ray(100, 50);
        assert!(left.direction().x < 0.0);
        assert!(right.direction().x > 0.0);
        // 90 degree fov puts the edge rays 45 degrees off axis.
        assert!((left.direction().x + right.direction().x).abs() < 1e-5);
    }

    #[test]
    fn test_rays_are_unit_length() {
        let viewport = Viewport::new(&camera(64, 48, 60.0)).unwrap();
        for (x, y) in [(0, 0), (63, 0), (0, 47), (63, 47), (31, 23)] {
            let ray = viewport.primary_ray(x, y);
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_image_is_rejected() {
        let err = Viewport::new(&camera(1, 100, 60.0)).unwrap_err();
        assert!(matches!(err, CameraError::ImageTooSmall { .. }));

        let err = Viewport::new(&camera(100, 1, 60.0)).unwrap_err();
        assert!(matches!(err, CameraError::ImageTooSmall { .. }));
    }

    #[test]
    fn test_degenerate_fov_is_rejected() {
        for fov in [0.0, -10.0, 180.0, f32::NAN] {
            let err = Viewport::new(&camera(100, 100, fov)).unwrap_err();
            assert!(matches!(err, CameraError::InvalidFov { .. }));
        }
    }

    #[test]
    fn test_look_at_own_position_is_rejected() {
        let cam = Camera {
            position: Vec3::ONE,
            direction: Vec3::ONE,
            fov: 60.0,
            width: 100,
            height: 100,
        };
        assert_eq!(Viewport::new(&cam).unwrap_err(), CameraError::DegenerateDirection);
    }

    #[test]
    fn test_look_straight_up_is_rejected() {
        let cam = Camera {
            position: Vec3::ZERO,
            direction: Vec3::Y,
            fov: 60.0,
            width: 100,
            height: 100,
        };
        assert_eq!(Viewport::new(&cam).unwrap_err(), CameraError::LookAlongUp);
    }
}
