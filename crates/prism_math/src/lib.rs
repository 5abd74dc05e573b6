// Re-export glam for convenience
pub use glam::*;

mod ray;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_normalize_idempotent() {
        // Normalizing an already-unit vector must not drift.
        let v = Vec3::new(1.0, 2.0, -3.0).normalize();
        let w = v.normalize();
        assert!((v - w).length() < 1e-6);
    }
}
