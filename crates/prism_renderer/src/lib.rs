//! Prism Renderer - CPU Whitted-style ray tracing.
//!
//! One primary ray per pixel, recursive evaluation of intersection,
//! Phong shading with per-term toggles, shadow rays, and depth-bounded
//! mirror reflection. Per-pixel work is pure over the read-only scene,
//! so whole-frame rendering parallelizes over tiles with rayon.

mod camera;
mod framebuffer;
mod intersect;
mod shade;
mod tile;
mod tracer;

pub use camera::{CameraError, Viewport};
pub use framebuffer::Framebuffer;
pub use intersect::{
    intersect_plane, intersect_primitive, intersect_scene, intersect_sphere, Hit, Intersection,
    BIAS,
};
pub use shade::{occluded, shade_local};
pub use tile::{render, tiles, RenderError, Tile, TILE_ROWS};
pub use tracer::{trace, RenderSettings};

/// Re-export the math types the public API is expressed in.
pub use prism_math::{Ray, Vec3};
