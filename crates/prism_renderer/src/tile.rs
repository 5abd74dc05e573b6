//! Tile-parallel rendering over the pixel grid.
//!
//! Pixels are independent, so the frame is cut into horizontal bands
//! that rayon workers trace concurrently against the shared read-only
//! scene. A cancellation flag is polled between tiles so an embedder
//! can abandon an in-flight render without waiting for the frame.

use std::sync::atomic::{AtomicBool, Ordering};

use glam::Vec3;
use prism_core::Scene;
use rayon::prelude::*;
use thiserror::Error;

use crate::camera::{CameraError, Viewport};
use crate::framebuffer::Framebuffer;
use crate::tracer::{trace, RenderSettings};

/// Rows per tile handed to a rayon worker.
pub const TILE_ROWS: u32 = 16;

/// Errors that can abort a render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error("render cancelled")]
    Cancelled,
}

/// A horizontal band of the image.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    /// First row covered by this tile.
    pub y0: u32,
    /// Number of rows in the tile.
    pub rows: u32,
}

/// Cut `height` rows into bands of at most `rows_per_tile`.
pub fn tiles(height: u32, rows_per_tile: u32) -> Vec<Tile> {
    let mut tiles = Vec::new();
    let mut y0 = 0;
    while y0 < height {
        let rows = rows_per_tile.min(height - y0);
        tiles.push(Tile { y0, rows });
        y0 += rows;
    }
    tiles
}

/// Trace one tile into a local pixel vector, row-major within the tile.
fn render_tile(
    scene: &Scene,
    settings: &RenderSettings,
    viewport: &Viewport,
    tile: Tile,
) -> Vec<Vec3> {
    let width = viewport.width();
    let mut pixels = Vec::with_capacity((width * tile.rows) as usize);

    for y in tile.y0..tile.y0 + tile.rows {
        for x in 0..width {
            let ray = viewport.primary_ray(x, y);
            // A primary-ray miss is painted with the background.
            let color = trace(scene, settings, ray).unwrap_or(settings.background);
            pixels.push(color);
        }
    }

    pixels
}

/// Render the whole frame.
///
/// `cancel`, when given, is polled before each tile; a raised flag makes
/// the pass return [`RenderError::Cancelled`] instead of a frame.
pub fn render(
    scene: &Scene,
    settings: &RenderSettings,
    cancel: Option<&AtomicBool>,
) -> Result<Framebuffer, RenderError> {
    let viewport = Viewport::new(&scene.camera)?;
    let width = viewport.width();
    let height = viewport.height();

    let bands: Vec<(Tile, Option<Vec<Vec3>>)> = tiles(height, TILE_ROWS)
        .into_par_iter()
        .map(|tile| {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return (tile, None);
            }
            (tile, Some(render_tile(scene, settings, &viewport, tile)))
        })
        .collect();

    let mut frame = Framebuffer::new(width, height);
    for (tile, pixels) in bands {
        let Some(pixels) = pixels else {
            return Err(RenderError::Cancelled);
        };
        for (i, color) in pixels.into_iter().enumerate() {
            let i = i as u32;
            frame.set(i % width, tile.y0 + i / width, color);
        }
    }

    log::info!(
        "rendered {}x{}: {} objects, {} lights, max depth {}",
        width,
        height,
        scene.objects.len(),
        scene.lights.len(),
        settings.max_depth
    );

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Camera, Primitive, Surface};

    fn small_scene() -> Scene {
        let camera = Camera {
            position: Vec3::ZERO,
            direction: Vec3::new(0.0, 0.0, -1.0),
            fov: 60.0,
            width: 16,
            height: 16,
        };
        let mut scene = Scene::new(camera);
        scene.add_light(Vec3::new(0.0, 10.0, 0.0));
        scene.add_object(Primitive::Sphere {
            center: Vec3::new(0.0, 0.0, -5.0),
            radius: 1.0,
            surface: Surface {
                color: Vec3::new(255.0, 0.0, 0.0),
                ambient_k: 0.3,
                diffuse_k: 0.5,
                specular_k: 0.2,
                specular_exponent: 8.0,
                reflective_k: 0.0,
            },
        });
        scene
    }

    #[test]
    fn test_tiles_cover_the_image() {
        let tiles = tiles(100, 16);
        assert_eq!(tiles.len(), 7);
        assert_eq!(tiles.iter().map(|t| t.rows).sum::<u32>(), 100);
        assert_eq!(tiles.last().unwrap().rows, 4);
    }

    #[test]
    fn test_render_paints_hits_and_background() {
        let scene = small_scene();
        let settings = RenderSettings::default();

        let frame = render(&scene, &settings, None).unwrap();
        assert_eq!(frame.width(), 16);
        assert_eq!(frame.height(), 16);

        // The center pixel hits the red sphere, the corner misses.
        let center = frame.get(8, 8);
        assert!(center.x > 0.0);
        assert_eq!(center.y, 0.0);
        assert_eq!(frame.get(0, 0), settings.background);

        let rgba = frame.to_rgba();
        assert_eq!(rgba.len(), 16 * 16 * 4);
        assert!(rgba.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_render_rejects_degenerate_camera() {
        let mut scene = small_scene();
        scene.camera.fov = 0.0;
        let err = render(&scene, &RenderSettings::default(), None).unwrap_err();
        assert!(matches!(err, RenderError::Camera(CameraError::InvalidFov { .. })));
    }

    #[test]
    fn test_cancelled_render_returns_no_frame() {
        let scene = small_scene();
        let cancel = AtomicBool::new(true);
        let err = render(&scene, &RenderSettings::default(), Some(&cancel)).unwrap_err();
        assert!(matches!(err, RenderError::Cancelled));
    }
}
