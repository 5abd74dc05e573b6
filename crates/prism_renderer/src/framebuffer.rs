//! Render target and RGBA conversion.

use glam::Vec3;

/// Row-major buffer of traced colors, one `Vec3` per pixel.
#[derive(Debug)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Pack into row-major RGBA bytes, 4 per pixel, alpha 255.
    ///
    /// Channels are clamped to [0, 255] before narrowing. A pixel whose
    /// trace produced a non-finite channel is written as 0 for that
    /// channel and reported through the log rather than failing the
    /// frame.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        let mut bad_channels = 0_usize;

        for color in &self.pixels {
            bytes.push(channel(color.x, &mut bad_channels));
            bytes.push(channel(color.y, &mut bad_channels));
            bytes.push(channel(color.z, &mut bad_channels));
            bytes.push(255);
        }

        if bad_channels > 0 {
            log::warn!("{bad_channels} non-finite color channels written as 0");
        }

        bytes
    }
}

fn channel(value: f32, bad: &mut usize) -> u8 {
    if !value.is_finite() {
        *bad += 1;
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}
