//! Prism Core - scene model and scene-description ingestion.
//!
//! This crate provides:
//!
//! - **Scene model**: [`Scene`], [`Camera`], [`Light`], [`Primitive`],
//!   [`Surface`] — the immutable-per-render data the tracer reads.
//! - **Ingestion**: JSON scene-description loading with structured errors.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scene.json", 800, 600)?;
//! println!("{} objects, {} lights", scene.objects.len(), scene.lights.len());
//! ```

pub mod load;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use load::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use primitive::{Primitive, Surface};
pub use scene::{Camera, Light, Scene};
