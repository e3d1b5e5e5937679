//! Core types and utilities for puzzle-cube face scanning.
//!
//! This crate is intentionally small. It defines the closed sticker palette,
//! the 3×3 face grid, face identities and a lightweight RGB image view. It
//! does *not* depend on any concrete image decoder.

mod color;
mod face_id;
mod grid;
mod image;
mod logger;

pub use color::{Color, Rgb};
pub use face_id::{FaceId, FaceIdError};
pub use grid::{ColorCounts, ColorGrid, FACE_CELLS, GRID_SIZE};
pub use image::{pixel_at, ImageViewError, RgbImage, RgbImageView};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
