use crate::core::RgbImageView;
use crate::face::{FaceSample, FaceValidation, FaceValidator};
use crate::session::SessionError;
use crate::solve::SolveError;
use image::ImageReader;
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("invalid RGB image buffer length (expected {expected} bytes, got {got})")]
    InvalidRgbBuffer { expected: usize, got: usize },

    #[error("invalid RGB image dimensions (width={width}, height={height})")]
    InvalidRgbDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Borrow an `image::RgbImage` as the lightweight `cube-scan-core` view type.
pub fn rgb_view(img: &image::RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Open and decode a face photo, converting to 8-bit RGB.
///
/// The format is guessed from the file content, not the extension.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(path), fields(path = %path.as_ref().display())))]
pub fn load_rgb(path: impl AsRef<Path>) -> Result<image::RgbImage, ScanError> {
    let img = ImageReader::open(path.as_ref())?
        .with_guessed_format()?
        .decode()?
        .to_rgb8();
    log::debug!(
        "decoded {} ({}x{})",
        path.as_ref().display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

fn ensure_non_empty(img: &image::RgbImage) -> Result<(), ScanError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(ScanError::InvalidRgbDimensions {
            width: img.width(),
            height: img.height(),
        });
    }
    Ok(())
}

/// Validate one decoded face photo.
pub fn validate_face(
    img: &image::RgbImage,
    validator: &FaceValidator,
) -> Result<FaceValidation, ScanError> {
    ensure_non_empty(img)?;
    Ok(validator.validate(&rgb_view(img)))
}

/// Validate one decoded face photo, also returning the per-cell sample.
pub fn validate_face_detailed(
    img: &image::RgbImage,
    validator: &FaceValidator,
) -> Result<(FaceValidation, FaceSample), ScanError> {
    ensure_non_empty(img)?;
    Ok(validator.validate_detailed(&rgb_view(img)))
}

/// Build an `image::RgbImage` from a raw interleaved RGB8 buffer.
pub fn rgb_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<image::RgbImage, ScanError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h).filter(|&(w, h)| w > 0 && h > 0) else {
        return Err(ScanError::InvalidRgbDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h).and_then(|n| n.checked_mul(3)) else {
        return Err(ScanError::InvalidRgbDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(ScanError::InvalidRgbBuffer {
            expected,
            got: pixels.len(),
        });
    }
    image::RgbImage::from_raw(width, height, pixels.to_vec())
        .ok_or(ScanError::InvalidRgbDimensions { width, height })
}

/// Validate a face from a raw interleaved RGB8 buffer.
pub fn validate_face_from_rgb_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    validator: &FaceValidator,
) -> Result<FaceValidation, ScanError> {
    let img = rgb_image_from_slice(width, height, pixels)?;
    validate_face(&img, validator)
}
