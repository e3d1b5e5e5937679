use crate::Rgb;

/// Image buffer shape errors.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageViewError {
    #[error("image must be at least 1x1 (width={width}, height={height})")]
    Empty { width: usize, height: usize },
    #[error("invalid RGB buffer length (expected {expected} bytes, got {got})")]
    BufferLength { expected: usize, got: usize },
}

/// Borrowed interleaved RGB8 image.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h*3
}

impl<'a> RgbImageView<'a> {
    /// Wrap a raw buffer, checking that it is non-empty and correctly sized.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageViewError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(ImageViewError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// Owned interleaved RGB8 image.
#[derive(Clone, Debug)]
pub struct RgbImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbImage {
    /// Image of the given size filled with one color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, ImageViewError> {
        let len = checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width * height {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn view(&self) -> RgbImageView<'_> {
        RgbImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// Overwrite one pixel; out-of-bounds writes are ignored.
    pub fn put(&mut self, x: usize, y: usize, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
    }

    /// Paint the axis-aligned rectangle `[x0, x1) × [y0, y1)`, clipped to the image.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: Rgb) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.put(x, y, color);
            }
        }
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, ImageViewError> {
    if width == 0 || height == 0 {
        return Err(ImageViewError::Empty { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or(ImageViewError::Empty { width, height })
}

/// Read one pixel. Out-of-bounds or truncated reads yield black.
#[inline]
pub fn pixel_at(src: &RgbImageView<'_>, x: usize, y: usize) -> Rgb {
    if x >= src.width || y >= src.height {
        return Rgb::default();
    }
    let i = (y * src.width + x) * 3;
    match src.data.get(i..i + 3) {
        Some(px) => Rgb::new(px[0], px[1], px[2]),
        None => Rgb::default(),
    }
}
