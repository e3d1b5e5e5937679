//! Center-of-cell sampling of a 3×3 face grid.

use crate::classifier::{Classification, ClassifierParams, ColorClassifier};
use cube_scan_core::{pixel_at, Color, ColorGrid, Rgb, RgbImageView, FACE_CELLS, GRID_SIZE};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Result of sampling one face photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceSample {
    /// Classified facelet colors.
    pub colors: ColorGrid,
    /// Raw pixel read at each cell center.
    pub samples: [[Rgb; GRID_SIZE]; GRID_SIZE],
    /// Per-cell classification details.
    pub cells: [[Classification; GRID_SIZE]; GRID_SIZE],
    /// Cells whose classification did not need the fallback color.
    pub confident_cells: usize,
    /// `confident_cells / 9`.
    pub confidence: f32,
}

/// Splits an image into a 3×3 grid of equal cells and classifies the pixel at
/// each cell center (no area averaging).
#[derive(Clone, Debug, Default)]
pub struct FaceSampler {
    classifier: ColorClassifier,
}

impl FaceSampler {
    pub fn new(params: ClassifierParams) -> Self {
        Self {
            classifier: ColorClassifier::new(params),
        }
    }

    #[inline]
    pub fn classifier(&self) -> &ColorClassifier {
        &self.classifier
    }

    /// Pixel coordinates of the center of cell `(row, col)`.
    ///
    /// Cell extents are real-valued (`width / 3`); the center is truncated to an
    /// integer pixel and clamped into the image, so a 1×1 image maps every cell
    /// to its only pixel.
    pub fn cell_center(width: usize, height: usize, row: usize, col: usize) -> (usize, usize) {
        let cw = width as f32 / GRID_SIZE as f32;
        let ch = height as f32 / GRID_SIZE as f32;
        let x = (col as f32 * cw + 0.5 * cw) as usize;
        let y = (row as f32 * ch + 0.5 * ch) as usize;
        (
            x.min(width.saturating_sub(1)),
            y.min(height.saturating_sub(1)),
        )
    }

    /// Sample and classify all nine cells. Always returns a full grid; the
    /// caller decides whether the confidence is acceptable.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, image), fields(width = image.width, height = image.height))
    )]
    pub fn sample(&self, image: &RgbImageView<'_>) -> FaceSample {
        let mut colors = [[Color::White; GRID_SIZE]; GRID_SIZE];
        let mut samples = [[Rgb::default(); GRID_SIZE]; GRID_SIZE];
        let mut cells = [[Classification {
            color: Color::White,
            nearest: Color::White,
            distance: 0.0,
            fallback: false,
        }; GRID_SIZE]; GRID_SIZE];
        let mut confident_cells = 0usize;

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (x, y) = Self::cell_center(image.width, image.height, row, col);
                let px = pixel_at(image, x, y);
                let c = self.classifier.classify_detailed(px);
                if !c.fallback {
                    confident_cells += 1;
                }
                samples[row][col] = px;
                colors[row][col] = c.color;
                cells[row][col] = c;
            }
        }

        log::trace!(
            "sampled {}x{} face: {confident_cells}/{FACE_CELLS} confident cells",
            image.width,
            image.height
        );

        FaceSample {
            colors: ColorGrid(colors),
            samples,
            cells,
            confident_cells,
            confidence: confident_cells as f32 / FACE_CELLS as f32,
        }
    }
}
