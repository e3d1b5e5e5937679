//! Nearest-anchor palette classification.

use cube_scan_core::{Color, Rgb};
use serde::{Deserialize, Serialize};

/// Canonical RGB anchor for every palette color, in [`Color::ALL`] order.
pub static PALETTE: [(Color, Rgb); 6] = [
    (Color::White, Rgb::new(255, 255, 255)),
    (Color::Red, Rgb::new(255, 0, 0)),
    (Color::Blue, Rgb::new(0, 0, 255)),
    (Color::Orange, Rgb::new(255, 165, 0)),
    (Color::Green, Rgb::new(0, 255, 0)),
    (Color::Yellow, Rgb::new(255, 255, 0)),
];

/// Parameters of the palette classifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierParams {
    /// A sample whose nearest anchor is at least this far away (RGB units)
    /// falls back to [`ClassifierParams::fallback_color`].
    pub fallback_distance: f32,
    pub fallback_color: Color,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            fallback_distance: 100.0,
            fallback_color: Color::White,
        }
    }
}

/// Full outcome of classifying one sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Reported color (the fallback color when `fallback` is set).
    pub color: Color,
    /// Nearest palette anchor, regardless of fallback.
    pub nearest: Color,
    /// Distance to `nearest`.
    pub distance: f32,
    /// True when no anchor was close enough.
    pub fallback: bool,
}

/// Maps RGB samples onto the closed 6-color palette.
///
/// Total over all 256³ inputs: every sample yields a color.
#[derive(Clone, Debug, Default)]
pub struct ColorClassifier {
    params: ClassifierParams,
}

impl ColorClassifier {
    pub fn new(params: ClassifierParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    /// Classify a sample into a palette color.
    #[inline]
    pub fn classify(&self, sample: Rgb) -> Color {
        self.classify_detailed(sample).color
    }

    /// Classify and report the nearest anchor, its distance and whether the
    /// fallback fired.
    pub fn classify_detailed(&self, sample: Rgb) -> Classification {
        // Strict `<` keeps the first anchor on ties.
        let (mut nearest, mut best) = (PALETTE[0].0, sample.distance(PALETTE[0].1));
        for &(color, anchor) in &PALETTE[1..] {
            let d = sample.distance(anchor);
            if d < best {
                best = d;
                nearest = color;
            }
        }

        let fallback = best >= self.params.fallback_distance;
        Classification {
            color: if fallback {
                self.params.fallback_color
            } else {
                nearest
            },
            nearest,
            distance: best,
            fallback,
        }
    }
}
