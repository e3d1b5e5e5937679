//! Confidence gate for sampled faces.

use crate::classifier::ClassifierParams;
use crate::sampler::{FaceSample, FaceSampler};
use cube_scan_core::{ColorGrid, RgbImageView};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Face acceptance configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorParams {
    /// Minimal fraction of confidently classified cells (inclusive).
    pub min_confidence: f32,
    pub classifier: ClassifierParams,
}

impl Default for ValidatorParams {
    fn default() -> Self {
        Self {
            min_confidence: 0.70,
            classifier: ClassifierParams::default(),
        }
    }
}

/// Outcome of validating one face photo.
///
/// `colors` is present iff `is_valid`; a rejected grid is discarded so the
/// caller has to ask for a retake.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceValidation {
    pub is_valid: bool,
    pub colors: Option<ColorGrid>,
    pub confidence: f32,
}

impl FaceValidation {
    /// Apply the acceptance rule to an existing sample.
    pub fn from_sample(sample: &FaceSample, min_confidence: f32) -> Self {
        let is_valid = sample.confidence >= min_confidence;
        Self {
            is_valid,
            colors: is_valid.then_some(sample.colors),
            confidence: sample.confidence,
        }
    }

    /// Accepted validation carrying `colors` at full confidence.
    pub fn accepted(colors: ColorGrid) -> Self {
        Self {
            is_valid: true,
            colors: Some(colors),
            confidence: 1.0,
        }
    }

    /// Rejected validation at the given confidence.
    pub fn rejected(confidence: f32) -> Self {
        Self {
            is_valid: false,
            colors: None,
            confidence,
        }
    }
}

/// Samples a face and applies the binary confidence gate.
#[derive(Clone, Debug, Default)]
pub struct FaceValidator {
    params: ValidatorParams,
    sampler: FaceSampler,
}

impl FaceValidator {
    pub fn new(params: ValidatorParams) -> Self {
        let sampler = FaceSampler::new(params.classifier.clone());
        Self { params, sampler }
    }

    #[inline]
    pub fn params(&self) -> &ValidatorParams {
        &self.params
    }

    #[inline]
    pub fn sampler(&self) -> &FaceSampler {
        &self.sampler
    }

    /// Sample `image` and accept it when confidence ≥ `min_confidence`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, image), fields(width = image.width, height = image.height))
    )]
    pub fn validate(&self, image: &RgbImageView<'_>) -> FaceValidation {
        self.validate_detailed(image).0
    }

    /// Like [`FaceValidator::validate`], also returning the raw sample.
    pub fn validate_detailed(&self, image: &RgbImageView<'_>) -> (FaceValidation, FaceSample) {
        let sample = self.sampler.sample(image);
        let validation = FaceValidation::from_sample(&sample, self.params.min_confidence);
        if validation.is_valid {
            log::debug!(
                "face accepted: {}/9 confident cells",
                sample.confident_cells
            );
        } else {
            log::warn!(
                "face rejected: confidence {:.3} below {:.2} ({}/9 confident cells)",
                sample.confidence,
                self.params.min_confidence,
                sample.confident_cells
            );
        }
        (validation, sample)
    }
}
