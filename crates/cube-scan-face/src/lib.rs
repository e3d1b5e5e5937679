//! Face color classification and acceptance.
//!
//! Current focus:
//! - nearest-anchor classification of single RGB samples into the 6-color palette,
//! - center-of-cell sampling of a 3×3 grid over a face photo,
//! - a confidence gate that accepts or rejects the sampled face.
//!
//! Image decoding is out of scope; callers hand in a `cube_scan_core::RgbImageView`.

mod classifier;
mod sampler;
mod validator;

pub use classifier::{Classification, ClassifierParams, ColorClassifier, PALETTE};
pub use sampler::{FaceSample, FaceSampler};
pub use validator::{FaceValidation, FaceValidator, ValidatorParams};
