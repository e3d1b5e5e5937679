//! High-level facade crate for the `cube-scan-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - (feature-gated) helpers that decode face photos with the `image` crate
//!   and run them through face validation
//! - JSON configuration and report types for scanning a whole cube.
//!
//! ## Quickstart
//!
//! ```no_run
//! use cube_scan::scan;
//! use cube_scan::session::CubeSession;
//! use cube_scan::core::FaceId;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = cube_scan::face::FaceValidator::default();
//! let mut session = CubeSession::new();
//!
//! let img = scan::load_rgb("front.jpg")?;
//! let validation = scan::validate_face(&img, &validator)?;
//! session.capture(FaceId::FRONT, &validation, Some("front.jpg".into()))?;
//!
//! if session.is_complete() {
//!     for step in cube_scan::solve::solve(&session)? {
//!         println!("{:>2}. {} - {}", step.id, step.notation, step.hand_gesture.description);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `cube_scan::core`: palette colors, face ids, 3×3 grids, RGB image views.
//! - `cube_scan::face`: color classification, face sampling and validation.
//! - `cube_scan::session`: six-face session state and completeness checking.
//! - `cube_scan::solve`: notation, canonical solve steps, gestures, playback.
//! - `cube_scan::scan` (feature `image`): decoding helpers on `image::RgbImage`.
//! - `cube_scan::io` (feature `image`): `ScanConfig` / `ScanReport` JSON.

pub use cube_scan_core as core;
pub use cube_scan_face as face;
pub use cube_scan_session as session;
pub use cube_scan_solve as solve;

pub use cube_scan_core::{Color, ColorGrid, FaceId, Rgb};
pub use cube_scan_face::{FaceValidation, FaceValidator, ValidatorParams};
pub use cube_scan_session::CubeSession;
pub use cube_scan_solve::SolveStep;

#[cfg(feature = "image")]
pub mod io;
#[cfg(feature = "image")]
pub mod scan;
