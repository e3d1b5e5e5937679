//! JSON configuration and report helpers for scanning a whole cube.

use crate::core::{Color, FaceId};
use crate::face::{FaceValidation, FaceValidator, ValidatorParams};
use crate::scan::{load_rgb, validate_face_detailed};
use crate::session::{ApplyOutcome, CubeSession, SessionError};
use crate::solve::{generate, SolveStep};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[cfg(feature = "tracing")]
use tracing::instrument;

#[derive(thiserror::Error, Debug)]
pub enum ScanIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One face photo to scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceImageConfig {
    pub id: FaceId,
    pub image_path: String,
}

/// Configuration for a full six-face scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub faces: Vec<FaceImageConfig>,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub validator: Option<ValidatorParams>,
}

impl ScanConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("cube_scan_report.json"))
    }

    /// Build the face validator, applying overrides from the config.
    pub fn build_validator(&self) -> FaceValidator {
        FaceValidator::new(self.validator.clone().unwrap_or_default())
    }
}

/// Per-face section of a [`ScanReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceReport {
    pub id: FaceId,
    pub name: String,
    pub image_path: String,
    #[serde(default)]
    pub validation: Option<FaceValidation>,
    #[serde(default)]
    pub confident_cells: Option<usize>,
    #[serde(default)]
    pub stale: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of a full scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub config_path: String,
    pub faces: Vec<FaceReport>,
    pub captured: usize,
    pub validated: usize,
    pub color_counts: BTreeMap<Color, usize>,
    pub is_complete: bool,
    #[serde(default)]
    pub solution: Option<Vec<SolveStep>>,
}

impl ScanReport {
    /// Fill the session-derived fields from the final session state.
    fn finish(&mut self, session: &CubeSession) {
        self.captured = session.captured_count();
        self.validated = session.validated_count();
        self.color_counts = session.color_counts().iter().collect();
        self.is_complete = session.is_complete();
        self.solution = self.is_complete.then(generate);
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ScanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Relative image paths are resolved against the config file's directory.
fn resolve_image_path(config_path: &Path, image_path: &str) -> PathBuf {
    let p = Path::new(image_path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    config_path
        .parent()
        .map(|dir| dir.join(p))
        .unwrap_or_else(|| p.to_path_buf())
}

/// Scan every face listed in `cfg` into a fresh session.
///
/// Faces whose photo cannot be decoded are reported with an error and left
/// untouched in the session. When a face id is listed more than once, the
/// last entry whose photo decodes wins and earlier ones are reported stale.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(cfg), fields(faces = cfg.faces.len())))]
pub fn scan_cube(
    cfg: &ScanConfig,
    config_path: &Path,
) -> Result<(CubeSession, ScanReport), SessionError> {
    let validator = cfg.build_validator();
    let mut session = CubeSession::new();

    let mut faces = Vec::with_capacity(cfg.faces.len());
    let mut scanned = Vec::with_capacity(cfg.faces.len());
    for face_cfg in &cfg.faces {
        let mut report = FaceReport {
            id: face_cfg.id,
            name: face_cfg.id.name().to_string(),
            image_path: face_cfg.image_path.clone(),
            validation: None,
            confident_cells: None,
            stale: false,
            error: None,
        };

        let path = resolve_image_path(config_path, &face_cfg.image_path);
        match load_rgb(&path).and_then(|img| validate_face_detailed(&img, &validator)) {
            Ok((validation, sample)) => {
                report.validation = Some(validation);
                report.confident_cells = Some(sample.confident_cells);
                scanned.push((faces.len(), validation));
            }
            Err(err) => {
                log::warn!("face {}: {}", face_cfg.id, err);
                report.error = Some(err.to_string());
            }
        }
        faces.push(report);
    }

    // Tickets are issued only for decoded photos, so a later duplicate
    // supersedes an earlier one only when it can replace it.
    let tickets: Vec<_> = scanned
        .iter()
        .map(|&(i, _)| session.begin_capture(faces[i].id))
        .collect();
    for ((i, validation), ticket) in scanned.into_iter().zip(tickets) {
        let image_ref = Some(faces[i].image_path.clone());
        let outcome = session.apply(ticket, &validation, image_ref)?;
        faces[i].stale = matches!(outcome, ApplyOutcome::Stale { .. });
    }

    let mut report = ScanReport {
        config_path: config_path.to_string_lossy().into_owned(),
        faces,
        captured: 0,
        validated: 0,
        color_counts: BTreeMap::new(),
        is_complete: false,
        solution: None,
    };
    report.finish(&session);
    Ok((session, report))
}

/// Load a config from disk and scan it.
pub fn scan_cube_from_config(
    config_path: impl AsRef<Path>,
) -> Result<(ScanConfig, CubeSession, ScanReport), ScanFlowError> {
    let config_path = config_path.as_ref();
    let cfg = ScanConfig::load_json(config_path)?;
    let (session, report) = scan_cube(&cfg, config_path)?;
    Ok((cfg, session, report))
}

/// Errors of the config-driven scan flow.
#[derive(thiserror::Error, Debug)]
pub enum ScanFlowError {
    #[error(transparent)]
    Io(#[from] ScanIoError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
