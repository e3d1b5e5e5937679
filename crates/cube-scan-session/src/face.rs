use cube_scan_core::{ColorGrid, FaceId};
use cube_scan_face::FaceValidation;
use serde::Serialize;

/// One cube face as tracked by a session.
///
/// Fields are private so that `validated` can only be true while a full grid
/// is present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    id: FaceId,
    name: &'static str,
    colors: Option<ColorGrid>,
    captured: bool,
    validated: bool,
    /// Opaque reference to the source image (path, URL, ...). Never interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    image_ref: Option<String>,
}

impl Face {
    /// Uncaptured face.
    pub fn new(id: FaceId) -> Self {
        Self {
            id,
            name: id.name(),
            colors: None,
            captured: false,
            validated: false,
            image_ref: None,
        }
    }

    /// Transition to "captured" using a validation outcome.
    ///
    /// The grid is replaced on acceptance and cleared on rejection, so a failed
    /// retake never leaves the previous grid in place.
    #[must_use]
    pub fn with_validation(&self, validation: &FaceValidation, image_ref: Option<String>) -> Face {
        let colors = if validation.is_valid {
            validation.colors
        } else {
            None
        };
        Face {
            id: self.id,
            name: self.name,
            validated: colors.is_some(),
            colors,
            captured: true,
            image_ref,
        }
    }

    #[inline]
    pub fn id(&self) -> FaceId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn colors(&self) -> Option<&ColorGrid> {
        self.colors.as_ref()
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    #[inline]
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_scan_core::Color;

    #[test]
    fn new_face_is_uncaptured() {
        let f = Face::new(FaceId::LEFT);
        assert!(!f.is_captured());
        assert!(!f.is_validated());
        assert!(f.colors().is_none());
        assert_eq!(f.name(), "Left");
    }

    #[test]
    fn accepted_validation_sets_grid() {
        let grid = ColorGrid::uniform(Color::Blue);
        let f = Face::new(FaceId::FRONT)
            .with_validation(&FaceValidation::accepted(grid), Some("front.png".into()));
        assert!(f.is_captured());
        assert!(f.is_validated());
        assert_eq!(f.colors(), Some(&grid));
        assert_eq!(f.image_ref(), Some("front.png"));
    }

    #[test]
    fn rejected_retake_clears_previous_grid() {
        let f = Face::new(FaceId::FRONT)
            .with_validation(&FaceValidation::accepted(ColorGrid::uniform(Color::Red)), None);
        let retake = f.with_validation(&FaceValidation::rejected(0.3), None);
        assert!(retake.is_captured());
        assert!(!retake.is_validated());
        assert!(retake.colors().is_none());
        // The original value is untouched.
        assert!(f.is_validated());
    }

    #[test]
    fn valid_flag_without_grid_is_not_trusted() {
        let bogus = FaceValidation {
            is_valid: true,
            colors: None,
            confidence: 1.0,
        };
        let f = Face::new(FaceId::TOP).with_validation(&bogus, None);
        assert!(f.is_captured());
        assert!(!f.is_validated());
    }
}
