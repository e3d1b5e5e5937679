use serde::{Deserialize, Serialize};
use std::fmt;

/// Face identity errors.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceIdError {
    #[error("face id must be in 1..=6, got {0}")]
    OutOfRange(u8),
}

/// Identity of one of the six cube faces (`1..=6`).
///
/// Serialized as the bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FaceId(u8);

impl FaceId {
    pub const FRONT: FaceId = FaceId(1);
    pub const BACK: FaceId = FaceId(2);
    pub const LEFT: FaceId = FaceId(3);
    pub const RIGHT: FaceId = FaceId(4);
    pub const TOP: FaceId = FaceId(5);
    pub const BOTTOM: FaceId = FaceId(6);

    /// All face ids in ascending order.
    pub const ALL: [FaceId; 6] = [
        FaceId::FRONT,
        FaceId::BACK,
        FaceId::LEFT,
        FaceId::RIGHT,
        FaceId::TOP,
        FaceId::BOTTOM,
    ];

    pub fn new(id: u8) -> Result<Self, FaceIdError> {
        if (1..=6).contains(&id) {
            Ok(Self(id))
        } else {
            Err(FaceIdError::OutOfRange(id))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot, handy for fixed-size per-face arrays.
    #[inline]
    pub fn slot(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Front",
            2 => "Back",
            3 => "Left",
            4 => "Right",
            5 => "Top",
            _ => "Bottom",
        }
    }
}

impl TryFrom<u8> for FaceId {
    type Error = FaceIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FaceId::new(value)
    }
}

impl From<FaceId> for u8 {
    fn from(id: FaceId) -> Self {
        id.0
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}
