/// Strict notation parsing errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move token")]
    Empty,
    #[error("unknown face letter '{0}'")]
    UnknownFace(char),
    #[error("invalid turn suffix '{suffix}' in move token '{token}'")]
    InvalidSuffix { token: String, suffix: String },
}

/// Errors returned when asking for a solution.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("cube is not complete ({validated}/6 faces validated)")]
    CubeIncomplete { validated: usize },
}
