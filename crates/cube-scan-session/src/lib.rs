//! Cube capture session.
//!
//! A session owns exactly six faces. Each face moves from "uncaptured" to
//! "captured + validated/unvalidated" through the pure transition
//! [`Face::with_validation`]; the session applies those transitions as atomic
//! replacements and drops results that were superseded by a newer capture.
//!
//! Completeness is never stored: [`CubeSession::is_complete`] recomputes it
//! from the faces with [`is_cube_complete`].

mod completeness;
mod error;
mod face;
mod session;
mod shared;

pub use completeness::{color_counts, is_cube_complete, STICKERS_PER_COLOR};
pub use error::SessionError;
pub use face::Face;
pub use session::{ApplyOutcome, CaptureTicket, CubeSession};
pub use shared::SharedSession;
