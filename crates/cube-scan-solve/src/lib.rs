//! Solve-step generation for a scanned cube.
//!
//! - `notation`: face-turn tokens (`F`, `R'`, `U2`) and their typed form,
//! - `sequence`: the fixed six-stage canonical move list,
//! - `gesture`: face names, reported directions and hand-gesture guidance,
//! - `playback`: a step cursor for walking a user through the solution.
//!
//! The canonical sequence does not depend on the scanned colors; [`solve`]
//! only checks that the session is complete before emitting it.

mod error;
mod gesture;
mod notation;
mod playback;
mod sequence;

pub use error::{NotationError, SolveError};
pub use gesture::{
    annotate, annotate_move, Annotation, Direction, Finger, GestureDirection, GestureKind,
    HandGesture,
};
pub use notation::{Move, MoveFace, Turn};
pub use playback::SolvePlayback;
pub use sequence::{generate, solve, stages, SolveStep, Stage, STEP_COUNT};
