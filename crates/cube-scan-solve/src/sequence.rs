//! The fixed canonical move list.

use crate::gesture::{annotate_move, Direction, HandGesture};
use crate::notation::{Move, MoveFace, MoveFace::*, Turn};
use crate::SolveError;
use cube_scan_session::CubeSession;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Layer-by-layer solving stage a step belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    WhiteCross,
    WhiteCorners,
    MiddleLayer,
    YellowCross,
    YellowCorners,
    FinalLayer,
}

const fn cw(face: MoveFace) -> Move {
    Move::new(face, Turn::Clockwise)
}

const fn ccw(face: MoveFace) -> Move {
    Move::new(face, Turn::CounterClockwise)
}

const fn half(face: MoveFace) -> Move {
    Move::new(face, Turn::Half)
}

static WHITE_CROSS: [Move; 4] = [cw(Front), cw(Right), cw(Up), ccw(Right)];
static WHITE_CORNERS: [Move; 4] = [cw(Right), cw(Down), ccw(Right), ccw(Down)];
static MIDDLE_LAYER: [Move; 8] = [
    cw(Up),
    cw(Right),
    ccw(Up),
    ccw(Right),
    ccw(Up),
    ccw(Front),
    cw(Up),
    cw(Front),
];
static YELLOW_CROSS: [Move; 6] = [
    cw(Front),
    cw(Right),
    cw(Up),
    ccw(Right),
    ccw(Up),
    ccw(Front),
];
static YELLOW_CORNERS: [Move; 7] = [
    cw(Right),
    cw(Up),
    ccw(Right),
    cw(Up),
    cw(Right),
    half(Up),
    ccw(Right),
];
static FINAL_LAYER: [Move; 12] = [
    cw(Right),
    ccw(Up),
    cw(Right),
    cw(Front),
    cw(Right),
    ccw(Front),
    cw(Right),
    ccw(Up),
    ccw(Right),
    cw(Front),
    cw(Right),
    ccw(Front),
];

static STAGES: [Stage; 6] = [
    Stage::WhiteCross,
    Stage::WhiteCorners,
    Stage::MiddleLayer,
    Stage::YellowCross,
    Stage::YellowCorners,
    Stage::FinalLayer,
];

/// Total number of steps emitted by [`generate`].
pub const STEP_COUNT: usize = 4 + 4 + 8 + 6 + 7 + 12;

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::WhiteCross => "white cross",
            Stage::WhiteCorners => "white corners",
            Stage::MiddleLayer => "middle layer",
            Stage::YellowCross => "yellow cross",
            Stage::YellowCorners => "yellow corners",
            Stage::FinalLayer => "final layer",
        }
    }

    pub fn moves(self) -> &'static [Move] {
        match self {
            Stage::WhiteCross => &WHITE_CROSS,
            Stage::WhiteCorners => &WHITE_CORNERS,
            Stage::MiddleLayer => &MIDDLE_LAYER,
            Stage::YellowCross => &YELLOW_CROSS,
            Stage::YellowCorners => &YELLOW_CORNERS,
            Stage::FinalLayer => &FINAL_LAYER,
        }
    }
}

/// Stages in the order they are emitted.
pub fn stages() -> &'static [Stage] {
    &STAGES
}

/// One numbered instruction of the solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveStep {
    /// 1-based, contiguous.
    pub id: u32,
    pub notation: String,
    pub description: String,
    pub face: String,
    pub direction: Direction,
    pub hand_gesture: HandGesture,
    #[serde(rename = "move")]
    pub mv: Move,
    pub stage: Stage,
}

/// Emit the canonical six-stage sequence with ids `1..=41`.
///
/// The output does not depend on any scanned state and is identical across
/// calls.
#[cfg_attr(feature = "tracing", instrument(level = "info"))]
pub fn generate() -> Vec<SolveStep> {
    let mut steps = Vec::with_capacity(STEP_COUNT);
    for &stage in stages() {
        for mv in stage.moves() {
            let annotation = annotate_move(mv);
            steps.push(SolveStep {
                id: steps.len() as u32 + 1,
                notation: mv.to_string(),
                description: mv.describe(),
                face: annotation.face,
                direction: annotation.direction,
                hand_gesture: annotation.hand_gesture,
                mv: *mv,
                stage,
            });
        }
    }
    log::debug!("generated {} solve steps", steps.len());
    steps
}

/// Generate the solution for a session, refusing incomplete cubes.
pub fn solve(session: &CubeSession) -> Result<Vec<SolveStep>, SolveError> {
    if !session.is_complete() {
        return Err(SolveError::CubeIncomplete {
            validated: session.validated_count(),
        });
    }
    Ok(generate())
}
