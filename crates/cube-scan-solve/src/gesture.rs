//! Hand-gesture guidance keyed by the turned face.

use crate::notation::{Move, MoveFace, Turn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reported rotation sense of a step.
///
/// Half turns are reported as [`Direction::Clockwise`]; the exact sense stays
/// available on [`Move::turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

impl Direction {
    pub fn of(turn: Turn) -> Self {
        match turn {
            Turn::CounterClockwise => Direction::Counterclockwise,
            Turn::Clockwise | Turn::Half => Direction::Clockwise,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Clockwise => "clockwise",
            Direction::Counterclockwise => "counterclockwise",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Rotate,
    Hold,
    Flip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureDirection {
    Up,
    Down,
    Left,
    Right,
    Clockwise,
    Counterclockwise,
}

impl From<Direction> for GestureDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Clockwise => GestureDirection::Clockwise,
            Direction::Counterclockwise => GestureDirection::Counterclockwise,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

/// How to physically perform a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandGesture {
    #[serde(rename = "type")]
    pub kind: GestureKind,
    pub direction: GestureDirection,
    pub fingers: BTreeSet<Finger>,
    pub description: String,
}

/// Face name, reported direction and gesture for one notation token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub face: String,
    pub direction: Direction,
    pub hand_gesture: HandGesture,
}

struct GestureTemplate {
    face: MoveFace,
    fingers: &'static [Finger],
    /// `{dir}` is replaced by the direction, `{hand}` by the holding hand.
    text: &'static str,
}

static GESTURES: [GestureTemplate; 6] = [
    GestureTemplate {
        face: MoveFace::Front,
        fingers: &[Finger::Thumb, Finger::Index, Finger::Middle],
        text: "Hold the cube with your {hand} hand and rotate the front face {dir} with your fingers",
    },
    GestureTemplate {
        face: MoveFace::Right,
        fingers: &[Finger::Thumb, Finger::Index],
        text: "Use your right thumb and index finger to rotate the right face {dir}",
    },
    GestureTemplate {
        face: MoveFace::Up,
        fingers: &[Finger::Index, Finger::Middle],
        text: "Hold the cube steady and use your fingers to rotate the top face {dir}",
    },
    GestureTemplate {
        face: MoveFace::Left,
        fingers: &[Finger::Thumb, Finger::Index],
        text: "Use your left thumb and index finger to rotate the left face {dir}",
    },
    GestureTemplate {
        face: MoveFace::Back,
        fingers: &[Finger::Thumb, Finger::Middle, Finger::Ring],
        text: "Rotate the cube to access the back face, then rotate it {dir}",
    },
    GestureTemplate {
        face: MoveFace::Down,
        fingers: &[Finger::Thumb, Finger::Index, Finger::Middle],
        text: "Hold the cube from the top and rotate the bottom face {dir}",
    },
];

fn template_for(face: MoveFace) -> &'static GestureTemplate {
    GESTURES
        .iter()
        .find(|t| t.face == face)
        .unwrap_or(&GESTURES[0])
}

fn hand_gesture(face: MoveFace, direction: Direction) -> HandGesture {
    let t = template_for(face);
    let hand = match direction {
        Direction::Counterclockwise => "left",
        Direction::Clockwise => "right",
    };
    HandGesture {
        kind: GestureKind::Rotate,
        direction: direction.into(),
        fingers: t.fingers.iter().copied().collect(),
        description: t
            .text
            .replace("{hand}", hand)
            .replace("{dir}", direction.as_str()),
    }
}

/// Annotate a typed move. Half turns use the clockwise gesture.
pub fn annotate_move(mv: &Move) -> Annotation {
    let direction = Direction::of(mv.turn);
    Annotation {
        face: mv.face.name().to_string(),
        direction,
        hand_gesture: hand_gesture(mv.face, direction),
    }
}

/// Annotate a raw notation token.
///
/// Never fails. Every `'` and `2` is stripped to find the face letter; a token
/// containing `'` is counterclockwise, anything else reports clockwise
/// (including `2`). Anything other than exactly one face letter, including
/// surrounding whitespace, falls back to the Front face.
pub fn annotate(notation: &str) -> Annotation {
    let letters: String = notation
        .chars()
        .filter(|&c| c != '\'' && c != '2')
        .collect();
    let mut it = letters.chars();
    let face = match (it.next(), it.next()) {
        (Some(c), None) => MoveFace::from_letter(c),
        _ => None,
    }
    .unwrap_or_else(|| {
        log::debug!("unknown move token '{notation}', using Front gesture");
        MoveFace::Front
    });

    let turn = if notation.contains('\'') {
        Turn::CounterClockwise
    } else if notation.contains('2') {
        Turn::Half
    } else {
        Turn::Clockwise
    };
    annotate_move(&Move::new(face, turn))
}
