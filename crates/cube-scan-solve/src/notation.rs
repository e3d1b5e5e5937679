//! Face-turn notation.

use crate::NotationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six turnable faces in standard notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveFace {
    #[serde(rename = "F")]
    Front,
    #[serde(rename = "B")]
    Back,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
}

impl MoveFace {
    pub const ALL: [MoveFace; 6] = [
        MoveFace::Front,
        MoveFace::Back,
        MoveFace::Right,
        MoveFace::Left,
        MoveFace::Up,
        MoveFace::Down,
    ];

    pub fn letter(self) -> char {
        match self {
            MoveFace::Front => 'F',
            MoveFace::Back => 'B',
            MoveFace::Right => 'R',
            MoveFace::Left => 'L',
            MoveFace::Up => 'U',
            MoveFace::Down => 'D',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        MoveFace::ALL.into_iter().find(|f| f.letter() == letter)
    }

    /// Display name (`"Front"`, `"Up"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            MoveFace::Front => "Front",
            MoveFace::Back => "Back",
            MoveFace::Right => "Right",
            MoveFace::Left => "Left",
            MoveFace::Up => "Up",
            MoveFace::Down => "Down",
        }
    }

    /// Noun used in step descriptions.
    fn noun(self) -> &'static str {
        match self {
            MoveFace::Front => "front",
            MoveFace::Back => "back",
            MoveFace::Right => "right",
            MoveFace::Left => "left",
            MoveFace::Up => "upper",
            MoveFace::Down => "down",
        }
    }
}

/// Rotation sense of a face turn, seen from the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turn {
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// A single face turn. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: MoveFace,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: MoveFace, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Plain-language instruction, e.g. `"Rotate upper face 180 degrees"`.
    pub fn describe(&self) -> String {
        let sense = match self.turn {
            Turn::Clockwise => "clockwise",
            Turn::CounterClockwise => "counterclockwise",
            Turn::Half => "180 degrees",
        };
        format!("Rotate {} face {}", self.face.noun(), sense)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    /// Strict parse: one face letter optionally followed by `'` or `2`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let mut chars = token.chars();
        let letter = chars.next().ok_or(NotationError::Empty)?;
        let face = MoveFace::from_letter(letter).ok_or(NotationError::UnknownFace(letter))?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Half,
            suffix => {
                return Err(NotationError::InvalidSuffix {
                    token: token.to_string(),
                    suffix: suffix.to_string(),
                })
            }
        };
        Ok(Move { face, turn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_suffixes() {
        assert_eq!(
            "R'".parse::<Move>(),
            Ok(Move::new(MoveFace::Right, Turn::CounterClockwise))
        );
        assert_eq!(
            "U2".parse::<Move>(),
            Ok(Move::new(MoveFace::Up, Turn::Half))
        );
        assert_eq!(
            " F ".parse::<Move>(),
            Ok(Move::new(MoveFace::Front, Turn::Clockwise))
        );
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!("".parse::<Move>(), Err(NotationError::Empty));
        assert_eq!("X".parse::<Move>(), Err(NotationError::UnknownFace('X')));
        assert_eq!(
            "R2'".parse::<Move>(),
            Err(NotationError::InvalidSuffix {
                token: "R2'".into(),
                suffix: "2'".into()
            })
        );
    }

    #[test]
    fn display_matches_notation() {
        for token in ["F", "B'", "R2", "L", "U'", "D2"] {
            let m: Move = token.parse().expect("parse");
            assert_eq!(m.to_string(), token);
        }
    }

    #[test]
    fn descriptions_read_naturally() {
        assert_eq!(
            Move::new(MoveFace::Front, Turn::Clockwise).describe(),
            "Rotate front face clockwise"
        );
        assert_eq!(
            Move::new(MoveFace::Up, Turn::Half).describe(),
            "Rotate upper face 180 degrees"
        );
        assert_eq!(
            Move::new(MoveFace::Down, Turn::CounterClockwise).describe(),
            "Rotate down face counterclockwise"
        );
    }

    #[test]
    fn serde_uses_letters() {
        let json = serde_json::to_string(&Move::new(MoveFace::Left, Turn::CounterClockwise))
            .expect("serialize");
        assert_eq!(json, r#"{"face":"L","turn":"counterclockwise"}"#);
    }
}
