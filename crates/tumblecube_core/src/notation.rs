//! Cyclic move scripts written in standard cube notation.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Face, FaceMove};

/// Error parsing a move sequence.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The sequence contains no moves.
    #[error("move sequence is empty")]
    Empty,
    /// A token does not start with a face letter.
    #[error("unknown face {0:?} in move {1:?}; expected one of R, L, U, D, F, B")]
    UnknownFace(char, String),
    /// A token has an unrecognized suffix after the face letter.
    #[error("unknown suffix {0:?} in move {1:?}; expected nothing, ' or 2")]
    UnknownSuffix(String, String),
}

/// Fixed, non-empty list of face moves.
///
/// Parsed from whitespace-separated tokens like `R`, `U'`, or `F2`. A `2`
/// suffix expands to two clockwise quarter turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSequence(Vec<FaceMove>);

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut moves = vec![];
        for token in s.split_whitespace() {
            let mut chars = token.chars();
            let face_char = chars.next().ok_or(NotationError::Empty)?;
            let face = Face::from_symbol(face_char)
                .ok_or_else(|| NotationError::UnknownFace(face_char, token.to_owned()))?;
            match chars.as_str() {
                "" => moves.push(FaceMove::cw(face)),
                "'" => moves.push(FaceMove::ccw(face)),
                "2" => moves.extend([FaceMove::cw(face); 2]),
                suffix => {
                    return Err(NotationError::UnknownSuffix(
                        suffix.to_owned(),
                        token.to_owned(),
                    ));
                }
            }
        }
        Self::new(moves)
    }
}

impl Serialize for MoveSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_string().serialize(serializer)
    }
}
impl<'de> Deserialize<'de> for MoveSequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}

#[allow(clippy::len_without_is_empty)] // never empty
impl MoveSequence {
    /// Constructs a sequence from a non-empty list of moves.
    pub fn new(moves: Vec<FaceMove>) -> Result<Self, NotationError> {
        match moves.is_empty() {
            true => Err(NotationError::Empty),
            false => Ok(Self(moves)),
        }
    }

    /// Returns the number of moves, which is always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the move at `index`, wrapping around the end of the sequence.
    pub fn get_cyclic(&self, index: usize) -> FaceMove {
        self.0[index % self.0.len()]
    }

    /// Returns the moves in order.
    pub fn moves(&self) -> &[FaceMove] {
        &self.0
    }

    /// Returns the sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(|mv| mv.rev()).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let seq: MoveSequence = "R U R' U'".parse().unwrap();
        assert_eq!(
            seq.moves(),
            &[
                FaceMove::cw(Face::Right),
                FaceMove::cw(Face::Up),
                FaceMove::ccw(Face::Right),
                FaceMove::ccw(Face::Up),
            ],
        );
        assert_eq!(seq.to_string(), "R U R' U'");
    }

    #[test]
    fn test_double_turn_expands() {
        let seq: MoveSequence = "  F2\tB ".parse().unwrap();
        assert_eq!(seq.to_string(), "F F B");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.get_cyclic(4), FaceMove::cw(Face::Front));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<MoveSequence>(), Err(NotationError::Empty));
        assert_eq!("   ".parse::<MoveSequence>(), Err(NotationError::Empty));
        assert_eq!(
            "R x".parse::<MoveSequence>(),
            Err(NotationError::UnknownFace('x', "x".to_owned())),
        );
        assert_eq!(
            "R3".parse::<MoveSequence>(),
            Err(NotationError::UnknownSuffix("3".to_owned(), "R3".to_owned())),
        );
    }

    #[test]
    fn test_inverse() {
        let seq: MoveSequence = "R U F'".parse().unwrap();
        assert_eq!(seq.inverse().to_string(), "F U' R'");
    }
}
