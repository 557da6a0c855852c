use std::fmt;

use tumblemath::prelude::*;

use crate::{Face, Position};

/// Quarter turn of the nine cubies in one face layer.
///
/// The rotation axis is the face's outward normal. [`Sign::Pos`] rotates +90°
/// by the right-hand rule, which is counterclockwise when looking at the face
/// from outside the cube. Standard notation calls the clockwise turn `R` and
/// the counterclockwise turn `R'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceMove {
    /// Face whose layer turns.
    pub face: Face,
    /// Direction of the turn around the face's outward normal.
    pub direction: Sign,
}

impl fmt::Display for FaceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Sign::Neg => write!(f, "{}", self.face),
            Sign::Pos => write!(f, "{}'", self.face),
        }
    }
}

impl FaceMove {
    /// Returns a quarter turn of `face` in the given direction.
    pub fn new(face: Face, direction: Sign) -> Self {
        Self { face, direction }
    }
    /// Returns a clockwise quarter turn of `face`, as seen from outside.
    pub fn cw(face: Face) -> Self {
        Self::new(face, Sign::Neg)
    }
    /// Returns a counterclockwise quarter turn of `face`, as seen from outside.
    pub fn ccw(face: Face) -> Self {
        Self::new(face, Sign::Pos)
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.face, -self.direction)
    }

    /// Returns the rotation axis.
    pub fn axis(self) -> Vector3<Float> {
        self.face.normal()
    }
    /// Returns the signed angle of the full move.
    pub fn angle(self) -> Rad<Float> {
        Rad(std::f32::consts::FRAC_PI_2 * self.direction)
    }
    /// Returns the rotation of the full move.
    pub fn rotation(self) -> Quaternion<Float> {
        quarter_turn(self.axis(), self.direction)
    }
    /// Returns the rotation after `portion` of the move has elapsed. `portion`
    /// is usually in the range 0.0 to 1.0.
    pub fn partial_rotation(self, portion: Float) -> Quaternion<Float> {
        axis_angle(self.axis(), self.angle() * portion)
    }

    /// Returns whether a cubie at `position` is moved by this move.
    pub fn affects(self, position: Position) -> bool {
        self.face.contains(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_rotation_endpoints() {
        let mv = FaceMove::ccw(Face::Up);
        assert!(rotations_approx_eq(mv.partial_rotation(0.0), identity_rotation()));
        assert!(rotations_approx_eq(mv.partial_rotation(1.0), mv.rotation()));
        let half = mv.partial_rotation(0.5);
        assert!(rotations_approx_eq(half * half, mv.rotation()));
    }

    #[test]
    fn test_display() {
        assert_eq!(FaceMove::cw(Face::Right).to_string(), "R");
        assert_eq!(FaceMove::ccw(Face::Back).to_string(), "B'");
        assert_eq!(FaceMove::cw(Face::Left).rev(), FaceMove::ccw(Face::Left));
    }
}
