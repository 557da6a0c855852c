use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut, Neg};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tumblemath::prelude::*;

use crate::Position;

/// Face of the cube, which also names one of the six world-axis directions.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// +X
    Right,
    /// -X
    Left,
    /// +Y
    Up,
    /// -Y
    Down,
    /// +Z
    Front,
    /// -Z
    Back,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Neg for Face {
    type Output = Face;

    fn neg(self) -> Self::Output {
        Face::new(self.axis(), -self.sign())
    }
}

impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Returns the face on `axis` with outward normal pointing toward `sign`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Face::Right,
            (Axis::X, Sign::Neg) => Face::Left,
            (Axis::Y, Sign::Pos) => Face::Up,
            (Axis::Y, Sign::Neg) => Face::Down,
            (Axis::Z, Sign::Pos) => Face::Front,
            (Axis::Z, Sign::Neg) => Face::Back,
        }
    }

    /// Returns an iterator over all faces.
    pub fn iter() -> impl Iterator<Item = Face> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns an integer index for this face, in the order of
    /// [`Face::iter()`].
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Returns the sign of this face along its perpendicular axis.
    pub fn sign(self) -> Sign {
        match self {
            Face::Right | Face::Up | Face::Front => Sign::Pos,
            Face::Left | Face::Down | Face::Back => Sign::Neg,
        }
    }

    /// Returns the outward unit normal of this face.
    pub fn normal(self) -> Vector3<Float> {
        self.axis().unit_vector() * self.sign().to_num::<Float>()
    }

    /// Returns whether `position` lies in the layer belonging to this face.
    pub fn contains(self, position: Position) -> bool {
        position[self.axis()] == self.sign().to_num::<i8>()
    }

    /// Returns the letter used for this face in move notation.
    pub fn symbol(self) -> char {
        match self {
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Returns the face with the given notation letter.
    pub fn from_symbol(c: char) -> Option<Self> {
        Face::iter().find(|f| f.symbol() == c)
    }
}

/// Value for each face of the cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>([T; Face::COUNT]);

impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face.idx()]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face.idx()]
    }
}

impl<T> PerFace<T> {
    /// Constructs a table by calling `f` on each face.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        let mut faces = Face::iter();
        Self(std::array::from_fn(|_| {
            f(faces.next().expect("face count mismatch"))
        }))
    }

    /// Returns an iterator over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::iter().zip(&self.0)
    }

    /// Applies `f` to each value.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PerFace<U> {
        PerFace(self.0.map(f))
    }
}

impl<T: Serialize> Serialize for PerFace<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
impl<'de, T: Deserialize<'de>> Deserialize<'de> for PerFace<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let mut map = BTreeMap::<Face, T>::deserialize(deserializer)?;
        if let Some(face) = Face::iter().find(|face| !map.contains_key(face)) {
            return Err(D::Error::custom(format!("missing value for face {face:?}")));
        }
        let values: Vec<T> = Face::iter().filter_map(|face| map.remove(&face)).collect();
        let values = <[T; Face::COUNT]>::try_from(values)
            .map_err(|_| D::Error::custom("wrong number of faces"))?;
        Ok(Self(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_axis_sign_roundtrip() {
        for face in Face::iter() {
            assert_eq!(Face::new(face.axis(), face.sign()), face);
            assert_eq!(-(-face), face);
            assert_ne!(-face, face);
            assert_eq!(Face::from_symbol(face.symbol()), Some(face));
        }
    }

    #[test]
    fn test_face_contains() {
        assert!(Face::Right.contains(Position([1, -1, 0])));
        assert!(!Face::Right.contains(Position([0, -1, 0])));
        assert!(Face::Back.contains(Position([0, 0, -1])));
        assert_eq!(
            crate::CubeState::new()
                .cubies()
                .iter()
                .filter(|c| Face::Down.contains(c.position))
                .count(),
            9,
        );
    }

    #[test]
    fn test_per_face_serde_requires_every_face() {
        let json = r#"{"right":1,"left":2,"up":3,"down":4,"front":5,"back":6}"#;
        let table: PerFace<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(table[Face::Front], 5);
        assert_eq!(serde_json::to_string(&table).unwrap(), json);

        let partial = r#"{"right":1,"left":2}"#;
        assert!(serde_json::from_str::<PerFace<u8>>(partial).is_err());
    }
}
