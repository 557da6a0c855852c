use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tumblemath::prelude::*;

use crate::Face;

/// Lattice coordinate in `{-1, 0, 1}³`.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Position(pub [i8; 3]);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

impl Index<Axis> for Position {
    type Output = i8;

    fn index(&self, axis: Axis) -> &i8 {
        &self.0[axis.idx()]
    }
}

impl Position {
    /// Returns the position at the center of the cube.
    pub const CORE: Position = Position([0; 3]);

    /// Returns an iterator over all 27 positions, X varying fastest.
    pub fn iter() -> impl Iterator<Item = Position> {
        lattice_points().map(Position)
    }

    /// Returns the index of this position in the order of [`Position::iter()`].
    pub fn idx(self) -> usize {
        lattice_index(self.0)
    }

    /// Returns the position as a floating-point vector.
    pub fn to_vector(self) -> Vector3<Float> {
        lattice_to_vector(self.0)
    }

    /// Rounds a rotated vector back onto the lattice.
    ///
    /// Returns `None` if the vector is not within `EPSILON` of a lattice point.
    pub fn from_vector_rounded(v: Vector3<Float>) -> Option<Self> {
        round_to_lattice(v).map(Position)
    }

    /// Returns the faces of the cube that this position touches. A corner
    /// touches three faces, an edge two, a center one, and the core none.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Axis::iter().filter_map(move |axis| Some(Face::new(axis, Sign::of_coord(self[axis])?)))
    }
}

/// Identity of a cubie, given by the position it occupies in the solved cube.
///
/// The home position determines which faces carry stickers.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct CubieId(Position);

impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cubie {}", self.0)
    }
}

impl CubieId {
    /// Returns the ID of the cubie whose home is `home`.
    pub fn new(home: Position) -> Self {
        Self(home)
    }
    /// Returns the position of this cubie in the solved cube.
    pub fn home(self) -> Position {
        self.0
    }
    /// Returns the faces that carry stickers on this cubie, in their
    /// unrotated directions.
    pub fn sticker_faces(self) -> impl Iterator<Item = Face> {
        self.0.faces()
    }
    /// Returns the number of stickers on this cubie.
    pub fn sticker_count(self) -> usize {
        self.sticker_faces().count()
    }
}

/// One of the 27 small cubes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cubie {
    /// Fixed identity.
    pub id: CubieId,
    /// Current lattice slot.
    pub position: Position,
    /// Rotation accumulated over all committed moves, relative to the
    /// cubie's initial orientation.
    pub orientation: Quaternion<Float>,
}

impl Cubie {
    /// Returns the cubie that starts at `home` with identity orientation.
    pub fn new(home: Position) -> Self {
        Self {
            id: CubieId::new(home),
            position: home,
            orientation: identity_rotation(),
        }
    }
}
