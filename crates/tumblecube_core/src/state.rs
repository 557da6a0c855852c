use itertools::Itertools;
use tumblemath::prelude::*;

use crate::{Cubie, CubieId, Face, FaceMove, Position, resolve_stickers};

/// Position and orientation of all 27 cubies.
///
/// Cubies are stored in the order of their home positions, so a cubie's index
/// never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState {
    cubies: Vec<Cubie>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Returns a solved cube with every cubie at its home position and
    /// identity orientation.
    pub fn new() -> Self {
        Self {
            cubies: Position::iter().map(Cubie::new).collect(),
        }
    }

    /// Returns all cubies, ordered by home position.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Returns the cubie with the given identity.
    pub fn cubie(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.home().idx()]
    }

    /// Returns the cubie currently occupying `position`.
    pub fn cubie_at(&self, position: Position) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position == position)
    }

    /// Returns the state after applying a quarter turn.
    ///
    /// Cubies in the turning layer get their position rotated and rounded
    /// back onto the lattice, and the turn composed onto their orientation in
    /// world space. Other cubies are unchanged.
    #[must_use]
    pub fn apply_move(&self, mv: FaceMove) -> Self {
        log::trace!("applying {mv}");
        let rotation = mv.rotation();

        let cubies = self
            .cubies
            .iter()
            .map(|&cubie| {
                if !mv.affects(cubie.position) {
                    return cubie;
                }

                let rotated = rotation.rotate_vector(cubie.position.to_vector());
                let position = Position::from_vector_rounded(rotated).unwrap_or_else(|| {
                    tumblemath::debug_panic!(
                        "{} rotated off the lattice by {mv}: {rotated:?}",
                        cubie.id,
                    );
                    cubie.position
                });

                let composed = rotation * cubie.orientation;
                let orientation = snap_to_cube_symmetry(composed).unwrap_or_else(|| {
                    tumblemath::debug_panic!(
                        "{} has orientation {composed:?} that is not a cube symmetry",
                        cubie.id,
                    );
                    composed.normalize()
                });

                Cubie {
                    id: cubie.id,
                    position,
                    orientation,
                }
            })
            .collect();

        let ret = Self { cubies };
        debug_assert!(ret.is_bijection(), "{mv} broke the position bijection");
        ret
    }

    /// Returns the state after applying a sequence of quarter turns.
    #[must_use]
    pub fn apply_moves(&self, moves: impl IntoIterator<Item = FaceMove>) -> Self {
        moves
            .into_iter()
            .fold(self.clone(), |state, mv| state.apply_move(mv))
    }

    /// Returns whether every lattice position is occupied by exactly one
    /// cubie.
    pub fn is_bijection(&self) -> bool {
        self.cubies.len() == 27 && self.cubies.iter().map(|c| c.position).all_unique()
    }

    /// Returns whether every visible sticker faces the direction of its home
    /// face. Center cubies turned in place still count as solved.
    pub fn is_solved(&self) -> bool {
        self.cubies.iter().all(|cubie| {
            let resolution = resolve_stickers(cubie.id, cubie.orientation);
            resolution.is_aligned()
                && resolution
                    .faces
                    .iter()
                    .all(|(dir, home)| home.is_none_or(|home| home == dir))
        })
    }

    /// Returns the cubies in the layer of `face`.
    pub fn layer(&self, face: Face) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter().filter(move |c| face.contains(c.position))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_is_solved_bijection() {
        let state = CubeState::new();
        assert_eq!(state.cubies().len(), 27);
        assert!(state.is_bijection());
        assert!(state.is_solved());
        for cubie in state.cubies() {
            assert_eq!(cubie.position, cubie.id.home());
            assert_eq!(state.cubie(cubie.id), cubie);
            assert_eq!(state.cubie_at(cubie.position), Some(cubie));
        }
    }

    #[test]
    fn test_center_turned_in_place_is_solved() {
        let mut state = CubeState::new();
        let center = Position([1, 0, 0]);
        state.cubies[center.idx()].orientation = FaceMove::cw(Face::Right).rotation();
        assert!(state.is_solved());

        // R turns the same center, but also moves the edges and corners.
        let state = CubeState::new().apply_move(FaceMove::cw(Face::Right));
        assert!(!state.is_solved());
        let cubie = state.cubie_at(center).unwrap();
        assert_eq!(cubie.id.home(), center);
        assert!(!rotations_approx_eq(cubie.orientation, identity_rotation()));
    }

    #[test]
    fn test_layer() {
        let state = CubeState::new();
        assert_eq!(state.layer(Face::Front).count(), 9);
        assert!(state.layer(Face::Front).all(|c| c.position[Axis::Z] == 1));
    }
}
