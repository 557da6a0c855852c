//! Face-color resolution.

use smallvec::SmallVec;
use tumblemath::prelude::*;

use crate::{ColorScheme, CubieId, Face, PerFace, Rgb};

/// Minimum dot product between a rotated sticker normal and a world axis for
/// the sticker to count as facing that axis.
pub const ALIGNMENT_THRESHOLD: Float = 0.9;

/// Which sticker of a cubie faces each world-axis direction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StickerResolution {
    /// For each world direction, the home face of the sticker pointing that
    /// way, if any.
    pub faces: PerFace<Option<Face>>,
    /// Stickers (identified by home face) that do not point along any world
    /// axis, or that collide with another sticker on the same axis.
    pub unaligned: SmallVec<[Face; 3]>,
}

impl StickerResolution {
    /// Returns whether every sticker was assigned a world direction.
    pub fn is_aligned(&self) -> bool {
        self.unaligned.is_empty()
    }

    /// Returns the color visible in each world direction.
    pub fn colors(&self, scheme: &ColorScheme) -> PerFace<Option<Rgb>> {
        self.faces.map(|home| home.map(|face| scheme[face]))
    }
}

/// Determines which world direction each sticker of a cubie faces, given the
/// cubie's orientation.
///
/// Each sticker's outward normal is rotated by `orientation` and assigned to
/// the world axis whose dot product with it exceeds [`ALIGNMENT_THRESHOLD`].
pub fn resolve_stickers(id: CubieId, orientation: Quaternion<Float>) -> StickerResolution {
    let mut ret = StickerResolution::default();

    for sticker in id.sticker_faces() {
        let normal = orientation.rotate_vector(sticker.normal());
        let mut matches = Face::iter().filter(|dir| normal.dot(dir.normal()) > ALIGNMENT_THRESHOLD);
        match (matches.next(), matches.next()) {
            (Some(dir), None) if ret.faces[dir].is_none() => ret.faces[dir] = Some(sticker),
            _ => ret.unaligned.push(sticker),
        }
    }

    ret
}

/// Returns the color visible in each world direction for a cubie at rest.
///
/// `orientation` must be a multiple of 90 degrees around the world axes. A
/// sticker that cannot be assigned a direction indicates an orientation
/// tracking bug.
pub fn resolve_sticker_colors(
    id: CubieId,
    orientation: Quaternion<Float>,
    scheme: &ColorScheme,
) -> PerFace<Option<Rgb>> {
    let resolution = resolve_stickers(id, orientation);
    if !resolution.is_aligned() {
        tumblemath::debug_panic!(
            "{id} has unaligned stickers {:?} at orientation {orientation:?}",
            resolution.unaligned,
        );
    }
    resolution.colors(scheme)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{FaceMove, Position};

    #[test]
    fn test_identity_corner() {
        let id = CubieId::new(Position([1, 1, -1]));
        let resolution = resolve_stickers(id, identity_rotation());
        assert!(resolution.is_aligned());
        assert_eq!(resolution.faces[Face::Right], Some(Face::Right));
        assert_eq!(resolution.faces[Face::Up], Some(Face::Up));
        assert_eq!(resolution.faces[Face::Back], Some(Face::Back));
        assert_eq!(resolution.faces[Face::Left], None);
        assert_eq!(resolution.faces[Face::Down], None);
        assert_eq!(resolution.faces[Face::Front], None);
    }

    #[test]
    fn test_core_has_no_stickers() {
        let resolution = resolve_stickers(CubieId::new(Position::CORE), identity_rotation());
        assert!(resolution.is_aligned());
        assert!(resolution.faces.iter().all(|(_, f)| f.is_none()));
    }

    #[test]
    fn test_half_turn_is_unaligned() {
        let id = CubieId::new(Position([1, 1, 1]));
        let halfway = FaceMove::cw(Face::Right).partial_rotation(0.5);
        let resolution = resolve_stickers(id, halfway);
        // The right sticker stays on the rotation axis. The other two are at
        // 45 degrees to every world axis.
        assert_eq!(resolution.faces[Face::Right], Some(Face::Right));
        assert_eq!(resolution.unaligned.len(), 2);
    }

    #[test]
    fn test_quarter_turn_colors() {
        let scheme = ColorScheme::default();
        let id = CubieId::new(Position([0, 1, 0]));
        let colors = resolve_sticker_colors(id, FaceMove::ccw(Face::Right).rotation(), &scheme);
        assert_eq!(colors[Face::Front], Some(scheme[Face::Up]));
        assert_eq!(colors[Face::Up], None);
    }
}
