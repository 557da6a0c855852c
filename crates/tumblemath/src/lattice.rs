//! Integer lattice {-1, 0, 1}³ that cubies occupy.

use cgmath::Vector3;

use crate::approx_cmp::to_approx_integer;
use crate::Float;

/// Rounds a single coordinate onto `{-1, 0, 1}`.
///
/// Returns `None` if the coordinate is not within `EPSILON` of one of those
/// values.
pub fn round_lattice_coord(f: Float) -> Option<i8> {
    match to_approx_integer(f)? {
        i @ -1..=1 => Some(i as i8),
        _ => None,
    }
}

/// Rounds a vector onto the lattice `{-1, 0, 1}³`.
///
/// Returns `None` if any component is off the lattice.
pub fn round_to_lattice(v: Vector3<Float>) -> Option<[i8; 3]> {
    Some([
        round_lattice_coord(v.x)?,
        round_lattice_coord(v.y)?,
        round_lattice_coord(v.z)?,
    ])
}

/// Converts a lattice point to a floating-point vector.
pub fn lattice_to_vector(p: [i8; 3]) -> Vector3<Float> {
    Vector3::new(p[0] as Float, p[1] as Float, p[2] as Float)
}

/// Returns all 27 lattice points, X varying fastest.
pub fn lattice_points() -> impl Iterator<Item = [i8; 3]> {
    (-1..=1).flat_map(|z| (-1..=1).flat_map(move |y| (-1..=1).map(move |x| [x, y, z])))
}

/// Returns the index of a lattice point in the order of [`lattice_points()`].
pub fn lattice_index(p: [i8; 3]) -> usize {
    let [x, y, z] = p.map(|c| (c + 1) as usize);
    x + 3 * y + 9 * z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_lattice() {
        assert_eq!(
            round_to_lattice(Vector3::new(0.99999994, -1.0000001, 1.2e-8)),
            Some([1, -1, 0]),
        );
        assert_eq!(round_to_lattice(Vector3::new(2.0, 0.0, 0.0)), None);
        assert_eq!(round_to_lattice(Vector3::new(0.5, 0.0, 0.0)), None);
    }

    #[test]
    fn test_lattice_index_matches_iteration_order() {
        for (i, p) in lattice_points().enumerate() {
            assert_eq!(lattice_index(p), i);
        }
        assert_eq!(lattice_points().count(), 27);
    }
}
