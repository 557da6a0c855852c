//! Quaternion helpers for rotations that are multiples of 90 degrees.

use std::f32::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Matrix3, One, Quaternion, Rad, Rotation3, Vector3};

use crate::approx_cmp::{approx_eq, to_approx_integer};
use crate::{Float, Sign};

/// Returns the identity rotation.
pub fn identity_rotation() -> Quaternion<Float> {
    Quaternion::one()
}

/// Returns a rotation of `angle` around `axis` (which must be normalized),
/// using the right-hand rule.
pub fn axis_angle(axis: Vector3<Float>, angle: Rad<Float>) -> Quaternion<Float> {
    Quaternion::from_axis_angle(axis, angle)
}

/// Returns a quarter turn around `axis` (which must be normalized). A positive
/// sign rotates counterclockwise when looking down `axis` toward the origin.
pub fn quarter_turn(axis: Vector3<Float>, sign: Sign) -> Quaternion<Float> {
    axis_angle(axis, Rad(FRAC_PI_2 * sign))
}

/// Returns `q` or `-q`, whichever has a nonnegative scalar part. Both represent
/// the same rotation. Ties (scalar part zero) are broken by the first nonzero
/// vector component.
pub fn canonicalize_rotation(q: Quaternion<Float>) -> Quaternion<Float> {
    let leading = [q.s, q.v.x, q.v.y, q.v.z]
        .into_iter()
        .find(|c| !approx_eq(c, &0.0))
        .unwrap_or(1.0);
    if leading < 0.0 { -q } else { q }
}

/// Snaps a rotation to the nearest of the 24 rotational symmetries of a cube
/// and canonicalizes its sign.
///
/// Returns `None` if the rotation's matrix does not have integer entries
/// within `EPSILON`, meaning it is not a multiple of 90 degrees around the
/// world axes.
pub fn snap_to_cube_symmetry(q: Quaternion<Float>) -> Option<Quaternion<Float>> {
    let m: [[Float; 3]; 3] = Matrix3::from(q.normalize()).into();
    let mut snapped = [[0.0; 3]; 3];
    for (snapped_col, col) in snapped.iter_mut().zip(m) {
        for (snapped_entry, entry) in snapped_col.iter_mut().zip(col) {
            *snapped_entry = to_approx_integer(entry)? as Float;
        }
    }
    let snapped = Quaternion::from(Matrix3::from(snapped));
    Some(canonicalize_rotation(snapped.normalize()))
}

/// Returns whether two quaternions represent approximately the same rotation.
///
/// `q` and `-q` are considered equal.
pub fn rotations_approx_eq(a: Quaternion<Float>, b: Quaternion<Float>) -> bool {
    approx_eq(&a.normalize().dot(b.normalize()).abs(), &1.0)
}
