//! Data handed to the renderer each frame.

use serde::{Serialize, Serializer};
use tumblecube_core::{ColorScheme, CubeState, CubieId, FaceMove, PerFace, Position, Rgb};
use tumblemath::prelude::*;

/// Everything a renderer needs to draw one frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RenderData {
    /// Rotation of the whole cube, applied after everything else.
    #[serde(serialize_with = "serialize_quaternion")]
    pub assembly_rotation: Quaternion<Float>,
    /// Twist in flight, if any.
    pub twist: Option<TwistRenderData>,
    /// Per-cubie data, ordered by home position.
    pub cubies: Vec<CubieRenderData>,
}

/// Twist in flight.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TwistRenderData {
    /// Twist in standard notation.
    #[serde(serialize_with = "serialize_display")]
    pub twist: FaceMove,
    /// Raw progress from 0.0 to 1.0.
    pub progress: f32,
}

/// Render data for one cubie.
///
/// A renderer can either draw an axis-aligned cubie at `rest_position` with
/// `stickers` on its faces and then apply `motion` around the origin, or draw
/// it directly at `position` with `orientation`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CubieRenderData {
    /// Fixed identity.
    pub id: CubieId,
    /// Committed lattice position.
    pub rest_position: Position,
    /// Current position including any twist in flight.
    #[serde(serialize_with = "serialize_vector")]
    pub position: Vector3<Float>,
    /// Current orientation including any twist in flight.
    #[serde(serialize_with = "serialize_quaternion")]
    pub orientation: Quaternion<Float>,
    /// Partial rotation of the twist in flight, or identity if this cubie is
    /// not turning.
    #[serde(serialize_with = "serialize_quaternion")]
    pub motion: Quaternion<Float>,
    /// Color facing each world direction at the committed orientation.
    ///
    /// During a twist this is still the mapping from before the twist, so the
    /// stickers must be drawn through `motion` to end up facing the right
    /// way. It switches to the new mapping on the frame the twist commits.
    pub stickers: PerFace<Option<Rgb>>,
}

impl RenderData {
    /// Computes render data for a cube state, an optional twist in flight
    /// with its eased partial rotation, and an ambient rotation.
    pub fn new(
        state: &CubeState,
        twist: Option<(FaceMove, f32, Quaternion<Float>)>,
        assembly_rotation: Quaternion<Float>,
        colors: &ColorScheme,
    ) -> Self {
        let cubies = state
            .cubies()
            .iter()
            .map(|cubie| {
                let motion = match twist {
                    Some((mv, _, partial)) if mv.affects(cubie.position) => partial,
                    _ => identity_rotation(),
                };
                CubieRenderData {
                    id: cubie.id,
                    rest_position: cubie.position,
                    position: motion.rotate_vector(cubie.position.to_vector()),
                    orientation: motion * cubie.orientation,
                    motion,
                    stickers: tumblecube_core::resolve_sticker_colors(
                        cubie.id,
                        cubie.orientation,
                        colors,
                    ),
                }
            })
            .collect();

        Self {
            assembly_rotation,
            twist: twist.map(|(twist, progress, _)| TwistRenderData { twist, progress }),
            cubies,
        }
    }

    /// Returns the render data for the cubie with the given identity.
    pub fn cubie(&self, id: CubieId) -> &CubieRenderData {
        &self.cubies[id.home().idx()]
    }
}

/// Serializes a quaternion as `[x, y, z, w]`.
fn serialize_quaternion<S: Serializer>(q: &Quaternion<Float>, s: S) -> Result<S::Ok, S::Error> {
    [q.v.x, q.v.y, q.v.z, q.s].serialize(s)
}
/// Serializes a vector as `[x, y, z]`.
fn serialize_vector<S: Serializer>(v: &Vector3<Float>, s: S) -> Result<S::Ok, S::Error> {
    [v.x, v.y, v.z].serialize(s)
}
fn serialize_display<S: Serializer>(x: &impl std::fmt::Display, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(x)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tumblecube_core::Face;

    use super::*;

    #[test]
    fn test_mid_twist_render_data() {
        let colors = ColorScheme::default();
        let state = CubeState::new();
        let mv = FaceMove::ccw(Face::Right);
        let partial = mv.partial_rotation(0.5);
        let data = RenderData::new(&state, Some((mv, 0.5, partial)), identity_rotation(), &colors);

        let corner = data.cubie(CubieId::new(Position([1, 1, 1])));
        assert!(rotations_approx_eq(corner.motion, partial));
        // Halfway through +90° about X, (1, 1, 1) is at (1, 0, √2).
        tumblemath::assert_approx_eq!(corner.position, Vector3::new(1.0, 0.0, 2.0_f32.sqrt()));
        // Stickers are resolved at rest.
        assert_eq!(corner.stickers[Face::Up], Some(colors[Face::Up]));

        let other = data.cubie(CubieId::new(Position([-1, 1, 1])));
        assert!(rotations_approx_eq(other.motion, identity_rotation()));
        tumblemath::assert_approx_eq!(other.position, Vector3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_stickers_are_at_rest_until_commit() {
        let colors = ColorScheme::default();
        let state = CubeState::new();
        let mv = FaceMove::ccw(Face::Right);
        let partial = mv.partial_rotation(84.0 / 90.0);
        let data = RenderData::new(&state, Some((mv, 0.97, partial)), identity_rotation(), &colors);

        let corner = data.cubie(CubieId::new(Position([1, 1, 1])));
        assert_eq!(corner.stickers[Face::Up], Some(colors[Face::Up]));
        assert_eq!(corner.stickers[Face::Front], Some(colors[Face::Front]));
        // Drawn through `motion`, the white sticker is almost facing front.
        let white_normal = corner.motion.rotate_vector(Face::Up.normal());
        assert!(white_normal.dot(Face::Front.normal()) > 0.99);

        let committed = RenderData::new(&state.apply_move(mv), None, identity_rotation(), &colors);
        let corner = committed.cubie(CubieId::new(Position([1, 1, 1])));
        assert_eq!(corner.stickers[Face::Front], Some(colors[Face::Up]));
        assert_eq!(corner.stickers[Face::Up], None);
    }

    #[test]
    fn test_json_shape() {
        let data = RenderData::new(
            &CubeState::new(),
            None,
            identity_rotation(),
            &ColorScheme::default(),
        );
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["assembly_rotation"], serde_json::json!([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(json["twist"], serde_json::Value::Null);
        let corner = &json["cubies"][26];
        assert_eq!(corner["id"], serde_json::json!([1, 1, 1]));
        assert_eq!(corner["stickers"]["front"], serde_json::json!("#009b48"));
        assert_eq!(corner["stickers"]["back"], serde_json::Value::Null);
    }
}
