use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

/// Preferences for face-turn animations.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one quarter turn, in seconds. Zero or negative values make
    /// turns complete on the next frame.
    pub twist_duration: f32,
    /// Easing applied to turn progress.
    pub twist_interpolation: InterpolateFn,
}

/// Preferences for the slow rotation of the whole cube.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AmbientPreferences {
    /// Angular speed around the vertical axis, in radians per second.
    pub idle_speed: f32,
    /// Angular speed while the pointer hovers over the cube.
    pub hover_speed: f32,
}

impl AmbientPreferences {
    /// Returns the angular speed for the given hover state.
    pub fn speed(&self, hovered: bool) -> f32 {
        match hovered {
            true => self.hover_speed,
            false => self.idle_speed,
        }
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize,
        Deserialize,
        Debug,
        Default,
        Copy,
        Clone,
        PartialEq,
        Eq,
        Hash,
        strum::VariantArray,
        strum::Display,
    )]
    #[serde(rename_all = "snake_case")]
    #[strum(serialize_all = "snake_case")]
    pub enum InterpolateFn {
        Lerp,
        Cosine,
        Cubic,
        #[default]
        EaseInOutCubic,
        Circular,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::Cubic => (3.0 - 2.0 * t) * t * t,

                Self::EaseInOutCubic => {
                    if t < 0.5 {
                        4.0 * t * t * t
                    } else {
                        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                    }
                }

                Self::Circular => {
                    if t < 0.5 {
                        (1.0 - (1.0 - (2.0 * t).powf(2.0)).sqrt()) * 0.5
                    } else {
                        (1.0 + (1.0 - (-2.0 * t + 2.0).powf(2.0)).sqrt()) * 0.5
                    }
                }
            }
        }
    }

}
