//! Axis, sign, and quaternion primitives for a 3x3x3 cube lattice.

pub use {approx, cgmath, num_traits as num};

/// Floating-point type used for geometry.
pub type Float = f32;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.0001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

/// Panics in debug builds and logs an error in release builds.
///
/// Used for numerical invariants whose violation indicates a logic bug rather
/// than a recoverable condition.
#[macro_export]
macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => $crate::__log::error!($($tok)*),
        }
    };
}

#[doc(hidden)]
pub use log as __log;

pub mod approx_cmp;
pub mod axis;
pub mod lattice;
pub mod rotation;
pub mod sign;

pub use axis::Axis;
pub use sign::Sign;

/// Structs, traits, and constants.
pub mod prelude {
    pub use cgmath::{InnerSpace, One, Quaternion, Rad, Rotation, Rotation3, Vector3, Zero};

    pub use crate::approx_cmp::*;
    pub use crate::axis::Axis;
    pub use crate::lattice::*;
    pub use crate::rotation::*;
    pub use crate::sign::Sign;
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;
