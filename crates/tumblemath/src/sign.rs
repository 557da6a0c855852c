//! Simple `Sign` type.

use std::cmp::Ordering;
use std::ops::{Mul, Neg};

use num_traits::Signed;

/// Positive or negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive
    #[default]
    Pos = 0,
    /// Negative
    Neg = 1,
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl Mul<Sign> for f32 {
    type Output = Self;

    fn mul(self, rhs: Sign) -> Self {
        match rhs {
            Sign::Pos => self,
            Sign::Neg => -self,
        }
    }
}

impl Sign {
    /// Returns `1` or `-1`.
    pub fn to_num<T: Signed>(self) -> T {
        match self {
            Sign::Pos => T::one(),
            Sign::Neg => -T::one(),
        }
    }

    /// Returns the sign of a nonzero lattice coordinate, or `None` for zero.
    pub fn of_coord(coord: i8) -> Option<Sign> {
        match coord.cmp(&0) {
            Ordering::Less => Some(Sign::Neg),
            Ordering::Equal => None,
            Ordering::Greater => Some(Sign::Pos),
        }
    }
}
