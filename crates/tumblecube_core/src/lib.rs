//! State model of a 3x3x3 twisty cube.
//!
//! A [`CubeState`] holds 27 [`Cubie`]s, each with a fixed identity (its home
//! position), a current lattice position, and an accumulated orientation.
//! [`FaceMove`]s rotate the nine cubies of one face by a quarter turn.
//! [`resolve_stickers()`] works out which world direction each sticker faces.

mod colors;
mod cubie;
mod face;
mod notation;
mod state;
mod stickers;
mod twist;


pub use colors::{ColorScheme, Rgb};
pub use cubie::{Cubie, CubieId, Position};
pub use face::{Face, PerFace};
pub use notation::{MoveSequence, NotationError};
pub use state::CubeState;
pub use stickers::{ALIGNMENT_THRESHOLD, StickerResolution, resolve_sticker_colors, resolve_stickers};
pub use twist::FaceMove;

/// Structs, traits, and constants.
pub mod prelude {
    pub use tumblemath::prelude::*;

    pub use crate::{
        ColorScheme, CubeState, Cubie, CubieId, Face, FaceMove, MoveSequence, PerFace, Position,
        Rgb,
    };
}
