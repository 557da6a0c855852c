mod ambient;
mod twist;

pub use ambient::AmbientRotation;
pub use twist::{TwistAnimationState, advance_progress};
