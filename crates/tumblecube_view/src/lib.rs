//! Animation driver for the tumbling cube widget.
//!
//! [`CubeSimulation`] owns the cube state and advances it one frame at a time.
//! [`MountedCube`] attaches a simulation to a [`FrameHost`], which supplies
//! frame callbacks and the sequencer timer.

mod animations;
mod host;
mod render;
mod sequencer;
mod simulation;
mod widget;

pub use animations::{AmbientRotation, TwistAnimationState, advance_progress};
pub use host::{CallbackId, FrameCallback, FrameHost, ManualHost, TimerCallback};
pub use render::{CubieRenderData, RenderData, TwistRenderData};
pub use sequencer::MoveSequencer;
pub use simulation::CubeSimulation;
pub use widget::MountedCube;
