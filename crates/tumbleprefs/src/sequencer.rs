use serde::{Deserialize, Serialize};
use tumblecube_core::MoveSequence;
use web_time::Duration;

/// Preferences for the scripted sequence of face turns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SequencerPreferences {
    /// Time between scripted turns, in seconds.
    pub interval: f32,
    /// What the interval is measured from.
    pub trigger: SequencerTrigger,
    /// Cyclic list of turns.
    pub script: MoveSequence,
}

impl SequencerPreferences {
    /// Returns the interval as a [`Duration`], clamped to be nonnegative.
    pub fn interval_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.interval).unwrap_or_default()
    }
}

/// When the sequencer starts the next scripted turn.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SequencerTrigger {
    /// A fixed wall-clock timer. Ticks that fire while a turn is still
    /// animating are dropped.
    #[default]
    Interval,
    /// The interval is measured from the end of the previous turn, so turns
    /// can never overlap.
    AfterCommit,
}
