use tumblecube_core::{CubeState, FaceMove};
use tumbleprefs::{Preferences, SequencerTrigger};
use web_time::Duration;

use crate::animations::{AmbientRotation, TwistAnimationState};
use crate::render::RenderData;
use crate::sequencer::MoveSequencer;

/// Cube state plus everything needed to animate it.
#[derive(Debug)]
pub struct CubeSimulation {
    /// Committed cube state.
    state: CubeState,
    /// Scripted turns.
    sequencer: MoveSequencer,
    /// Face turn in flight.
    twist_anim: TwistAnimationState,
    /// Rotation of the whole cube.
    ambient: AmbientRotation,
    /// Whether the pointer is over the widget.
    hovered: bool,
    /// Time since the last commit (or since creation), used by
    /// [`SequencerTrigger::AfterCommit`].
    idle_time: Duration,
    /// Number of twists committed so far.
    commit_count: usize,

    prefs: Preferences,

    /// Render data for the current frame.
    cached_render_data: RenderData,
}

impl CubeSimulation {
    /// Constructs a solved cube with no twist in flight.
    pub fn new(prefs: Preferences) -> Self {
        let state = CubeState::new();
        let ambient = AmbientRotation::default();
        let cached_render_data =
            RenderData::new(&state, None, ambient.rotation(), &prefs.colors);
        Self {
            state,
            sequencer: MoveSequencer::new(prefs.sequencer.script.clone()),
            twist_anim: TwistAnimationState::default(),
            ambient,
            hovered: false,
            idle_time: Duration::ZERO,
            commit_count: 0,

            prefs,

            cached_render_data,
        }
    }

    /// Returns the committed cube state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns the move sequencer.
    pub fn sequencer(&self) -> &MoveSequencer {
        &self.sequencer
    }
    /// Returns the twist animation state.
    pub fn twist_anim(&self) -> &TwistAnimationState {
        &self.twist_anim
    }
    /// Returns whether a twist is in flight.
    pub fn is_animating(&self) -> bool {
        self.twist_anim.is_animating()
    }
    /// Returns the ambient rotation.
    pub fn ambient(&self) -> &AmbientRotation {
        &self.ambient
    }
    /// Returns the number of twists committed so far.
    pub fn commit_count(&self) -> usize {
        self.commit_count
    }
    /// Returns the preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Returns the render data for the most recent frame.
    pub fn render_data(&self) -> &RenderData {
        &self.cached_render_data
    }

    /// Returns whether the pointer is over the widget.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
    /// Sets whether the pointer is over the widget, which slows the ambient
    /// rotation.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Replaces the preferences. If the script changed, the sequencer
    /// restarts from the beginning of the new script.
    pub fn set_prefs(&mut self, prefs: Preferences) {
        if prefs.sequencer.script != self.prefs.sequencer.script {
            self.sequencer = MoveSequencer::new(prefs.sequencer.script.clone());
        }
        self.prefs = prefs;
        self.update_render_data();
    }

    /// Resets the cube to solved and cancels any twist in flight. The ambient
    /// rotation is kept.
    pub fn reset(&mut self) {
        self.state = CubeState::new();
        self.sequencer = MoveSequencer::new(self.prefs.sequencer.script.clone());
        self.twist_anim = TwistAnimationState::Idle;
        self.idle_time = Duration::ZERO;
        self.commit_count = 0;
        self.update_render_data();
    }

    /// Starts the next scripted twist. If a twist is still in flight, the
    /// tick is dropped and the sequencer does not advance.
    ///
    /// Returns whether a twist was started.
    pub fn sequencer_tick(&mut self) -> bool {
        if let Some((current, progress)) = self.twist_anim.current() {
            log::debug!(
                "dropping sequencer tick for {} because {current} is at progress {progress}",
                self.sequencer.peek(),
            );
            return false;
        }
        let twist = self.sequencer.next_move();
        self.start_twist(twist)
    }

    /// Starts animating `twist` if no other twist is in flight. Returns
    /// whether the twist was started.
    pub fn start_twist(&mut self, twist: FaceMove) -> bool {
        let started = self.twist_anim.start(twist);
        if started {
            self.update_render_data();
        }
        started
    }

    /// Advances the simulation by one frame that took `delta`.
    ///
    /// Returns the twist committed during this frame, if any.
    pub fn frame(&mut self, delta: Duration) -> Option<FaceMove> {
        self.ambient
            .proceed(delta, self.prefs.ambient.speed(self.hovered));

        let committed = self
            .twist_anim
            .proceed(&mut self.state, delta, &self.prefs.animation);
        if committed.is_some() {
            self.commit_count += 1;
            self.idle_time = Duration::ZERO;
        } else if !self.is_animating() {
            self.idle_time += delta;
        }

        if self.prefs.sequencer.trigger == SequencerTrigger::AfterCommit
            && !self.is_animating()
            && self.idle_time >= self.prefs.sequencer.interval_duration()
        {
            self.idle_time = Duration::ZERO;
            self.sequencer_tick();
        }

        self.update_render_data();
        committed
    }

    fn update_render_data(&mut self) {
        let twist = self
            .twist_anim
            .current()
            .zip(self.twist_anim.partial_rotation(&self.prefs.animation))
            .map(|((twist, progress), (_, rotation))| (twist, progress, rotation));
        self.cached_render_data = RenderData::new(
            &self.state,
            twist,
            self.ambient.rotation(),
            &self.prefs.colors,
        );
    }
}
