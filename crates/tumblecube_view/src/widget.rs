use std::cell::{Ref, RefCell};
use std::rc::Rc;

use tumbleprefs::{Preferences, SequencerTrigger};

use crate::host::{CallbackId, FrameHost};
use crate::simulation::CubeSimulation;

/// Cube simulation attached to a [`FrameHost`].
///
/// Mounting registers a frame callback and, unless the sequencer runs in
/// [`SequencerTrigger::AfterCommit`] mode, an interval timer. Both are
/// released when the widget is unmounted or dropped.
pub struct MountedCube<'h, H: FrameHost + ?Sized> {
    host: &'h H,
    simulation: Rc<RefCell<CubeSimulation>>,
    frame_callback: Option<CallbackId>,
    sequencer_timer: Option<CallbackId>,
}

impl<H: FrameHost + ?Sized> std::fmt::Debug for MountedCube<'_, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedCube")
            .field("frame_callback", &self.frame_callback)
            .field("sequencer_timer", &self.sequencer_timer)
            .finish_non_exhaustive()
    }
}

impl<'h, H: FrameHost + ?Sized> MountedCube<'h, H> {
    /// Creates a solved cube and starts animating it on `host`.
    pub fn mount(host: &'h H, prefs: Preferences) -> Self {
        let simulation = Rc::new(RefCell::new(CubeSimulation::new(prefs)));

        let sim = Rc::clone(&simulation);
        let frame_callback = host.request_frames(Box::new(move |delta| {
            sim.borrow_mut().frame(delta);
        }));

        let mut ret = Self {
            host,
            simulation,
            frame_callback: Some(frame_callback),
            sequencer_timer: None,
        };
        ret.update_sequencer_timer();
        log::debug!("mounted cube");
        ret
    }

    /// Returns the simulation.
    pub fn simulation(&self) -> Ref<'_, CubeSimulation> {
        self.simulation.borrow()
    }

    /// Sets whether the pointer is over the widget.
    pub fn set_hovered(&self, hovered: bool) {
        self.simulation.borrow_mut().set_hovered(hovered);
    }

    /// Replaces the preferences, restarting the sequencer timer if needed.
    pub fn set_prefs(&mut self, prefs: Preferences) {
        let old = self.simulation.borrow().prefs().sequencer.clone();
        let timer_changed =
            old.trigger != prefs.sequencer.trigger || old.interval != prefs.sequencer.interval;
        self.simulation.borrow_mut().set_prefs(prefs);
        if timer_changed {
            self.update_sequencer_timer();
        }
    }

    /// Stops animating and releases all callbacks registered on the host.
    pub fn unmount(self) {
        drop(self);
    }

    fn update_sequencer_timer(&mut self) {
        if let Some(id) = self.sequencer_timer.take() {
            self.host.clear_interval(id);
        }
        let sequencer_prefs = self.simulation.borrow().prefs().sequencer.clone();
        if sequencer_prefs.trigger == SequencerTrigger::Interval {
            let sim = Rc::clone(&self.simulation);
            let id = self.host.set_interval(
                sequencer_prefs.interval_duration(),
                Box::new(move || {
                    sim.borrow_mut().sequencer_tick();
                }),
            );
            self.sequencer_timer = Some(id);
        }
    }
}

impl<H: FrameHost + ?Sized> Drop for MountedCube<'_, H> {
    fn drop(&mut self) {
        if let Some(id) = self.frame_callback.take() {
            self.host.cancel_frames(id);
        }
        if let Some(id) = self.sequencer_timer.take() {
            self.host.clear_interval(id);
        }
        log::debug!("unmounted cube");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tumblecube_core::{CubeState, MoveSequence};
    use web_time::Duration;

    use super::*;
    use crate::host::ManualHost;

    #[test]
    fn test_unmount_releases_callbacks() {
        let host = ManualHost::new();
        let cube = MountedCube::mount(&host, Preferences::default());
        assert_eq!(host.active_frame_callbacks(), 1);
        assert_eq!(host.active_timers(), 1);

        cube.unmount();
        assert_eq!(host.active_frame_callbacks(), 0);
        assert_eq!(host.active_timers(), 0);
        host.advance(Duration::from_secs(5));
    }

    #[test]
    fn test_drop_releases_callbacks() {
        let host = ManualHost::new();
        {
            let _cube = MountedCube::mount(&host, Preferences::default());
            host.advance(Duration::from_secs(3));
        }
        assert_eq!(host.active_frame_callbacks(), 0);
        assert_eq!(host.active_timers(), 0);
    }

    #[test]
    fn test_after_commit_mode_has_no_timer() {
        let host = ManualHost::new();
        let mut prefs = Preferences::default();
        prefs.sequencer.trigger = SequencerTrigger::AfterCommit;
        let mut cube = MountedCube::mount(&host, prefs.clone());
        assert_eq!(host.active_timers(), 0);

        prefs.sequencer.trigger = SequencerTrigger::Interval;
        cube.set_prefs(prefs);
        assert_eq!(host.active_timers(), 1);
        drop(cube);
        assert_eq!(host.active_timers(), 0);
    }

    #[test]
    fn test_scripted_run() {
        let host = ManualHost::new();
        let prefs = Preferences::default();
        let script: MoveSequence = prefs.sequencer.script.clone();
        let cube = MountedCube::mount(&host, prefs);

        // Ten seconds at ten frames per second. The sequencer fires at 2, 4,
        // 6, 8 and 10 seconds and each twist takes 0.4 seconds.
        for _ in 0..100 {
            host.advance(Duration::from_millis(100));
        }

        let sim = cube.simulation();
        assert_eq!(sim.commit_count(), 4);
        assert!(sim.is_animating());
        assert_eq!(sim.sequencer().index(), 5);
        let expected = CubeState::new().apply_moves(script.moves()[..4].iter().copied());
        assert_eq!(sim.state(), &expected);
        assert!(sim.state().is_bijection());
    }
}
