//! Timing sources that drive the widget.
//!
//! The widget needs two callbacks from its environment: one per rendered
//! frame, with the time elapsed since the previous frame, and one on a fixed
//! interval for the move sequencer. [`FrameHost`] abstracts over both so that
//! the same widget can run inside a real event loop or under
//! [`ManualHost`], which only advances when told to.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;

use web_time::Duration;

/// Callback run once per frame with the time elapsed since the previous frame.
pub type FrameCallback = Box<dyn FnMut(Duration)>;
/// Callback run each time an interval timer fires.
pub type TimerCallback = Box<dyn FnMut()>;

/// Handle to a registered callback, used to release it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallbackId(u64);

/// Source of frame callbacks and interval timers.
///
/// All methods take `&self` so that callbacks can be registered and released
/// while the host is running other callbacks.
pub trait FrameHost {
    /// Registers `callback` to run on every frame until it is cancelled.
    fn request_frames(&self, callback: FrameCallback) -> CallbackId;
    /// Stops running a frame callback. Cancelling an unknown or already
    /// cancelled callback does nothing.
    fn cancel_frames(&self, id: CallbackId);

    /// Registers `callback` to run every `interval` until it is cleared.
    fn set_interval(&self, interval: Duration, callback: TimerCallback) -> CallbackId;
    /// Stops an interval timer. Clearing an unknown or already cleared timer
    /// does nothing.
    fn clear_interval(&self, id: CallbackId);
}

/// Shortest interval a timer may have. Shorter intervals are clamped.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

struct Timer {
    interval: Duration,
    next_fire: Duration,
    /// `None` while the callback is running.
    callback: Option<TimerCallback>,
}

/// Deterministic host that only runs callbacks from [`ManualHost::advance()`].
#[derive(Default)]
pub struct ManualHost {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    /// Frame callbacks. A slot is `None` while its callback is running.
    frames: RefCell<BTreeMap<CallbackId, Option<FrameCallback>>>,
    timers: RefCell<BTreeMap<CallbackId, Timer>>,
}

impl fmt::Debug for ManualHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualHost")
            .field("now", &self.now.get())
            .field("frame_callbacks", &self.active_frame_callbacks())
            .field("timers", &self.active_timers())
            .finish()
    }
}

impl ManualHost {
    /// Constructs a host at time zero with no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time elapsed since the host was created.
    pub fn now(&self) -> Duration {
        self.now.get()
    }
    /// Returns the number of registered frame callbacks.
    pub fn active_frame_callbacks(&self) -> usize {
        self.frames.borrow().len()
    }
    /// Returns the number of registered interval timers.
    pub fn active_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Advances time by `delta` and renders one frame.
    ///
    /// Timers that come due during `delta` fire first, in chronological
    /// order, and then every frame callback runs once with `delta`.
    pub fn advance(&self, delta: Duration) {
        let end = self.now.get() + delta;

        while let Some((id, time)) = self.next_due_timer(end) {
            self.now.set(time);
            self.fire_timer(id);
        }
        self.now.set(end);

        let frame_ids: Vec<CallbackId> = self.frames.borrow().keys().copied().collect();
        for id in frame_ids {
            let callback = self.frames.borrow_mut().get_mut(&id).and_then(Option::take);
            let Some(mut callback) = callback else {
                continue; // cancelled by an earlier callback
            };
            callback(delta);
            // Put it back unless it was cancelled while running.
            if let Some(slot) = self.frames.borrow_mut().get_mut(&id) {
                *slot = Some(callback);
            }
        }
    }

    fn allocate_id(&self) -> CallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        CallbackId(id)
    }

    /// Returns the earliest timer due at or before `end`, breaking ties by
    /// registration order.
    fn next_due_timer(&self, end: Duration) -> Option<(CallbackId, Duration)> {
        self.timers
            .borrow()
            .iter()
            .filter(|(_, timer)| timer.callback.is_some() && timer.next_fire <= end)
            .map(|(&id, timer)| (id, timer.next_fire))
            .min_by_key(|&(id, time)| (time, id))
    }

    fn fire_timer(&self, id: CallbackId) {
        let callback = match self.timers.borrow_mut().get_mut(&id) {
            Some(timer) => {
                timer.next_fire += timer.interval;
                timer.callback.take()
            }
            None => None,
        };
        let Some(mut callback) = callback else {
            return;
        };
        callback();
        if let Some(timer) = self.timers.borrow_mut().get_mut(&id) {
            timer.callback = Some(callback);
        }
    }
}

impl FrameHost for ManualHost {
    fn request_frames(&self, callback: FrameCallback) -> CallbackId {
        let id = self.allocate_id();
        self.frames.borrow_mut().insert(id, Some(callback));
        log::trace!("registered frame callback {id:?}");
        id
    }

    fn cancel_frames(&self, id: CallbackId) {
        if self.frames.borrow_mut().remove(&id).is_some() {
            log::trace!("cancelled frame callback {id:?}");
        }
    }

    fn set_interval(&self, interval: Duration, callback: TimerCallback) -> CallbackId {
        let interval = if interval < MIN_INTERVAL {
            log::warn!("timer interval {interval:?} is too short; using {MIN_INTERVAL:?}");
            MIN_INTERVAL
        } else {
            interval
        };
        let id = self.allocate_id();
        let timer = Timer {
            interval,
            next_fire: self.now.get() + interval,
            callback: Some(callback),
        };
        self.timers.borrow_mut().insert(id, timer);
        log::trace!("registered timer {id:?} every {interval:?}");
        id
    }

    fn clear_interval(&self, id: CallbackId) {
        if self.timers.borrow_mut().remove(&id).is_some() {
            log::trace!("cleared timer {id:?}");
        }
    }
}
