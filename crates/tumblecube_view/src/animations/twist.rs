use tumblecube_core::{CubeState, FaceMove};
use tumblemath::prelude::*;
use tumbleprefs::AnimationPreferences;
use web_time::Duration;

/// Returns animation progress after `delta` has elapsed.
///
/// A nonpositive `twist_duration` completes the twist immediately.
pub fn advance_progress(progress: f32, delta: Duration, twist_duration: f32) -> f32 {
    if twist_duration > 0.0 {
        progress + delta.as_secs_f32() / twist_duration
    } else {
        1.0
    }
}

/// State of the face-turn animation.
///
/// A twist goes from idle to animating when it is started, and back to idle
/// on the frame where its progress reaches 1.0, at which point it is
/// committed to the cube state exactly once.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum TwistAnimationState {
    /// No twist in flight.
    #[default]
    Idle,
    /// A twist is in flight.
    Animating {
        /// Twist being animated.
        twist: FaceMove,
        /// Raw progress from 0.0 to 1.0, before easing.
        progress: f32,
    },
}

impl TwistAnimationState {
    /// Returns whether a twist is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    /// Starts animating `twist` from progress zero. Returns `false` and does
    /// nothing if another twist is still in flight.
    pub fn start(&mut self, twist: FaceMove) -> bool {
        match self {
            Self::Animating { twist: current, .. } => {
                log::debug!("not starting {twist} because {current} is still animating");
                false
            }
            Self::Idle => {
                log::debug!("starting {twist}");
                *self = Self::Animating {
                    twist,
                    progress: 0.0,
                };
                true
            }
        }
    }

    /// Returns the twist in flight and its raw progress.
    pub fn current(&self) -> Option<(FaceMove, f32)> {
        match *self {
            Self::Idle => None,
            Self::Animating { twist, progress } => Some((twist, progress)),
        }
    }

    /// Returns the twist in flight and its partial rotation, after easing.
    pub fn partial_rotation(
        &self,
        prefs: &AnimationPreferences,
    ) -> Option<(FaceMove, Quaternion<Float>)> {
        let (twist, progress) = self.current()?;
        let t = prefs.twist_interpolation.interpolate(progress.clamp(0.0, 1.0));
        Some((twist, twist.partial_rotation(t)))
    }

    /// Steps the animation forward by `delta`. If the twist completes, it is
    /// applied to `state` and returned.
    pub fn proceed(
        &mut self,
        state: &mut CubeState,
        delta: Duration,
        prefs: &AnimationPreferences,
    ) -> Option<FaceMove> {
        let Self::Animating { twist, progress } = self else {
            return None;
        };
        let twist = *twist;
        *progress = advance_progress(*progress, delta, prefs.twist_duration);
        log::trace!("{twist} at progress {progress}");
        if *progress < 1.0 {
            return None;
        }

        *state = state.apply_move(twist);
        *self = Self::Idle;
        log::debug!("committed {twist}");
        Some(twist)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tumblecube_core::Face;

    use super::*;

    fn prefs() -> AnimationPreferences {
        AnimationPreferences {
            twist_duration: 0.4,
            ..Default::default()
        }
    }

    #[test]
    fn test_advance_progress() {
        let p = advance_progress(0.0, Duration::from_millis(100), 0.4);
        tumblemath::assert_approx_eq!(p, 0.25);
        assert_eq!(advance_progress(0.3, Duration::ZERO, 0.0), 1.0);
        assert_eq!(advance_progress(0.3, Duration::from_secs(1), -1.0), 1.0);
    }

    #[test]
    fn test_commits_exactly_once() {
        let prefs = prefs();
        let twist = FaceMove::cw(Face::Up);
        let mut state = CubeState::new();
        let mut anim = TwistAnimationState::default();

        assert!(anim.start(twist));
        assert!(!anim.start(FaceMove::cw(Face::Down)));

        let frame = Duration::from_millis(100);
        for _ in 0..3 {
            assert_eq!(anim.proceed(&mut state, frame, &prefs), None);
            assert_eq!(state, CubeState::new());
        }
        assert_eq!(anim.proceed(&mut state, frame, &prefs), Some(twist));
        let committed = CubeState::new().apply_move(twist);
        assert_eq!(state, committed);
        assert!(!anim.is_animating());

        for _ in 0..10 {
            assert_eq!(anim.proceed(&mut state, frame, &prefs), None);
        }
        assert_eq!(state, committed);
    }

    #[test]
    fn test_partial_rotation_is_eased() {
        let prefs = prefs();
        let twist = FaceMove::ccw(Face::Front);
        let mut state = CubeState::new();
        let mut anim = TwistAnimationState::default();
        anim.start(twist);
        anim.proceed(&mut state, Duration::from_millis(100), &prefs);

        let (_, rotation) = anim.partial_rotation(&prefs).unwrap();
        // 25% progress eases to 4 * 0.25³ = 6.25% of the turn.
        let expected = twist.partial_rotation(0.0625);
        assert!(rotations_approx_eq(rotation, expected));

        anim.proceed(&mut state, Duration::from_millis(100), &prefs);
        let (_, rotation) = anim.partial_rotation(&prefs).unwrap();
        assert!(rotations_approx_eq(rotation, twist.partial_rotation(0.5)));
    }

    #[test]
    fn test_overshooting_frame_still_commits_full_turn() {
        let prefs = prefs();
        let twist = FaceMove::cw(Face::Left);
        let mut state = CubeState::new();
        let mut anim = TwistAnimationState::default();
        anim.start(twist);
        assert_eq!(
            anim.proceed(&mut state, Duration::from_secs(5), &prefs),
            Some(twist),
        );
        assert_eq!(state, CubeState::new().apply_move(twist));
    }
}
