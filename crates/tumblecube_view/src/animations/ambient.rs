use std::f32::consts::TAU;

use tumblemath::prelude::*;
use web_time::Duration;

/// Slow rotation of the whole cube around the vertical axis, independent of
/// face turns.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AmbientRotation {
    /// Current angle in radians, in the range 0.0 to TAU.
    angle: f32,
}
impl AmbientRotation {
    /// Steps the rotation forward by `delta` at `speed` radians per second.
    pub fn proceed(&mut self, delta: Duration, speed: f32) {
        self.angle = (self.angle + delta.as_secs_f32() * speed).rem_euclid(TAU);
    }

    /// Returns the current angle.
    pub fn angle(&self) -> Rad<Float> {
        Rad(self.angle)
    }

    /// Returns the current rotation of the whole cube.
    pub fn rotation(&self) -> Quaternion<Float> {
        Quaternion::from_angle_y(self.angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_wraps() {
        let mut ambient = AmbientRotation::default();
        ambient.proceed(Duration::from_secs(10), 1.0);
        tumblemath::assert_approx_eq!(ambient.angle().0, 10.0 - TAU);
        ambient.proceed(Duration::from_secs(1), -1.0);
        tumblemath::assert_approx_eq!(ambient.angle().0, 9.0 - TAU);
    }

    #[test]
    fn test_ambient_rotation_is_about_y() {
        let mut ambient = AmbientRotation::default();
        ambient.proceed(Duration::from_millis(500), 0.6);
        let up = ambient.rotation().rotate_vector(Vector3::unit_y());
        tumblemath::assert_approx_eq!(up, Vector3::unit_y());
    }
}
