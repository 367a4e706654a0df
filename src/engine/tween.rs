// Time-based interpolation for scripted movement

use glam::Vec2;

use crate::core::math::clamp;

/// Easing curves for tweens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    #[allow(dead_code)]
    Linear,
    /// Cubic ease-out: fast start, decelerating finish
    CubicOut,
}

impl Easing {
    /// Map linear progress t in [0, 1] to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = clamp(t, 0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// Interpolates a point over a fixed duration, advanced by the caller's dt.
///
/// Progress is clamped, so the final value is exactly the end point no
/// matter how the timestep divides the duration.
#[derive(Debug, Clone)]
pub struct Tween {
    start: Vec2,
    end: Vec2,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    /// Create a tween from start to end over duration seconds
    pub fn new(start: Vec2, end: Vec2, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by dt and return the interpolated value
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Get the current interpolated value.
    ///
    /// Once finished this is the end point itself, not an interpolation
    /// that happens to land near it.
    pub fn value(&self) -> Vec2 {
        if self.is_finished() {
            return self.end;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.start.lerp(self.end, t)
    }

    /// Check whether the tween has reached its end value
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::CubicOut] {
            assert_relative_eq!(easing.apply(0.0), 0.0);
            assert_relative_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_relative_eq!(Easing::CubicOut.apply(-1.0), 0.0);
        assert_relative_eq!(Easing::CubicOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_cubic_out_decelerates() {
        // Ease-out covers more than half the distance by the midpoint
        assert_relative_eq!(Easing::CubicOut.apply(0.5), 0.875);
    }

    #[test]
    fn test_cubic_out_is_monotone() {
        let mut last = 0.0;
        for i in 1..=20 {
            let eased = Easing::CubicOut.apply(i as f32 / 20.0);
            assert!(eased >= last);
            last = eased;
        }
        assert_relative_eq!(last, 1.0);
    }

    #[test]
    fn test_linear_advance() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0, Easing::Linear);

        let mid = tween.advance(0.5);
        assert_relative_eq!(mid.x, 50.0);
        assert!(!tween.is_finished());

        let end = tween.advance(0.5);
        assert_relative_eq!(end.x, 100.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_overshoot_clamps_to_end() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(10.0, 20.0), 0.5, Easing::CubicOut);

        let value = tween.advance(5.0);
        assert_eq!(value, Vec2::new(10.0, 20.0));
        assert!(tween.is_finished());
    }

    #[test]
    fn test_end_value_is_exact() {
        // 0.1 is not exactly representable, so an interpolated endpoint
        // would drift by an ulp or two
        let mut tween = Tween::new(Vec2::ONE, Vec2::splat(0.1), 0.5, Easing::CubicOut);
        tween.advance(0.25);
        tween.advance(0.25);
        assert_eq!(tween.value(), Vec2::splat(0.1));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(5.0, 5.0), 0.0, Easing::Linear);
        assert!(tween.is_finished());
        assert_eq!(tween.advance(0.1), Vec2::new(5.0, 5.0));
    }
}
