// Arcade-style physics body
//
// A deliberately small alternative to a rigid body engine: each body carries
// its own gravity and bounce, velocity is set directly by gameplay code, and
// integration is a single semi-implicit Euler step. Coordinates are y-down.

use glam::Vec2;

/// Rectangular world region bodies are kept inside of
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    /// Create bounds spanning (0, 0) to (width, height)
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }
}

/// Physics state for a single sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Current velocity in pixels per second
    pub velocity: Vec2,

    /// Per-body gravity in pixels per second squared. Negative y rises.
    pub gravity: Vec2,

    /// Per-axis velocity retention on a world bounds hit (0.0 = dead stop)
    pub bounce: Vec2,

    /// Collision rect extent in pixels
    pub size: Vec2,

    /// Collision rect offset from the sprite position
    pub offset: Vec2,

    /// Whether the collision rect is kept inside the world bounds
    pub collide_world_bounds: bool,
}

impl Body {
    /// Create a body at rest with no gravity and no collision rect
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity: Vec2::ZERO,
            bounce: Vec2::ZERO,
            size: Vec2::ZERO,
            offset: Vec2::ZERO,
            collide_world_bounds: false,
        }
    }

    /// Advance one timestep: apply gravity, move, then resolve world bounds
    pub fn step(&mut self, position: &mut Vec2, dt: f32, bounds: WorldBounds) {
        self.velocity += self.gravity * dt;
        *position += self.velocity * dt;

        if self.collide_world_bounds {
            self.resolve_bounds(position, bounds);
        }
    }

    /// Push the collision rect back inside the bounds, reflecting velocity
    /// on the blocked axis scaled by the bounce factor
    fn resolve_bounds(&mut self, position: &mut Vec2, bounds: WorldBounds) {
        let rect_min = *position + self.offset;
        let rect_max = rect_min + self.size;

        if rect_min.x < bounds.min.x {
            position.x = bounds.min.x - self.offset.x;
            if self.velocity.x < 0.0 {
                self.velocity.x = -self.velocity.x * self.bounce.x;
            }
        } else if rect_max.x > bounds.max.x {
            position.x = bounds.max.x - self.size.x - self.offset.x;
            if self.velocity.x > 0.0 {
                self.velocity.x = -self.velocity.x * self.bounce.x;
            }
        }

        if rect_min.y < bounds.min.y {
            position.y = bounds.min.y - self.offset.y;
            if self.velocity.y < 0.0 {
                self.velocity.y = -self.velocity.y * self.bounce.y;
            }
        } else if rect_max.y > bounds.max.y {
            position.y = bounds.max.y - self.size.y - self.offset.y;
            if self.velocity.y > 0.0 {
                self.velocity.y = -self.velocity.y * self.bounce.y;
            }
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0)
    }

    #[test]
    fn test_body_creation() {
        let body = Body::new();
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.gravity, Vec2::ZERO);
        assert!(!body.collide_world_bounds);
    }

    #[test]
    fn test_gravity_integration() {
        let mut body = Body::new();
        body.gravity = Vec2::new(0.0, 100.0);
        let mut position = Vec2::new(50.0, 50.0);

        body.step(&mut position, 1.0, bounds());

        // Semi-implicit Euler: velocity updates first, then position
        assert_relative_eq!(body.velocity.y, 100.0);
        assert_relative_eq!(position.y, 150.0);
    }

    #[test]
    fn test_velocity_moves_position() {
        let mut body = Body::new();
        body.velocity = Vec2::new(500.0, 0.0);
        let mut position = Vec2::ZERO;

        body.step(&mut position, 0.5, bounds());

        assert_relative_eq!(position.x, 250.0);
    }

    #[test]
    fn test_floor_bounce() {
        let mut body = Body::new();
        body.size = Vec2::new(10.0, 10.0);
        body.bounce = Vec2::new(0.0, 0.5);
        body.collide_world_bounds = true;
        body.velocity = Vec2::new(0.0, 100.0);
        let mut position = Vec2::new(0.0, 595.0);

        body.step(&mut position, 0.25, bounds());

        // Rect bottom is clamped to the lower edge and velocity reflects
        assert_relative_eq!(position.y, 590.0);
        assert_relative_eq!(body.velocity.y, -50.0);
    }

    #[test]
    fn test_ceiling_bounce_with_rising_gravity() {
        let mut body = Body::new();
        body.size = Vec2::new(10.0, 10.0);
        body.bounce = Vec2::new(0.0, 0.4);
        body.collide_world_bounds = true;
        body.gravity = Vec2::new(0.0, -100.0);
        body.velocity = Vec2::new(0.0, -200.0);
        let mut position = Vec2::new(0.0, 10.0);

        body.step(&mut position, 0.5, bounds());

        assert_relative_eq!(position.y, 0.0);
        // Upward velocity reflects downward, damped by the y bounce
        assert_relative_eq!(body.velocity.y, 100.0);
    }

    #[test]
    fn test_offset_shifts_collision_rect() {
        let mut body = Body::new();
        body.size = Vec2::new(48.0, 48.0);
        body.offset = Vec2::new(8.0, 6.0);
        body.collide_world_bounds = true;
        body.velocity = Vec2::new(-100.0, 0.0);
        let mut position = Vec2::new(-20.0, 100.0);

        body.step(&mut position, 0.1, bounds());

        // Sprite position sits left of the wall by the offset amount
        assert_relative_eq!(position.x, -8.0);
    }

    #[test]
    fn test_bounds_ignored_when_disabled() {
        let mut body = Body::new();
        body.size = Vec2::new(10.0, 10.0);
        body.velocity = Vec2::new(0.0, 1000.0);
        let mut position = Vec2::new(0.0, 595.0);

        body.step(&mut position, 1.0, bounds());

        assert!(position.y > 600.0);
    }

    #[test]
    fn test_no_reflection_when_moving_away() {
        let mut body = Body::new();
        body.size = Vec2::new(10.0, 10.0);
        body.bounce = Vec2::new(1.0, 1.0);
        body.collide_world_bounds = true;
        // Overlapping the left wall but already moving right
        body.velocity = Vec2::new(50.0, 0.0);
        let mut position = Vec2::new(-5.0, 100.0);

        body.step(&mut position, 0.0, bounds());

        assert_relative_eq!(position.x, 0.0);
        assert_relative_eq!(body.velocity.x, 50.0);
    }
}
