// Sprite entity: transform, physics body and animation playback

use glam::Vec2;

use super::animation::AnimationPlayer;
use super::body::{Body, WorldBounds};

/// A 2D sprite with arcade physics and animations
#[derive(Debug)]
pub struct Sprite {
    /// Position in world space (y-down)
    pub position: Vec2,
    /// Scale (1.0 = original size)
    pub scale: Vec2,
    /// Physics state
    pub body: Body,
    /// Animation playback
    pub animations: AnimationPlayer,
}

impl Sprite {
    /// Create a new sprite at a position
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            scale: Vec2::ONE,
            body: Body::new(),
            animations: AnimationPlayer::new(),
        }
    }

    /// Advance the physics body one timestep
    pub fn step(&mut self, dt: f32, bounds: WorldBounds) {
        self.body.step(&mut self.position, dt, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sprite_creation() {
        let sprite = Sprite::new(Vec2::new(10.0, 500.0));
        assert_eq!(sprite.position, Vec2::new(10.0, 500.0));
        assert_eq!(sprite.scale, Vec2::ONE);
        assert_eq!(sprite.body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_step_moves_sprite() {
        let mut sprite = Sprite::new(Vec2::ZERO);
        sprite.body.velocity = Vec2::new(100.0, 0.0);

        sprite.step(0.5, WorldBounds::new(800.0, 600.0));

        assert_relative_eq!(sprite.position.x, 50.0);
    }
}
