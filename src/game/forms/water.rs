// Water form: heavy, grounded, steerable

use glam::Vec2;

use crate::engine::input::{Action, InputState};

use super::{CharacterForm, FormBehavior, FormContext};

/// Horizontal speed while a move key is held, in pixels per second
pub const WATER_MOVE_SPEED: f32 = 500.0;
/// Downward gravity while condensed
pub const WATER_GRAVITY_Y: f32 = 2000.0;
/// Vertical velocity retained on a bounds hit
pub const WATER_BOUNCE_Y: f32 = 0.2;

/// The condensed form. Falls hard, bounces a little, and moves left and
/// right at a fixed speed while a key is held.
#[derive(Debug, Default)]
pub struct WaterState;

impl WaterState {
    pub fn new() -> Self {
        Self
    }
}

impl FormBehavior for WaterState {
    fn init(&mut self, ctx: &mut FormContext<'_>) {
        ctx.sprite
            .animations
            .play(CharacterForm::Water.animation_name());
        ctx.sprite.body.bounce = Vec2::new(0.0, WATER_BOUNCE_Y);
        ctx.sprite.body.gravity = Vec2::new(0.0, WATER_GRAVITY_Y);
    }

    fn update(&mut self, ctx: &mut FormContext<'_>, input: &InputState, _dt: f32) {
        ctx.map.collide_platforms(ctx.sprite);

        // Velocity is set directly: no acceleration, dead stop on release
        let body = &mut ctx.sprite.body;
        if input.is_pressed(Action::MoveLeft) {
            body.velocity.x = -WATER_MOVE_SPEED;
        } else if input.is_pressed(Action::MoveRight) {
            body.velocity.x = WATER_MOVE_SPEED;
        } else {
            body.velocity.x = 0.0;
        }
    }

    fn cleanup(&mut self, _ctx: &mut FormContext<'_>) -> bool {
        true
    }
}
