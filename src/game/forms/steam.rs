// Steam form: buoyant drift and vent teleportation

use glam::Vec2;

use crate::engine::input::InputState;
use crate::engine::sprite::Sprite;
use crate::engine::tween::{Easing, Tween};
use crate::game::events::ControllerEvent;
use crate::game::map::{VentToken, VentTransit};

use super::{CharacterForm, FormBehavior, FormContext};

/// Upward gravity while vaporous (y-down coordinates, negative rises)
pub const STEAM_GRAVITY_Y: f32 = -2000.0;
/// Vertical velocity retained on a bounds hit
pub const STEAM_BOUNCE_Y: f32 = 0.4;

/// Sprite scale while inside the duct network
const TELEPORT_SCALE: f32 = 0.1;
/// Seconds to shrink into or grow out of a vent
const RESIZE_DURATION: f32 = 0.5;
/// Seconds to drift into the entry vent
const ENTER_VENT_DURATION: f32 = 1.0;
/// Seconds to travel from the entry to the exit vent
const MOVE_TO_EXIT_DURATION: f32 = 1.0;

/// Phases of a trip through the duct network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TeleportPhase {
    /// Drifting onto the entry vent while shrinking
    EnteringVent,
    /// Traveling to the exit vent
    MovingToExit,
    /// Growing back to full size at the exit
    Expanding,
}

/// A running teleport: a chain of position tweens plus a scale tween that
/// runs alongside the first leg and again at the end.
#[derive(Debug)]
struct TeleportSequence {
    phase: TeleportPhase,
    move_tween: Tween,
    scale_tween: Option<Tween>,
    exit: Vec2,
}

impl TeleportSequence {
    fn new(sprite: &Sprite, transit: VentTransit) -> Self {
        Self {
            phase: TeleportPhase::EnteringVent,
            move_tween: Tween::new(
                sprite.position,
                transit.from,
                ENTER_VENT_DURATION,
                Easing::CubicOut,
            ),
            scale_tween: Some(Tween::new(
                sprite.scale,
                Vec2::splat(TELEPORT_SCALE),
                RESIZE_DURATION,
                Easing::CubicOut,
            )),
            exit: transit.to,
        }
    }

    /// Advance the trip one timestep. Returns true once the sprite has
    /// grown back to full size at the exit vent.
    fn advance(&mut self, sprite: &mut Sprite, dt: f32) -> bool {
        // The scale tween never gates the position chain
        if let Some(tween) = &mut self.scale_tween {
            sprite.scale = tween.advance(dt);
            if tween.is_finished() {
                self.scale_tween = None;
            }
        }

        match self.phase {
            TeleportPhase::EnteringVent => {
                sprite.position = self.move_tween.advance(dt);
                if self.move_tween.is_finished() {
                    self.move_tween = Tween::new(
                        sprite.position,
                        self.exit,
                        MOVE_TO_EXIT_DURATION,
                        Easing::CubicOut,
                    );
                    self.phase = TeleportPhase::MovingToExit;
                }
                false
            }
            TeleportPhase::MovingToExit => {
                sprite.position = self.move_tween.advance(dt);
                if self.move_tween.is_finished() {
                    self.scale_tween = Some(Tween::new(
                        sprite.scale,
                        Vec2::ONE,
                        RESIZE_DURATION,
                        Easing::CubicOut,
                    ));
                    self.phase = TeleportPhase::Expanding;
                }
                false
            }
            TeleportPhase::Expanding => self.scale_tween.is_none(),
        }
    }
}

/// The vaporous form. Rises under inverted gravity, ignores movement keys,
/// and owns the map's vent handler slot while active. A vent transit puts
/// the sprite through a scripted trip with physics suspended; until the
/// trip completes the form refuses to be left. If the slot was already
/// claimed by someone else the form runs without vent handling and
/// ignores any transit handed to it.
#[derive(Debug, Default)]
pub struct SteamState {
    /// Running teleport, if any
    teleport: Option<TeleportSequence>,

    /// Claim on the map's vent handler slot, held from init to cleanup
    vent_token: Option<VentToken>,

    /// Elapsed seconds when the last teleport completed
    last_exit_vent: f32,
}

impl SteamState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a teleport is in progress
    pub fn is_teleporting(&self) -> bool {
        self.teleport.is_some()
    }

    /// Get when the last teleport completed, in elapsed seconds
    pub fn last_exit_vent(&self) -> f32 {
        self.last_exit_vent
    }

    /// Restore free-drift physics
    fn start_physics(&self, sprite: &mut Sprite) {
        sprite.body.bounce = Vec2::new(0.0, STEAM_BOUNCE_Y);
        sprite.body.gravity = Vec2::new(0.0, STEAM_GRAVITY_Y);
    }

    /// Halt the body so the teleport tweens fully own the sprite
    fn disable_physics(&self, sprite: &mut Sprite) {
        sprite.body.velocity = Vec2::ZERO;
        sprite.body.gravity = Vec2::ZERO;
    }
}

impl FormBehavior for SteamState {
    fn init(&mut self, ctx: &mut FormContext<'_>) {
        // A fresh activation starts at rest with the stamp cleared
        self.teleport = None;
        self.last_exit_vent = 0.0;

        ctx.sprite
            .animations
            .play(CharacterForm::Steam.animation_name());
        self.start_physics(ctx.sprite);

        // A claim left over from an earlier activation is surrendered
        // before registering again, so re-entry cannot wedge the slot
        if let Some(token) = self.vent_token.take() {
            if let Err(err) = ctx.map.clear_vent_handler(token) {
                log::warn!("stale vent claim could not be released: {}", err);
            }
        }

        match ctx.map.register_vent_handler() {
            Ok(token) => self.vent_token = Some(token),
            Err(err) => log::warn!("steam form active without vent handling: {}", err),
        }
    }

    fn update(&mut self, ctx: &mut FormContext<'_>, _input: &InputState, dt: f32) {
        if let Some(teleport) = &mut self.teleport {
            if teleport.advance(ctx.sprite, dt) {
                self.teleport = None;
                self.start_physics(ctx.sprite);
                self.last_exit_vent = ctx.time.elapsed_secs();
                ctx.events.emit(ControllerEvent::TeleportCompleted {
                    at: self.last_exit_vent,
                });
                log::debug!("teleport completed at {:.2}s", self.last_exit_vent);
            }
        } else {
            ctx.map.collide_ducts(ctx.sprite);
        }
    }

    fn cleanup(&mut self, ctx: &mut FormContext<'_>) -> bool {
        // Mid-teleport the sprite is shrunken with physics off; leaving
        // now would strand it in that state
        if self.teleport.is_some() {
            return false;
        }

        if let Some(token) = self.vent_token.take() {
            if let Err(err) = ctx.map.clear_vent_handler(token) {
                log::warn!("vent claim could not be released: {}", err);
            }
        }
        true
    }

    fn on_vent(&mut self, ctx: &mut FormContext<'_>, transit: VentTransit) {
        // Without the claim the transit is not ours to run
        if self.vent_token.is_none() {
            log::debug!("vent transit ignored, no vent claim held");
            return;
        }
        if self.teleport.is_some() {
            log::debug!("vent transit ignored, teleport already running");
            return;
        }

        self.disable_physics(ctx.sprite);
        self.teleport = Some(TeleportSequence::new(ctx.sprite, transit));
        ctx.events.emit(ControllerEvent::TeleportStarted {
            from: transit.from,
            to: transit.to,
        });
        log::debug!(
            "entering vent at {:?}, exiting at {:?}",
            transit.from,
            transit.to
        );
    }
}
