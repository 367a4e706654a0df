// Player controller: form dispatch and the per-frame pipeline

use glam::Vec2;

use crate::core::math::clamp;
use crate::engine::animation::AnimationClip;
use crate::engine::input::{Action, InputState};
use crate::engine::sprite::Sprite;
use crate::engine::time::GameTime;
use crate::game::events::{ControllerEvent, EventQueue};
use crate::game::forms::{CharacterForm, FormBehavior, FormContext, SteamState, WaterState};
use crate::game::map::Map;

/// Collision rect extent in pixels
const BODY_SIZE: Vec2 = Vec2::new(48.0, 48.0);
/// Collision rect offset from the sprite position
const BODY_OFFSET: Vec2 = Vec2::new(8.0, 6.0);
/// Vertical speed limit enforced after integration, in pixels per second
const MAX_VERTICAL_SPEED: f32 = 750.0;
/// Past this y the character has slipped below the playable level
const FLOOR_RESCUE_Y: f32 = 670.0;
/// Where the character is put back after a floor rescue
const FLOOR_RESET_Y: f32 = 650.0;

/// The player character.
///
/// Owns the sprite and both form states; exactly one form is active at any
/// time. Form changes go through `request_form`, where the outgoing form
/// can veto the change by refusing cleanup.
pub struct Player {
    /// The controlled sprite
    pub sprite: Sprite,

    water: WaterState,
    steam: SteamState,

    /// Tag of the active form
    current: CharacterForm,

    /// Events accumulated since the last drain
    events: EventQueue,
}

impl Player {
    /// Create a player at a spawn point and enter the water form
    pub fn new(spawn: Vec2, map: &mut Map, time: &GameTime) -> Self {
        let mut sprite = Sprite::new(spawn);
        sprite.body.size = BODY_SIZE;
        sprite.body.offset = BODY_OFFSET;
        sprite.body.collide_world_bounds = true;
        sprite.animations.add_animation(AnimationClip::looping(
            CharacterForm::Steam.animation_name(),
            vec![0, 1, 2, 1],
            7.0,
        ));
        sprite.animations.add_animation(AnimationClip::looping(
            CharacterForm::Water.animation_name(),
            vec![3],
            10.0,
        ));

        let mut player = Self {
            sprite,
            water: WaterState::new(),
            steam: SteamState::new(),
            current: CharacterForm::Water,
            events: EventQueue::new(),
        };

        // Enter the starting form directly; there is no outgoing form to
        // clean up at construction
        let mut ctx = FormContext {
            sprite: &mut player.sprite,
            map,
            time,
            events: &mut player.events,
        };
        player.water.init(&mut ctx);
        player.events.emit(ControllerEvent::StateEntered {
            form: CharacterForm::Water,
        });
        log::info!("player spawned at {:?} as {:?}", spawn, player.current);

        player
    }

    /// Get the active form
    pub fn form(&self) -> CharacterForm {
        self.current
    }

    /// Check whether a vent teleport is in progress
    pub fn is_teleporting(&self) -> bool {
        self.current == CharacterForm::Steam && self.steam.is_teleporting()
    }

    /// Get when the last teleport completed, in elapsed seconds
    pub fn last_exit_vent(&self) -> f32 {
        self.steam.last_exit_vent()
    }

    /// Remove and return all controller events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        self.events.drain()
    }

    /// Deliver queued vent transits to the active form, oldest first
    fn deliver_pending_vents(&mut self, map: &mut Map, time: &GameTime) {
        while let Some(transit) = map.take_pending_vent() {
            let mut ctx = FormContext {
                sprite: &mut self.sprite,
                map: &mut *map,
                time,
                events: &mut self.events,
            };
            match self.current {
                CharacterForm::Water => self.water.on_vent(&mut ctx, transit),
                CharacterForm::Steam => self.steam.on_vent(&mut ctx, transit),
            }
        }
    }

    /// Request a change of form.
    ///
    /// Vent transits still queued on the map are delivered to the outgoing
    /// form first, as the frame pipeline would, so a transit fired in the
    /// same frame is honored and may veto the change. The outgoing form
    /// then runs its cleanup and can refuse, in which case nothing changes
    /// and a `TransitionDenied` event is emitted. On success the new form
    /// is initialized and becomes active. The request is not
    /// short-circuited for the active form: re-requesting it runs cleanup
    /// and init again.
    pub fn request_form(&mut self, map: &mut Map, time: &GameTime, form: CharacterForm) {
        self.deliver_pending_vents(map, time);

        let from = self.current;
        let mut ctx = FormContext {
            sprite: &mut self.sprite,
            map,
            time,
            events: &mut self.events,
        };

        let accepted = match from {
            CharacterForm::Water => self.water.cleanup(&mut ctx),
            CharacterForm::Steam => self.steam.cleanup(&mut ctx),
        };
        if !accepted {
            log::warn!("form change {:?} -> {:?} denied by the active form", from, form);
            ctx.events.emit(ControllerEvent::TransitionDenied {
                from,
                requested: form,
            });
            return;
        }

        self.current = form;
        match form {
            CharacterForm::Water => self.water.init(&mut ctx),
            CharacterForm::Steam => self.steam.init(&mut ctx),
        }
        ctx.events.emit(ControllerEvent::StateEntered { form });
        log::info!("form changed: {:?} -> {:?}", from, form);
    }

    /// Advance the player one frame.
    ///
    /// Pipeline order: deliver queued vent transits, handle form selection,
    /// run the active form, integrate the body, clamp vertical speed,
    /// rescue a sprite that slipped below the level, advance animations.
    pub fn update(&mut self, map: &mut Map, time: &GameTime, input: &InputState, dt: f32) {
        // Transits were queued before this frame, so they reach the form
        // that was active when they fired, ahead of any switch request
        self.deliver_pending_vents(map, time);

        if input.just_pressed(Action::SelectWater) {
            self.request_form(map, time, CharacterForm::Water);
        } else if input.just_pressed(Action::SelectSteam) {
            self.request_form(map, time, CharacterForm::Steam);
        } else if input.just_pressed(Action::SelectDude) {
            // Selectable but with no form behind it
            log::debug!("dude selection ignored, staying {:?}", self.current);
        }

        {
            let mut ctx = FormContext {
                sprite: &mut self.sprite,
                map: &mut *map,
                time,
                events: &mut self.events,
            };
            match self.current {
                CharacterForm::Water => self.water.update(&mut ctx, input, dt),
                CharacterForm::Steam => self.steam.update(&mut ctx, input, dt),
            }
        }

        self.sprite.step(dt, map.world_bounds());

        let body = &mut self.sprite.body;
        body.velocity.y = clamp(body.velocity.y, -MAX_VERTICAL_SPEED, MAX_VERTICAL_SPEED);

        // TODO: take the rescue line from the map's level data
        if self.sprite.position.y > FLOOR_RESCUE_Y {
            self.sprite.position.y = FLOOR_RESET_Y;
            self.sprite.body.velocity.x = 0.0;
        }

        self.sprite.animations.update(dt);
    }
}
