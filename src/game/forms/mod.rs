// Character forms
//
// The player character is one of a closed set of forms at any time:
// - `CharacterForm`: tag enum the controller dispatches on
// - `FormBehavior`: the lifecycle every form implements
// - `water`: condensed form, grounded movement
// - `steam`: vaporous form, rises and teleports through vents
//
// A form change is validated by the outgoing form: `cleanup` returns false
// to veto the change and stay active.

pub mod steam;
pub mod water;

use crate::engine::input::InputState;
use crate::engine::sprite::Sprite;
use crate::engine::time::GameTime;
use crate::game::events::EventQueue;
use crate::game::map::{Map, VentTransit};

// Re-export commonly used types
pub use steam::SteamState;
pub use water::WaterState;

/// The two phases the player character can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterForm {
    /// Condensed: heavy, steerable, walks on platforms
    Water,
    /// Vaporous: buoyant, uncontrollable, rides the duct network
    Steam,
}

impl CharacterForm {
    /// Get the animation name for this form
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Steam => "steam",
        }
    }
}

/// Everything a form operation may touch, borrowed for one call
pub struct FormContext<'a> {
    /// The player sprite
    pub sprite: &'a mut Sprite,
    /// The level the sprite moves through
    pub map: &'a mut Map,
    /// Simulation clock
    pub time: &'a GameTime,
    /// Outgoing controller events
    pub events: &'a mut EventQueue,
}

/// Lifecycle of a character form.
///
/// `init` runs when the form becomes active, `update` every frame while it
/// is, and `cleanup` before it is deactivated. A form that is not ready to
/// be left returns false from `cleanup`, which keeps it active.
pub trait FormBehavior {
    /// Called when the form becomes active
    fn init(&mut self, ctx: &mut FormContext<'_>);

    /// Per-frame behavior while active
    fn update(&mut self, ctx: &mut FormContext<'_>, input: &InputState, dt: f32);

    /// Called before deactivation. Returning false vetoes the form change.
    fn cleanup(&mut self, ctx: &mut FormContext<'_>) -> bool;

    /// Called when a vent transit is delivered to the active form.
    /// Forms without vent handling ignore it.
    fn on_vent(&mut self, _ctx: &mut FormContext<'_>, transit: VentTransit) {
        log::debug!("vent transit ignored by the active form: {:?}", transit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_form_animation_names() {
        assert_eq!(CharacterForm::Water.animation_name(), "water");
        assert_eq!(CharacterForm::Steam.animation_name(), "steam");
    }

    #[test]
    fn test_default_on_vent_ignores_transit() {
        let mut sprite = Sprite::new(Vec2::new(10.0, 500.0));
        let mut map = Map::new(800.0, 600.0);
        let time = GameTime::new();
        let mut events = EventQueue::new();
        let mut water = WaterState::new();

        let mut ctx = FormContext {
            sprite: &mut sprite,
            map: &mut map,
            time: &time,
            events: &mut events,
        };
        water.on_vent(
            &mut ctx,
            VentTransit {
                from: Vec2::ZERO,
                to: Vec2::new(300.0, 20.0),
            },
        );

        assert_eq!(sprite.position, Vec2::new(10.0, 500.0));
        assert!(events.drain().is_empty());
    }
}
