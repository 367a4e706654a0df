use anyhow::Result;
use glam::Vec2;
use log::{debug, info};

mod core;
mod engine;
mod game;

use crate::engine::input::{InputState, Key};
use crate::engine::time::{FIXED_TIMESTEP, GameTime};
use crate::game::events::ControllerEvent;
use crate::game::map::Map;
use crate::game::player::Player;

/// Frames the scripted demo runs for (7 seconds at 60 updates per second)
const DEMO_FRAMES: u64 = 420;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Phase Change...");

    let mut map = Map::new(1280.0, 960.0);
    let mut time = GameTime::new();
    let mut input = InputState::new();
    let mut player = Player::new(Vec2::new(10.0, 500.0), &mut map, &time);

    // Headless run: a fixed key script walks the character right as water,
    // switches to steam, rides a vent transit, has a switch request denied
    // mid-teleport, then condenses back to water once the trip completes
    for frame in 0..DEMO_FRAMES {
        match frame {
            0 => input.press_key(Key::ArrowRight),
            40 => input.press_key(Key::Digit1),
            41 => input.release_key(Key::Digit1),
            58 => input.release_key(Key::ArrowRight),
            60 => input.press_key(Key::Digit3),
            61 => input.release_key(Key::Digit3),
            130 => input.press_key(Key::Digit2),
            131 => input.release_key(Key::Digit2),
            300 => input.press_key(Key::Digit2),
            301 => input.release_key(Key::Digit2),
            _ => {}
        }

        // A duct sensor fires while the steam form is drifting
        if frame == 120 {
            map.trigger_vent(Vec2::new(100.0, 50.0), Vec2::new(300.0, 20.0));
        }

        time.advance(FIXED_TIMESTEP);
        player.update(&mut map, &time, &input, FIXED_TIMESTEP);
        input.update();

        for event in player.drain_events() {
            match event {
                ControllerEvent::StateEntered { form } => {
                    info!("[{:>3}] entered form {:?}", frame, form);
                }
                ControllerEvent::TransitionDenied { from, requested } => {
                    info!("[{:>3}] change {:?} -> {:?} denied", frame, from, requested);
                }
                ControllerEvent::TeleportStarted { from, to } => {
                    info!("[{:>3}] teleport started {:?} -> {:?}", frame, from, to);
                }
                ControllerEvent::TeleportCompleted { at } => {
                    info!("[{:>3}] teleport completed at {:.2}s", frame, at);
                }
            }
        }

        if frame % 60 == 0 {
            debug!(
                "[{:>3}] {:?} pos ({:.1}, {:.1}) anim {} frame {} teleporting {}",
                frame,
                player.form(),
                player.sprite.position.x,
                player.sprite.position.y,
                player.sprite.animations.current_animation(),
                player.sprite.animations.sheet_frame(),
                player.is_teleporting()
            );
        }
    }

    info!(
        "Demo finished after {} frames: {:?} at {:?}, last vent exit {:.2}s",
        time.frame_count(),
        player.form(),
        player.sprite.position,
        player.last_exit_vent()
    );
    info!(
        "Collision hooks: {} platform, {} duct; vent slot held: {}",
        map.platform_collisions(),
        map.duct_collisions(),
        map.has_vent_handler()
    );

    Ok(())
}
