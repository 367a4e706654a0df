// Input handling system
//
// Keyboard input for a single player: key events are routed through a
// binding table into game actions with per-frame edge detection.
//
// ## Architecture
//
// - `action`: Defines game actions, physical keys and default bindings
// - `state`: Pressed and just-pressed action tracking
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputState, Key};
//
// let mut input = InputState::new();
//
// // In your event loop, forward key events
// input.press_key(Key::ArrowRight);
//
// // Query input state during the game update
// if input.just_pressed(Action::SelectSteam) {
//     // Switch to the steam form
// }
//
// // At the end of each frame, clear the edge sets
// input.update();
// ```

pub mod action;
pub mod state;

// Re-export commonly used types
pub use action::{default_bindings, Action, Key};
pub use state::InputState;
