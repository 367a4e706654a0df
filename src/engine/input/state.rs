// Keyboard input state with per-frame edge detection

use std::collections::{HashMap, HashSet};

use super::action::{default_bindings, Action, Key};

/// Routes key events through a binding table and tracks action state
#[derive(Debug)]
pub struct InputState {
    /// Key to action routing
    bindings: HashMap<Key, Action>,

    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,
}

impl InputState {
    /// Create an input state with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    /// Create an input state with custom bindings
    pub fn with_bindings(bindings: Vec<(Key, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Handle a key press event. Unbound keys are ignored.
    pub fn press_key(&mut self, key: Key) {
        if let Some(action) = self.bindings.get(&key) {
            self.press(*action);
        }
    }

    /// Handle a key release event. Unbound keys are ignored.
    pub fn release_key(&mut self, key: Key) {
        if let Some(action) = self.bindings.get(&key) {
            self.release(*action);
        }
    }

    /// Register an action press. Repeats while held are ignored.
    pub(crate) fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Update input state for a new frame
    /// Call this once per frame after the game update has run
    pub fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_creation() {
        let input = InputState::new();
        assert!(!input.is_pressed(Action::MoveLeft));
        assert!(!input.just_pressed(Action::SelectWater));
    }

    #[test]
    fn test_press_key_routes_to_action() {
        let mut input = InputState::new();
        input.press_key(Key::ArrowRight);
        assert!(input.is_pressed(Action::MoveRight));
        assert!(input.just_pressed(Action::MoveRight));
    }

    #[test]
    fn test_release_key() {
        let mut input = InputState::new();
        input.press_key(Key::Digit3);
        input.update();
        input.release_key(Key::Digit3);
        assert!(!input.is_pressed(Action::SelectSteam));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = InputState::new();
        input.press_key(Key::Digit2);
        assert!(input.just_pressed(Action::SelectWater));

        input.update();
        assert!(input.is_pressed(Action::SelectWater));
        assert!(!input.just_pressed(Action::SelectWater));
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let mut input = InputState::new();
        input.press_key(Key::ArrowLeft);
        input.update();
        input.press_key(Key::ArrowLeft); // OS key repeat
        assert!(!input.just_pressed(Action::MoveLeft));
        assert!(input.is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut input = InputState::with_bindings(vec![(Key::ArrowLeft, Action::MoveLeft)]);
        input.press_key(Key::Digit2);
        assert!(!input.is_pressed(Action::SelectWater));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = InputState::new();
        input.release_key(Key::ArrowLeft); // Release without pressing
        assert!(!input.is_pressed(Action::MoveLeft));
    }
}
