// Game action definitions and key mappings

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,

    // Form selection
    SelectDude,
    SelectWater,
    SelectSteam,
}

/// Physical keys the controller binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Digit1,
    Digit2,
    Digit3,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(Key, Action)> {
    vec![
        // Movement (arrow keys)
        (Key::ArrowLeft, Action::MoveLeft),
        (Key::ArrowRight, Action::MoveRight),
        // Form selection (number row)
        (Key::Digit1, Action::SelectDude),
        (Key::Digit2, Action::SelectWater),
        (Key::Digit3, Action::SelectSteam),
    ]
}
