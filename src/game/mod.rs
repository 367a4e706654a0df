// Game layer: the player character, its forms, and the level it moves in

pub mod events;
pub mod forms;
pub mod map;
pub mod player;

// Re-export commonly used types
pub use events::{ControllerEvent, EventQueue};
pub use forms::{CharacterForm, FormBehavior, FormContext};
pub use map::{Map, MapError, VentToken, VentTransit};
pub use player::Player;
