// Observable controller events

use std::collections::VecDeque;

use glam::Vec2;

use crate::game::forms::CharacterForm;

/// Events emitted by the player controller.
///
/// The host drains these once per frame; denied transitions and teleport
/// milestones are visible here rather than through return values.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    /// A form finished initializing and became active
    StateEntered { form: CharacterForm },

    /// A requested form change was vetoed by the active form
    TransitionDenied {
        from: CharacterForm,
        requested: CharacterForm,
    },

    /// A vent transit was accepted and the teleport sequence began
    TeleportStarted { from: Vec2, to: Vec2 },

    /// The teleport sequence finished, with the completion timestamp in
    /// elapsed seconds
    TeleportCompleted { at: f32 },
}

/// FIFO queue of pending controller events
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<ControllerEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Append an event to the queue
    pub fn emit(&mut self, event: ControllerEvent) {
        self.events.push_back(event);
    }

    /// Remove and return all pending events in emission order
    pub fn drain(&mut self) -> Vec<ControllerEvent> {
        self.events.drain(..).collect()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
