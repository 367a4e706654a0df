// Sprite animation clips and playback

use std::collections::HashMap;

/// A single animation clip
///
/// Frames are spritesheet indices in play order, so a clip can revisit a
/// frame mid-cycle (e.g. 0, 1, 2, 1 for a ping-pong style loop).
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "water", "steam")
    pub name: String,
    /// Spritesheet frame indices in play order
    pub frames: Vec<usize>,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(name: &str, frames: Vec<usize>, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frames,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frames: Vec<usize>, fps: f32) -> Self {
        Self::new(name, frames, fps, true)
    }

    /// Create a one-shot animation (plays once, holds the last frame)
    #[allow(dead_code)]
    pub fn one_shot(name: &str, frames: Vec<usize>, fps: f32) -> Self {
        Self::new(name, frames, fps, false)
    }
}

/// Manages animation playback for a sprite
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Currently playing animation name
    current_animation: String,
    /// Index into the current clip's frame list
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Whether the animation is playing
    playing: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
        }
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name, ignored if it is already playing
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.current_animation = name.to_string();
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.playing = true;
        }
    }

    /// Update the animation (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };
        if clip.frames.is_empty() {
            return;
        }

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frames.len() {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frames.len() - 1;
                    self.playing = false;
                }
            }
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Get the spritesheet frame index to display
    pub fn sheet_frame(&self) -> usize {
        self.animations
            .get(&self.current_animation)
            .and_then(|clip| clip.frames.get(self.current_frame))
            .copied()
            .unwrap_or(0)
    }

    /// Check if the animation is playing
    #[allow(dead_code)]
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
