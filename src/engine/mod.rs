// Engine modules: physics, animation, tweens, input, timing

pub mod animation;
pub mod body;
pub mod input;
pub mod sprite;
pub mod time;
pub mod tween;
