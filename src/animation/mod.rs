// src/animation/mod.rs
//
// Time based piece movement.
// Every animation answers the same question each frame: given the clock,
// where is the piece and is it still travelling?

pub mod combo;
pub mod easing;
pub mod linear;
pub mod move_engine;

pub use combo::ComboAnimation;
pub use easing::EasingType;
pub use linear::LinearAnimation;
pub use move_engine::MoveEngine;

use nannou::prelude::*;

/// The output of one animation update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub transform: Mat4,
    pub moving: bool,
}

pub trait Movable {
    /// Recompute the transform for `current_time`. Times must not decrease
    /// between calls; once `moving` is false it stays false.
    fn update(&mut self, current_time: f32) -> Motion;
    fn transform(&self) -> Mat4;
    fn is_moving(&self) -> bool;
    fn start_time(&self) -> f32;
    /// Push the start back to `start_time` if it is earlier. Only used on
    /// animations that have not been updated yet.
    fn delay_until(&mut self, start_time: f32);
    /// Clock time at which the motion reaches its final pose.
    fn finish_time(&self) -> f32;

    fn motion(&self) -> Motion {
        Motion {
            transform: self.transform(),
            moving: self.is_moving(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Animation {
    Linear(LinearAnimation),
    Combo(ComboAnimation),
}

impl Animation {
    pub fn id(&self) -> u32 {
        match self {
            Animation::Linear(animation) => animation.id(),
            Animation::Combo(animation) => animation.id(),
        }
    }
}

impl Movable for Animation {
    fn update(&mut self, current_time: f32) -> Motion {
        match self {
            Animation::Linear(animation) => animation.update(current_time),
            Animation::Combo(animation) => animation.update(current_time),
        }
    }

    fn transform(&self) -> Mat4 {
        match self {
            Animation::Linear(animation) => animation.transform(),
            Animation::Combo(animation) => animation.transform(),
        }
    }

    fn is_moving(&self) -> bool {
        match self {
            Animation::Linear(animation) => animation.is_moving(),
            Animation::Combo(animation) => animation.is_moving(),
        }
    }

    fn start_time(&self) -> f32 {
        match self {
            Animation::Linear(animation) => animation.start_time(),
            Animation::Combo(animation) => animation.start_time(),
        }
    }

    fn delay_until(&mut self, start_time: f32) {
        match self {
            Animation::Linear(animation) => animation.delay_until(start_time),
            Animation::Combo(animation) => animation.delay_until(start_time),
        }
    }

    fn finish_time(&self) -> f32 {
        match self {
            Animation::Linear(animation) => animation.finish_time(),
            Animation::Combo(animation) => animation.finish_time(),
        }
    }
}

impl From<LinearAnimation> for Animation {
    fn from(animation: LinearAnimation) -> Self {
        Animation::Linear(animation)
    }
}

impl From<ComboAnimation> for Animation {
    fn from(animation: ComboAnimation) -> Self {
        Animation::Combo(animation)
    }
}
