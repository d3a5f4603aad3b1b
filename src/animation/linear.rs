// src/animation/linear.rs
//
// A single straight leg between two board points at constant speed.
// An optional hop lifts the piece along a parabola while it travels.

use log::warn;
use nannou::prelude::*;

use super::{EasingType, Motion, Movable};

#[derive(Debug, Clone)]
pub struct LinearAnimation {
    id: u32,
    start_time: f32,
    duration: f32,
    from: Vec3,
    to: Vec3,
    orientation: Mat4,
    hop_height: f32,
    easing: EasingType,
    transform: Mat4,
    moving: bool,
}

impl LinearAnimation {
    pub fn new(id: u32, velocity: f32, from: Vec3, to: Vec3, start_time: f32) -> Self {
        let distance = from.distance(to);
        let duration = if velocity.is_finite() && velocity > 0.0 {
            distance / velocity
        } else {
            warn!(
                "Animation {} has unusable velocity {}, completing immediately",
                id, velocity
            );
            0.0
        };

        let mut animation = Self {
            id,
            start_time,
            duration,
            from,
            to,
            orientation: Mat4::IDENTITY,
            hop_height: 0.0,
            easing: EasingType::Linear,
            transform: Mat4::IDENTITY,
            moving: true,
        };
        animation.transform = animation.pose_at(0.0);
        animation
    }

    pub fn with_orientation(mut self, orientation: Mat4) -> Self {
        self.orientation = orientation;
        self.transform = self.pose_at(0.0);
        self
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_hop(mut self, hop_height: f32) -> Self {
        self.hop_height = hop_height;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    fn pose_at(&self, progress: f32) -> Mat4 {
        let eased = self.easing.apply(progress);
        let mut position = self.from.lerp(self.to, eased);
        position.y += 4.0 * self.hop_height * eased * (1.0 - eased);
        Mat4::from_translation(position) * self.orientation
    }
}

impl Movable for LinearAnimation {
    fn update(&mut self, current_time: f32) -> Motion {
        if !self.moving {
            return self.motion();
        }

        // times before the start hold the start pose
        let elapsed = (current_time - self.start_time).max(0.0);
        if elapsed >= self.duration {
            self.transform = self.pose_at(1.0);
            self.moving = false;
        } else {
            self.transform = self.pose_at(elapsed / self.duration);
        }
        self.motion()
    }

    fn transform(&self) -> Mat4 {
        self.transform
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn start_time(&self) -> f32 {
        self.start_time
    }

    fn delay_until(&mut self, start_time: f32) {
        self.start_time = self.start_time.max(start_time);
    }

    fn finish_time(&self) -> f32 {
        self.start_time + self.duration
    }
}
