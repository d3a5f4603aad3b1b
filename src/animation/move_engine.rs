// src/animation/move_engine.rs
//
// Builds the animation for a commanded move from the movement config.
// A plain move is one hopping leg, a capture is a lift / travel / drop combo.

use log::debug;
use nannou::prelude::*;

use super::{Animation, ComboAnimation, LinearAnimation};
use crate::{config::MovementConfig, error::Result};

pub struct MoveEngine {
    pub config: MovementConfig,
}

impl MoveEngine {
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    fn leg(&self, id: u32, from: Vec3, to: Vec3, orientation: Mat4, start_time: f32) -> LinearAnimation {
        LinearAnimation::new(id, self.config.velocity, from, to, start_time)
            .with_orientation(orientation)
            .with_easing(self.config.easing)
    }

    pub fn slide(
        &self,
        id: u32,
        from: Vec3,
        to: Vec3,
        orientation: Mat4,
        start_time: f32,
    ) -> Animation {
        debug!("Planning slide {} from {:?} to {:?}", id, from, to);
        self.leg(id, from, to, orientation, start_time)
            .with_hop(self.config.hop_height)
            .into()
    }

    pub fn jump(
        &self,
        id: u32,
        from: Vec3,
        to: Vec3,
        orientation: Mat4,
        start_time: f32,
    ) -> Result<Animation> {
        debug!("Planning jump {} from {:?} to {:?}", id, from, to);
        let lift = Vec3::Y * self.config.lift_height;
        let legs = vec![
            self.leg(id, from, from + lift, orientation, start_time).into(),
            self.leg(id, from + lift, to + lift, orientation, start_time).into(),
            self.leg(id, to + lift, to, orientation, start_time).into(),
        ];
        Ok(ComboAnimation::new(id, legs)?.into())
    }

    /// Removal move for a captured piece, no hop.
    pub fn exit(
        &self,
        id: u32,
        from: Vec3,
        to: Vec3,
        orientation: Mat4,
        start_time: f32,
    ) -> Animation {
        debug!("Planning exit {} from {:?} to {:?}", id, from, to);
        self.leg(id, from, to, orientation, start_time).into()
    }
}
