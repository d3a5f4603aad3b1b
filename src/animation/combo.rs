// src/animation/combo.rs
//
// Chains animations end to end. Only one leg is driven at a time and the
// next leg starts where the previous one finished, on the same frame.

use nannou::prelude::*;

use super::{Animation, Motion, Movable};
use crate::error::{BoardvisError, Result};

#[derive(Debug, Clone)]
pub struct ComboAnimation {
    id: u32,
    animations: Vec<Animation>,
    index: usize,
    transform: Mat4,
    moving: bool,
}

impl ComboAnimation {
    pub fn new(id: u32, animations: Vec<Animation>) -> Result<Self> {
        let transform = animations
            .first()
            .map(|first| first.transform())
            .ok_or(BoardvisError::EmptyCombo(id))?;

        Ok(Self {
            id,
            animations,
            index: 0,
            transform,
            moving: true,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Position of the active leg. Stays on the last leg once finished.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    fn last_index(&self) -> usize {
        self.animations.len().saturating_sub(1)
    }

    // Advances past every leg that has finished, handing the clock on to the
    // next one so a long frame can cross several short legs.
    fn check_status(&mut self, current_time: f32) {
        loop {
            let Some(active) = self.animations.get(self.index) else {
                self.index = self.last_index();
                self.moving = false;
                return;
            };
            if active.is_moving() {
                return;
            }
            if self.index >= self.last_index() {
                self.moving = false;
                return;
            }

            let handoff = active.finish_time();
            self.index += 1;
            if let Some(next) = self.animations.get_mut(self.index) {
                next.delay_until(handoff);
                self.transform = next.update(current_time).transform;
            }
        }
    }
}

impl Movable for ComboAnimation {
    fn update(&mut self, current_time: f32) -> Motion {
        if !self.moving {
            // keep mirroring the final leg so the piece rests on its last pose
            let last = self.index.min(self.last_index());
            if let Some(final_leg) = self.animations.get_mut(last) {
                self.transform = final_leg.update(current_time).transform;
            }
            return self.motion();
        }

        match self.animations.get_mut(self.index) {
            Some(active) => {
                self.transform = active.update(current_time).transform;
                self.check_status(current_time);
            }
            None => {
                self.index = self.last_index();
                self.moving = false;
            }
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
        self.animations
            .first()
            .map(|first| first.start_time())
            .unwrap_or_default()
    }

    fn delay_until(&mut self, start_time: f32) {
        if let Some(active) = self.animations.get_mut(self.index) {
            active.delay_until(start_time);
        }
    }

    fn finish_time(&self) -> f32 {
        // later legs are only scheduled once reached, so sum what is left
        let Some(active) = self.animations.get(self.index) else {
            return 0.0;
        };
        let remaining: f32 = self.animations[self.index + 1..]
            .iter()
            .map(|leg| leg.finish_time() - leg.start_time())
            .sum();
        active.finish_time() + remaining
    }
}
