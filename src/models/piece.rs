// src/models/piece.rs
//
// A game piece. It rests on the board under a fixed transform and, while a
// move is running, takes its transform from the active animation.

use log::{debug, warn};
use nannou::prelude::*;
use std::f32::consts::PI;

use super::{PieceId, Team};
use crate::{
    animation::{Animation, ComboAnimation, Movable},
    render::{Material, MeshKind, PickTarget, SceneContext},
};

#[derive(Debug, Clone)]
pub struct Piece {
    pub id: PieceId,
    pub team: Team,
    pub signature: String,
    pub material: Material,
    pub mesh: MeshKind,
    pub eligible: bool,

    // board coordinates
    pos_x: f32,
    pos_z: f32,

    moving: bool,
    animation: Option<Animation>,
    rest_transform: Mat4,
    transform: Mat4,
}

impl Piece {
    pub fn new(
        id: PieceId,
        team: Team,
        signature: &str,
        material: Material,
        pos_x: f32,
        pos_z: f32,
    ) -> Self {
        let rest_transform = Self::rest_transform_at(pos_x, pos_z);
        Self {
            id,
            team,
            signature: signature.to_string(),
            material,
            mesh: MeshKind::Cylinder,
            eligible: false,
            pos_x,
            pos_z,
            moving: false,
            animation: None,
            rest_transform,
            transform: rest_transform,
        }
    }

    /// Cylinders are modelled along Z, stand them up on the board.
    pub fn orientation() -> Mat4 {
        Mat4::from_rotation_x(-PI / 2.0)
    }

    pub fn rest_transform_at(pos_x: f32, pos_z: f32) -> Mat4 {
        Mat4::from_translation(vec3(pos_x, 0.0, pos_z)) * Self::orientation()
    }

    pub fn board_position(&self) -> Vec3 {
        vec3(self.pos_x, 0.0, self.pos_z)
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    pub fn rest_transform(&self) -> Mat4 {
        self.rest_transform
    }

    /// Hands the piece a move towards (pos_x, pos_z). Refused while another
    /// move is still running.
    pub fn start_move(&mut self, animation: Animation, pos_x: f32, pos_z: f32) -> bool {
        if self.moving {
            warn!(
                "Piece {} is already moving, ignoring animation {}",
                self.signature,
                animation.id()
            );
            return false;
        }

        debug!(
            "Piece {} starts animation {} towards ({}, {})",
            self.signature,
            animation.id(),
            pos_x,
            pos_z
        );
        self.pos_x = pos_x;
        self.pos_z = pos_z;
        self.rest_transform = Self::rest_transform_at(pos_x, pos_z);
        self.animation = Some(animation);
        self.moving = true;
        true
    }

    /// Like `start_move`, but a running move is finished first: the new
    /// animation is chained after it and starts when it ends.
    pub fn queue_move(&mut self, mut animation: Animation, pos_x: f32, pos_z: f32) {
        let running = match self.animation.take() {
            Some(current) if self.moving => current,
            _ => {
                self.moving = false;
                self.start_move(animation, pos_x, pos_z);
                return;
            }
        };

        animation.delay_until(running.finish_time());
        let id = animation.id();
        let chained = match ComboAnimation::new(id, vec![running, animation]) {
            Ok(combo) => combo,
            Err(e) => {
                warn!("Piece {} could not queue animation {}: {}", self.signature, id, e);
                return;
            }
        };

        debug!(
            "Piece {} queues animation {} towards ({}, {})",
            self.signature, id, pos_x, pos_z
        );
        self.pos_x = pos_x;
        self.pos_z = pos_z;
        self.rest_transform = Self::rest_transform_at(pos_x, pos_z);
        self.animation = Some(chained.into());
    }

    pub fn update_movement(&mut self, current_time: f32) {
        if !self.moving {
            return;
        }

        let still_moving = match &mut self.animation {
            Some(animation) => {
                let motion = animation.update(current_time);
                self.transform = motion.transform;
                motion.moving
            }
            None => false,
        };

        if !still_moving {
            debug!("Piece {} finished moving", self.signature);
            self.moving = false;
            self.animation = None;
            self.transform = self.rest_transform;
        }
    }

    pub fn display(&mut self, current_time: f32, scene: &mut impl SceneContext) {
        scene.register_for_pick(self.id.0, PickTarget::Piece(self.id));
        self.update_movement(current_time);
        scene.draw_mesh(self.mesh, &self.transform, &self.material);
    }
}
