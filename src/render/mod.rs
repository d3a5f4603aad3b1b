// src/render/mod.rs
// The hand-off between the game core and whatever draws the board.
// Pieces and cells describe themselves through a SceneContext; the
// nannou implementation draws them top-down and hit-tests mouse clicks.

pub mod nannou_scene;
pub mod pick;

pub use nannou_scene::{BoardProjection, NannouScene};
pub use pick::{PickBuffer, PickResult, PickTarget};

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    Cylinder,
    Tile,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
}

impl Material {
    pub fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: rgb(0.5, 0.5, 0.5),
        }
    }
}

/// The non-owning scene handle passed to everything that draws.
pub trait SceneContext {
    /// Marks the next drawn mesh as pickable under `pick_id`.
    fn register_for_pick(&mut self, pick_id: u32, target: PickTarget);
    fn draw_mesh(&mut self, mesh: MeshKind, transform: &Mat4, material: &Material);
}
