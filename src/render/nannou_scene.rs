// src/render/nannou_scene.rs
//
// Top-down nannou view of the board. Board x runs right, board z runs down
// the screen, height shows as a lift and a larger disc.

use nannou::prelude::*;

use super::{Material, MeshKind, PickBuffer, PickTarget, SceneContext};

#[derive(Debug, Clone, Copy)]
pub struct BoardProjection {
    pub center: Vec3,   // board point drawn at the window origin
    pub scale: f32,     // pixels per board unit
    pub cell_size: f32, // board units
}

impl BoardProjection {
    pub fn to_screen(&self, position: Vec3) -> Point2 {
        let local = position - self.center;
        pt2(
            local.x * self.scale,
            -local.z * self.scale + local.y * self.scale * 0.5,
        )
    }

    fn tile_size(&self) -> f32 {
        self.cell_size * self.scale
    }

    fn piece_radius(&self, height: f32) -> f32 {
        self.tile_size() * 0.35 * (1.0 + height * 0.5)
    }
}

pub struct NannouScene<'a> {
    draw: &'a Draw,
    projection: BoardProjection,
    click: Option<Point2>,
    picks: &'a mut PickBuffer,
    pending_pick: Option<(u32, PickTarget)>,
}

impl<'a> NannouScene<'a> {
    pub fn new(
        draw: &'a Draw,
        projection: BoardProjection,
        click: Option<Point2>,
        picks: &'a mut PickBuffer,
    ) -> Self {
        Self {
            draw,
            projection,
            click,
            picks,
            pending_pick: None,
        }
    }
}

impl SceneContext for NannouScene<'_> {
    fn register_for_pick(&mut self, pick_id: u32, target: PickTarget) {
        self.pending_pick = Some((pick_id, target));
    }

    fn draw_mesh(&mut self, mesh: MeshKind, transform: &Mat4, material: &Material) {
        let position = transform.transform_point3(Vec3::ZERO);
        let center = self.projection.to_screen(position);

        let hit = match mesh {
            MeshKind::Tile => {
                let size = self.projection.tile_size();
                self.draw
                    .rect()
                    .xy(center)
                    .w_h(size, size)
                    .color(material.color);
                self.click.map_or(false, |click| {
                    let offset = click - center;
                    offset.x.abs() <= size / 2.0 && offset.y.abs() <= size / 2.0
                })
            }
            MeshKind::Cylinder => {
                let radius = self.projection.piece_radius(position.y);
                self.draw
                    .ellipse()
                    .xy(center)
                    .radius(radius)
                    .color(material.color);
                self.click
                    .map_or(false, |click| click.distance(center) <= radius)
            }
        };

        if let Some((pick_id, target)) = self.pending_pick.take() {
            if hit {
                self.picks.push(target, pick_id);
            }
        }
    }
}
