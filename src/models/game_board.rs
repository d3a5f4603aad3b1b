// src/models/game_board.rs
//
// A checkers-style board: pieces on the dark squares, turns alternate,
// a diagonal jump over an opponent captures it. This is the reference Board
// used by the app; it does not enforce the full rules of draughts.

use log::{debug, info, warn};
use nannou::prelude::*;
use std::collections::{HashMap, HashSet};

use super::{Board, CellId, Piece, PieceId, Team};
use crate::{
    animation::{Animation, MoveEngine},
    config::BoardConfig,
    render::{Material, MeshKind, PickTarget, SceneContext},
};

const CELL_PICK_OFFSET: u32 = 1000;

pub struct GameBoard {
    config: BoardConfig,
    engine: MoveEngine,

    pieces: Vec<Piece>,
    piece_cells: HashMap<PieceId, CellId>,
    occupancy: HashMap<CellId, PieceId>,
    captured: HashSet<PieceId>,
    removed: Vec<PieceId>,

    current_team: Team,
    finished: bool,
    ready_cells: bool,
    next_animation_id: u32,
}

impl GameBoard {
    pub fn new(config: BoardConfig, engine: MoveEngine) -> Self {
        let mut board = Self {
            config,
            engine,
            pieces: Vec::new(),
            piece_cells: HashMap::new(),
            occupancy: HashMap::new(),
            captured: HashSet::new(),
            removed: Vec::new(),
            current_team: Team::Light,
            finished: false,
            ready_cells: false,
            next_animation_id: 0,
        };
        board.reset();
        board
    }

    /// Puts every piece back on its starting square, light to move.
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.piece_cells.clear();
        self.occupancy.clear();
        self.captured.clear();
        self.removed.clear();
        self.current_team = Team::Light;
        self.finished = false;
        self.ready_cells = false;

        let rows = self.config.rows;
        let piece_rows = self.config.piece_rows.min(rows / 2);
        let light_rows = 0..piece_rows;
        let dark_rows = rows - piece_rows..rows;

        for (team, team_rows) in [(Team::Light, light_rows), (Team::Dark, dark_rows)] {
            for row in team_rows {
                for column in 0..self.config.columns {
                    let cell = CellId::new(column, row);
                    if !Self::is_dark_square(cell) {
                        continue;
                    }
                    let id = PieceId(self.pieces.len() as u32);
                    let position = self.cell_position(cell);
                    let signature = format!("{}{}", team, id.0);
                    self.pieces.push(Piece::new(
                        id,
                        team,
                        &signature,
                        Self::team_material(team),
                        position.x,
                        position.z,
                    ));
                    self.piece_cells.insert(id, cell);
                    self.occupancy.insert(cell, id);
                }
            }
        }

        self.refresh_eligibility();
        info!(
            "Board reset: {}x{} with {} pieces",
            self.config.columns,
            self.config.rows,
            self.pieces.len()
        );
    }

    /************************** Layout ********************************** */

    pub fn is_dark_square(cell: CellId) -> bool {
        (cell.column + cell.row) % 2 == 1
    }

    pub fn contains(&self, cell: CellId) -> bool {
        cell.column < self.config.columns && cell.row < self.config.rows
    }

    pub fn cell_position(&self, cell: CellId) -> Vec3 {
        vec3(
            cell.column as f32 * self.config.cell_size,
            0.0,
            cell.row as f32 * self.config.cell_size,
        )
    }

    /// Middle of the board in world space.
    pub fn center(&self) -> Vec3 {
        let size = self.config.cell_size;
        vec3(
            (self.config.columns.saturating_sub(1)) as f32 * size / 2.0,
            0.0,
            (self.config.rows.saturating_sub(1)) as f32 * size / 2.0,
        )
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn team_material(team: Team) -> Material {
        match team {
            Team::Light => Material::new(rgb(0.92, 0.86, 0.72)),
            Team::Dark => Material::new(rgb(0.45, 0.08, 0.08)),
        }
    }

    fn cell_material(&self, cell: CellId) -> Material {
        if self.ready_cells() && Self::is_dark_square(cell) && self.piece_at(cell).is_none() {
            Material::new(rgb(0.3, 0.55, 0.3))
        } else if Self::is_dark_square(cell) {
            Material::new(rgb(0.3, 0.2, 0.12))
        } else {
            Material::new(rgb(0.8, 0.74, 0.6))
        }
    }

    // captured pieces line up beside the board, on their owner's side
    fn graveyard_position(&self, team: Team) -> Vec3 {
        let size = self.config.cell_size;
        let count = self
            .captured
            .iter()
            .filter(|id| self.pieces[id.0 as usize].team == team)
            .count();
        let x = match team {
            Team::Light => -1.5 * size,
            Team::Dark => (self.config.columns as f32 + 0.5) * size,
        };
        vec3(x, 0.0, count as f32 * size * 0.5)
    }

    /************************** Queries ********************************** */

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece_at(&self, cell: CellId) -> Option<PieceId> {
        self.occupancy.get(&cell).copied()
    }

    pub fn cell_of(&self, piece: PieceId) -> Option<CellId> {
        self.piece_cells.get(&piece).copied()
    }

    pub fn is_captured(&self, piece: PieceId) -> bool {
        self.captured.contains(&piece)
    }

    pub fn remaining(&self, team: Team) -> usize {
        self.pieces
            .iter()
            .filter(|piece| piece.team == team && !self.captured.contains(&piece.id))
            .count()
    }

    fn refresh_eligibility(&mut self) {
        for piece in self.pieces.iter_mut() {
            piece.eligible = !self.finished
                && piece.team == self.current_team
                && !self.captured.contains(&piece.id);
        }
    }

    fn next_animation_id(&mut self) -> u32 {
        self.next_animation_id += 1;
        self.next_animation_id
    }

    /************************** Moves ********************************** */

    // The opponent piece jumped over, if this is a capturing jump.
    fn jumped_piece(&self, team: Team, from: CellId, to: CellId) -> Option<PieceId> {
        let (dx, dy) = to.offset_from(from);
        if dx.abs() != 2 || dy.abs() != 2 {
            return None;
        }
        let middle = CellId::new(
            (from.column as i64 + dx / 2) as u32,
            (from.row as i64 + dy / 2) as u32,
        );
        self.piece_at(middle)
            .filter(|id| self.pieces[id.0 as usize].team == team.opponent())
    }

    fn capture(&mut self, id: PieceId, current_time: f32) {
        let Some(cell) = self.piece_cells.remove(&id) else {
            return;
        };
        self.occupancy.remove(&cell);

        let team = self.pieces[id.0 as usize].team;
        let target = self.graveyard_position(team);
        self.captured.insert(id);
        self.removed.push(id);

        let animation_id = self.next_animation_id();
        let piece = &mut self.pieces[id.0 as usize];
        let animation = self.engine.exit(
            animation_id,
            piece.board_position(),
            target,
            Piece::orientation(),
            current_time,
        );
        // a piece still finishing its own move leaves once it lands
        piece.queue_move(animation, target.x, target.z);
        info!("Piece {} captured", piece.signature);
    }

    fn end_turn(&mut self) {
        let opponent = self.current_team.opponent();
        if self.remaining(opponent) == 0 {
            self.finished = true;
            info!("Game finished, {} wins", self.current_team);
        } else {
            self.current_team = opponent;
            debug!("Turn passes to {}", self.current_team);
        }
        self.refresh_eligibility();
    }

    /// Drives every piece's animation without drawing.
    pub fn update_pieces(&mut self, current_time: f32) {
        for piece in self.pieces.iter_mut() {
            piece.update_movement(current_time);
        }
    }

    pub fn display(&mut self, current_time: f32, scene: &mut impl SceneContext) {
        for row in 0..self.config.rows {
            for column in 0..self.config.columns {
                let cell = CellId::new(column, row);
                let pick_id = CELL_PICK_OFFSET + row * self.config.columns + column;
                scene.register_for_pick(pick_id, PickTarget::Cell(cell));
                let transform = Mat4::from_translation(self.cell_position(cell));
                scene.draw_mesh(MeshKind::Tile, &transform, &self.cell_material(cell));
            }
        }

        for piece in self.pieces.iter_mut() {
            piece.display(current_time, scene);
        }
    }
}

impl Board for GameBoard {
    fn current_team(&self) -> Team {
        self.current_team
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0 as usize)
    }

    fn ready_cells(&self) -> bool {
        self.ready_cells
    }

    fn set_ready_cells(&mut self, ready: bool) {
        self.ready_cells = ready;
    }

    fn move_piece_to_cell(&mut self, id: PieceId, cell: CellId, current_time: f32) {
        if self.finished {
            return;
        }
        let Some(piece) = self.pieces.get(id.0 as usize) else {
            warn!("Move for unknown piece {:?}", id);
            return;
        };
        let Some(from) = self.cell_of(id) else {
            warn!("Piece {} is not on the board", piece.signature);
            return;
        };
        if piece.team != self.current_team || piece.is_moving() {
            warn!("Piece {} cannot move now", piece.signature);
            return;
        }
        if !self.contains(cell) {
            warn!("Cell {:?} is off the board", cell);
            return;
        }
        if let Some(occupant) = self.piece_at(cell) {
            debug!("Cell {:?} is taken by piece {:?}", cell, occupant);
            return;
        }

        let team = piece.team;
        let source = piece.board_position();
        let target = self.cell_position(cell);
        let jumped = self.jumped_piece(team, from, cell);
        let animation_id = self.next_animation_id();

        let animation: Animation = if jumped.is_some() {
            match self
                .engine
                .jump(animation_id, source, target, Piece::orientation(), current_time)
            {
                Ok(animation) => animation,
                Err(e) => {
                    warn!("Could not plan jump: {}", e);
                    return;
                }
            }
        } else {
            self.engine
                .slide(animation_id, source, target, Piece::orientation(), current_time)
        };

        let piece = &mut self.pieces[id.0 as usize];
        if !piece.start_move(animation, target.x, target.z) {
            return;
        }
        self.occupancy.remove(&from);
        self.occupancy.insert(cell, id);
        self.piece_cells.insert(id, cell);

        if let Some(captured) = jumped {
            self.capture(captured, current_time);
        }
        self.end_turn();
    }

    fn drain_removed_pieces(&mut self) -> Vec<PieceId> {
        std::mem::take(&mut self.removed)
    }
}
