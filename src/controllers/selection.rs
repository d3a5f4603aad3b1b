// src/controllers/selection.rs
//
// Turns the frame's pick results into moves.
// A pick on an eligible piece of the side to move selects it; a pick on a
// cell while a piece is selected commands the board to move it there.

use log::debug;

use crate::{
    models::{Board, CellId, PieceId},
    render::{PickBuffer, PickTarget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    PieceSelected(PieceId),
}

#[derive(Debug)]
pub struct SelectionController {
    selected_piece: Option<PieceId>,
    selected_cell: Option<CellId>,
    pick_enabled: bool,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            selected_piece: None,
            selected_cell: None,
            pick_enabled: true,
        }
    }

    pub fn state(&self) -> SelectionState {
        match self.selected_piece {
            Some(piece) => SelectionState::PieceSelected(piece),
            None => SelectionState::Idle,
        }
    }

    pub fn selected_piece(&self) -> Option<PieceId> {
        self.selected_piece
    }

    pub fn selected_cell(&self) -> Option<CellId> {
        self.selected_cell
    }

    pub fn is_pick_enabled(&self) -> bool {
        self.pick_enabled
    }

    pub fn set_pick_enabled(&mut self, enabled: bool) {
        self.pick_enabled = enabled;
    }

    pub fn clear(&mut self) {
        self.selected_piece = None;
        self.selected_cell = None;
    }

    /// Drops the selection if it refers to `piece`. Returns true if it did.
    pub fn forget_piece(&mut self, piece: PieceId) -> bool {
        if self.selected_piece == Some(piece) {
            self.clear();
            true
        } else {
            false
        }
    }

    /// Runs once per frame, before pieces are updated. The buffer is always
    /// left empty, picks never carry over to the next frame.
    pub fn process_picks<B: Board>(
        &mut self,
        picks: &mut PickBuffer,
        board: &mut B,
        current_time: f32,
    ) {
        if self.pick_enabled && !board.is_finished() {
            for pick in picks.drain() {
                match pick.target {
                    PickTarget::Piece(piece) => self.pick_piece(piece, board),
                    PickTarget::Cell(cell) => self.pick_cell(cell, board, current_time),
                }
            }
        } else {
            picks.drain().for_each(drop);
        }

        let mut forgot = false;
        for piece in board.drain_removed_pieces() {
            forgot |= self.forget_piece(piece);
        }
        if forgot {
            board.set_ready_cells(false);
        }
    }

    fn pick_piece<B: Board>(&mut self, piece: PieceId, board: &mut B) {
        let accepted = board
            .piece(piece)
            .is_some_and(|p| p.eligible && p.team == board.current_team());

        if accepted {
            debug!("Selected piece {:?}", piece);
            self.selected_piece = Some(piece);
            board.set_ready_cells(true);
        } else {
            debug!("Ignoring pick on piece {:?}", piece);
        }
    }

    fn pick_cell<B: Board>(&mut self, cell: CellId, board: &mut B, current_time: f32) {
        self.selected_cell = Some(cell);

        if let Some(piece) = self.selected_piece {
            debug!("Moving piece {:?} to {:?}", piece, cell);
            board.move_piece_to_cell(piece, cell, current_time);
            self.clear();
            board.set_ready_cells(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Piece, Team};
    use crate::render::Material;

    struct MockBoard {
        pieces: Vec<Piece>,
        current_team: Team,
        finished: bool,
        ready_cells: bool,
        moves: Vec<(PieceId, CellId, f32)>,
        removed: Vec<PieceId>,
    }

    impl MockBoard {
        fn new() -> Self {
            let mut pieces = Vec::new();
            for (i, team) in [Team::Light, Team::Light, Team::Dark].into_iter().enumerate() {
                let mut piece = Piece::new(
                    PieceId(i as u32),
                    team,
                    &format!("p{}", i),
                    Material::default(),
                    i as f32,
                    0.0,
                );
                piece.eligible = team == Team::Light;
                pieces.push(piece);
            }
            Self {
                pieces,
                current_team: Team::Light,
                finished: false,
                ready_cells: false,
                moves: Vec::new(),
                removed: Vec::new(),
            }
        }
    }

    impl Board for MockBoard {
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

        fn move_piece_to_cell(&mut self, piece: PieceId, cell: CellId, current_time: f32) {
            self.moves.push((piece, cell, current_time));
        }

        fn drain_removed_pieces(&mut self) -> Vec<PieceId> {
            std::mem::take(&mut self.removed)
        }
    }

    fn picks(targets: &[PickTarget]) -> PickBuffer {
        let mut buffer = PickBuffer::new();
        for (i, target) in targets.iter().enumerate() {
            buffer.push(*target, i as u32);
        }
        buffer
    }

    const LIGHT: PickTarget = PickTarget::Piece(PieceId(0));
    const OTHER_LIGHT: PickTarget = PickTarget::Piece(PieceId(1));
    const DARK: PickTarget = PickTarget::Piece(PieceId(2));

    fn cell(column: u32, row: u32) -> PickTarget {
        PickTarget::Cell(CellId::new(column, row))
    }

    #[test]
    fn test_piece_then_cell_in_one_frame_moves_once() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();
        let mut buffer = picks(&[LIGHT, cell(2, 3)]);

        controller.process_picks(&mut buffer, &mut board, 1.0);

        assert_eq!(board.moves, vec![(PieceId(0), CellId::new(2, 3), 1.0)]);
        assert_eq!(controller.selected_piece(), None);
        assert_eq!(controller.selected_cell(), None);
        assert_eq!(controller.state(), SelectionState::Idle);
        assert!(!board.ready_cells);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_piece_and_cell_across_frames() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();

        controller.process_picks(&mut picks(&[LIGHT]), &mut board, 1.0);
        assert_eq!(controller.state(), SelectionState::PieceSelected(PieceId(0)));
        assert!(board.ready_cells);

        controller.process_picks(&mut PickBuffer::new(), &mut board, 2.0);
        assert_eq!(controller.state(), SelectionState::PieceSelected(PieceId(0)));

        controller.process_picks(&mut picks(&[cell(1, 1)]), &mut board, 3.0);
        assert_eq!(board.moves, vec![(PieceId(0), CellId::new(1, 1), 3.0)]);
        assert_eq!(controller.state(), SelectionState::Idle);
        assert!(!board.ready_cells);
    }

    #[test]
    fn test_cell_without_piece_is_ignored() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();

        controller.process_picks(&mut picks(&[cell(0, 0)]), &mut board, 1.0);

        assert!(board.moves.is_empty());
        assert_eq!(controller.selected_piece(), None);
        assert_eq!(controller.state(), SelectionState::Idle);
        assert!(!board.ready_cells);
    }

    #[test]
    fn test_wrong_team_and_ineligible_pieces_are_ignored() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();
        board.pieces[1].eligible = false;

        controller.process_picks(&mut picks(&[DARK, OTHER_LIGHT]), &mut board, 1.0);
        assert_eq!(controller.state(), SelectionState::Idle);
        assert!(!board.ready_cells);

        // an eligible piece of the side not to move is ignored too
        board.pieces[2].eligible = true;
        controller.process_picks(&mut picks(&[DARK]), &mut board, 2.0);
        assert_eq!(controller.state(), SelectionState::Idle);
    }

    #[test]
    fn test_unknown_piece_is_ignored() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();
        controller.process_picks(&mut picks(&[PickTarget::Piece(PieceId(99))]), &mut board, 1.0);
        assert_eq!(controller.state(), SelectionState::Idle);
    }

    #[test]
    fn test_last_eligible_piece_wins() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();

        controller.process_picks(&mut picks(&[LIGHT, OTHER_LIGHT, DARK]), &mut board, 1.0);
        assert_eq!(controller.state(), SelectionState::PieceSelected(PieceId(1)));
    }

    #[test]
    fn test_cell_before_piece_in_same_frame_does_not_move() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();

        controller.process_picks(&mut picks(&[cell(1, 0), LIGHT]), &mut board, 1.0);
        assert!(board.moves.is_empty());
        assert_eq!(controller.state(), SelectionState::PieceSelected(PieceId(0)));
    }

    #[test]
    fn test_disabled_picking_drains_without_effect() {
        let mut controller = SelectionController::new();
        controller.set_pick_enabled(false);
        let mut board = MockBoard::new();
        let mut buffer = picks(&[LIGHT, cell(1, 1)]);

        controller.process_picks(&mut buffer, &mut board, 1.0);
        assert!(buffer.is_empty());
        assert!(board.moves.is_empty());
        assert_eq!(controller.state(), SelectionState::Idle);

        // nothing from the disabled frame leaks into the next one
        controller.set_pick_enabled(true);
        controller.process_picks(&mut buffer, &mut board, 2.0);
        assert!(board.moves.is_empty());
    }

    #[test]
    fn test_finished_game_ignores_picks() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();
        board.finished = true;
        let mut buffer = picks(&[LIGHT, cell(1, 1)]);

        controller.process_picks(&mut buffer, &mut board, 1.0);
        assert!(buffer.is_empty());
        assert!(board.moves.is_empty());
    }

    #[test]
    fn test_removed_piece_is_forgotten() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();

        controller.process_picks(&mut picks(&[LIGHT]), &mut board, 1.0);
        board.removed.push(PieceId(0));
        controller.process_picks(&mut PickBuffer::new(), &mut board, 2.0);

        assert_eq!(controller.state(), SelectionState::Idle);
        assert!(!board.ready_cells);

        controller.process_picks(&mut picks(&[cell(1, 1)]), &mut board, 3.0);
        assert!(board.moves.is_empty());
    }

    #[test]
    fn test_forget_other_piece_keeps_selection() {
        let mut controller = SelectionController::new();
        let mut board = MockBoard::new();
        controller.process_picks(&mut picks(&[LIGHT]), &mut board, 1.0);
        assert!(!controller.forget_piece(PieceId(2)));
        assert_eq!(controller.state(), SelectionState::PieceSelected(PieceId(0)));
    }
}
