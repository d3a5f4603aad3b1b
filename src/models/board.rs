// src/models/board.rs
//
// Board identifiers and the Board collaborator the selection controller
// talks to. The board owns every piece and cell; everyone else holds ids.

use std::fmt;

use super::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Light,
    Dark,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Light => Team::Dark,
            Team::Dark => Team::Light,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Light => write!(f, "light"),
            Team::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub column: u32,
    pub row: u32,
}

impl CellId {
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Offset from another cell as (columns, rows).
    pub fn offset_from(&self, other: CellId) -> (i64, i64) {
        (
            self.column as i64 - other.column as i64,
            self.row as i64 - other.row as i64,
        )
    }
}

/// The rules side of the game, as seen from the selection controller.
pub trait Board {
    fn current_team(&self) -> Team;
    fn is_finished(&self) -> bool;
    fn piece(&self, id: PieceId) -> Option<&Piece>;
    fn ready_cells(&self) -> bool;
    fn set_ready_cells(&mut self, ready: bool);
    fn move_piece_to_cell(&mut self, piece: PieceId, cell: CellId, current_time: f32);

    /// Pieces taken out of play since the last call.
    fn drain_removed_pieces(&mut self) -> Vec<PieceId> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_teams() {
        assert_eq!(Team::Light.opponent(), Team::Dark);
        assert_eq!(Team::Dark.opponent().opponent(), Team::Dark);
    }

    #[test]
    fn test_cell_offset() {
        let from = CellId::new(2, 5);
        let to = CellId::new(4, 3);
        assert_eq!(to.offset_from(from), (2, -2));
    }
}
