pub mod board;
pub mod game_board;
pub mod piece;

pub use board::{Board, CellId, PieceId, Team};
pub use game_board::GameBoard;
pub use piece::Piece;
