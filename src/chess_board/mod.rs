pub mod model;
pub use model::{to_algebraic_square, ChessField, Color, Move, Movement, Piece, PieceKind, SafeSquares, Square};

mod board;
mod safe_squares;
#[cfg(test)]
pub mod test_utils;
pub use board::{ChessBoard, BOARD_SIZE};
