//! Rules kernel for chess: board state, check detection and the
//! safe-move computation consumed by a UI or game-management driver.

pub mod chess_board;
