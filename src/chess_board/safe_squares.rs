use super::board::BOARD_SIZE;
use super::Square::Occupied;
use super::{ChessBoard, ChessField, Movement, Piece, PieceKind, SafeSquares, Square};

impl ChessBoard {
    /// Computes the per-piece legal destinations for the side to move.
    /// Recomputed fully on every call; sources with no legal move get no
    /// entry.
    pub fn find_safe_squares(&self) -> SafeSquares {
        let mut safe_squares = SafeSquares::new();

        // Probes mutate transiently and always restore, so the scratch board
        // stays identical to `self` across the whole scan.
        let mut probe = self.clone();

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let piece = match self.squares[row][col] {
                    Occupied(p) if p.color == self.active_color => p,
                    _ => continue,
                };

                let from = ChessField::new(row as u8, col as u8);
                let destinations = match piece.movement() {
                    Movement::Leap => probe.leap_destinations(piece, from),
                    Movement::Slide => probe.slide_destinations(piece, from),
                };

                if !destinations.is_empty() {
                    safe_squares.insert(from, destinations);
                }
            }
        }

        safe_squares
    }

    /// Destinations for pieces whose offsets apply once (pawn, knight, king).
    fn leap_destinations(&mut self, piece: Piece, from: ChessField) -> Vec<ChessField> {
        let mut destinations = Vec::new();

        for &(dx, dy) in piece.directions() {
            let new_row = from.row as isize + dx;
            let new_col = from.col as isize + dy;
            if !Self::are_coords_valid(new_row, new_col) {
                continue;
            }
            let to = ChessField::new(new_row as u8, new_col as u8);

            if let Occupied(target) = self.squares[to.row as usize][to.col as usize] {
                if target.color == piece.color {
                    continue;
                }
            }
            if piece.kind == PieceKind::Pawn && !self.pawn_step_allowed(piece, from, to, dx, dy) {
                continue;
            }

            if self.is_position_safe_after_move(piece, from, to) {
                destinations.push(to);
            }
        }

        destinations
    }

    /// Destinations for pieces whose offsets repeat until blocked
    /// (bishop, rook, queen). A capture ends the ray; a friendly piece ends
    /// it without being included.
    fn slide_destinations(&mut self, piece: Piece, from: ChessField) -> Vec<ChessField> {
        let mut destinations = Vec::new();

        for &(dx, dy) in piece.directions() {
            let mut new_row = from.row as isize + dx;
            let mut new_col = from.col as isize + dy;

            while Self::are_coords_valid(new_row, new_col) {
                let to = ChessField::new(new_row as u8, new_col as u8);
                let target = self.squares[to.row as usize][to.col as usize];

                if let Occupied(p) = target {
                    if p.color == piece.color {
                        break;
                    }
                }

                if self.is_position_safe_after_move(piece, from, to) {
                    destinations.push(to);
                }

                if target != Square::Empty {
                    break;
                }
                new_row += dx;
                new_col += dy;
            }
        }

        destinations
    }

    /// The pawn's occupancy rules: straight steps need empty squares (both of
    /// them for a double step), diagonal steps are captures only.
    fn pawn_step_allowed(&self, piece: Piece, from: ChessField, to: ChessField, dx: isize, dy: isize) -> bool {
        let target = self.squares[to.row as usize][to.col as usize];

        if dy == 0 {
            if target != Square::Empty {
                return false;
            }
            if dx.abs() == 2 {
                let crossed = (from.row as isize + dx.signum()) as usize;
                if self.squares[crossed][from.col as usize] != Square::Empty {
                    return false;
                }
            }
            true
        } else {
            matches!(target, Occupied(p) if p.color != piece.color)
        }
    }

    /// Simulates moving `piece` from `from` to `to` and reports whether the
    /// mover's own king stays out of check. The simulation is strictly
    /// transient: the check result is computed into a local and the grid is
    /// restored before returning, on every path.
    fn is_position_safe_after_move(&mut self, piece: Piece, from: ChessField, to: ChessField) -> bool {
        let captured = self.squares[to.row as usize][to.col as usize];
        if let Occupied(target) = captured {
            if target.color == piece.color {
                return false;
            }
        }

        self.squares[from.row as usize][from.col as usize] = Square::Empty;
        self.squares[to.row as usize][to.col as usize] = Occupied(piece);

        let safe = !self.is_in_check(piece.color);

        self.squares[from.row as usize][from.col as usize] = Occupied(piece);
        self.squares[to.row as usize][to.col as usize] = captured;

        safe
    }
}
