use super::Movement;
use super::Square::Occupied;
use super::{Color, Move, Piece, PieceKind, Square};

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
    pub active_color: Color,
}

impl ChessBoard {
    /// Creates an empty chess board.
    pub fn empty() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
            active_color: Color::White,
        }
    }

    /// Creates the standard 32-piece initial position, White to move.
    pub fn new() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Occupied(Piece::new(Color::White, kind));
            board.squares[7][col] = Occupied(Piece::new(Color::Black, kind));
        }
        for col in 0..BOARD_SIZE {
            board.squares[1][col] = Occupied(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[6][col] = Occupied(Piece::new(Color::Black, PieceKind::Pawn));
        }
        board
    }

    /// Read-only projection of the board: row-major identity tags for
    /// rendering collaborators.
    pub fn board_view(&self) -> [[Option<char>; BOARD_SIZE]; BOARD_SIZE] {
        let mut view = [[None; BOARD_SIZE]; BOARD_SIZE];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Occupied(piece) = self.squares[row][col] {
                    view[row][col] = Some(piece.to_char());
                }
            }
        }
        view
    }

    /// Display color of a square: dark iff row and column share parity.
    pub fn is_square_dark(row: u8, col: u8) -> bool {
        row % 2 == col % 2
    }

    pub(crate) fn are_coords_valid(row: isize, col: isize) -> bool {
        (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
    }

    /// Scans every opposing piece's reach for the king of `color`.
    /// Pawns threaten only on their capture diagonals.
    pub fn is_in_check(&self, color: Color) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let piece = match self.squares[row][col] {
                    Occupied(p) if p.color != color => p,
                    _ => continue,
                };

                for &(dx, dy) in piece.directions() {
                    match piece.movement() {
                        Movement::Leap => {
                            if piece.kind == PieceKind::Pawn && dy == 0 {
                                continue;
                            }
                            let new_row = row as isize + dx;
                            let new_col = col as isize + dy;
                            if !Self::are_coords_valid(new_row, new_col) {
                                continue;
                            }
                            if self.holds_king_of(new_row as usize, new_col as usize, color) {
                                return true;
                            }
                        }
                        Movement::Slide => {
                            let mut new_row = row as isize + dx;
                            let mut new_col = col as isize + dy;
                            while Self::are_coords_valid(new_row, new_col) {
                                if self.holds_king_of(new_row as usize, new_col as usize, color) {
                                    return true;
                                }
                                if self.squares[new_row as usize][new_col as usize] != Square::Empty {
                                    break;
                                }
                                new_row += dx;
                                new_col += dy;
                            }
                        }
                    }
                }
            }
        }
        false
    }

    fn holds_king_of(&self, row: usize, col: usize, color: Color) -> bool {
        matches!(
            self.squares[row][col],
            Occupied(attacked) if attacked.kind == PieceKind::King && attacked.color == color
        )
    }

    /// Applies a move the driver already validated against `find_safe_squares`.
    /// Captures by overwrite, latches the piece's moved flag and passes move
    /// rights to the opponent.
    pub fn make_move(&mut self, mv: Move) {
        let mut piece = match self.squares[mv.from.row as usize][mv.from.col as usize] {
            Occupied(p) => p,
            Square::Empty => return,
        };
        piece.mark_moved();

        self.squares[mv.from.row as usize][mv.from.col as usize] = Square::Empty;
        self.squares[mv.to.row as usize][mv.to.col as usize] = Occupied(piece);

        self.active_color = self.active_color.opposite();
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in (0..BOARD_SIZE).rev() {
            // Render rows from top (8) to bottom (1)
            board_representation.push_str(&format!("{} │", row + 1));
            for col in 0..BOARD_SIZE {
                let square = match &self.squares[row][col] {
                    Square::Empty => ' ',
                    Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", row + 1));

            if row > 0 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{board_from_diagram, piece_from_char};
    use super::super::ChessField;
    use super::*;

    #[test]
    fn test_initial_position() {
        let board = ChessBoard::new();
        assert_eq!(board.active_color, Color::White);

        let e1 = ChessField::from_algebraic("e1").unwrap();
        assert_eq!(
            board.squares[e1.row as usize][e1.col as usize],
            Occupied(Piece::new(Color::White, PieceKind::King))
        );
        let d8 = ChessField::from_algebraic("d8").unwrap();
        assert_eq!(
            board.squares[d8.row as usize][d8.col as usize],
            Occupied(Piece::new(Color::Black, PieceKind::Queen))
        );
        for col in 0..8 {
            assert_eq!(board.squares[1][col], Occupied(Piece::new(Color::White, PieceKind::Pawn)));
            assert_eq!(board.squares[6][col], Occupied(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.squares[row][col], Square::Empty);
            }
        }

        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn test_board_view_round_trip() {
        let board = ChessBoard::new();
        let view = board.board_view();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match board.squares[row][col] {
                    Occupied(piece) => {
                        let tag = view[row][col].unwrap();
                        let reconstructed = piece_from_char(tag).unwrap();
                        assert_eq!(reconstructed.color, piece.color);
                        assert_eq!(reconstructed.kind, piece.kind);
                    }
                    Square::Empty => assert_eq!(view[row][col], None),
                }
            }
        }
    }

    #[test]
    fn test_is_square_dark() {
        // a1 is a dark square, h1 a light one.
        assert!(ChessBoard::is_square_dark(0, 0));
        assert!(!ChessBoard::is_square_dark(0, 7));
        assert!(!ChessBoard::is_square_dark(7, 0));
        assert!(ChessBoard::is_square_dark(7, 7));
        assert!(ChessBoard::is_square_dark(3, 3));
    }

    #[test]
    fn test_is_in_check_by_rook() {
        let board = board_from_diagram(
            "r . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             K . . . . . . .",
            Color::White,
        )
        .unwrap();
        assert!(board.is_in_check(Color::White));

        // An intervening piece blocks the slide, regardless of its color.
        let board = board_from_diagram(
            "r . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             p . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             K . . . . . . .",
            Color::White,
        )
        .unwrap();
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn test_is_in_check_by_knight_and_bishop() {
        let board = board_from_diagram(
            ". . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . n . . . . . .\n\
             . . . . . . . .\n\
             K . . . . . . .",
            Color::White,
        )
        .unwrap();
        assert!(board.is_in_check(Color::White));

        let board = board_from_diagram(
            ". . . . . . . b\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             K . . . . . . .",
            Color::White,
        )
        .unwrap();
        assert!(board.is_in_check(Color::White));
    }

    #[test]
    fn test_pawns_give_check_only_diagonally() {
        // Black pawn directly above the king: no check.
        let board = board_from_diagram(
            ". . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . p . . . .\n\
             . . . K . . . .",
            Color::White,
        )
        .unwrap();
        assert!(!board.is_in_check(Color::White));

        // Black pawn diagonally above: check.
        let board = board_from_diagram(
            ". . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . p . . . . .\n\
             . . . K . . . .",
            Color::White,
        )
        .unwrap();
        assert!(board.is_in_check(Color::White));

        // The pawn's double-step offset never threatens.
        let board = board_from_diagram(
            ". . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . p . . . .\n\
             . . . . . . . .\n\
             . . . K . . . .",
            Color::White,
        )
        .unwrap();
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn test_make_move_applies_capture_and_flips_move_rights() {
        let mut board = ChessBoard::new();
        board.make_move(Move::from_algebraic("e2e4").unwrap());
        assert_eq!(board.active_color, Color::Black);
        assert_eq!(board.squares[1][4], Square::Empty);
        match board.squares[3][4] {
            Occupied(piece) => {
                assert_eq!(piece.kind, PieceKind::Pawn);
                assert_eq!(piece.color, Color::White);
                assert!(piece.has_moved());
            }
            Square::Empty => panic!("pawn missing after move"),
        }

        board.make_move(Move::from_algebraic("d7d5").unwrap());
        board.make_move(Move::from_algebraic("e4d5").unwrap());
        assert_eq!(board.active_color, Color::Black);
        match board.squares[4][3] {
            Occupied(piece) => {
                assert_eq!(piece.color, Color::White);
                assert_eq!(piece.kind, PieceKind::Pawn);
            }
            Square::Empty => panic!("capture did not land"),
        }
    }

    #[test]
    fn test_render_to_string() {
        let board = ChessBoard::new();
        let rendered = board.render_to_string();
        assert!(rendered.contains("    a   b   c   d   e   f   g   h  "));
        assert!(rendered.contains("8 │ r │ n │ b │ q │ k │ b │ n │ r │ 8"));
        assert!(rendered.contains("1 │ R │ N │ B │ Q │ K │ B │ N │ R │ 1"));
    }
}
