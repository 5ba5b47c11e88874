use super::Square::Occupied;
use super::{ChessBoard, ChessField, Color, Piece, PieceKind};

/// Reconstructs a piece from its identity tag.
pub fn piece_from_char(c: char) -> Option<Piece> {
    let (color, kind) = match c {
        'P' => (Color::White, PieceKind::Pawn),
        'N' => (Color::White, PieceKind::Knight),
        'B' => (Color::White, PieceKind::Bishop),
        'R' => (Color::White, PieceKind::Rook),
        'Q' => (Color::White, PieceKind::Queen),
        'K' => (Color::White, PieceKind::King),
        'p' => (Color::Black, PieceKind::Pawn),
        'n' => (Color::Black, PieceKind::Knight),
        'b' => (Color::Black, PieceKind::Bishop),
        'r' => (Color::Black, PieceKind::Rook),
        'q' => (Color::Black, PieceKind::Queen),
        'k' => (Color::Black, PieceKind::King),
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

/// Builds a board from an 8-line diagram, rank 8 first, `.` for an empty
/// square. Test fixtures only.
pub fn board_from_diagram(diagram: &str, active_color: Color) -> Result<ChessBoard, String> {
    let mut board = ChessBoard::empty();
    board.active_color = active_color;

    let rows: Vec<&str> = diagram.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
    if rows.len() != 8 {
        return Err(format!("Expected 8 rows, got {}", rows.len()));
    }

    for (line_index, line) in rows.iter().enumerate() {
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != 8 {
            return Err(format!("Expected 8 squares in rank {}", 8 - line_index));
        }
        for (col, cell) in cells.iter().enumerate() {
            let c = match cell.chars().next() {
                Some(c) if cell.len() == 1 => c,
                _ => return Err(format!("Invalid square marker: {}", cell)),
            };
            if c == '.' {
                continue;
            }
            match piece_from_char(c) {
                Some(piece) => board.squares[7 - line_index][col] = Occupied(piece),
                None => return Err(format!("Invalid piece character: {}", c)),
            }
        }
    }

    Ok(board)
}

pub fn assert_squares(generated: &[ChessField], mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.iter().map(|f| f.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}
