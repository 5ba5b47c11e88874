use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How a piece projects its direction vectors across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Each offset is applied exactly once.
    Leap,
    /// Each offset is applied repeatedly until the edge or a blocker.
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    has_moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct Move {
    pub from: ChessField,
    pub to: ChessField,
}

/// Per-piece legal destinations for the side to move, keyed by source square.
/// Pieces with no legal move have no entry.
pub type SafeSquares = HashMap<ChessField, Vec<ChessField>>;

// Row deltas are absolute board deltas, so the pawn tables carry the color in
// the sign of the row component.
const WHITE_PAWN_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (2, 0), (1, -1), (1, 1)];
const BLACK_PAWN_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (-2, 0), (-1, -1), (-1, 1)];
const KNIGHT_DIRECTIONS: [(isize, isize); 8] =
    [(1, 2), (1, -2), (-1, 2), (-1, -2), (2, 1), (2, -1), (-2, 1), (-2, -1)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const QUEEN_DIRECTIONS: [(isize, isize); 8] =
    [(1, 1), (1, -1), (-1, 1), (-1, -1), (1, 0), (-1, 0), (0, 1), (0, -1)];
const KING_DIRECTIONS: [(isize, isize); 8] =
    [(1, 1), (1, -1), (-1, 1), (-1, -1), (1, 0), (-1, 0), (0, 1), (0, -1)];

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Fixed direction vectors for this piece; for pawns the row sign
    /// depends on the color.
    pub fn directions(&self) -> &'static [(isize, isize)] {
        match self.kind {
            PieceKind::Pawn => match self.color {
                Color::White => &WHITE_PAWN_DIRECTIONS,
                Color::Black => &BLACK_PAWN_DIRECTIONS,
            },
            PieceKind::Knight => &KNIGHT_DIRECTIONS,
            PieceKind::Bishop => &BISHOP_DIRECTIONS,
            PieceKind::Rook => &ROOK_DIRECTIONS,
            PieceKind::Queen => &QUEEN_DIRECTIONS,
            PieceKind::King => &KING_DIRECTIONS,
        }
    }

    pub fn movement(&self) -> Movement {
        match self.kind {
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => Movement::Leap,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => Movement::Slide,
        }
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// One-way latch; reserved for a castling/double-step collaborator.
    pub fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// FEN-style identity tag. Every color/kind pairing is spelled out.
    pub fn to_char(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => 'P',
            (Color::White, PieceKind::Knight) => 'N',
            (Color::White, PieceKind::Bishop) => 'B',
            (Color::White, PieceKind::Rook) => 'R',
            (Color::White, PieceKind::Queen) => 'Q',
            (Color::White, PieceKind::King) => 'K',
            (Color::Black, PieceKind::Pawn) => 'p',
            (Color::Black, PieceKind::Knight) => 'n',
            (Color::Black, PieceKind::Bishop) => 'b',
            (Color::Black, PieceKind::Rook) => 'r',
            (Color::Black, PieceKind::Queen) => 'q',
            (Color::Black, PieceKind::King) => 'k',
        }
    }
}

impl ChessField {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Parses a square like "e3".
    pub fn from_algebraic(algebraic: &str) -> Result<Self, String> {
        let mut chars = algebraic.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(format!("Invalid square: {}", algebraic)),
        };
        if ('a'..='h').contains(&file) && ('1'..='8').contains(&rank) {
            Ok(Self::new(rank as u8 - b'1', file as u8 - b'a'))
        } else {
            Err(format!("Invalid square: {}", algebraic))
        }
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }
}

impl Move {
    pub fn new(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Self {
            from: ChessField::new(from_row, from_col),
            to: ChessField::new(to_row, to_col),
        }
    }

    /// Parses a move like "e2e4".
    pub fn from_algebraic(algebraic: &str) -> Result<Self, String> {
        if algebraic.len() != 4 || !algebraic.is_ascii() {
            return Err(format!("Invalid move: {}", algebraic));
        }
        let from = ChessField::from_algebraic(&algebraic[0..2])?;
        let to = ChessField::from_algebraic(&algebraic[2..4])?;
        Ok(Self { from, to })
    }

    pub fn as_algebraic(&self) -> String {
        format!(
            "{}{}",
            to_algebraic_square(self.from.row, self.from.col),
            to_algebraic_square(self.to.row, self.to.col)
        )
    }
}

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char;
    let rank = (row + 1).to_string();
    format!("{}{}", file, rank)
}
