//! The standard chess starting layout.

use crate::board::board::Board;
use crate::pieces::piece::{Color, Piece, PieceKind};
use crate::utils::algebraic::FILES;

/// Back-rank kinds from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 32 `(square, piece)` placements of a new game.
pub fn standard_layout() -> Vec<(String, Piece)> {
    let mut placements = Vec::with_capacity(32);
    for (color, back_rank, pawn_rank) in [(Color::White, '1', '2'), (Color::Black, '8', '7')] {
        for (file, kind) in FILES.iter().zip(BACK_RANK) {
            placements.push((format!("{file}{back_rank}"), Piece::new(color, kind)));
            placements.push((format!("{file}{pawn_rank}"), Piece::new(color, PieceKind::Pawn)));
        }
    }
    placements
}

impl Board<Piece> {
    /// A board set up for a new game.
    pub fn with_standard_layout() -> Self {
        let mut board = Board::new();
        for (square, piece) in standard_layout() {
            board.place_piece(piece, &square);
        }
        board
    }
}
