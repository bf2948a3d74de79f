//! Square index conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and the internal
//! `(file, rank)` / square-index representation used by the board storage and
//! the translation arithmetic. Square indexing is `rank * 8 + file`, so
//! `0 == a1`, `7 == h1`, and `63 == h8`.

use crate::errors::ChessBoardError;

/// Number of files and ranks on the board.
pub const BOARD_WIDTH: usize = 8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = BOARD_WIDTH * BOARD_WIDTH;

/// File letters in index order.
pub const FILES: [char; BOARD_WIDTH] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank labels in index order. Rank "1" has index 0.
pub const RANKS: [char; BOARD_WIDTH] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Board square index (`0..=63`).
pub type SquareIndex = usize;

/// Notation of every square, indexed by [`SquareIndex`].
pub const SQUARE_NAMES: [&str; BOARD_SQUARES] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", //
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", //
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", //
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4", //
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", //
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6", //
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", //
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", //
];

/// Split algebraic notation (for example: "e4") into zero-based `(file, rank)`.
#[inline]
pub fn algebraic_to_file_rank(square: &str) -> Result<(usize, usize), ChessBoardError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessBoardError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessBoardError::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessBoardError::InvalidAlgebraicChar(rank as char));
    }

    Ok(((file - b'a') as usize, (rank - b'1') as usize))
}

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<SquareIndex, ChessBoardError> {
    let (file, rank) = algebraic_to_file_rank(square)?;
    Ok(file_rank_to_square(file, rank))
}

#[inline]
pub const fn file_rank_to_square(file: usize, rank: usize) -> SquareIndex {
    rank * BOARD_WIDTH + file
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: SquareIndex) -> Result<&'static str, ChessBoardError> {
    SQUARE_NAMES
        .get(square)
        .copied()
        .ok_or(ChessBoardError::SquareIndexOutOfBounds(square))
}

/// True when `square` is one of the 64 board notations.
#[inline]
pub fn is_valid_algebraic(square: &str) -> bool {
    algebraic_to_file_rank(square).is_ok()
}

/// Square indices in display order: rank 8 first, files `a`..=`h` within a rank.
pub fn row_major_squares() -> impl Iterator<Item = SquareIndex> {
    (0..BOARD_WIDTH)
        .rev()
        .flat_map(|rank| (0..BOARD_WIDTH).map(move |file| file_rank_to_square(file, rank)))
}
