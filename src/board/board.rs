//! Square storage for an 8x8 board addressed by algebraic notation.
//!
//! Every operation takes notation strings. Anything that is not one of the 64
//! board squares is ignored: lookups report [`Lookup::OffBoard`], mutations do
//! nothing. Callers probing board edges are expected to go through
//! [`Board::translate`] first.
//!
//! Mutations take `&mut self`, so `move_piece` can never be observed half done.

use tracing::{debug, trace};

use crate::board::direction::{translate_notation, Direction};
use crate::pieces::piece::Piece;
use crate::utils::algebraic::{
    algebraic_to_square, row_major_squares, SquareIndex, BOARD_SQUARES, BOARD_WIDTH, SQUARE_NAMES,
};

/// Result of looking a square up.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, P> {
    Occupied(&'a P),
    Empty,
    /// The notation is not one of the 64 board squares.
    OffBoard,
}

impl<P> Clone for Lookup<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Lookup<'_, P> {}

impl<'a, P> Lookup<'a, P> {
    /// The occupant, if any. Off-board folds into `None`.
    pub fn piece(self) -> Option<&'a P> {
        match self {
            Lookup::Occupied(piece) => Some(piece),
            Lookup::Empty | Lookup::OffBoard => None,
        }
    }

    pub fn is_off_board(self) -> bool {
        matches!(self, Lookup::OffBoard)
    }
}

/// A square's notation and its current occupant.
pub type SquareEntry<'a, P> = (&'static str, Option<&'a P>);

/// An 8x8 board mapping each square to an optional occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<P = Piece> {
    squares: [Option<P>; BOARD_SQUARES],
}

impl<P> Default for Board<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Board<P> {
    /// A board with all 64 squares empty.
    pub fn new() -> Self {
        debug!("creating empty board");
        Self {
            squares: std::array::from_fn(|_| None),
        }
    }

    fn index_of(notation: &str) -> Option<SquareIndex> {
        match algebraic_to_square(notation) {
            Ok(index) => Some(index),
            Err(err) => {
                trace!(notation, %err, "ignoring off-board square");
                None
            }
        }
    }

    /// Look up `notation`, distinguishing empty squares from off-board notation.
    pub fn at(&self, notation: &str) -> Lookup<'_, P> {
        match Self::index_of(notation) {
            None => Lookup::OffBoard,
            Some(index) => match &self.squares[index] {
                Some(piece) => Lookup::Occupied(piece),
                None => Lookup::Empty,
            },
        }
    }

    /// The occupant of `notation`, or `None` for empty and off-board squares.
    pub fn piece_at(&self, notation: &str) -> Option<&P> {
        self.at(notation).piece()
    }

    /// Put `piece` on `notation`, discarding whatever was there.
    ///
    /// Off-board notation leaves the board untouched and drops `piece`.
    pub fn place_piece(&mut self, piece: P, notation: &str) {
        let Some(index) = Self::index_of(notation) else {
            return;
        };
        trace!(square = notation, replaced = self.squares[index].is_some(), "placing piece");
        self.squares[index] = Some(piece);
    }

    /// Move the occupant of `from` onto `to`, capturing anything on `to`.
    ///
    /// Does nothing if either square is off the board or `from` is empty.
    pub fn move_piece(&mut self, from: &str, to: &str) {
        let (Some(from_index), Some(to_index)) = (Self::index_of(from), Self::index_of(to)) else {
            return;
        };
        let Some(piece) = self.squares[from_index].take() else {
            trace!(from, to, "nothing to move");
            return;
        };
        let captured = self.squares[to_index].replace(piece).is_some();
        trace!(from, to, captured, "moved piece");
    }

    /// Empty `notation`, returning its previous occupant.
    pub fn clear_square(&mut self, notation: &str) -> Option<P> {
        let index = Self::index_of(notation)?;
        self.squares[index].take()
    }

    /// The square reached from `notation` by `direction`, if it is on the board.
    ///
    /// `(0, 1)` moves toward rank 8, `(1, 0)` toward the h-file.
    pub fn translate(
        &self,
        notation: &str,
        direction: impl Into<Direction>,
    ) -> Option<&'static str> {
        translate_notation(notation, direction)
    }

    /// All 64 squares with their occupants, rank 8 first and `a`..=`h` within a rank.
    pub fn squares(&self) -> impl Iterator<Item = SquareEntry<'_, P>> + '_ {
        row_major_squares().map(move |index| (SQUARE_NAMES[index], self.squares[index].as_ref()))
    }

    /// The same order as [`Board::squares`], grouped into 8 rows of 8.
    pub fn rows(&self) -> Vec<Vec<SquareEntry<'_, P>>> {
        let entries: Vec<_> = self.squares().collect();
        entries.chunks(BOARD_WIDTH).map(<[_]>::to_vec).collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|square| square.is_some()).count()
    }
}
