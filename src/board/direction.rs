//! Direction vectors and square translation.
//!
//! A [`Direction`] is a `(dx, dy)` offset applied independently to the file and
//! rank of a square. Rank index grows with board rank (rank "1" is index 0), so
//! a positive `dy` moves toward rank 8 and a positive `dx` toward the h-file.

use std::ops::{Mul, Neg};

use crate::utils::algebraic::{
    algebraic_to_file_rank, file_rank_to_square, BOARD_WIDTH, SQUARE_NAMES,
};

/// Offset in files (`dx`) and ranks (`dy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const ZERO: Direction = Direction::new(0, 0);
    pub const NORTH: Direction = Direction::new(0, 1);
    pub const SOUTH: Direction = Direction::new(0, -1);
    pub const EAST: Direction = Direction::new(1, 0);
    pub const WEST: Direction = Direction::new(-1, 0);
    pub const NORTH_EAST: Direction = Direction::new(1, 1);
    pub const NORTH_WEST: Direction = Direction::new(-1, 1);
    pub const SOUTH_EAST: Direction = Direction::new(1, -1);
    pub const SOUTH_WEST: Direction = Direction::new(-1, -1);

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl From<(i32, i32)> for Direction {
    #[inline]
    fn from((dx, dy): (i32, i32)) -> Self {
        Direction::new(dx, dy)
    }
}

/// Saturates at the `i32` bounds; any saturated component is far off the board.
impl Neg for Direction {
    type Output = Direction;

    #[inline]
    fn neg(self) -> Self::Output {
        Direction::new(self.dx.saturating_neg(), self.dy.saturating_neg())
    }
}

/// Saturates at the `i32` bounds, like [`Neg`].
impl Mul<i32> for Direction {
    type Output = Direction;

    #[inline]
    fn mul(self, rhs: i32) -> Direction {
        Direction::new(self.dx.saturating_mul(rhs), self.dy.saturating_mul(rhs))
    }
}

/// The 8 king steps around a square.
pub const KING_STEPS: [Direction; 8] = [
    Direction::SOUTH_WEST,
    Direction::WEST,
    Direction::NORTH_WEST,
    Direction::SOUTH,
    Direction::NORTH,
    Direction::SOUTH_EAST,
    Direction::EAST,
    Direction::NORTH_EAST,
];

/// Shift one axis index by `delta`, failing when the result leaves `0..8`.
///
/// Index 0 is a valid result; only negative or too-large results fail.
#[inline]
fn shift_axis(index: usize, delta: i32) -> Option<usize> {
    if delta == 0 {
        return Some(index);
    }
    let shifted = index as i64 + i64::from(delta);
    usize::try_from(shifted).ok().filter(|&i| i < BOARD_WIDTH)
}

/// Translate `notation` by `direction`.
///
/// Returns `None` if `notation` is not a board square or if either axis leaves
/// the board.
pub fn translate_notation(notation: &str, direction: impl Into<Direction>) -> Option<&'static str> {
    let direction = direction.into();
    let (file, rank) = algebraic_to_file_rank(notation).ok()?;
    let file = shift_axis(file, direction.dx)?;
    let rank = shift_axis(rank, direction.dy)?;
    Some(SQUARE_NAMES[file_rank_to_square(file, rank)])
}
