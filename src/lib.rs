//! Crate root module declarations for the notation board.
//!
//! An 8x8 chess board addressed purely by algebraic notation: square storage,
//! direction-vector translation between squares, immutable piece values with
//! their display glyphs, and a terminal renderer.

pub mod board {
    pub mod board;
    pub mod direction;
    pub mod standard_layout;
}

pub mod pieces {
    pub mod piece;
}

pub mod errors;

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
