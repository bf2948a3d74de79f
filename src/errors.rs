//! Errors used throughout the board model.
//!
//! Board operations never fail on bad addressing; they degrade to no-ops. The
//! variants here surface from the notation helpers in `utils::algebraic` and
//! from piece construction, where silently accepting bad input would leak an
//! empty glyph into rendering.

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessBoardError {
    /// A square notation string did not have the two-character `<file><rank>` form.
    ///
    /// Payload: the original string.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicString(String),

    /// A file or rank character was outside `a`..=`h` / `1`..=`8`.
    #[error("invalid algebraic character: {0:?}")]
    InvalidAlgebraicChar(char),

    /// A square index outside `0..=63`.
    #[error("square index out of bounds: {0}")]
    SquareIndexOutOfBounds(usize),

    /// A piece was requested with an unrecognized color or kind name.
    ///
    /// Payload: the color and kind names as given by the caller.
    #[error("invalid piece specification: color {color:?}, kind {kind:?}")]
    InvalidPieceSpec { color: String, kind: String },
}
