//! Piece values and the static glyph table.
//!
//! A [`Piece`] is an immutable color + kind pair whose display glyph is looked
//! up once at construction time.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessBoardError;

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| s.eq_ignore_ascii_case(color.name()))
            .ok_or(())
    }
}

/// Piece kind (color is carried separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| s.eq_ignore_ascii_case(kind.name()))
            .ok_or(())
    }
}

/// Display glyphs indexed by `[Color::index()][PieceKind::index()]`.
const CHARSET: [[char; 6]; 2] = [
    ['♔', '♕', '♖', '♗', '♘', '♙'],
    ['♚', '♛', '♜', '♝', '♞', '♟'],
];

/// Anything the board renderer can draw.
pub trait Glyph {
    fn glyph(&self) -> char;
}

impl<T: Glyph + ?Sized> Glyph for &T {
    fn glyph(&self) -> char {
        (**self).glyph()
    }
}

impl<T: Glyph + ?Sized> Glyph for std::rc::Rc<T> {
    fn glyph(&self) -> char {
        (**self).glyph()
    }
}

impl<T: Glyph + ?Sized> Glyph for std::sync::Arc<T> {
    fn glyph(&self) -> char {
        (**self).glyph()
    }
}

/// An immutable chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    character: char,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            character: CHARSET[color.index()][kind.index()],
        }
    }

    /// Build a piece from textual names such as `("white", "pawn")`.
    ///
    /// Names are matched case-insensitively.
    pub fn from_names(color: &str, kind: &str) -> Result<Self, ChessBoardError> {
        match (color.parse::<Color>(), kind.parse::<PieceKind>()) {
            (Ok(color), Ok(kind)) => Ok(Piece::new(color, kind)),
            _ => Err(ChessBoardError::InvalidPieceSpec {
                color: color.to_owned(),
                kind: kind.to_owned(),
            }),
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn character(&self) -> char {
        self.character
    }
}

impl Glyph for Piece {
    fn glyph(&self) -> char {
        self.character
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Color, Glyph, Piece, PieceKind};
    use crate::errors::ChessBoardError;

    #[test]
    fn glyph_fixtures() {
        assert_eq!(Piece::new(Color::White, PieceKind::Pawn).character(), '♙');
        assert_eq!(Piece::new(Color::Black, PieceKind::Pawn).character(), '♟');
        assert_eq!(Piece::new(Color::White, PieceKind::King).character(), '♔');
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).character(), '♛');
    }

    #[test]
    fn fields_are_kept_as_given() {
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(knight.color(), Color::Black);
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.glyph(), '♞');
        assert_eq!(knight.to_string(), "♞");
    }

    #[test]
    fn every_color_and_kind_has_a_distinct_glyph() {
        let glyphs: HashSet<char> = Color::ALL
            .into_iter()
            .flat_map(|color| PieceKind::ALL.map(move |kind| Piece::new(color, kind).character()))
            .collect();
        assert_eq!(glyphs.len(), 12);
    }

    #[test]
    fn from_names_parses_case_insensitively() {
        let pawn = Piece::from_names("white", "pawn").expect("white pawn should parse");
        assert_eq!(pawn, Piece::new(Color::White, PieceKind::Pawn));
        let queen = Piece::from_names("Black", "QUEEN").expect("black queen should parse");
        assert_eq!(queen.character(), '♛');
    }

    #[test]
    fn from_names_rejects_unknown_color_or_kind() {
        assert_eq!(
            Piece::from_names("green", "pawn"),
            Err(ChessBoardError::InvalidPieceSpec {
                color: "green".to_owned(),
                kind: "pawn".to_owned(),
            })
        );
        assert!(Piece::from_names("white", "archbishop").is_err());
        assert!(Piece::from_names("", "").is_err());
    }
}
