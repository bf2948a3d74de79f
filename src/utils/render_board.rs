//! Terminal-oriented Unicode board renderer.
//!
//! Draws rank 8 at the top and the a-file on the left, matching the board's
//! rank-grows-upward convention. Every square is three columns wide. With
//! styling enabled each square gets an ANSI background, alternating between
//! light and dark squares (a1 is dark), and each row ends with a reset.

use std::collections::BTreeSet;

use crate::board::board::Board;
use crate::pieces::piece::Glyph;
use crate::utils::algebraic::{is_valid_algebraic, FILES, RANKS};

pub const LIGHT_SQUARE: &str = "\x1b[48;5;180m";
pub const DARK_SQUARE: &str = "\x1b[48;5;137m";
pub const HIGHLIGHT_SQUARE: &str = "\x1b[48;5;108m";
pub const RESET: &str = "\x1b[0m";

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit ANSI background colors.
    pub styled: bool,
    /// Print rank labels on the left and file labels underneath.
    pub coordinates: bool,
    /// Character drawn on empty squares.
    pub empty: char,
    /// Squares drawn with the highlight background. Ignored when unstyled.
    pub highlights: BTreeSet<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            styled: true,
            coordinates: false,
            empty: ' ',
            highlights: BTreeSet::new(),
        }
    }
}

impl RenderConfig {
    /// Plain text: no escapes, dots on empty squares.
    pub fn plain() -> Self {
        Self {
            styled: false,
            empty: '·',
            ..Self::default()
        }
    }

    /// Build a config from command-line flags and the style environment value.
    ///
    /// Recognized flags: `--plain`, `--coords`, `--highlight <sq,sq,...>`.
    /// A style value of `plain` behaves like `--plain`. Highlight entries that
    /// are not board squares are skipped.
    pub fn from_args(args: &[String], style: Option<&str>) -> Self {
        let plain = args.iter().any(|arg| arg == "--plain")
            || style.is_some_and(|value| value.eq_ignore_ascii_case("plain"));
        let mut config = if plain { Self::plain() } else { Self::default() };
        config.coordinates = args.iter().any(|arg| arg == "--coords");

        for pair in args.windows(2) {
            if pair[0] == "--highlight" {
                for square in pair[1].split(',').map(str::trim) {
                    if is_valid_algebraic(square) {
                        config.highlights.insert(square.to_owned());
                    } else {
                        tracing::warn!(square, "skipping highlight outside the board");
                    }
                }
            }
        }
        config
    }
}

fn is_dark(file: usize, rank: usize) -> bool {
    (file + rank) % 2 == 0
}

/// Render the board to a string, one line per rank, without a trailing newline.
pub fn render_board<P: Glyph>(board: &Board<P>, config: &RenderConfig) -> String {
    let mut lines = Vec::with_capacity(9);

    for (row, entries) in board.rows().into_iter().enumerate() {
        let rank = 7 - row;
        let mut line = String::new();

        if config.coordinates {
            line.push(RANKS[rank]);
            line.push(' ');
        }

        for (file, (square, occupant)) in entries.into_iter().enumerate() {
            if config.styled {
                let background = if config.highlights.contains(square) {
                    HIGHLIGHT_SQUARE
                } else if is_dark(file, rank) {
                    DARK_SQUARE
                } else {
                    LIGHT_SQUARE
                };
                line.push_str(background);
            }
            line.push(' ');
            line.push(occupant.map_or(config.empty, |piece| piece.glyph()));
            line.push(' ');
        }

        if config.styled {
            line.push_str(RESET);
        }
        lines.push(line);
    }

    if config.coordinates {
        let mut footer = String::from("  ");
        for file in FILES {
            footer.push(' ');
            footer.push(file);
            footer.push(' ');
        }
        lines.push(footer);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::Arc;

    use super::{render_board, RenderConfig, DARK_SQUARE, HIGHLIGHT_SQUARE, LIGHT_SQUARE, RESET};
    use crate::board::board::Board;
    use crate::pieces::piece::{Color, Piece, PieceKind};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_empty_board_plain() {
        let board: Board = Board::new();
        let text = render_board(&board, &RenderConfig::plain());
        let expected = vec![" ·  ·  ·  ·  ·  ·  ·  · "; 8].join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn renders_standard_layout_plain_with_coordinates() {
        let board = Board::with_standard_layout();
        let config = RenderConfig {
            coordinates: true,
            ..RenderConfig::plain()
        };
        let text = render_board(&board, &config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ ");
        assert_eq!(lines[1], "7  ♟  ♟  ♟  ♟  ♟  ♟  ♟  ♟ ");
        assert_eq!(lines[4], "4  ·  ·  ·  ·  ·  ·  ·  · ");
        assert_eq!(lines[7], "1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ ");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h ");
    }

    #[test]
    fn styled_rows_alternate_backgrounds_and_reset() {
        let mut board: Board = Board::new();
        board.place_piece(Piece::new(Color::White, PieceKind::Rook), "a1");
        let text = render_board(&board, &RenderConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        let top = format!("{LIGHT_SQUARE}   {DARK_SQUARE}   ").repeat(4) + RESET;
        assert_eq!(lines[0], top);

        let bottom = format!("{DARK_SQUARE} ♖ {LIGHT_SQUARE}   ")
            + &format!("{DARK_SQUARE}   {LIGHT_SQUARE}   ").repeat(3)
            + RESET;
        assert_eq!(lines[7], bottom);
    }

    #[test]
    fn renders_shared_pieces() {
        let knight = Rc::new(Piece::new(Color::Black, PieceKind::Knight));
        let mut board: Board<Rc<Piece>> = Board::new();
        board.place_piece(Rc::clone(&knight), "b8");
        board.place_piece(Rc::clone(&knight), "g8");
        board.move_piece("g8", "f6");
        assert_eq!(Rc::strong_count(&knight), 3);

        let text = render_board(&board, &RenderConfig::plain());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " ·  ♞  ·  ·  ·  ·  ·  · ");
        assert_eq!(lines[2], " ·  ·  ·  ·  ·  ♞  ·  · ");
    }

    #[test]
    fn renders_pieces_behind_arc() {
        let mut board: Board<Arc<Piece>> = Board::new();
        board.place_piece(Arc::new(Piece::new(Color::White, PieceKind::Queen)), "d1");
        let text = render_board(&board, &RenderConfig::plain());
        assert_eq!(text.lines().last(), Some(" ·  ·  ·  ♕  ·  ·  ·  · "));
    }

    #[test]
    fn highlighted_squares_use_highlight_background() {
        let board: Board = Board::new();
        let config = RenderConfig::from_args(&args(&["--highlight", "a8,zz"]), None);
        assert_eq!(config.highlights.len(), 1);
        let text = render_board(&board, &config);
        assert!(text.starts_with(&format!("{HIGHLIGHT_SQUARE}   {DARK_SQUARE}   ")));
    }

    #[test]
    fn config_from_args_and_style() {
        let config = RenderConfig::from_args(&args(&["--coords"]), None);
        assert!(config.styled);
        assert!(config.coordinates);

        let config = RenderConfig::from_args(&args(&["--plain"]), None);
        assert_eq!(config, RenderConfig::plain());

        let config = RenderConfig::from_args(&[], Some("PLAIN"));
        assert!(!config.styled);

        let config = RenderConfig::from_args(&[], Some("fancy"));
        assert_eq!(config, RenderConfig::default());
    }
}
