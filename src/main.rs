//! Board renderer.
//!
//! Usage:
//! `cargo run -- --coords`
//! `cargo run -- --plain --move e2e4 --move e7e5 --highlight e4,e5`
//! `cargo run -- --empty`
//!
//! `NOTATION_BOARD_STYLE=plain` disables ANSI styling, `RUST_LOG` controls
//! tracing output on stderr.

use notation_board::board::board::Board;
use notation_board::utils::algebraic::is_valid_algebraic;
use notation_board::utils::render_board::{render_board, RenderConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn parse_arg_values<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
    args.windows(2)
        .filter(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
        .collect()
}

/// Split a four-character move such as `e2e4` into its squares.
fn split_move(text: &str) -> Option<(&str, &str)> {
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    let (from, to) = text.split_at(2);
    (is_valid_algebraic(from) && is_valid_algebraic(to)).then_some((from, to))
}

const DEFAULT_LOG_FILTER: &str = "notation_board=info";

/// The `RUST_LOG` filter when it is set and parses, otherwise the default.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref()))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let style = std::env::var("NOTATION_BOARD_STYLE").ok();
    let config = RenderConfig::from_args(&args, style.as_deref());

    let mut board: Board = if args.iter().any(|arg| arg == "--empty") {
        Board::new()
    } else {
        Board::with_standard_layout()
    };

    for text in parse_arg_values(&args, "--move") {
        match split_move(text) {
            Some((from, to)) => {
                tracing::info!(from, to, "applying move");
                board.move_piece(from, to);
            }
            _ => tracing::warn!(text, "skipping malformed move"),
        }
    }

    println!("{}", render_board(&board, &config));
}
