//! Chess position tracking and FEN bookkeeping.
//!
//! A `Position` is an 8x8 grid of pieces plus the FEN bookkeeping fields
//! (side to move, castling rights, en passant target, halfmove clock and
//! fullmove number). Moves are applied mechanically: any piece may go to
//! any square, and only the bookkeeping fields are kept consistent.
//!
//! # Example
//! ```
//! use fen_board::position::Position;
//!
//! let mut position = Position::new();
//! position.apply_move_str("e2e4").unwrap();
//! assert_eq!(
//!     position.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod builder;
mod error;
mod fen;
mod make_move;
pub mod prelude;
mod state;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use make_move::MoveOutcome;
pub use state::Position;
pub use types::{CastlingRights, Color, Move, Piece, Square};
pub use view::Rows;

pub(crate) use fen::START_FEN;
