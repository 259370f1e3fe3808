//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use fen_board::position::prelude::*;
//!
//! let position: Position = "8/8/8/8/8/8/8/K1k5 w - - 0 1".parse().unwrap();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    CastlingRights, Color, FenError, Move, MoveOutcome, MoveParseError, Piece, Position,
    PositionBuilder, Square, SquareError,
};
