//! Core position types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move` - coordinate move such as `e2e4`
//! - `CastlingRights` - the four castling flags

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
