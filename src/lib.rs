pub mod console;
pub mod position;
pub mod session;
#[cfg(feature = "web")]
pub mod web;

pub use position::{Color, Move, Piece, Position, Square};
pub use session::{GameSession, SessionError, SharedSession, Snapshot};
