//! Game session shared by the console and web front ends.
//!
//! A session holds at most one position. Loading a FEN replaces it; moves
//! are applied to it in place.

use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::position::{FenError, MoveOutcome, MoveParseError, Position, Rows};

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The FEN string could not be parsed
    InvalidFen(FenError),
    /// The move string could not be parsed or applied
    InvalidMove(MoveParseError),
    /// A move was requested before any position was loaded
    NoGameInProgress,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidFen(_) => write!(f, "Invalid FEN"),
            SessionError::InvalidMove(_) => write!(f, "Invalid move"),
            SessionError::NoGameInProgress => write!(f, "No game in progress"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidFen(e) => Some(e),
            SessionError::InvalidMove(e) => Some(e),
            SessionError::NoGameInProgress => None,
        }
    }
}

impl From<FenError> for SessionError {
    fn from(e: FenError) -> Self {
        SessionError::InvalidFen(e)
    }
}

impl From<MoveParseError> for SessionError {
    fn from(e: MoveParseError) -> Self {
        SessionError::InvalidMove(e)
    }
}

/// Board, FEN and side to move as handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Snapshot {
    pub board: Rows,
    pub fen: String,
    /// `"white"` or `"black"`
    pub turn: &'static str,
}

impl Snapshot {
    #[must_use]
    pub fn of(position: &Position) -> Self {
        Snapshot {
            board: position.rows(),
            fen: position.to_fen(),
            turn: position.side_to_move().as_turn_str(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GameSession {
    position: Option<Position>,
}

/// Session behind a single-writer lock, shared across request handlers.
pub type SharedSession = Arc<Mutex<GameSession>>;

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        GameSession { position: None }
    }

    #[must_use]
    pub fn shared() -> SharedSession {
        Arc::new(Mutex::new(GameSession::new()))
    }

    /// Replace the current position with one parsed from `fen`.
    ///
    /// On failure the previous position, if any, is kept.
    pub fn load_fen(&mut self, fen: &str) -> Result<&Position, SessionError> {
        let position = Position::try_from_fen(fen)?;
        debug!("loaded position {position}");
        Ok(self.position.insert(position))
    }

    pub fn make_move(&mut self, text: &str) -> Result<MoveOutcome, SessionError> {
        let position = self
            .position
            .as_mut()
            .ok_or(SessionError::NoGameInProgress)?;
        let outcome = position.apply_move_str(text.trim())?;
        debug!(
            "applied {} ({:?} {:?}), now {position}",
            outcome.mv, outcome.moved.0, outcome.moved.1
        );
        Ok(outcome)
    }

    #[must_use]
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    /// Drop the current position.
    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn snapshot(&self) -> Result<Snapshot, SessionError> {
        self.position
            .as_ref()
            .map(Snapshot::of)
            .ok_or(SessionError::NoGameInProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::START_FEN;

    #[test]
    fn test_move_before_load_is_no_game() {
        let mut session = GameSession::new();
        assert_eq!(
            session.make_move("e2e4").unwrap_err(),
            SessionError::NoGameInProgress
        );
        assert!(session.position().is_none());
        assert_eq!(session.snapshot(), Err(SessionError::NoGameInProgress));
    }

    #[test]
    fn test_load_and_move() {
        let mut session = GameSession::new();
        session.load_fen(START_FEN).unwrap();
        session.make_move("e2e4").unwrap();
        let snapshot = session.snapshot().unwrap();
        assert_eq!(
            snapshot.fen,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        assert_eq!(snapshot.turn, "black");
        assert_eq!(snapshot.board[4][4], Some('P'));
    }

    #[test]
    fn test_invalid_fen_keeps_previous_position() {
        let mut session = GameSession::new();
        session.load_fen(START_FEN).unwrap();
        let err = session.load_fen("not a fen").unwrap_err();
        assert!(matches!(err, SessionError::InvalidFen(_)));
        assert_eq!(err.to_string(), "Invalid FEN");
        assert_eq!(session.position().map(Position::to_fen).as_deref(), Some(START_FEN));
    }

    #[test]
    fn test_invalid_move_message() {
        let mut session = GameSession::new();
        session.load_fen(START_FEN).unwrap();
        let err = session.make_move("e2e4e5").unwrap_err();
        assert_eq!(err, SessionError::InvalidMove(MoveParseError::InvalidLength { len: 6 }));
        assert_eq!(err.to_string(), "Invalid move");
        assert_eq!(session.snapshot().unwrap().fen, START_FEN);
    }

    #[test]
    fn test_clear_ends_game() {
        let mut session = GameSession::new();
        session.load_fen(START_FEN).unwrap();
        assert!(session.is_active());
        session.clear();
        assert!(!session.is_active());
    }

    #[test]
    fn test_shared_session_lock() {
        let shared = GameSession::shared();
        shared.lock().load_fen(START_FEN).unwrap();
        let other = Arc::clone(&shared);
        other.lock().make_move("d2d4").unwrap();
        assert_eq!(shared.lock().snapshot().unwrap().turn, "black");
    }
}
