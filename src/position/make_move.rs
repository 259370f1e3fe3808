//! Mechanical move application.
//!
//! No chess legality is checked: any piece may be moved to any square,
//! captures happen by landing on an occupied square, and only the FEN
//! bookkeeping fields are updated.

use super::error::MoveParseError;
use super::{CastlingRights, Color, Move, Piece, Position, Square};

/// What happened on the board when a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub moved: (Color, Piece),
    /// Piece that stood on the destination square before the move
    pub captured: Option<(Color, Piece)>,
    /// Pawn removed by an en passant capture
    pub en_passant_captured: Option<(Color, Piece)>,
    /// Rook relocation `(from, to)` when the king moved two files
    pub castle_rook: Option<(Square, Square)>,
}

impl Position {
    /// Parse a move such as `e2e4` and apply it.
    pub fn apply_move_str(&mut self, text: &str) -> Result<MoveOutcome, MoveParseError> {
        let mv: Move = text.parse()?;
        self.apply_move(mv)
    }

    /// Apply a move to the position in place.
    ///
    /// Fails without touching the position when a square lies off the board,
    /// the origin square is empty, or it equals the destination.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveParseError> {
        for sq in [mv.from, mv.to] {
            if Square::new(sq.rank(), sq.file()).is_none() {
                return Err(MoveParseError::InvalidSquare {
                    notation: format!("{sq:?}"),
                });
            }
        }
        let moved = self
            .piece_at(mv.from)
            .ok_or(MoveParseError::EmptySquare { square: mv.from })?;
        if mv.from == mv.to {
            return Err(MoveParseError::NullMove { square: mv.from });
        }

        let (color, piece) = moved;
        let captured = self.piece_at(mv.to);

        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        let mut en_passant_captured = None;
        if piece == Piece::Pawn
            && self.en_passant_target == Some(mv.to)
            && mv.from.file() != mv.to.file()
        {
            // The captured pawn sits beside the mover, on the destination file.
            en_passant_captured = self.take(Square(mv.from.rank(), mv.to.file()));
        }

        let mut castle_rook = None;
        if piece == Piece::King && mv.file_delta().abs() == 2 {
            let rank = mv.from.rank();
            let (corner_file, rook_file) = if mv.file_delta() > 0 {
                (7, mv.to.file() - 1)
            } else {
                (0, mv.to.file() + 1)
            };
            let rook_from = Square(rank, corner_file);
            let rook_to = Square(rank, rook_file);
            let rook = self.take(rook_from);
            self.put(rook_to, rook);
            castle_rook = Some((rook_from, rook_to));
        }

        self.update_castling_rights(mv, moved);

        self.put(mv.to, Some(moved));
        self.take(mv.from);

        self.en_passant_target = if piece == Piece::Pawn && mv.rank_delta().abs() == 2 {
            Some(Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opponent();

        Ok(MoveOutcome {
            mv,
            moved,
            captured,
            en_passant_captured,
            castle_rook,
        })
    }

    /// A departing king clears both of its color's rights. Independently,
    /// touching a rook home corner (as origin or destination) clears the
    /// right tied to that corner, whatever piece is involved.
    fn update_castling_rights(&mut self, mv: Move, (color, piece): (Color, Piece)) {
        if piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        for sq in [mv.from, mv.to] {
            if let Some((corner_color, kingside)) = CastlingRights::corner_right(sq) {
                self.castling_rights.remove(corner_color, kingside);
            }
        }
    }
}
