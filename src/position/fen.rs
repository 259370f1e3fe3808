use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::{CastlingRights, Color, Piece, Position, Square};

pub(crate) const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. Piece placement must describe exactly
    /// eight ranks of eight files. Any side-to-move other than `w` means
    /// Black, and castling letters outside `KQkq` are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        parse_placement(&mut position, parts[0])?;

        position.side_to_move = if parts[1] == "w" {
            Color::White
        } else {
            Color::Black
        };

        position.castling_rights = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                position.castling_rights.set_from_fen_char(c);
            }
        }

        position.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        position.halfmove_clock =
            parts[4]
                .parse()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: parts[4].to_string(),
                })?;

        position.fullmove_number = parts[5]
            .parse()
            .ok()
            .filter(|n: &u32| *n >= 1)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;

        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let mut ranks_seen = 0;
    for (rank_idx, rank_str) in placement.split('/').enumerate() {
        if rank_idx >= 8 {
            return Err(FenError::InvalidRank { rank: rank_idx });
        }
        let mut file = 0;
        for c in rank_str.chars() {
            match c.to_digit(10) {
                Some(run) if run > 0 => file += run as usize,
                _ => {
                    let (color, piece) =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    position.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        if file < 8 {
            return Err(FenError::IncompleteRank {
                rank: rank_idx,
                files: file,
            });
        }
        ranks_seen += 1;
    }

    if ranks_seen < 8 {
        return Err(FenError::MissingRanks { found: ranks_seen });
    }
    Ok(())
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
