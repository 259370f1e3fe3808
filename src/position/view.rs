//! Read-only board views for renderers.

use std::fmt::Write;

use super::{Position, Square};

/// Piece symbols by row, top rank (rank 8) first, files a..h.
pub type Rows = [[Option<char>; 8]; 8];

const FILE_HEADER: &str = "  a b c d e f g h";

impl Position {
    /// The board as FEN piece symbols, rank 8 first; `None` for empty squares.
    #[must_use]
    pub fn rows(&self) -> Rows {
        let mut rows = [[None; 8]; 8];
        for (row_idx, row) in rows.iter_mut().enumerate() {
            let rank = 7 - row_idx;
            for (file, cell) in row.iter_mut().enumerate() {
                *cell = self
                    .piece_at(Square(rank, file))
                    .map(|(color, piece)| piece.to_fen_char(color));
            }
        }
        rows
    }

    /// Text board with rank and file labels, `.` for empty squares, and
    /// the side to move on the last line.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        out.push_str(FILE_HEADER);
        out.push('\n');
        for (row_idx, row) in self.rows().iter().enumerate() {
            let label = 8 - row_idx;
            let _ = write!(out, "{label} ");
            for cell in row {
                out.push(cell.unwrap_or('.'));
                out.push(' ');
            }
            let _ = writeln!(out, "{label}");
        }
        out.push_str(FILE_HEADER);
        out.push('\n');
        let _ = write!(out, "Current turn: {}", self.side_to_move);
        out
    }
}
