use super::{CastlingRights, Color, Piece, Square};

pub(crate) type Grid = [[Option<(Color, Piece)>; 8]; 8];

/// A chess position: piece placement plus the FEN bookkeeping fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Indexed `[rank][file]`, rank 0 = first rank.
    pub(crate) squares: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            position.set_piece(Square(0, i), Color::White, *piece);
            position.set_piece(Square(7, i), Color::Black, *piece);
            position.set_piece(Square(1, i), Color::White, Piece::Pawn);
            position.set_piece(Square(6, i), Color::Black, Piece::Pawn);
        }

        position.castling_rights = CastlingRights::all();
        position
    }

    /// An empty board, White to move, no rights, clocks at `0 1`.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    pub(crate) fn put(&mut self, sq: Square, content: Option<(Color, Piece)>) {
        self.squares[sq.rank()][sq.file()] = content;
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()].take()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Every occupied square with its piece, rank 1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(file, cell)| cell.map(|(c, p)| (Square(rank, file), c, p)))
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
