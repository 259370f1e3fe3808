//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::error::SquareError;

/// Caller must pass a character in `a..=h`.
pub(crate) fn file_to_index(file: char) -> usize {
    file as usize - ('a' as usize)
}

/// Caller must pass a character in `1..=8`.
pub(crate) fn rank_to_index(rank: char) -> usize {
    (rank as usize) - ('1' as usize)
}

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is the first rank (White's back rank), file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    pub const A1: Square = Square(0, 0);
    pub const H1: Square = Square(0, 7);
    pub const A8: Square = Square(7, 0);
    pub const H8: Square = Square(7, 7);

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Parse a file letter and rank digit, e.g. `('e', '3')`.
    pub(crate) fn from_chars(file: char, rank: char) -> Option<Self> {
        if ('a'..='h').contains(&file) && ('1'..='8').contains(&rank) {
            Some(Square(rank_to_index(rank), file_to_index(file)))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                Square::from_chars(file, rank).ok_or_else(|| SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}
