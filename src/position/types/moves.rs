//! Coordinate move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::position::error::MoveParseError;

/// A move written as `<fromFile><fromRank><toFile><toRank>`, e.g. `e2e4`.
///
/// Carries no piece or legality information; the position decides what the
/// move does when it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Signed file displacement (positive towards the h-file)
    #[inline]
    #[must_use]
    pub fn file_delta(self) -> isize {
        self.to.file() as isize - self.from.file() as isize
    }

    /// Signed rank displacement (positive towards rank 8)
    #[inline]
    #[must_use]
    pub fn rank_delta(self) -> isize {
        self.to.rank() as isize - self.from.rank() as isize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from = Square::from_chars(chars[0], chars[1]).ok_or_else(invalid)?;
        let to = Square::from_chars(chars[2], chars[3]).ok_or_else(invalid)?;
        Ok(Move { from, to })
    }
}
