//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i32 = 8;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// Index into the 64-square board (`file + rank * 8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareIdx(pub(crate) u8);

impl SquareIdx {
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        Square::from_index_const(self.0 as usize)
    }
}

/// A square on the board, stored as a validated (file, rank) pair.
///
/// Both coordinates are always in `0..8`; the only ways to build a `Square`
/// go through a bounds check in coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a new square with bounds checking.
    pub fn new(file: i32, rank: i32) -> Result<Self, SquareError> {
        if !(0..BOARD_SIZE).contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if !(0..BOARD_SIZE).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// Create a square from an index (0-63).
    pub fn from_index(idx: usize) -> Result<Self, SquareError> {
        if idx < NUM_SQUARES {
            Ok(Self::from_index_const(idx))
        } else {
            Err(SquareError::IndexOutOfBounds { index: idx })
        }
    }

    /// Create a square from an index already known to be below 64.
    #[must_use]
    pub const fn from_index_const(idx: usize) -> Self {
        Square {
            file: (idx % 8) as u8,
            rank: (idx / 8) as u8,
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> i32 {
        self.file as i32
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.rank as i32
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.file as usize + self.rank as usize * 8
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> SquareIdx {
        SquareIdx(self.as_index() as u8)
    }

    /// Step by `(df, dr)`, returning `None` if the target is off the board.
    #[must_use]
    pub fn offset(self, df: i32, dr: i32) -> Option<Self> {
        Square::new(self.file() + df, self.rank() + dr).ok()
    }

    /// Algebraic name of the square, e.g. `"b3"`.
    #[must_use]
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (self.file + b'a') as char, self.rank + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.file, self.rank)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(file, rank)
    }
}

impl From<Square> for (i32, i32) {
    fn from(sq: Square) -> Self {
        (sq.file(), sq.rank())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic (`"e4"`) or coordinate (`"4,3"`, `"[4, 3]"`) notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let trimmed = s.trim();

        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        if let Some((file, rank)) = inner.split_once(',') {
            let file = file.trim().parse::<i32>().map_err(|_| invalid())?;
            let rank = rank.trim().parse::<i32>().map_err(|_| invalid())?;
            return Square::new(file, rank);
        }

        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }
        let file = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='h' => c as i32 - 'a' as i32,
            _ => return Err(invalid()),
        };
        let rank = match chars[1] {
            c @ '1'..='8' => c as i32 - '1' as i32,
            _ => return Err(invalid()),
        };
        Square::new(file, rank)
    }
}
