//! Board coordinates for tic-tac-toe moves.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A move: the `(row, col)` coordinate of the cell to mark.
///
/// Coordinates are not validated on construction. Off-board moves are
/// rejected when applied to a board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Move {
    /// Row index, 0 (top) to 2 (bottom).
    pub row: usize,
    /// Column index, 0 (left) to 2 (right).
    pub col: usize,
}

impl Move {
    /// All 9 on-board moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    /// Checks whether both coordinates lie on the 3x3 board.
    pub fn is_on_board(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Converts the move to a row-major cell index (0-8).
    pub fn to_index(self) -> Option<usize> {
        self.is_on_board().then(|| self.row * 3 + self.col)
    }

    /// Creates a move from a row-major cell index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label for this cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }

    /// Checks whether this is one of the four corner cells.
    pub fn is_corner(self) -> bool {
        matches!((self.row, self.col), (0 | 2, 0 | 2))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error parsing a move from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized move {input:?} (expected `row,col`, an index 0-8 or a cell label)")]
pub struct MoveParseError {
    /// The rejected input.
    pub input: String,
}

/// Parses `row,col`, a cell index (0-8), or a label such as `top-left`.
impl FromStr for Move {
    type Err = MoveParseError;

    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || MoveParseError {
            input: s.to_string(),
        };

        if let Some((row, col)) = trimmed.split_once(',') {
            let row = row.trim().parse::<usize>().map_err(|_| err())?;
            let col = col.trim().parse::<usize>().map_err(|_| err())?;
            let mv = Move::new(row, col);
            return if mv.is_on_board() { Ok(mv) } else { Err(err()) };
        }

        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or_else(err);
        }

        let wanted = trimmed.to_lowercase().replace([' ', '_'], "-");
        let wanted = if wanted == "centre" { "center".to_string() } else { wanted };
        Self::ALL
            .into_iter()
            .find(|mv| mv.label().to_lowercase() == wanted)
            .ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (index, mv) in Move::ALL.into_iter().enumerate() {
            assert_eq!(mv.to_index(), Some(index));
            assert_eq!(Move::from_index(index), Some(mv));
        }
        assert_eq!(Move::from_index(9), None);
        assert_eq!(Move::new(3, 1).to_index(), None);
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("2,0".parse::<Move>().unwrap(), Move::new(2, 0));
        assert_eq!(" 1 , 2 ".parse::<Move>().unwrap(), Move::new(1, 2));
        assert!("3,0".parse::<Move>().is_err());
        assert!("a,b".parse::<Move>().is_err());
    }

    #[test]
    fn test_parse_index_and_label() {
        assert_eq!("4".parse::<Move>().unwrap(), Move::new(1, 1));
        assert_eq!("center".parse::<Move>().unwrap(), Move::new(1, 1));
        assert_eq!("Bottom left".parse::<Move>().unwrap(), Move::new(2, 0));
        assert_eq!("top_right".parse::<Move>().unwrap(), Move::new(0, 2));
        assert!("9".parse::<Move>().is_err());
        assert!("middle".parse::<Move>().is_err());
    }

    #[test]
    fn test_corners() {
        let corners: Vec<_> = Move::ALL.into_iter().filter(|mv| mv.is_corner()).collect();
        assert_eq!(
            corners,
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(2, 0),
                Move::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_label_off_board() {
        assert_eq!(Move::new(1, 1).label(), "Center");
        assert_eq!(Move::new(0, 7).label(), "Off-board");
    }
}
