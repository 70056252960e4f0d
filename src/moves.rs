use serde::{Deserialize, Serialize};

use crate::piece::Piece;

/// A square address. Coordinates are signed so callers can pass values
/// straight from the outside world; anything outside the 8x8 grid fails
/// `on_board` and is never dereferenced.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub fn new(row: i32, col: i32) -> Pos {
        Pos { row, col }
    }

    pub fn on_board(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    pub fn offset(&self, dr: i32, dc: i32) -> Pos {
        Pos::new(self.row + dr, self.col + dc)
    }
}

/// One atomic effect of an accepted play. A plain move yields a single
/// `Moved` entry; a capture yields `Captured` for the victim followed by
/// `Moved` for the attacker.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum MoveRecord {
    Captured { piece: Piece, at: Pos },
    Moved { piece: Piece, from: Pos, to: Pos },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, Rank};

    #[test]
    fn on_board_covers_exactly_the_grid() {
        assert!(Pos::new(0, 0).on_board());
        assert!(Pos::new(7, 7).on_board());
        assert!(!Pos::new(-1, 0).on_board());
        assert!(!Pos::new(0, 8).on_board());
        assert!(!Pos::new(8, 0).on_board());
    }

    #[test]
    fn capture_records_serialize_with_their_square() {
        let record = MoveRecord::Captured {
            piece: Piece::new(Rank::Queen, Color::Black),
            at: Pos::new(2, 5),
        };
        let json = serde_json::to_value(record).expect("record serializes");
        assert_eq!(json["Captured"]["at"]["row"], 2);
        assert_eq!(json["Captured"]["at"]["col"], 5);
        assert_eq!(json["Captured"]["piece"]["rank"], "Queen");
    }
}
