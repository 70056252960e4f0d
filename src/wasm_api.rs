use crate::board::{Board, GameStatus};
use crate::moves::{MoveRecord, Pos};
use crate::piece::{Color, Piece, Rank};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct SquarePiece {
    rank: String,
    color: String,
}

#[derive(Serialize)]
struct BoardState {
    squares: Vec<Vec<Option<SquarePiece>>>,
    status: String,
    is_ongoing: bool,
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum RecordJson {
    Captured {
        piece: SquarePiece,
        at: [i32; 2],
    },
    Moved {
        piece: SquarePiece,
        from: [i32; 2],
        to: [i32; 2],
    },
}

#[derive(Serialize)]
struct PlayResult {
    status: String,
    records: Vec<RecordJson>,
}

fn rank_to_string(rank: Rank) -> String {
    match rank {
        Rank::King => "King".to_string(),
        Rank::Queen => "Queen".to_string(),
        Rank::Rook => "Rook".to_string(),
        Rank::Bishop => "Bishop".to_string(),
        Rank::Knight => "Knight".to_string(),
        Rank::Pawn => "Pawn".to_string(),
    }
}

fn color_to_string(color: Color) -> String {
    match color {
        Color::White => "White".to_string(),
        Color::Black => "Black".to_string(),
    }
}

fn status_to_string(status: GameStatus) -> String {
    match status {
        GameStatus::WhiteTurn => "WhiteTurn".to_string(),
        GameStatus::BlackTurn => "BlackTurn".to_string(),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::WhiteWin => "WhiteWin".to_string(),
        GameStatus::BlackWin => "BlackWin".to_string(),
    }
}

fn square_piece(piece: Piece) -> SquarePiece {
    SquarePiece {
        rank: rank_to_string(piece.rank),
        color: color_to_string(piece.color),
    }
}

fn record_json(record: &MoveRecord) -> RecordJson {
    match *record {
        MoveRecord::Captured { piece, at } => RecordJson::Captured {
            piece: square_piece(piece),
            at: [at.row, at.col],
        },
        MoveRecord::Moved { piece, from, to } => RecordJson::Moved {
            piece: square_piece(piece),
            from: [from.row, from.col],
            to: [to.row, to.col],
        },
    }
}

fn build_board_state(board: &Board) -> BoardState {
    let squares: Vec<Vec<Option<SquarePiece>>> = (0..8)
        .map(|row| {
            (0..8)
                .map(|col| board.squares[row][col].map(square_piece))
                .collect()
        })
        .collect();

    BoardState {
        squares,
        status: status_to_string(board.status),
        is_ongoing: board.is_ongoing(),
    }
}

#[wasm_bindgen]
pub struct Game {
    board: Board,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            board: Board::new(),
        }
    }

    pub fn get_board_state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&build_board_state(&self.board)).unwrap_or(JsValue::NULL)
    }

    /// Destinations for the piece on (row, col) as [row, col] pairs. The
    /// frontend uses these to highlight squares after the first click.
    pub fn get_legal_moves(&self, row: i32, col: i32) -> JsValue {
        let moves: Vec<[i32; 2]> = self
            .board
            .legal_moves(Pos::new(row, col))
            .iter()
            .map(|p| [p.row, p.col])
            .collect();
        serde_wasm_bindgen::to_value(&moves).unwrap_or(JsValue::NULL)
    }

    /// Attempt a move. An empty `records` array means the request was
    /// rejected and nothing changed.
    pub fn play(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> JsValue {
        let (status, records) = self
            .board
            .play(Pos::new(from_row, from_col), Pos::new(to_row, to_col));
        let result = PlayResult {
            status: status_to_string(status),
            records: records.iter().map(record_json).collect(),
        };
        serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
    }
}
