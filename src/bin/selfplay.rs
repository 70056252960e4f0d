use rand::seq::SliceRandom;

use regicide::board::Board;
use regicide::moves::Pos;

const MAX_MOVES: u32 = 300;

fn main() {
    let mut board = Board::new();
    let mut rng = rand::thread_rng();
    let mut move_count = 0;

    while board.is_ongoing() && move_count < MAX_MOVES {
        // legal_moves only answers for the side on move, so scanning every
        // square yields exactly the current player's options.
        let mut candidates: Vec<(Pos, Pos)> = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let from = Pos::new(row, col);
                for to in board.legal_moves(from) {
                    candidates.push((from, to));
                }
            }
        }

        let &(from, to) = match candidates.choose(&mut rng) {
            Some(c) => c,
            None => break,
        };

        let (_, records) = board.play(from, to);
        move_count += 1;
        for record in &records {
            println!("{}", serde_json::to_string(record).expect("records serialize"));
        }
    }

    let outcome = match board.status.to_move() {
        Some(color) => format!("still {color:?} to move"),
        None => format!("{:?}", board.status),
    };
    eprintln!("Finished after {move_count} moves: {outcome}");
}
