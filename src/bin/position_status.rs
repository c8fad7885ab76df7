use std::env;

use chess_rules::protocol::{format_record, parse_move};
use chess_rules::GameState;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: position_status <move1> <move2> ...");
        return;
    }

    let mut game = GameState::new();
    for text in args.iter().skip(1) {
        let played = parse_move(text)
            .map_err(|e| e.to_string())
            .and_then(|(from, to)| game.attempt_move(from, to).map_err(|e| e.to_string()));
        match played {
            Ok(record) => println!("{}", format_record(&record)),
            Err(e) => {
                eprintln!("{text}: {e}");
                std::process::exit(1);
            }
        }
    }

    let legal_moves = game.legal_moves();
    println!("side_to_move: {}", game.current_player());
    println!("legal_moves: {}", legal_moves.len());
    println!("status: {}", game.status());
    for (from, to) in &legal_moves {
        println!("{from}{to}");
    }
}
