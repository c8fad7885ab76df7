//! Edge case tests: rule gaps and boundary inputs.

use super::board_with;
use crate::board::{new_game, BoardBuilder, Color, Piece, Rejected, Square};

#[test]
fn test_no_castling() {
    let mut game = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .build()
        .unwrap();
    assert!(!game.legal_destinations(Square(7, 4)).contains(&Square(7, 6)));
}

#[test]
fn test_pawn_on_last_row_stays_pawn_and_is_stuck() {
    let mut game = BoardBuilder::new()
        .piece(Square(1, 0), Color::White, Piece::Pawn)
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .build()
        .unwrap();
    let record = game.attempt_move(Square(1, 0), Square(0, 0)).unwrap();
    assert_eq!(record.moved, (Color::White, Piece::Pawn));
    assert_eq!(game.piece_at(Square(0, 0)), Some((Color::White, Piece::Pawn)));

    game.attempt_move(Square(0, 4), Square(1, 4)).unwrap();
    assert!(game.legal_destinations(Square(0, 0)).is_empty());
}

#[test]
fn test_no_en_passant() {
    let mut game = BoardBuilder::new()
        .piece(Square(3, 4), Color::White, Piece::Pawn)
        .piece(Square(1, 3), Color::Black, Piece::Pawn)
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 7), Color::Black, Piece::King)
        .side_to_move(Color::Black)
        .build()
        .unwrap();
    game.attempt_move(Square(1, 3), Square(3, 3)).unwrap();

    let targets = game.legal_destinations(Square(3, 4));
    assert_eq!(targets, vec![Square(2, 4)]);
}

#[test]
fn test_out_of_range_squares_rejected() {
    let mut game = new_game();
    let before = game.clone();
    assert_eq!(
        game.attempt_move(Square(8, 0), Square(5, 0)),
        Err(Rejected::InvalidSquare {
            square: Square(8, 0)
        })
    );
    assert_eq!(
        game.apply_remote_move(Square(6, 0), Square(usize::MAX, 0)),
        Err(Rejected::InvalidSquare {
            square: Square(usize::MAX, 0)
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_moving_onto_itself_is_illegal() {
    let mut game = new_game();
    assert!(game.attempt_move(Square(7, 1), Square(7, 1)).is_err());
}

#[test]
fn test_pawn_double_step_from_every_start_square() {
    for color in Color::BOTH {
        for col in 0..8 {
            let from = Square(color.pawn_start_row(), col);
            let to = from.offset(2 * color.pawn_direction(), 0).unwrap();
            let mut board = board_with(&[
                (from, color, Piece::Pawn),
                (Square(7, 0), Color::White, Piece::King),
                (Square(0, 7), Color::Black, Piece::King),
            ]);
            assert!(board.is_legal_move(from, to, color), "{color} pawn from {from}");
        }
    }
}

#[test]
fn test_knight_jumps_over_pieces() {
    let mut game = new_game();
    let dests = game.legal_destinations(Square(7, 1));
    assert_eq!(dests, vec![Square(5, 0), Square(5, 2)]);
}

#[test]
fn test_king_cannot_step_next_to_king() {
    let mut board = board_with(&[
        (Square(4, 4), Color::White, Piece::King),
        (Square(2, 4), Color::Black, Piece::King),
    ]);
    assert!(!board.is_legal_move(Square(4, 4), Square(3, 4), Color::White));
    assert!(board.is_legal_move(Square(4, 4), Square(5, 4), Color::White));
}
