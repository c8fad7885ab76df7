//! Property-based tests using proptest.

use super::{board_with, mirrored};
use crate::board::{Color, GameState, Piece, Square};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the starting position,
/// calling `check` on the state before every move.
fn random_playout<F>(seed: u64, num_moves: usize, mut check: F) -> Result<(), TestCaseError>
where
    F: FnMut(&mut GameState) -> Result<(), TestCaseError>,
{
    let mut game = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..num_moves {
        check(&mut game)?;
        let moves = game.legal_moves();
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            break;
        };
        prop_assert!(game.attempt_move(from, to).is_ok());
    }
    check(&mut game)
}

/// Random sparse position with one king per side and up to 12 other pieces.
fn random_pieces(seed: u64) -> Vec<(Square, Color, Piece)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut squares: Vec<Square> = Square::all().collect();
    squares.shuffle(&mut rng);

    let extra = rng.gen_range(0..=12);
    let mut pieces = vec![
        (squares[0], Color::White, Piece::King),
        (squares[1], Color::Black, Piece::King),
    ];
    for &sq in &squares[2..2 + extra] {
        let color = if rng.gen_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let piece = Piece::ALL[rng.gen_range(0..5)];
        pieces.push((sq, color, piece));
    }
    pieces
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: each side keeps exactly one king and the cache tracks it
    #[test]
    fn prop_one_king_per_side(seed in seed_strategy(), num_moves in move_count_strategy()) {
        random_playout(seed, num_moves, |game| {
            for color in Color::BOTH {
                prop_assert_eq!(game.board().count(color, Piece::King), 1);
                prop_assert_eq!(game.board().find_king(color), Some(game.king_square(color)));
            }
            Ok(())
        })?;
    }

    /// Property: applying any legal move and taking it back restores the state
    #[test]
    fn prop_attempt_then_undo_restores_state(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        random_playout(seed, num_moves, |game| {
            let before = game.clone();
            for (from, to) in game.legal_moves() {
                let record = game.attempt_move(from, to);
                prop_assert!(record.is_ok(), "{}{} listed but rejected", from, to);
                if let Ok(record) = record {
                    prop_assert!(game.undo(&record).is_ok());
                }
                prop_assert_eq!(&*game, &before);
            }
            Ok(())
        })?;
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_never_self_check(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        random_playout(seed, num_moves, |game| {
            let mover = game.current_player();
            for (from, to) in game.legal_moves() {
                let mut after = game.clone();
                prop_assert!(after.attempt_move(from, to).is_ok());
                prop_assert!(!after.is_in_check(mover), "{}{} exposes the king", from, to);
            }
            Ok(())
        })?;
    }

    /// Property: the status in every state agrees with the listed moves
    #[test]
    fn prop_status_matches_move_list(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        random_playout(seed, num_moves, |game| {
            let mover = game.current_player();
            let in_check = game.is_in_check(mover);
            let has_moves = !game.board().clone().legal_moves(mover).is_empty();
            prop_assert_eq!(game.status().is_terminal(), !has_moves);
            prop_assert_eq!(
                game.status().winner().is_some(),
                in_check && !has_moves
            );
            Ok(())
        })?;
    }

    /// Property: legality is symmetric under swapping colors and mirroring rows
    #[test]
    fn prop_legality_mirrors(seed in seed_strategy()) {
        let mut board = board_with(&random_pieces(seed));
        let mut mirror = mirrored(&board);

        for from in Square::all() {
            for to in Square::all() {
                for mover in Color::BOTH {
                    prop_assert_eq!(
                        board.is_legal_move(from, to, mover),
                        mirror.is_legal_move(
                            from.flip_vertical(),
                            to.flip_vertical(),
                            mover.opponent(),
                        ),
                        "{} {}{}", mover, from, to
                    );
                }
            }
        }
    }
}
