//! Property-based tests using proptest.

use crate::position::{Color, Move, Position, Square};
use proptest::prelude::*;

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..8usize, 0..8usize).prop_map(|(rank, file)| Square(rank, file))
}

fn move_strategy() -> impl Strategy<Value = Move> {
    (square_strategy(), square_strategy()).prop_map(|(from, to)| Move::new(from, to))
}

/// Strategy for sequences of arbitrary (mostly nonsensical) coordinate moves
fn walk_strategy() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(move_strategy(), 1..=40)
}

/// Strategy for short move strings mixing valid and invalid characters
fn move_text_strategy() -> impl Strategy<Value = String> {
    "[a-j0-9]{0,6}"
}

proptest! {
    /// Property: every reachable position survives a FEN round trip unchanged
    #[test]
    fn prop_fen_roundtrip_after_random_walk(walk in walk_strategy()) {
        let mut position = Position::new();
        for mv in walk {
            let _ = position.apply_move(mv);
            let fen = position.to_fen();
            let restored = Position::try_from_fen(&fen).unwrap();
            prop_assert_eq!(&restored, &position);
            prop_assert_eq!(restored.to_fen(), fen);
        }
    }

    /// Property: a rejected move never changes the position
    #[test]
    fn prop_failed_move_leaves_position_unchanged(walk in walk_strategy(), text in move_text_strategy()) {
        let mut position = Position::new();
        for mv in walk {
            let _ = position.apply_move(mv);
        }
        let before = position.clone();
        if position.apply_move_str(&text).is_err() {
            prop_assert_eq!(position, before);
        }
    }

    /// Property: the side to move always flips and the fullmove number
    /// advances only after Black
    #[test]
    fn prop_turn_bookkeeping(walk in walk_strategy()) {
        let mut position = Position::new();
        for mv in walk {
            let side = position.side_to_move();
            let fullmove = position.fullmove_number();
            if position.apply_move(mv).is_ok() {
                prop_assert_eq!(position.side_to_move(), side.opponent());
                let expected = if side == Color::Black { fullmove + 1 } else { fullmove };
                prop_assert_eq!(position.fullmove_number(), expected);
            }
        }
    }

    /// Property: a single application never adds pieces to the board
    #[test]
    fn prop_piece_count_never_grows(walk in walk_strategy()) {
        let mut position = Position::new();
        for mv in walk {
            let before = position.pieces().count();
            let _ = position.apply_move(mv);
            prop_assert!(position.pieces().count() <= before);
        }
    }
}

#[test]
fn test_seeded_random_walks_round_trip() {
    use rand::prelude::*;

    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = Position::new();
        for _ in 0..60 {
            let occupied: Vec<Square> = position.pieces().map(|(sq, _, _)| sq).collect();
            let Some(&from) = occupied.choose(&mut rng) else {
                break;
            };
            let to = Square(rng.gen_range(0..8), rng.gen_range(0..8));
            if from == to {
                continue;
            }
            position.apply_move(Move::new(from, to)).unwrap();
            assert_eq!(Position::from_fen(&position.to_fen()), position, "seed {seed}");
        }
    }
}
