//! Property tests for grid, rotation and engine invariants.
//!
//! Generated matrices, grids, seeds and action sequences check the rules
//! that must hold whatever the player does:
//! - four clockwise rotations are the identity
//! - the grid keeps its dimensions through any number of clears
//! - accepted offsets stay accepted once applied
//! - locking writes every on-board cell of the piece (modulo cleared rows)
//! - the gravity interval never drops below its floor
//! - undrained events never exceed the queue capacity

use blockfall::core::{
    drop_interval_ms, line_clear_points, rotate, Engine, Grid, Matrix, Piece, SimpleRng,
    EVENT_QUEUE_CAPACITY,
};
use blockfall::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MIN_DROP_MS};
use proptest::prelude::*;

fn arb_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), w), h).prop_map(|rows| {
            let refs: Vec<&[bool]> = rows.iter().map(Vec::as_slice).collect();
            Matrix::from_rows(&refs).expect("generated matrix is rectangular and small")
        })
    })
}

fn arb_kind() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::from_index(i).expect("index below 7"))
}

/// Sparse random grid: each cell filled with probability ~1/3.
fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(0u8..3, (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize)).prop_map(
        |cells| {
            let mut grid = Grid::new();
            for (i, c) in cells.into_iter().enumerate() {
                if c == 0 {
                    let x = (i % BOARD_WIDTH as usize) as i8;
                    let y = (i / BOARD_WIDTH as usize) as i8;
                    grid.set(x, y, Some(PieceKind::T));
                }
            }
            grid
        },
    )
}

fn arb_action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        3 => Just(GameAction::MoveLeft),
        3 => Just(GameAction::MoveRight),
        2 => Just(GameAction::SoftDrop),
        1 => Just(GameAction::HardDrop),
        3 => Just(GameAction::Rotate),
    ]
}

proptest! {
    #[test]
    fn rotation_has_period_four(m in arb_matrix()) {
        let r1 = rotate(&m);
        prop_assert_eq!((r1.width(), r1.height()), (m.height(), m.width()));
        prop_assert_eq!(r1.occupied().count(), m.occupied().count());
        prop_assert_eq!(rotate(&rotate(&rotate(&r1))), m);
    }

    #[test]
    fn clearing_preserves_dimensions(mut grid in arb_grid(), full_rows in prop::collection::vec(0i8..20, 0..6)) {
        for &y in &full_rows {
            for x in 0..BOARD_WIDTH as i8 {
                grid.set(x, y, Some(PieceKind::I));
            }
        }
        let filled_before = grid.filled_count();
        let cleared = grid.clear_full_rows();

        prop_assert_eq!(grid.rows().len(), BOARD_HEIGHT as usize);
        prop_assert!(grid.rows().iter().all(|row| row.len() == BOARD_WIDTH as usize));
        prop_assert!((0..BOARD_HEIGHT as usize).all(|y| !grid.is_row_full(y)));
        prop_assert_eq!(
            grid.filled_count(),
            filled_before - cleared as usize * BOARD_WIDTH as usize
        );
        prop_assert_eq!(grid.clear_full_rows(), 0);
    }

    #[test]
    fn accepted_offset_stays_accepted(
        grid in arb_grid(),
        kind in arb_kind(),
        x in -2i8..10,
        y in -2i8..20,
        dx in -3i8..=3,
        dy in -3i8..=3,
    ) {
        let mut piece = Piece::spawn(kind);
        piece.x = x;
        piece.y = y;
        if !grid.collides(&piece, dx, dy) {
            piece.x += dx;
            piece.y += dy;
            prop_assert!(!grid.collides(&piece, 0, 0));
        }
    }

    #[test]
    fn lock_writes_piece_cells(seed in any::<u32>(), moves in prop::collection::vec(arb_action(), 0..12)) {
        let mut engine = Engine::with_seed(seed);
        for action in moves {
            if action != GameAction::HardDrop && action != GameAction::SoftDrop {
                engine.apply_action(action);
            }
        }
        let mut piece = *engine.active();
        piece.y = engine.ghost_y();

        let before = engine.grid().clone();
        engine.hard_drop();

        let mut expected = before;
        expected.merge(&piece);
        let cleared = expected.clear_full_rows();
        prop_assert_eq!(engine.grid(), &expected);
        prop_assert_eq!(engine.lines(), cleared);
        prop_assert_eq!(engine.score(), line_clear_points(cleared));
    }

    #[test]
    fn random_play_keeps_engine_consistent(seed in any::<u32>(), actions in prop::collection::vec(arb_action(), 0..300)) {
        let mut engine = Engine::new(SimpleRng::new(seed));
        let mut last_score = 0;
        for action in actions {
            engine.apply_action(action);
            prop_assert!(engine.score() >= last_score);
            last_score = engine.score();
            prop_assert!(engine.drop_interval_ms() >= MIN_DROP_MS);
            prop_assert_eq!(engine.grid().rows().len(), BOARD_HEIGHT as usize);
            prop_assert!(engine.pending_events().len() <= EVENT_QUEUE_CAPACITY);
            if !engine.game_over() {
                prop_assert!(!engine.grid().collides(engine.active(), 0, 0));
            }
        }
    }

    #[test]
    fn drop_interval_never_below_floor(a in any::<u32>(), b in any::<u32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(drop_interval_ms(hi) >= MIN_DROP_MS);
        prop_assert!(drop_interval_ms(hi) <= drop_interval_ms(lo));
    }
}
