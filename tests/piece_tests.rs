//! Piece tests - shapes, rotation and spawning

use blockfall::core::{pick_piece, rotate, spawn_matrix, Matrix, Piece, ScriptedRng, SimpleRng};
use blockfall::types::{PieceKind, SPAWN_X, SPAWN_Y};

fn shape(m: &Matrix) -> Vec<String> {
    (0..m.height() as usize)
        .map(|y| {
            (0..m.width() as usize)
                .map(|x| if m.get(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_spawn_shapes() {
    assert_eq!(shape(&spawn_matrix(PieceKind::I)), ["####"]);
    assert_eq!(shape(&spawn_matrix(PieceKind::J)), ["#..", "###"]);
    assert_eq!(shape(&spawn_matrix(PieceKind::L)), ["..#", "###"]);
    assert_eq!(shape(&spawn_matrix(PieceKind::O)), ["##", "##"]);
    assert_eq!(shape(&spawn_matrix(PieceKind::S)), [".##", "##."]);
    assert_eq!(shape(&spawn_matrix(PieceKind::T)), [".#.", "###"]);
    assert_eq!(shape(&spawn_matrix(PieceKind::Z)), ["##.", ".##"]);
}

#[test]
fn test_rotation_sequence_of_l() {
    let m0 = spawn_matrix(PieceKind::L);
    let m1 = rotate(&m0);
    let m2 = rotate(&m1);
    let m3 = rotate(&m2);

    assert_eq!(shape(&m1), ["#.", "#.", "##"]);
    assert_eq!(shape(&m2), ["###", "#.."]);
    assert_eq!(shape(&m3), ["##", ".#", ".#"]);
    assert_eq!(rotate(&m3), m0);
}

#[test]
fn test_o_rotation_is_identity() {
    let o = spawn_matrix(PieceKind::O);
    assert_eq!(rotate(&o), o);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Matrix::from_rows(&[]).is_none());
    assert!(Matrix::from_rows(&[&[]]).is_none());
    assert!(Matrix::from_rows(&[&[true, false], &[true]]).is_none());
    assert!(Matrix::from_rows(&[&[true; 5]]).is_none());

    let m = Matrix::from_rows(&[&[true, false], &[true, true]]).unwrap();
    assert_eq!(shape(&m), ["#.", "##"]);
}

#[test]
fn test_spawn_position_is_fixed() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.matrix, spawn_matrix(kind));
    }
}

#[test]
fn test_pick_piece_follows_source() {
    let mut rng = ScriptedRng::new(vec![6, 0, 3]);
    let kinds: Vec<_> = (0..4).map(|_| pick_piece(&mut rng).kind).collect();
    assert_eq!(kinds, [PieceKind::Z, PieceKind::I, PieceKind::O, PieceKind::Z]);
    assert_eq!(rng.drawn(), 4);
}

#[test]
fn test_seeded_sequence_is_reproducible() {
    let mut a = SimpleRng::new(2024);
    let mut b = SimpleRng::new(2024);
    for _ in 0..100 {
        assert_eq!(pick_piece(&mut a).kind, pick_piece(&mut b).kind);
    }
}

#[test]
fn test_seeded_sequence_covers_all_kinds() {
    let mut rng = SimpleRng::new(7);
    let mut seen = [false; 7];
    for _ in 0..500 {
        seen[pick_piece(&mut rng).kind.index()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
