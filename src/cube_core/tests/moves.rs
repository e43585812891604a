use std::collections::HashMap;

use cube_core::{
    Color, CubeState, Face, GridPosition, Move, Stickers, build_cubie_grid, parse_sequence,
    sticker_to_grid_position,
};
use glam::IVec3;
use itertools::{Itertools, iproduct};
use log::info;

type Label = (Face, usize, usize);

const SCRAMBLE: &str = "R U F' L2 D B' M E' S x y' z2 R' D2";

fn scramble() -> Vec<Move> {
    parse_sequence(SCRAMBLE).unwrap()
}

fn labeled() -> CubeState<Label> {
    CubeState::from_stickers(std::array::from_fn(|f| {
        std::array::from_fn(|r| std::array::from_fn(|c| (Face::ALL[f], r, c)))
    }))
}

/// Quarter turns about the positive `axis`, counter-clockwise when looking
/// down that axis.
fn rotate(axis: usize, quarter_turns: i32, mut v: IVec3) -> IVec3 {
    for _ in 0..quarter_turns.rem_euclid(4) {
        v = match axis {
            0 => IVec3::new(v.x, -v.z, v.y),
            1 => IVec3::new(v.z, v.y, -v.x),
            _ => IVec3::new(-v.y, v.x, v.z),
        };
    }
    v
}

/// (axis, turned layers along it, quarter turns of the move)
fn geometry(mv: Move) -> (usize, &'static [i32], i32) {
    const LOW: &[i32] = &[0];
    const MIDDLE: &[i32] = &[1];
    const HIGH: &[i32] = &[2];
    const ALL: &[i32] = &[0, 1, 2];

    let (axis, layers, quarter_turns) = match mv {
        Move::R | Move::RInverse => (0, HIGH, -1),
        Move::L | Move::LInverse => (0, LOW, 1),
        Move::M | Move::MInverse => (0, MIDDLE, 1),
        Move::X | Move::XInverse => (0, ALL, -1),
        Move::U | Move::UInverse => (1, HIGH, -1),
        Move::D | Move::DInverse => (1, LOW, 1),
        Move::E | Move::EInverse => (1, MIDDLE, 1),
        Move::Y | Move::YInverse => (1, ALL, -1),
        Move::F | Move::FInverse => (2, HIGH, -1),
        Move::B | Move::BInverse => (2, LOW, 1),
        Move::S | Move::SInverse => (2, MIDDLE, -1),
        Move::Z | Move::ZInverse => (2, ALL, -1),
    };
    let quarter_turns = if mv.is_inverse() {
        -quarter_turns
    } else {
        quarter_turns
    };
    (axis, layers, quarter_turns)
}

/// Applies a move by physically rotating the positions and normals of the
/// stickers in the turned layers.
fn apply_geometrically<S: Copy>(stickers: &Stickers<S>, mv: Move) -> Stickers<S> {
    let (axis, layers, quarter_turns) = geometry(mv);

    let addresses = iproduct!(Face::ALL, 0..3, 0..3)
        .map(|(face, row, col)| {
            let position = sticker_to_grid_position(face, row, col).unwrap().as_ivec3();
            ((position, face.normal()), (face, row, col))
        })
        .collect::<HashMap<_, _>>();

    let mut next = *stickers;
    for (face, row, col) in iproduct!(Face::ALL, 0..3, 0..3) {
        let position = sticker_to_grid_position(face, row, col).unwrap().as_ivec3();
        if !layers.contains(&position[axis]) {
            continue;
        }
        let src_position = rotate(axis, -quarter_turns, position - IVec3::ONE) + IVec3::ONE;
        let src_normal = rotate(axis, -quarter_turns, face.normal());
        let (src_face, src_row, src_col) = addresses[&(src_position, src_normal)];
        next[face as usize][row][col] = stickers[src_face as usize][src_row][src_col];
    }
    next
}

fn color_counts(cube: &CubeState) -> HashMap<Color, usize> {
    cube.stickers().iter().flatten().flatten().copied().counts()
}

#[test_log::test]
fn every_move_matches_the_geometry() {
    let mut cube = labeled();
    cube.apply_all(scramble());

    for mv in Move::ALL {
        let expected = apply_geometrically(&cube.stickers(), mv);
        let mut actual = cube.clone();
        actual.apply(mv);
        assert_eq!(actual.stickers(), expected, "{mv}");
    }
}

#[test_log::test]
fn four_quarter_turns_are_identity() {
    let start = labeled().applied(scramble());

    for mv in Move::ALL {
        let mut cube = start.clone();
        for i in 0..4 {
            if i > 0 {
                assert_ne!(cube, start, "{mv} has order {i}");
            }
            cube.apply(mv);
        }
        assert_eq!(cube, start, "{mv}");
    }
}

#[test_log::test]
fn inverses_cancel() {
    let start = labeled().applied(scramble());

    for mv in Move::ALL {
        assert_eq!(start.applied([mv, mv.inverse()]), start, "{mv}");
        assert_eq!(start.applied([mv.inverse(), mv]), start, "{mv}");
    }
}

#[test_log::test]
fn moves_conserve_stickers() {
    let mut cube = CubeState::solved();
    cube.apply_all(scramble());
    assert!(!cube.is_solved());

    for mv in Move::ALL {
        let after = cube.applied([mv]);
        assert_eq!(color_counts(&after), color_counts(&cube), "{mv}");
        assert!(color_counts(&after).values().all(|&count| count == 9));
        assert_eq!(after.stickers().iter().flatten().flatten().count(), 54);
    }

    // Every label is still present exactly once
    let labels = labeled().applied(scramble());
    let mut seen = labels
        .stickers()
        .iter()
        .flatten()
        .flatten()
        .copied()
        .collect_vec();
    seen.sort();
    let mut all = iproduct!(Face::ALL, 0..3, 0..3).collect_vec();
    all.sort();
    assert_eq!(seen, all);
}

#[test_log::test]
fn opposite_layers_commute() {
    let start = labeled().applied(scramble());

    assert_eq!(
        start.applied([Move::R, Move::L]),
        start.applied([Move::L, Move::R])
    );
    assert_eq!(
        start.applied([Move::U, Move::DInverse]),
        start.applied([Move::DInverse, Move::U])
    );
    assert_eq!(
        start.applied([Move::F, Move::S, Move::B]),
        start.applied([Move::B, Move::F, Move::S])
    );

    assert_ne!(
        start.applied([Move::R, Move::U]),
        start.applied([Move::U, Move::R])
    );
    assert_ne!(
        start.applied([Move::F, Move::L]),
        start.applied([Move::L, Move::F])
    );
}

#[test_log::test]
fn rolls_are_slices_and_layers_together() {
    let start = labeled().applied(scramble());
    let seq = |s: &str| start.applied(parse_sequence(s).unwrap());

    assert_eq!(seq("x"), seq("R M' L'"));
    assert_eq!(seq("y"), seq("U E' D'"));
    assert_eq!(seq("z"), seq("F S B'"));

    // Turning the top after rolling the front up is turning the front
    assert_eq!(seq("x U x'"), seq("F"));
    assert_eq!(seq("y' R y"), seq("F"));
}

#[test_log::test]
fn move_orders() {
    let start = labeled();

    let order = |alg: &str| {
        let alg = parse_sequence(alg).unwrap();
        let mut cube = start.applied(alg.iter().copied());
        let mut order = 1;
        while cube != start {
            cube.apply_all(alg.iter().copied());
            order += 1;
        }
        info!("{} has order {order}", alg.iter().join(" "));
        order
    };

    assert_eq!(order("R"), 4);
    assert_eq!(order("R U R' U'"), 6);
    assert_eq!(order("R U"), 105);
    assert_eq!(order("R2 U2"), 6);
}

#[test_log::test]
fn turn_right_from_solved() {
    let mut cube = CubeState::solved();
    cube.turn_right();

    let column = |face: Face, col: usize| -> [Color; 3] {
        let grid = cube.face(face);
        [grid[0][col], grid[1][col], grid[2][col]]
    };

    assert_eq!(cube.face(Face::Right), [[Color::Green; 3]; 3]);
    assert_eq!(cube.face(Face::Left), [[Color::Blue; 3]; 3]);
    assert_eq!(column(Face::Up, 2), [Color::Orange; 3]);
    assert_eq!(column(Face::Front, 2), [Color::Yellow; 3]);
    assert_eq!(column(Face::Down, 2), [Color::Red; 3]);
    assert_eq!(column(Face::Back, 0), [Color::White; 3]);

    for col in 0..2 {
        assert_eq!(column(Face::Up, col), [Color::White; 3]);
        assert_eq!(column(Face::Front, col), [Color::Orange; 3]);
        assert_eq!(column(Face::Down, col), [Color::Yellow; 3]);
    }
    for col in 1..3 {
        assert_eq!(column(Face::Back, col), [Color::Red; 3]);
    }
}

#[test_log::test]
fn turn_right_moves_labeled_stickers() {
    let mut cube = labeled();
    cube.turn_right();

    let right = cube.face(Face::Right);
    assert_eq!(
        right,
        [
            [(Face::Right, 2, 0), (Face::Right, 1, 0), (Face::Right, 0, 0)],
            [(Face::Right, 2, 1), (Face::Right, 1, 1), (Face::Right, 0, 1)],
            [(Face::Right, 2, 2), (Face::Right, 1, 2), (Face::Right, 0, 2)],
        ]
    );

    for row in 0..3 {
        assert_eq!(cube.face(Face::Up)[row][2], (Face::Front, row, 2));
        assert_eq!(cube.face(Face::Front)[row][2], (Face::Down, row, 2));
        assert_eq!(cube.face(Face::Down)[row][2], (Face::Back, 2 - row, 0));
        assert_eq!(cube.face(Face::Back)[row][0], (Face::Up, 2 - row, 2));
    }

    assert_eq!(cube.face(Face::Left), labeled().face(Face::Left));
}

#[test_log::test]
fn roll_x_relabels_faces() {
    let start = labeled();
    let mut cube = start.clone();
    cube.roll_x();

    assert_eq!(cube.face(Face::Up), start.face(Face::Front));
    assert_eq!(cube.face(Face::Front), start.face(Face::Down));
    for (row, col) in iproduct!(0..3, 0..3) {
        assert_eq!(cube.face(Face::Down)[row][col], (Face::Back, 2 - row, 2 - col));
        assert_eq!(cube.face(Face::Back)[row][col], (Face::Up, 2 - row, 2 - col));
    }
}

#[test_log::test]
fn snapshots_are_detached() {
    let cube = labeled().applied(scramble());

    let first = cube.stickers();
    let mut second = cube.stickers();
    assert_eq!(first, second);

    second[Face::Up as usize][0][0] = (Face::Down, 9, 9);
    assert_eq!(cube.stickers(), first);
}

#[test_log::test]
fn cubies_stay_physical() {
    // Stickers that start on the same cubie must end on the same cubie
    let home = |(face, row, col): Label| sticker_to_grid_position(face, row, col).unwrap();

    let mut cube = labeled();
    for mv in scramble().into_iter().chain(Move::ALL) {
        cube.apply(mv);

        let grid = build_cubie_grid(&cube.stickers());
        for (position, cubie) in grid.iter() {
            let homes = cubie.faces().map(|(_, label)| home(label)).unique().collect_vec();
            assert!(homes.len() <= 1, "{position:?} after {mv} mixes {homes:?}");
            if let Some(home) = homes.first() {
                assert_eq!(
                    cubie.sticker_count(),
                    grid[*home].sticker_count(),
                    "{position:?} after {mv}"
                );
            }
        }
    }
}

#[test_log::test]
fn cubie_colors_after_scramble() {
    let cube = CubeState::solved().applied(scramble());
    let grid = build_cubie_grid(&cube.stickers());

    let mut kinds = HashMap::new();
    for (position, cubie) in grid.iter() {
        *kinds.entry(cubie.kind()).or_insert(0_usize) += 1;

        let colors = cubie.faces().map(|(_, color)| color).collect_vec();
        assert!(colors.iter().all_unique(), "{position:?}: {colors:?}");
        for face in Face::ALL {
            let opposite_pair = [Color::solved_for(face), Color::solved_for(face.opposite())];
            assert!(
                !opposite_pair.iter().all(|color| colors.contains(color)),
                "{position:?} carries opposite colors {colors:?}"
            );
        }
    }

    assert_eq!(kinds.len(), 4);
    assert_eq!(kinds.values().sum::<usize>(), 27);
    assert_eq!(grid[GridPosition::new(1, 1, 1)].sticker_count(), 0);
}
