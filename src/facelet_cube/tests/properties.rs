use facelet_cube::{Cube, CubeState, Face, rotate};
use itertools::Itertools;
use proptest::prelude::*;

fn arb_face() -> impl Strategy<Value = Face> {
    prop::sample::select(Face::ALL.to_vec())
}

proptest! {
    #[test]
    fn solved_is_ascending(size in 1usize..=12) {
        let cube = Cube::new(size).unwrap();
        let expected = (0..u32::try_from(6 * size * size).unwrap()).collect_vec();
        prop_assert_eq!(cube.flat(), expected.as_slice());
    }

    #[test]
    fn turn_is_never_a_no_op(size in 2usize..=12, face in arb_face()) {
        let solved = CubeState::solved(size).unwrap();
        prop_assert_ne!(rotate(&solved, face), solved);
    }

    #[test]
    fn four_turns_are_the_identity(
        size in 1usize..=12,
        face in arb_face(),
        turns in prop::collection::vec(arb_face(), 0..8),
    ) {
        let start = turns
            .iter()
            .fold(CubeState::solved(size).unwrap(), |state, &turn| rotate(&state, turn));
        let mut state = start.clone();
        for _ in 0..4 {
            state = rotate(&state, face);
        }
        prop_assert_eq!(state, start);
    }

    #[test]
    fn turns_only_permute(
        size in 1usize..=10,
        turns in prop::collection::vec(arb_face(), 0..40),
    ) {
        let solved = CubeState::solved(size).unwrap();
        let scrambled = turns
            .iter()
            .fold(solved.clone(), |state, &turn| rotate(&state, turn));
        prop_assert_eq!(scrambled.flat().len(), solved.flat().len());
        prop_assert_eq!(
            scrambled.flat().iter().copied().sorted().collect_vec(),
            solved.flat().to_vec()
        );
    }

    #[test]
    fn opposite_face_is_untouched(size in 1usize..=10, face in arb_face()) {
        let solved = CubeState::solved(size).unwrap();
        let turned = rotate(&solved, face);
        prop_assert_eq!(turned.face(face.opposite()), solved.face(face.opposite()));
    }
}

#[test_log::test]
fn test_random_scrambles_stay_permutations() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..50 {
        let size = rng.usize(1..=7);
        let mut cube = Cube::new(size).unwrap();
        for _ in 0..rng.usize(1..200) {
            cube.rotate_in_place(rng.choice(Face::ALL).unwrap());
        }
        let mut seen = vec![false; cube.flat().len()];
        for &facelet in cube.flat() {
            let index = usize::try_from(facelet).unwrap();
            assert!(!seen[index], "facelet {facelet} duplicated");
            seen[index] = true;
        }
    }
}

#[test_log::test]
fn test_random_scramble_undoes() {
    let mut rng = fastrand::Rng::with_seed(7);
    let solved = CubeState::solved(5).unwrap();
    let turns = (0..100)
        .map(|_| rng.choice(Face::ALL).unwrap())
        .collect_vec();

    let scrambled = turns
        .iter()
        .fold(solved.clone(), |state, &turn| rotate(&state, turn));
    assert!(!scrambled.is_solved());

    // Three clockwise quarter turns undo one.
    let undone = turns.iter().rev().fold(scrambled, |state, &turn| {
        facelet_cube::rotate_times(&state, turn, 3)
    });
    assert!(undone.is_solved());
}
