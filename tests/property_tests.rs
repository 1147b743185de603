//! Property-based tests for dice, games and analysis.

use montecarlo::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Strategy: a face count and a weight per face, at least one positive.
fn weights_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..10u32, 1..8).prop_filter("needs a positive weight", |w| {
        w.iter().any(|&x| x > 0)
    })
}

/// Strategy: a rectangular table of rolls over faces 1..=4.
fn rows_strategy() -> impl Strategy<Value = Vec<Vec<i32>>> {
    (1..6usize).prop_flat_map(|dice| {
        prop::collection::vec(prop::collection::vec(1..=4i32, dice), 1..40)
    })
}

proptest! {
    // 1. Duplicate faces are always rejected
    #[test]
    fn duplicate_faces_rejected(mut faces in prop::collection::vec(any::<i32>(), 1..10), pick in any::<prop::sample::Index>()) {
        let dup = faces[pick.index(faces.len())];
        faces.push(dup);
        let err = Die::new(faces).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    // 2. set_weight changes exactly one face
    #[test]
    fn set_weight_is_local(n in 1..10i32, target in 0..10i32, w in 0.0..100.0f64) {
        let mut die = Die::new(0..n).unwrap();
        let result = die.set_weight(target, w);
        for face in 0..n {
            let expected = if face == target { w } else { 1.0 };
            prop_assert_eq!(die.weight(face), Some(expected));
        }
        prop_assert_eq!(result.is_ok(), target < n);
    }

    // 3. roll(n) returns n faces of the die, never a zero-weight face
    #[test]
    fn roll_returns_n_valid_faces(weights in weights_strategy(), n in 0..50usize, seed in any::<u64>()) {
        let mut die = Die::new(0..weights.len() as i32).unwrap();
        for (face, w) in weights.iter().enumerate() {
            die.set_weight(face as i32, *w).unwrap();
        }
        let rolls = die.roll_with(&mut StdRng::seed_from_u64(seed), n).unwrap();
        prop_assert_eq!(rolls.len(), n);
        for face in &rolls {
            let w = die.state().weight(face);
            prop_assert!(w.map_or(false, |w| w > 0.0));
        }
    }

    // 4. Result shapes follow rolls and dice
    #[test]
    fn result_shapes(dice in 1..6usize, rolls in 1..30usize, seed in any::<u64>()) {
        let mut game = Game::new(vec![Die::new(1..=6).unwrap(); dice]).unwrap();
        game.play_with(&mut StdRng::seed_from_u64(seed), rolls).unwrap();
        prop_assert_eq!(game.show_results("wide").unwrap().shape(), (rolls, dice));
        prop_assert_eq!(game.show_results("narrow").unwrap().shape(), (rolls * dice, 1));
    }

    // 5. Jackpots equal the number of all-equal rows
    #[test]
    fn jackpot_matches_manual_count(rows in rows_strategy()) {
        let expected = rows.iter().filter(|r| r.iter().all(|x| *x == r[0])).count();
        let table = OutcomeTable::from_rows(1..=4, rows).unwrap();
        prop_assert_eq!(table.jackpot_count(), expected);
    }

    // 6. Face count rows sum to the number of dice
    #[test]
    fn face_count_rows_sum_to_dice(rows in rows_strategy()) {
        let table = OutcomeTable::from_rows(1..=4, rows).unwrap();
        let counts = table.face_count();
        prop_assert_eq!(counts.shape(), (table.rolls(), 4));
        for (_, row) in counts.iter() {
            prop_assert_eq!(row.iter().sum::<usize>(), table.dice());
        }
    }

    // 7. Combo and permutation totals equal rolls; combos never outnumber permutations
    #[test]
    fn combo_coarser_than_permutation(rows in rows_strategy()) {
        let table = OutcomeTable::from_rows(1..=4, rows).unwrap();
        let combos = table.combo_count();
        let perms = table.permutation_count();
        prop_assert_eq!(combos.total(), table.rolls());
        prop_assert_eq!(perms.total(), table.rolls());
        prop_assert!(combos.len() <= perms.len());
    }
}
