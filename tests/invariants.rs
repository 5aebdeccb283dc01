//! Property tests for board invariants over random battlefields

use proptest::prelude::*;

use skirmish::battle::*;
use skirmish::core::{CombatConfig, Point};

fn cell_symbol() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => Just('.'),
        2 => Just('#'),
        1 => Just('G'),
        1 => Just('E'),
    ]
}

fn battlefield_map() -> impl Strategy<Value = String> {
    (3usize..9, 3usize..9).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(cell_symbol(), width), height).prop_map(
            |rows| {
                rows.into_iter()
                    .map(|row| row.into_iter().collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\n")
            },
        )
    })
}

fn small_config() -> CombatConfig {
    CombatConfig {
        hit_points: 12,
        ..CombatConfig::default()
    }
}

proptest! {
    #[test]
    fn prop_grid_and_units_stay_consistent(map in battlefield_map()) {
        let mut engine = CombatEngine::from_input(&map, small_config()).unwrap();
        prop_assert!(engine.battlefield().check_consistency().is_ok());

        for _ in 0..60 {
            let outcome = engine.run_round().unwrap();
            let field = engine.battlefield();
            prop_assert!(field.check_consistency().is_ok(), "{:?}", field.check_consistency());

            let mut positions: Vec<Point> = field.roster.living().map(|u| u.position).collect();
            let count = positions.len();
            positions.sort();
            positions.dedup();
            prop_assert_eq!(positions.len(), count);

            if let RoundOutcome::Ended(_) = outcome {
                break;
            }
        }
    }

    #[test]
    fn prop_walls_never_change(map in battlefield_map()) {
        let mut engine = CombatEngine::from_input(&map, small_config()).unwrap();
        let walls: Vec<Point> = engine
            .battlefield()
            .grid
            .points()
            .filter(|p| engine.battlefield().grid.get(*p).unwrap() == Cell::Wall)
            .collect();

        for _ in 0..30 {
            if let RoundOutcome::Ended(_) = engine.run_round().unwrap() {
                break;
            }
        }

        let grid = &engine.battlefield().grid;
        for wall in walls {
            prop_assert_eq!(grid.get(wall).unwrap(), Cell::Wall);
        }
    }

    #[test]
    fn prop_simulation_is_deterministic(map in battlefield_map()) {
        let mut a = CombatEngine::from_input(&map, small_config()).unwrap();
        let mut b = a.clone();

        for _ in 0..30 {
            let ra = a.run_round().unwrap();
            let rb = b.run_round().unwrap();
            prop_assert_eq!(&ra, &rb);
            if let RoundOutcome::Ended(_) = ra {
                break;
            }
        }
        prop_assert_eq!(a.battlefield(), b.battlefield());
        prop_assert_eq!(a.score(), b.score());
    }

    #[test]
    fn prop_moves_are_single_orthogonal_steps(map in battlefield_map()) {
        let mut engine = CombatEngine::from_input(&map, small_config()).unwrap();

        for _ in 0..30 {
            match engine.run_round().unwrap() {
                RoundOutcome::Completed(report) => {
                    for event in &report.events {
                        if let CombatEvent::Moved { from, to, .. } = event {
                            prop_assert!(from.is_adjacent(to));
                        }
                    }
                }
                RoundOutcome::Ended(_) => break,
            }
        }
    }
}
