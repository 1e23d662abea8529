mod common;

use common::{engine_for, load_level};
use std::path::Path;
use zipgrid::{format_path, solve, MoveOutcome};

#[test]
fn shipped_levels_are_solvable() {
    let mut solved = 0;

    for path in common::valid_level_files() {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        if name.starts_with("unsolvable_") {
            continue;
        }

        let engine = engine_for(&path);
        match solve(engine.grid()) {
            Some(cells) => {
                assert_eq!(
                    cells.len(),
                    engine.grid().cell_count(),
                    "solution for '{}' does not cover the grid",
                    name
                );
                solved += 1;
            }
            None => panic!("level '{}' has no solution", name),
        }
    }

    assert!(solved > 0, "no solvable levels found under test_data");
}

#[test]
fn solver_result_drives_engine_to_win() {
    for path in common::valid_level_files() {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        if name.starts_with("unsolvable_") {
            continue;
        }

        let mut engine = engine_for(&path);
        let cells = solve(engine.grid()).unwrap_or_else(|| panic!("'{}' unsolvable", name));

        // Feed the solution through the pointer dispatcher, like an input
        // layer would
        for (i, cell) in cells.iter().enumerate() {
            let outcome = engine.try_move_to(*cell);
            assert_ne!(
                outcome,
                MoveOutcome::Ignored,
                "step {} of solution for '{}' was ignored at {}",
                i,
                name,
                cell
            );
        }

        assert!(
            engine.is_solved(),
            "'{}' not solved by its solution: {}",
            name,
            format_path(&cells)
        );
    }
}

#[test]
fn split_grid_has_no_solution() {
    let level = load_level(Path::new("./test_data/unsolvable_2x2.json")).unwrap();
    let grid = level.build().unwrap();
    assert!(solve(&grid).is_none());
}
