use crate::rules::{self, NEIGHBOR_OFFSETS};
use crate::{Cell, Grid, PathState};

/// Find a complete legal path for the grid, or None if it has no solution.
///
/// Depth-first search from the start cell over the same move legality the
/// engine enforces. Neighbors expand in the fixed right/down/left/up order,
/// so the result is deterministic for a given grid. Branches whose
/// checkpoint prefix is already out of ascending order are pruned - that
/// only applies the win-time ordering rule early, it does not change which
/// paths count as solutions.
pub fn solve(grid: &Grid) -> Option<Vec<Cell>> {
    let start = grid.start_cell()?;

    let mut path = PathState::new();
    path.push(grid, start);

    // The start cell consumes checkpoint 1
    if dfs(grid, &mut path, 2) {
        Some(path.sequence().to_vec())
    } else {
        None
    }
}

fn dfs(grid: &Grid, path: &mut PathState, next_checkpoint: i32) -> bool {
    if path.len() == grid.cell_count() {
        return rules::is_solved(grid, path);
    }

    let head = match path.head() {
        Some(head) => head,
        None => return false,
    };

    for &(dx, dy) in NEIGHBOR_OFFSETS.iter() {
        let neighbor = Cell::new(head.x + dx, head.y + dy);
        if !rules::can_move(grid, path, head, neighbor) {
            continue;
        }

        let number = grid.number(neighbor);
        let stepped_checkpoint = number > 0;
        if stepped_checkpoint && number != next_checkpoint {
            continue; // would break the ascending checkpoint order
        }

        path.push(grid, neighbor);
        let next = if stepped_checkpoint {
            next_checkpoint + 1
        } else {
            next_checkpoint
        };
        if dfs(grid, path, next) {
            return true;
        }
        path.pop(grid);
    }

    false
}

/// Format a path for display
pub fn format_path(path: &[Cell]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, cell) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&format!("({},{})", cell.x, cell.y));
    }
    result
}
