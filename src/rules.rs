use crate::{Cell, Grid, PathState};

/// Neighbor offsets in the order right, down, left, up.
/// Every caller that probes neighbors uses this order so behavior is
/// deterministic across the engine, the stuck check and the solver.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Move legality: the four conditions a step from `from` to `to` must meet.
///
/// Numbers are deliberately not consulted here - checkpoints may be visited
/// in any order during play, and ordering is only enforced by `is_solved`.
pub fn can_move(grid: &Grid, path: &PathState, from: Cell, to: Cell) -> bool {
    if to == from {
        return false;
    }
    if !grid.in_bounds(to.x, to.y) || !grid.in_bounds(from.x, from.y) {
        return false;
    }
    if from.manhattan_distance(&to) != 1 {
        return false;
    }
    if path.is_visited(to) {
        return false;
    }
    // Adjacency and bounds hold at this point, so the edge query cannot fail
    matches!(grid.is_edge_blocked(from, to), Ok(false))
}

/// True if any neighbor of the current head is a legal next step
pub fn has_legal_continuation(grid: &Grid, path: &PathState) -> bool {
    let head = match path.head() {
        Some(cell) => cell,
        None => return false,
    };

    NEIGHBOR_OFFSETS.iter().any(|&(dx, dy)| {
        let neighbor = Cell::new(head.x + dx, head.y + dy);
        can_move(grid, path, head, neighbor)
    })
}

/// The "dead end" signal: the path does not yet cover the grid and the head
/// has no legal continuation. An empty path is not stuck - there is no head
/// yet. Presentation layers use this to pick alert styling; the engine only
/// reports the boolean.
pub fn is_stuck_but_incomplete(grid: &Grid, path: &PathState) -> bool {
    !path.is_empty() && path.len() < grid.cell_count() && !has_legal_continuation(grid, path)
}

/// Win check: full coverage plus a strictly ascending checkpoint
/// subsequence starting at 1.
///
/// Coverage is a plain length comparison - the path structure already
/// guarantees no duplicates.
pub fn is_solved(grid: &Grid, path: &PathState) -> bool {
    if path.len() != grid.cell_count() {
        return false;
    }

    let mut expected = 1;
    for &cell in path.sequence() {
        let number = grid.number(cell);
        if number == 0 {
            continue;
        }
        if number != expected {
            return false;
        }
        expected += 1;
    }

    // At least the start cell must carry a number
    expected > 1
}
