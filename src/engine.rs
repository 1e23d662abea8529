use crate::rules;
use crate::{Cell, Grid, PathState};

/// Coarse engine state: no active path, or a path being drawn.
/// "Solved" is a property of the path, not a state - a finished path stays
/// in `Drawing` and satisfies `is_solved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Drawing,
}

/// What the pointer-target dispatcher did with a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A fresh path was seeded at the start cell
    Started,
    /// The cell was appended to the path
    Extended,
    /// The head was removed (target was the cell before the head)
    Rewound,
    /// No transition fired; state is unchanged
    Ignored,
}

/// The single entry point an input/presentation layer talks to.
///
/// Owns the immutable grid and the mutable path, applies the transition
/// rules, and exposes read-only queries for rendering and feedback. Illegal
/// commands are silent no-ops that leave state untouched; none of the
/// methods panic on player input.
pub struct PuzzleEngine {
    grid: Grid,
    path: PathState,
}

impl PuzzleEngine {
    pub fn new(grid: Grid) -> Self {
        PuzzleEngine {
            grid,
            path: PathState::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> EngineState {
        if self.path.is_empty() {
            EngineState::Idle
        } else {
            EngineState::Drawing
        }
    }

    /// Seed a path at the start cell. Legal only for the cell numbered 1;
    /// clicking it again while drawing restarts the path. Returns whether
    /// the command was accepted.
    pub fn start_at(&mut self, cell: Cell) -> bool {
        if self.grid.number(cell) != 1 {
            return false;
        }
        self.path.restart(&self.grid, cell);
        true
    }

    /// Append a cell to the path if the move is legal. Returns whether the
    /// command was accepted; rejection leaves the path untouched.
    pub fn extend_to(&mut self, cell: Cell) -> bool {
        let head = match self.path.head() {
            Some(head) => head,
            None => return false,
        };
        if !rules::can_move(&self.grid, &self.path, head, cell) {
            return false;
        }
        self.path.push(&self.grid, cell);
        true
    }

    /// Remove the head cell, exactly undoing the last extend. Legal only
    /// while the path has at least two cells.
    pub fn rewind(&mut self) -> bool {
        if self.path.len() < 2 {
            return false;
        }
        self.path.pop(&self.grid);
        true
    }

    /// Drop the path entirely and return to `Idle`
    pub fn reset(&mut self) {
        self.path.clear();
    }

    /// Pointer-target dispatcher: decide which transition a targeted cell
    /// fires. The head is a no-op, the cell before the head rewinds, a
    /// legal adjacent unvisited cell extends, everything else is ignored.
    /// While idle, targeting the start cell seeds the path.
    pub fn try_move_to(&mut self, cell: Cell) -> MoveOutcome {
        let head = match self.path.head() {
            Some(head) => head,
            None => {
                if self.start_at(cell) {
                    return MoveOutcome::Started;
                }
                return MoveOutcome::Ignored;
            }
        };

        if cell == head {
            return MoveOutcome::Ignored;
        }
        if self.path.prev() == Some(cell) {
            self.rewind();
            return MoveOutcome::Rewound;
        }
        if self.extend_to(cell) {
            return MoveOutcome::Extended;
        }
        MoveOutcome::Ignored
    }

    // Read-only queries for presentation layers

    /// Visit-ordered cell sequence, for drawing the connecting path
    pub fn sequence(&self) -> &[Cell] {
        self.path.sequence()
    }

    pub fn path(&self) -> &PathState {
        &self.path
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.path.is_visited(cell)
    }

    pub fn next_expected_number(&self) -> i32 {
        self.path.next_expected_number()
    }

    pub fn has_legal_continuation(&self) -> bool {
        rules::has_legal_continuation(&self.grid, &self.path)
    }

    pub fn is_stuck_but_incomplete(&self) -> bool {
        rules::is_stuck_but_incomplete(&self.grid, &self.path)
    }

    pub fn is_solved(&self) -> bool {
        rules::is_solved(&self.grid, &self.path)
    }
}
