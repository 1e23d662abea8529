use std::collections::HashMap;
use std::fmt;

/// A position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Manhattan distance to another cell
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Errors surfaced by grid construction and queries
///
/// `MalformedLevel` means the level description itself is broken and cannot
/// be loaded. `InvalidArgument` means a caller violated a query's contract
/// (out-of-bounds or non-adjacent cells); it is a programming error, not a
/// player-facing condition. Rejected moves are NOT errors - the transition
/// methods return plain booleans for those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    MalformedLevel(String),
    InvalidArgument(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::MalformedLevel(msg) => write!(f, "malformed level: {}", msg),
            PuzzleError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Immutable puzzle grid: dimensions, per-cell number labels and per-edge
/// barrier flags.
///
/// Storage is row-major with row 0 at the logical top, so "up" from (x, y)
/// is (x, y-1). A barrier belongs to an edge and is addressable from either
/// side: `block_right[id]` forbids movement between a cell and its right
/// neighbor, `block_up[id]` between a cell and the cell above it. Left/down
/// lookups consult the neighbor that owns the edge.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: i32,
    rows: i32,
    /// Cell labels: 0 = unlabeled, 1 = start, 2..=N checkpoints
    numbers: Vec<i32>,
    block_right: Vec<bool>,
    block_up: Vec<bool>,
}

impl Grid {
    /// Build a grid from flat row-major arrays
    pub fn from_parts(
        cols: i32,
        rows: i32,
        numbers: Vec<i32>,
        block_right: Vec<bool>,
        block_up: Vec<bool>,
    ) -> Result<Self, PuzzleError> {
        if cols <= 0 || rows <= 0 {
            return Err(PuzzleError::MalformedLevel(format!(
                "grid dimensions must be positive, got {}x{}",
                cols, rows
            )));
        }
        let expected = (cols * rows) as usize;
        if numbers.len() != expected {
            return Err(PuzzleError::MalformedLevel(format!(
                "numbers array has {} entries, expected {}",
                numbers.len(),
                expected
            )));
        }
        if block_right.len() != expected {
            return Err(PuzzleError::MalformedLevel(format!(
                "blockRight array has {} entries, expected {}",
                block_right.len(),
                expected
            )));
        }
        if block_up.len() != expected {
            return Err(PuzzleError::MalformedLevel(format!(
                "blockUp array has {} entries, expected {}",
                block_up.len(),
                expected
            )));
        }

        Ok(Grid {
            cols,
            rows,
            numbers,
            block_right,
            block_up,
        })
    }

    /// Build a barrier-free grid from a flat row-major number array
    pub fn with_numbers(cols: i32, rows: i32, numbers: &[i32]) -> Result<Self, PuzzleError> {
        let count = (cols.max(0) * rows.max(0)) as usize;
        Self::from_parts(
            cols,
            rows,
            numbers.to_vec(),
            vec![false; count],
            vec![false; count],
        )
    }

    /// Check the numbering invariant: exactly one cell labeled 1, and the
    /// nonzero labels form a contiguous range starting at 1 with no
    /// duplicates
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let mut seen: HashMap<i32, Cell> = HashMap::new();
        let mut max_number = 0;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let number = self.numbers[self.get_id(x, y) as usize];
                if number < 0 {
                    return Err(PuzzleError::MalformedLevel(format!(
                        "cell ({},{}) has negative number {}",
                        x, y, number
                    )));
                }
                if number == 0 {
                    continue;
                }
                if let Some(first) = seen.insert(number, Cell::new(x, y)) {
                    return Err(PuzzleError::MalformedLevel(format!(
                        "number {} appears at both {} and ({},{})",
                        number, first, x, y
                    )));
                }
                max_number = max_number.max(number);
            }
        }

        if !seen.contains_key(&1) {
            return Err(PuzzleError::MalformedLevel(
                "no cell is numbered 1".to_string(),
            ));
        }
        for n in 2..=max_number {
            if !seen.contains_key(&n) {
                return Err(PuzzleError::MalformedLevel(format!(
                    "numbers are not contiguous: {} is missing (highest is {})",
                    n, max_number
                )));
            }
        }

        Ok(())
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols && y >= 0 && y < self.rows
    }

    /// Convert (x, y) coordinates to cell ID
    pub fn get_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.cols
    }

    /// Convert cell ID to (x, y) coordinates
    pub fn get_coords(&self, id: i32) -> (i32, i32) {
        (id % self.cols, id / self.cols)
    }

    /// Number label of a cell (0 = unlabeled; out-of-bounds reads as 0)
    pub fn number(&self, cell: Cell) -> i32 {
        if !self.in_bounds(cell.x, cell.y) {
            return 0;
        }
        self.numbers[self.get_id(cell.x, cell.y) as usize]
    }

    /// Barrier on the right edge of the cell
    pub fn blocked_right(&self, cell: Cell) -> bool {
        if !self.in_bounds(cell.x, cell.y) {
            return false;
        }
        self.block_right[self.get_id(cell.x, cell.y) as usize]
    }

    /// Barrier on the top edge of the cell
    pub fn blocked_up(&self, cell: Cell) -> bool {
        if !self.in_bounds(cell.x, cell.y) {
            return false;
        }
        self.block_up[self.get_id(cell.x, cell.y) as usize]
    }

    /// Barrier on the left edge, owned by the left neighbor's right edge
    pub fn blocked_left(&self, cell: Cell) -> bool {
        self.blocked_right(Cell::new(cell.x - 1, cell.y))
    }

    /// Barrier on the bottom edge, owned by the lower neighbor's top edge
    pub fn blocked_down(&self, cell: Cell) -> bool {
        self.blocked_up(Cell::new(cell.x, cell.y + 1))
    }

    /// Check whether the edge between two adjacent cells carries a barrier.
    ///
    /// Both cells must be in bounds and at Manhattan distance 1; anything
    /// else is a caller bug and fails with `InvalidArgument`.
    pub fn is_edge_blocked(&self, a: Cell, b: Cell) -> Result<bool, PuzzleError> {
        if !self.in_bounds(a.x, a.y) {
            return Err(PuzzleError::InvalidArgument(format!(
                "cell {} is outside the {}x{} grid",
                a, self.cols, self.rows
            )));
        }
        if !self.in_bounds(b.x, b.y) {
            return Err(PuzzleError::InvalidArgument(format!(
                "cell {} is outside the {}x{} grid",
                b, self.cols, self.rows
            )));
        }
        if a.manhattan_distance(&b) != 1 {
            return Err(PuzzleError::InvalidArgument(format!(
                "cells {} and {} are not adjacent",
                a, b
            )));
        }

        let blocked = match (b.x - a.x, b.y - a.y) {
            (1, 0) => self.blocked_right(a),
            (-1, 0) => self.blocked_right(b),
            (0, -1) => self.blocked_up(a),
            (0, 1) => self.blocked_up(b),
            _ => unreachable!("adjacency already checked"),
        };
        Ok(blocked)
    }

    /// The cell labeled 1, if present
    pub fn start_cell(&self) -> Option<Cell> {
        self.find_number(1)
    }

    /// The cell carrying a given checkpoint number, if present
    pub fn checkpoint(&self, number: i32) -> Option<Cell> {
        if number < 1 {
            return None;
        }
        self.find_number(number)
    }

    /// Highest checkpoint number on the grid (0 if unlabeled)
    pub fn checkpoint_count(&self) -> i32 {
        self.numbers.iter().copied().max().unwrap_or(0)
    }

    fn find_number(&self, number: i32) -> Option<Cell> {
        for y in 0..self.rows {
            for x in 0..self.cols {
                if self.numbers[self.get_id(x, y) as usize] == number {
                    return Some(Cell::new(x, y));
                }
            }
        }
        None
    }
}
