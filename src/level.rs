use crate::{Cell, Grid, PuzzleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Structured level description as it arrives from a level source.
///
/// Rectangular arrays in row order, row 0 at the top. This is the engine's
/// loading boundary: dimensions are checked strictly and mismatches fail
/// with `MalformedLevel` rather than being guessed or truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(rename = "levelName")]
    pub name: String,
    #[serde(rename = "gridCols")]
    pub cols: i32,
    #[serde(rename = "gridRows")]
    pub rows: i32,
    /// Cell numbers per row, 0 = unlabeled
    pub numbers: Vec<Vec<i32>>,
    #[serde(rename = "blockRight")]
    pub block_right: Vec<Vec<bool>>,
    #[serde(rename = "blockUp")]
    pub block_up: Vec<Vec<bool>>,
}

impl LevelData {
    /// Load a level description from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read level file: {}", e))?;

        let level: LevelData = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse level file: {}", e))?;

        Ok(level)
    }

    /// Save the level description as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize level: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write level file: {}", e))?;

        Ok(())
    }

    /// Validate the arrays and build the immutable grid.
    ///
    /// Ragged rows, row/column count mismatches and broken numbering all
    /// surface as `MalformedLevel`.
    pub fn build(&self) -> Result<Grid, PuzzleError> {
        let numbers = flatten(&self.numbers, self.cols, self.rows, "numbers")?;
        let block_right = flatten(&self.block_right, self.cols, self.rows, "blockRight")?;
        let block_up = flatten(&self.block_up, self.cols, self.rows, "blockUp")?;

        let grid = Grid::from_parts(self.cols, self.rows, numbers, block_right, block_up)?;
        grid.validate()?;
        Ok(grid)
    }

    /// Rebuild a level description from a grid (used by session snapshots)
    pub fn from_grid(name: &str, grid: &Grid) -> Self {
        let mut numbers = Vec::new();
        let mut block_right = Vec::new();
        let mut block_up = Vec::new();

        for y in 0..grid.rows() {
            let mut number_row = Vec::new();
            let mut right_row = Vec::new();
            let mut up_row = Vec::new();
            for x in 0..grid.cols() {
                let cell = Cell::new(x, y);
                number_row.push(grid.number(cell));
                right_row.push(grid.blocked_right(cell));
                up_row.push(grid.blocked_up(cell));
            }
            numbers.push(number_row);
            block_right.push(right_row);
            block_up.push(up_row);
        }

        LevelData {
            name: name.to_string(),
            cols: grid.cols(),
            rows: grid.rows(),
            numbers,
            block_right,
            block_up,
        }
    }
}

fn flatten<T: Copy>(
    array: &[Vec<T>],
    cols: i32,
    rows: i32,
    field: &str,
) -> Result<Vec<T>, PuzzleError> {
    if array.len() != rows.max(0) as usize {
        return Err(PuzzleError::MalformedLevel(format!(
            "{} has {} rows, expected {}",
            field,
            array.len(),
            rows
        )));
    }

    let mut flat = Vec::with_capacity((cols.max(0) * rows.max(0)) as usize);
    for (y, row) in array.iter().enumerate() {
        if row.len() != cols.max(0) as usize {
            return Err(PuzzleError::MalformedLevel(format!(
                "{} row {} has {} entries, expected {}",
                field,
                y,
                row.len(),
                cols
            )));
        }
        flat.extend(row.iter().copied());
    }
    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_level() -> LevelData {
        LevelData {
            name: "line".to_string(),
            cols: 2,
            rows: 1,
            numbers: vec![vec![1, 2]],
            block_right: vec![vec![false, false]],
            block_up: vec![vec![false, false]],
        }
    }

    #[test]
    fn test_build_minimal_level() {
        let grid = minimal_level().build().unwrap();
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.number(Cell::new(1, 0)), 2);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let mut level = minimal_level();
        level.numbers = vec![vec![1]];
        let err = level.build().unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedLevel(_)));
    }

    #[test]
    fn test_mismatched_barrier_rows_rejected() {
        let mut level = minimal_level();
        level.block_up = vec![vec![false, false], vec![false, false]];
        let err = level.build().unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedLevel(_)));
    }

    #[test]
    fn test_duplicate_start_rejected() {
        let mut level = minimal_level();
        level.numbers = vec![vec![1, 1]];
        let err = level.build().unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedLevel(_)));
    }

    #[test]
    fn test_from_grid_round_trip() {
        let level = minimal_level();
        let grid = level.build().unwrap();
        let rebuilt = LevelData::from_grid("line", &grid);
        assert_eq!(rebuilt.numbers, level.numbers);
        assert_eq!(rebuilt.block_right, level.block_right);
        assert_eq!(rebuilt.block_up, level.block_up);
    }
}
