use crate::{Cell, LevelData, PuzzleEngine};
use serde::{Deserialize, Serialize};
use std::fs;

/// Snapshot of a play session: the level plus the path drawn so far
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveState {
    pub level: LevelData,
    /// Path cells in visit order, stored as cell IDs
    pub path_cells: Vec<i32>,
}

impl SaveState {
    /// Create a save state from a running engine
    pub fn from_engine(name: &str, engine: &PuzzleEngine) -> Self {
        let grid = engine.grid();
        let path_cells = engine
            .sequence()
            .iter()
            .map(|cell| grid.get_id(cell.x, cell.y))
            .collect();

        SaveState {
            level: LevelData::from_grid(name, grid),
            path_cells,
        }
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize save state: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write save file: {}", e))?;

        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read save file: {}", e))?;

        let save_state: SaveState =
            serde_json::from_str(&json).map_err(|e| format!("Failed to parse save file: {}", e))?;

        Ok(save_state)
    }

    /// Rebuild an engine from the snapshot.
    ///
    /// The saved path is replayed through the engine's own transitions, so a
    /// snapshot that encodes an illegal path (stale file, hand edits) is
    /// rejected instead of smuggling broken state past the invariants.
    pub fn restore(&self) -> Result<PuzzleEngine, String> {
        let grid = self
            .level
            .build()
            .map_err(|e| format!("Save state has an unloadable level: {}", e))?;
        let mut engine = PuzzleEngine::new(grid);

        for (i, &cell_id) in self.path_cells.iter().enumerate() {
            let (x, y) = engine.grid().get_coords(cell_id);
            let cell = Cell::new(x, y);

            let accepted = if i == 0 {
                engine.start_at(cell)
            } else {
                engine.extend_to(cell)
            };
            if !accepted {
                return Err(format!(
                    "Save state path is not legal for the level (step {} at {})",
                    i, cell
                ));
            }
        }

        Ok(engine)
    }
}
