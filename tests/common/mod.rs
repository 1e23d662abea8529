use std::fs;
use std::path::{Path, PathBuf};

use zipgrid::{Cell, LevelData, PuzzleEngine};

/// Load a level description from a JSON file
pub fn load_level(path: &Path) -> Result<LevelData, Box<dyn std::error::Error>> {
    let level = LevelData::load_from_file(path)?;
    Ok(level)
}

/// All level files under test_data that describe loadable levels
/// (files prefixed `invalid_` are fixtures for failure tests)
pub fn valid_level_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(entries) = fs::read_dir("./test_data") {
        let mut entries: Vec<_> = entries.filter_map(Result::ok).collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown");
            if name.starts_with("invalid_") {
                continue;
            }
            files.push(path);
        }
    }

    files
}

/// Build an engine for a level file, panicking with the file name on failure
pub fn engine_for(path: &Path) -> PuzzleEngine {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");
    let level = match load_level(path) {
        Ok(level) => level,
        Err(e) => panic!("Level '{}' failed to load: {}", name, e),
    };
    let grid = match level.build() {
        Ok(grid) => grid,
        Err(e) => panic!("Level '{}' failed to build: {}", name, e),
    };
    PuzzleEngine::new(grid)
}

/// Drive the engine along a cell sequence: start at the first cell, extend
/// through the rest. Panics on the first rejected step.
pub fn walk(engine: &mut PuzzleEngine, cells: &[Cell]) {
    let (first, rest) = match cells.split_first() {
        Some(split) => split,
        None => return,
    };

    if !engine.start_at(*first) {
        panic!("start_at({}) was rejected", first);
    }
    for cell in rest {
        if !engine.extend_to(*cell) {
            panic!("extend_to({}) was rejected", cell);
        }
    }
}
