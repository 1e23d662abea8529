use arboard::Clipboard;
use std::fs;
use std::process;

use zipgrid::command_log::{Command, CommandLog};
use zipgrid::compact_log::CompactLogWriter;
use zipgrid::config::Config;
use zipgrid::{format_path, solve, Cell, LevelData, MoveOutcome, PuzzleEngine};

/// Load a command script (JSON list of commands) from file
fn load_commands(path: &str) -> Result<Vec<Command>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let commands: Vec<Command> = serde_json::from_str(&contents)?;
    Ok(commands)
}

/// Apply one command to the engine, returning whether it was accepted
fn apply_command(engine: &mut PuzzleEngine, command: &Command) -> bool {
    match command {
        Command::StartAt { x, y } => engine.start_at(Cell::new(*x, *y)),
        Command::MoveTo { x, y } => engine.try_move_to(Cell::new(*x, *y)) != MoveOutcome::Ignored,
        Command::Rewind => engine.rewind(),
        Command::Reset => {
            engine.reset();
            true
        }
    }
}

/// Render the board as text: numbers as digits, the path head as @,
/// visited unlabeled cells as *, free cells as dots. Barriers show as |
/// between columns and --- between rows.
fn board_to_string(engine: &PuzzleEngine) -> String {
    let grid = engine.grid();
    let head = engine.sequence().last().copied();
    let mut result = String::new();

    for y in 0..grid.rows() {
        if y > 0 {
            for x in 0..grid.cols() {
                if x > 0 {
                    result.push(' ');
                }
                let above = Cell::new(x, y - 1);
                if grid.blocked_down(above) {
                    result.push_str("---");
                } else {
                    result.push_str("   ");
                }
            }
            result.push('\n');
        }

        for x in 0..grid.cols() {
            let cell = Cell::new(x, y);
            if x > 0 {
                let left = Cell::new(x - 1, y);
                if grid.blocked_right(left) {
                    result.push('|');
                } else {
                    result.push(' ');
                }
            }

            let token = if head == Some(cell) {
                "@".to_string()
            } else if grid.number(cell) > 0 {
                grid.number(cell).to_string()
            } else if engine.is_visited(cell) {
                "*".to_string()
            } else {
                ".".to_string()
            };
            result.push_str(&format!("{:^3}", token));
        }
        result.push('\n');
    }

    result
}

fn copy_to_clipboard(text: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Board copied to clipboard!");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

fn print_status(engine: &PuzzleEngine) {
    let total = engine.grid().cell_count();
    let covered = engine.sequence().len();

    if engine.is_solved() {
        println!("Status: SOLVED ({} cells)", total);
    } else if engine.is_stuck_but_incomplete() {
        println!(
            "Status: STUCK at {} of {} cells (next expected number: {})",
            covered,
            total,
            engine.next_expected_number()
        );
    } else {
        println!(
            "Status: {} of {} cells (next expected number: {})",
            covered,
            total,
            engine.next_expected_number()
        );
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut level_path: Option<String> = None;
    let mut replay_path: Option<String> = None;
    let mut run_solver = false;
    let mut copy_board = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--replay" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Usage: {} [level.json] [--replay script.json] [--solve] [--copy]", args[0]);
                    process::exit(1);
                }
                replay_path = Some(args[i].clone());
            }
            "--solve" => run_solver = true,
            "--copy" => copy_board = true,
            other => level_path = Some(other.to_string()),
        }
        i += 1;
    }

    let config = Config::load();
    let level_path = level_path.unwrap_or(config.level.path.clone());

    let level = match LevelData::load_from_file(&level_path) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let grid = match level.build() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Cannot load level '{}': {}", level.name, e);
            process::exit(1);
        }
    };

    println!(
        "Level '{}': {}x{}, {} checkpoints",
        level.name,
        grid.cols(),
        grid.rows(),
        grid.checkpoint_count()
    );

    let mut engine = PuzzleEngine::new(grid);

    if run_solver {
        match solve(engine.grid()) {
            Some(path) => {
                println!("Solution ({} cells): {}", path.len(), format_path(&path));
            }
            None => {
                println!("No solution exists for this level");
            }
        }
    }

    if let Some(script) = replay_path {
        let commands = match load_commands(&script) {
            Ok(commands) => commands,
            Err(e) => {
                eprintln!("Failed to load command script '{}': {}", script, e);
                process::exit(1);
            }
        };

        let mut log = CommandLog::new();
        for command in &commands {
            let accepted = apply_command(&mut engine, command);
            if accepted {
                log.log_accepted(command.clone());
            } else {
                log.log_rejected(command.clone());
            }
        }

        println!("Replayed {} commands from {}", commands.len(), script);
        println!("{}", log.summary());

        if config.logging.enable_command_log {
            if let Err(e) = log.save_to_file(&config.logging.command_log_path) {
                eprintln!("Failed to save command log: {}", e);
            }
            let mut writer = CompactLogWriter::new();
            for logged in log.get_commands() {
                if writer.write_command(logged).is_err() {
                    break;
                }
            }
            if let Err(e) = writer.save_to_file(&config.logging.compact_log_path) {
                eprintln!("Failed to save compact log: {}", e);
            }
        }
    }

    let board = board_to_string(&engine);
    println!("\n{}", board);
    print_status(&engine);

    if copy_board {
        copy_to_clipboard(&board);
    }
}
