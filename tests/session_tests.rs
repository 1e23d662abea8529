mod common;

use common::{engine_for, walk};
use std::path::Path;
use zipgrid::command_log::{Command, CommandLog, CommandOutcome};
use zipgrid::compact_log::{CompactLogReader, CompactLogWriter};
use zipgrid::{Cell, MoveOutcome, SaveState};

/// Drive a short session while recording every command, the way the CLI
/// harness does
fn play_logged_session() -> CommandLog {
    let mut engine = engine_for(Path::new("./test_data/barriers_3x3.json"));
    let mut log = CommandLog::new();

    let commands = vec![
        Command::StartAt { x: 1, y: 1 }, // not the start cell
        Command::StartAt { x: 0, y: 0 },
        Command::MoveTo { x: 0, y: 1 },
        Command::MoveTo { x: 1, y: 0 }, // not adjacent to the head
        Command::Rewind,
        Command::Reset,
    ];

    for command in commands {
        let accepted = match &command {
            Command::StartAt { x, y } => engine.start_at(Cell::new(*x, *y)),
            Command::MoveTo { x, y } => {
                engine.try_move_to(Cell::new(*x, *y)) != MoveOutcome::Ignored
            }
            Command::Rewind => engine.rewind(),
            Command::Reset => {
                engine.reset();
                true
            }
        };
        if accepted {
            log.log_accepted(command);
        } else {
            log.log_rejected(command);
        }
    }

    log
}

#[test]
fn command_log_records_outcomes() {
    let log = play_logged_session();
    let commands = log.get_commands();

    assert_eq!(commands.len(), 6);
    assert_eq!(commands[0].outcome, CommandOutcome::Rejected); // wrong start cell
    assert_eq!(commands[1].outcome, CommandOutcome::Accepted);
    assert_eq!(commands[2].outcome, CommandOutcome::Accepted);
    assert_eq!(commands[3].outcome, CommandOutcome::Rejected); // illegal move
    assert_eq!(commands[4].outcome, CommandOutcome::Accepted);
    assert_eq!(commands[5].outcome, CommandOutcome::Accepted);

    let summary = log.summary();
    assert!(summary.contains("Rejected: 2"), "summary was: {}", summary);
}

#[test]
fn command_log_serializes_to_json() {
    let log = play_logged_session();

    let json = serde_json::to_string(log.get_commands()).unwrap();
    let reparsed: Vec<zipgrid::command_log::LoggedCommand> = serde_json::from_str(&json).unwrap();

    assert_eq!(reparsed.len(), log.get_commands().len());
    assert_eq!(reparsed[1].command, Command::StartAt { x: 0, y: 0 });
}

#[test]
fn compact_codec_round_trips_a_session() {
    let log = play_logged_session();

    let mut writer = CompactLogWriter::new();
    for logged in log.get_commands() {
        writer.write_command(logged).unwrap();
    }

    let mut reader = CompactLogReader::new(writer.get_bytes());
    let mut decoded = Vec::new();
    while let Some(logged) = reader.read_command() {
        decoded.push(logged);
    }

    assert_eq!(decoded.len(), log.get_commands().len());
    for (original, roundtrip) in log.get_commands().iter().zip(decoded.iter()) {
        assert_eq!(original.timestamp_ms, roundtrip.timestamp_ms);
        assert_eq!(original.command, roundtrip.command);
        assert_eq!(original.outcome, roundtrip.outcome);
    }
}

#[test]
fn save_state_round_trips_mid_session() {
    let mut engine = engine_for(Path::new("./test_data/barriers_3x3.json"));
    walk(
        &mut engine,
        &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
    );

    let snapshot = SaveState::from_engine("barriers_3x3", &engine);
    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    let reparsed: SaveState = serde_json::from_str(&json).unwrap();

    let restored = reparsed.restore().unwrap();
    assert_eq!(restored.sequence(), engine.sequence());
    assert_eq!(
        restored.next_expected_number(),
        engine.next_expected_number()
    );
    assert_eq!(restored.is_solved(), engine.is_solved());
}

#[test]
fn save_state_rejects_barrier_crossing_path() {
    let mut engine = engine_for(Path::new("./test_data/barriers_3x3.json"));
    walk(&mut engine, &[Cell::new(0, 0)]);

    let mut snapshot = SaveState::from_engine("barriers_3x3", &engine);
    // (0,0) -> (1,0) crosses the blocked edge in this level
    let grid = engine.grid();
    snapshot.path_cells.push(grid.get_id(1, 0));

    assert!(snapshot.restore().is_err());
}
