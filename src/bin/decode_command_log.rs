/// Decoder for compact binary command logs
///
/// Reads .bin files produced by CompactLogWriter and prints a
/// human-readable listing.
use std::env;
use std::fs;
use std::io;

use zipgrid::command_log::{Command, CommandOutcome};
use zipgrid::compact_log::CompactLogReader;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <command_log.bin>", args[0]);
        eprintln!("Decodes compact binary command log to human-readable format");
        std::process::exit(1);
    }

    let filename = &args[1];
    let data = fs::read(filename)?;

    println!("=== Compact Command Log: {} ===", filename);
    println!("File size: {} bytes\n", data.len());

    let mut reader = CompactLogReader::new(&data);
    let mut event_count = 0;

    while let Some(logged) = reader.read_command() {
        event_count += 1;

        let outcome = match logged.outcome {
            CommandOutcome::Accepted => "ACCEPT",
            CommandOutcome::Rejected => "REJECT",
        };
        let command = match logged.command {
            Command::StartAt { x, y } => format!("StartAt({}, {})", x, y),
            Command::MoveTo { x, y } => format!("MoveTo({}, {})", x, y),
            Command::Rewind => "Rewind".to_string(),
            Command::Reset => "Reset".to_string(),
        };
        println!("[{:6}ms] {} {}", logged.timestamp_ms, outcome, command);
    }

    println!("\n=== Summary ===");
    println!("Total events: {}", event_count);
    if event_count > 0 {
        println!(
            "Average bytes per event: {:.2}",
            data.len() as f64 / event_count as f64
        );
    }

    Ok(())
}
