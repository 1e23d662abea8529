use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Engine commands as issued by an input layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Seed a path at the start cell (x, y)
    StartAt { x: i32, y: i32 },
    /// Pointer moved onto cell (x, y) - dispatcher decides the transition
    MoveTo { x: i32, y: i32 },
    /// Remove the current head
    Rewind,
    /// Drop the path entirely
    Reset,
}

/// Whether the engine took the transition or left state untouched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Accepted,
    Rejected,
}

/// Logged command with timestamp and outcome
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedCommand {
    /// Milliseconds since session start
    pub timestamp_ms: u64,
    pub command: Command,
    pub outcome: CommandOutcome,
}

/// Session command logger.
///
/// The engine itself never logs; the driving layer records each command and
/// its outcome here, at whatever cadence it wants.
pub struct CommandLog {
    start_time: Instant,
    commands: Vec<LoggedCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        CommandLog {
            start_time: Instant::now(),
            commands: Vec::new(),
        }
    }

    /// Log a command with the current timestamp
    pub fn log(&mut self, command: Command, outcome: CommandOutcome) {
        let elapsed = self.start_time.elapsed();
        let timestamp_ms = elapsed.as_millis() as u64;

        self.commands.push(LoggedCommand {
            timestamp_ms,
            command,
            outcome,
        });
    }

    pub fn log_accepted(&mut self, command: Command) {
        self.log(command, CommandOutcome::Accepted);
    }

    pub fn log_rejected(&mut self, command: Command) {
        self.log(command, CommandOutcome::Rejected);
    }

    /// Get all logged commands
    pub fn get_commands(&self) -> &Vec<LoggedCommand> {
        &self.commands
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.commands)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Command Log ({} events) ===", self.commands.len());
        for (i, logged) in self.commands.iter().enumerate() {
            let outcome_str = match logged.outcome {
                CommandOutcome::Accepted => "ACCEPT",
                CommandOutcome::Rejected => "REJECT",
            };
            println!(
                "[{:6}ms] #{:3} {} {:?}",
                logged.timestamp_ms,
                i + 1,
                outcome_str,
                logged.command
            );
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut starts = 0;
        let mut moves = 0;
        let mut rewinds = 0;
        let mut resets = 0;
        let mut rejected = 0;

        for logged in &self.commands {
            if matches!(logged.outcome, CommandOutcome::Rejected) {
                rejected += 1;
                continue;
            }
            match &logged.command {
                Command::StartAt { .. } => starts += 1,
                Command::MoveTo { .. } => moves += 1,
                Command::Rewind => rewinds += 1,
                Command::Reset => resets += 1,
            }
        }

        let duration = if let Some(last) = self.commands.last() {
            last.timestamp_ms
        } else {
            0
        };

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Accepted: {} starts, {} moves, {} rewinds, {} resets\n\
             Rejected: {}",
            duration,
            self.commands.len(),
            starts,
            moves,
            rewinds,
            resets,
            rejected
        )
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
