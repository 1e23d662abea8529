use crate::command_log::{Command, CommandOutcome, LoggedCommand};
use std::io::Result as IoResult;

/// Compact binary command log format for small replay files
///
/// Format design:
/// - Variable-length integers (varint) for timestamps
/// - Delta encoding for timestamps (store differences, not absolute values)
/// - Command type as single tag byte, outcome in the high bit
/// - ZigZag varint encoding for coordinates
pub struct CompactLogWriter {
    buffer: Vec<u8>,
    last_timestamp: u64,
}

impl CompactLogWriter {
    pub fn new() -> Self {
        CompactLogWriter {
            buffer: Vec::new(),
            last_timestamp: 0,
        }
    }

    /// Write a logged command to the compact buffer
    pub fn write_command(&mut self, logged: &LoggedCommand) -> IoResult<()> {
        // Timestamp delta, varint encoded
        let delta = logged.timestamp_ms.saturating_sub(self.last_timestamp);
        self.write_varint(delta);
        self.last_timestamp = logged.timestamp_ms;

        // Outcome as high bit of the tag byte (0 = Accepted, 1 = Rejected)
        let outcome_bit: u8 = match logged.outcome {
            CommandOutcome::Accepted => 0,
            CommandOutcome::Rejected => 0x80,
        };

        match &logged.command {
            Command::StartAt { x, y } => {
                self.buffer.push(1 | outcome_bit);
                self.write_i32(*x);
                self.write_i32(*y);
            }
            Command::MoveTo { x, y } => {
                self.buffer.push(2 | outcome_bit);
                self.write_i32(*x);
                self.write_i32(*y);
            }
            Command::Rewind => {
                self.buffer.push(3 | outcome_bit);
            }
            Command::Reset => {
                self.buffer.push(4 | outcome_bit);
            }
        }

        Ok(())
    }

    /// Write variable-length integer (smaller values use fewer bytes)
    fn write_varint(&mut self, mut value: u64) {
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80; // More bytes follow
            }
            self.buffer.push(byte);
            if value == 0 {
                break;
            }
        }
    }

    /// Write i32 in compact format (varint for small values)
    fn write_i32(&mut self, value: i32) {
        // ZigZag encoding: map signed to unsigned efficiently
        // 0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, 2 -> 4, etc.
        let encoded = ((value << 1) ^ (value >> 31)) as u64;
        self.write_varint(encoded);
    }

    /// Get the complete binary log
    pub fn get_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> IoResult<()> {
        std::fs::write(path, &self.buffer)?;
        Ok(())
    }
}

impl Default for CompactLogWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reader for the compact binary command log
pub struct CompactLogReader<'a> {
    data: &'a [u8],
    pos: usize,
    last_timestamp: u64,
}

impl<'a> CompactLogReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        CompactLogReader {
            data,
            pos: 0,
            last_timestamp: 0,
        }
    }

    /// Read the next command, or None at end of data / on truncation
    pub fn read_command(&mut self) -> Option<LoggedCommand> {
        if self.pos >= self.data.len() {
            return None;
        }

        let delta = self.read_varint()?;
        self.last_timestamp += delta;

        let tag_byte = self.read_u8()?;
        let outcome = if tag_byte & 0x80 != 0 {
            CommandOutcome::Rejected
        } else {
            CommandOutcome::Accepted
        };

        let command = match tag_byte & 0x7F {
            1 => Command::StartAt {
                x: self.read_i32()?,
                y: self.read_i32()?,
            },
            2 => Command::MoveTo {
                x: self.read_i32()?,
                y: self.read_i32()?,
            },
            3 => Command::Rewind,
            4 => Command::Reset,
            _ => return None, // unknown tag, stop decoding
        };

        Some(LoggedCommand {
            timestamp_ms: self.last_timestamp,
            command,
            outcome,
        })
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.pos >= self.data.len() {
            return None;
        }
        let val = self.data[self.pos];
        self.pos += 1;
        Some(val)
    }

    fn read_varint(&mut self) -> Option<u64> {
        let mut result = 0u64;
        let mut shift = 0;

        loop {
            let byte = self.read_u8()?;
            result |= ((byte & 0x7F) as u64) << shift;
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
        }

        Some(result)
    }

    fn read_i32(&mut self) -> Option<i32> {
        let encoded = self.read_varint()?;
        // ZigZag decode
        let decoded = ((encoded >> 1) as i32) ^ (-((encoded & 1) as i32));
        Some(decoded)
    }
}
