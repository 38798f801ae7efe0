//! Simple log file writer with timestamps

use crate::{Error, Result};
use chrono::{Local, Utc};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Buffered log file with elapsed-seconds prefixes
///
/// Each line is prefixed with the seconds elapsed since the log was opened
/// and the delta to the previous line. Optionally echoes to the console.
pub struct LogFile {
    writer: BufWriter<File>,
    start: Instant,
    last_seconds: f32,
    echo_to_console: bool,
}

impl LogFile {
    /// Create a log file at the given path, truncating any existing file
    pub fn new<P: AsRef<Path>>(path: P, echo_to_console: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))?;

        let mut log = Self {
            writer: BufWriter::new(file),
            start: Instant::now(),
            last_seconds: 0.0,
            echo_to_console,
        };

        log.log(format!("Opened {}", path.display()))?;
        log.log_time()?;
        log.log(format!(
            "Command Line: {}",
            env::args().collect::<Vec<_>>().join(" ")
        ))?;
        log.log("----------------------------------------")?;

        Ok(log)
    }

    /// Log a message; multi-line messages are prefixed per line
    pub fn log(&mut self, message: impl AsRef<str>) -> Result<()> {
        let seconds = self.start.elapsed().as_secs_f32();
        let diff = seconds - self.last_seconds;
        let prefix = format!("{:7.0}s {:6.1}+ ", seconds, diff);

        for line in message.as_ref().split('\n') {
            if self.echo_to_console {
                println!("{}{}", prefix, line);
            }
            self.writer.write_all(prefix.as_bytes())?;
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        self.last_seconds = seconds;

        Ok(())
    }

    /// Log the current UTC and local time
    pub fn log_time(&mut self) -> Result<()> {
        let utc = Utc::now();
        let local = Local::now();
        self.log(format!(
            "Current time (UTC): {}",
            utc.format("%Y-%m-%d %H:%M:%S (UTC)")
        ))?;
        self.log(format!(
            "Current local time: {}",
            local.format("%Y-%m-%d %H:%M:%S (%z)")
        ))?;
        Ok(())
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        let _ = self.log("----------------------------------------");
        let _ = self.log("Closing log file.");
    }
}
