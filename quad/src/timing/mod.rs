use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::Result;

/// Frames in a default timing run.
pub const COLLECT_FRAMES: u64 = 1000;

pub const CSV_HEADER: [&str; 3] = ["timestamp", "count", "event_type"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    CpuTime,
}

/// One timing sample. `timestamp` is in 100 ns ticks since the recorder was
/// created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FrameRecord {
    pub timestamp: i64,
    pub count: i64,
    pub event_type: EventType,
}

pub struct Recorder {
    start: Instant,
    records: Vec<FrameRecord>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(frames: usize) -> Self {
        Self {
            start: Instant::now(),
            records: Vec::with_capacity(frames),
        }
    }

    /// Stamps frame `count` with the CPU time elapsed so far.
    pub fn record(&mut self, count: u64) -> FrameRecord {
        let ticks = self.start.elapsed().as_nanos() / 100;
        let record = FrameRecord {
            timestamp: i64::try_from(ticks).unwrap_or(i64::MAX),
            count: i64::try_from(count).unwrap_or(i64::MAX),
            event_type: EventType::CpuTime,
        };
        self.records.push(record);
        record
    }

    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    /// Header row followed by one row per record. The header is written even
    /// when nothing was recorded.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        if self.records.is_empty() {
            writer.write_record(CSV_HEADER)?;
        }
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.write_csv(File::create(path)?)?;
        debug!("quad::timing - wrote {} records to {}", self.records.len(), path.display());
        Ok(())
    }
}
