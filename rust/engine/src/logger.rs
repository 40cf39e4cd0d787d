use serde::{Deserialize, Serialize};

use crate::game::Move;

/// Complete record of a finished match: the seed and log it can be
/// re-derived from, plus a result summary. Serialized one-per-line to
/// JSONL for match history storage and replay auditing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// Match seed; together with `moves` this reproduces the whole game
    pub seed: u64,
    /// The full placement log, in order
    pub moves: Vec<Move>,
    /// Result summary (e.g. "player 1 wins 3-2")
    pub result: Option<String>,
    /// Timestamp when the match was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered JSONL writer for match records.
pub struct MatchLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_match_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
