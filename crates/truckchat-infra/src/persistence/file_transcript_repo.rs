//! Per-session transcript log
//!
//! One file per session, named from the session start time. Each line is
//! `<timestamp> <question> <answer>` and is flushed before `record` returns.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;
use truckchat_domain::repository::TranscriptRepository;
use truckchat_types::{Error, Result, TranscriptEntry};

const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// File name for a session that started at `started`
pub fn transcript_file_name(started: &DateTime<Local>) -> String {
    format!("{}_transcript.csv", started.format("%Y%m%d%H%M"))
}

pub struct FileTranscriptRepository {
    path: PathBuf,
    file: File,
}

impl FileTranscriptRepository {
    /// Open (or create) the transcript for a session under `dir`
    pub fn open(dir: &Path, started: &DateTime<Local>) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| Error::Transcript(e.to_string()))?;
        let path = dir.join(transcript_file_name(started));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::Transcript(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "transcript opened");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptRepository for FileTranscriptRepository {
    fn record(&mut self, entry: &TranscriptEntry) -> Result<()> {
        let line = format!(
            "{} {} {}\n",
            entry.at.format(LINE_TIMESTAMP_FORMAT),
            entry.question,
            entry.answer
        );
        self.file
            .write_all(line.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| Error::Transcript(format!("{}: {}", self.path.display(), e)))
    }
}
