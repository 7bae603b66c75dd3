//! Per-session context threaded through the controller

use chrono::{DateTime, Local};
use tracing::debug;
use truckchat_types::{ConversationRecord, Error, Result, TranscriptEntry};

use crate::repository::{ConversationRecordRepository, TranscriptRepository};

/// Owns the session start time and the two append-only sinks.
///
/// Built once per process at session start.
pub struct SessionContext<'a> {
    started: DateTime<Local>,
    transcript: &'a mut dyn TranscriptRepository,
    results: &'a mut dyn ConversationRecordRepository,
    stored: bool,
}

impl<'a> SessionContext<'a> {
    pub fn new(
        started: DateTime<Local>,
        transcript: &'a mut dyn TranscriptRepository,
        results: &'a mut dyn ConversationRecordRepository,
    ) -> Self {
        Self {
            started,
            transcript,
            results,
            stored: false,
        }
    }

    pub fn started(&self) -> DateTime<Local> {
        self.started
    }

    /// Append one exchange to the transcript. Failures are fatal.
    pub fn record(&mut self, question: &str, answer: &str) -> Result<()> {
        self.transcript
            .record(&TranscriptEntry::now(question, answer))
    }

    /// Write the final record. A session stores at most one record.
    pub fn store(&mut self, record: &ConversationRecord) -> Result<()> {
        if self.stored {
            return Err(Error::ResultWrite(
                "a record was already stored for this session".to_string(),
            ));
        }
        self.results.store(record)?;
        self.stored = true;
        debug!(id = %record.id, occupation = %record.occupation, "session record stored");
        Ok(())
    }

    pub fn is_stored(&self) -> bool {
        self.stored
    }
}
