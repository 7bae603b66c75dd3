//! Repository trait definitions for session persistence

use truckchat_types::{ConversationRecord, Result, TranscriptEntry};

use crate::model::{ReferenceEntry, ReferenceTable};

/// Reference store of known trucks
pub trait ReferenceRepository {
    /// Load the full table. Fails with `StorageUnavailable` when the backing
    /// file is missing or unreadable.
    fn load(&self) -> Result<ReferenceTable>;

    /// Append one entry without touching existing rows
    fn append(&mut self, entry: &ReferenceEntry) -> Result<()>;
}

/// Append-only transcript sink
pub trait TranscriptRepository {
    fn record(&mut self, entry: &TranscriptEntry) -> Result<()>;
}

/// Append-only sink for finalized session records
pub trait ConversationRecordRepository {
    fn store(&mut self, record: &ConversationRecord) -> Result<()>;
}

impl<T: ReferenceRepository + ?Sized> ReferenceRepository for &mut T {
    fn load(&self) -> Result<ReferenceTable> {
        (**self).load()
    }

    fn append(&mut self, entry: &ReferenceEntry) -> Result<()> {
        (**self).append(entry)
    }
}
