//! Repository adapters for persistence layer

use chrono::{DateTime, Local};
use truckchat_infra::persistence::{
    FileConversationRecordRepository, FileReferenceRepository, FileTranscriptRepository,
};
use truckchat_types::Result;

use crate::layout::DataLayout;

/// Open the CSV reference store for the layout's identity mode
pub fn open_reference_repo(layout: &DataLayout) -> FileReferenceRepository {
    FileReferenceRepository::new(layout.reference_file(), layout.mode())
}

/// Open the CSV result writer for the layout's identity mode
pub fn open_result_repo(layout: &DataLayout) -> FileConversationRecordRepository {
    FileConversationRecordRepository::new(layout.results_file(), layout.mode())
}

/// Open the transcript file for a session that started at `started`
pub fn open_transcript_repo(
    layout: &DataLayout,
    started: &DateTime<Local>,
) -> Result<FileTranscriptRepository> {
    FileTranscriptRepository::open(&layout.transcript_dir(), started)
}
