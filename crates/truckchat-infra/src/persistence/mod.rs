//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_conversation_record_repo;
mod file_reference_repo;
mod file_transcript_repo;

pub use file_conversation_record_repo::{
    result_header, FileConversationRecordRepository, NULL_MARKER,
};
pub use file_reference_repo::{reference_header, FileReferenceRepository};
pub use file_transcript_repo::{transcript_file_name, FileTranscriptRepository};
