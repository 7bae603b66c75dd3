//! Session use cases: run a conversation, prepare the data directory,
//! inspect the reference table

use std::path::PathBuf;

use chrono::Local;
use tracing::info;
use truckchat_domain::conversation::{
    ControllerOptions, ConversationController, Prompter, SessionContext, SessionOutcome,
};
use truckchat_domain::model::ReferenceTable;
use truckchat_domain::repository::ReferenceRepository;
use truckchat_types::Result;

use crate::layout::DataLayout;
use crate::repository::{open_reference_repo, open_result_repo, open_transcript_repo};

/// What a finished session produced
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub transcript_path: PathBuf,
}

/// Run one conversation against the files under `layout`
pub fn run_session<P: Prompter>(
    prompter: P,
    layout: &DataLayout,
    options: ControllerOptions,
) -> Result<SessionReport> {
    let started = Local::now();
    let mut transcript = open_transcript_repo(layout, &started)?;
    let transcript_path = transcript.path().to_path_buf();
    let mut results = open_result_repo(layout);
    let references = open_reference_repo(layout);

    info!(
        mode = %options.identity_mode,
        consent_gate = options.with_consent_gate,
        data_dir = %layout.root().display(),
        "session started"
    );

    let mut session = SessionContext::new(started, &mut transcript, &mut results);
    let mut controller = ConversationController::new(prompter, references, options);
    let outcome = controller.run(&mut session)?;

    Ok(SessionReport {
        outcome,
        transcript_path,
    })
}

/// Create the data directories and an empty reference file.
/// Returns `true` when the reference file was created.
pub fn init_data_dir(layout: &DataLayout) -> Result<bool> {
    std::fs::create_dir_all(layout.transcript_dir())?;
    if let Some(parent) = layout.results_file().parent() {
        std::fs::create_dir_all(parent)?;
    }
    let references = open_reference_repo(layout);
    let created = references.init()?;
    info!(path = %references.csv_path().display(), created, "data directory ready");
    Ok(created)
}

pub fn load_references(layout: &DataLayout) -> Result<ReferenceTable> {
    open_reference_repo(layout).load()
}
