//! Application use cases

mod session_service;

pub use session_service::{init_data_dir, load_references, run_session, SessionReport};
