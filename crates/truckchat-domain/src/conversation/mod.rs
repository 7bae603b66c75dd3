//! Conversation flow for one session

pub mod controller;
pub mod prompter;
pub mod session;

pub use controller::{ControllerOptions, ConversationController, SessionOutcome};
pub use prompter::{MenuOption, Prompter, Tone};
pub use session::SessionContext;
