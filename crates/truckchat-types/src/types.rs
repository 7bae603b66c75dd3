//! Session records and shared enums

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Occupation category chosen at the start of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    Owner,
    Manager,
    Other,
}

impl Occupation {
    /// Value stored in transcripts and result files
    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Owner => "owner",
            Occupation::Manager => "manager",
            Occupation::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "owner" => Some(Occupation::Owner),
            "manager" => Some(Occupation::Manager),
            "other" => Some(Occupation::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Occupation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a truck is identified: a single name, or a manufacturer/model pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    #[default]
    Single,
    ManufacturerModel,
}

impl std::fmt::Display for IdentityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityMode::Single => write!(f, "single"),
            IdentityMode::ManufacturerModel => write!(f, "manufacturer_model"),
        }
    }
}

/// Resolved identity of the user's truck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleIdentity {
    Single { name: String },
    ManufacturerModel { manufacturer: String, model: String },
}

/// Numeric answers about the truck. `None` means the question was never reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecValues {
    pub fleet_number: Option<u64>,
    pub year: Option<u64>,
    pub cylinders: Option<u64>,
    pub horsepower: Option<u64>,
    pub weight: Option<u64>,
}

/// Structured outcome of one session, written once by the result writer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: String,
    pub started: DateTime<Local>,
    pub finished: DateTime<Local>,
    pub occupation: Occupation,
    pub identity: Option<VehicleIdentity>,
    pub specs: SpecValues,
}

impl ConversationRecord {
    /// Record for a session that ended at the occupation gate
    pub fn early_exit(started: DateTime<Local>, occupation: Occupation) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started,
            finished: Local::now(),
            occupation,
            identity: None,
            specs: SpecValues::default(),
        }
    }

    /// Record for a session that went through every question
    pub fn completed(
        started: DateTime<Local>,
        occupation: Occupation,
        identity: VehicleIdentity,
        specs: SpecValues,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started,
            finished: Local::now(),
            occupation,
            identity: Some(identity),
            specs,
        }
    }
}

/// One question/answer exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub question: String,
    pub answer: String,
    pub at: DateTime<Local>,
}

impl TranscriptEntry {
    pub fn now(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            at: Local::now(),
        }
    }
}
