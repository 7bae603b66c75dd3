//! Domain model types

pub mod reference;

pub use reference::{ReferenceEntry, ReferenceTable, UNKNOWN};
