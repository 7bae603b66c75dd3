//! Domain services

pub mod edit_distance;
pub mod fuzzy_matcher;
pub mod number_words;

pub use edit_distance::edit_distance;
pub use fuzzy_matcher::{find_model, resolve, MatchResult};
pub use number_words::{parse_number_words, parse_numeric_answer};
