//! Parsing of numeric answers written as digits or English words

use truckchat_types::{Error, Result};

const SMALL: [(&str, u64); 20] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: [(&str, u64); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: [(&str, u64); 3] = [
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
];

fn lookup(table: &[(&str, u64)], token: &str) -> Option<u64> {
    table.iter().find(|(word, _)| *word == token).map(|(_, v)| *v)
}

/// Interpret an answer to a numeric question.
///
/// Digit-only answers are parsed directly, anything else goes through
/// [`parse_number_words`].
pub fn parse_numeric_answer(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed
            .parse()
            .map_err(|_| Error::InvalidNumber(trimmed.to_string()));
    }
    parse_number_words(trimmed)
}

/// Split a phrase into lowercase word tokens.
///
/// Hyphens join words ("forty-two") and a comma may trail a word
/// ("two thousand, five"). Anything else fails: a leading or doubled
/// hyphen, or a comma inside a token such as "18,000".
fn tokenize(text: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();
    for chunk in text.to_lowercase().split_whitespace() {
        let chunk = match chunk.strip_suffix(',') {
            Some(word) if word.chars().all(|c| c.is_ascii_alphabetic()) => word.to_string(),
            _ => chunk.to_string(),
        };
        for part in chunk.split('-') {
            if part.is_empty() || part.contains(',') {
                return None;
            }
            if part != "and" {
                tokens.push(part.to_string());
            }
        }
    }
    Some(tokens)
}

fn is_multiplier(token: &str) -> bool {
    token == "hundred" || lookup(&SCALES, token).is_some()
}

/// Convert an English number phrase ("two thousand and five",
/// "forty-two") to an integer.
///
/// A digit group is only accepted as the count in front of "hundred" or a
/// scale word ("5 hundred", "18 thousand").
pub fn parse_number_words(text: &str) -> Result<u64> {
    let invalid = || Error::InvalidNumber(text.to_string());

    let tokens = tokenize(text).ok_or_else(invalid)?;
    if tokens.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    let mut current: u64 = 0;

    for (i, token) in tokens.iter().map(String::as_str).enumerate() {
        if let Some(value) = lookup(&SMALL, token).or_else(|| lookup(&TENS, token)) {
            current = current.checked_add(value).ok_or_else(invalid)?;
        } else if token == "hundred" {
            current = current.max(1).checked_mul(100).ok_or_else(invalid)?;
        } else if let Some(scale) = lookup(&SCALES, token) {
            let group = current.max(1).checked_mul(scale).ok_or_else(invalid)?;
            total = total.checked_add(group).ok_or_else(invalid)?;
            current = 0;
        } else if token.chars().all(|c| c.is_ascii_digit())
            && current == 0
            && tokens.get(i + 1).is_some_and(|next| is_multiplier(next))
        {
            current = token.parse().map_err(|_| invalid())?;
        } else {
            return Err(invalid());
        }
    }

    total.checked_add(current).ok_or_else(invalid)
}
