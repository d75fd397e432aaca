use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod lenient;
pub mod record;

pub use record::UserRecord;

use crate::model::profile::ScoringProfile;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_records(path: &Path) -> Result<Vec<UserRecord>, InputError> {
    let text = std::fs::read_to_string(path)?;
    let records = parse_records(&text)?;
    debug!(path = %path.display(), records = records.len(), "loaded leaderboard records");
    Ok(records)
}

/// Accepts a JSON array of records or an object holding them under `users`.
/// Rows that are not objects are skipped with a warning.
pub fn parse_records(text: &str) -> Result<Vec<UserRecord>, InputError> {
    let root: Value = serde_json::from_str(text)?;
    let rows = match root {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("users") {
            Some(Value::Array(rows)) => rows,
            _ => {
                return Err(InputError::InvalidInput(
                    "expected an array of records or an object with a `users` array".to_string(),
                ));
            }
        },
        _ => {
            return Err(InputError::InvalidInput(
                "expected an array of records".to_string(),
            ));
        }
    };

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<UserRecord>(row) {
            Ok(record) => records.push(record),
            Err(err) => warn!(row = idx, error = %err, "skipping unreadable record"),
        }
    }
    Ok(records)
}

pub fn load_profile(path: &Path) -> Result<ScoringProfile, InputError> {
    let text = std::fs::read_to_string(path)?;
    parse_profile(&text)
}

pub fn parse_profile(text: &str) -> Result<ScoringProfile, InputError> {
    let profile: ScoringProfile = serde_json::from_str(text)?;
    profile.validate().map_err(InputError::InvalidInput)?;
    Ok(profile)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
