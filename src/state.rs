//! Last-post marker.
//!
//! A single JSON object on disk holding the date of the last
//! successful post. The bot runs from cron more often than it should
//! post; this file is what makes repeat runs within a day a no-op.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub last_post: NaiveDate,
}

/// `None` when the file does not exist yet, i.e. nothing was ever
/// posted. A file that exists but cannot be read or decoded is an
/// error, not a fresh start.
pub fn load(path: &Path) -> Result<Option<State>, Error> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

pub fn save(path: &Path, state: &State) -> Result<(), Error> {
    fs::write(path, serde_json::to_string(state)?)?;
    Ok(())
}
