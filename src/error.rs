use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can go wrong below `main`. `NotFound` is the one
/// variant callers match on: a missing "yesterday" is an expected
/// condition with its own exit path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no vaccination data for {0}")]
    NotFound(NaiveDate),

    #[error("malformed dataset: {0}")]
    Parse(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("state file: {0}")]
    Io(#[from] std::io::Error),

    #[error("state file: {0}")]
    Json(#[from] serde_json::Error),
}
