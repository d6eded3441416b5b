//! The normalized gist record and the raw-payload normalizer.

use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;
use github_client::RawGist;
use thiserror::Error;

/// Sentinel for gists whose primary file has no language label.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Visibility {
    Public,
    Secret,
}

impl Visibility {
    fn from_public_flag(public: bool) -> Self {
        if public {
            Visibility::Public
        } else {
            Visibility::Secret
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Secret => write!(f, "secret"),
        }
    }
}

/// A gist reduced to the fields the filter pipeline cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gist {
    pub id: String,
    pub visibility: Visibility,
    pub language: String,
    pub created: NaiveDate,
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed gist {id}: payload contains no files")]
    NoFiles { id: String },
}

impl Gist {
    fn from_raw(raw: RawGist) -> Result<Self, NormalizeError> {
        // The language comes from the first file in payload order.
        let language = match raw.files.into_iter().next() {
            Some((_, file)) => file
                .language
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            None => return Err(NormalizeError::NoFiles { id: raw.id }),
        };

        Ok(Gist {
            id: raw.id,
            visibility: Visibility::from_public_flag(raw.public),
            language,
            created: raw.created_at.date_naive(),
        })
    }
}

/// Turn raw API records into [`Gist`]s, one per entry, preserving order.
pub fn normalize(raw: Vec<RawGist>) -> Result<Vec<Gist>, NormalizeError> {
    raw.into_iter().map(Gist::from_raw).collect()
}
