use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

/// One file entry inside a raw gist payload.
#[derive(Debug, Clone, Deserialize)]
pub struct GistFile {
    pub language: Option<String>,
}

/// A gist as returned by `GET /gists`.
///
/// `files` keeps the key order of the JSON payload; the first entry is the
/// gist's primary file, which determines the gist's language downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGist {
    pub id: String,
    pub public: bool,
    pub files: IndexMap<String, GistFile>,
    pub created_at: DateTime<Utc>,
}
