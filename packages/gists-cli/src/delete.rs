//! Confirmation and paced deletion of the selected gists.

use std::time::Duration;

use anyhow::{Context, Result};
use github_client::GistApi;

use crate::report::Reporter;

/// Wait before each delete call to stay under secondary rate limits.
const PACING: Duration = Duration::from_secs(1);

/// Exact responses that confirm deletion. Anything else aborts.
const AFFIRMATIVE: [&str; 3] = ["Yes", "Y", "y"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// No ids were supplied; nothing happened.
    Nothing,
    /// The user declined the confirmation prompt.
    Aborted,
    /// Every requested gist was deleted.
    Deleted(usize),
}

/// Delete `ids` one at a time, in order, after confirmation.
///
/// A failed delete call aborts the remaining sequence; gists already deleted
/// stay deleted.
pub async fn delete_gists<A, R>(
    api: &A,
    reporter: &R,
    force: bool,
    ids: &[String],
) -> Result<DeletionOutcome>
where
    A: GistApi,
    R: Reporter,
{
    if ids.is_empty() {
        reporter.message("No gists are eligible for deletion.");
        return Ok(DeletionOutcome::Nothing);
    }

    if !force {
        let answer = reporter.prompt(&format!(
            "Are you sure you want to proceed? {} gists will be deleted.",
            ids.len()
        ))?;
        if !AFFIRMATIVE.contains(&answer.as_str()) {
            tracing::info!("deletion aborted at the confirmation prompt");
            return Ok(DeletionOutcome::Aborted);
        }
    }

    let progress = reporter.progress(ids.len() as u64);
    for id in ids {
        tokio::time::sleep(PACING).await;
        api.delete_gist(id)
            .await
            .with_context(|| format!("failed to delete gist {id}"))?;
        progress.tick();
    }
    progress.finish("Gists have been deleted!");

    Ok(DeletionOutcome::Deleted(ids.len()))
}
