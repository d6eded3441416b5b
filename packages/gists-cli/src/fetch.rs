//! Paginated retrieval of the full gist collection.

use std::time::Duration;

use anyhow::{Context, Result};
use github_client::GistApi;

use crate::gist::{normalize, Gist};

/// Records requested per page.
pub const PAGE_SIZE: u32 = 100;
/// A page with fewer records than this is treated as the last one.
const SHORT_PAGE: usize = 30;
/// Hard cap on pages, in case the API keeps returning full pages.
const MAX_PAGES: u32 = 30;
/// Wait between page requests to stay under secondary rate limits.
const PACING: Duration = Duration::from_secs(1);

/// Fetch and normalize every gist, page by page.
///
/// Stops at the first short page or after [`MAX_PAGES`], whichever comes
/// first. Any API error aborts the whole fetch.
pub async fn fetch_all<A: GistApi>(api: &A) -> Result<Vec<Gist>> {
    let mut gists = Vec::new();

    for page in 1..=MAX_PAGES {
        if page > 1 {
            tokio::time::sleep(PACING).await;
        }

        let raw = api
            .list_page(page, PAGE_SIZE)
            .await
            .with_context(|| format!("failed to fetch gists page {page}"))?;
        let batch = normalize(raw)?;
        let fetched = batch.len();
        tracing::debug!(page, fetched, "normalized gist page");
        gists.extend(batch);

        if fetched < SHORT_PAGE {
            break; // No gists on further pages.
        }
    }

    Ok(gists)
}
