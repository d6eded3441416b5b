//! Pure GitHub Gists REST API client.
//!
//! A minimal client for the gists endpoints of the GitHub REST API: listing
//! the authenticated user's gists page by page and deleting individual gists.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_client::{GistApi, GithubClient};
//!
//! let client = GithubClient::new("ghp_token".into());
//!
//! let page = client.list_page(1, 100).await?;
//! for gist in &page {
//!     println!("{}", gist.id);
//! }
//! client.delete_gist(&page[0].id).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GistApiError, Result};
pub use types::{GistFile, RawGist};

use async_trait::async_trait;
use reqwest::{header, Method};

const BASE_URL: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("gists-gone/", env!("CARGO_PKG_VERSION"));

/// The two gist operations the CLI needs.
///
/// Kept behind a trait so the fetch and deletion orchestrators can run
/// against fakes in tests.
#[async_trait]
pub trait GistApi {
    /// Fetch one page of the authenticated user's gists.
    async fn list_page(&self, page: u32, per_page: u32) -> Result<Vec<RawGist>>;

    /// Delete a single gist by id.
    async fn delete_gist(&self, id: &str) -> Result<()>;
}

pub struct GithubClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl GithubClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, ACCEPT_HEADER)
            .header(header::USER_AGENT, USER_AGENT)
            .header("X-GitHub-Api-Version", API_VERSION)
    }
}

#[async_trait]
impl GistApi for GithubClient {
    async fn list_page(&self, page: u32, per_page: u32) -> Result<Vec<RawGist>> {
        let url = format!("{}/gists", self.base_url);
        let resp = self
            .request(Method::GET, &url)
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GistApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let gists: Vec<RawGist> = resp.json().await?;
        tracing::debug!(page, count = gists.len(), "fetched gist page");
        Ok(gists)
    }

    async fn delete_gist(&self, id: &str) -> Result<()> {
        let url = format!("{}/gists/{}", self.base_url, id);
        let resp = self.request(Method::DELETE, &url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GistApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        tracing::debug!(id, "deleted gist");
        Ok(())
    }
}
