use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "github";
const ACCEPT_V3_JSON: &str = "application/vnd.github.v3+json";
const AGENT: &str = "oss-showcase";

/// GitHub's search endpoints never return more than this per page.
pub const MAX_PER_PAGE: u8 = 100;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("network error querying GitHub search: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("GitHub search returned HTTP {}", .0.as_u16())]
    Status(StatusCode),

    #[error("failed to parse GitHub search response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SearchError {
    /// The service answered, just not with a success status.
    pub fn is_status(&self) -> bool {
        matches!(self, SearchError::Status(_))
    }
}

#[derive(Debug, Deserialize)]
struct CountOnly {
    total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    /// e.g. `https://api.github.com/repos/kubeflow/manifests`
    pub repository_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub total_count: u64,
    pub items: Vec<SearchItem>,
}

#[derive(Clone)]
pub struct GithubClient {
    base: Arc<String>,
    per_page: u8,
    http: Arc<Client>,
}

impl GithubClient {
    /// Anonymous client against `base` (normally `https://api.github.com`).
    ///
    /// `timeout` bounds every request so a stalled connection still settles.
    pub fn new(base: &str, per_page: u8, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            base: Arc::new(base.trim_end_matches('/').to_string()),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            http: Arc::new(http),
        })
    }

    fn pr_query(account: &str, merged_only: bool) -> String {
        if merged_only {
            format!("author:{account} type:pr is:merged")
        } else {
            format!("author:{account} type:pr")
        }
    }

    /// Single GET against the issue search endpoint. No retries.
    async fn search<T: serde::de::DeserializeOwned>(&self, q: &str) -> Result<T, SearchError> {
        let url = format!("{}/search/issues", self.base);
        let per_page = self.per_page.to_string();
        let start = Instant::now();

        let resp = self
            .http
            .get(&url)
            .query(&[("q", q), ("per_page", per_page.as_str())])
            .header(ACCEPT, ACCEPT_V3_JSON)
            .header(USER_AGENT, AGENT)
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = resp.status();
        log::debug!(
            target: LOG_TARGET,
            "search '{q}' answered HTTP {} in {:.3}s",
            status.as_u16(),
            start.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        resp.json::<T>().await.map_err(SearchError::Decode)
    }

    /// Total number of PRs authored by `account`, optionally only merged ones.
    pub async fn pull_request_count(&self, account: &str, merged_only: bool) -> Result<u64, SearchError> {
        let parsed: CountOnly = self.search(&Self::pr_query(account, merged_only)).await?;
        Ok(parsed.total_count)
    }

    /// First page of PRs authored by `account`. Later pages are never fetched.
    pub async fn pull_requests(&self, account: &str) -> Result<SearchPage, SearchError> {
        self.search(&Self::pr_query(account, false)).await
    }
}
