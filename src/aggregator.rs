//! Live PR statistics with a silent fallback to the bundled records.
//!
//! The primary count query decides everything: if it fails, all four numbers
//! come from the bundled records. Once it succeeds, the merged count and the
//! repo/org breakdown are best-effort. An HTTP error status on either of those
//! zero-fills the affected numbers. A transport or decode failure on any query
//! abandons the live path and settles on the fallback.

use crate::contributions::ContributionRecord;
use crate::github::{GithubClient, SearchError};
use crate::stats::AggregateStats;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

const LOG_TARGET: &str = "aggregator";

static ORG_IN_REPO_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"repos/([^/]+)/").expect("static regex is valid"));

/// Org segment following `repos/` in a search item's `repository_url`.
pub fn organization_from_repository_url(url: &str) -> Option<&str> {
    ORG_IN_REPO_URL
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Owns the stats for one run. They start out loading and settle exactly once.
pub struct StatsAggregator {
    client: Option<GithubClient>,
    account: String,
    fallback: &'static [ContributionRecord],
    stats: AggregateStats,
}

impl StatsAggregator {
    pub fn new(client: GithubClient, account: &str, fallback: &'static [ContributionRecord]) -> Self {
        Self {
            client: Some(client),
            account: account.to_string(),
            fallback,
            stats: AggregateStats::loading(),
        }
    }

    /// No network at all; `run` settles straight onto the fallback.
    pub fn offline(account: &str, fallback: &'static [ContributionRecord]) -> Self {
        Self {
            client: None,
            account: account.to_string(),
            fallback,
            stats: AggregateStats::loading(),
        }
    }

    pub fn stats(&self) -> AggregateStats {
        self.stats
    }

    /// Computes the stats on the first call. Later calls return the settled
    /// value without touching the network.
    pub async fn run(&mut self) -> AggregateStats {
        if !self.stats.is_loading {
            return self.stats;
        }

        let settled = match &self.client {
            Some(client) => compute_stats(client, &self.account, self.fallback).await,
            None => {
                log::info!(target: LOG_TARGET, "offline mode, using {} bundled records", self.fallback.len());
                AggregateStats::from_records(self.fallback)
            }
        };

        self.stats = settled;
        self.stats
    }
}

/// One pass of live aggregation for `account`, falling back to `fallback`.
///
/// Queries run one after another. Never fails; the worst case is the fallback.
pub async fn compute_stats(
    client: &GithubClient,
    account: &str,
    fallback: &[ContributionRecord],
) -> AggregateStats {
    match live_stats(client, account).await {
        Ok(stats) => {
            log::info!(
                target: LOG_TARGET,
                "live stats for {account}: {} PRs, {} merged, {} repos, {} orgs",
                stats.total_prs,
                stats.merged_prs,
                stats.repos_contributed,
                stats.organizations
            );
            stats
        }
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Failed to fetch GitHub stats, using bundled records: {e}");
            AggregateStats::from_records(fallback)
        }
    }
}

async fn live_stats(client: &GithubClient, account: &str) -> Result<AggregateStats, SearchError> {
    let total_prs = client.pull_request_count(account, false).await?;

    let merged_prs = match client.pull_request_count(account, true).await {
        Ok(n) => n,
        Err(e) if e.is_status() => {
            log::warn!(target: LOG_TARGET, "merged count unavailable, reporting 0: {e}");
            0
        }
        Err(e) => return Err(e),
    };

    let (repos_contributed, organizations) = match client.pull_requests(account).await {
        Ok(page) => {
            log::debug!(
                target: LOG_TARGET,
                "listing returned {} of {} PRs (first page only)",
                page.items.len(),
                page.total_count
            );
            let repos: HashSet<&str> = page.items.iter().map(|i| i.repository_url.as_str()).collect();
            let orgs: HashSet<&str> = page
                .items
                .iter()
                .filter_map(|i| organization_from_repository_url(&i.repository_url))
                .collect();
            (repos.len() as u64, orgs.len() as u64)
        }
        Err(e) if e.is_status() => {
            log::warn!(target: LOG_TARGET, "PR listing unavailable, reporting 0 repos and orgs: {e}");
            (0, 0)
        }
        Err(e) => return Err(e),
    };

    Ok(AggregateStats {
        total_prs,
        merged_prs,
        organizations,
        repos_contributed,
        is_loading: false,
    })
}
