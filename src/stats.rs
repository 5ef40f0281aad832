use crate::contributions::ContributionRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Headline numbers shown above the contribution cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    #[serde(rename = "totalPRs")]
    pub total_prs: u64,
    #[serde(rename = "mergedPRs")]
    pub merged_prs: u64,
    pub organizations: u64,
    #[serde(rename = "reposContributed")]
    pub repos_contributed: u64,
    #[serde(rename = "isLoading")]
    pub is_loading: bool,
}

impl AggregateStats {
    pub fn loading() -> Self {
        Self {
            total_prs: 0,
            merged_prs: 0,
            organizations: 0,
            repos_contributed: 0,
            is_loading: true,
        }
    }

    /// Settled stats computed purely from the bundled records.
    pub fn from_records(records: &[ContributionRecord]) -> Self {
        let repos: HashSet<&str> = records.iter().map(|r| r.repo).collect();
        let orgs: HashSet<&str> = records.iter().map(|r| r.organization).collect();

        Self {
            total_prs: records.len() as u64,
            merged_prs: records.iter().filter(|r| r.is_merged()).count() as u64,
            organizations: orgs.len() as u64,
            repos_contributed: repos.len() as u64,
            is_loading: false,
        }
    }

    /// Merged share in whole percent; 0 when there is nothing to divide by.
    pub fn merge_rate(&self) -> u64 {
        if self.total_prs == 0 {
            return 0;
        }
        (self.merged_prs.min(self.total_prs) * 100) / self.total_prs
    }
}
