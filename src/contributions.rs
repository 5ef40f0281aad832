//! Compiled-in pull request records.
//!
//! These are rendered as the contribution cards on every run and double as
//! the fallback dataset when the live search API cannot be reached.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrStatus {
    Merged,
    Open,
    Closed,
}

impl PrStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PrStatus::Merged => "merged",
            PrStatus::Open => "open",
            PrStatus::Closed => "closed",
        }
    }
}

/// Optional per-PR diff and discussion numbers. Any field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrStats {
    pub additions: Option<u32>,
    pub deletions: Option<u32>,
    pub comments: Option<u32>,
    pub files: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionRecord {
    pub number: u32,
    pub title: &'static str,
    /// `<org>/<name>`
    pub repo: &'static str,
    /// Display name. Not guaranteed to agree with the org segment of `repo`.
    pub organization: &'static str,
    pub description: Option<&'static str>,
    pub status: PrStatus,
    /// `YYYY-MM`
    pub date: &'static str,
    pub labels: &'static [&'static str],
    pub stats: PrStats,
    pub link: &'static str,
}

const MAX_DISPLAY_LABELS: usize = 3;

impl ContributionRecord {
    /// First labels in insertion order, as many as a card has room for.
    pub fn display_labels(&self) -> &[&'static str] {
        let n = self.labels.len().min(MAX_DISPLAY_LABELS);
        &self.labels[..n]
    }

    pub fn is_merged(&self) -> bool {
        self.status == PrStatus::Merged
    }
}

const fn stats(additions: u32, deletions: u32, comments: u32, files: u32) -> PrStats {
    PrStats {
        additions: Some(additions),
        deletions: Some(deletions),
        comments: Some(comments),
        files: Some(files),
    }
}

pub static CONTRIBUTIONS: &[ContributionRecord] = &[
    ContributionRecord {
        number: 3237,
        title: "Pipeline Helm Charts",
        repo: "kubeflow/manifests",
        organization: "Kubeflow",
        description: None,
        status: PrStatus::Open,
        date: "2025-09",
        labels: &["feature", "helm", "deployment", "kubeflow-pipelines"],
        stats: stats(11902, 15, 7, 135),
        link: "https://github.com/kubeflow/manifests/pull/3237",
    },
    ContributionRecord {
        number: 3175,
        title: "Helm Charts Model Registry",
        repo: "kubeflow/manifests",
        organization: "Kubeflow",
        description: None,
        status: PrStatus::Merged,
        date: "2025-06",
        labels: &["feature", "helm", "deployment", "kubeflow-pipelines"],
        stats: stats(5456, 0, 8, 52),
        link: "https://github.com/kubeflow/manifests/pull/3175",
    },
    ContributionRecord {
        number: 3168,
        title: " Helm Charts Katib",
        repo: "kubeflow/manifests",
        organization: "Kubeflow",
        description: None,
        status: PrStatus::Open,
        date: "2025-07",
        labels: &["feature", "helm", "deployment", "kubeflow-pipelines"],
        stats: stats(5456, 0, 8, 52),
        link: "https://github.com/kubeflow/manifests/pull/3168",
    },
    ContributionRecord {
        number: 57330,
        title: "Add seccompProfile configuration",
        repo: "istio/istio",
        organization: "Istio",
        description: Some("Add seccompProfile configuration to global proxy values"),
        status: PrStatus::Merged,
        date: "2025-08",
        labels: &["enhancement", "istio", "security"],
        stats: stats(40, 0, 25, 3),
        link: "https://github.com/istio/istio/pull/57330",
    },
    ContributionRecord {
        number: 3070,
        title: "Add comprehensive Kubeflow integration test GitHub Actions workflow",
        repo: "kubeflow/manifests",
        organization: "Kubeflow",
        description: None,
        status: PrStatus::Merged,
        date: "2025-03",
        labels: &["feature", "ci/cd", "automation"],
        stats: stats(284, 0, 43, 1),
        link: "https://github.com/kubeflow/manifests/pull/3070",
    },
    ContributionRecord {
        number: 3077,
        title: "end-to-end integration tests",
        repo: "kubeflow/manifests",
        organization: "Kubeflow",
        description: None,
        status: PrStatus::Merged,
        date: "2025-03",
        labels: &["ci/cd", "testing", "automation"],
        stats: stats(353, 338, 117, 24),
        link: "https://github.com/kubeflow/manifests/pull/3077",
    },
    ContributionRecord {
        number: 3115,
        title: "Making the synchronize scripts consistent ",
        repo: "kubeflow/manifests",
        organization: "Kubeflow",
        description: None,
        status: PrStatus::Merged,
        date: "2025-07",
        labels: &["enhancement", "shell scripts", "manifests", "kubeflow"],
        stats: stats(552, 730, 15, 13),
        link: "https://github.com/kubeflow/manifests/pull/3115",
    },
    ContributionRecord {
        number: 3093,
        title: "improve the tests with real KF profile namespaces ",
        repo: "kubeflow/manifests",
        organization: "Kubeflow",
        description: None,
        status: PrStatus::Merged,
        date: "2025-03",
        labels: &["enhancement", "testing", "kubeflow", "ci/cd"],
        stats: stats(345, 97, 51, 11),
        link: "https://github.com/kubeflow/manifests/pull/3093",
    },
    ContributionRecord {
        number: 334,
        title: "Drag and Drop UI for binding Policy ",
        repo: "kubestellar/ui",
        organization: "Kubeflow",
        description: Some(
            "Enhance the Binding Policy UI by introducing a drag-and-drop interface that enables users to visually create Binding Policies instead of manually writing YAML files.",
        ),
        status: PrStatus::Merged,
        date: "2025-03",
        labels: &["enhancement", "ml", "operators"],
        stats: stats(8465, 184, 3, 34),
        link: "https://github.com/kubestellar/ui/pull/334",
    },
    ContributionRecord {
        number: 274,
        title: "Migrate from Context API to Zustand",
        repo: "kubestellar/ui",
        organization: "KubeStellar",
        description: None,
        status: PrStatus::Merged,
        date: "2025-03",
        labels: &["enhancement", "ui", "kubestellar", "zustand", "react-query"],
        stats: stats(181, 189, 11, 32),
        link: "https://github.com/kubestellar/ui/pull/274",
    },
    ContributionRecord {
        number: 754,
        title: "Added Bulk edit Mode",
        repo: "kubestellar/ui",
        organization: "KubeStellar",
        description: None,
        status: PrStatus::Merged,
        date: "2025-04",
        labels: &["feature", "ui", "kubestellar"],
        stats: stats(100, 0, 8, 1),
        link: "https://github.com/kubestellar/ui/pull/754",
    },
    ContributionRecord {
        number: 353,
        title: "Update backend API to support drag and drop",
        repo: "kubestellar/ui",
        organization: "KubeStellar",
        description: Some("Enhanced the backend API to support drag and drop functionality in the UI."),
        status: PrStatus::Merged,
        date: "2025-03",
        labels: &["enhancement", "backend", "golang", "api"],
        stats: stats(1051, 19, 0, 2),
        link: "https://github.com/kubestellar/ui/pull/353",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_labels_keep_order_and_stop_at_three() {
        let r = &CONTRIBUTIONS[9];
        assert_eq!(r.labels.len(), 5);
        assert_eq!(r.display_labels(), &["enhancement", "ui", "kubestellar"]);

        let r = &CONTRIBUTIONS[3];
        assert_eq!(r.display_labels(), r.labels);
    }

    #[test]
    fn numbers_unique_within_repo() {
        let keys: HashSet<(&str, u32)> = CONTRIBUTIONS.iter().map(|r| (r.repo, r.number)).collect();
        assert_eq!(keys.len(), CONTRIBUTIONS.len());
    }

    #[test]
    fn links_point_at_the_pull_request() {
        for r in CONTRIBUTIONS {
            assert_eq!(r.link, format!("https://github.com/{}/pull/{}", r.repo, r.number));
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(&CONTRIBUTIONS[0]).unwrap();
        assert_eq!(json["status"], "open");
        assert_eq!(json["stats"]["additions"], 11902);
        assert_eq!(PrStatus::Closed.as_str(), "closed");
    }
}
