use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Renders open-source pull request stats and contribution cards as SVG.
#[derive(Debug, Parser)]
#[command(name = "oss-showcase", version)]
pub struct Config {
    /// GitHub account whose pull requests are counted
    #[arg(long, env = "OSS_SHOWCASE_ACCOUNT", default_value = "kunal-511")]
    pub account: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "OSS_SHOWCASE_API_BASE", default_value = "https://api.github.com")]
    pub api_base: String,

    /// Search results requested per page (GitHub caps this at 100)
    #[arg(long, env = "OSS_SHOWCASE_PER_PAGE", default_value_t = 100)]
    pub per_page: u8,

    /// Per-request timeout in seconds
    #[arg(long, env = "OSS_SHOWCASE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Directory the SVG files are written to
    #[arg(long, env = "OSS_SHOWCASE_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip the GitHub API and use the bundled records only
    #[arg(long, env = "OSS_SHOWCASE_OFFLINE")]
    pub offline: bool,

    /// Also print the final stats as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::try_parse_from(["oss-showcase"]).unwrap();
        assert_eq!(c.account, "kunal-511");
        assert_eq!(c.api_base, "https://api.github.com");
        assert_eq!(c.per_page, 100);
        assert_eq!(c.timeout(), Duration::from_secs(10));
        assert_eq!(c.out_dir, PathBuf::from("."));
        assert!(!c.offline);
        assert!(!c.json);
    }

    #[test]
    fn flags_override_defaults() {
        let c = Config::try_parse_from([
            "oss-showcase",
            "--account",
            "octo",
            "--timeout-secs",
            "0",
            "--out-dir",
            "out",
            "--offline",
            "--json",
        ])
        .unwrap();
        assert_eq!(c.account, "octo");
        assert_eq!(c.timeout(), Duration::from_secs(1));
        assert_eq!(c.out_dir, PathBuf::from("out"));
        assert!(c.offline);
        assert!(c.json);
    }

    #[test]
    fn rejects_out_of_range_per_page() {
        assert!(Config::try_parse_from(["oss-showcase", "--per-page", "300"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
