mod aggregator;
mod config;
mod contributions;
mod date;
mod github;
mod stats;
mod svg;

use aggregator::StatsAggregator;
use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use config::Config;
use contributions::CONTRIBUTIONS;
use github::GithubClient;
use std::fs;

const LOG_TARGET: &str = "main";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    let mut aggregator = if config.offline {
        StatsAggregator::offline(&config.account, CONTRIBUTIONS)
    } else {
        let client = GithubClient::new(&config.api_base, config.per_page, config.timeout())?;
        StatsAggregator::new(client, &config.account, CONTRIBUTIONS)
    };

    // Dropping the aggregation future cancels whatever request is in flight.
    tokio::select! {
        _ = aggregator.run() => {}
        _ = tokio::signal::ctrl_c() => {
            log::warn!(target: LOG_TARGET, "Interrupted before stats settled, nothing written");
            return Ok(());
        }
    }
    let stats = aggregator.stats();

    if config.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    // Generate SVG
    let today = Utc::now().date_naive();
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("Failed to create {}", config.out_dir.display()))?;

    for theme in [svg::Theme::Dark, svg::Theme::Light] {
        let path = config.out_dir.join(theme.file_name());
        let doc = svg::generate_svg(&stats, CONTRIBUTIONS, theme, today);
        fs::write(&path, doc).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!(target: LOG_TARGET, "wrote {}", path.display());
    }

    Ok(())
}
