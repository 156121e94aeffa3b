//! Yiield batch scorer
//!
//! Scores an aggregator pool export and prints ranked listings as JSON.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yiield_cli::{parse_pools, ScorerConfig};
use yiield_directory::ProtocolDirectory;
use yiield_scoring::{ListingFilter, ListingScorer};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Yiield scorer v{}", yiield_common::VERSION);

    let config = ScorerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let directory = match &config.directory_path {
        Some(path) => ProtocolDirectory::load(path)
            .with_context(|| format!("loading directory {}", path.display()))?,
        None => ProtocolDirectory::curated().context("loading bundled directory")?,
    };
    info!(
        "Directory: {} protocols, {} aliases, version {}",
        directory.len(),
        directory.alias_count(),
        directory.version().unwrap_or("unversioned")
    );

    let pools_path = config
        .pools_path
        .as_ref()
        .context("YIIELD_POOLS_PATH is not set")?;
    let content = std::fs::read_to_string(pools_path)
        .with_context(|| format!("reading pools {}", pools_path.display()))?;
    let records = parse_pools(&content)?;
    info!("Read {} pool records from {}", records.len(), pools_path.display());

    let as_of = config.as_of_or_today();
    let scorer = ListingScorer::new(&directory, as_of);
    let filter = ListingFilter::from(&config.filter);

    let listings = filter.apply(scorer.score_all(&records));
    let unresolved = listings.iter().filter(|l| l.dossier_slug.is_none()).count();
    if unresolved > 0 {
        info!("{} listed pools have no dossier and use base score only", unresolved);
    }
    info!("Scored {} listings as of {}", listings.len(), as_of);

    let json = if config.output.pretty {
        serde_json::to_string_pretty(&listings)?
    } else {
        serde_json::to_string(&listings)?
    };
    println!("{}", json);

    Ok(())
}
