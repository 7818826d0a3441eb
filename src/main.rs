use anyhow::{Context, Result};
use lectern::{Config, DirectoryStore, generate_site};
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber.
///
/// Defaults to `info`; `RUST_LOG` overrides the filter.
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let options = config
        .site_options()
        .context("Failed to determine site name")?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let store = DirectoryStore::new(&config.input);
    info!("Reading lectures from {}", store.root().display());

    let report = generate_site(&store, &options, &config.output)
        .context("Failed to generate lecture site")?;

    println!(
        "Generated {} lecture pages and {} subject pages in {}",
        report.lecture_pages,
        report.subject_pages,
        config.output.display()
    );

    if config.open
        && let Err(e) = open::that(&report.index_path)
    {
        warn!("Failed to open {}: {}", report.index_path.display(), e);
    }

    Ok(())
}
