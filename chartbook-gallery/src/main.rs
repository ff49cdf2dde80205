//! Chartbook gallery
//!
//! Shows every supported chart type with a small fixed dataset, one page
//! per chart, in a fixed order.

mod charts;
mod config;
mod error;
mod runner;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chartbook=info,chartbook_gallery=info".into()),
        )
        .init();

    // Parse CLI args
    let config = Config::parse();

    if config.list {
        for entry in charts::CHARTS {
            println!("{}", entry.name);
        }
        return Ok(());
    }

    let entries = config.selected()?;
    let opts = config.show_options();
    info!(
        charts = entries.len(),
        out_dir = %opts.out_dir.display(),
        "starting gallery"
    );

    if config.dashboard {
        let path = runner::run_dashboard(&entries, &opts)?;
        info!(path = %path.display(), "gallery written");
    } else {
        let paths = runner::run_charts(&entries, &opts)?;
        info!(pages = paths.len(), "gallery finished");
    }

    Ok(())
}
