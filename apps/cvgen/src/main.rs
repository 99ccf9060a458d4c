mod artifacts;
mod config;
mod errors;
mod generation;
mod models;
mod render;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::artifacts::organize;
use crate::config::Config;
use crate::generation::{generate, GenerateOptions};
use crate::models::Record;

fn main() -> Result<()> {
    // Load configuration first; invalid values abort before anything is written
    let config = Config::from_env().context("Invalid configuration")?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvgen v{}", env!("CARGO_PKG_VERSION"));

    let record = match &config.record_path {
        Some(path) => {
            info!("Loading record from {}", path.display());
            Record::from_file(path)
                .with_context(|| format!("Cannot build a CV record from {}", path.display()))?
        }
        None => {
            info!("No CVGEN_RECORD set, using the built-in record");
            Record::builtin()
        }
    };
    info!("🚀 Generating CV for {} - {}", record.header.name, record.header.title);

    let options = GenerateOptions {
        output_root: config.output_root.clone(),
        base_name: config
            .base_name
            .clone()
            .unwrap_or_else(|| format!("cv_{}", record.slug())),
    };

    let now = chrono::Local::now().naive_local();
    let report = generate(&record, &options, now).context("Generation aborted")?;
    info!(
        "📊 {} of {} formats written to {}",
        report.created.len(),
        report.created.len() + report.failures.len(),
        report.run_dir.display()
    );
    for failure in &report.failures {
        warn!("❌ {} failed: {}", failure.format, failure.reason);
    }

    if config.organize {
        info!(
            "🗂  Organizing '{}*' files into {}",
            config.prefix,
            config.organize_dest.display()
        );
        let organized = organize(
            &config.organize_sources,
            &config.organize_dest,
            &config.prefix,
            chrono::Local::now().naive_local(),
        );
        info!(
            "📊 Organizer: {} found, {} organized, {} failed",
            organized.files_found,
            organized.files_moved,
            organized.failures.len()
        );
    }

    Ok(())
}
