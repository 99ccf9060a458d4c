//! CV Generation — renders one record into every format and files the
//! artifacts into a fresh run directory.
//!
//! Flow: clean_links → create CV_<stamp>/ → render each format →
//!       write flat + dated copies → GENERATION_SUMMARY.txt → log tree.
//!
//! A record missing a required field, or a run directory that cannot be
//! created, aborts before anything is written. A failing renderer or
//! write is recorded and the remaining formats still run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, warn};

use crate::artifacts::layout::RunStamp;
use crate::artifacts::tree::render_tree;
use crate::errors::AppError;
use crate::models::links::{clean_links, LinkFix};
use crate::models::Record;
use crate::render::{default_renderers, Format, RenderContext, Renderer};

pub const SUMMARY_FILE: &str = "GENERATION_SUMMARY.txt";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Parent of the `CV_<stamp>/` run directory.
    pub output_root: PathBuf,
    /// File name stem shared by every artifact, e.g. `cv_alex_morgan`.
    pub base_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    pub format: &'static str,
    pub path: PathBuf,
    pub dated_path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactFailure {
    pub format: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_dir: PathBuf,
    pub created: Vec<Artifact>,
    pub failures: Vec<ArtifactFailure>,
    pub link_fixes: Vec<LinkFix>,
    /// `None` when the summary itself could not be written.
    pub summary_path: Option<PathBuf>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs every registered renderer. See [`generate_with`].
pub fn generate(
    record: &Record,
    options: &GenerateOptions,
    now: NaiveDateTime,
) -> Result<GenerationReport, AppError> {
    generate_with(record, &default_renderers(), options, now)
}

/// Renders `record` with each of `renderers` into
/// `<output_root>/CV_<stamp>/<FOLDER>/<base><suffix>.<ext>` plus its
/// `ALL/<date>/<hour>/` twin.
pub fn generate_with(
    record: &Record,
    renderers: &[Box<dyn Renderer>],
    options: &GenerateOptions,
    now: NaiveDateTime,
) -> Result<GenerationReport, AppError> {
    record.check_required()?;
    let stamp = RunStamp::new(now);
    let ctx = RenderContext::new(now);

    let (record, link_fixes) = clean_links(record);
    for fix in &link_fixes {
        info!("🔧 Fixed link {}: '{}' → '{}'", fix.field, fix.before, fix.after);
    }

    let run_dir = options.output_root.join(format!("CV_{}", stamp.stamp()));
    fs::create_dir_all(&run_dir).map_err(|e| AppError::io(&run_dir, e))?;
    info!("📁 Created run directory: {}", run_dir.display());

    let mut created = Vec::new();
    let mut failures = Vec::new();

    for renderer in renderers {
        let format = renderer.format();
        match write_artifact(renderer.as_ref(), &record, &ctx, &run_dir, &stamp, &options.base_name) {
            Ok(artifact) => {
                info!("  ✅ created {} → {}", format.name(), artifact.path.display());
                created.push(artifact);
            }
            Err(e) => {
                warn!("  ❌ failed: {} ({})", e.reason(), format.name());
                failures.push(ArtifactFailure {
                    format: format.name(),
                    reason: e.reason(),
                });
            }
        }
    }

    let mut report = GenerationReport {
        run_dir,
        created,
        failures,
        link_fixes,
        summary_path: None,
    };

    let summary_path = report.run_dir.join(SUMMARY_FILE);
    match fs::write(&summary_path, summary(&record, &report, &stamp)) {
        Ok(()) => report.summary_path = Some(summary_path),
        Err(e) => {
            warn!("  ❌ failed to write summary {}: {e}", summary_path.display());
            report.failures.push(ArtifactFailure {
                format: "summary",
                reason: e.to_string(),
            });
        }
    }

    match render_tree(&report.run_dir) {
        Ok(tree) => info!("📂 Run directory layout:\n{tree}"),
        Err(e) => warn!("could not list run directory: {}", e.reason()),
    }

    info!(
        "🎉 Generation completed: {} created, {} failed",
        report.created.len(),
        report.failures.len()
    );
    Ok(report)
}

fn write_artifact(
    renderer: &dyn Renderer,
    record: &Record,
    ctx: &RenderContext,
    run_dir: &Path,
    stamp: &RunStamp,
    base_name: &str,
) -> Result<Artifact, AppError> {
    let format = renderer.format();
    let content = renderer.render(record, ctx)?;
    let file_name = artifact_name(format, base_name);

    let path = run_dir.join(format.folder()).join(&file_name);
    write_file(&path, &content)?;

    let dated_path = stamp
        .dated_dir(run_dir)
        .join(format.folder())
        .join(stamp.stamped_name(&file_name));
    write_file(&dated_path, &content)?;

    Ok(Artifact {
        format: format.name(),
        path,
        dated_path,
    })
}

/// `cv_alex_morgan_print.html`
pub fn artifact_name(format: Format, base_name: &str) -> String {
    format!("{base_name}{}.{}", format.file_suffix(), format.extension())
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| AppError::io(path, e))
}

fn summary(record: &Record, report: &GenerationReport, stamp: &RunStamp) -> String {
    let mut s = format!("CV Generation Summary\n{}\n\n", "=".repeat(50));
    s.push_str(&format!(
        "Generated at: {}\n",
        stamp.at().format("%Y-%m-%d %H:%M:%S")
    ));
    s.push_str(&format!(
        "Candidate: {} - {}\n",
        record.header.name, record.header.title
    ));
    s.push_str(&format!("Run directory: {}\n\n", report.run_dir.display()));

    s.push_str(&format!("Created ({}):\n", report.created.len()));
    for artifact in &report.created {
        let rel = artifact
            .path
            .strip_prefix(&report.run_dir)
            .unwrap_or(&artifact.path);
        s.push_str(&format!("- {}: {}\n", artifact.format, rel.display()));
    }

    if !report.failures.is_empty() {
        s.push_str(&format!("\nFailed ({}):\n", report.failures.len()));
        for failure in &report.failures {
            s.push_str(&format!("- {}: {}\n", failure.format, failure.reason));
        }
    }

    if !report.link_fixes.is_empty() {
        s.push_str("\nRepaired links:\n");
        for fix in &report.link_fixes {
            s.push_str(&format!("- {}: {} -> {}\n", fix.field, fix.before, fix.after));
        }
    }

    s.push_str(&format!(
        "\nTimestamped copies: ALL/{}/{}/\n",
        stamp.date_folder(),
        stamp.hour_folder()
    ));
    s
}
