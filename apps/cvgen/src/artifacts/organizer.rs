//! Artifact Organizer — re-files previously generated `cv_*` files into a
//! per-format tree and a dated history tree.
//!
//! Files are copied, never moved: a misclassified file must not disappear from
//! its original location. One bad file never stops the batch; its failure is
//! recorded and the next file is tried.
//!
//! The flat `<BUCKET>/<name>` copies overwrite by name (last write wins), so
//! re-running on an unchanged source tree leaves them as they were while the
//! `ALL/` tree gains a new timestamped copy per file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, warn};

use crate::artifacts::layout::{RunStamp, ALL_DIR};
use crate::artifacts::tree::render_tree;
use crate::errors::AppError;

pub const MAIN_SUMMARY_FILE: &str = "MAIN_SUMMARY.txt";
pub const RUN_SUMMARY_FILE: &str = "GENERATION_SUMMARY.txt";

// ────────────────────────────────────────────────────────────────────────────
// Buckets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bucket {
    Pdf,
    Docx,
    Json,
    Markdown,
    Text,
    Html,
    Other,
}

impl Bucket {
    pub const ALL: [Bucket; 7] = [
        Bucket::Pdf,
        Bucket::Docx,
        Bucket::Json,
        Bucket::Markdown,
        Bucket::Text,
        Bucket::Html,
        Bucket::Other,
    ];

    /// Classifies by extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Bucket::Pdf,
            "docx" => Bucket::Docx,
            "json" => Bucket::Json,
            "md" => Bucket::Markdown,
            "txt" => Bucket::Text,
            "html" | "htm" => Bucket::Html,
            _ => Bucket::Other,
        }
    }

    pub fn folder(self) -> &'static str {
        match self {
            Bucket::Pdf => "PDF",
            Bucket::Docx => "DOCX",
            Bucket::Json => "JSON",
            Bucket::Markdown => "MARKDOWN",
            Bucket::Text => "TEXT",
            Bucket::Html => "HTML",
            Bucket::Other => "OTHER",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct OrganizeFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizeReport {
    pub files_found: usize,
    /// Files copied into both the flat and the dated tree.
    pub files_moved: usize,
    pub failures: Vec<OrganizeFailure>,
    /// `<dest>/ALL/<date>/<hour>` for this run.
    pub dated_dir: PathBuf,
}

// ────────────────────────────────────────────────────────────────────────────
// Organize
// ────────────────────────────────────────────────────────────────────────────

/// Copies every file under `source_roots` whose name starts with `prefix` into
/// `dest_root/<BUCKET>/<name>` and `dest_root/ALL/<date>/<hour>/<BUCKET>/<stem>_<stamp><.ext>`.
///
/// `dest_root` itself and any `ALL` directory are skipped while scanning, so a
/// destination inside a source root is never re-filed into itself.
pub fn organize(
    source_roots: &[PathBuf],
    dest_root: &Path,
    prefix: &str,
    now: NaiveDateTime,
) -> OrganizeReport {
    let stamp = RunStamp::new(now);
    let dated_dir = stamp.dated_dir(dest_root);
    let mut failures = Vec::new();

    let dest_canonical = fs::canonicalize(dest_root).unwrap_or_else(|_| dest_root.to_path_buf());

    info!("🔍 Scanning {} source root(s) for '{prefix}*'", source_roots.len());
    let mut found = Vec::new();
    let mut seen = HashSet::new();
    for root in source_roots {
        let mut ctx = ScanContext {
            prefix,
            dest: &dest_canonical,
            seen: &mut seen,
            found: &mut found,
            failures: &mut failures,
        };
        ctx.scan(root);
    }
    info!("🎯 Total files found: {}", found.len());

    let mut files_moved = 0;
    for source in &found {
        match copy_artifact(source, dest_root, &stamp) {
            Ok(bucket) => {
                files_moved += 1;
                info!("  ✅ organized {} → {}/", display_name(source), bucket.folder());
            }
            Err(e) => {
                warn!("  ❌ failed: {}: {}", source.display(), e.reason());
                failures.push(OrganizeFailure {
                    path: source.clone(),
                    reason: e.reason(),
                });
            }
        }
    }

    let mut report = OrganizeReport {
        files_found: found.len(),
        files_moved,
        failures,
        dated_dir,
    };

    for (path, content) in [
        (
            dest_root.join(MAIN_SUMMARY_FILE),
            main_summary(&report, dest_root, &stamp),
        ),
        (
            report.dated_dir.join(RUN_SUMMARY_FILE),
            run_summary(&report, &stamp),
        ),
    ] {
        if let Err(e) = write_file(&path, &content) {
            warn!("  ❌ failed to write summary {}: {}", path.display(), e.reason());
            report.failures.push(OrganizeFailure {
                path,
                reason: e.reason(),
            });
        }
    }

    match render_tree(&report.dated_dir) {
        Ok(tree) => info!("📂 This run's history:\n{tree}"),
        Err(e) => warn!("could not list {}: {}", report.dated_dir.display(), e.reason()),
    }

    info!(
        "🎉 Organization completed: {} found, {} organized, {} failed",
        report.files_found,
        report.files_moved,
        report.failures.len()
    );
    report
}

struct ScanContext<'a> {
    prefix: &'a str,
    dest: &'a Path,
    seen: &'a mut HashSet<PathBuf>,
    found: &'a mut Vec<PathBuf>,
    failures: &'a mut Vec<OrganizeFailure>,
}

impl ScanContext<'_> {
    fn scan(&mut self, dir: &Path) {
        let canonical = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        if canonical == self.dest {
            return;
        }

        let entries = match fs::read_dir(dir).and_then(|rd| rd.collect::<Result<Vec<_>, _>>()) {
            Ok(mut entries) => {
                entries.sort_by_key(|e| e.file_name());
                entries
            }
            Err(e) => {
                warn!("  ❌ cannot scan {}: {e}", dir.display());
                self.failures.push(OrganizeFailure {
                    path: dir.to_path_buf(),
                    reason: e.to_string(),
                });
                return;
            }
        };

        for entry in entries {
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                if entry.file_name() != ALL_DIR {
                    self.scan(&path);
                }
                continue;
            }
            let name = entry.file_name();
            if !name.to_string_lossy().starts_with(self.prefix) || !path.is_file() {
                continue;
            }
            let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if self.seen.insert(key) {
                info!("  Found: {}", path.display());
                self.found.push(path);
            }
        }
    }
}

fn copy_artifact(source: &Path, dest_root: &Path, stamp: &RunStamp) -> Result<Bucket, AppError> {
    let bucket = Bucket::from_path(source);
    let name = display_name(source);

    let flat = dest_root.join(bucket.folder()).join(&name);
    copy_file(source, &flat)?;

    let dated = stamp
        .dated_dir(dest_root)
        .join(bucket.folder())
        .join(stamp.stamped_name(&name));
    copy_file(source, &dated)?;

    Ok(bucket)
}

fn copy_file(source: &Path, dest: &Path) -> Result<(), AppError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    fs::copy(source, dest).map_err(|e| AppError::io(dest, e))?;
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| AppError::io(path, e))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Summaries
// ────────────────────────────────────────────────────────────────────────────

fn main_summary(report: &OrganizeReport, dest_root: &Path, stamp: &RunStamp) -> String {
    let mut s = format!("CV Files Organization - Main Summary\n{}\n\n", "=".repeat(50));
    s.push_str(&format!(
        "Organized at: {}\n",
        stamp.at().format("%Y-%m-%d %H:%M:%S")
    ));
    s.push_str(&format!("Destination: {}\n", dest_root.display()));
    s.push_str(&format!("Files found: {}\n", report.files_found));
    s.push_str(&format!("Files organized: {}\n", report.files_moved));
    s.push_str(&format!("Failures: {}\n\n", report.failures.len()));
    s.push_str("Per-format folders (latest copy by name):\n");
    for bucket in Bucket::ALL {
        s.push_str(&format!("- {}/\n", bucket.folder()));
    }
    s.push_str(&format!(
        "\nTimestamped history:\n- {ALL_DIR}/{}/{}/<FORMAT>/<name>_{}.<ext>\n",
        stamp.date_folder(),
        stamp.hour_folder(),
        stamp.stamp()
    ));
    push_failures(&mut s, report);
    s
}

fn run_summary(report: &OrganizeReport, stamp: &RunStamp) -> String {
    let mut s = format!(
        "CV Generation Summary - {}/{}\n{}\n\n",
        stamp.date_folder(),
        stamp.hour_folder(),
        "=".repeat(50)
    );
    s.push_str(&format!(
        "Generated at: {}\n",
        stamp.at().format("%Y-%m-%d %I:%M %p")
    ));
    s.push_str(&format!("Files organized: {}\n\n", report.files_moved));
    s.push_str(&format!(
        "Every file in this folder carries the suffix _{} before its extension.\n",
        stamp.stamp()
    ));
    push_failures(&mut s, report);
    s
}

fn push_failures(s: &mut String, report: &OrganizeReport) {
    if report.failures.is_empty() {
        return;
    }
    s.push_str("\nFailures:\n");
    for f in &report.failures {
        s.push_str(&format!("- {}: {}\n", f.path.display(), f.reason));
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    fn source_with(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    /// Relative paths of every file under `root`, sorted.
    fn files_under(root: &Path) -> Vec<String> {
        fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(base, &path, out);
                } else {
                    let rel = path.strip_prefix(base).unwrap();
                    out.push(rel.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        let mut out = Vec::new();
        walk(root, root, &mut out);
        out.sort();
        out
    }

    #[test]
    fn test_bucket_classification() {
        assert_eq!(Bucket::from_path(Path::new("cv.PDF")), Bucket::Pdf);
        assert_eq!(Bucket::from_path(Path::new("cv.docx")), Bucket::Docx);
        assert_eq!(Bucket::from_path(Path::new("cv.md")), Bucket::Markdown);
        assert_eq!(Bucket::from_path(Path::new("cv.txt")), Bucket::Text);
        assert_eq!(Bucket::from_path(Path::new("cv.html")), Bucket::Html);
        assert_eq!(Bucket::from_path(Path::new("cv.png")), Bucket::Other);
        assert_eq!(Bucket::from_path(Path::new("cv")), Bucket::Other);
    }

    #[test]
    fn test_pdf_and_json_scenario() {
        let src = source_with(&[("cv_x.pdf", "%PDF"), ("cv_x.json", "{}")]);
        let dest = tempfile::tempdir().unwrap();

        let report = organize(&[src.path().to_path_buf()], dest.path(), "cv_", at(16, 5, 9));

        assert_eq!(report.files_found, 2);
        assert_eq!(report.files_moved, 2);
        assert!(report.failures.is_empty());

        let d = dest.path();
        assert!(d.join("PDF/cv_x.pdf").is_file());
        assert!(d.join("JSON/cv_x.json").is_file());
        assert!(d
            .join("ALL/2026-10-19/04PM/PDF/cv_x_20261019_160509.pdf")
            .is_file());
        assert!(d
            .join("ALL/2026-10-19/04PM/JSON/cv_x_20261019_160509.json")
            .is_file());
        assert_eq!(fs::read_to_string(d.join("PDF/cv_x.pdf")).unwrap(), "%PDF");
        // Copy, not move.
        assert!(src.path().join("cv_x.pdf").is_file());
    }

    #[test]
    fn test_prefix_filter_and_recursion() {
        let src = source_with(&[
            ("cv_top.md", "# top"),
            ("nested/deeper/cv_deep.txt", "deep"),
            ("notes.txt", "not a cv"),
            ("nested/resume_cv_.txt", "wrong prefix"),
        ]);
        let dest = tempfile::tempdir().unwrap();

        let report = organize(&[src.path().to_path_buf()], dest.path(), "cv_", at(9, 0, 0));

        assert_eq!(report.files_found, 2);
        assert!(dest.path().join("MARKDOWN/cv_top.md").is_file());
        assert!(dest.path().join("TEXT/cv_deep.txt").is_file());
        assert!(!dest.path().join("TEXT/notes.txt").exists());
    }

    #[test]
    fn test_unknown_extension_goes_to_other() {
        let src = source_with(&[("cv_photo.png", "png")]);
        let dest = tempfile::tempdir().unwrap();
        organize(&[src.path().to_path_buf()], dest.path(), "cv_", at(9, 0, 0));
        assert!(dest.path().join("OTHER/cv_photo.png").is_file());
        assert!(dest
            .path()
            .join("ALL/2026-10-19/09AM/OTHER/cv_photo_20261019_090000.png")
            .is_file());
    }

    #[test]
    fn test_running_twice_adds_history_but_keeps_flat_set() {
        let src = source_with(&[("cv_x.pdf", "%PDF"), ("cv_x.json", "{}")]);
        let dest = tempfile::tempdir().unwrap();
        let roots = [src.path().to_path_buf()];

        let first = organize(&roots, dest.path(), "cv_", at(10, 0, 0));
        let flat_after_first: Vec<_> = files_under(dest.path())
            .into_iter()
            .filter(|p| !p.starts_with("ALL/"))
            .collect();

        let second = organize(&roots, dest.path(), "cv_", at(14, 30, 0));
        let all_files = files_under(dest.path());
        let flat_after_second: Vec<_> = all_files
            .iter()
            .filter(|p| !p.starts_with("ALL/"))
            .cloned()
            .collect();

        assert_eq!(flat_after_first, flat_after_second);
        assert_ne!(first.dated_dir, second.dated_dir);
        assert!(all_files.contains(&"ALL/2026-10-19/10AM/PDF/cv_x_20261019_100000.pdf".to_string()));
        assert!(all_files.contains(&"ALL/2026-10-19/02PM/PDF/cv_x_20261019_143000.pdf".to_string()));
    }

    #[test]
    fn test_destination_inside_source_is_not_refiled() {
        let src = source_with(&[("cv_x.txt", "x")]);
        let dest = src.path().join("organized");

        let first = organize(&[src.path().to_path_buf()], &dest, "cv_", at(10, 0, 0));
        let second = organize(&[src.path().to_path_buf()], &dest, "cv_", at(11, 0, 0));

        assert_eq!(first.files_found, 1);
        assert_eq!(second.files_found, 1);
        assert!(!dest.join("organized").exists());
    }

    #[test]
    fn test_history_trees_are_skipped() {
        let src = source_with(&[
            ("cv_x.txt", "x"),
            ("ALL/2026-10-18/03PM/TEXT/cv_x_20261018_150000.txt", "old"),
        ]);
        let dest = tempfile::tempdir().unwrap();
        let report = organize(&[src.path().to_path_buf()], dest.path(), "cv_", at(10, 0, 0));
        assert_eq!(report.files_found, 1);
    }

    #[test]
    fn test_overlapping_roots_count_file_once() {
        let src = source_with(&[("sub/cv_x.txt", "x")]);
        let dest = tempfile::tempdir().unwrap();
        let roots = [src.path().to_path_buf(), src.path().join("sub")];
        let report = organize(&roots, dest.path(), "cv_", at(10, 0, 0));
        assert_eq!(report.files_found, 1);
    }

    #[test]
    fn test_one_failure_does_not_stop_batch() {
        let src = source_with(&[("cv_a.txt", "a"), ("cv_b.txt", "b")]);
        let dest = tempfile::tempdir().unwrap();
        // A directory where the flat copy of cv_a.txt should go makes that copy fail.
        fs::create_dir_all(dest.path().join("TEXT/cv_a.txt")).unwrap();

        let report = organize(&[src.path().to_path_buf()], dest.path(), "cv_", at(10, 0, 0));

        assert_eq!(report.files_found, 2);
        assert_eq!(report.files_moved, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("cv_a.txt"));
        assert_eq!(fs::read_to_string(dest.path().join("TEXT/cv_b.txt")).unwrap(), "b");
    }

    #[test]
    fn test_missing_source_root_is_recorded() {
        let dest = tempfile::tempdir().unwrap();
        let missing = dest.path().join("does-not-exist");
        let report = organize(&[missing.clone()], dest.path(), "cv_", at(10, 0, 0));
        assert_eq!(report.files_found, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, missing);
    }

    #[test]
    fn test_summaries_written() {
        let src = source_with(&[("cv_x.pdf", "%PDF")]);
        let dest = tempfile::tempdir().unwrap();
        let report = organize(&[src.path().to_path_buf()], dest.path(), "cv_", at(16, 5, 9));

        let main = fs::read_to_string(dest.path().join(MAIN_SUMMARY_FILE)).unwrap();
        assert!(main.contains("Files found: 1"));
        assert!(main.contains("Files organized: 1"));
        assert!(main.contains("- OTHER/"));

        let run = fs::read_to_string(report.dated_dir.join(RUN_SUMMARY_FILE)).unwrap();
        assert!(run.starts_with("CV Generation Summary - 2026-10-19/04PM"));
        assert!(run.contains("Generated at: 2026-10-19 04:05 PM"));
    }
}
