//! Dated artifact layout shared by the generator and the organizer:
//!
//! ```text
//! <root>/<FOLDER>/<name>
//! <root>/ALL/<YYYY-MM-DD>/<hh><AM|PM>/<FOLDER>/<stem>_<YYYYMMDD_HHMMSS><.ext>
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

pub const ALL_DIR: &str = "ALL";

/// One run's timestamp and the path fragments derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStamp {
    at: NaiveDateTime,
}

impl RunStamp {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    pub fn at(&self) -> NaiveDateTime {
        self.at
    }

    /// `20261019_160509`
    pub fn stamp(&self) -> String {
        self.at.format("%Y%m%d_%H%M%S").to_string()
    }

    /// `2026-10-19`
    pub fn date_folder(&self) -> String {
        self.at.format("%Y-%m-%d").to_string()
    }

    /// 12-hour clock with meridiem: `04PM`, `12AM`.
    pub fn hour_folder(&self) -> String {
        self.at.format("%I%p").to_string()
    }

    /// `<root>/ALL/<date>/<hour>`
    pub fn dated_dir(&self, root: &Path) -> PathBuf {
        root.join(ALL_DIR)
            .join(self.date_folder())
            .join(self.hour_folder())
    }

    /// `cv_x.pdf` → `cv_x_20261019_160509.pdf`; names without an extension
    /// just get the suffix.
    pub fn stamped_name(&self, file_name: &str) -> String {
        let path = Path::new(file_name);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        match path.extension() {
            Some(ext) => format!("{stem}_{}.{}", self.stamp(), ext.to_string_lossy()),
            None => format!("{stem}_{}", self.stamp()),
        }
    }
}
