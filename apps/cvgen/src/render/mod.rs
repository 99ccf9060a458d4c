//! Format renderers — one pure function of the `Record` per output format.
//!
//! Every renderer walks the same section order (header, summary, skills,
//! projects, experience, education, certificates, languages), keeps list
//! order as given, and omits any line whose optional value is absent.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

#[cfg(test)]
mod properties;

use chrono::NaiveDateTime;

use crate::errors::AppError;
use crate::models::Record;

/// Version tag written into the JSON metadata block.
pub const RENDERER_VERSION: &str = concat!("cvgen/", env!("CARGO_PKG_VERSION"));

// ────────────────────────────────────────────────────────────────────────────
// Formats
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Text,
    Markdown,
    Json,
    Html,
    /// HTML with print rules, meant for the browser's "Save as PDF".
    PrintHtml,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Markdown => "markdown",
            Format::Json => "json",
            Format::Html => "html",
            Format::PrintHtml => "pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Markdown => "md",
            Format::Json => "json",
            Format::Html | Format::PrintHtml => "html",
        }
    }

    /// Folder the artifact is filed under inside a run directory.
    pub fn folder(self) -> &'static str {
        match self {
            Format::Text => "TEXT",
            Format::Markdown => "MARKDOWN",
            Format::Json => "JSON",
            Format::Html => "HTML",
            Format::PrintHtml => "PDF",
        }
    }

    /// Appended to the base name so the two HTML outputs never share a file name.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Format::PrintHtml => "_print",
            _ => "",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer trait + registry
// ────────────────────────────────────────────────────────────────────────────

/// Inputs besides the record. Keeping the clock here keeps `render` pure.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub generated_at: NaiveDateTime,
}

impl RenderContext {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    pub(crate) fn footer_timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

pub trait Renderer {
    fn format(&self) -> Format;
    fn render(&self, record: &Record, ctx: &RenderContext) -> Result<String, AppError>;
}

/// All renderers in the order the generator runs them.
pub fn default_renderers() -> Vec<Box<dyn Renderer>> {
    vec![
        Box::new(text::TextRenderer),
        Box::new(markdown::MarkdownRenderer),
        Box::new(json::JsonRenderer),
        Box::new(html::HtmlRenderer::screen()),
        Box::new(html::HtmlRenderer::print()),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

pub(crate) const SECTION_SUMMARY: &str = "PROFESSIONAL SUMMARY";
pub(crate) const SECTION_SKILLS: &str = "TECHNICAL SKILLS";
pub(crate) const SECTION_PROJECTS: &str = "PROJECTS";
pub(crate) const SECTION_EXPERIENCE: &str = "WORK EXPERIENCE";
pub(crate) const SECTION_EDUCATION: &str = "EDUCATION";
pub(crate) const SECTION_CERTIFICATES: &str = "CERTIFICATES";
pub(crate) const SECTION_LANGUAGES: &str = "LANGUAGES";
pub(crate) const SECTION_CONTACT: &str = "CONTACT INFORMATION";

/// "frontend" → "Frontend", "dev_ops tools" → "Dev Ops Tools".
pub(crate) fn category_label(category: &str) -> String {
    category
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut c = w.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().to_string() + c.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Skill categories that list at least one skill, as `(label, "a, b")`.
/// A category with no skills would only print a dangling label.
pub(crate) fn skill_rows(record: &Record) -> Vec<(String, String)> {
    record
        .skills
        .iter()
        .filter_map(|(category, items)| joined(items).map(|list| (category_label(category), list)))
        .collect()
}

/// Joins a list with `", "`, or `None` when there is nothing to show.
pub(crate) fn joined(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

/// Contact lines as `(label, value, is_url)`; absent fields are skipped.
pub(crate) fn contact_lines(record: &Record) -> Vec<(&'static str, &str, bool)> {
    let h = &record.header;
    let mut lines = vec![("Email", h.email.as_str(), false)];
    let optional = [
        ("Phone", &h.phone, false),
        ("Location", &h.location, false),
        ("LinkedIn", &h.linkedin, true),
        ("GitHub", &h.github, true),
        ("Portfolio", &h.portfolio, true),
        ("CV", &h.cv_url, true),
    ];
    for (label, value, is_url) in optional {
        if let Some(v) = value {
            lines.push((label, v.as_str(), is_url));
        }
    }
    lines
}

/// "(2024 - Present)" style suffix, or empty when there is no duration.
pub(crate) fn paren_suffix(value: Option<&str>) -> String {
    value.map(|v| format!(" ({v})")).unwrap_or_default()
}
