//! Self-contained HTML5 output.
//!
//! No external stylesheet, font or script: the document must render the same
//! offline so a browser's "Print → Save as PDF" reproduces it faithfully. The
//! print variant adds `@page` rules and is filed under `PDF/`.
//!
//! Built with `maud`, so every interpolated value is escaped.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::errors::AppError;
use crate::models::Record;
use crate::render::{
    contact_lines, joined, paren_suffix, skill_rows, Format, RenderContext, Renderer,
    SECTION_CERTIFICATES, SECTION_EDUCATION, SECTION_EXPERIENCE, SECTION_LANGUAGES,
    SECTION_PROJECTS, SECTION_SKILLS, SECTION_SUMMARY,
};

const BASE_STYLE: &str = "\
body { font-family: Arial, Helvetica, sans-serif; margin: 40px; color: #2c3e50; line-height: 1.45; }
.header { text-align: center; margin-bottom: 24px; }
.name { font-size: 28px; font-weight: bold; margin-bottom: 6px; }
.title { font-size: 18px; color: #34495e; }
.contact { display: flex; flex-wrap: wrap; justify-content: center; gap: 6px 18px; margin-bottom: 20px; font-size: 14px; }
.section { margin-top: 22px; }
.section-title { font-size: 16px; font-weight: bold; border-bottom: 2px solid #3498db; padding-bottom: 4px; margin-bottom: 10px; }
.entry { margin-bottom: 14px; }
.entry-title { font-weight: bold; margin-bottom: 4px; }
.entry p { margin: 2px 0; }
.skill-list { color: #555; }
a { color: #2471a3; }
.footer { margin-top: 36px; padding-top: 12px; border-top: 1px solid #ecf0f1; text-align: center; color: #7f8c8d; font-size: 12px; }
";

const PRINT_STYLE: &str = "\
@page { size: A4; margin: 15mm; }
@media print {
  body { margin: 0; }
  .print-note { display: none; }
  a { color: inherit; text-decoration: none; }
  .entry { break-inside: avoid; }
}
.print-note { background: #fef9e7; border: 1px solid #f7dc6f; padding: 8px 12px; margin-bottom: 20px; font-size: 13px; }
";

/// HTML renderer; `print()` yields the print-ready variant.
pub struct HtmlRenderer {
    print: bool,
}

impl HtmlRenderer {
    pub fn screen() -> Self {
        Self { print: false }
    }

    pub fn print() -> Self {
        Self { print: true }
    }
}

impl Renderer for HtmlRenderer {
    fn format(&self) -> Format {
        if self.print {
            Format::PrintHtml
        } else {
            Format::Html
        }
    }

    fn render(&self, record: &Record, ctx: &RenderContext) -> Result<String, AppError> {
        record.check_required()?;
        Ok(render_html(record, ctx, self.print))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fragments
// ────────────────────────────────────────────────────────────────────────────

const PRINT_NOTE: &str =
    "To save as PDF: open this file in a browser, choose Print, then \"Save as PDF\".";

fn anchor(url: &str) -> Markup {
    html! { a href=(url) target="_blank" rel="noopener" { (url) } }
}

/// `<p><strong>Label:</strong> value</p>`; nothing when absent.
fn labeled(label: &str, value: Option<&str>) -> Markup {
    html! {
        @if let Some(v) = value {
            p { strong { (label) ":" } " " (v) }
        }
    }
}

fn labeled_link(label: &str, url: Option<&str>) -> Markup {
    html! {
        @if let Some(u) = url {
            p { strong { (label) ":" } " " (anchor(u)) }
        }
    }
}

fn section(title: &str, body: Markup) -> Markup {
    html! {
        section class="section" {
            h2 class="section-title" { (title) }
            (body)
        }
    }
}

fn entry(heading: &str, body: Markup) -> Markup {
    html! {
        article class="entry" {
            h3 class="entry-title" { (heading) }
            (body)
        }
    }
}

/// " - value", or empty when absent.
fn dash_suffix(value: Option<&str>) -> String {
    value.map(|v| format!(" - {v}")).unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn contact(record: &Record) -> Markup {
    html! {
        div class="contact" {
            @for (label, value, is_url) in contact_lines(record) {
                span class="contact-item" {
                    strong { (label) ":" } " "
                    @if is_url { (anchor(value)) } @else { (value) }
                }
            }
        }
    }
}

fn skills(rows: &[(String, String)]) -> Markup {
    section(
        SECTION_SKILLS,
        html! {
            @for (label, list) in rows {
                div class="entry" {
                    div class="entry-title" { (label) }
                    div class="skill-list" { (list) }
                }
            }
        },
    )
}

fn projects(record: &Record) -> Markup {
    section(
        SECTION_PROJECTS,
        html! {
            @for project in &record.projects {
                (entry(&project.name, html! {
                    (labeled("Description", project.description.as_deref()))
                    (labeled_link("Code", project.code_url.as_deref()))
                    (labeled_link("Live Demo", project.live_url.as_deref()))
                    (labeled("Technologies", joined(&project.technologies).as_deref()))
                    (labeled("Features", project.features.as_deref().and_then(joined).as_deref()))
                    (labeled("Status", project.status.as_deref()))
                }))
            }
        },
    )
}

fn experience(record: &Record) -> Markup {
    section(
        SECTION_EXPERIENCE,
        html! {
            @for job in &record.experience {
                @let heading = format!(
                    "{}{}{}",
                    job.title,
                    dash_suffix(job.organization.as_deref()),
                    paren_suffix(job.duration.as_deref())
                );
                (entry(&heading, html! {
                    @if let Some(d) = &job.description { p { (d) } }
                }))
            }
        },
    )
}

fn education(record: &Record) -> Markup {
    section(
        SECTION_EDUCATION,
        html! {
            @for school in &record.education {
                @let heading = format!(
                    "{}{}{}",
                    school.degree,
                    dash_suffix(school.institution.as_deref()),
                    paren_suffix(school.duration.as_deref())
                );
                (entry(&heading, html! {
                    @if let Some(d) = &school.description { p { (d) } }
                }))
            }
        },
    )
}

fn certificates(record: &Record) -> Markup {
    section(
        SECTION_CERTIFICATES,
        html! {
            @for cert in &record.certificates {
                @let heading = format!(
                    "{}{}{}",
                    cert.name,
                    dash_suffix(cert.issuer.as_deref()),
                    paren_suffix(cert.date.as_deref())
                );
                (entry(&heading, labeled_link("Verify", cert.url.as_deref())))
            }
        },
    )
}

fn languages(record: &Record) -> Markup {
    section(
        SECTION_LANGUAGES,
        html! {
            @for lang in &record.languages {
                p {
                    (lang.language)
                    (dash_suffix(lang.level.as_deref()))
                    (paren_suffix(lang.description.as_deref()))
                }
            }
        },
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

pub fn render_html(record: &Record, ctx: &RenderContext, print: bool) -> String {
    let h = &record.header;
    let skill_rows = skill_rows(record);
    let doc = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (h.name) " - CV" }
                style {
                    (PreEscaped(BASE_STYLE))
                    @if print { (PreEscaped(PRINT_STYLE)) }
                }
            }
            body {
                @if print {
                    div class="print-note" { (PRINT_NOTE) }
                }
                header class="header" {
                    div class="name" { (h.name) }
                    div class="title" { (h.title) }
                }
                (contact(record))
                @if let Some(summary) = &record.summary {
                    (section(SECTION_SUMMARY, html! { p { (summary.trim()) } }))
                }
                @if !skill_rows.is_empty() { (skills(&skill_rows)) }
                @if !record.projects.is_empty() { (projects(record)) }
                @if !record.experience.is_empty() { (experience(record)) }
                @if !record.education.is_empty() { (education(record)) }
                @if !record.certificates.is_empty() { (certificates(record)) }
                @if !record.languages.is_empty() { (languages(record)) }
                footer class="footer" { "Generated on " (ctx.footer_timestamp()) }
            }
        }
    };
    let mut out = doc.into_string();
    out.push('\n');
    out
}
