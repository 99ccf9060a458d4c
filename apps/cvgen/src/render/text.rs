use crate::errors::AppError;
use crate::models::Record;
use crate::render::{
    contact_lines, joined, paren_suffix, skill_rows, Format, RenderContext, Renderer,
    SECTION_CERTIFICATES, SECTION_CONTACT, SECTION_EDUCATION, SECTION_EXPERIENCE,
    SECTION_LANGUAGES, SECTION_PROJECTS, SECTION_SKILLS, SECTION_SUMMARY,
};

const RULE_WIDTH: usize = 60;

/// Plain UTF-8 text. Sections are separated by a rule of 60 `=`.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn format(&self) -> Format {
        Format::Text
    }

    fn render(&self, record: &Record, ctx: &RenderContext) -> Result<String, AppError> {
        record.check_required()?;
        Ok(render_text(record, ctx))
    }
}

pub fn render_text(record: &Record, ctx: &RenderContext) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("{} - {}", record.header.name, record.header.title));

    let mut contact = format!("{SECTION_CONTACT}:\n");
    for (label, value, _) in contact_lines(record) {
        contact.push_str(&format!("{label}: {value}\n"));
    }
    sections.push(contact);

    if let Some(summary) = &record.summary {
        sections.push(format!("{SECTION_SUMMARY}:\n{}\n", summary.trim()));
    }

    let skills = skill_rows(record);
    if !skills.is_empty() {
        let mut s = format!("{SECTION_SKILLS}:\n");
        for (label, list) in &skills {
            s.push_str(&format!("{label}: {list}\n"));
        }
        sections.push(s);
    }

    if !record.projects.is_empty() {
        let mut s = format!("{SECTION_PROJECTS}:\n");
        for (i, p) in record.projects.iter().enumerate() {
            s.push_str(&format!("\n{}. {}\n", i + 1, p.name));
            push_field(&mut s, "Description", p.description.as_deref());
            push_field(&mut s, "Code", p.code_url.as_deref());
            push_field(&mut s, "Live Demo", p.live_url.as_deref());
            push_field(&mut s, "Technologies", joined(&p.technologies).as_deref());
            let features = p.features.as_deref().and_then(joined);
            push_field(&mut s, "Features", features.as_deref());
            push_field(&mut s, "Status", p.status.as_deref());
        }
        sections.push(s);
    }

    if !record.experience.is_empty() {
        let mut s = format!("{SECTION_EXPERIENCE}:\n");
        for e in &record.experience {
            let org = e
                .organization
                .as_deref()
                .map(|o| format!(" at {o}"))
                .unwrap_or_default();
            s.push_str(&format!(
                "\n- {}{org}{}\n",
                e.title,
                paren_suffix(e.duration.as_deref())
            ));
            if let Some(d) = &e.description {
                s.push_str(&format!("  {d}\n"));
            }
        }
        sections.push(s);
    }

    if !record.education.is_empty() {
        let mut s = format!("{SECTION_EDUCATION}:\n");
        for e in &record.education {
            let inst = e
                .institution
                .as_deref()
                .map(|i| format!(" from {i}"))
                .unwrap_or_default();
            s.push_str(&format!(
                "\n- {}{inst}{}\n",
                e.degree,
                paren_suffix(e.duration.as_deref())
            ));
            if let Some(d) = &e.description {
                s.push_str(&format!("  {d}\n"));
            }
        }
        sections.push(s);
    }

    if !record.certificates.is_empty() {
        let mut s = format!("{SECTION_CERTIFICATES}:\n");
        for c in &record.certificates {
            let issuer = c
                .issuer
                .as_deref()
                .map(|i| format!(" — {i}"))
                .unwrap_or_default();
            s.push_str(&format!(
                "\n- {}{issuer}{}\n",
                c.name,
                paren_suffix(c.date.as_deref())
            ));
            if let Some(url) = &c.url {
                s.push_str(&format!("  URL: {url}\n"));
            }
        }
        sections.push(s);
    }

    if !record.languages.is_empty() {
        let mut s = format!("{SECTION_LANGUAGES}:\n");
        for l in &record.languages {
            let level = l
                .level
                .as_deref()
                .map(|lv| format!(": {lv}"))
                .unwrap_or_default();
            s.push_str(&format!(
                "- {}{level}{}\n",
                l.language,
                paren_suffix(l.description.as_deref())
            ));
        }
        sections.push(s);
    }

    sections.push(format!("Generated on: {}\n", ctx.footer_timestamp()));

    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push_str(&rule);
            out.push('\n');
        }
        out.push_str(section.trim_end_matches('\n'));
        out.push('\n');
    }
    out
}

/// Indented `Label: value` line; nothing at all when `value` is absent.
fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(v) = value {
        out.push_str(&format!("   {label}: {v}\n"));
    }
}
