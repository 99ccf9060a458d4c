use crate::errors::AppError;
use crate::models::Record;
use crate::render::{
    contact_lines, joined, skill_rows, Format, RenderContext, Renderer, SECTION_CERTIFICATES,
    SECTION_CONTACT, SECTION_EDUCATION, SECTION_EXPERIENCE, SECTION_LANGUAGES, SECTION_PROJECTS,
    SECTION_SKILLS, SECTION_SUMMARY,
};

/// CommonMark output: `##` per section, `###` per entry, bold-labeled lines.
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn format(&self) -> Format {
        Format::Markdown
    }

    fn render(&self, record: &Record, ctx: &RenderContext) -> Result<String, AppError> {
        record.check_required()?;
        Ok(render_markdown(record, ctx))
    }
}

pub fn render_markdown(record: &Record, ctx: &RenderContext) -> String {
    let mut md = format!("# {} - {}\n\n", record.header.name, record.header.title);

    md.push_str(&format!("## {SECTION_CONTACT}\n\n"));
    for (label, value, is_url) in contact_lines(record) {
        if is_url {
            md.push_str(&format!("- **{label}:** {}\n", link(value)));
        } else {
            md.push_str(&format!("- **{label}:** {value}\n"));
        }
    }
    md.push('\n');

    if let Some(summary) = &record.summary {
        md.push_str(&format!("## {SECTION_SUMMARY}\n\n{}\n\n", summary.trim()));
    }

    let skills = skill_rows(record);
    if !skills.is_empty() {
        md.push_str(&format!("## {SECTION_SKILLS}\n\n"));
        for (label, list) in &skills {
            md.push_str(&format!("- **{label}:** {list}\n"));
        }
        md.push('\n');
    }

    if !record.projects.is_empty() {
        md.push_str(&format!("## {SECTION_PROJECTS}\n\n"));
        for p in &record.projects {
            md.push_str(&format!("### {}\n", p.name));
            push_field(&mut md, "Description", p.description.as_deref());
            push_link(&mut md, "Code", p.code_url.as_deref());
            push_link(&mut md, "Live Demo", p.live_url.as_deref());
            push_field(&mut md, "Technologies", joined(&p.technologies).as_deref());
            let features = p.features.as_deref().and_then(joined);
            push_field(&mut md, "Features", features.as_deref());
            push_field(&mut md, "Status", p.status.as_deref());
            md.push('\n');
        }
    }

    if !record.experience.is_empty() {
        md.push_str(&format!("## {SECTION_EXPERIENCE}\n\n"));
        for e in &record.experience {
            md.push_str(&format!("### {}\n", e.title));
            push_field(&mut md, "Organization", e.organization.as_deref());
            push_field(&mut md, "Duration", e.duration.as_deref());
            push_field(&mut md, "Description", e.description.as_deref());
            md.push('\n');
        }
    }

    if !record.education.is_empty() {
        md.push_str(&format!("## {SECTION_EDUCATION}\n\n"));
        for e in &record.education {
            md.push_str(&format!("### {}\n", e.degree));
            push_field(&mut md, "Institution", e.institution.as_deref());
            push_field(&mut md, "Duration", e.duration.as_deref());
            push_field(&mut md, "Description", e.description.as_deref());
            md.push('\n');
        }
    }

    if !record.certificates.is_empty() {
        md.push_str(&format!("## {SECTION_CERTIFICATES}\n\n"));
        for c in &record.certificates {
            md.push_str(&format!("### {}\n", c.name));
            push_field(&mut md, "Issuer", c.issuer.as_deref());
            push_field(&mut md, "Date", c.date.as_deref());
            push_link(&mut md, "Verify", c.url.as_deref());
            md.push('\n');
        }
    }

    if !record.languages.is_empty() {
        md.push_str(&format!("## {SECTION_LANGUAGES}\n\n"));
        for l in &record.languages {
            md.push_str(&format!("### {}\n", l.language));
            push_field(&mut md, "Level", l.level.as_deref());
            push_field(&mut md, "Description", l.description.as_deref());
            md.push('\n');
        }
    }

    md.push_str(&format!(
        "---\n\n*Generated on {}*\n",
        ctx.footer_timestamp()
    ));
    md
}

fn link(url: &str) -> String {
    format!("<{url}>")
}

fn push_field(md: &mut String, label: &str, value: Option<&str>) {
    if let Some(v) = value {
        md.push_str(&format!("- **{label}:** {v}\n"));
    }
}

fn push_link(md: &mut String, label: &str, url: Option<&str>) {
    if let Some(u) = url {
        md.push_str(&format!("- **{label}:** {}\n", link(u)));
    }
}
