//! Link cleaning — repairs URLs that picked up stray whitespace
//! (e.g. `https://quiz -app.vercel.app`) before they are rendered.

use serde::Serialize;

use crate::models::record::Record;

/// One repaired URL field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkFix {
    /// Dotted field path, e.g. `projects[1].live_url`.
    pub field: String,
    pub before: String,
    pub after: String,
}

/// Removes leading, trailing and interior whitespace from a URL.
pub fn clean_url(url: &str) -> String {
    url.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns a copy of `record` with every URL field cleaned, plus the list of
/// fields that changed. The input record is left untouched.
pub fn clean_links(record: &Record) -> (Record, Vec<LinkFix>) {
    let mut cleaned = record.clone();
    let mut fixes = Vec::new();

    let header = &mut cleaned.header;
    clean_field(&mut header.linkedin, "header.linkedin".to_string(), &mut fixes);
    clean_field(&mut header.github, "header.github".to_string(), &mut fixes);
    clean_field(&mut header.portfolio, "header.portfolio".to_string(), &mut fixes);
    clean_field(&mut header.cv_url, "header.cv_url".to_string(), &mut fixes);

    for (i, project) in cleaned.projects.iter_mut().enumerate() {
        clean_field(&mut project.code_url, format!("projects[{i}].code_url"), &mut fixes);
        clean_field(&mut project.live_url, format!("projects[{i}].live_url"), &mut fixes);
    }

    for (i, cert) in cleaned.certificates.iter_mut().enumerate() {
        clean_field(&mut cert.url, format!("certificates[{i}].url"), &mut fixes);
    }

    (cleaned, fixes)
}

fn clean_field(value: &mut Option<String>, field: String, fixes: &mut Vec<LinkFix>) {
    let Some(before) = value.as_deref() else {
        return;
    };
    let after = clean_url(before);
    if after == before {
        return;
    }
    fixes.push(LinkFix {
        field,
        before: before.to_string(),
        after: after.clone(),
    });
    *value = Some(after);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url_removes_interior_space() {
        assert_eq!(
            clean_url("https://example.github.io/E-commerce -demo/"),
            "https://example.github.io/E-commerce-demo/"
        );
        assert_eq!(clean_url("  https://a.dev \n"), "https://a.dev");
    }

    #[test]
    fn test_clean_url_leaves_clean_url_alone() {
        assert_eq!(clean_url("https://a.dev/x?y=1"), "https://a.dev/x?y=1");
    }

    #[test]
    fn test_clean_links_reports_each_fix() {
        let mut record = Record::builtin();
        record.projects[1].live_url = Some("https://quiz -example.vercel.app".to_string());
        record.header.github = Some("https://github.com/ alex".to_string());

        let (cleaned, fixes) = clean_links(&record);

        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].field, "header.github");
        assert_eq!(fixes[1].field, "projects[1].live_url");
        assert_eq!(fixes[1].after, "https://quiz-example.vercel.app");
        assert_eq!(
            cleaned.projects[1].live_url.as_deref(),
            Some("https://quiz-example.vercel.app")
        );
        // Source record is not modified.
        assert_eq!(
            record.projects[1].live_url.as_deref(),
            Some("https://quiz -example.vercel.app")
        );
    }

    #[test]
    fn test_clean_links_no_fixes_on_clean_record() {
        let record = Record::builtin();
        let (cleaned, fixes) = clean_links(&record);
        assert!(fixes.is_empty());
        assert_eq!(cleaned, record);
    }

    #[test]
    fn test_missing_urls_stay_missing() {
        let record = Record::builtin();
        let (cleaned, _) = clean_links(&record);
        assert!(cleaned.projects[2].live_url.is_none());
    }
}
