//! Property tests over generated records.
//!
//! Every renderer must reproduce each required value, leave out absent
//! optional values, and the JSON output must read back into the same record.

use proptest::prelude::*;

use crate::models::record::{Certificate, Education, Experience, Header, Language, Project};
use crate::models::skills::SkillMap;
use crate::models::Record;
use crate::render::json::JsonRenderer;
use crate::render::test_support::ctx;
use crate::render::{default_renderers, Format, Renderer};

// =============================================================================
// STRATEGIES
// =============================================================================

/// Non-blank, no surrounding whitespace. `&` exercises HTML escaping.
fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9 &]{0,14}[a-z0-9]").unwrap()
}

fn url() -> impl Strategy<Value = String> {
    prop::string::string_regex("https://[a-z]{1,10}\\.dev(/[a-z0-9]{1,8})?").unwrap()
}

fn email() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}@[a-z]{1,8}\\.(com|dev)").unwrap()
}

fn words(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..max)
}

fn header() -> impl Strategy<Value = Header> {
    (
        word(),
        word(),
        email(),
        prop::option::of(word()),
        prop::option::of(word()),
        prop::option::of(url()),
        prop::option::of(url()),
        prop::option::of(url()),
        prop::option::of(url()),
    )
        .prop_map(
            |(name, title, email, phone, location, linkedin, github, portfolio, cv_url)| Header {
                name,
                title,
                email,
                phone,
                location,
                linkedin,
                github,
                portfolio,
                cv_url,
            },
        )
}

fn skills() -> impl Strategy<Value = SkillMap> {
    prop::collection::vec((word(), words(4)), 0..4)
        .prop_map(|categories| categories.into_iter().collect())
}

fn project() -> impl Strategy<Value = Project> {
    (
        word(),
        prop::option::of(word()),
        prop::option::of(url()),
        prop::option::of(url()),
        words(4),
        prop::option::of(words(3)),
        prop::option::of(word()),
    )
        .prop_map(
            |(name, description, code_url, live_url, technologies, features, status)| Project {
                name,
                description,
                code_url,
                live_url,
                technologies,
                features,
                status,
            },
        )
}

fn experience() -> impl Strategy<Value = Experience> {
    (
        word(),
        prop::option::of(word()),
        prop::option::of(word()),
        prop::option::of(word()),
    )
        .prop_map(|(title, organization, duration, description)| Experience {
            title,
            organization,
            duration,
            description,
        })
}

fn education() -> impl Strategy<Value = Education> {
    (
        word(),
        prop::option::of(word()),
        prop::option::of(word()),
        prop::option::of(word()),
    )
        .prop_map(|(degree, institution, duration, description)| Education {
            degree,
            institution,
            duration,
            description,
        })
}

fn certificate() -> impl Strategy<Value = Certificate> {
    (
        word(),
        prop::option::of(word()),
        prop::option::of(word()),
        prop::option::of(url()),
    )
        .prop_map(|(name, issuer, date, url)| Certificate {
            name,
            issuer,
            date,
            url,
        })
}

fn language() -> impl Strategy<Value = Language> {
    (word(), prop::option::of(word()), prop::option::of(word())).prop_map(
        |(language, level, description)| Language {
            language,
            level,
            description,
        },
    )
}

fn record() -> impl Strategy<Value = Record> {
    (
        header(),
        prop::option::of(word()),
        skills(),
        prop::collection::vec(project(), 0..3),
        prop::collection::vec(experience(), 0..3),
        prop::collection::vec(education(), 0..2),
        prop::collection::vec(certificate(), 0..3),
        prop::collection::vec(language(), 0..3),
    )
        .prop_map(
            |(header, summary, skills, projects, experience, education, certificates, languages)| {
                Record {
                    header,
                    summary,
                    skills,
                    projects,
                    experience,
                    education,
                    certificates,
                    languages,
                }
            },
        )
}

// =============================================================================
// HELPERS
// =============================================================================

/// Header values plus the headline field of every list entry.
fn required_values(record: &Record) -> Vec<&str> {
    let h = &record.header;
    let mut values = vec![h.name.as_str(), h.title.as_str(), h.email.as_str()];
    values.extend(record.projects.iter().map(|p| p.name.as_str()));
    values.extend(record.experience.iter().map(|e| e.title.as_str()));
    values.extend(record.education.iter().map(|e| e.degree.as_str()));
    values.extend(record.certificates.iter().map(|c| c.name.as_str()));
    values.extend(record.languages.iter().map(|l| l.language.as_str()));
    values
}

/// How a plain value appears in the given format's output.
fn as_rendered(format: Format, value: &str) -> String {
    match format {
        Format::Html | Format::PrintHtml => value.replace('&', "&amp;"),
        _ => value.to_string(),
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// JSON output parses back into the record it was rendered from.
    #[test]
    fn test_json_round_trips(record in record()) {
        let out = JsonRenderer.render(&record, &ctx()).unwrap();
        let parsed = Record::from_json(&out).unwrap();
        prop_assert_eq!(parsed, record);
    }

    /// Every renderer carries every required value.
    #[test]
    fn test_required_values_survive_every_format(record in record()) {
        for renderer in default_renderers() {
            let format = renderer.format();
            let out = renderer.render(&record, &ctx()).unwrap();
            for value in required_values(&record) {
                let expected = as_rendered(format, value);
                prop_assert!(
                    out.contains(&expected),
                    "{} output is missing {:?}", format.name(), expected
                );
            }
        }
    }

    /// An absent live demo leaves no label behind; JSON spells it `null`.
    #[test]
    fn test_absent_live_demo_leaves_no_trace(record in record()) {
        let with_live = record.projects.iter().filter(|p| p.live_url.is_some()).count();
        let without_live = record.projects.len() - with_live;
        for renderer in default_renderers() {
            let format = renderer.format();
            let out = renderer.render(&record, &ctx()).unwrap();
            if format == Format::Json {
                prop_assert_eq!(out.matches("\"live_url\": null").count(), without_live);
            } else {
                prop_assert_eq!(out.matches("Live Demo").count(), with_live, "{}", format.name());
            }
        }
    }

    /// No label is ever printed without a value after it.
    #[test]
    fn test_no_blank_placeholders(record in record()) {
        for renderer in default_renderers() {
            let format = renderer.format();
            let out = renderer.render(&record, &ctx()).unwrap();
            match format {
                Format::Json => {}
                Format::Markdown => {
                    for line in out.lines() {
                        prop_assert!(!line.trim_end().ends_with(":**"), "blank markdown line {:?}", line);
                    }
                }
                Format::Text => {
                    for line in out.lines() {
                        prop_assert!(!line.ends_with(": "), "blank text line {:?}", line);
                    }
                }
                Format::Html | Format::PrintHtml => {
                    prop_assert!(!out.contains("</strong> </p>"));
                    prop_assert_eq!(
                        out.matches("<div class=\"entry\">").count(),
                        out.matches("class=\"skill-list\"").count()
                    );
                }
            }
        }
    }
}
