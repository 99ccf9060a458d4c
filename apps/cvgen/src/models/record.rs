//! Résumé record — the single source of truth every renderer reads.
//!
//! A `Record` is only ever built through `Record::from_json` (which validates a
//! lenient draft) or `Record::builtin`. The pipeline never mutates it; link
//! cleaning produces a new record. Fields stay public, so renderers and the
//! generator re-check required fields with `check_required` before output.
//!
//! Required fields: `header.name`, `header.title`, `header.email`, plus the
//! headline field of every list entry (project name, experience title, etc.).
//! Optional strings are never blank once validated: blank input becomes `None`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::skills::SkillMap;

// ────────────────────────────────────────────────────────────────────────────
// Record types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub cv_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub code_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Vec<String>,
    pub features: Option<Vec<String>>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub title: String,
    pub organization: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Certificate {
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Language {
    pub language: String,
    pub level: Option<String>,
    pub description: Option<String>,
}

/// A validated résumé. Field order here is the key order of the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub header: Header,
    pub summary: Option<String>,
    pub skills: SkillMap,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
    pub languages: Vec<Language>,
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient drafts (everything optional, unknown keys ignored)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeaderDraft {
    name: Option<String>,
    title: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    linkedin: Option<String>,
    github: Option<String>,
    #[serde(alias = "website")]
    portfolio: Option<String>,
    cv_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectDraft {
    name: Option<String>,
    description: Option<String>,
    code_url: Option<String>,
    live_url: Option<String>,
    technologies: Option<Vec<String>>,
    features: Option<Vec<String>>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExperienceDraft {
    title: Option<String>,
    #[serde(alias = "company")]
    organization: Option<String>,
    duration: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EducationDraft {
    degree: Option<String>,
    #[serde(alias = "organization")]
    institution: Option<String>,
    duration: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CertificateDraft {
    name: Option<String>,
    issuer: Option<String>,
    date: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LanguageDraft {
    language: Option<String>,
    #[serde(alias = "proficiency")]
    level: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordDraft {
    header: Option<HeaderDraft>,
    summary: Option<String>,
    skills: Option<SkillMap>,
    projects: Option<Vec<ProjectDraft>>,
    experience: Option<Vec<ExperienceDraft>>,
    education: Option<Vec<EducationDraft>>,
    certificates: Option<Vec<CertificateDraft>>,
    languages: Option<Vec<LanguageDraft>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Construction
// ────────────────────────────────────────────────────────────────────────────

impl Record {
    /// Parses and validates a record from JSON.
    ///
    /// Accepts the JSON renderer's own output: the `metadata` block is ignored.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let draft: RecordDraft = serde_json::from_str(json)?;
        draft.validate()
    }

    /// Reads a UTF-8 JSON record file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Re-checks every required field. Fields are public, so a record edited
    /// after construction may no longer hold what `from_json` validated.
    pub fn check_required(&self) -> Result<(), AppError> {
        let h = &self.header;
        present(&h.name, || "header.name".to_string())?;
        present(&h.title, || "header.title".to_string())?;
        present(&h.email, || "header.email".to_string())?;
        for (i, p) in self.projects.iter().enumerate() {
            present(&p.name, || format!("projects[{i}].name"))?;
        }
        for (i, e) in self.experience.iter().enumerate() {
            present(&e.title, || format!("experience[{i}].title"))?;
        }
        for (i, e) in self.education.iter().enumerate() {
            present(&e.degree, || format!("education[{i}].degree"))?;
        }
        for (i, c) in self.certificates.iter().enumerate() {
            present(&c.name, || format!("certificates[{i}].name"))?;
        }
        for (i, l) in self.languages.iter().enumerate() {
            present(&l.language, || format!("languages[{i}].language"))?;
        }
        Ok(())
    }

    /// Lower-case ASCII slug of the header name: "Alex Morgan" → "alex_morgan".
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.header.name.len());
        let mut pending_sep = false;
        for c in self.header.name.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_sep && !slug.is_empty() {
                    slug.push('_');
                }
                pending_sep = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_sep = true;
            }
        }
        if slug.is_empty() {
            slug.push_str("resume");
        }
        slug
    }
}

impl RecordDraft {
    fn validate(self) -> Result<Record, AppError> {
        let header = self.header.unwrap_or_default();
        let header = Header {
            name: required(header.name, || "header.name".to_string())?,
            title: required(header.title, || "header.title".to_string())?,
            email: required(header.email, || "header.email".to_string())?,
            phone: optional(header.phone),
            location: optional(header.location),
            linkedin: optional(header.linkedin),
            github: optional(header.github),
            portfolio: optional(header.portfolio),
            cv_url: optional(header.cv_url),
        };

        let projects = self
            .projects
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                Ok(Project {
                    name: required(p.name, || format!("projects[{i}].name"))?,
                    description: optional(p.description),
                    code_url: optional(p.code_url),
                    live_url: optional(p.live_url),
                    technologies: p.technologies.unwrap_or_default(),
                    features: p.features,
                    status: optional(p.status),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let experience = self
            .experience
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                Ok(Experience {
                    title: required(e.title, || format!("experience[{i}].title"))?,
                    organization: optional(e.organization),
                    duration: optional(e.duration),
                    description: optional(e.description),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let education = self
            .education
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                Ok(Education {
                    degree: required(e.degree, || format!("education[{i}].degree"))?,
                    institution: optional(e.institution),
                    duration: optional(e.duration),
                    description: optional(e.description),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let certificates = self
            .certificates
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                Ok(Certificate {
                    name: required(c.name, || format!("certificates[{i}].name"))?,
                    issuer: optional(c.issuer),
                    date: optional(c.date),
                    url: optional(c.url),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let languages = self
            .languages
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, l)| {
                Ok(Language {
                    language: required(l.language, || format!("languages[{i}].language"))?,
                    level: optional(l.level),
                    description: optional(l.description),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(Record {
            header,
            summary: optional(self.summary),
            skills: self.skills.unwrap_or_default(),
            projects,
            experience,
            education,
            certificates,
            languages,
        })
    }
}

fn required(value: Option<String>, path: impl FnOnce() -> String) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::MissingField(path())),
    }
}

fn present(value: &str, path: impl FnOnce() -> String) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::MissingField(path()))
    } else {
        Ok(())
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
